//! Unit tests for wsn-core primitives.

#[cfg(test)]
mod geo {
    use crate::Position;

    #[test]
    fn zero_distance() {
        let p = Position::new(-1.2921, 36.8219);
        assert_eq!(p.distance_km(p), 0.0);
    }

    #[test]
    fn one_degree_latitude_is_111_km() {
        let a = Position::new(10.0, 20.0);
        let b = Position::new(11.0, 20.0);
        assert!((a.distance_km(b) - 111.0).abs() < 1e-9);
    }

    #[test]
    fn longitude_scaled_by_cosine_of_first_latitude() {
        let a = Position::new(60.0, 0.0);
        let b = Position::new(60.0, 1.0);
        // cos(60°) = 0.5
        assert!((a.distance_km(b) - 55.5).abs() < 1e-9, "got {}", a.distance_km(b));
    }

    #[test]
    fn asymmetric_across_latitudes() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(45.0, 1.0);
        let ab = a.distance_km(b);
        let ba = b.distance_km(a);
        assert!(ab > ba, "scale uses the first point's latitude: {ab} vs {ba}");
    }

    #[test]
    fn ranking_is_stable_for_nearby_points() {
        let origin = Position::new(-0.10, 34.75);
        let near = Position::new(-0.11, 34.76);
        let far = Position::new(-0.15, 34.80);
        assert!(origin.distance_km(near) < origin.distance_km(far));
    }
}

#[cfg(test)]
mod node {
    use crate::{ConfigError, Node, NodeRole};

    #[test]
    fn role_parse_is_case_insensitive() {
        assert_eq!("Sensor".parse::<NodeRole>().unwrap(), NodeRole::Sensor);
        assert_eq!(" BASE ".parse::<NodeRole>().unwrap(), NodeRole::Base);
        assert_eq!("relay".parse::<NodeRole>().unwrap(), NodeRole::Relay);
    }

    #[test]
    fn role_parse_rejects_unknown() {
        assert_eq!(
            "gateway".parse::<NodeRole>(),
            Err(ConfigError::UnknownRole("gateway".into()))
        );
    }

    #[test]
    fn constructors_set_role() {
        assert!(Node::base("bs", 0.0, 0.0).is_base());
        assert_eq!(Node::sensor("s1", 0.0, 0.0).role, NodeRole::Sensor);
        assert_eq!(Node::relay("r1", 0.0, 0.0).role, NodeRole::Relay);
    }

    #[test]
    fn display() {
        assert_eq!(NodeRole::Relay.to_string(), "relay");
    }
}

#[cfg(test)]
mod config {
    use crate::{ConfigError, LeachConfig, LeaderSelection, PegasisConfig, RoundConfig};

    #[test]
    fn defaults_match_dashboard() {
        let c = RoundConfig::default();
        assert_eq!(c.round_count, 20);
        assert_eq!(c.initial_energy, 2.0);
        assert_eq!(c.transmit_energy_per_bit, 50e-6);
        assert_eq!(c.receive_energy_per_bit, 25e-6);
        assert_eq!(c.data_size_bits, 4000);
        assert_eq!(LeachConfig::default().cluster_head_probability, 0.2);
        assert_eq!(PegasisConfig::default().leader_selection, LeaderSelection::RoundRobin);
    }

    #[test]
    fn defaults_validate() {
        assert!(LeachConfig::default().validate().is_ok());
        assert!(PegasisConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_rounds_rejected() {
        let c = RoundConfig { round_count: 0, ..RoundConfig::default() };
        assert_eq!(c.validate(), Err(ConfigError::ZeroRounds));
    }

    #[test]
    fn zero_initial_energy_allowed() {
        let c = RoundConfig { initial_energy: 0.0, ..RoundConfig::default() };
        assert!(c.validate().is_ok());
    }

    #[test]
    fn negative_initial_energy_rejected() {
        let c = RoundConfig { initial_energy: -1.0, ..RoundConfig::default() };
        assert_eq!(c.validate(), Err(ConfigError::InvalidInitialEnergy(-1.0)));
    }

    #[test]
    fn non_positive_costs_rejected() {
        let c = RoundConfig { transmit_energy_per_bit: 0.0, ..RoundConfig::default() };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::NonPositiveEnergy { field: "transmit_energy_per_bit", .. })
        ));

        let c = RoundConfig { receive_energy_per_bit: f64::NAN, ..RoundConfig::default() };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::NonPositiveEnergy { field: "receive_energy_per_bit", .. })
        ));

        let c = RoundConfig { data_size_bits: 0, ..RoundConfig::default() };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::NonPositiveEnergy { field: "data_size_bits", .. })
        ));
    }

    #[test]
    fn probability_bounds() {
        let mut c = LeachConfig::default();
        c.cluster_head_probability = 0.0;
        assert!(c.validate().is_ok());
        c.cluster_head_probability = 1.0;
        assert!(c.validate().is_ok());
        c.cluster_head_probability = 1.5;
        assert_eq!(c.validate(), Err(ConfigError::InvalidProbability(1.5)));
    }

    #[test]
    fn leader_selection_display() {
        assert_eq!(LeaderSelection::RoundRobin.to_string(), "roundRobin");
        assert_eq!(LeaderSelection::HighestEnergy.to_string(), "highestEnergy");
    }
}

#[cfg(test)]
mod energy {
    use crate::{EnergyLedger, NodeIndex, NodeRole};

    fn ledger(initial: f64) -> EnergyLedger {
        EnergyLedger::new([NodeRole::Base, NodeRole::Sensor, NodeRole::Sensor], initial)
    }

    #[test]
    fn starts_full() {
        let l = ledger(2.0);
        assert_eq!(l.len(), 3);
        assert!(l.iter().all(|(_, j)| j == 2.0));
        assert_eq!(l.alive_count(), 3);
    }

    #[test]
    fn spend_deducts_and_records() {
        let mut l = ledger(2.0);
        assert_eq!(l.spend(NodeIndex(1), 0.5), 0.5);
        assert_eq!(l.remaining(NodeIndex(1)), 1.5);
        assert_eq!(l.take_round_usage(), vec![(NodeIndex(1), 0.5)]);
        assert!(l.take_round_usage().is_empty(), "usage resets after draining");
    }

    #[test]
    fn spend_clamps_at_zero() {
        let mut l = ledger(1.0);
        assert_eq!(l.spend(NodeIndex(2), 3.0), 1.0);
        assert_eq!(l.remaining(NodeIndex(2)), 0.0);
        assert!(!l.is_alive(NodeIndex(2)));
        assert_eq!(l.alive_count(), 2);
    }

    #[test]
    fn dead_nodes_pay_nothing() {
        let mut l = ledger(1.0);
        l.spend(NodeIndex(1), 1.0);
        assert_eq!(l.spend(NodeIndex(1), 0.25), 0.0);
        assert_eq!(l.remaining(NodeIndex(1)), 0.0);
    }

    #[test]
    fn base_station_never_pays_and_never_dies() {
        let mut l = ledger(0.0);
        assert_eq!(l.spend(NodeIndex(0), 10.0), 0.0);
        assert!(l.is_alive(NodeIndex(0)));
        assert!(!l.is_alive(NodeIndex(1)));
        assert_eq!(l.alive_count(), 1);
    }

    #[test]
    fn usage_reconciles_with_remaining() {
        let mut l = ledger(1.0);
        let before = l.total_remaining();
        let mut recorded = 0.0;
        for cost in [0.3, 0.4, 0.5, 0.9] {
            l.spend(NodeIndex(1), cost);
            l.spend(NodeIndex(2), cost / 2.0);
            recorded += l.take_round_usage().iter().map(|(_, j)| j).sum::<f64>();
        }
        assert!((before - l.total_remaining() - recorded).abs() < 1e-12);
    }

    #[test]
    fn average_includes_base() {
        let mut l = ledger(2.0);
        l.spend(NodeIndex(1), 2.0);
        l.spend(NodeIndex(2), 1.0);
        assert!((l.average_remaining() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_ledger_average_is_zero() {
        let l = EnergyLedger::new(std::iter::empty::<NodeRole>(), 2.0);
        assert!(l.is_empty());
        assert_eq!(l.average_remaining(), 0.0);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        let picks = [10, 20, 30, 40, 50, 60, 70, 80];
        for _ in 0..100 {
            assert_eq!(r1.choose(&picks), r2.choose(&picks));
            assert_eq!(r1.gen_bool(0.5), r2.gen_bool(0.5));
        }
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(7);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let draws = |rng: &mut SimRng| (0..64).map(|_| rng.gen_bool(0.5)).collect::<Vec<_>>();
        assert_ne!(draws(&mut c0), draws(&mut c1));
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        assert!(rng.gen_bool(3.0), "probability is clamped");
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u32; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[9]), Some(&9));
    }
}
