//! CSV output backend.
//!
//! Creates `round_log.csv` in the configured output directory, one row per
//! round per protocol.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DataResult, RoundRow};

/// File name written inside the output directory.
pub const ROUND_LOG_FILE: &str = "round_log.csv";

const HEADER: [&str; 6] = [
    "Round",
    "Algorithm",
    "NodesAlive",
    "EnergyUsageJoules",
    "DataTransmittedBits",
    "NetworkStatus",
];

/// Writes the round log to `round_log.csv`.
pub struct CsvWriter {
    rounds:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open `round_log.csv` and write the header.
    pub fn new(dir: &Path) -> DataResult<Self> {
        std::fs::create_dir_all(dir)?;
        let mut rounds = Writer::from_path(dir.join(ROUND_LOG_FILE))?;
        rounds.write_record(HEADER)?;
        Ok(Self { rounds, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_round(&mut self, row: &RoundRow) -> DataResult<()> {
        self.rounds.write_record(&[
            row.round.to_string(),
            row.algorithm.to_string(),
            row.nodes_alive.to_string(),
            format!("{:.6}", row.energy_usage_joules),
            row.data_transmitted_bits.to_string(),
            row.status.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> DataResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rounds.flush()?;
        Ok(())
    }
}
