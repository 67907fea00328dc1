//! `wsn-io` — node loading and round-log export for the wsn_sim simulator.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`loader`]   | `load_nodes_csv`, `load_nodes_reader`                     |
//! | [`row`]      | `RoundRow`, `NetworkStatus`                               |
//! | [`writer`]   | `OutputWriter` trait                                      |
//! | [`csv`]      | `CsvWriter` → `round_log.csv`                             |
//! | [`export`]   | `write_result` for finished runs                          |
//! | [`observer`] | `RoundLogObserver`, streams rows while a run executes     |
//! | [`error`]    | `DataError`, `DataResult`                                 |
//!
//! # Usage
//!
//! ```rust,ignore
//! use wsn_io::{CsvWriter, OutputWriter, load_nodes_csv, write_result};
//!
//! let nodes = load_nodes_csv(Path::new("nodes.csv"))?;
//! let cmp = wsn_routing::compare(&nodes, &leach, &pegasis, 42)?;
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! write_result(&mut writer, &cmp.leach)?;
//! write_result(&mut writer, &cmp.pegasis)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod export;
pub mod loader;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{DataError, DataResult};
pub use export::write_result;
pub use loader::{load_nodes_csv, load_nodes_reader};
pub use observer::RoundLogObserver;
pub use row::{NetworkStatus, RoundRow};
pub use writer::OutputWriter;
