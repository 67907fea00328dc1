//! The `OutputWriter` trait implemented by round-log backends.

use crate::{DataResult, RoundRow};

/// Sink for round-log rows.
///
/// When driven by [`RoundLogObserver`][crate::RoundLogObserver], errors are
/// stored by the observer and retrieved with `take_error`.
pub trait OutputWriter {
    /// Write one round row.
    fn write_round(&mut self, row: &RoundRow) -> DataResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> DataResult<()>;
}
