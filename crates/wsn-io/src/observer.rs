//! `RoundLogObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use wsn_routing::{Algorithm, Metrics, RoundResult, SimObserver};

use crate::row::RoundRow;
use crate::writer::OutputWriter;
use crate::{DataError, DataResult};

/// A [`SimObserver`] that streams one [`RoundRow`] per round to any
/// [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After the run returns, check for errors
/// with [`take_error`][Self::take_error].
///
/// The writer is not finished at the end of a run, so one observer can log
/// several runs in sequence; call [`finish`][Self::finish] when done.
pub struct RoundLogObserver<W: OutputWriter> {
    writer:      W,
    algorithm:   Option<Algorithm>,
    total_nodes: usize,
    last_error:  Option<DataError>,
}

impl<W: OutputWriter> RoundLogObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            algorithm:   None,
            total_nodes: 0,
            last_error:  None,
        }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<DataError> {
        self.last_error.take()
    }

    /// Finish the inner writer.  Rows already written are flushed even
    /// when a write failed earlier; the stored error takes precedence over
    /// the flush result.
    pub fn finish(&mut self) -> DataResult<()> {
        let flushed = self.writer.finish();
        match self.last_error.take() {
            Some(e) => Err(e),
            None    => flushed,
        }
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: DataResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for RoundLogObserver<W> {
    fn on_run_start(&mut self, algorithm: Algorithm, total_nodes: usize) {
        self.algorithm = Some(algorithm);
        self.total_nodes = total_nodes;
    }

    fn on_round_end<T>(&mut self, round: &RoundResult<T>) {
        let Some(algorithm) = self.algorithm else {
            return;
        };
        let row = RoundRow::from_round(algorithm, self.total_nodes, round);
        let result = self.writer.write_round(&row);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _algorithm: Algorithm, _metrics: &Metrics) {
        self.algorithm = None;
    }
}
