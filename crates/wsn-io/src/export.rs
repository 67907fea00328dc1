//! Export of a finished run.

use wsn_routing::SimulationResult;

use crate::{DataResult, OutputWriter, RoundRow};

/// Write every round of `result` to `writer`.  Does not call `finish`, so
/// several runs can share one writer.
pub fn write_result<W, T>(writer: &mut W, result: &SimulationResult<T>) -> DataResult<()>
where
    W: OutputWriter + ?Sized,
{
    for round in &result.rounds {
        writer.write_round(&RoundRow::from_round(result.algorithm, result.total_nodes, round))?;
    }
    Ok(())
}
