//! Pairwise transformation summaries for every pattern on a floor

use tracing::debug;

use crate::algorithm::cost::{cost_breakdown, plan_cost};
use crate::algorithm::instructions::generate_instructions;
use crate::catalog::floor::{Floor, Pattern};
use crate::io::error::Result;

/// Estimated and planned cost of one pattern change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairSummary {
    /// Origin pattern code
    pub origin: String,
    /// Destination pattern code
    pub destination: String,
    /// Differing tiles between the two patterns
    pub differences: usize,
    /// Heuristic minimum cost
    pub minimum_cost: u64,
    /// Number of generated instructions
    pub plan_length: usize,
    /// Cost of executing the generated instructions
    pub plan_cost: u64,
}

/// Summarize the change from `origin` to `destination` on `floor`
///
/// # Errors
///
/// Returns `DimensionMismatch` if the pattern grids differ in shape
pub fn summarize_pair(floor: &Floor, origin: &Pattern, destination: &Pattern) -> Result<PairSummary> {
    let differences = origin.grid().count_differences(destination.grid())?;
    let instructions = generate_instructions(origin.grid(), destination.grid())?;

    Ok(PairSummary {
        origin: origin.code().to_string(),
        destination: destination.code().to_string(),
        differences,
        minimum_cost: cost_breakdown(floor.costs(), differences).total,
        plan_length: instructions.len(),
        plan_cost: plan_cost(floor.costs(), &instructions),
    })
}

/// Number of ordered pairs of distinct patterns on `floor`
pub fn pair_count(floor: &Floor) -> usize {
    let n = floor.patterns().len();
    n * n.saturating_sub(1)
}

/// Summaries for every ordered pair of distinct patterns, origin-major
///
/// `on_pair` is called after each summary with the number completed so far.
///
/// # Errors
///
/// Propagates the first pair that fails to summarize
pub fn floor_report(floor: &Floor, mut on_pair: impl FnMut(usize)) -> Result<Vec<PairSummary>> {
    let patterns = floor.patterns();
    let mut summaries = Vec::with_capacity(pair_count(floor));

    for (i, origin) in patterns.iter().enumerate() {
        for (j, destination) in patterns.iter().enumerate() {
            if i == j {
                continue;
            }
            summaries.push(summarize_pair(floor, origin, destination)?);
            on_pair(summaries.len());
        }
    }

    debug!(floor = floor.name(), pairs = summaries.len(), "built floor report");
    Ok(summaries)
}
