//! Minimum-cost estimation for pattern changes on a floor
//!
//! The estimate assumes differing tiles can be resolved two at a time by a
//! single swap, leaving at most one difference for a flip. It never checks
//! that paired differences are adjacent, so it is a lower-bound style estimate
//! rather than an achievable optimum. Generated plans may legitimately cost
//! more; [`plan_cost`] reports what a concrete plan actually costs.

use tracing::debug;

use crate::algorithm::instructions::Instruction;
use crate::io::error::Result;
use crate::spatial::Grid;

/// Per-floor operation prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FloorCosts {
    /// Cost of toggling one tile
    pub flip_cost: u64,
    /// Cost of exchanging two adjacent tiles
    pub swap_cost: u64,
}

impl FloorCosts {
    /// Create a cost table
    pub const fn new(flip_cost: u64, swap_cost: u64) -> Self {
        Self {
            flip_cost,
            swap_cost,
        }
    }
}

/// How the estimate splits a difference count into operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostBreakdown {
    /// Differences resolved in pairs
    pub swaps: usize,
    /// Leftover difference resolved by a flip (0 or 1)
    pub flips: usize,
    /// `swaps * swap_cost + flips * flip_cost`
    pub total: u64,
}

/// Split `difference_count` into swaps and a parity flip and price them
pub const fn cost_breakdown(costs: &FloorCosts, difference_count: usize) -> CostBreakdown {
    let swaps = difference_count / 2;
    let flips = difference_count % 2;
    let total = (swaps as u64)
        .saturating_mul(costs.swap_cost)
        .saturating_add((flips as u64).saturating_mul(costs.flip_cost));

    CostBreakdown {
        swaps,
        flips,
        total,
    }
}

/// Estimated minimum cost of resolving `difference_count` differing tiles
pub const fn minimum_cost(costs: &FloorCosts, difference_count: usize) -> u64 {
    cost_breakdown(costs, difference_count).total
}

/// Estimated minimum cost of turning `source` into `destination`
///
/// # Errors
///
/// Returns `DimensionMismatch` if the grids differ in shape
pub fn minimum_cost_between(costs: &FloorCosts, source: &Grid, destination: &Grid) -> Result<u64> {
    let differences = source.count_differences(destination)?;
    let cost = minimum_cost(costs, differences);
    debug!(differences, cost, "estimated minimum cost");
    Ok(cost)
}

/// Actual cost of executing a plan on a floor
pub fn plan_cost(costs: &FloorCosts, instructions: &[Instruction]) -> u64 {
    instructions.iter().fold(0u64, |total, instruction| {
        let price = match instruction {
            Instruction::Swap { .. } => costs.swap_cost,
            Instruction::Flip { .. } => costs.flip_cost,
        };
        total.saturating_add(price)
    })
}
