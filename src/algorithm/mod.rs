/// Minimum-cost estimation and plan pricing
pub mod cost;
/// Greedy flip and swap instruction generation
pub mod instructions;

pub use cost::{CostBreakdown, FloorCosts, minimum_cost, minimum_cost_between, plan_cost};
pub use instructions::{Instruction, Position, generate_instructions, replay};
