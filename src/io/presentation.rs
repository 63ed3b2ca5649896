//! Text rendering of floors, patterns, costs, and instruction lists

use crate::algorithm::cost::CostBreakdown;
use crate::algorithm::instructions::Instruction;
use crate::catalog::{Catalog, Floor, PairSummary};
use crate::spatial::Grid;

/// Render a grid with every row prefixed by `indent`
pub fn render_grid(grid: &Grid, indent: &str) -> String {
    grid.to_string()
        .lines()
        .fold(String::new(), |mut text, line| {
            text.push_str(indent);
            text.push_str(line);
            text.push('\n');
            text
        })
}

/// Render one floor with its prices and every pattern
pub fn render_floor(floor: &Floor) -> String {
    let (rows, cols) = floor.dimensions();
    let costs = floor.costs();
    let mut text = format!(
        "- {} ({rows}x{cols}, flip cost {}, swap cost {})\n",
        floor.name(),
        costs.flip_cost,
        costs.swap_cost
    );

    if floor.patterns().is_empty() {
        text.push_str("  No patterns available\n");
        return text;
    }

    text.push_str("  Patterns available:\n");
    for pattern in floor.patterns() {
        text.push_str("  - Code: ");
        text.push_str(pattern.code());
        text.push('\n');
        text.push_str(&render_grid(pattern.grid(), "      "));
    }
    text
}

/// Render every floor in the catalog
pub fn render_catalog(catalog: &Catalog) -> String {
    if catalog.is_empty() {
        return "No floors available\n".to_string();
    }

    let mut text = String::from("Floors available:\n");
    for floor in catalog.floors() {
        text.push_str(&render_floor(floor));
        text.push('\n');
    }
    text
}

/// Describe an estimated minimum cost
pub fn render_cost(floor: &str, origin: &str, destination: &str, breakdown: &CostBreakdown) -> String {
    format!(
        "The minimum cost to change from pattern {origin} to pattern {destination} on floor {floor} is {}.\n  ({} swap(s), {} flip(s))\n",
        breakdown.total, breakdown.swaps, breakdown.flips
    )
}

/// List instructions one per line, numbered from 1
pub fn render_instructions(
    floor: &str,
    origin: &str,
    destination: &str,
    instructions: &[Instruction],
) -> String {
    if instructions.is_empty() {
        return format!(
            "Patterns {origin} and {destination} on floor {floor} are already identical; no instructions needed.\n"
        );
    }

    let header = format!(
        "Instructions to change from pattern {origin} to pattern {destination} on floor {floor}:\n"
    );
    let width = instructions.len().to_string().len();
    instructions
        .iter()
        .enumerate()
        .fold(header, |mut text, (index, instruction)| {
            text.push_str(&format!("{:>width$}. {instruction}\n", index + 1));
            text
        })
}

/// Tabulate pairwise summaries for one floor
pub fn render_report(floor: &str, summaries: &[PairSummary]) -> String {
    let mut text = format!("Floor {floor}:\n");
    if summaries.is_empty() {
        text.push_str("  Fewer than two patterns; nothing to compare\n");
        return text;
    }

    let origin_width = column_width("from", summaries.iter().map(|s| s.origin.as_str()));
    let destination_width = column_width("to", summaries.iter().map(|s| s.destination.as_str()));
    text.push_str(&format!(
        "  {:<origin_width$}  {:<destination_width$}  {:>5}  {:>8}  {:>5}  {:>9}\n",
        "from", "to", "diffs", "min cost", "steps", "plan cost"
    ));
    for summary in summaries {
        text.push_str(&format!(
            "  {:<origin_width$}  {:<destination_width$}  {:>5}  {:>8}  {:>5}  {:>9}\n",
            summary.origin,
            summary.destination,
            summary.differences,
            summary.minimum_cost,
            summary.plan_length,
            summary.plan_cost
        ));
    }
    text
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values.map(str::len).fold(header.len(), usize::max)
}
