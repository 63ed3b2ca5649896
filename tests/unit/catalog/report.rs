//! Tests for pairwise floor summaries

#[cfg(test)]
mod tests {
    use tilefloor::Grid;
    use tilefloor::algorithm::cost::FloorCosts;
    use tilefloor::catalog::floor::{Floor, Pattern};
    use tilefloor::catalog::report::{floor_report, pair_count, summarize_pair};

    fn floor_with(patterns: &[(&str, &str)]) -> Floor {
        let mut floor = Floor::new("lobby", 2, 2, FloorCosts::new(5, 3)).unwrap();
        for (code, tiles) in patterns {
            let grid = Grid::parse(tiles, 2, 2).unwrap();
            floor.add_pattern(Pattern::new(*code, grid)).unwrap();
        }
        floor
    }

    // Tests a summary carries both the estimate and the real plan
    // Verified by pricing the plan with the flip cost only
    #[test]
    fn test_summarize_pair() {
        let floor = floor_with(&[("a", "BBNN"), ("b", "NBBN")]);
        let patterns = floor.patterns();
        let summary =
            summarize_pair(&floor, patterns.first().unwrap(), patterns.get(1).unwrap()).unwrap();

        assert_eq!(summary.origin, "a");
        assert_eq!(summary.destination, "b");
        assert_eq!(summary.differences, 2);
        assert_eq!(summary.minimum_cost, 3);
        assert_eq!(summary.plan_length, 1);
        assert_eq!(summary.plan_cost, 3);
    }

    // Tests the plan can cost more than the estimate when differences are
    // not adjacent
    // Verified by reporting the estimate as the plan cost
    #[test]
    fn test_plan_may_exceed_estimate() {
        let floor = floor_with(&[("a", "BBBB"), ("b", "NBBN")]);
        let patterns = floor.patterns();
        let summary =
            summarize_pair(&floor, patterns.first().unwrap(), patterns.get(1).unwrap()).unwrap();

        assert_eq!(summary.minimum_cost, 3);
        assert_eq!(summary.plan_length, 2);
        assert_eq!(summary.plan_cost, 10);
    }

    // Tests every ordered pair of distinct patterns is covered, origin-major
    // Verified by skipping reversed pairs
    #[test]
    fn test_floor_report_covers_ordered_pairs() {
        let floor = floor_with(&[("a", "BBNN"), ("b", "NBBN"), ("c", "NNNN")]);
        assert_eq!(pair_count(&floor), 6);

        let mut ticks = Vec::new();
        let report = floor_report(&floor, |completed| ticks.push(completed)).unwrap();

        let pairs: Vec<(&str, &str)> = report
            .iter()
            .map(|s| (s.origin.as_str(), s.destination.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("a", "b"),
                ("a", "c"),
                ("b", "a"),
                ("b", "c"),
                ("c", "a"),
                ("c", "b")
            ]
        );
        assert_eq!(ticks, vec![1, 2, 3, 4, 5, 6]);
    }

    // Tests floors with fewer than two patterns have nothing to compare
    // Verified by including self-pairs
    #[test]
    fn test_floor_report_single_pattern() {
        let floor = floor_with(&[("a", "BBNN")]);
        assert_eq!(pair_count(&floor), 0);
        assert!(floor_report(&floor, |_| {}).unwrap().is_empty());
    }
}
