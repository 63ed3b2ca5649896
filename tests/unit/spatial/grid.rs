//! Tests for grid construction, positional access, mutation, and differences

#[cfg(test)]
mod tests {
    use tilefloor::spatial::grid::{Grid, count_differences};
    use tilefloor::spatial::tiles::TileColor::{Black, White};
    use tilefloor::FloorError;

    fn grid(text: &str, rows: usize, cols: usize) -> Grid {
        Grid::parse(text, rows, cols).expect("valid test grid")
    }

    // Tests row-major construction and positional access
    // Verified by transposing the shape passed to the backing array
    #[test]
    fn test_from_rows_preserves_layout() {
        let g = Grid::from_rows(vec![vec![White, Black, Black], vec![Black, White, White]])
            .unwrap();

        assert_eq!(g.dimensions(), (2, 3));
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.at(0, 1).unwrap(), Black);
        assert_eq!(g.at(1, 2).unwrap(), White);
        assert_eq!(g, grid("BNN NBB", 2, 3));
    }

    // Tests empty and ragged input cannot become a grid
    // Verified by dropping the row length check
    #[test]
    fn test_from_rows_rejects_empty_and_ragged() {
        assert!(matches!(
            Grid::from_rows(vec![]),
            Err(FloorError::InvalidGrid { .. })
        ));
        assert!(matches!(
            Grid::from_rows(vec![vec![]]),
            Err(FloorError::InvalidGrid { .. })
        ));

        let err = Grid::from_rows(vec![vec![White, Black], vec![White]]).unwrap_err();
        assert!(err.to_string().contains("row 2 has 1 tiles"), "{err}");
    }

    // Tests the tile count must match the requested dimensions
    // Verified by comparing against rows + cols
    #[test]
    fn test_parse_validates_tile_count() {
        assert!(Grid::parse("NBBN", 2, 2).is_ok());
        assert!(matches!(
            Grid::parse("NBB", 2, 2),
            Err(FloorError::InvalidGrid { .. })
        ));
        assert!(matches!(
            Grid::parse("", 0, 3),
            Err(FloorError::InvalidGrid { .. })
        ));
    }

    // Tests out-of-range access reports the requested cell and the shape
    // Verified by checking only the row bound
    #[test]
    fn test_at_out_of_bounds() {
        let g = grid("NBBN", 2, 2);
        assert_eq!(g.get(2, 0), None);

        match g.at(0, 2) {
            Err(FloorError::CellOutOfBounds {
                row,
                col,
                dimensions,
            }) => {
                assert_eq!((row, col), (0, 2));
                assert_eq!(dimensions, (2, 2));
            }
            other => unreachable!("Expected CellOutOfBounds, got {other:?}"),
        }
    }

    // Tests difference counting is zero for a grid with itself and symmetric
    // Verified by counting matching cells instead of differing ones
    #[test]
    fn test_count_differences_identity_and_symmetry() {
        let a = grid("NNBB BNBN NNNN", 3, 4);
        let b = grid("BNBB BNNN NNNB", 3, 4);

        assert_eq!(a.count_differences(&a).unwrap(), 0);
        assert_eq!(a.count_differences(&b).unwrap(), 3);
        assert_eq!(count_differences(&b, &a).unwrap(), 3);
    }

    // Tests differing shapes are rejected with both dimensions
    // Verified by comparing only row counts
    #[test]
    fn test_count_differences_dimension_mismatch() {
        let a = grid("NBBN", 2, 2);
        let b = grid("NBBNNB", 2, 3);

        match a.count_differences(&b) {
            Err(FloorError::DimensionMismatch {
                source_dimensions,
                destination_dimensions,
            }) => {
                assert_eq!(source_dimensions, (2, 2));
                assert_eq!(destination_dimensions, (2, 3));
            }
            other => unreachable!("Expected DimensionMismatch, got {other:?}"),
        }
        assert!(a.differing_cells(&b).is_err());
    }

    // Tests differing cells are listed in row-major order
    // Verified by iterating column-major
    #[test]
    fn test_differing_cells_row_major() {
        let a = grid("NB BN", 2, 2);
        let b = grid("NN NB", 2, 2);
        assert_eq!(a.differing_cells(&b).unwrap(), vec![(0, 1), (1, 0), (1, 1)]);
    }

    // Tests flip toggles only the addressed tile
    // Verified by flipping the transposed cell
    #[test]
    fn test_flip() {
        let mut g = grid("BB BB", 2, 2);
        g.flip(0, 1).unwrap();
        assert_eq!(g, grid("BN BB", 2, 2));
        assert!(matches!(
            g.flip(2, 0),
            Err(FloorError::CellOutOfBounds { .. })
        ));
    }

    // Tests swap exchanges neighbours and rejects distant or missing cells
    // Verified by allowing diagonal swaps
    #[test]
    fn test_swap() {
        let mut g = grid("NB BB", 2, 2);
        g.swap((0, 0), (0, 1)).unwrap();
        assert_eq!(g, grid("BN BB", 2, 2));
        g.swap((0, 1), (1, 1)).unwrap();
        assert_eq!(g, grid("BB BN", 2, 2));

        assert!(matches!(
            g.swap((0, 0), (1, 1)),
            Err(FloorError::NotAdjacent { .. })
        ));
        assert!(matches!(
            g.swap((1, 1), (1, 2)),
            Err(FloorError::CellOutOfBounds { .. })
        ));
        assert_eq!(g, grid("BB BN", 2, 2), "failed swaps must not mutate");
    }

    // Tests text rendering uses spaces between tiles and newlines between rows
    // Verified by omitting the row separator
    #[test]
    fn test_display() {
        let g = grid("BBN NNB", 2, 3);
        assert_eq!(g.to_string(), "B B N\nN N B");
        assert_eq!(g.to_rows().len(), 2);
    }
}
