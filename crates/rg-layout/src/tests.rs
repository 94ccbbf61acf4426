//! Unit tests for rg-layout.

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use rg_core::{Bounds, Cell};

    use crate::{load_targets_reader, validate_targets, LayoutError};

    fn small() -> Bounds {
        Bounds::new(0, 4, 0, 4)
    }

    #[test]
    fn loads_rows_in_order() {
        let csv = "x,z\n0,0\n1,0\n 2 , 3 \n";
        let targets = load_targets_reader(Cursor::new(csv), &small()).unwrap();
        assert_eq!(targets, vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 3)]);
    }

    #[test]
    fn header_only_is_empty_layout() {
        let targets = load_targets_reader(Cursor::new("x,z\n"), &small()).unwrap();
        assert!(targets.is_empty());
    }

    #[test]
    fn negative_coordinates_within_default_bounds() {
        let csv = "x,z\n-2,-2\n42,17\n";
        let targets = load_targets_reader(Cursor::new(csv), &Bounds::default()).unwrap();
        assert_eq!(targets[0], Cell::new(-2, -2));
        assert_eq!(targets[1], Cell::new(42, 17));
    }

    #[test]
    fn rejects_out_of_bounds_row() {
        let csv = "x,z\n0,0\n5,1\n";
        let err = load_targets_reader(Cursor::new(csv), &small()).unwrap_err();
        match err {
            LayoutError::OutOfBounds { row, cell } => {
                assert_eq!(row, 2);
                assert_eq!(cell, Cell::new(5, 1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_duplicate_cell() {
        let csv = "x,z\n1,1\n2,2\n1,1\n";
        let err = load_targets_reader(Cursor::new(csv), &small()).unwrap_err();
        assert!(matches!(err, LayoutError::DuplicateCell { row: 3, first: 1, .. }));
    }

    #[test]
    fn rejects_non_integer_field() {
        let csv = "x,z\n1,one\n";
        let err = load_targets_reader(Cursor::new(csv), &small()).unwrap_err();
        assert!(matches!(err, LayoutError::Parse(_)));
    }

    #[test]
    fn validate_accepts_in_memory_list() {
        let cells = [Cell::new(0, 0), Cell::new(4, 4)];
        assert!(validate_targets(&cells, &small()).is_ok());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = crate::load_targets_csv(
            std::path::Path::new("/nonexistent/targets.csv"),
            &small(),
        )
        .unwrap_err();
        assert!(matches!(err, LayoutError::Io(_)));
    }
}
