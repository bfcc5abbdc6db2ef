//! Drawing Search Filter
//!
//! Pure derivation of the visible drawing rows from the fetched list and the
//! search box. Both the table body and the "no results" placeholder read from
//! the same [`DrawingView`], so they cannot disagree.

use crate::models::Drawing;

/// Subsequence of `drawings` whose drawing number contains `term`,
/// case-insensitively, source order preserved. The term is trimmed first and a
/// blank term matches everything.
pub fn filter_drawings<'a>(drawings: &'a [Drawing], term: &str) -> Vec<&'a Drawing> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return drawings.iter().collect();
    }
    drawings
        .iter()
        .filter(|d| d.drawing_no.to_lowercase().contains(&needle))
        .collect()
}

/// One table row: 1-based display index plus the record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawingRow {
    pub index: usize,
    pub drawing: Drawing,
}

/// What the search & display table renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawingView {
    /// Single placeholder row
    NoResults,
    Rows(Vec<DrawingRow>),
}

impl DrawingView {
    pub fn build(drawings: &[Drawing], term: &str) -> Self {
        let rows: Vec<DrawingRow> = filter_drawings(drawings, term)
            .into_iter()
            .enumerate()
            .map(|(i, drawing)| DrawingRow {
                index: i + 1,
                drawing: drawing.clone(),
            })
            .collect();
        if rows.is_empty() {
            DrawingView::NoResults
        } else {
            DrawingView::Rows(rows)
        }
    }

    pub fn len(&self) -> usize {
        match self {
            DrawingView::NoResults => 0,
            DrawingView::Rows(rows) => rows.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn make_drawing(id: u32, drawing_no: &str) -> Drawing {
        Drawing {
            id: format!("d{}", id),
            drawing_no: drawing_no.to_string(),
            file_path: format!("uploads/{}.pdf", drawing_no),
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, id).unwrap(),
        }
    }

    fn numbers(drawings: &[&Drawing]) -> Vec<String> {
        drawings.iter().map(|d| d.drawing_no.clone()).collect()
    }

    #[test]
    fn test_trimmed_case_insensitive_match() {
        let drawings = vec![make_drawing(1, "DWG-1"), make_drawing(2, "dwg-2")];
        let result = filter_drawings(&drawings, " dwg");
        assert_eq!(numbers(&result), vec!["DWG-1", "dwg-2"]);
    }

    #[test]
    fn test_blank_term_shows_all() {
        let drawings = vec![make_drawing(1, "B-7"), make_drawing(2, "A-1")];
        assert_eq!(filter_drawings(&drawings, "").len(), 2);
        assert_eq!(filter_drawings(&drawings, "   \t").len(), 2);
    }

    #[test]
    fn test_non_matching_term() {
        let drawings = vec![make_drawing(1, "DWG-1"), make_drawing(2, "PLATE-9")];
        let result = filter_drawings(&drawings, "plate");
        assert_eq!(numbers(&result), vec!["PLATE-9"]);
        assert!(filter_drawings(&drawings, "shaft").is_empty());
    }

    #[test]
    fn test_view_indexes_are_one_based() {
        let drawings = vec![
            make_drawing(1, "X-1"),
            make_drawing(2, "Y-2"),
            make_drawing(3, "X-3"),
        ];
        let DrawingView::Rows(rows) = DrawingView::build(&drawings, "x") else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].drawing.id, "d1");
        assert_eq!(rows[1].index, 2);
        assert_eq!(rows[1].drawing.id, "d3");
    }

    #[test]
    fn test_empty_collection_is_no_results() {
        assert_eq!(DrawingView::build(&[], ""), DrawingView::NoResults);
        assert_eq!(DrawingView::build(&[], "dwg"), DrawingView::NoResults);
        assert_eq!(DrawingView::NoResults.len(), 0);
    }

    #[test]
    fn test_no_match_is_no_results() {
        let drawings = vec![make_drawing(1, "DWG-1")];
        assert_eq!(DrawingView::build(&drawings, "zzz"), DrawingView::NoResults);
    }

    fn arb_drawings() -> impl Strategy<Value = Vec<Drawing>> {
        prop::collection::vec("[A-Za-z0-9 .-]{0,8}", 0..12).prop_map(|nos| {
            nos.iter()
                .enumerate()
                .map(|(i, no)| make_drawing(i as u32, no))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_blank_term_is_identity(drawings in arb_drawings(), pad in "[ \t]{0,3}") {
            let result = filter_drawings(&drawings, &pad);
            prop_assert_eq!(result.len(), drawings.len());
        }

        #[test]
        fn prop_result_is_exact_matching_subsequence(drawings in arb_drawings(), term in "[A-Za-z0-9 -]{0,4}") {
            let needle = term.trim().to_lowercase();
            let expected: Vec<&Drawing> = drawings
                .iter()
                .filter(|d| needle.is_empty() || d.drawing_no.to_lowercase().contains(&needle))
                .collect();
            prop_assert_eq!(filter_drawings(&drawings, &term), expected);
        }

        #[test]
        fn prop_filter_is_idempotent(drawings in arb_drawings(), term in "[A-Za-z0-9 -]{0,4}") {
            let once: Vec<Drawing> = filter_drawings(&drawings, &term).into_iter().cloned().collect();
            let twice: Vec<Drawing> = filter_drawings(&once, &term).into_iter().cloned().collect();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_view_agrees_with_filter(drawings in arb_drawings(), term in "[A-Za-z0-9 -]{0,4}") {
            let view = DrawingView::build(&drawings, &term);
            let filtered = filter_drawings(&drawings, &term);
            prop_assert_eq!(view.len(), filtered.len());
            prop_assert_eq!(view == DrawingView::NoResults, filtered.is_empty());
        }
    }
}
