use std::collections::{BTreeMap, BTreeSet};

use super::model::{PublisherGroup, Record};

// ---------------------------------------------------------------------------
// value_counts – label frequencies, descending
// ---------------------------------------------------------------------------

/// Count occurrences of each value, sorted by descending count.
///
/// Ties break by value order (the `Ord` of `T`), so the result is
/// deterministic for equal counts.
pub fn value_counts<T: Ord>(values: impl IntoIterator<Item = T>) -> Vec<(T, u64)> {
    let mut counts: BTreeMap<T, u64> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    let mut out: Vec<(T, u64)> = counts.into_iter().collect();
    // Stable sort keeps the BTreeMap value order within equal counts.
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Publication-type frequencies across the whole dataset.
pub fn kind_counts(records: &[Record]) -> Vec<(String, u64)> {
    value_counts(records.iter().map(|r| r.kind.clone()))
}

// ---------------------------------------------------------------------------
// CrossTab – dense two-dimensional count grid
// ---------------------------------------------------------------------------

/// A count table over the full cross-product of two categorical dimensions,
/// with explicit zeros for unobserved combinations.
///
/// Rows and columns are the sorted sets of values observed in the input
/// pairs; `counts` is row-major.
#[derive(Debug, Clone)]
pub struct CrossTab<R, C> {
    row_labels: Vec<R>,
    col_labels: Vec<C>,
    counts: Vec<u64>,
}

impl<R: Ord + Clone, C: Ord + Clone> CrossTab<R, C> {
    /// Build the dense grid from (row, column) observation pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (R, C)>) -> Self {
        let pairs: Vec<(R, C)> = pairs.into_iter().collect();

        let row_labels: Vec<R> = pairs
            .iter()
            .map(|(r, _)| r.clone())
            .collect::<BTreeSet<R>>()
            .into_iter()
            .collect();
        let col_labels: Vec<C> = pairs
            .iter()
            .map(|(_, c)| c.clone())
            .collect::<BTreeSet<C>>()
            .into_iter()
            .collect();

        let mut counts = vec![0u64; row_labels.len() * col_labels.len()];
        for (r, c) in &pairs {
            // Labels came from the pairs themselves, lookups cannot fail.
            let ri = row_labels.binary_search(r).unwrap_or(0);
            let ci = col_labels.binary_search(c).unwrap_or(0);
            counts[ri * col_labels.len() + ci] += 1;
        }

        CrossTab {
            row_labels,
            col_labels,
            counts,
        }
    }

    pub fn row_labels(&self) -> &[R] {
        &self.row_labels
    }

    pub fn col_labels(&self) -> &[C] {
        &self.col_labels
    }

    pub fn is_empty(&self) -> bool {
        self.row_labels.is_empty()
    }

    /// Count at (row index, column index).
    pub fn count(&self, row: usize, col: usize) -> u64 {
        self.counts[row * self.col_labels.len() + col]
    }

    /// Sum across one row (the stacked-bar height of that row).
    pub fn row_total(&self, row: usize) -> u64 {
        let w = self.col_labels.len();
        self.counts[row * w..(row + 1) * w].iter().sum()
    }

    /// Largest single cell, for grouped-bar axis scaling.
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Largest row sum, for stacked-bar axis scaling.
    pub fn max_row_total(&self) -> u64 {
        (0..self.row_labels.len())
            .map(|r| self.row_total(r))
            .max()
            .unwrap_or(0)
    }
}

/// Dense (year, type) grid over all observed years and types.
pub fn year_kind_counts(records: &[Record]) -> CrossTab<i32, String> {
    CrossTab::from_pairs(records.iter().map(|r| (r.year, r.kind.clone())))
}

/// Dense (type, publisher group) grid over observed types and groups.
pub fn kind_publisher_counts(records: &[Record]) -> CrossTab<String, PublisherGroup> {
    CrossTab::from_pairs(records.iter().map(|r| (r.kind.clone(), r.group())))
}

// ---------------------------------------------------------------------------
// Keyword extraction
// ---------------------------------------------------------------------------

/// The multiset of normalized keyword tokens across all records.
///
/// Tokens are split on `;`, trimmed and lower-cased; empty tokens are
/// discarded and records without keywords contribute none.
pub fn keyword_tokens(records: &[Record]) -> Vec<String> {
    let mut tokens = Vec::new();
    for rec in records {
        let Some(raw) = &rec.keywords else { continue };
        for tok in raw.split(';') {
            let tok = tok.trim().to_lowercase();
            if !tok.is_empty() {
                tokens.push(tok);
            }
        }
    }
    tokens
}

/// The `top_n` most frequent keywords, descending. Fewer than `top_n`
/// distinct keywords yields them all.
pub fn top_keywords(records: &[Record], top_n: usize) -> Vec<(String, u64)> {
    let mut counts = value_counts(keyword_tokens(records));
    counts.truncate(top_n);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: &str, year: i32, keywords: Option<&str>) -> Record {
        Record {
            kind: kind.to_string(),
            year,
            publisher: String::new(),
            keywords: keywords.map(str::to_string),
            publisher_group: None,
        }
    }

    #[test]
    fn value_counts_sorts_descending_with_deterministic_ties() {
        let counts = value_counts(vec!["b", "a", "b", "c", "a", "b"]);
        assert_eq!(counts, vec![("b", 3), ("a", 2), ("c", 1)]);

        // Equal counts fall back to value order.
        let tied = value_counts(vec!["z", "m", "a"]);
        assert_eq!(tied, vec![("a", 1), ("m", 1), ("z", 1)]);
    }

    #[test]
    fn crosstab_is_a_dense_grid() {
        let records = vec![
            record("A", 2020, None),
            record("A", 2020, None),
            record("B", 2021, None),
        ];
        let grid = year_kind_counts(&records);

        assert_eq!(grid.row_labels(), &[2020, 2021]);
        assert_eq!(grid.col_labels(), &["A".to_string(), "B".to_string()]);

        // Unobserved combinations are explicit zeros, not absent.
        assert_eq!(grid.count(0, 0), 2); // (2020, A)
        assert_eq!(grid.count(0, 1), 0); // (2020, B)
        assert_eq!(grid.count(1, 0), 0); // (2021, A)
        assert_eq!(grid.count(1, 1), 1); // (2021, B)

        assert_eq!(grid.max_count(), 2);
        assert_eq!(grid.row_total(0), 2);
        assert_eq!(grid.max_row_total(), 2);
    }

    #[test]
    fn crosstab_of_nothing_is_empty() {
        let grid: CrossTab<i32, String> = CrossTab::from_pairs(Vec::new());
        assert!(grid.is_empty());
        assert_eq!(grid.max_count(), 0);
        assert_eq!(grid.max_row_total(), 0);
    }

    #[test]
    fn keywords_are_normalized() {
        let records = vec![record("A", 2020, Some("  Security ; IoT;security"))];
        assert_eq!(keyword_tokens(&records), vec!["security", "iot", "security"]);

        let counts = top_keywords(&records, 15);
        assert_eq!(
            counts,
            vec![("security".to_string(), 2), ("iot".to_string(), 1)]
        );
    }

    #[test]
    fn missing_and_empty_keywords_contribute_nothing() {
        let records = vec![
            record("A", 2020, None),
            record("A", 2020, Some("  ;  ; ")),
        ];
        assert!(keyword_tokens(&records).is_empty());
        assert!(top_keywords(&records, 15).is_empty());
    }

    #[test]
    fn top_n_truncates_only_past_n() {
        let many: Vec<Record> = (0..20)
            .map(|i| record("A", 2020, Some(&format!("kw{i:02}"))))
            .collect();
        assert_eq!(top_keywords(&many, 15).len(), 15);

        let few: Vec<Record> = (0..5)
            .map(|i| record("A", 2020, Some(&format!("kw{i}"))))
            .collect();
        assert_eq!(top_keywords(&few, 15).len(), 5);
    }

    #[test]
    fn publisher_grid_uses_group_order() {
        let mut records = vec![
            record("A", 2020, None),
            record("A", 2020, None),
            record("B", 2020, None),
        ];
        records[0].publisher = "Springer".to_string();
        records[1].publisher = "IEEE".to_string();
        records[2].publisher = "Unknown".to_string();

        let grid = kind_publisher_counts(&records);
        assert_eq!(
            grid.col_labels(),
            &[
                PublisherGroup::Ieee,
                PublisherGroup::Springer,
                PublisherGroup::Other
            ]
        );
        assert_eq!(grid.count(0, 0), 1); // (A, IEEE)
        assert_eq!(grid.count(1, 0), 0); // (B, IEEE) – dense zero
        assert_eq!(grid.count(1, 2), 1); // (B, Other)
    }
}
