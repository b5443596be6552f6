use std::fmt;

// ---------------------------------------------------------------------------
// PublisherGroup – derived publisher category
// ---------------------------------------------------------------------------

/// Publisher category derived from the free-text publisher field.
///
/// Ordering follows declaration order (IEEE < Springer < Nature < Other),
/// which is also the segment order in the stacked publisher chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PublisherGroup {
    Ieee,
    Springer,
    Nature,
    Other,
}

impl PublisherGroup {
    /// Categorize a publisher string by substring containment.
    ///
    /// Checks are case-sensitive and ordered; the first match wins, so a
    /// string mentioning both IEEE and Springer is categorized as IEEE.
    pub fn categorize(publisher: &str) -> Self {
        if publisher.contains("IEEE") {
            PublisherGroup::Ieee
        } else if publisher.contains("Springer") {
            PublisherGroup::Springer
        } else if publisher.contains("Nature") {
            PublisherGroup::Nature
        } else {
            PublisherGroup::Other
        }
    }
}

impl fmt::Display for PublisherGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PublisherGroup::Ieee => "IEEE",
            PublisherGroup::Springer => "Springer",
            PublisherGroup::Nature => "Nature",
            PublisherGroup::Other => "Other",
        };
        write!(f, "{label}")
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the source table
// ---------------------------------------------------------------------------

/// A single bibliographic entry (one row of the source CSV).
#[derive(Debug, Clone)]
pub struct Record {
    /// Publication type (the `type` column): e.g. "Article", "Conference".
    pub kind: String,
    /// Publication year (the `year` column).
    pub year: i32,
    /// Free-text publisher name (the `Publisher` column).
    pub publisher: String,
    /// Raw semicolon-delimited keyword list; `None` when the cell is empty.
    pub keywords: Option<String>,
    /// Cached publisher category, filled by
    /// [`Dataset::ensure_publisher_groups`].
    pub publisher_group: Option<PublisherGroup>,
}

impl Record {
    /// The record's publisher category, computing it if not yet cached.
    pub fn group(&self) -> PublisherGroup {
        self.publisher_group
            .unwrap_or_else(|| PublisherGroup::categorize(&self.publisher))
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full loaded dataset, row order preserved from the source file.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fill the `publisher_group` cache on every record.
    ///
    /// Idempotent: records that already carry a group keep it unchanged, so
    /// calling this twice is the same as calling it once.
    pub fn ensure_publisher_groups(&mut self) {
        for rec in &mut self.records {
            if rec.publisher_group.is_none() {
                rec.publisher_group = Some(PublisherGroup::categorize(&rec.publisher));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(publisher: &str) -> Record {
        Record {
            kind: "Article".to_string(),
            year: 2020,
            publisher: publisher.to_string(),
            keywords: None,
            publisher_group: None,
        }
    }

    #[test]
    fn categorize_matches_substrings() {
        assert_eq!(
            PublisherGroup::categorize("IEEE Computer Society"),
            PublisherGroup::Ieee
        );
        assert_eq!(
            PublisherGroup::categorize("Springer International Publishing"),
            PublisherGroup::Springer
        );
        assert_eq!(
            PublisherGroup::categorize("Nature Publishing Group"),
            PublisherGroup::Nature
        );
        assert_eq!(
            PublisherGroup::categorize("Random House"),
            PublisherGroup::Other
        );
    }

    #[test]
    fn categorize_first_match_wins() {
        // IEEE is checked before Springer, so a name matching both is IEEE.
        assert_eq!(
            PublisherGroup::categorize("IEEE/Springer joint imprint"),
            PublisherGroup::Ieee
        );
        assert_eq!(
            PublisherGroup::categorize("Springer Nature"),
            PublisherGroup::Springer
        );
    }

    #[test]
    fn categorize_is_case_sensitive() {
        assert_eq!(PublisherGroup::categorize("ieee"), PublisherGroup::Other);
    }

    #[test]
    fn group_labels() {
        assert_eq!(PublisherGroup::Ieee.to_string(), "IEEE");
        assert_eq!(PublisherGroup::Other.to_string(), "Other");
    }

    #[test]
    fn ensure_publisher_groups_is_idempotent() {
        let mut data = Dataset {
            records: vec![record("IEEE Press"), record("Elsevier")],
        };
        data.ensure_publisher_groups();
        let first: Vec<_> = data.records.iter().map(|r| r.publisher_group).collect();
        assert_eq!(
            first,
            vec![Some(PublisherGroup::Ieee), Some(PublisherGroup::Other)]
        );

        data.ensure_publisher_groups();
        let second: Vec<_> = data.records.iter().map(|r| r.publisher_group).collect();
        assert_eq!(first, second);
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn group_falls_back_to_categorize_when_uncached() {
        let rec = record("Nature Research");
        assert_eq!(rec.publisher_group, None);
        assert_eq!(rec.group(), PublisherGroup::Nature);
    }
}
