/// Side-by-side comparison table, one row per topic.
use crate::data::{self, TOPICS};
use crate::insights;
use crate::model::{Insights, Standard, Tag, Topic, TopicKey};

/// Heading of the first column; the others come from [`Standard::label`].
pub const TOPIC_COLUMN: &str = "Topic";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonTable {
    pub rows: Vec<&'static Topic>,
}

impl ComparisonTable {
    pub fn columns(&self) -> Vec<&'static str> {
        std::iter::once(TOPIC_COLUMN)
            .chain(Standard::ALL.iter().map(|standard| standard.label()))
            .collect()
    }

    /// Position of the row for `key`.
    pub fn position(&self, key: TopicKey) -> Option<usize> {
        self.rows.iter().position(|row| row.key == key)
    }
}

/// Projection of the full topic table. Never filtered or sorted.
pub fn build_comparison() -> ComparisonTable {
    ComparisonTable {
        rows: TOPICS.to_vec(),
    }
}

/// Where a "jump to comparison row" action lands, with the insights it refreshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub row_index: usize,
    pub topic: &'static Topic,
    pub insights: Insights,
}

/// Resolve a navigation request. Unknown keys are a no-op (`None`).
pub fn navigate(raw_key: &str) -> Option<Navigation> {
    let key = TopicKey::parse(raw_key)?;
    let row_index = build_comparison().position(key)?;
    Some(Navigation {
        row_index,
        topic: data::topic(key),
        insights: insights::insights(Some(key)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_per_topic_in_table_order() {
        let table = build_comparison();
        assert_eq!(table.rows.len(), TopicKey::ALL.len());
        let keys: Vec<TopicKey> = table.rows.iter().map(|r| r.key).collect();
        assert_eq!(keys, TopicKey::ALL);
    }

    #[test]
    fn table_is_unaffected_by_search() {
        let before = build_comparison();
        let _ = crate::search::search("risk");
        assert_eq!(build_comparison(), before);
    }

    #[test]
    fn columns_are_topic_then_standards() {
        assert_eq!(
            build_comparison().columns(),
            vec!["Topic", "PMBOK 7", "PRINCE2", "ISO 21500/21502"]
        );
    }

    #[test]
    fn navigate_known_topic() {
        let nav = navigate("planning").expect("planning is a known topic");
        assert_eq!(nav.row_index, 2);
        assert_eq!(nav.topic.title, "Planning / Tailoring");
        assert_eq!(nav.insights, data::topic_insights(TopicKey::Planning));
    }

    #[test]
    fn navigate_unknown_topic_is_noop() {
        assert!(navigate("budget").is_none());
        assert!(navigate("").is_none());
        assert!(navigate(" planning ").is_none());
        assert!(navigate("Planning").is_none());
    }
}
