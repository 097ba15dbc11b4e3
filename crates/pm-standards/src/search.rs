/// Keyword search over the topic table.
///
/// Plain case-insensitive substring containment against the topic key, title and
/// the three standard texts. No ranking, no tokenization; results keep table order.
use tracing::debug;

use crate::data::TOPICS;
use crate::model::{Standard, Tag, Topic};

/// Search the built-in topic table. An empty query yields no results.
pub fn search(query: &str) -> Vec<&'static Topic> {
    search_in(&TOPICS, query)
}

pub fn search_in<'a>(topics: &[&'a Topic], query: &str) -> Vec<&'a Topic> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let matches: Vec<&Topic> = topics
        .iter()
        .copied()
        .filter(|topic| topic_matches(topic, &needle))
        .collect();
    debug!(query, matches = matches.len(), "search complete");
    matches
}

/// Message shown when a non-empty query matched nothing.
pub fn no_results_message(query: &str) -> String {
    format!("No results found for \"{query}\".")
}

fn topic_matches(topic: &Topic, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);
    contains(topic.key.as_str())
        || contains(topic.title)
        || Standard::ALL
            .iter()
            .any(|standard| contains(topic.text(*standard)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TopicKey;

    fn keys(topics: &[&Topic]) -> Vec<TopicKey> {
        topics.iter().map(|t| t.key).collect()
    }

    #[test]
    fn empty_query_returns_nothing() {
        assert!(search("").is_empty());
    }

    #[test]
    fn risk_matches_only_the_risk_topic() {
        assert_eq!(keys(&search("risk")), vec![TopicKey::Risk]);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(keys(&search("RISK")), vec![TopicKey::Risk]);
        assert_eq!(keys(&search("Product-Based")), vec![TopicKey::Planning]);
    }

    #[test]
    fn matches_on_any_standard_text() {
        // Only the PRINCE2 text of the stakeholders topic mentions governance.
        assert_eq!(keys(&search("governance structure")), vec![TopicKey::Stakeholders]);
        // Only the ISO text of the risk topic says "documented".
        assert_eq!(keys(&search("documented")), vec![TopicKey::Risk]);
    }

    #[test]
    fn results_keep_table_order() {
        let results = search("pmbok 7");
        assert_eq!(
            keys(&results),
            vec![TopicKey::Risk, TopicKey::Stakeholders, TopicKey::Planning]
        );
    }

    #[test]
    fn unmatched_query_is_empty() {
        assert!(search("kanban").is_empty());
        assert_eq!(no_results_message("kanban"), "No results found for \"kanban\".");
    }

    #[test]
    fn result_set_equals_containment_filter() {
        for query in ["iso", "plan", "engagement", "tolerance", " ", "x"] {
            let needle = query.to_lowercase();
            let expected: Vec<TopicKey> = TOPICS
                .iter()
                .filter(|t| {
                    [t.key.as_str(), t.title, t.pmbok, t.prince2, t.iso]
                        .iter()
                        .any(|f| f.to_lowercase().contains(&needle))
                })
                .map(|t| t.key)
                .collect();
            assert_eq!(keys(&search(query)), expected, "query {query:?}");
        }
    }

    #[test]
    fn searches_arbitrary_topic_sets() {
        let only = Topic {
            key: TopicKey::Planning,
            title: "Custom",
            pmbok: "alpha",
            prince2: "beta",
            iso: "gamma",
        };
        let topics = [&only];
        assert_eq!(search_in(&topics, "BETA").len(), 1);
        assert!(search_in(&topics, "delta").is_empty());
        assert_eq!(search_in(&topics, "planning").len(), 1);
    }
}
