use crate::data;
use crate::model::{Insights, Tag, TopicKey};

/// Global insights for `None`, the per-topic entry otherwise.
pub fn insights(topic: Option<TopicKey>) -> Insights {
    match topic {
        None => data::GLOBAL_INSIGHTS,
        Some(key) => data::topic_insights(key),
    }
}

/// Insights for a raw topic key.
///
/// A missing or empty key selects the global view. Any other key that names no
/// topic, whitespace included, yields three empty lists rather than an error.
pub fn insights_for(raw_key: Option<&str>) -> Insights {
    match raw_key {
        None | Some("") => insights(None),
        Some(key) => TopicKey::parse(key).map_or(Insights::EMPTY, |key| insights(Some(key))),
    }
}
