use crate::data;
use crate::model::{Topic, TopicKey};

/// Ordered, duplicate-free set of bookmarked topics.
///
/// Owned by the caller and updated by value: `add` consumes the set and returns
/// the new one. Entries are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkSet {
    keys: Vec<TopicKey>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn add(mut self, key: TopicKey) -> Self {
        if !self.contains(key) {
            self.keys.push(key);
        }
        self
    }

    pub fn contains(&self, key: TopicKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Bookmarked topics in the order they were added.
    pub fn topics(&self) -> impl Iterator<Item = &'static Topic> + '_ {
        self.keys.iter().map(|key| data::topic(*key))
    }
}
