use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Parsed content of one resource file.
///
/// Entries keep their declaration order. Keys are unique: inserting a key
/// again replaces its value but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceRecordSet {
    key_values: Vec<(String, String)>,
    positions: HashMap<String, usize>,
    comments: BTreeMap<String, String>,
}

impl ResourceRecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry together with the comment written above it (`""` for none).
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        comment: impl Into<String>,
    ) {
        let key = key.into();
        let value = value.into();

        match self.positions.get(&key) {
            Some(&index) => self.key_values[index].1 = value,
            None => {
                self.positions.insert(key.clone(), self.key_values.len());
                self.key_values.push((key.clone(), value));
            }
        }
        self.comments.insert(key, comment.into());
    }

    /// Builder form of [`insert`](Self::insert) for an uncommented entry
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value, "");
        self
    }

    pub fn with_commented_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        self.insert(key, value, comment);
        self
    }

    pub fn keys(&self) -> BTreeSet<&str> {
        self.key_values.iter().map(|(key, _)| key.as_str()).collect()
    }

    /// Entries in declaration order
    pub fn key_values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.key_values
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.positions
            .get(key)
            .map(|&index| self.key_values[index].1.as_str())
    }

    pub fn comments(&self) -> &BTreeMap<String, String> {
        &self.comments
    }

    pub fn comment(&self, key: &str) -> Option<&str> {
        self.comments.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.key_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key_values.is_empty()
    }
}
