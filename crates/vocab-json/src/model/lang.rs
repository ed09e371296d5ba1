//! Natural-language maps: flat language-tag to string mappings that travel
//! alongside text-bearing slots under a `<key>Map` wire key.

/// A language tag → string mapping, insertion-ordered.
///
/// Presence of the map on a node (even empty) is significant: a present map
/// is serialized as a JSON object, an absent one emits nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageMap {
    entries: Vec<(String, String)>,
}

impl LanguageMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The language tags present, in insertion order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(tag, _)| tag.as_str())
    }

    /// The value for a tag, or the empty string when absent.
    pub fn get(&self, tag: &str) -> &str {
        self.entries
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// Returns true if the tag has a value.
    pub fn contains(&self, tag: &str) -> bool {
        self.entries.iter().any(|(t, _)| t == tag)
    }

    /// Sets the value for a tag, replacing any previous value.
    pub fn set(&mut self, tag: impl Into<String>, value: impl Into<String>) {
        let tag = tag.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(t, _)| *t == tag) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((tag, value)),
        }
    }

    /// Removes a tag, returning its previous value.
    pub fn remove(&mut self, tag: &str) -> Option<String> {
        let index = self.entries.iter().position(|(t, _)| t == tag)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates (tag, value) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, v)| (t.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_empty() {
        let mut map = LanguageMap::new();
        assert_eq!(map.get("en"), "");
        map.set("en", "hello");
        assert_eq!(map.get("en"), "hello");
        assert_eq!(map.get("fr"), "");
    }

    #[test]
    fn test_set_replaces() {
        let mut map = LanguageMap::new();
        map.set("en", "hello");
        map.set("en", "hi");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("en"), "hi");
    }

    #[test]
    fn test_insertion_order() {
        let mut map = LanguageMap::new();
        map.set("fr", "bonjour");
        map.set("en", "hello");
        map.set("de", "hallo");
        let tags: Vec<_> = map.tags().collect();
        assert_eq!(tags, ["fr", "en", "de"]);
    }

    #[test]
    fn test_remove() {
        let mut map = LanguageMap::new();
        map.set("en", "hello");
        assert_eq!(map.remove("en"), Some("hello".to_string()));
        assert_eq!(map.remove("en"), None);
        assert!(map.is_empty());
    }
}
