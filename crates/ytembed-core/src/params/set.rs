//! Ordered, validated set of embed parameters.

use indexmap::IndexMap;
use serde::Serialize;
use url::form_urlencoded;

use super::ParamName;

/// Embed parameters keyed by name, in first-seen order.
///
/// Only [`build_params`](super::build_params) creates a non-empty set, so every
/// key is whitelisted and every value is non-empty.
#[derive(Debug, Clone, Default, Eq, Serialize)]
#[serde(transparent)]
pub struct ParamSet {
    entries: IndexMap<ParamName, String>,
}

/// Sets are equal only with the same entries in the same order, since order
/// reaches the query string.
impl PartialEq for ParamSet {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl ParamSet {
    /// Inserts or overwrites; an overwritten key keeps its position.
    pub(super) fn set(&mut self, name: ParamName, value: String) {
        self.entries.insert(name, value);
    }

    pub fn get(&self, name: ParamName) -> Option<&str> {
        self.entries.get(&name).map(String::as_str)
    }

    pub fn contains(&self, name: ParamName) -> bool {
        self.entries.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParamName, &str)> + '_ {
        self.entries.iter().map(|(name, value)| (*name, value.as_str()))
    }

    /// `application/x-www-form-urlencoded` query string, in set order.
    /// Empty for an empty set.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in self.iter() {
            serializer.append_pair(name.as_str(), value);
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_position() {
        let mut set = ParamSet::default();
        set.set(ParamName::Autoplay, "0".into());
        set.set(ParamName::Mute, "1".into());
        set.set(ParamName::Autoplay, "1".into());
        let keys: Vec<_> = set.iter().map(|(n, _)| n).collect();
        assert_eq!(keys, vec![ParamName::Autoplay, ParamName::Mute]);
        assert_eq!(set.get(ParamName::Autoplay), Some("1"));
    }

    #[test]
    fn equality_is_order_sensitive() {
        let mut a = ParamSet::default();
        a.set(ParamName::Autoplay, "1".into());
        a.set(ParamName::Mute, "1".into());
        let mut b = ParamSet::default();
        b.set(ParamName::Mute, "1".into());
        b.set(ParamName::Autoplay, "1".into());
        assert_ne!(a.to_query_string(), b.to_query_string());
        assert_ne!(a, b);

        let mut c = ParamSet::default();
        c.set(ParamName::Autoplay, "0".into());
        c.set(ParamName::Mute, "1".into());
        c.set(ParamName::Autoplay, "1".into());
        assert_eq!(a, c);
    }

    #[test]
    fn query_string_encodes_values() {
        let mut set = ParamSet::default();
        set.set(ParamName::Hl, "en US".into());
        set.set(ParamName::Start, "1&end=2".into());
        assert_eq!(set.to_query_string(), "hl=en+US&start=1%26end%3D2");
    }

    #[test]
    fn empty_set_has_empty_query() {
        assert_eq!(ParamSet::default().to_query_string(), "");
    }

    #[test]
    fn serializes_as_ordered_map() {
        let mut set = ParamSet::default();
        set.set(ParamName::Rel, "0".into());
        set.set(ParamName::Autoplay, "1".into());
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"rel":"0","autoplay":"1"}"#);
    }
}
