// =============================================================================
// Mapea Web - Translation Resolver
// =============================================================================
// Dotted-key lookup over a typed translation tree. Lookups never fail: an
// unresolved key comes back unchanged.
// =============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;

/// A node of a translation tree as loaded from a locale file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TranslationValue {
    Text(String),
    Map(BTreeMap<String, TranslationValue>),
    /// Arrays, numbers, booleans and null. Never resolvable as text.
    Other(serde_json::Value),
}

impl TranslationValue {
    /// An empty branch.
    pub fn empty() -> Self {
        TranslationValue::Map(BTreeMap::new())
    }

    /// Child node for one key segment, if this node is a branch.
    pub fn child(&self, segment: &str) -> Option<&TranslationValue> {
        match self {
            TranslationValue::Map(children) => children.get(segment),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TranslationValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl Default for TranslationValue {
    fn default() -> Self {
        Self::empty()
    }
}

/// Walk `key` segment by segment and return the string leaf it names.
pub fn resolve<'a>(tree: &'a TranslationValue, key: &str) -> Option<&'a str> {
    key.split('.')
        .try_fold(tree, |node, segment| node.child(segment))?
        .as_text()
}

/// Like [`resolve`], but falls back to the key itself.
pub fn translate<'a>(tree: &'a TranslationValue, key: &'a str) -> &'a str {
    resolve(tree, key).unwrap_or(key)
}
