//! Identity of a selectable item.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a ledger entry: the pair of optional group and display name.
///
/// Both parts are kept as separate fields, so a name containing `:` (or any
/// other character) can never be confused with a group prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemKey {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    group: Option<String>,
    name: String,
}

impl ItemKey {
    /// Resolve the identity for `name` within the optional `group`.
    ///
    /// Injective over `(name, group)`: two keys are equal iff both parts are.
    pub fn resolve(name: impl Into<String>, group: Option<impl Into<String>>) -> Self {
        Self {
            group: group.map(Into::into),
            name: name.into(),
        }
    }

    /// [`ItemKey::resolve`] for user input: surrounding whitespace is ignored
    /// and a blank group means no group.
    pub fn normalized(name: &str, group: Option<&str>) -> Self {
        let group = group.map(str::trim).filter(|g| !g.is_empty());
        Self::resolve(name.trim(), group)
    }

    /// Key of an item that belongs to no group.
    pub fn ungrouped(name: impl Into<String>) -> Self {
        Self {
            group: None,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Label used to gather the item with others for display: the group when
    /// present, the item name otherwise.
    pub fn group_label(&self) -> &str {
        self.group.as_deref().unwrap_or(&self.name)
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.group {
            Some(group) => write!(f, "{group} / {}", self.name),
            None => f.write_str(&self.name),
        }
    }
}
