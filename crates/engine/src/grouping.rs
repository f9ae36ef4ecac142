//! Display groups derived from the ledger.
use indexmap::IndexMap;

use crate::{Entry, Ledger, Money};

/// Entries sharing one group label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group<'a> {
    pub label: &'a str,
    pub entries: Vec<&'a Entry>,
}

impl Group<'_> {
    pub fn total(&self) -> Money {
        self.entries.iter().map(|entry| entry.line_total()).sum()
    }
}

/// Gather the ledger entries by [`ItemKey::group_label`](crate::ItemKey::group_label).
///
/// Groups appear in the order their first entry appears in the ledger, and so
/// do the entries inside a group. An ungrouped item is labelled with its own
/// name, so a design shares a group with the extras filed under its name.
/// Groups without entries do not exist.
pub fn groups_of(ledger: &Ledger) -> Vec<Group<'_>> {
    let mut groups: IndexMap<&str, Vec<&Entry>> = IndexMap::new();
    for entry in ledger.entries() {
        groups.entry(entry.key.group_label()).or_default().push(entry);
    }

    groups
        .into_iter()
        .map(|(label, entries)| Group { label, entries })
        .collect()
}
