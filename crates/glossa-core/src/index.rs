use std::collections::HashMap;

use crate::entry::Entry;

/// Snapshot of entry id to display name, built once from the concatenated
/// entity sheets and read-only afterwards.
///
/// Insertion follows the fixed sheet order, so a duplicate id resolves to
/// the name of whichever entry came later in that order.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    names: HashMap<String, String>,
}

impl NameIndex {
    #[must_use]
    pub fn build(entries: &[Entry]) -> Self {
        let mut names = HashMap::new();

        for entry in entries {
            if !entry.id.is_empty() {
                names.insert(entry.id.clone(), entry.name.clone());
            }
        }

        Self { names }
    }

    #[must_use]
    pub fn resolve(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
