use std::collections::HashMap;

/// Target of a `[id]: url "title"` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub url: String,
    pub title: Option<String>,
}

/// Link reference definitions collected while scanning one document.
///
/// Ids are matched case-insensitively; a later definition replaces an
/// earlier one with the same id.
#[derive(Debug, Default, Clone)]
pub struct ReferenceTable {
    definitions: HashMap<String, Definition>,
}

impl ReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: &str, definition: Definition) {
        self.definitions.insert(normalize_id(id), definition);
    }

    pub fn get(&self, id: &str) -> Option<&Definition> {
        self.definitions.get(&normalize_id(id))
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn normalize_id(id: &str) -> String {
    id.to_lowercase()
}
