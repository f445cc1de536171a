use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Shared string table accumulated across accessors for the process
/// lifetime.
///
/// The table is append-only by merge: entries are never removed, and a
/// later merge overwrites colliding keys. All access goes through an
/// internal read-write lock, so accessors may be constructed and queried
/// from multiple threads.
#[derive(Debug, Default)]
pub struct ResourceTable {
    entries: RwLock<FxHashMap<String, String>>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges pairs into the table, later values overwriting earlier
    /// entries for colliding keys.
    pub fn merge(&self, pairs: impl IntoIterator<Item = (String, String)>) {
        let mut entries = self.entries.write();
        for (key, value) in pairs {
            entries.insert(key, value);
        }
    }

    /// Returns the stored value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Collects `<prefix>.1`, `<prefix>.2`, ... entries in index order,
    /// stopping at the first missing index. A hole terminates enumeration
    /// even when higher indices exist.
    pub fn indexed_entries(&self, prefix: &str) -> Vec<(String, String)> {
        let entries = self.entries.read();
        let mut found = Vec::new();
        for index in 1usize.. {
            let key = format!("{prefix}.{index}");
            match entries.get(&key) {
                Some(value) => found.push((key, value.clone())),
                None => break,
            }
        }
        found
    }
}
