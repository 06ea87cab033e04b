//! Search-frequency ledger: a tiny persisted map of the user's most frequent
//! search terms, read back as a personalization signal.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde_json::{Map, Value};

/// Storage entry holding the serialized ledger.
pub const LEDGER_KEY: &str = "jobverse_search_counts";

/// Number of distinct terms the ledger keeps.
pub const LEDGER_CAPACITY: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage io error: {0}")]
    Io(String),
}

/// Device-local string store addressed by key.
pub trait StoragePort: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn store(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local storage, used when nothing survives the session and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Top-K frequency map over an injected [`StoragePort`].
///
/// Every call reads storage afresh; nothing is cached between calls.
/// Unreadable or corrupt content is treated as an empty ledger.
#[derive(Clone)]
pub struct SearchLedger {
    storage: Arc<dyn StoragePort>,
    key: String,
    write_guard: Arc<Mutex<()>>,
}

impl SearchLedger {
    pub fn new(storage: Arc<dyn StoragePort>) -> Self {
        Self::with_key(storage, LEDGER_KEY)
    }

    pub fn with_key(storage: Arc<dyn StoragePort>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            write_guard: Arc::new(Mutex::new(())),
        }
    }

    /// Entries in stored order (highest count first after any write).
    pub fn entries(&self) -> Vec<(String, u64)> {
        let raw = match self.storage.load(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) | Err(_) => return Vec::new(),
        };
        parse_entries(&raw)
    }

    /// Stored terms. Callers should treat the result as a set.
    pub fn top_terms(&self) -> Vec<String> {
        self.entries().into_iter().map(|(term, _)| term).collect()
    }

    /// Counts one search for `term`, keeps the top entries and persists them.
    ///
    /// Blank terms are ignored. Only the write can fail; a failed read
    /// starts from an empty ledger.
    pub fn record(&self, term: &str) -> Result<(), StorageError> {
        let Some(term) = normalize_term(term) else {
            return Ok(());
        };

        // Read-modify-write must not interleave with another record.
        let _guard = self.write_guard.lock().unwrap_or_else(PoisonError::into_inner);

        let mut entries = self.entries();
        match entries.iter_mut().find(|(existing, _)| *existing == term) {
            Some((_, count)) => *count += 1,
            None => entries.push((term, 1)),
        }
        // Stable: equal counts keep their current order.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(LEDGER_CAPACITY);

        let object: Map<String, Value> = entries
            .into_iter()
            .map(|(term, count)| (term, Value::from(count)))
            .collect();
        self.storage
            .store(&self.key, &Value::Object(object).to_string())
    }
}

impl std::fmt::Debug for SearchLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchLedger").field("key", &self.key).finish()
    }
}

/// Trimmed, lower-cased term, or `None` when nothing is left.
pub fn normalize_term(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn parse_entries(raw: &str) -> Vec<(String, u64)> {
    let Ok(Value::Object(object)) = serde_json::from_str::<Value>(raw) else {
        return Vec::new();
    };
    object
        .into_iter()
        .filter_map(|(term, count)| count.as_u64().map(|count| (term, count)))
        .collect()
}
