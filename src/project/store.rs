use std::collections::HashMap;
use std::io::Read;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::schema::{read_project, DEFAULT_MAX_PROJECT_BYTES};
use crate::error::{ProjectError, Result};

/// Length of generated project identifiers.
pub const DEFAULT_ID_LENGTH: usize = 12;

const ID_ALPHABET: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Where a published project lives and when it was published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub url: String,
    pub timestamp: DateTime<Utc>,
}

/// Storage for published project records, keyed by identifier.
pub trait ProjectStore {
    /// Stores `record` under `id`, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage fails.
    fn put(&mut self, id: &str, record: ProjectRecord) -> Result<()>;

    /// Looks up the record stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::NotFound` if no record exists.
    fn get(&self, id: &str) -> Result<ProjectRecord>;

    /// Returns `true` if a record is stored under `id`.
    fn contains(&self, id: &str) -> bool {
        self.get(id).is_ok()
    }
}

/// In-process [`ProjectStore`].
#[derive(Debug, Default)]
pub struct MemoryProjectStore {
    records: HashMap<String, ProjectRecord>,
}

impl MemoryProjectStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ProjectStore for MemoryProjectStore {
    fn put(&mut self, id: &str, record: ProjectRecord) -> Result<()> {
        self.records.insert(id.to_owned(), record);
        Ok(())
    }

    fn get(&self, id: &str) -> Result<ProjectRecord> {
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| ProjectError::NotFound(id.to_owned()).into())
    }

    fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }
}

/// Generates a random identifier of `length` characters from `[a-z0-9]`.
///
/// # Errors
///
/// Returns `ProjectError::Random` if the OS random source fails.
pub fn generate_id(length: usize) -> Result<String> {
    // 252 = 7 * 36: bytes at or above it are rejected to keep the draw uniform.
    const ACCEPT_BELOW: u8 = 252;
    let mut id = String::with_capacity(length);
    let mut buf = [0u8; 32];
    while id.len() < length {
        getrandom::fill(&mut buf).map_err(|e| ProjectError::Random(e.to_string()))?;
        for &b in buf.iter().filter(|&&b| b < ACCEPT_BELOW) {
            if id.len() == length {
                break;
            }
            id.push(char::from(ID_ALPHABET[usize::from(b % 36)]));
        }
    }
    Ok(id)
}

/// Publishes project documents into a [`ProjectStore`].
///
/// Fetching the document is left to the caller; the publisher only sees
/// the response body as a reader.
pub struct Publisher<S> {
    store: S,
    max_bytes: usize,
}

impl<S: ProjectStore> Publisher<S> {
    /// Creates a publisher with the default size ceiling.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            max_bytes: DEFAULT_MAX_PROJECT_BYTES,
        }
    }

    /// Overrides the size ceiling for downloaded documents.
    #[must_use]
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// The backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates the document read from `body` and records `url` under a
    /// fresh identifier, which is returned.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::Invalid` for a non-HTTP(S) URL, any error from
    /// [`read_project`], or a store error.
    pub fn publish<R: Read>(&mut self, url: &str, body: R) -> Result<String> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ProjectError::Invalid(format!("'{url}' is not an http(s) URL")).into());
        }
        read_project(body, self.max_bytes)?;

        let mut id = generate_id(DEFAULT_ID_LENGTH)?;
        while self.store.contains(&id) {
            id = generate_id(DEFAULT_ID_LENGTH)?;
        }
        let record = ProjectRecord {
            url: url.to_owned(),
            timestamp: Utc::now(),
        };
        self.store.put(&id, record)?;
        info!(%id, url, "project published");
        Ok(id)
    }

    /// Looks up a published project.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::NotFound` if `id` is unknown.
    pub fn fetch(&self, id: &str) -> Result<ProjectRecord> {
        self.store.get(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::LinedrawError;
    use crate::project::schema::tests::SAMPLE;

    #[test]
    fn ids_use_alphabet_and_length() {
        let id = generate_id(DEFAULT_ID_LENGTH).unwrap();
        assert_eq!(id.len(), DEFAULT_ID_LENGTH);
        assert!(id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert_eq!(generate_id(40).unwrap().len(), 40);
        assert!(generate_id(0).unwrap().is_empty());
    }

    #[test]
    fn ids_differ() {
        assert_ne!(generate_id(12).unwrap(), generate_id(12).unwrap());
    }

    #[test]
    fn publish_then_fetch() {
        let mut publisher = Publisher::new(MemoryProjectStore::new());
        let id = publisher
            .publish("https://example.com/p.json", SAMPLE.as_bytes())
            .unwrap();
        let record = publisher.fetch(&id).unwrap();
        assert_eq!(record.url, "https://example.com/p.json");
        assert!(record.timestamp <= Utc::now());
        assert_eq!(publisher.store().len(), 1);
    }

    #[test]
    fn publish_rejects_non_http_url() {
        let mut publisher = Publisher::new(MemoryProjectStore::new());
        let err = publisher
            .publish("file:///etc/passwd", SAMPLE.as_bytes())
            .unwrap_err();
        assert!(matches!(err, LinedrawError::Project(ProjectError::Invalid(_))));
        assert!(publisher.store().is_empty());
    }

    #[test]
    fn publish_rejects_oversized_body() {
        let mut publisher = Publisher::new(MemoryProjectStore::new()).with_max_bytes(16);
        let err = publisher
            .publish("https://example.com/p.json", SAMPLE.as_bytes())
            .unwrap_err();
        assert!(matches!(
            err,
            LinedrawError::Project(ProjectError::TooLarge { limit: 16 })
        ));
        assert!(publisher.store().is_empty());
    }

    #[test]
    fn fetch_unknown_id() {
        let publisher = Publisher::new(MemoryProjectStore::new());
        assert!(matches!(
            publisher.fetch("nope").unwrap_err(),
            LinedrawError::Project(ProjectError::NotFound(_))
        ));
    }
}
