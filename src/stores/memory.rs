//! In-memory complaint store for testing and development.

use std::sync::RwLock;

use async_trait::async_trait;
use indexmap::IndexMap;

use crate::error::{IntakeError, Result};
use crate::traits::store::ComplaintStore;
use crate::types::complaint::{Complaint, ComplaintStatus};

/// In-memory complaint storage.
///
/// Backed by an `IndexMap`, so [`list_complaints`] returns records in
/// insertion order and first-match duplicate resolution is
/// reproducible. Data is lost on restart; not suitable for production.
///
/// [`list_complaints`]: ComplaintStore::list_complaints
pub struct MemoryStore {
    complaints: RwLock<IndexMap<String, Complaint>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            complaints: RwLock::new(IndexMap::new()),
        }
    }

    /// Clear all stored complaints.
    pub fn clear(&self) {
        self.complaints.write().unwrap().clear();
    }

    /// Number of stored complaints (synchronous convenience).
    pub fn len(&self) -> usize {
        self.complaints.read().unwrap().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.complaints.read().unwrap().is_empty()
    }
}

#[async_trait]
impl ComplaintStore for MemoryStore {
    async fn get_complaint(&self, code: &str) -> Result<Option<Complaint>> {
        Ok(self.complaints.read().unwrap().get(code).cloned())
    }

    async fn store_complaint(&self, complaint: &Complaint) -> Result<()> {
        self.complaints
            .write()
            .unwrap()
            .insert(complaint.code.clone(), complaint.clone());
        Ok(())
    }

    async fn list_complaints(&self) -> Result<Vec<Complaint>> {
        Ok(self.complaints.read().unwrap().values().cloned().collect())
    }

    async fn find_by_content_hash(&self, hash: &str) -> Result<Option<Complaint>> {
        Ok(self
            .complaints
            .read()
            .unwrap()
            .values()
            .find(|c| c.content_hash == hash)
            .cloned())
    }

    async fn append_text(&self, code: &str, text: &str) -> Result<()> {
        let mut complaints = self.complaints.write().unwrap();
        let complaint = complaints
            .get_mut(code)
            .ok_or_else(|| IntakeError::ComplaintNotFound {
                code: code.to_string(),
            })?;
        complaint.merge_text(text);
        Ok(())
    }

    async fn update_status(&self, code: &str, status: ComplaintStatus) -> Result<()> {
        let mut complaints = self.complaints.write().unwrap();
        let complaint = complaints
            .get_mut(code)
            .ok_or_else(|| IntakeError::ComplaintNotFound {
                code: code.to_string(),
            })?;
        complaint.advance(status)
    }

    async fn count_complaints(&self) -> Result<usize> {
        Ok(self.complaints.read().unwrap().len())
    }
}
