//! Storage trait for complaint records.
//!
//! Persistence itself (relational schema, migrations) belongs to the
//! application; the pipeline only needs the operations below. The
//! duplicate-merge resolver walks [`list_complaints`] in whatever order
//! the store provides, so implementations should document their
//! iteration order - first-match dedup is only reproducible when it is
//! stable.
//!
//! [`list_complaints`]: ComplaintStore::list_complaints

use async_trait::async_trait;

use crate::error::Result;
use crate::types::complaint::{Complaint, ComplaintStatus};

/// Store for persisted complaints.
#[async_trait]
pub trait ComplaintStore: Send + Sync {
    /// Get a complaint by code.
    async fn get_complaint(&self, code: &str) -> Result<Option<Complaint>>;

    /// Persist a complaint.
    async fn store_complaint(&self, complaint: &Complaint) -> Result<()>;

    /// All complaints, in the store's iteration order.
    async fn list_complaints(&self) -> Result<Vec<Complaint>>;

    /// Find a complaint with the exact same content hash.
    async fn find_by_content_hash(&self, hash: &str) -> Result<Option<Complaint>>;

    /// Fold duplicate text into an existing complaint.
    ///
    /// The record keeps its code, summary, and classification.
    async fn append_text(&self, code: &str, text: &str) -> Result<()>;

    /// Advance a complaint's lifecycle status, enforcing monotonicity.
    async fn update_status(&self, code: &str, status: ComplaintStatus) -> Result<()>;

    /// Number of stored complaints.
    async fn count_complaints(&self) -> Result<usize> {
        Ok(self.list_complaints().await?.len())
    }

    /// Complaints owned by a user, in the store's iteration order.
    async fn list_complaints_for_user(&self, user_id: &str) -> Result<Vec<Complaint>> {
        Ok(self
            .list_complaints()
            .await?
            .into_iter()
            .filter(|c| c.user_id == user_id)
            .collect())
    }
}
