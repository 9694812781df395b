//! Read access to upload records
//!
//! Upload rows live in the hosted store and are owned by the ingestion
//! pipeline. The dashboard only ever looks one up by id.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::server::models::upload::UploadRecord;

/// Lookup interface for upload records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UploadStore: Send + Sync {
  /// Fetch the record whose id equals `id`, if any
  async fn find_upload(&self, id: &str) -> Result<Option<UploadRecord>, StoreError>;
}
