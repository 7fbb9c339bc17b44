//! Storage backend seam.

use crate::error::PersistenceError;
use crate::record::{NewRecord, RecordId, StoredRecord, User};

/// Append/list access to each user's report collection.
///
/// Callers only invoke these when a user is signed in. Appends are never
/// retried; a failure is reported back to the caller and nothing else.
#[allow(async_fn_in_trait)]
pub trait PersistenceGateway {
    /// Store a new report under `owner`. The backend assigns the id and timestamp.
    async fn append(&self, owner: &User, record: &NewRecord) -> Result<RecordId, PersistenceError>;

    /// Every report belonging to `owner_id`, in arrival order.
    async fn list(&self, owner_id: &str) -> Result<Vec<StoredRecord>, PersistenceError>;
}
