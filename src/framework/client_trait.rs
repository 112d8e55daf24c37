//! # Client Traits
//!
//! [`ActorClient`] gives every domain client `get`, `list_where` and `delete`
//! on top of its inner `ResourceClient`. [`WorkflowClient`] adds the status
//! workflow operations (`transition`, `list`) for status-tagged records.

use crate::framework::search::Searchable;
use crate::framework::workflow::{ListQuery, StatusTagged};
use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for record-specific clients to inherit standard CRUD operations.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The record-specific error type.
    type Error: std::error::Error + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the record's error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Every record accepted by `predicate`, in insertion order.
    async fn list_where<F>(&self, predicate: F) -> Result<Vec<T>, Self::Error>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.inner().list(predicate).await.map_err(Self::map_error)
    }

    /// Delete a record by ID. `Ok(false)` when it was already gone.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<bool, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}

/// Status workflow operations shared by every status-tagged store.
///
/// Records answer a transition with their updated state, hence
/// `ActionResult = T`.
#[async_trait]
pub trait WorkflowClient<T>: ActorClient<T>
where
    T: StatusTagged + Searchable + ActorEntity<ActionResult = T>,
{
    /// Moves record `id` to `to`, failing if the edge is not in the table.
    #[tracing::instrument(skip(self))]
    async fn transition(&self, id: T::Id, to: T::Status) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        let record = self
            .inner()
            .perform_action(id.clone(), T::transition_action(to))
            .await
            .map_err(Self::map_error)?;
        tracing::info!(%id, status = %to, "Status updated");
        Ok(record)
    }

    /// Records matching `query`, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: ListQuery<T>) -> Result<Vec<T>, Self::Error> {
        self.inner()
            .list(move |record| query.matches(record))
            .await
            .map_err(Self::map_error)
    }
}
