use crate::framework::{
    ActorClient, FrameworkError, ListQuery, ResourceClient, StatusFilter, WorkflowClient,
};
use crate::model::{FlagCreate, FlagId, FlaggedContent, ModerationStatus};
use crate::moderation_actor::ModerationError;
use async_trait::async_trait;
use tracing::{info, instrument};

/// Client for interacting with the Moderation actor.
#[derive(Clone)]
pub struct ModerationClient {
    inner: ResourceClient<FlaggedContent>,
}

impl ModerationClient {
    pub fn new(inner: ResourceClient<FlaggedContent>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn file(&self, params: FlagCreate) -> Result<FlagId, ModerationError> {
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(%id, "Content reported to admin for moderation");
        Ok(id)
    }

    /// Keeps the content online and closes the flag.
    #[instrument(skip(self))]
    pub async fn approve(&self, id: FlagId) -> Result<FlaggedContent, ModerationError> {
        let item = self.transition(id, ModerationStatus::Approved).await?;
        info!(%id, "Content Approved");
        Ok(item)
    }

    /// Takes the content down.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: FlagId) -> Result<FlaggedContent, ModerationError> {
        let item = self.transition(id, ModerationStatus::Rejected).await?;
        info!(%id, "Content Removed");
        Ok(item)
    }

    pub async fn queue(
        &self,
        status: StatusFilter<ModerationStatus>,
        search: &str,
    ) -> Result<Vec<FlaggedContent>, ModerationError> {
        self.list(ListQuery::new().status(status).search(search)).await
    }
}

#[async_trait]
impl ActorClient<FlaggedContent> for ModerationClient {
    type Error = ModerationError;

    fn inner(&self) -> &ResourceClient<FlaggedContent> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error(
            ModerationError::NotFound,
            ModerationError::ActorCommunicationError,
        )
    }
}

impl WorkflowClient<FlaggedContent> for ModerationClient {}
