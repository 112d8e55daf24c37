use crate::account_actor::AccountError;
use crate::framework::{ActorClient, FrameworkError, ResourceClient, WorkflowClient};
use crate::model::{Account, AccountCreate, AccountId, AccountStatus, AccountUpdate};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Account actor.
#[derive(Clone)]
pub struct AccountClient {
    inner: ResourceClient<Account>,
}

#[async_trait]
impl ActorClient<Account> for AccountClient {
    type Error = AccountError;

    fn inner(&self) -> &ResourceClient<Account> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error(AccountError::NotFound, AccountError::ActorCommunicationError)
    }
}

impl WorkflowClient<Account> for AccountClient {}

impl AccountClient {
    pub fn new(inner: ResourceClient<Account>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn register(&self, params: AccountCreate) -> Result<AccountId, AccountError> {
        debug!(?params, "register called");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(%id, "Account created successfully!");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn update_profile(
        &self,
        id: AccountId,
        update: AccountUpdate,
    ) -> Result<Account, AccountError> {
        let account = self.inner.update(id, update).await.map_err(Self::map_error)?;
        info!(%id, "Profile updated");
        Ok(account)
    }

    #[instrument(skip(self))]
    pub async fn suspend(&self, id: AccountId) -> Result<Account, AccountError> {
        let account = self.transition(id, AccountStatus::Suspended).await?;
        info!(%id, name = %account.name, "User Suspended");
        Ok(account)
    }

    #[instrument(skip(self))]
    pub async fn unsuspend(&self, id: AccountId) -> Result<Account, AccountError> {
        let account = self.transition(id, AccountStatus::Active).await?;
        info!(%id, name = %account.name, "User Unsuspended");
        Ok(account)
    }

    #[instrument(skip(self))]
    pub async fn ban(&self, id: AccountId) -> Result<Account, AccountError> {
        let account = self.transition(id, AccountStatus::Banned).await?;
        info!(%id, name = %account.name, "User Banned");
        Ok(account)
    }
}
