use crate::framework::{
    ActorClient, FrameworkError, ListQuery, ResourceClient, StatusFilter, WorkflowClient,
};
use crate::model::{
    BusinessType, DiscoveryFilter, Restaurant, RestaurantCreate, RestaurantId, RestaurantStatus,
    RestaurantUpdate,
};
use crate::restaurant_actor::RestaurantError;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Restaurant actor.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: ResourceClient<Restaurant>,
}

impl RestaurantClient {
    pub fn new(inner: ResourceClient<Restaurant>) -> Self {
        Self { inner }
    }

    /// Files a partner application; the restaurant starts `pending`.
    #[instrument(skip(self, params))]
    pub async fn apply(&self, params: RestaurantCreate) -> Result<RestaurantId, RestaurantError> {
        debug!(?params, "apply called");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(%id, "Application submitted");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn approve(&self, id: RestaurantId) -> Result<Restaurant, RestaurantError> {
        let restaurant = self.transition(id, RestaurantStatus::Approved).await?;
        info!(%id, name = %restaurant.name, "Restaurant Approved");
        Ok(restaurant)
    }

    #[instrument(skip(self))]
    pub async fn reject(&self, id: RestaurantId) -> Result<Restaurant, RestaurantError> {
        let restaurant = self.transition(id, RestaurantStatus::Rejected).await?;
        info!(%id, name = %restaurant.name, "Restaurant Rejected");
        Ok(restaurant)
    }

    /// Disables an approved restaurant by removing it.
    ///
    /// Returns `false` when the restaurant was already gone.
    #[instrument(skip(self))]
    pub async fn disable(&self, id: RestaurantId) -> Result<bool, RestaurantError> {
        let removed = self.delete(id).await?;
        if removed {
            info!(%id, "Restaurant Disabled");
        }
        Ok(removed)
    }

    /// Partner profile page. Nothing is saved if any field is rejected.
    #[instrument(skip(self, update))]
    pub async fn update_profile(
        &self,
        id: RestaurantId,
        update: RestaurantUpdate,
    ) -> Result<Restaurant, RestaurantError> {
        debug!(?update, "update_profile called");
        let restaurant = self.inner.update(id, update).await.map_err(Self::map_error)?;
        info!(%id, "Profile updated");
        Ok(restaurant)
    }

    /// Customer home page: approved restaurants matching `filter`, in store order.
    #[instrument(skip(self))]
    pub async fn discover(&self, filter: DiscoveryFilter) -> Result<Vec<Restaurant>, RestaurantError> {
        let query = ListQuery::new()
            .status(RestaurantStatus::Approved)
            .with(move |r: &Restaurant| filter.matches(r));
        self.list(query).await
    }

    /// Admin restaurants table: status tab, business type dropdown, search box.
    #[instrument(skip(self))]
    pub async fn admin_view(
        &self,
        status: StatusFilter<RestaurantStatus>,
        business_type: Option<BusinessType>,
        search: &str,
    ) -> Result<Vec<Restaurant>, RestaurantError> {
        let mut query = ListQuery::new().status(status).search(search);
        if let Some(kind) = business_type {
            query = query.with(move |r: &Restaurant| r.business_type == kind);
        }
        self.list(query).await
    }
}

#[async_trait]
impl ActorClient<Restaurant> for RestaurantClient {
    type Error = RestaurantError;

    fn inner(&self) -> &ResourceClient<Restaurant> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error(
            RestaurantError::NotFound,
            RestaurantError::ActorCommunicationError,
        )
    }
}

impl WorkflowClient<Restaurant> for RestaurantClient {}
