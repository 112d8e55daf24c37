use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{RatingSummary, Review, ReviewCreate, ReviewId};
use crate::review_actor::{ReviewAction, ReviewError};
use async_trait::async_trait;
use tracing::{info, instrument};

/// Client for interacting with the Review actor.
#[derive(Clone)]
pub struct ReviewClient {
    inner: ResourceClient<Review>,
}

impl ReviewClient {
    pub fn new(inner: ResourceClient<Review>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn post(&self, params: ReviewCreate) -> Result<ReviewId, ReviewError> {
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, text))]
    pub async fn reply(&self, id: ReviewId, text: impl Into<String> + Send) -> Result<Review, ReviewError> {
        let review = self
            .inner
            .perform_action(id, ReviewAction::Reply(text.into()))
            .await
            .map_err(Self::map_error)?;
        info!(%id, "Your reply has been posted");
        Ok(review)
    }

    #[instrument(skip(self, reason))]
    pub async fn flag(&self, id: ReviewId, reason: impl Into<String> + Send) -> Result<Review, ReviewError> {
        let review = self
            .inner
            .perform_action(
                id,
                ReviewAction::Flag {
                    reason: reason.into(),
                },
            )
            .await
            .map_err(Self::map_error)?;
        info!(%id, "The review has been reported to admin for moderation");
        Ok(review)
    }

    /// Reviews for one restaurant, in the order they were posted.
    pub async fn for_restaurant(&self, restaurant: &str) -> Result<Vec<Review>, ReviewError> {
        let restaurant = restaurant.to_string();
        self.list_where(move |review| review.restaurant == restaurant)
            .await
    }

    pub async fn summary(&self, restaurant: &str) -> Result<RatingSummary, ReviewError> {
        let reviews = self.for_restaurant(restaurant).await?;
        Ok(RatingSummary::from_reviews(&reviews))
    }
}

#[async_trait]
impl ActorClient<Review> for ReviewClient {
    type Error = ReviewError;

    fn inner(&self) -> &ResourceClient<Review> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error(ReviewError::NotFound, ReviewError::ActorCommunicationError)
    }
}
