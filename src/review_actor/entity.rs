//! ActorEntity trait implementation for the Review domain type.
//!
//! The review store depends on the moderation store: flagging a review files
//! a pending [`FlaggedContent`](crate::model::FlaggedContent) record through the
//! [`ModerationClient`] injected as context.

use super::actions::ReviewAction;
use super::error::ReviewError;
use crate::clients::ModerationClient;
use crate::framework::ActorEntity;
use crate::model::{ContentKind, FlagCreate, Review, ReviewCreate, ReviewId};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Review {
    type Id = ReviewId;
    type Create = ReviewCreate;
    /// Customers cannot edit a posted review.
    type Update = ();
    type Action = ReviewAction;
    type ActionResult = Review;
    type Context = ModerationClient;
    type Error = ReviewError;

    fn id(&self) -> &ReviewId {
        &self.id
    }

    fn from_create_params(id: ReviewId, params: ReviewCreate) -> Result<Self, ReviewError> {
        if !(1..=5).contains(&params.rating) {
            return Err(ReviewError::InvalidRating(params.rating));
        }
        if params.customer.trim().is_empty() {
            return Err(ReviewError::ValidationError("customer name is required".into()));
        }
        Ok(Self {
            id,
            customer: params.customer,
            restaurant: params.restaurant,
            rating: params.rating,
            comment: params.comment,
            order_id: params.order_id,
            date: "just now".into(),
            reply: None,
            flag_reason: None,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &ModerationClient) -> Result<(), ReviewError> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ReviewAction,
        moderation: &ModerationClient,
    ) -> Result<Review, ReviewError> {
        match action {
            ReviewAction::Reply(text) => {
                if text.trim().is_empty() {
                    return Err(ReviewError::EmptyReply);
                }
                self.reply = Some(text);
            }
            ReviewAction::Flag { reason } => {
                if reason.trim().is_empty() {
                    return Err(ReviewError::MissingFlagReason);
                }
                if self.is_flagged() {
                    return Err(ReviewError::AlreadyFlagged(self.id.to_string()));
                }
                let flag_id = moderation
                    .file(FlagCreate {
                        kind: ContentKind::Review,
                        restaurant: self.restaurant.clone(),
                        reported_by: "Restaurant Owner".into(),
                        reason: reason.clone(),
                        content: self.comment.clone(),
                    })
                    .await?;
                debug!(review_id = %self.id, %flag_id, "Flag filed");
                self.flag_reason = Some(reason);
            }
        }
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::framework::FrameworkError;
    use crate::model::{FlagId, FlaggedContent};
    use crate::moderation_actor::ModerationError;

    fn review() -> Review {
        Review::from_create_params(
            ReviewId(3),
            ReviewCreate {
                customer: "Bilal Hassan".into(),
                restaurant: "Karachi Biryani House".into(),
                rating: 3,
                comment: "Food was okay but could use more spices.".into(),
                order_id: "ORD-003".into(),
            },
        )
        .unwrap()
    }

    #[test]
    fn ratings_outside_one_to_five_are_rejected() {
        for rating in [0, 6] {
            let params = ReviewCreate {
                customer: "Sara Ali".into(),
                restaurant: "Healthy Bites".into(),
                rating,
                comment: String::new(),
                order_id: "ORD-002".into(),
            };
            assert_eq!(
                Review::from_create_params(ReviewId(1), params),
                Err(ReviewError::InvalidRating(rating))
            );
        }
    }

    #[tokio::test]
    async fn flag_files_a_moderation_record() {
        let mut moderation = MockClient::<FlaggedContent>::new();
        moderation.expect_create().return_ok(FlagId(7));
        let ctx = ModerationClient::new(moderation.client());

        let mut review = review();
        let flagged = review
            .handle_action(
                ReviewAction::Flag {
                    reason: "Offensive language".into(),
                },
                &ctx,
            )
            .await
            .unwrap();

        assert_eq!(flagged.flag_reason.as_deref(), Some("Offensive language"));
        moderation.verify();
    }

    #[tokio::test]
    async fn flag_without_reason_never_reaches_moderation() {
        let moderation = MockClient::<FlaggedContent>::new();
        let ctx = ModerationClient::new(moderation.client());

        let mut review = review();
        let result = review
            .handle_action(ReviewAction::Flag { reason: " ".into() }, &ctx)
            .await;

        assert_eq!(result, Err(ReviewError::MissingFlagReason));
        assert!(!review.is_flagged());
        moderation.verify();
    }

    #[tokio::test]
    async fn moderation_failure_leaves_review_unflagged() {
        let mut moderation = MockClient::<FlaggedContent>::new();
        moderation
            .expect_create()
            .return_err(FrameworkError::ActorClosed);
        let ctx = ModerationClient::new(moderation.client());

        let mut review = review();
        let result = review
            .handle_action(
                ReviewAction::Flag {
                    reason: "Spam".into(),
                },
                &ctx,
            )
            .await;

        assert!(matches!(
            result,
            Err(ReviewError::Moderation(ModerationError::ActorCommunicationError(_)))
        ));
        assert!(!review.is_flagged());
    }

    #[tokio::test]
    async fn empty_reply_is_rejected() {
        let moderation = MockClient::<FlaggedContent>::new();
        let ctx = ModerationClient::new(moderation.client());

        let mut review = review();
        assert_eq!(
            review.handle_action(ReviewAction::Reply(String::new()), &ctx).await,
            Err(ReviewError::EmptyReply)
        );
        let replied = review
            .handle_action(ReviewAction::Reply("Thanks, we'll add more spice!".into()), &ctx)
            .await
            .unwrap();
        assert_eq!(replied.reply.as_deref(), Some("Thanks, we'll add more spice!"));
    }
}
