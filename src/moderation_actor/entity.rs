use super::actions::ModerationAction;
use super::error::ModerationError;
use crate::framework::{ActorEntity, StatusTagged};
use crate::model::{FlagCreate, FlagId, FlaggedContent, ModerationStatus};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for FlaggedContent {
    type Id = FlagId;
    type Create = FlagCreate;
    /// Flags are never edited, only decided.
    type Update = ();
    type Action = ModerationAction;
    type ActionResult = FlaggedContent;
    type Context = ();
    type Error = ModerationError;

    fn id(&self) -> &FlagId {
        &self.id
    }

    fn from_create_params(id: FlagId, params: FlagCreate) -> Result<Self, ModerationError> {
        if params.reason.trim().is_empty() {
            return Err(ModerationError::MissingReason);
        }
        Ok(Self {
            id,
            kind: params.kind,
            restaurant: params.restaurant,
            reported_by: params.reported_by,
            reason: params.reason,
            content: params.content,
            reported_at: "just now".into(),
            status: ModerationStatus::Pending,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), ModerationError> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ModerationAction,
        _ctx: &(),
    ) -> Result<FlaggedContent, ModerationError> {
        match action {
            ModerationAction::Transition(to) => {
                self.transition(to)?;
                Ok(self.clone())
            }
        }
    }
}

impl StatusTagged for FlaggedContent {
    type Status = ModerationStatus;

    fn status(&self) -> ModerationStatus {
        self.status
    }

    fn set_status(&mut self, status: ModerationStatus) {
        self.status = status;
    }

    fn transition_action(to: ModerationStatus) -> ModerationAction {
        ModerationAction::Transition(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContentKind;

    fn flag(reason: &str) -> FlagCreate {
        FlagCreate {
            kind: ContentKind::Review,
            restaurant: "Karachi Biryani House".into(),
            reported_by: "Restaurant Owner".into(),
            reason: reason.into(),
            content: "Total scam!".into(),
        }
    }

    #[test]
    fn a_reason_is_required() {
        assert_eq!(
            FlaggedContent::from_create_params(FlagId(7), flag("   ")),
            Err(ModerationError::MissingReason)
        );
    }

    #[tokio::test]
    async fn decisions_are_final() {
        let mut item = FlaggedContent::from_create_params(FlagId(7), flag("Fake review")).unwrap();
        assert_eq!(item.status, ModerationStatus::Pending);

        item.handle_action(ModerationAction::Transition(ModerationStatus::Rejected), &())
            .await
            .unwrap();
        let again = item
            .handle_action(ModerationAction::Transition(ModerationStatus::Approved), &())
            .await;
        assert!(matches!(again, Err(ModerationError::IllegalTransition(_))));
    }
}
