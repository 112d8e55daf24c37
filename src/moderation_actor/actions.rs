use crate::model::ModerationStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Transition(ModerationStatus),
}
