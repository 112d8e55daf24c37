use crate::model::AccountStatus;

/// Admin moderation of a customer account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountAction {
    Transition(AccountStatus),
}
