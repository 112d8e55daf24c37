use super::actions::AccountAction;
use super::error::AccountError;
use crate::framework::{ActorEntity, StatusTagged};
use crate::model::{Account, AccountCreate, AccountId, AccountStatus, AccountUpdate};
use async_trait::async_trait;

fn validate_email(email: &str) -> Result<(), AccountError> {
    let email = email.trim();
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(AccountError::ValidationError(format!(
            "invalid email address: {email:?}"
        ))),
    }
}

#[async_trait]
impl ActorEntity for Account {
    type Id = AccountId;
    type Create = AccountCreate;
    type Update = AccountUpdate;
    type Action = AccountAction;
    type ActionResult = Account;
    type Context = ();
    type Error = AccountError;

    fn id(&self) -> &AccountId {
        &self.id
    }

    fn from_create_params(id: AccountId, params: AccountCreate) -> Result<Self, AccountError> {
        if params.name.trim().is_empty() {
            return Err(AccountError::ValidationError("name is required".into()));
        }
        validate_email(&params.email)?;

        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            phone: params.phone,
            status: AccountStatus::Active,
            total_orders: 0,
            total_spent: 0,
            joined: "today".into(),
            last_active: "just now".into(),
        })
    }

    async fn on_update(&mut self, update: AccountUpdate, _ctx: &()) -> Result<(), AccountError> {
        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(AccountError::ValidationError("name is required".into()));
            }
            self.name = name;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: AccountAction, _ctx: &()) -> Result<Account, AccountError> {
        match action {
            AccountAction::Transition(to) => {
                self.transition(to)?;
                Ok(self.clone())
            }
        }
    }
}

impl StatusTagged for Account {
    type Status = AccountStatus;

    fn status(&self) -> AccountStatus {
        self.status
    }

    fn set_status(&mut self, status: AccountStatus) {
        self.status = status;
    }

    fn transition_action(to: AccountStatus) -> AccountAction {
        AccountAction::Transition(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(email: &str) -> AccountCreate {
        AccountCreate {
            name: "Zara Ahmed".into(),
            email: email.into(),
            phone: "+92 300 1112223".into(),
        }
    }

    #[test]
    fn new_accounts_are_active() {
        let account = Account::from_create_params(AccountId(6), signup("zara@gmail.com")).unwrap();
        assert_eq!(account.status, AccountStatus::Active);
        assert_eq!(account.id.to_string(), "U006");
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["", "zara", "@gmail.com", "zara@localhost"] {
            assert!(
                Account::from_create_params(AccountId(6), signup(email)).is_err(),
                "{email} accepted"
            );
        }
    }

    #[tokio::test]
    async fn banned_accounts_stay_banned() {
        let mut account = Account::from_create_params(AccountId(6), signup("zara@gmail.com")).unwrap();
        account
            .handle_action(AccountAction::Transition(AccountStatus::Suspended), &())
            .await
            .unwrap();
        account
            .handle_action(AccountAction::Transition(AccountStatus::Banned), &())
            .await
            .unwrap();

        let err = account
            .handle_action(AccountAction::Transition(AccountStatus::Active), &())
            .await
            .unwrap_err();
        assert!(matches!(err, AccountError::IllegalTransition(_)));
        assert_eq!(account.status, AccountStatus::Banned);
    }
}
