use super::{email, passwords_match, required, FormError};
use crate::model::AccountCreate;

/// Customer signup form.
#[derive(Debug, Clone, Default)]
pub struct CustomerSignupForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl CustomerSignupForm {
    pub fn submit(&self) -> Result<AccountCreate, FormError> {
        required("Name", &self.name)?;
        required("Email", &self.email)?;
        email(&self.email)?;
        required("Phone number", &self.phone)?;
        passwords_match(&self.password, &self.confirm_password)?;

        Ok(AccountCreate {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone: self.phone.trim().to_string(),
        })
    }
}
