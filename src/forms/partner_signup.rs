//! The three-step partner signup wizard: owner info, business info, security.

use super::{email, passwords_match, required, FormError};
use crate::model::{BusinessType, RestaurantCreate};
use tracing::{debug, warn};

pub const LAST_STEP: u8 = 3;

#[derive(Debug, Clone, Default)]
pub struct PartnerSignupForm {
    step: u8,
    // Step 1
    pub owner_name: String,
    pub owner_phone: String,
    pub cnic: String,
    // Step 2
    pub business_name: String,
    pub business_email: String,
    pub business_phone: String,
    pub business_type: Option<BusinessType>,
    // Step 3
    pub password: String,
    pub confirm_password: String,
}

impl PartnerSignupForm {
    pub fn new() -> Self {
        Self {
            step: 1,
            ..Default::default()
        }
    }

    /// Current step, 1 to 3.
    pub fn step(&self) -> u8 {
        self.step.clamp(1, LAST_STEP)
    }

    fn validate_step(&self, step: u8) -> Result<(), FormError> {
        match step {
            1 => {
                required("Owner name", &self.owner_name)?;
                required("Phone number", &self.owner_phone)?;
                required("CNIC number", &self.cnic)
            }
            2 => {
                required("Business name", &self.business_name)?;
                required("Business email", &self.business_email)?;
                email(&self.business_email)?;
                required("Business phone", &self.business_phone)
            }
            _ => passwords_match(&self.password, &self.confirm_password),
        }
    }

    /// Validates the current step and moves forward, stopping at the last step.
    pub fn next_step(&mut self) -> Result<u8, FormError> {
        let step = self.step();
        self.validate_step(step)?;
        self.step = (step + 1).min(LAST_STEP);
        debug!(step = self.step, "Partner signup step");
        Ok(self.step)
    }

    /// Moves back one step, stopping at the first.
    pub fn prev_step(&mut self) -> u8 {
        self.step = self.step().saturating_sub(1).max(1);
        self.step
    }

    /// Submits the application. Only possible from the last step; any failure
    /// leaves the wizard where it is.
    pub fn submit(&self) -> Result<RestaurantCreate, FormError> {
        if self.step() != LAST_STEP {
            return Err(FormError::Incomplete {
                current: self.step(),
                last: LAST_STEP,
            });
        }
        for step in 1..=LAST_STEP {
            if let Err(err) = self.validate_step(step) {
                warn!(step, error = %err, "Partner signup blocked");
                return Err(err);
            }
        }

        Ok(RestaurantCreate {
            name: self.business_name.trim().to_string(),
            owner: self.owner_name.trim().to_string(),
            email: self.business_email.trim().to_string(),
            owner_phone: self.owner_phone.trim().to_string(),
            business_phone: self.business_phone.trim().to_string(),
            cnic: self.cnic.trim().to_string(),
            business_type: self.business_type.unwrap_or(BusinessType::Restaurant),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PartnerSignupForm {
        PartnerSignupForm {
            owner_name: "Usman Shah".into(),
            owner_phone: "+92 300 4445556".into(),
            cnic: "35202-1234567-1".into(),
            business_name: "Lahore Tikka Corner".into(),
            business_email: "usman@ltc.pk".into(),
            business_phone: "+92 42 1234567".into(),
            business_type: Some(BusinessType::Restaurant),
            password: "abc123".into(),
            confirm_password: "abc123".into(),
            ..PartnerSignupForm::new()
        }
    }

    #[test]
    fn steps_are_clamped_to_one_through_three() {
        let mut form = filled();
        assert_eq!(form.prev_step(), 1);
        assert_eq!(form.next_step(), Ok(2));
        assert_eq!(form.next_step(), Ok(3));
        assert_eq!(form.next_step(), Ok(3));
        assert_eq!(form.prev_step(), 2);
    }

    #[test]
    fn next_step_requires_the_current_fields() {
        let mut form = PartnerSignupForm::new();
        assert_eq!(
            form.next_step(),
            Err(FormError::MissingField("Owner name"))
        );
        assert_eq!(form.step(), 1);
    }

    #[test]
    fn submit_before_the_last_step_is_refused() {
        let form = filled();
        assert_eq!(
            form.submit(),
            Err(FormError::Incomplete { current: 1, last: 3 })
        );
    }

    #[test]
    fn password_mismatch_blocks_submission_on_step_three() {
        let mut form = filled();
        form.next_step().unwrap();
        form.next_step().unwrap();
        form.password = "abc123".into();
        form.confirm_password = "xyz789".into();

        assert_eq!(form.submit(), Err(FormError::PasswordMismatch));
        assert_eq!(form.next_step(), Err(FormError::PasswordMismatch));
        assert_eq!(form.step(), 3);
    }

    #[test]
    fn completed_wizard_yields_an_application() {
        let mut form = filled();
        form.business_type = Some(BusinessType::Cafe);
        form.next_step().unwrap();
        form.next_step().unwrap();

        let application = form.submit().unwrap();
        assert_eq!(application.name, "Lahore Tikka Corner");
        assert_eq!(application.owner, "Usman Shah");
        assert_eq!(application.business_type, BusinessType::Cafe);
    }
}
