//! ActorEntity trait implementation for the Restaurant domain type.
//!
//! Disabling a restaurant removes it from the store. The `on_delete` hook
//! vetoes the removal unless the restaurant is currently approved, so the
//! `approved → disabled` edge is the only way out.

use super::actions::RestaurantAction;
use super::error::RestaurantError;
use crate::framework::{ActorEntity, Status, StatusTagged};
use crate::model::{Restaurant, RestaurantCreate, RestaurantId, RestaurantStatus, RestaurantUpdate};
use async_trait::async_trait;

fn require(field: &str, value: &str) -> Result<(), RestaurantError> {
    if value.trim().is_empty() {
        return Err(RestaurantError::ValidationError(format!("{field} is required")));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Restaurant {
    type Id = RestaurantId;
    type Create = RestaurantCreate;
    type Update = RestaurantUpdate;
    type Action = RestaurantAction;
    type ActionResult = Restaurant;
    type Context = ();
    type Error = RestaurantError;

    fn id(&self) -> &RestaurantId {
        &self.id
    }

    /// Files a partner application. New restaurants wait for approval.
    fn from_create_params(id: RestaurantId, params: RestaurantCreate) -> Result<Self, RestaurantError> {
        require("restaurant name", &params.name)?;
        require("owner name", &params.owner)?;
        require("business email", &params.email)?;

        Ok(Self {
            id,
            name: params.name,
            owner: params.owner,
            email: params.email,
            owner_phone: params.owner_phone,
            business_phone: params.business_phone,
            cnic: params.cnic,
            business_type: params.business_type,
            cuisine: String::new(),
            tags: Vec::new(),
            status: RestaurantStatus::Pending,
            rating: 0.0,
            total_orders: 0,
            revenue: 0,
            joined: "today".into(),
        })
    }

    async fn on_update(&mut self, update: RestaurantUpdate, _ctx: &()) -> Result<(), RestaurantError> {
        if let Some(name) = &update.name {
            require("restaurant name", name)?;
        }
        if let Some(email) = &update.email {
            require("business email", email)?;
        }
        if let Some(cuisine) = &update.cuisine {
            require("cuisine", cuisine)?;
        }

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.business_phone {
            self.business_phone = phone;
        }
        if let Some(cuisine) = update.cuisine {
            self.cuisine = cuisine;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), RestaurantError> {
        if !self.status.can_transition_to(RestaurantStatus::Disabled) {
            return Err(RestaurantError::NotDisableable {
                id: self.id.to_string(),
                status: self.status,
            });
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: RestaurantAction,
        _ctx: &(),
    ) -> Result<Restaurant, RestaurantError> {
        match action {
            // Disabling goes through delete so the record leaves the store.
            RestaurantAction::Transition(RestaurantStatus::Disabled) => {
                if self.status.can_transition_to(RestaurantStatus::Disabled) {
                    Err(RestaurantError::ValidationError(
                        "disabling removes the restaurant, delete it instead".into(),
                    ))
                } else {
                    Err(RestaurantError::NotDisableable {
                        id: self.id.to_string(),
                        status: self.status,
                    })
                }
            }
            RestaurantAction::Transition(to) => {
                self.transition(to)?;
                Ok(self.clone())
            }
        }
    }
}

impl StatusTagged for Restaurant {
    type Status = RestaurantStatus;

    fn status(&self) -> RestaurantStatus {
        self.status
    }

    fn set_status(&mut self, status: RestaurantStatus) {
        self.status = status;
    }

    fn transition_action(to: RestaurantStatus) -> RestaurantAction {
        RestaurantAction::Transition(to)
    }
}
