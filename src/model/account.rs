//! Customer accounts managed from the admin users page.

use crate::framework::Searchable;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Display;

/// Type-safe identifier for Accounts, rendered as `U001`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub u32);

impl From<u32> for AccountId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "U{:03}", self.0)
    }
}

crate::status_enum! {
    /// Account standing. A ban is final but the record is kept.
    pub enum AccountStatus {
        Active = "active" => [Suspended, Banned],
        Suspended = "suspended" => [Active, Banned],
        Banned = "banned" => [],
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: AccountStatus,
    pub total_orders: u32,
    /// Lifetime spend in rupees.
    pub total_spent: u64,
    pub joined: String,
    pub last_active: String,
}

impl Searchable for Account {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            self.name.as_str().into(),
            self.email.as_str().into(),
            self.phone.as_str().into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
}
