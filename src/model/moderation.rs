//! Reported reviews and menu entries awaiting an admin decision.

use crate::framework::Searchable;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Display;

/// Type-safe identifier for flagged content, rendered as `F001`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlagId(pub u32);

impl From<u32> for FlagId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for FlagId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "F{:03}", self.0)
    }
}

crate::status_enum! {
    /// `Approved` keeps the content online, `Rejected` takes it down.
    pub enum ModerationStatus {
        Pending = "pending" => [Approved, Rejected],
        Approved = "approved" => [],
        Rejected = "rejected" => [],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Review,
    Menu,
}

impl Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ContentKind::Review => "review",
            ContentKind::Menu => "menu",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlaggedContent {
    pub id: FlagId,
    pub kind: ContentKind,
    pub restaurant: String,
    /// Who raised the flag (`User`, `Restaurant Owner`).
    pub reported_by: String,
    pub reason: String,
    pub content: String,
    pub reported_at: String,
    pub status: ModerationStatus,
}

impl Searchable for FlaggedContent {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![self.restaurant.as_str().into(), self.content.as_str().into()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagCreate {
    pub kind: ContentKind,
    pub restaurant: String,
    pub reported_by: String,
    pub reason: String,
    pub content: String,
}
