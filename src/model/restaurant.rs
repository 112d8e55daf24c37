//! Restaurant partners and their approval state.
//!
//! A partner application arrives as [`RestaurantCreate`] and enters the store
//! as `pending`. Admins approve or reject it; an approved restaurant can later
//! be disabled, which removes it from the store.
//!
//! Customers only ever see approved restaurants, narrowed by a
//! [`DiscoveryFilter`].

use crate::framework::Searchable;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Display;

/// Type-safe identifier for Restaurants, rendered as `R001`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestaurantId(pub u32);

impl From<u32> for RestaurantId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "R{:03}", self.0)
    }
}

crate::status_enum! {
    /// Approval state of a partner application.
    pub enum RestaurantStatus {
        Pending = "pending" => [Approved, Rejected],
        Approved = "approved" => [Disabled],
        Rejected = "rejected" => [Approved],
        Disabled = "disabled" => [],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessType {
    Restaurant,
    #[serde(rename = "Café")]
    Cafe,
    #[serde(rename = "Home Chef")]
    HomeChef,
}

impl Display for BusinessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            BusinessType::Restaurant => "Restaurant",
            BusinessType::Cafe => "Café",
            BusinessType::HomeChef => "Home Chef",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub owner: String,
    pub email: String,
    pub owner_phone: String,
    pub business_phone: String,
    pub cnic: String,
    pub business_type: BusinessType,
    /// Shown under the name on the customer home page, e.g. `Pakistani`.
    pub cuisine: String,
    /// Free-form labels such as `High Protein` or `Grilled`.
    pub tags: Vec<String>,
    pub status: RestaurantStatus,
    /// Average review score, `0.0` until the first review.
    pub rating: f32,
    pub total_orders: u32,
    /// Lifetime revenue in rupees.
    pub revenue: u64,
    pub joined: String,
}

impl Searchable for Restaurant {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![self.name.as_str().into(), self.owner.as_str().into()]
    }
}

/// A partner application, as produced by the signup wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantCreate {
    pub name: String,
    pub owner: String,
    pub email: String,
    pub owner_phone: String,
    pub business_phone: String,
    pub cnic: String,
    pub business_type: BusinessType,
}

/// Profile edits from the partner portal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub business_phone: Option<String>,
    pub cuisine: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// The customer home page's search box and filter sheet.
///
/// Empty selections match everything. Cuisines and tags compare
/// case-insensitively; a restaurant needs any one of the selected tags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoveryFilter {
    /// Matched against the name and the cuisine.
    pub search: String,
    pub cuisines: Vec<String>,
    pub tags: Vec<String>,
    pub min_rating: f32,
}

impl DiscoveryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisines.push(cuisine.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn min_rating(mut self, rating: f32) -> Self {
        self.min_rating = rating;
        self
    }

    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || restaurant.name.to_lowercase().contains(&needle)
            || restaurant.cuisine.to_lowercase().contains(&needle);
        let matches_cuisine = self.cuisines.is_empty()
            || self
                .cuisines
                .iter()
                .any(|c| c.eq_ignore_ascii_case(&restaurant.cuisine));
        let matches_tags = self.tags.is_empty()
            || restaurant
                .tags
                .iter()
                .any(|tag| self.tags.iter().any(|wanted| wanted.eq_ignore_ascii_case(tag)));

        matches_search && matches_cuisine && matches_tags && restaurant.rating >= self.min_rating
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::Status;

    #[test]
    fn restaurant_ids_render_like_the_admin_table() {
        assert_eq!(RestaurantId(3).to_string(), "R003");
    }

    #[test]
    fn rejected_applications_can_be_reconsidered() {
        assert!(RestaurantStatus::Rejected.can_transition_to(RestaurantStatus::Approved));
        assert!(!RestaurantStatus::Pending.can_transition_to(RestaurantStatus::Disabled));
        assert!(RestaurantStatus::Disabled.is_terminal());
    }

    fn listing(name: &str, cuisine: &str, tags: &[&str], rating: f32) -> Restaurant {
        Restaurant {
            id: RestaurantId(1),
            name: name.into(),
            owner: String::new(),
            email: String::new(),
            owner_phone: String::new(),
            business_phone: String::new(),
            cnic: String::new(),
            business_type: BusinessType::Restaurant,
            cuisine: cuisine.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            status: RestaurantStatus::Approved,
            rating,
            total_orders: 0,
            revenue: 0,
            joined: String::new(),
        }
    }

    #[test]
    fn discovery_filters_combine() {
        let tikka = listing("Lahore Tikka Corner", "BBQ", &["High Protein", "Grilled"], 4.6);

        assert!(DiscoveryFilter::new().matches(&tikka));
        assert!(DiscoveryFilter::new().search("bbq").matches(&tikka));
        assert!(DiscoveryFilter::new().search("tikka").matches(&tikka));
        assert!(DiscoveryFilter::new().cuisine("Pakistani").cuisine("bbq").matches(&tikka));
        assert!(DiscoveryFilter::new().tag("low carb").tag("grilled").matches(&tikka));

        assert!(!DiscoveryFilter::new().cuisine("Healthy").matches(&tikka));
        assert!(!DiscoveryFilter::new().tag("Low Carb").matches(&tikka));
        assert!(!DiscoveryFilter::new().min_rating(4.7).matches(&tikka));
        assert!(!DiscoveryFilter::new().search("tikka").cuisine("Healthy").matches(&tikka));
    }

    #[test]
    fn business_types_keep_their_display_names() {
        assert_eq!(BusinessType::Cafe.to_string(), "Café");
        assert_eq!(BusinessType::HomeChef.to_string(), "Home Chef");
    }
}
