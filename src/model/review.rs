//! Customer reviews shown on the partner reviews page.

use crate::framework::Searchable;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewId(pub u32);

impl From<u32> for ReviewId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ReviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub customer: String,
    pub restaurant: String,
    /// 1 to 5 stars.
    pub rating: u8,
    pub comment: String,
    pub order_id: String,
    pub date: String,
    pub reply: Option<String>,
    /// Set once the partner has reported the review.
    pub flag_reason: Option<String>,
}

impl Review {
    pub fn is_flagged(&self) -> bool {
        self.flag_reason.is_some()
    }
}

impl Searchable for Review {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![self.customer.as_str().into(), self.comment.as_str().into()]
    }
}

#[derive(Debug, Clone)]
pub struct ReviewCreate {
    pub customer: String,
    pub restaurant: String,
    pub rating: u8,
    pub comment: String,
    pub order_id: String,
}

/// Average score and the 5-to-1 star histogram.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RatingSummary {
    pub count: usize,
    pub average: f32,
    /// `distribution[0]` counts 5-star reviews, `distribution[4]` 1-star.
    pub distribution: [usize; 5],
}

impl RatingSummary {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        if reviews.is_empty() {
            return Self::default();
        }
        let mut distribution = [0usize; 5];
        let mut sum = 0u32;
        for review in reviews {
            sum += u32::from(review.rating);
            if (1..=5).contains(&review.rating) {
                distribution[usize::from(5 - review.rating)] += 1;
            }
        }
        Self {
            count: reviews.len(),
            average: sum as f32 / reviews.len() as f32,
            distribution,
        }
    }

    /// Share of reviews with `stars` stars, in percent.
    pub fn percentage(&self, stars: u8) -> f32 {
        if self.count == 0 || !(1..=5).contains(&stars) {
            return 0.0;
        }
        self.distribution[usize::from(5 - stars)] as f32 * 100.0 / self.count as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(id: u32, rating: u8) -> Review {
        Review {
            id: ReviewId(id),
            customer: format!("Customer {id}"),
            restaurant: "Karachi Biryani House".into(),
            rating,
            comment: String::new(),
            order_id: format!("ORD-{id:03}"),
            date: "today".into(),
            reply: None,
            flag_reason: None,
        }
    }

    #[test]
    fn summary_of_partner_fixture_ratings() {
        let reviews = vec![review(1, 5), review(2, 4), review(3, 3), review(4, 5)];
        let summary = RatingSummary::from_reviews(&reviews);
        assert_eq!(summary.count, 4);
        assert!((summary.average - 4.25).abs() < f32::EPSILON);
        assert_eq!(summary.distribution, [2, 1, 1, 0, 0]);
        assert!((summary.percentage(5) - 50.0).abs() < f32::EPSILON);
        assert_eq!(summary.percentage(1), 0.0);
    }

    #[test]
    fn empty_summary_has_no_average() {
        let summary = RatingSummary::from_reviews(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.percentage(5), 0.0);
    }
}
