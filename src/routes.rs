//! The client-side route table.
//!
//! `:id` and `:orderId` segments are opaque strings handed to the view as-is.
//! Any path not in the table resolves to [`Route::NotFound`]. `/admin` on its
//! own is the admin shell with no page selected.

use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Portal {
    Public,
    Customer,
    Partner,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    UserLogin,
    UserSignup,
    PartnerLogin,
    PartnerSignup,
    AdminLogin,

    UserHome,
    RestaurantMenu { id: String },
    Cart,
    DietaryPlan,
    Chatbot,
    UserProfile,
    Delivery,
    Pickup,
    Restaurants,
    OrderTracking { order_id: String },
    HelpCenter,

    PartnerDashboard,
    PartnerProfile,
    PartnerMenu,
    PartnerOrders,
    PartnerReviews,
    PartnerHelp,

    /// The admin sidebar and header around an empty content area.
    AdminLayout,
    AdminDashboard,
    AdminUsers,
    AdminRestaurants,
    AdminOrders,
    AdminModeration,

    NotFound(String),
}

impl Route {
    /// Resolves a path. Query strings, fragments and a trailing slash are ignored.
    pub fn parse(path: &str) -> Route {
        let bare = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = bare.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Landing,
            ["user", "login"] => Route::UserLogin,
            ["user", "signup"] => Route::UserSignup,
            ["partner", "login"] => Route::PartnerLogin,
            ["partner", "signup"] => Route::PartnerSignup,
            ["admin", "login"] => Route::AdminLogin,

            ["user", "home"] => Route::UserHome,
            ["user", "restaurant", id] => Route::RestaurantMenu { id: id.to_string() },
            ["user", "cart"] => Route::Cart,
            ["user", "dietary-plan"] => Route::DietaryPlan,
            ["user", "chatbot"] => Route::Chatbot,
            ["user", "profile"] => Route::UserProfile,
            ["user", "delivery"] => Route::Delivery,
            ["user", "pickup"] => Route::Pickup,
            ["user", "restaurants"] => Route::Restaurants,
            ["user", "order", order_id] => Route::OrderTracking {
                order_id: order_id.to_string(),
            },
            ["user", "help"] => Route::HelpCenter,

            ["partner", "dashboard"] => Route::PartnerDashboard,
            ["partner", "profile"] => Route::PartnerProfile,
            ["partner", "menu"] => Route::PartnerMenu,
            ["partner", "orders"] => Route::PartnerOrders,
            ["partner", "reviews"] => Route::PartnerReviews,
            ["partner", "help"] => Route::PartnerHelp,

            ["admin"] => Route::AdminLayout,
            ["admin", "dashboard"] => Route::AdminDashboard,
            ["admin", "users"] => Route::AdminUsers,
            ["admin", "restaurants"] => Route::AdminRestaurants,
            ["admin", "orders"] => Route::AdminOrders,
            ["admin", "moderation"] => Route::AdminModeration,

            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn portal(&self) -> Portal {
        match self {
            Route::Landing
            | Route::UserLogin
            | Route::UserSignup
            | Route::PartnerLogin
            | Route::PartnerSignup
            | Route::AdminLogin
            | Route::NotFound(_) => Portal::Public,
            Route::UserHome
            | Route::RestaurantMenu { .. }
            | Route::Cart
            | Route::DietaryPlan
            | Route::Chatbot
            | Route::UserProfile
            | Route::Delivery
            | Route::Pickup
            | Route::Restaurants
            | Route::OrderTracking { .. }
            | Route::HelpCenter => Portal::Customer,
            Route::PartnerDashboard
            | Route::PartnerProfile
            | Route::PartnerMenu
            | Route::PartnerOrders
            | Route::PartnerReviews
            | Route::PartnerHelp => Portal::Partner,
            Route::AdminLayout
            | Route::AdminDashboard
            | Route::AdminUsers
            | Route::AdminRestaurants
            | Route::AdminOrders
            | Route::AdminModeration => Portal::Admin,
        }
    }
}

impl FromStr for Route {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Route::parse(s))
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let path = match self {
            Route::Landing => "/",
            Route::UserLogin => "/user/login",
            Route::UserSignup => "/user/signup",
            Route::PartnerLogin => "/partner/login",
            Route::PartnerSignup => "/partner/signup",
            Route::AdminLogin => "/admin/login",
            Route::UserHome => "/user/home",
            Route::RestaurantMenu { id } => return write!(f, "/user/restaurant/{id}"),
            Route::Cart => "/user/cart",
            Route::DietaryPlan => "/user/dietary-plan",
            Route::Chatbot => "/user/chatbot",
            Route::UserProfile => "/user/profile",
            Route::Delivery => "/user/delivery",
            Route::Pickup => "/user/pickup",
            Route::Restaurants => "/user/restaurants",
            Route::OrderTracking { order_id } => return write!(f, "/user/order/{order_id}"),
            Route::HelpCenter => "/user/help",
            Route::PartnerDashboard => "/partner/dashboard",
            Route::PartnerProfile => "/partner/profile",
            Route::PartnerMenu => "/partner/menu",
            Route::PartnerOrders => "/partner/orders",
            Route::PartnerReviews => "/partner/reviews",
            Route::PartnerHelp => "/partner/help",
            Route::AdminLayout => "/admin",
            Route::AdminDashboard => "/admin/dashboard",
            Route::AdminUsers => "/admin/users",
            Route::AdminRestaurants => "/admin/restaurants",
            Route::AdminOrders => "/admin/orders",
            Route::AdminModeration => "/admin/moderation",
            Route::NotFound(path) => path.as_str(),
        };
        f.write_str(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameterised_routes_keep_their_segment() {
        assert_eq!(
            Route::parse("/user/restaurant/R001"),
            Route::RestaurantMenu { id: "R001".into() }
        );
        assert_eq!(
            Route::parse("/user/order/ORD-003?tab=map"),
            Route::OrderTracking {
                order_id: "ORD-003".into()
            }
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(
            Route::parse("/user/order-confirmation"),
            Route::NotFound("/user/order-confirmation".into())
        );
        assert_eq!(
            Route::parse("/user/restaurant"),
            Route::NotFound("/user/restaurant".into())
        );
    }

    #[test]
    fn bare_admin_path_is_the_layout() {
        assert_eq!(Route::parse("/admin"), Route::AdminLayout);
        assert_eq!(Route::parse("/admin/"), Route::AdminLayout);
        assert_eq!(Route::AdminLayout.portal(), Portal::Admin);
        assert_eq!(Route::AdminLayout.to_string(), "/admin");
        assert_eq!(
            Route::parse("/partner"),
            Route::NotFound("/partner".into())
        );
    }

    #[test]
    fn display_renders_the_path_back() {
        for path in [
            "/",
            "/user/login",
            "/user/dietary-plan",
            "/user/restaurant/7",
            "/partner/orders",
            "/admin/moderation",
        ] {
            assert_eq!(Route::parse(path).to_string(), path);
        }
        assert_eq!(Route::parse("/partner/menu/").to_string(), "/partner/menu");
    }

    #[test]
    fn routes_belong_to_a_portal() {
        assert_eq!(Route::parse("/admin/orders").portal(), Portal::Admin);
        assert_eq!(Route::parse("/partner/reviews").portal(), Portal::Partner);
        assert_eq!(Route::parse("/user/cart").portal(), Portal::Customer);
        assert_eq!(Route::parse("/admin/login").portal(), Portal::Public);
    }
}
