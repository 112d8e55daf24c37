//! # NutriOrder demo
//!
//! Walks one session through each portal against the seeded stores:
//!
//! 1. A customer finds a restaurant, plans a meal, fills a cart and places
//!    an order.
//! 2. The partner accepts it, moves the kitchen queue along and answers
//!    reviews.
//! 3. The admin reviews applications, users, flagged content and the
//!    orders table.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use nutri_order::checkout::{Cart, CustomerDetails};
use nutri_order::config::AppConfig;
use nutri_order::framework::{StatusFilter, WorkflowClient};
use nutri_order::lifecycle::tracing::setup_tracing;
use nutri_order::lifecycle::{spawn_demo_progress, PlatformSystem};
use nutri_order::model::{
    AccountId, Availability, DiscoveryFilter, Eta, FlagId, ModerationStatus, OrderId, OrderStatus,
    PaymentMethod, RestaurantId, RestaurantStatus, ReviewId,
};
use nutri_order::planner::{Meal, MealSlot, Weekday};
use nutri_order::seed;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = AppConfig::from_env()?;
    info!(?config, "Starting NutriOrder");

    let system = PlatformSystem::start(&config).await?;

    // Customer: discovery → meal plan → cart → checkout → tracking
    let span = tracing::info_span!("customer");
    let placed = async {
        let nearby = system
            .restaurant_client
            .discover(DiscoveryFilter::new().tag("High Protein"))
            .await?;
        info!(count = nearby.len(), "High protein restaurants");

        let dishes = system
            .menu_client
            .browse(StatusFilter::Only(Availability::Available), None, "")
            .await?;

        let mut plan = seed::meal_plan();
        if let Some(dish) = dishes.first() {
            plan.save_meal(Weekday::Thu, MealSlot::Dinner, Meal::from(dish))?;
        }
        let progress = plan.progress(Weekday::Thu);
        info!(
            week_calories = plan.week_total().calories,
            thursday_calories = %format!("{:.0}%", progress.calories),
            "Meal plan updated"
        );

        let mut cart = Cart::new(config.pricing());
        for dish in dishes.iter().take(2) {
            cart.add(dish, "Karachi Biryani House")?;
        }
        info!(
            subtotal = cart.subtotal(),
            tax = cart.tax(),
            total = cart.total(),
            calories = cart.total_calories(),
            "Cart ready"
        );

        let details = CustomerDetails {
            name: "Zara Ahmed".into(),
            phone: "+92 300 1112223".into(),
            address: "House 12, Street 4, DHA Phase 5, Karachi".into(),
        };
        let order = cart.checkout(&details, PaymentMethod::Card, None)?;
        let id = system.order_client.place_order(order).await?;
        cart.clear();
        Ok::<_, Box<dyn std::error::Error>>(id)
    }
    .instrument(span)
    .await?;

    // Partner: accept the new order, move the queue, answer reviews
    let span = tracing::info_span!("partner_dashboard");
    async {
        let orders = &system.order_client;
        orders.accept(placed, Eta::new(20, 30)).await?;
        orders.accept(OrderId(6), Eta::new(25, 35)).await?;
        orders.advance(OrderId(7), false).await?;
        orders.advance(OrderId(8), false).await?;

        if let Err(e) = orders.transition(OrderId(1), OrderStatus::Preparing).await {
            warn!(error = %e, "Completed orders stay completed");
        }

        let reviews = &system.review_client;
        reviews
            .reply(ReviewId(3), "Thanks Bilal, we've added more spice to the biryani!")
            .await?;
        reviews.flag(ReviewId(1), "Fake review").await?;

        let summary = reviews.summary("Karachi Biryani House").await?;
        info!(average = summary.average, count = summary.count, "Rating summary");
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    // Customer opens the tracking page, then leaves after one step
    let tracking = spawn_demo_progress(system.order_client.clone(), placed, config.progress_interval);
    tokio::time::sleep(config.progress_interval + config.progress_interval / 2).await;
    tracking.abort();

    // Admin: applications, users, moderation, orders
    let span = tracing::info_span!("admin");
    let admin = async {
        let restaurants = &system.restaurant_client;
        let pending = restaurants
            .admin_view(RestaurantStatus::Pending.into(), None, "")
            .await?;
        for restaurant in pending {
            restaurants.approve(restaurant.id).await?;
        }
        restaurants.disable(RestaurantId(4)).await?;
        // A second click is a no-op.
        restaurants.disable(RestaurantId(4)).await?;

        system.account_client.suspend(AccountId(1)).await?;
        system.account_client.unsuspend(AccountId(2)).await?;

        let moderation = &system.moderation_client;
        for item in moderation.queue(ModerationStatus::Pending.into(), "").await? {
            if item.reason == "Fake review" {
                moderation.remove(item.id).await?;
            } else {
                moderation.approve(item.id).await?;
            }
        }
        if let Err(e) = moderation.remove(FlagId(4)).await {
            warn!(error = %e, "Moderated content is final");
        }

        let completed = system
            .order_client
            .admin_view(OrderStatus::Completed.into(), None, "")
            .await?;
        let stats = system.order_client.stats().await?;
        info!(
            completed = completed.len(),
            total = stats.total_orders,
            revenue = stats.revenue,
            "Orders overview"
        );
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await;

    if let Err(e) = admin {
        error!(error = %e, "Admin session failed");
    }

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
