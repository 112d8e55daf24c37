use crate::clients::{
    AccountClient, MenuClient, ModerationClient, OrderClient, RestaurantClient, ReviewClient,
};
use crate::config::AppConfig;
use crate::framework::{ActorClient, FrameworkError};
use crate::{
    account_actor, menu_actor, moderation_actor, order_actor, restaurant_actor, review_actor, seed,
};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Seeding {collection} failed: {source}")]
    Seed {
        collection: &'static str,
        #[source]
        source: FrameworkError,
    },

    #[error("Actor task failed: {0}")]
    ActorTaskFailed(String),
}

/// The running platform: one store per record type plus its client.
///
/// Every portal page reads and writes through these clients, so an order
/// accepted on the partner dashboard shows up as accepted on the admin
/// orders page.
///
/// # Example
///
/// ```ignore
/// let system = PlatformSystem::seeded(&AppConfig::default()).await?;
///
/// let pending = system
///     .restaurant_client
///     .admin_view(RestaurantStatus::Pending.into(), None, "")
///     .await?;
///
/// system.shutdown().await?;
/// ```
pub struct PlatformSystem {
    pub order_client: OrderClient,
    pub restaurant_client: RestaurantClient,
    pub account_client: AccountClient,
    pub moderation_client: ModerationClient,
    pub menu_client: MenuClient,
    pub review_client: ReviewClient,

    handles: Vec<JoinHandle<()>>,
}

impl PlatformSystem {
    /// Spawns every actor with empty stores.
    pub fn new(config: &AppConfig) -> Self {
        let capacity = config.channel_capacity;

        let (order_actor, order_client) = order_actor::new(capacity);
        let (restaurant_actor, restaurant_client) = restaurant_actor::new(capacity);
        let (account_actor, account_client) = account_actor::new(capacity);
        let (moderation_actor, moderation_client) = moderation_actor::new(capacity);
        let (menu_actor, menu_client) = menu_actor::new(capacity);
        let (review_actor, review_client) = review_actor::new(capacity);

        let handles = vec![
            tokio::spawn(order_actor.run(())),
            tokio::spawn(restaurant_actor.run(())),
            tokio::spawn(account_actor.run(())),
            tokio::spawn(moderation_actor.run(())),
            tokio::spawn(menu_actor.run(())),
            tokio::spawn(review_actor.run(moderation_client.clone())),
        ];
        info!(actors = handles.len(), capacity, "Platform started");

        Self {
            order_client,
            restaurant_client,
            account_client,
            moderation_client,
            menu_client,
            review_client,
            handles,
        }
    }

    /// Spawns every actor and loads the mock fixtures.
    pub async fn seeded(config: &AppConfig) -> Result<Self, PlatformError> {
        let system = Self::new(config);
        system.seed().await?;
        Ok(system)
    }

    /// Starts the platform, seeding it when `seed_on_start` is set.
    pub async fn start(config: &AppConfig) -> Result<Self, PlatformError> {
        if config.seed_on_start {
            Self::seeded(config).await
        } else {
            Ok(Self::new(config))
        }
    }

    pub async fn seed(&self) -> Result<(), PlatformError> {
        fn failed(collection: &'static str) -> impl FnOnce(FrameworkError) -> PlatformError {
            move |source| PlatformError::Seed { collection, source }
        }

        let orders = self.order_client.inner().seed(seed::orders()).await.map_err(failed("orders"))?;
        let restaurants = self
            .restaurant_client
            .inner()
            .seed(seed::restaurants())
            .await
            .map_err(failed("restaurants"))?;
        let accounts = self
            .account_client
            .inner()
            .seed(seed::accounts())
            .await
            .map_err(failed("accounts"))?;
        let flags = self
            .moderation_client
            .inner()
            .seed(seed::flagged_content())
            .await
            .map_err(failed("flagged content"))?;
        let menu = self.menu_client.inner().seed(seed::menu_items()).await.map_err(failed("menu"))?;
        let reviews = self
            .review_client
            .inner()
            .seed(seed::reviews())
            .await
            .map_err(failed("reviews"))?;

        info!(orders, restaurants, accounts, flags, menu, reviews, "Fixtures loaded");
        Ok(())
    }

    /// Drops every client, closing the channels, then waits for each actor
    /// task to finish.
    pub async fn shutdown(self) -> Result<(), PlatformError> {
        info!("Shutting down platform...");

        let Self {
            order_client,
            restaurant_client,
            account_client,
            moderation_client,
            menu_client,
            review_client,
            handles,
        } = self;
        drop(order_client);
        drop(restaurant_client);
        drop(account_client);
        drop(menu_client);
        // The review actor holds its own moderation handle until it exits.
        drop(review_client);
        drop(moderation_client);

        for handle in handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(PlatformError::ActorTaskFailed(e.to_string()));
            }
        }

        info!("Platform shutdown complete.");
        Ok(())
    }
}
