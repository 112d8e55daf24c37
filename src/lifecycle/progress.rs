//! The order tracking page's demo timer.
//!
//! The tracking page walks a fresh order through the delivery pipeline on
//! its own, one step per tick. Here that is a background task that goes
//! through [`OrderClient::advance`], so every step still obeys the order
//! edge table. Aborting the returned handle stops it, which is what leaving
//! the page does.

use crate::clients::OrderClient;
use crate::framework::Status;
use crate::model::{OrderId, OrderStatus};
use crate::order_actor::OrderError;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, Instrument};

/// Shortest step the timer will take.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Advances `order_id` one legal step every `interval` until it is terminal.
///
/// The first step happens one full interval after the call. Intervals below
/// [`MIN_INTERVAL`] are raised to it. The task ends with the final status,
/// or the first error from the store.
pub fn spawn_demo_progress(
    client: OrderClient,
    order_id: OrderId,
    interval: Duration,
) -> JoinHandle<Result<OrderStatus, OrderError>> {
    let interval = interval.max(MIN_INTERVAL);
    let span = tracing::info_span!("demo_progress", %order_id);
    tokio::spawn(
        async move {
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let order = client.advance(order_id, false).await?;
                debug!(status = %order.status, "Tick");
                if order.status.is_terminal() {
                    info!(status = %order.status, "Tracking finished");
                    return Ok(order.status);
                }
            }
        }
        .instrument(span),
    )
}
