use nutri_order::config::AppConfig;
use nutri_order::framework::{
    matches_query, ActorClient, ActorEntity, ListQuery, Searchable, Status, StatusFilter,
    StatusTagged, WorkflowClient,
};
use nutri_order::lifecycle::PlatformSystem;
use nutri_order::model::*;
use nutri_order::seed;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Listing tab by tab visits every record exactly once.
async fn assert_tabs_partition<T, C>(client: &C)
where
    T: StatusTagged + Searchable + ActorEntity<ActionResult = T>,
    C: WorkflowClient<T>,
    C::Error: Debug,
    T::Id: Eq + Hash,
{
    let everything = client.list(ListQuery::new()).await.unwrap();
    let mut seen = HashSet::new();
    for status in T::Status::ALL.iter().copied() {
        for record in client.list(ListQuery::new().status(status)).await.unwrap() {
            assert_eq!(record.status(), status);
            assert!(seen.insert(record.id().clone()), "{} listed twice", record.id());
        }
    }
    assert_eq!(seen.len(), everything.len());
}

#[tokio::test]
async fn test_status_tabs_partition_every_collection() {
    let system = PlatformSystem::seeded(&AppConfig::default()).await.unwrap();

    assert_tabs_partition(&system.order_client).await;
    assert_tabs_partition(&system.restaurant_client).await;
    assert_tabs_partition(&system.account_client).await;
    assert_tabs_partition(&system.moderation_client).await;
    assert_tabs_partition(&system.menu_client).await;

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_active_tab_excludes_terminal_orders() {
    let system = PlatformSystem::seeded(&AppConfig::default()).await.unwrap();

    let active = system
        .order_client
        .list(ListQuery::new().status(StatusFilter::Active))
        .await
        .unwrap();
    let ids: Vec<String> = active.iter().map(|o| o.id.to_string()).collect();
    assert_eq!(ids, ["ORD-002", "ORD-003", "ORD-006", "ORD-007", "ORD-008"]);

    let stats = system.order_client.stats().await.unwrap();
    assert_eq!(stats.active, active.len());

    system.shutdown().await.unwrap();
}

/// Every transition the tables allow succeeds in the store; every other
/// one is refused and leaves the record alone.
#[tokio::test]
async fn test_store_follows_the_order_edge_table() {
    for from in OrderStatus::ALL.iter().copied() {
        for to in OrderStatus::ALL.iter().copied() {
            let (actor, client) = nutri_order::order_actor::new(4);
            tokio::spawn(actor.run(()));

            let mut order = seed::orders().remove(0);
            order.status = from;
            order.payment_status = PaymentStatus::Pending;
            client.inner().seed(vec![order]).await.unwrap();

            let result = client.transition(OrderId(1), to).await;
            let stored = client.get(OrderId(1)).await.unwrap().unwrap();
            if from.can_transition_to(to) {
                let moved = result.unwrap();
                assert_eq!(moved.status, to);
                assert_eq!(stored.status, to);
            } else {
                assert!(result.is_err(), "{from} -> {to} should be refused");
                assert_eq!(stored.status, from);
            }
        }
    }
}

#[test]
fn test_search_results_are_a_subset() {
    let orders = seed::orders();
    for query in ["", "  ", "ahmed", "ORD-00", "BIRYANI", "nobody"] {
        let hits: Vec<&Order> = orders.iter().filter(|o| matches_query(*o, query)).collect();
        assert!(hits.len() <= orders.len());
        for hit in &hits {
            assert!(orders.contains(hit));
        }
        if query.trim().is_empty() {
            assert_eq!(hits.len(), orders.len());
        }
    }

    let hits = orders.iter().filter(|o| matches_query(*o, "ahmed")).count();
    assert_eq!(hits, 2);
}

#[test]
fn test_status_filters_parse_from_tab_names() {
    assert_eq!("all".parse::<StatusFilter<OrderStatus>>().unwrap(), StatusFilter::All);
    assert_eq!(
        "active".parse::<StatusFilter<OrderStatus>>().unwrap(),
        StatusFilter::Active
    );
    assert_eq!(
        "out_for_delivery".parse::<StatusFilter<OrderStatus>>().unwrap(),
        StatusFilter::Only(OrderStatus::OutForDelivery)
    );
    assert!("unsuspended".parse::<StatusFilter<AccountStatus>>().is_err());
}

#[test]
fn test_terminal_statuses_have_no_successors() {
    fn check<S: Status>() {
        for status in S::ALL.iter().copied() {
            assert_eq!(status.is_terminal(), status.successors().is_empty());
            assert!(!status.can_transition_to(status), "{status} loops to itself");
        }
    }
    check::<OrderStatus>();
    check::<RestaurantStatus>();
    check::<AccountStatus>();
    check::<ModerationStatus>();
    check::<Availability>();
}
