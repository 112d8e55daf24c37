//! # Generic Actor Server
//!
//! `ResourceActor` owns the canonical collection for one record type and
//! processes requests sequentially, so the store needs no locks.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of records.
///
/// This is the "server" half: it owns the store and the receiving end of the
/// channel. Each actor runs in its own Tokio task and handles one message at a
/// time, which gives it exclusive access to its state.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2. **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3. **Run**: spawn the run loop on a background task.
///
/// # Implementation Details
///
/// Records live in a `HashMap` keyed by id. A separate `Vec` keeps insertion
/// order so listings come back in the order records were added.
///
/// * **Create**: takes the next free id from the `u32` counter (skipping ids
///   already used by seeded records), builds the record, runs `on_create`,
///   stores it.
/// * **Seed**: inserts ready-made records under their own ids.
/// * **List**: clones every record accepted by the predicate.
/// * **Update** / **Action**: mutate in place through the entity hooks.
/// * **Delete**: runs `on_delete` then removes. Deleting an absent id reports
///   `false` instead of failing.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; callers wait when
    /// it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    fn allocate_id(&mut self) -> T::Id {
        loop {
            let id = T::Id::from(self.next_id);
            self.next_id += 1;
            if !self.store.contains_key(&id) {
                return id;
            }
        }
    }

    fn insert(&mut self, id: T::Id, item: T) {
        if self.store.insert(id.clone(), item).is_none() {
            self.order.push(id);
        }
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// The `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Order" instead of "nutri_order::model::order::Order"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = self.allocate_id();

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Seed {
                    records,
                    respond_to,
                } => {
                    let count = records.len();
                    for record in records {
                        let id = record.id().clone();
                        self.insert(id, record);
                    }
                    info!(entity_type, count, size = self.store.len(), "Seeded");
                    let _ = respond_to.send(Ok(count));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List {
                    predicate,
                    respond_to,
                } => {
                    let items: Vec<T> = self
                        .order
                        .iter()
                        .filter_map(|id| self.store.get(id))
                        .filter(|item| predicate(item))
                        .cloned()
                        .collect();
                    debug!(entity_type, matched = items.len(), size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        self.order.retain(|kept| kept != &id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(true));
                    } else {
                        debug!(entity_type, %id, "Delete of absent id ignored");
                        let _ = respond_to.send(Ok(false));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Dish {
        id: u32,
        name: String,
        spicy: bool,
    }

    #[derive(Debug)]
    struct DishCreate {
        name: String,
    }

    #[derive(Debug)]
    struct DishUpdate {
        name: Option<String>,
    }

    #[derive(Debug)]
    enum DishAction {
        MakeSpicy,
    }

    #[derive(Debug, thiserror::Error)]
    enum DishError {
        #[error("dish name is required")]
        MissingName,
        #[error("{0} is locked")]
        Locked(String),
    }

    #[async_trait]
    impl ActorEntity for Dish {
        type Id = u32;
        type Create = DishCreate;
        type Update = DishUpdate;
        type Action = DishAction;
        type ActionResult = bool;
        type Context = ();
        type Error = DishError;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_create_params(id: u32, params: DishCreate) -> Result<Self, Self::Error> {
            if params.name.trim().is_empty() {
                return Err(DishError::MissingName);
            }
            Ok(Self {
                id,
                name: params.name,
                spicy: false,
            })
        }

        async fn on_update(&mut self, update: DishUpdate, _ctx: &()) -> Result<(), Self::Error> {
            if let Some(name) = update.name {
                self.name = name;
            }
            Ok(())
        }

        async fn on_delete(&self, _ctx: &()) -> Result<(), Self::Error> {
            if self.spicy {
                return Err(DishError::Locked(self.name.clone()));
            }
            Ok(())
        }

        async fn handle_action(&mut self, action: DishAction, _ctx: &()) -> Result<bool, Self::Error> {
            match action {
                DishAction::MakeSpicy => {
                    let changed = !self.spicy;
                    self.spicy = true;
                    Ok(changed)
                }
            }
        }
    }

    fn dish(id: u32, name: &str) -> Dish {
        Dish {
            id,
            name: name.to_string(),
            spicy: false,
        }
    }

    #[tokio::test]
    async fn test_create_skips_seeded_ids() {
        let (actor, client) = ResourceActor::<Dish>::new(8);
        tokio::spawn(actor.run(()));

        let seeded = client
            .seed(vec![dish(1, "Raita"), dish(2, "Naan")])
            .await
            .unwrap();
        assert_eq!(seeded, 2);

        let id = client
            .create(DishCreate {
                name: "Lassi".into(),
            })
            .await
            .unwrap();
        assert_eq!(id, 3);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let (actor, client) = ResourceActor::<Dish>::new(8);
        tokio::spawn(actor.run(()));

        client
            .seed(vec![dish(9, "Kebab"), dish(2, "Naan"), dish(5, "Biryani")])
            .await
            .unwrap();

        let names: Vec<String> = client
            .list(|_| true)
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["Kebab", "Naan", "Biryani"]);

        let filtered = client.list(|d: &Dish| d.name.contains('a')).await.unwrap();
        assert_eq!(filtered.len(), 3);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let (actor, client) = ResourceActor::<Dish>::new(8);
        tokio::spawn(actor.run(()));
        client.seed(vec![dish(1, "Raita")]).await.unwrap();

        assert!(client.delete(1).await.unwrap());
        assert!(!client.delete(1).await.unwrap());
        assert!(client.list(|_| true).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_on_delete_can_veto() {
        let (actor, client) = ResourceActor::<Dish>::new(8);
        tokio::spawn(actor.run(()));
        client.seed(vec![dish(1, "Karahi")]).await.unwrap();

        assert!(client.perform_action(1, DishAction::MakeSpicy).await.unwrap());
        let result = client.delete(1).await;
        assert!(matches!(result, Err(FrameworkError::EntityError(_))));
        assert!(client.get(1).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_missing_ids_report_not_found() {
        let (actor, client) = ResourceActor::<Dish>::new(8);
        tokio::spawn(actor.run(()));

        let update = client.update(7, DishUpdate { name: None }).await;
        assert!(matches!(update, Err(FrameworkError::NotFound(id)) if id == "7"));

        let action = client.perform_action(7, DishAction::MakeSpicy).await;
        assert!(matches!(action, Err(FrameworkError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_failure_is_reported() {
        let (actor, client) = ResourceActor::<Dish>::new(8);
        tokio::spawn(actor.run(()));

        let result = client.create(DishCreate { name: "  ".into() }).await;
        assert!(matches!(result, Err(FrameworkError::EntityError(_))));
        assert!(client.list(|_| true).await.unwrap().is_empty());
    }
}
