//! # Generic Messages
//!
//! The requests a `ResourceClient` sends to its `ResourceActor`.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Predicate shipped to the actor for `List` requests.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map onto the lifecycle every record shares: **Create**,
/// **Seed** (fixtures with their own ids), **Get**, **List**, **Update**,
/// **Delete**, plus **Action** for record-specific behavior such as status
/// transitions.
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Seed {
        records: Vec<T>,
        respond_to: Response<usize>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        predicate: Predicate<T>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<bool>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

impl<T: ActorEntity> std::fmt::Debug for ResourceRequest<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceRequest::Create { params, .. } => {
                f.debug_struct("Create").field("params", params).finish()
            }
            ResourceRequest::Seed { records, .. } => {
                f.debug_struct("Seed").field("count", &records.len()).finish()
            }
            ResourceRequest::Get { id, .. } => f.debug_struct("Get").field("id", id).finish(),
            ResourceRequest::List { .. } => f.debug_struct("List").finish_non_exhaustive(),
            ResourceRequest::Update { id, update, .. } => f
                .debug_struct("Update")
                .field("id", id)
                .field("update", update)
                .finish(),
            ResourceRequest::Delete { id, .. } => {
                f.debug_struct("Delete").field("id", id).finish()
            }
            ResourceRequest::Action { id, action, .. } => f
                .debug_struct("Action")
                .field("id", id)
                .field("action", action)
                .finish(),
        }
    }
}
