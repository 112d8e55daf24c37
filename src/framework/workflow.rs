//! # Status Workflows
//!
//! Every record the portals manage (orders, restaurant applications, user
//! accounts, flagged content, menu availability) carries one enumerated
//! status that changes through discrete actions. This module turns the set of
//! legal changes into data: each status enum declares its successors, and
//! [`StatusTagged::transition`] refuses any edge the table does not list.
//!
//! Status enums are declared with [`status_enum!`](crate::status_enum), which
//! generates the enum, its edge table, `Display`/`FromStr` and the serde
//! wire names in one place.

use crate::framework::entity::ActorEntity;
use crate::framework::search::{matches_query, Searchable};
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

/// A closed set of lifecycle states with an explicit adjacency table.
pub trait Status: Copy + Eq + Hash + Debug + Display + Send + Sync + 'static {
    /// Every state, in declaration order.
    const ALL: &'static [Self];

    /// The snake_case wire name (`"out_for_delivery"`).
    fn name(self) -> &'static str;

    /// States reachable from `self` in one step.
    fn successors(self) -> &'static [Self];

    fn is_terminal(self) -> bool {
        self.successors().is_empty()
    }

    fn can_transition_to(self, next: Self) -> bool {
        self.successors().contains(&next)
    }

    /// Looks a state up by its wire name.
    fn from_name(name: &str) -> Result<Self, ParseStatusError> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.name() == name)
            .ok_or_else(|| ParseStatusError(name.to_string()))
    }
}

/// The input did not name a known status (or filter).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status: {0}")]
pub struct ParseStatusError(pub String);

/// A requested status change that is not an edge of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("illegal transition from {from} to {to}")]
pub struct IllegalTransition<S: Status> {
    pub from: S,
    pub to: S,
}

/// Declares a status enum and its transition table.
///
/// ```
/// nutri_order::status_enum! {
///     /// Kitchen ticket state.
///     pub enum Ticket {
///         Open = "open" => [Closed],
///         Closed = "closed" => [],
///     }
/// }
///
/// use nutri_order::framework::Status;
/// assert!(Ticket::Open.can_transition_to(Ticket::Closed));
/// assert!(Ticket::Closed.is_terminal());
/// assert_eq!("open".parse::<Ticket>().unwrap(), Ticket::Open);
/// ```
#[macro_export]
macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $wire:literal => [$($next:ident),* $(,)?] ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant, )+
        }

        impl $crate::framework::Status for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }

            fn successors(self) -> &'static [Self] {
                match self {
                    $( $name::$variant => &[$($name::$next),*], )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::framework::Status::name(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::framework::ParseStatusError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as $crate::framework::Status>::from_name(s)
            }
        }
    };
}

/// A record whose lifecycle is a single [`Status`] field.
///
/// `set_status` is the raw write used by `transition`; entity code should go
/// through `transition` so the edge table is always consulted.
pub trait StatusTagged: ActorEntity {
    type Status: Status;

    fn status(&self) -> Self::Status;

    fn set_status(&mut self, status: Self::Status);

    /// The action that asks the store to move a record to `to`.
    fn transition_action(to: Self::Status) -> Self::Action;

    /// Moves the record to `to` if the table allows it. Returns the previous status.
    fn transition(&mut self, to: Self::Status) -> Result<Self::Status, IllegalTransition<Self::Status>> {
        let from = self.status();
        if !from.can_transition_to(to) {
            return Err(IllegalTransition { from, to });
        }
        self.set_status(to);
        Ok(from)
    }
}

/// The tab / dropdown selection applied to a status-tagged list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter<S: Status> {
    #[default]
    All,
    /// Every non-terminal status.
    Active,
    Only(S),
}

impl<S: Status> StatusFilter<S> {
    pub fn accepts(&self, status: S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => !status.is_terminal(),
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl<S: Status> FromStr for StatusFilter<S> {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            other => S::from_name(other).map(StatusFilter::Only),
        }
    }
}

impl<S: Status> From<S> for StatusFilter<S> {
    fn from(status: S) -> Self {
        StatusFilter::Only(status)
    }
}

type Extra<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Status filter, search text and any page-specific predicates, combined with AND.
pub struct ListQuery<T: StatusTagged> {
    pub status: StatusFilter<T::Status>,
    pub search: String,
    extra: Vec<Extra<T>>,
}

impl<T: StatusTagged> Default for ListQuery<T> {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            search: String::new(),
            extra: Vec::new(),
        }
    }
}

impl<T: StatusTagged> Debug for ListQuery<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListQuery")
            .field("status", &self.status)
            .field("search", &self.search)
            .field("extra", &self.extra.len())
            .finish()
    }
}

impl<T: StatusTagged + Searchable> ListQuery<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, filter: impl Into<StatusFilter<T::Status>>) -> Self {
        self.status = filter.into();
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    /// Adds a page-specific condition (payment method, business type, …).
    pub fn with(mut self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.extra.push(Box::new(predicate));
        self
    }

    pub fn matches(&self, record: &T) -> bool {
        self.status.accepts(record.status())
            && matches_query(record, &self.search)
            && self.extra.iter().all(|predicate| predicate(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::status_enum! {
        /// Parcel test workflow.
        pub enum Parcel {
            Packed = "packed" => [Shipped, Lost],
            Shipped = "shipped" => [Delivered, Lost],
            Delivered = "delivered" => [],
            Lost = "lost" => [],
        }
    }

    #[test]
    fn successors_follow_the_declared_table() {
        assert_eq!(Parcel::Packed.successors(), &[Parcel::Shipped, Parcel::Lost]);
        assert!(Parcel::Shipped.can_transition_to(Parcel::Delivered));
        assert!(!Parcel::Packed.can_transition_to(Parcel::Delivered));
        assert!(!Parcel::Delivered.can_transition_to(Parcel::Packed));
    }

    #[test]
    fn terminal_states_have_no_successors() {
        let terminal: Vec<Parcel> = Parcel::ALL
            .iter()
            .copied()
            .filter(|s| s.is_terminal())
            .collect();
        assert_eq!(terminal, vec![Parcel::Delivered, Parcel::Lost]);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for status in Parcel::ALL {
            assert_eq!(status.to_string().parse::<Parcel>().unwrap(), *status);
        }
        assert_eq!(
            "Shipped".parse::<Parcel>(),
            Err(ParseStatusError("Shipped".into()))
        );
    }

    #[test]
    fn filters_parse_all_active_and_names() {
        assert_eq!("all".parse::<StatusFilter<Parcel>>().unwrap(), StatusFilter::All);
        assert_eq!(
            "active".parse::<StatusFilter<Parcel>>().unwrap(),
            StatusFilter::Active
        );
        assert_eq!(
            "lost".parse::<StatusFilter<Parcel>>().unwrap(),
            StatusFilter::Only(Parcel::Lost)
        );
        assert!("everything".parse::<StatusFilter<Parcel>>().is_err());
    }

    #[test]
    fn active_filter_excludes_terminal_states() {
        let active = StatusFilter::<Parcel>::Active;
        assert!(active.accepts(Parcel::Packed));
        assert!(active.accepts(Parcel::Shipped));
        assert!(!active.accepts(Parcel::Delivered));
        assert!(!active.accepts(Parcel::Lost));
    }

    #[test]
    fn illegal_transition_names_both_states() {
        let err = IllegalTransition {
            from: Parcel::Delivered,
            to: Parcel::Packed,
        };
        assert_eq!(err.to_string(), "illegal transition from delivered to packed");
    }
}
