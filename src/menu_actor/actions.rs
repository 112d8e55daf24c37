use crate::model::Availability;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// The availability switch on a menu card.
    ToggleAvailability,
    /// The switch in the edit dialog; setting the current value is a no-op.
    SetAvailability(Availability),
}
