//! Room kinds
//!
//! Every grid cell holds exactly one room kind.

use serde::{Deserialize, Serialize};

/// Kind of room occupying a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoomKind {
    /// Nothing carved here
    #[default]
    Empty,
    Start,
    Corridor,
    Treasure,
    Boss,
    Secret,
}

impl RoomKind {
    /// All kinds, in symbol-table order
    pub const ALL: [RoomKind; 6] = [
        RoomKind::Empty,
        RoomKind::Start,
        RoomKind::Corridor,
        RoomKind::Treasure,
        RoomKind::Boss,
        RoomKind::Secret,
    ];

    /// Display symbol used by the text renderer
    pub fn symbol(&self) -> char {
        match self {
            RoomKind::Empty => '.',
            RoomKind::Start => 'O',
            RoomKind::Corridor => 'X',
            RoomKind::Treasure => 'T',
            RoomKind::Boss => 'B',
            RoomKind::Secret => '?',
        }
    }

    /// Parse a display symbol back into a kind
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.symbol() == symbol)
    }

    /// Anything but `Empty` counts as a room and is traversable
    pub fn is_occupied(&self) -> bool {
        !matches!(self, RoomKind::Empty)
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            RoomKind::Empty => "empty",
            RoomKind::Start => "start",
            RoomKind::Corridor => "corridor",
            RoomKind::Treasure => "treasure",
            RoomKind::Boss => "boss",
            RoomKind::Secret => "secret",
        }
    }
}
