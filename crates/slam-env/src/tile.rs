//! The fixed tile vocabulary ground truth is expressed in.

use std::fmt;

/// What occupies a single grid cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    Free,
    Wall,
    EntryPoint,
    DoorClosed,
    DoorOpen,
    Window,
    OutOfBounds,
}

impl TileKind {
    /// An agent or a path can pass through this tile.
    #[inline]
    pub fn is_traversable(self) -> bool {
        matches!(
            self,
            TileKind::Free | TileKind::EntryPoint | TileKind::DoorOpen | TileKind::Window
        )
    }

    /// This tile blocks both movement and line-of-sight.
    #[inline]
    pub fn is_blocking(self) -> bool {
        matches!(self, TileKind::Wall | TileKind::DoorClosed | TileKind::OutOfBounds)
    }

    /// Decode the integer tile code used by the text map format (§6).
    pub fn from_code(code: u8) -> Option<TileKind> {
        match code {
            0 => Some(TileKind::Free),
            1 => Some(TileKind::Wall),
            2 => Some(TileKind::EntryPoint),
            3 => Some(TileKind::DoorClosed),
            4 => Some(TileKind::DoorOpen),
            5 => Some(TileKind::Window),
            6 => Some(TileKind::OutOfBounds),
            _ => None,
        }
    }

    /// Encode back to the integer tile code.
    pub fn to_code(self) -> u8 {
        match self {
            TileKind::Free => 0,
            TileKind::Wall => 1,
            TileKind::EntryPoint => 2,
            TileKind::DoorClosed => 3,
            TileKind::DoorOpen => 4,
            TileKind::Window => 5,
            TileKind::OutOfBounds => 6,
        }
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TileKind::Free => "free",
            TileKind::Wall => "wall",
            TileKind::EntryPoint => "entry",
            TileKind::DoorClosed => "door_closed",
            TileKind::DoorOpen => "door_open",
            TileKind::Window => "window",
            TileKind::OutOfBounds => "out_of_bounds",
        };
        f.write_str(s)
    }
}

/// An agent's observation of a single cell: either unobserved, or the true
/// tile kind once seen.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Observation {
    #[default]
    Unknown,
    Seen(TileKind),
}

impl Observation {
    #[inline]
    pub fn is_unknown(self) -> bool {
        matches!(self, Observation::Unknown)
    }

    #[inline]
    pub fn tile(self) -> Option<TileKind> {
        match self {
            Observation::Unknown => None,
            Observation::Seen(t) => Some(t),
        }
    }
}
