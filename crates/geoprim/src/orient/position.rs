use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of a point `c` relative to a directed segment `a → b`.
///
/// The discriminants are the stable integer codes handed to callers that
/// want a plain tag (see [`RelativePosition::code`]).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RelativePosition {
    /// Strictly left of the supporting line (counterclockwise turn).
    Left = 0,
    /// Strictly right of the supporting line (clockwise turn).
    Right = 1,
    /// Collinear, on the far side of `a` from `b`.
    Behind = 2,
    /// Collinear, past `b`.
    Beyond = 3,
    /// Collinear, strictly inside the segment.
    Between = 4,
    /// Coincides with `a`.
    Origin = 5,
    /// Coincides with `b`.
    Destination = 6,
}

impl RelativePosition {
    pub const ALL: [Self; 7] = [
        Self::Left,
        Self::Right,
        Self::Behind,
        Self::Beyond,
        Self::Between,
        Self::Origin,
        Self::Destination,
    ];

    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Behind => "BEHIND",
            Self::Beyond => "BEYOND",
            Self::Between => "BETWEEN",
            Self::Origin => "ORIGIN",
            Self::Destination => "DESTINATION",
        }
    }

    /// Anything but a strict left/right turn.
    #[inline]
    pub fn is_collinear(self) -> bool {
        !matches!(self, Self::Left | Self::Right)
    }

    /// On the closed segment `[a, b]`.
    #[inline]
    pub fn is_on_segment(self) -> bool {
        matches!(self, Self::Between | Self::Origin | Self::Destination)
    }
}

impl TryFrom<i32> for RelativePosition {
    type Error = i32;

    /// Inverse of [`RelativePosition::code`]; returns the unknown code on failure.
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::ALL.into_iter().find(|p| p.code() == code).ok_or(code)
    }
}

impl fmt::Display for RelativePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
