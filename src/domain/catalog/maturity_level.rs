//! Maturity level value object and the fixed six-level scale.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// One of six ordinal capability tiers (0 Incomplete .. 5 Optimizing).
///
/// Serializes as its numeric value so answer sets keep the original
/// `{ "MEA01.01": 3 }` wire shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Level {
    #[default]
    Incomplete = 0,
    Performed = 1,
    Managed = 2,
    Established = 3,
    Predictable = 4,
    Optimizing = 5,
}

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Level; 6] = [
        Level::Incomplete,
        Level::Performed,
        Level::Managed,
        Level::Established,
        Level::Predictable,
        Level::Optimizing,
    ];

    /// Creates a Level from an integer, returning an error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            0 => Ok(Level::Incomplete),
            1 => Ok(Level::Performed),
            2 => Ok(Level::Managed),
            3 => Ok(Level::Established),
            4 => Ok(Level::Predictable),
            5 => Ok(Level::Optimizing),
            _ => Err(ValidationError::out_of_range("level", 0, 5, value as i32)),
        }
    }

    /// Resolves the level applicable to a float score by flooring it.
    ///
    /// A score of 4.9 resolves to `Predictable` (level 4), not level 5.
    /// Values outside [0,5] are clamped to the scale ends.
    pub fn for_score(score: f64) -> Level {
        let floored = score.floor().clamp(0.0, 5.0) as u8;
        // Clamped to 0..=5, so this cannot fail.
        Level::try_from_u8(floored).unwrap_or(Level::Incomplete)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the display title.
    pub fn title(&self) -> &'static str {
        match self {
            Level::Incomplete => "Incomplete",
            Level::Performed => "Performed",
            Level::Managed => "Managed",
            Level::Established => "Established",
            Level::Predictable => "Predictable",
            Level::Optimizing => "Optimizing",
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level.value()
    }
}

impl TryFrom<u8> for Level {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Level::try_from_u8(value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A maturity level definition: numeric level, title, description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaturityLevel {
    pub level: Level,
    pub title: &'static str,
    pub description: &'static str,
}

/// The fixed six-level maturity scale, indexed by level value.
pub const MATURITY_LEVELS: [MaturityLevel; 6] = [
    MaturityLevel {
        level: Level::Incomplete,
        title: "Incomplete",
        description: "The process is not implemented or fails to achieve its purpose.",
    },
    MaturityLevel {
        level: Level::Performed,
        title: "Performed",
        description: "The process is implemented and achieves its purpose.",
    },
    MaturityLevel {
        level: Level::Managed,
        title: "Managed",
        description: "The process is planned, monitored and adjusted, and its work products \
                      are established, controlled and maintained.",
    },
    MaturityLevel {
        level: Level::Established,
        title: "Established",
        description: "The managed process is implemented using a defined process capable of \
                      achieving its outcomes.",
    },
    MaturityLevel {
        level: Level::Predictable,
        title: "Predictable",
        description: "The established process operates within defined limits to achieve its \
                      outcomes.",
    },
    MaturityLevel {
        level: Level::Optimizing,
        title: "Optimizing",
        description: "The predictable process is continuously improved to meet current and \
                      projected business goals.",
    },
];

impl MaturityLevel {
    /// Looks up the definition for a numeric level.
    pub fn for_level(level: Level) -> &'static MaturityLevel {
        &MATURITY_LEVELS[level.value() as usize]
    }

    /// Resolves the definition applicable to a float score via the floor rule.
    pub fn for_score(score: f64) -> &'static MaturityLevel {
        Self::for_level(Level::for_score(score))
    }
}
