use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Identifier of one course module.
///
/// The set of modules is closed and known at build time, so a `ModuleId` can
/// only hold values in `1..=7`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ModuleId(u8);

impl ModuleId {
    /// Number of modules in the course.
    pub const COUNT: usize = 7;

    /// Creates a new `ModuleId`.
    ///
    /// # Errors
    ///
    /// Returns `ModuleIdError::OutOfRange` if `number` is not a known module.
    pub fn new(number: u32) -> Result<Self, ModuleIdError> {
        match u8::try_from(number) {
            Ok(n @ 1..=7) => Ok(Self(n)),
            _ => Err(ModuleIdError::OutOfRange(number)),
        }
    }

    /// Returns the underlying module number.
    #[must_use]
    pub fn value(&self) -> u32 {
        u32::from(self.0)
    }

    /// Iterates over every module in course order.
    pub fn all() -> impl Iterator<Item = ModuleId> {
        (1..=7_u8).map(ModuleId)
    }
}

/// Error type for building a `ModuleId`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleIdError {
    #[error("module {0} does not exist")]
    OutOfRange(u32),
    #[error("failed to parse ModuleId from {0:?}")]
    Parse(String),
}

impl TryFrom<u32> for ModuleId {
    type Error = ModuleIdError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModuleId> for u32 {
    fn from(id: ModuleId) -> Self {
        id.value()
    }
}

impl fmt::Debug for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleId({})", self.0)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ModuleId {
    type Err = ModuleIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s
            .trim()
            .parse::<u32>()
            .map_err(|_| ModuleIdError::Parse(s.to_string()))?;
        Self::new(number)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
