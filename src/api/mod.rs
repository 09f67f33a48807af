//! Road-network API value types
//!
//! Identifiers, lane-frame positions, longitudinal regions, and rule value
//! containers. All types here have plain value semantics: cheap to copy,
//! compared field-wise, no shared state.

mod lane_data;
mod regions;
pub mod rules;

pub use lane_data::{InertialPosition, LanePosition};
pub use regions::{LaneSRange, LaneSRoute, SDirection, SRange};

use std::fmt;

/// A unique identifier for a lane, keyed by an opaque string token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LaneId(String);

impl LaneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier token, verbatim
    pub fn string(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A globally unique string identifier, used to reference entities outside
/// any one id namespace (traffic lights, bulbs, etc.)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UniqueId(String);

impl UniqueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn string(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
