//! Road Zones Library
//!
//! Value types for describing longitudinal extents along road-network lanes:
//! S-ranges, lane-bound ranges, and multi-lane rule zones, with
//! tolerance-aware intersection queries.

pub mod api;
pub mod math;
