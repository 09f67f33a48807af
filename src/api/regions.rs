//! Longitudinal regions along lanes
//!
//! An `SRange` is an interval of the lane's s-coordinate, a `LaneSRange`
//! binds one to a lane, and a `LaneSRoute` strings several together into a
//! zone. Intersection queries take a caller-supplied tolerance so that
//! near-touching ranges produced by upstream geometry still count as
//! overlapping.

use super::LaneId;

/// Direction of travel implied by an `SRange`'s endpoint ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SDirection {
    /// s1 < s0: the range runs against the lane's s-axis
    Decreasing,
    /// s1 >= s0: the range runs along the lane's s-axis
    Increasing,
}

/// A directed interval of a lane's s-coordinate
///
/// The endpoints are not required to be ordered; `(100., 20.)` is a valid
/// range that runs backwards along the lane. Queries that only care about
/// the covered extent normalize to the closed interval
/// `[min(s0, s1), max(s0, s1)]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SRange {
    s0: f64,
    s1: f64,
}

impl SRange {
    /// Creates a range from any pair of s values; no ordering is enforced
    pub fn new(s0: f64, s1: f64) -> Self {
        Self { s0, s1 }
    }

    pub fn s0(&self) -> f64 {
        self.s0
    }

    pub fn set_s0(&mut self, s0: f64) {
        self.s0 = s0;
    }

    pub fn s1(&self) -> f64 {
        self.s1
    }

    pub fn set_s1(&mut self, s1: f64) {
        self.s1 = s1;
    }

    /// Distance covered by the range, always nonnegative
    pub fn size(&self) -> f64 {
        (self.s1 - self.s0).abs()
    }

    /// Whether the range runs with or against the lane's s-axis
    pub fn with_s(&self) -> SDirection {
        if self.s1 >= self.s0 {
            SDirection::Increasing
        } else {
            SDirection::Decreasing
        }
    }

    /// The covered extent as an ordered (low, high) pair
    fn bounds(&self) -> (f64, f64) {
        if self.s0 <= self.s1 {
            (self.s0, self.s1)
        } else {
            (self.s1, self.s0)
        }
    }

    /// Returns true when the covered extents overlap, treating a gap of at
    /// most `tolerance` as contact. Touching endpoints intersect even with
    /// zero tolerance.
    pub fn intersects(&self, other: &SRange, tolerance: f64) -> bool {
        let (lo_a, hi_a) = self.bounds();
        let (lo_b, hi_b) = other.bounds();
        lo_a.max(lo_b) <= hi_a.min(hi_b) + tolerance
    }

    /// Returns the overlap of the covered extents as an ascending range,
    /// or `None` when the ranges do not intersect.
    ///
    /// When the ranges meet only through tolerance, the overlap has no
    /// material extent and collapses to a zero-length range at the middle
    /// of the gap.
    pub fn get_intersection(&self, other: &SRange, tolerance: f64) -> Option<SRange> {
        if !self.intersects(other, tolerance) {
            return None;
        }
        let (lo_a, hi_a) = self.bounds();
        let (lo_b, hi_b) = other.bounds();
        let lo = lo_a.max(lo_b);
        let hi = hi_a.min(hi_b);
        if hi < lo {
            let mid = 0.5 * (lo + hi);
            return Some(SRange::new(mid, mid));
        }
        Some(SRange::new(lo, hi))
    }
}

/// An `SRange` bound to a specific lane
#[derive(Debug, Clone, PartialEq)]
pub struct LaneSRange {
    lane_id: LaneId,
    s_range: SRange,
}

impl LaneSRange {
    pub fn new(lane_id: LaneId, s_range: SRange) -> Self {
        Self { lane_id, s_range }
    }

    pub fn lane_id(&self) -> &LaneId {
        &self.lane_id
    }

    pub fn s_range(&self) -> &SRange {
        &self.s_range
    }

    /// Distance covered along the lane
    pub fn length(&self) -> f64 {
        self.s_range.size()
    }

    /// Ranges on different lanes never intersect
    pub fn intersects(&self, other: &LaneSRange, tolerance: f64) -> bool {
        self.lane_id == other.lane_id && self.s_range.intersects(&other.s_range, tolerance)
    }

    /// The overlap on the shared lane, or `None` when the lanes differ or
    /// the s extents are disjoint
    pub fn get_intersection(&self, other: &LaneSRange, tolerance: f64) -> Option<LaneSRange> {
        if self.lane_id != other.lane_id {
            return None;
        }
        self.s_range
            .get_intersection(&other.s_range, tolerance)
            .map(|s_range| LaneSRange::new(self.lane_id.clone(), s_range))
    }
}

/// An ordered sequence of lane ranges forming a zone through the network
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LaneSRoute {
    ranges: Vec<LaneSRange>,
}

impl LaneSRoute {
    pub fn new(ranges: Vec<LaneSRange>) -> Self {
        Self { ranges }
    }

    /// The member ranges in insertion order
    pub fn ranges(&self) -> &[LaneSRange] {
        &self.ranges
    }

    /// Total distance covered, summed over all member ranges
    pub fn length(&self) -> f64 {
        self.ranges.iter().map(LaneSRange::length).sum()
    }

    /// Returns true when any pair of member ranges on a common lane
    /// intersects within `tolerance`
    pub fn intersects(&self, other: &LaneSRoute, tolerance: f64) -> bool {
        self.ranges
            .iter()
            .any(|a| other.ranges.iter().any(|b| a.intersects(b, tolerance)))
    }
}
