//! Position types for the lane and world frames

use crate::math::Vector3;

/// A position in the lane frame: longitudinal s, lateral r, height h
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LanePosition {
    s: f64,
    r: f64,
    h: f64,
}

impl LanePosition {
    pub fn new(s: f64, r: f64, h: f64) -> Self {
        Self { s, r, h }
    }

    /// The position as an (s, r, h) vector
    pub fn srh(&self) -> Vector3 {
        Vector3::new(self.s, self.r, self.h)
    }

    pub fn s(&self) -> f64 {
        self.s
    }

    pub fn set_s(&mut self, s: f64) {
        self.s = s;
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn set_r(&mut self, r: f64) {
        self.r = r;
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn set_h(&mut self, h: f64) {
        self.h = h;
    }
}

/// A position in the world frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InertialPosition {
    x: f64,
    y: f64,
    z: f64,
}

impl InertialPosition {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The position as an (x, y, z) vector
    pub fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Euclidean distance from the origin
    pub fn length(&self) -> f64 {
        self.xyz().norm()
    }

    /// Euclidean distance to another position
    pub fn distance(&self, other: &InertialPosition) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn set_z(&mut self, z: f64) {
        self.z = z;
    }
}
