//! Physical lengths, stored in points.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

const POINTS_PER_INCH: f32 = 72.0;
const TWIPS_PER_POINT: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Length(f32);

impl Length {
    pub const ZERO: Length = Length(0.0);

    pub const fn pt(points: f32) -> Self {
        Self(points)
    }

    pub fn inches(inches: f32) -> Self {
        Self(inches * POINTS_PER_INCH)
    }

    pub fn points(self) -> f32 {
        self.0
    }

    pub fn to_inches(self) -> f32 {
        self.0 / POINTS_PER_INCH
    }

    /// Twentieths of a point, the unit paragraph and table geometry is written in.
    pub fn to_twips(self) -> i32 {
        (self.0 * TWIPS_PER_POINT).round() as i32
    }

    /// Eighths of a point, the unit border widths are written in.
    pub fn to_eighth_points(self) -> u32 {
        (self.0 * 8.0).round().max(0.0) as u32
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Mul<f32> for Length {
    type Output = Length;

    fn mul(self, rhs: f32) -> Length {
        Length(self.0 * rhs)
    }
}
