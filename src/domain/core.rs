//! Core domain types and operations
//!
//! This module defines pure geometric types in window pixel coordinates.
//! Nothing here knows about drawing or about the machine model.

/// Point in window pixel coordinates
///
/// Used both for the fixed anchor of every control and for the location
/// of incoming pointer events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Creates a new position
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the squared euclidean distance to another position
    pub fn distance_squared(&self, other: Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Returns true if both coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Interactive area of a control, used only for event resolution
///
/// Keys are round caps and resolve with an inclusive circle test.
/// Rotor housings are rectangular and resolve with a strict interior test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitRegion {
    Circle {
        center: Position,
        radius: f32,
    },
    Frame {
        center: Position,
        half_width: f32,
        half_height: f32,
    },
}

impl HitRegion {
    /// Returns true if the point falls inside this region
    ///
    /// Circles include their boundary (`d² <= r²`). Frames exclude it on
    /// both axes.
    pub fn contains(&self, point: Position) -> bool {
        match *self {
            HitRegion::Circle { center, radius } => {
                center.distance_squared(point) <= radius * radius
            }
            HitRegion::Frame {
                center,
                half_width,
                half_height,
            } => {
                center.x - half_width < point.x
                    && point.x < center.x + half_width
                    && center.y - half_height < point.y
                    && point.y < center.y + half_height
            }
        }
    }

    /// Returns the region's anchor position
    pub fn center(&self) -> Position {
        match *self {
            HitRegion::Circle { center, .. } | HitRegion::Frame { center, .. } => center,
        }
    }

    /// Returns true if two regions share any interior area
    ///
    /// Touching boundaries do not count as overlap.
    pub fn overlaps(&self, other: &HitRegion) -> bool {
        match (*self, *other) {
            (
                HitRegion::Circle { center: a, radius: ra },
                HitRegion::Circle { center: b, radius: rb },
            ) => a.distance_squared(b) < (ra + rb) * (ra + rb),
            (
                HitRegion::Frame {
                    center: a,
                    half_width: wa,
                    half_height: ha,
                },
                HitRegion::Frame {
                    center: b,
                    half_width: wb,
                    half_height: hb,
                },
            ) => (a.x - b.x).abs() < wa + wb && (a.y - b.y).abs() < ha + hb,
            (
                HitRegion::Circle { center, radius },
                HitRegion::Frame {
                    center: frame,
                    half_width,
                    half_height,
                },
            )
            | (
                HitRegion::Frame {
                    center: frame,
                    half_width,
                    half_height,
                },
                HitRegion::Circle { center, radius },
            ) => {
                // Closest point of the rectangle to the circle center
                let nearest = Position::new(
                    center.x.clamp(frame.x - half_width, frame.x + half_width),
                    center.y.clamp(frame.y - half_height, frame.y + half_height),
                );
                center.distance_squared(nearest) < radius * radius
            }
        }
    }
}
