use serde::{Deserialize, Serialize};

pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    Forward,
    Back,
}

/// A completed touch from touch-start to touch-end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwipeGesture {
    pub start: TouchPoint,
    pub end: TouchPoint,
}

impl SwipeGesture {
    /// Leftward swipes advance, rightward swipes go back.
    ///
    /// The horizontal travel must exceed `threshold_px` and dominate the vertical travel.
    pub fn resolve(&self, threshold_px: f64) -> Option<SwipeDirection> {
        let dx = self.start.x - self.end.x;
        let dy = self.start.y - self.end.y;

        if dx.abs() <= dy.abs() || dx.abs() <= threshold_px {
            return None;
        }

        if dx > 0.0 {
            Some(SwipeDirection::Forward)
        } else {
            Some(SwipeDirection::Back)
        }
    }
}
