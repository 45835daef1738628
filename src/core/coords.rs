//! 2D pixel coordinates.
//!
//! The same type is used for card positions and pointer positions, since
//! both live in the board's coordinate space. Subtracting two positions gives
//! a delta, which is again a `Coords`.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub};

/// An (x, y) offset in pixels from the board origin.
///
/// No constraints on sign or magnitude: cards may be dragged off-screen.
///
/// ```
/// use card_board::core::Coords;
///
/// let card = Coords::new(100.0, 100.0);
/// let delta = Coords::new(70.0, 65.0) - Coords::new(50.0, 50.0);
/// assert_eq!(card + delta, Coords::new(120.0, 115.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub x: f64,
    pub y: f64,
}

impl Coords {
    /// The board origin.
    pub const ORIGIN: Coords = Coords { x: 0.0, y: 0.0 };

    /// Create new coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both components are finite (not NaN or infinite).
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Coords {
    type Output = Coords;

    fn add(self, rhs: Coords) -> Coords {
        Coords::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Coords {
    fn add_assign(&mut self, rhs: Coords) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Coords {
    type Output = Coords;

    fn sub(self, rhs: Coords) -> Coords {
        Coords::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Coords {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Coords::new(10.0, -5.0);
        let b = Coords::new(2.5, 7.0);

        assert_eq!(a + b, Coords::new(12.5, 2.0));
        assert_eq!(a - b, Coords::new(7.5, -12.0));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
    }

    #[test]
    fn test_negative_coords_allowed() {
        let off_screen = Coords::new(-400.0, -1e6);
        assert!(off_screen.is_finite());
        assert_eq!(off_screen - off_screen, Coords::ORIGIN);
    }

    #[test]
    fn test_is_finite() {
        assert!(Coords::new(1.0, 2.0).is_finite());
        assert!(!Coords::new(f64::NAN, 0.0).is_finite());
        assert!(!Coords::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Coords::new(110.0, 90.0)), "(110, 90)");
        assert_eq!(Coords::from((1.5, 2.0)), Coords::new(1.5, 2.0));
    }

    #[test]
    fn test_serialization() {
        let coords = Coords::new(120.0, 115.0);
        let json = serde_json::to_string(&coords).unwrap();
        let deserialized: Coords = serde_json::from_str(&json).unwrap();
        assert_eq!(coords, deserialized);
    }
}
