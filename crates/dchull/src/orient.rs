//! Orientation predicate for point triples.
//!
//! Sign convention (y axis up): `Left` means `a → b → c` turns counter-clockwise.
//! The determinant is evaluated in plain `f64` with an exact zero test; there is
//! no tolerance band, so nearly collinear triples resolve to `Left`/`Right`.

use nalgebra::Vector2;

/// Classification of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    Left,
    Right,
    Collinear,
}

impl Turn {
    /// Opposite handedness (`Collinear` is its own opposite).
    #[inline]
    pub fn flip(self) -> Turn {
        match self {
            Turn::Left => Turn::Right,
            Turn::Right => Turn::Left,
            Turn::Collinear => Turn::Collinear,
        }
    }
}

/// Signed doubled area of the triangle `(a, b, c)`.
#[inline]
pub fn det(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    (a.x - c.x) * (b.y - c.y) - (b.x - c.x) * (a.y - c.y)
}

/// Classify the turn `a → b → c`.
#[inline]
pub fn turn(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Turn {
    let d = det(a, b, c);
    if d > 0.0 {
        Turn::Left
    } else if d < 0.0 {
        Turn::Right
    } else {
        Turn::Collinear
    }
}
