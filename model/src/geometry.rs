///
/// A rectangle, described by its origin and size
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Rect {
    pub x:      f64,
    pub y:      f64,
    pub width:  f64,
    pub height: f64
}

impl Rect {
    ///
    /// Creates a new rectangle
    ///
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect { x, y, width, height }
    }

    ///
    /// Creates a rectangle with its origin and size set to zero
    ///
    pub fn zero() -> Rect {
        Rect {
            x:      0.0,
            y:      0.0,
            width:  0.0,
            height: 0.0
        }
    }

    ///
    /// Returns a copy of this rectangle with the same origin and height, but a different width
    ///
    #[inline]
    pub fn with_width(self, width: f64) -> Rect {
        Rect { width, ..self }
    }
}

impl Default for Rect {
    fn default() -> Rect {
        Rect::zero()
    }
}
