use super::geometry::*;

///
/// A frame for the mask layer, along with how long the change to that frame should take
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FrameAnimation {
    /// Where the mask layer should end up
    pub frame: Rect,

    /// The time in seconds to animate the change over, or 0 to apply it immediately
    pub duration: f64
}

impl FrameAnimation {
    ///
    /// Creates a new frame animation
    ///
    pub fn new(frame: Rect, duration: f64) -> FrameAnimation {
        FrameAnimation { frame, duration }
    }

    ///
    /// A zero-sized frame with no animation
    ///
    pub fn zero() -> FrameAnimation {
        FrameAnimation {
            frame:      Rect::zero(),
            duration:   0.0
        }
    }

    ///
    /// True if this change should be animated rather than applied straight away
    ///
    #[inline]
    pub fn is_animated(&self) -> bool {
        self.duration > 0.0
    }
}

impl Default for FrameAnimation {
    fn default() -> FrameAnimation {
        FrameAnimation::zero()
    }
}
