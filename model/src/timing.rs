///
/// The easing curve used when the mask frame is animated
///
/// The view model never interprets this: it's handed to whatever renders the progress
/// bar along with the frames it should animate.
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum TimingFunction {
    /// The platform's standard curve for layer animations
    Default,

    /// Constant speed
    Linear,

    /// Starts slowly, then speeds up
    EaseIn,

    /// Starts quickly, then slows down
    EaseOut,

    /// Slow at both ends
    EaseInEaseOut,

    /// A cubic bezier with the control points (x1, y1) and (x2, y2)
    Custom(f32, f32, f32, f32)
}

impl TimingFunction {
    ///
    /// The control points (x1, y1, x2, y2) of the cubic bezier described by this curve
    ///
    /// The curve runs from (0, 0) to (1, 1).
    ///
    pub fn control_points(&self) -> (f32, f32, f32, f32) {
        use self::TimingFunction::*;

        match self {
            Default                     => (0.25, 0.1, 0.25, 1.0),
            Linear                      => (0.0, 0.0, 1.0, 1.0),
            EaseIn                      => (0.42, 0.0, 1.0, 1.0),
            EaseOut                     => (0.0, 0.0, 0.58, 1.0),
            EaseInEaseOut               => (0.42, 0.0, 0.58, 1.0),
            Custom(x1, y1, x2, y2)      => (*x1, *y1, *x2, *y2)
        }
    }
}

impl std::default::Default for TimingFunction {
    fn default() -> TimingFunction {
        TimingFunction::Default
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_curve_is_default() {
        assert!(TimingFunction::default() == TimingFunction::Default);
    }

    #[test]
    fn custom_curve_returns_its_own_points() {
        assert!(TimingFunction::Custom(0.1, 0.2, 0.3, 0.4).control_points() == (0.1, 0.2, 0.3, 0.4));
    }
}
