use super::config::*;
use super::timing::*;
use super::geometry::*;
use super::frame_animation::*;

use progress_binding::*;

use std::sync::*;

///
/// Keeps track of the progress value and bounds of a progress bar, and publishes the
/// frame that the mask layer needs to reveal the gradient up to the current progress.
///
pub struct ProgressBarViewModel {
    /// The full extent of the progress bar track
    bounds: Rect,

    /// The current progress, nominally between 0 and 1 (not clamped)
    progress: f32,

    /// Duration of an animated progress change, in seconds
    animation_duration: f64,

    /// Easing curve for an animated progress change (shared with whatever applies the frames)
    timing_function: Arc<Mutex<TimingFunction>>,

    /// The most recent frame for the mask layer
    mask_layer_frame_animation: Holder<FrameAnimation>
}

impl ProgressBarViewModel {
    /// Animation duration used by `set_progress(x, true)` until another one is configured
    pub const DEFAULT_ANIMATION_DURATION: f64 = ProgressBarConfig::DEFAULT_ANIMATION_DURATION;

    /// Progress that a new view model starts with
    pub const DEFAULT_PROGRESS: f32 = ProgressBarConfig::DEFAULT_PROGRESS;

    ///
    /// Creates a view model with the default configuration
    ///
    pub fn new() -> ProgressBarViewModel {
        Self::with_config(&ProgressBarConfig::default())
    }

    ///
    /// Creates a view model from a configuration
    ///
    /// Nothing is published until the bounds or the progress are changed: the mask layer
    /// frame starts out as `FrameAnimation::zero()`.
    ///
    pub fn with_config(config: &ProgressBarConfig) -> ProgressBarViewModel {
        ProgressBarViewModel {
            bounds:                     Rect::zero(),
            progress:                   config.progress,
            animation_duration:         config.animation_duration,
            timing_function:            Arc::new(Mutex::new(config.timing_function)),
            mask_layer_frame_animation: hold(FrameAnimation::zero())
        }
    }

    ///
    /// The frame (and animation duration) that the mask layer should be updated to
    ///
    /// New observers receive the current value straight away.
    ///
    pub fn mask_layer_frame_animation(&self) -> ObservableRef<FrameAnimation> {
        ObservableRef::new(&self.mask_layer_frame_animation)
    }

    ///
    /// The current bounds of the progress bar
    ///
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    ///
    /// Updates the bounds of the progress bar (eg, after a layout)
    ///
    /// Setting the bounds it already has does nothing. Otherwise the new mask frame is
    /// published without animation.
    ///
    pub fn set_bounds(&mut self, bounds: Rect) {
        if bounds == self.bounds {
            trace!("Bounds unchanged at {:?}", bounds);
            return;
        }

        self.bounds = bounds;
        self.publish(false);
    }

    ///
    /// The current progress
    ///
    pub fn progress(&self) -> f32 {
        self.progress
    }

    ///
    /// Sets the progress directly, always publishing a new mask frame without animation
    ///
    /// Unlike `set_bounds`, this publishes even if the progress hasn't changed.
    ///
    pub fn assign_progress(&mut self, progress: f32) {
        self.set_progress_silently(progress);
        self.publish(false);
    }

    ///
    /// Adjusts the current progress, optionally animating the change
    ///
    /// Exactly one frame is published per call. Its duration is the configured animation
    /// duration if `animated` is true, or 0 otherwise.
    ///
    pub fn set_progress(&mut self, progress: f32, animated: bool) {
        self.set_progress_silently(progress);
        self.publish(animated);
    }

    ///
    /// Duration in seconds used for animated progress changes
    ///
    pub fn animation_duration(&self) -> f64 {
        self.animation_duration
    }

    ///
    /// Sets the duration used by later animated progress changes
    ///
    pub fn set_animation_duration(&mut self, animation_duration: f64) {
        self.animation_duration = animation_duration;
    }

    ///
    /// Easing curve for animated progress changes
    ///
    pub fn timing_function(&self) -> TimingFunction {
        *self.timing_function.lock().unwrap()
    }

    ///
    /// Sets the easing curve used by later animated progress changes
    ///
    pub fn set_timing_function(&mut self, timing_function: TimingFunction) {
        *self.timing_function.lock().unwrap() = timing_function;
    }

    ///
    /// The cell holding the easing curve, for reading the current curve as each frame is applied
    ///
    pub(crate) fn shared_timing_function(&self) -> Arc<Mutex<TimingFunction>> {
        Arc::clone(&self.timing_function)
    }

    fn set_progress_silently(&mut self, progress: f32) {
        self.progress = progress;
    }

    ///
    /// Computes the mask frame for the current bounds and progress
    ///
    fn make_mask_layer_frame_animation(&self, animated: bool) -> FrameAnimation {
        let frame       = self.bounds.with_width(self.bounds.width * f64::from(self.progress));
        let duration    = if animated { self.animation_duration } else { 0.0 };

        FrameAnimation::new(frame, duration)
    }

    fn publish(&self, animated: bool) {
        let frame_animation = self.make_mask_layer_frame_animation(animated);

        debug!("Publishing mask layer frame {:?}", frame_animation);
        self.mask_layer_frame_animation.set(frame_animation);
    }
}

impl Default for ProgressBarViewModel {
    fn default() -> ProgressBarViewModel {
        ProgressBarViewModel::new()
    }
}
