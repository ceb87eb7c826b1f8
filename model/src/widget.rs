use super::config::*;
use super::timing::*;
use super::geometry::*;
use super::view_model::*;
use super::frame_animation::*;

use progress_binding::*;

use std::sync::*;

///
/// The layer that masks the gradient of a progress bar
///
/// Implemented by whatever is actually drawing the progress bar: the view model only
/// works out where the layer should be.
///
pub trait MaskLayer : Send {
    ///
    /// Moves the layer to a new frame immediately
    ///
    fn set_frame(&mut self, frame: Rect);

    ///
    /// Moves the layer to a new frame over the specified number of seconds
    ///
    fn animate_frame(&mut self, frame: Rect, duration: f64, timing_function: TimingFunction);
}

///
/// Sends a frame animation to a mask layer
///
fn apply_frame_animation<Layer: MaskLayer>(layer: &mut Layer, frame_animation: &FrameAnimation, timing_function: TimingFunction) {
    if frame_animation.is_animated() {
        layer.animate_frame(frame_animation.frame, frame_animation.duration, timing_function);
    } else {
        layer.set_frame(frame_animation.frame);
    }
}

///
/// A progress bar widget that keeps a mask layer in step with its view model
///
pub struct GradientProgressBar<Layer: MaskLayer> {
    /// The state of this progress bar
    view_model: ProgressBarViewModel,

    /// The layer that the frames from the view model are applied to
    layer: Arc<Mutex<Layer>>,

    /// Stops the layer being updated once this widget is dropped
    frame_lifetime: Box<dyn Releasable>
}

impl<Layer: 'static+MaskLayer> GradientProgressBar<Layer> {
    ///
    /// Creates a progress bar with the default configuration
    ///
    pub fn new(layer: Layer) -> GradientProgressBar<Layer> {
        Self::with_config(layer, &ProgressBarConfig::default())
    }

    ///
    /// Creates a progress bar that will update the specified mask layer
    ///
    /// The layer receives the view model's current frame straight away.
    ///
    pub fn with_config(layer: Layer, config: &ProgressBarConfig) -> GradientProgressBar<Layer> {
        let view_model      = ProgressBarViewModel::with_config(config);
        let layer           = Arc::new(Mutex::new(layer));
        let update_layer    = Arc::clone(&layer);
        let update_timing   = view_model.shared_timing_function();
        let frame_lifetime  = view_model.mask_layer_frame_animation()
            .observe(observer(move |frame_animation: &FrameAnimation| {
                let timing_function = *update_timing.lock().unwrap();
                let mut layer       = update_layer.lock().unwrap();
                apply_frame_animation(&mut *layer, frame_animation, timing_function);
            }));

        GradientProgressBar {
            view_model:         view_model,
            layer:              layer,
            frame_lifetime:     frame_lifetime
        }
    }

    ///
    /// The view model for this progress bar
    ///
    pub fn view_model(&self) -> &ProgressBarViewModel {
        &self.view_model
    }

    ///
    /// Performs an action on the mask layer
    ///
    pub fn with_layer<TResult, TFn: FnOnce(&mut Layer) -> TResult>(&self, action: TFn) -> TResult {
        let mut layer = self.layer.lock().unwrap();
        action(&mut *layer)
    }

    ///
    /// Called when the progress bar has been laid out with new bounds
    ///
    pub fn layout(&mut self, bounds: Rect) {
        self.view_model.set_bounds(bounds);
    }

    ///
    /// The current progress
    ///
    pub fn progress(&self) -> f32 {
        self.view_model.progress()
    }

    ///
    /// Changes the progress, optionally animating the mask layer to its new frame
    ///
    pub fn set_progress(&mut self, progress: f32, animated: bool) {
        self.view_model.set_progress(progress, animated);
    }

    ///
    /// Sets how long animated progress changes take
    ///
    pub fn set_animation_duration(&mut self, animation_duration: f64) {
        self.view_model.set_animation_duration(animation_duration);
    }

    ///
    /// Sets the easing curve for animated progress changes
    ///
    pub fn set_timing_function(&mut self, timing_function: TimingFunction) {
        self.view_model.set_timing_function(timing_function);
    }
}

impl<Layer: MaskLayer> Drop for GradientProgressBar<Layer> {
    fn drop(&mut self) {
        self.frame_lifetime.done();
    }
}
