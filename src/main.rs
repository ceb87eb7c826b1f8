//!
//! # Gradient progress bar demo
//!
//! Lays out a progress bar and steps it from empty to full, logging what happens to the
//! mask layer. Pass the path to a JSON configuration file to change the animation settings.
//! Set `RUST_LOG=debug` to see the view model publishing frames.
//!

#[macro_use] extern crate log;
extern crate env_logger;
extern crate progress_model;

use progress_model::*;

use std::env;

const PACKAGE_NAME: &str    = env!("CARGO_PKG_NAME");
const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Mask layer that logs the frames it's given instead of drawing anything
///
struct LogMaskLayer;

impl MaskLayer for LogMaskLayer {
    fn set_frame(&mut self, frame: Rect) {
        info!("Mask layer frame is now {:?}", frame);
    }

    fn animate_frame(&mut self, frame: Rect, duration: f64, timing_function: TimingFunction) {
        info!("Mask layer animating to {:?} over {}s ({:?}, control points {:?})", frame, duration, timing_function, timing_function.control_points());
    }
}

///
/// Reads the configuration named on the command line, or the defaults if there isn't one
///
fn load_config() -> ProgressBarConfig {
    match env::args().nth(1) {
        None        => ProgressBarConfig::default(),
        Some(path)  => ProgressBarConfig::load(&path).unwrap_or_else(|err| {
            error!("{}: {}: using the default configuration", path, err);
            ProgressBarConfig::default()
        })
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("{} v{}", PACKAGE_NAME, PACKAGE_VERSION);

    let config              = load_config();
    let mut progress_bar    = GradientProgressBar::with_config(LogMaskLayer, &config);

    progress_bar.layout(Rect::new(0.0, 0.0, 320.0, 4.0));

    for step in 0..=4 {
        progress_bar.set_progress(step as f32 * 0.25, true);
    }

    // A layout that doesn't change anything leaves the mask alone
    progress_bar.layout(Rect::new(0.0, 0.0, 320.0, 4.0));
    progress_bar.layout(Rect::new(0.0, 0.0, 640.0, 4.0));

    info!("Finished at progress {}", progress_bar.progress());
}
