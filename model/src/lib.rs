//!
//! # Progress bar model
//!
//! The state behind a horizontal gradient progress bar. `ProgressBarViewModel` holds the
//! bounds and progress of the bar and publishes a `FrameAnimation` for the layer that masks
//! the gradient every time either of them changes. `GradientProgressBar` connects a view
//! model to anything that implements `MaskLayer`.
//!

#[macro_use] extern crate serde_derive;
#[macro_use] extern crate log;

mod geometry;
mod timing;
mod frame_animation;
mod error;
mod config;
mod view_model;
mod widget;

pub use self::geometry::*;
pub use self::timing::*;
pub use self::frame_animation::*;
pub use self::error::*;
pub use self::config::*;
pub use self::view_model::*;
pub use self::widget::*;
