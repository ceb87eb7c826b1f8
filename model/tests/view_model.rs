extern crate progress_model;
extern crate progress_binding;

use progress_model::*;
use progress_binding::*;

use std::sync::*;

///
/// Records every frame animation published by a view model
///
fn record_frames(view_model: &ProgressBarViewModel) -> (Arc<Mutex<Vec<FrameAnimation>>>, Box<dyn Releasable>) {
    let frames      = Arc::new(Mutex::new(vec![]));
    let record_to   = Arc::clone(&frames);
    let lifetime    = view_model.mask_layer_frame_animation()
        .observe(observer(move |frame_animation: &FrameAnimation| record_to.lock().unwrap().push(*frame_animation)));

    (frames, lifetime)
}

#[test]
fn initial_frame_animation_is_zero() {
    let view_model = ProgressBarViewModel::new();

    assert!(view_model.mask_layer_frame_animation().get() == FrameAnimation::zero());
}

#[test]
fn initial_animation_duration_is_default() {
    let view_model = ProgressBarViewModel::new();

    assert!(view_model.animation_duration() == ProgressBarViewModel::DEFAULT_ANIMATION_DURATION);
    assert!(view_model.animation_duration() == 0.25);
}

#[test]
fn initial_timing_function_is_default() {
    let view_model = ProgressBarViewModel::new();

    assert!(view_model.timing_function() == TimingFunction::Default);
}

#[test]
fn initial_state_matches_defaults() {
    let view_model = ProgressBarViewModel::new();

    assert!(view_model.bounds() == Rect::zero());
    assert!(view_model.progress() == 0.5);
}

#[test]
fn setting_bounds_publishes_frame_without_animation() {
    let mut view_model = ProgressBarViewModel::new();
    view_model.set_progress(0.25, false);

    view_model.set_bounds(Rect::new(2.0, 4.0, 6.0, 8.0));

    assert!(view_model.mask_layer_frame_animation().get() == FrameAnimation::new(Rect::new(2.0, 4.0, 1.5, 8.0), 0.0));
}

#[test]
fn setting_bounds_with_same_value_publishes_once() {
    let mut view_model = ProgressBarViewModel::new();
    view_model.set_progress(0.25, false);

    let (frames, _lifetime) = record_frames(&view_model);

    for _ in 0..3 {
        view_model.set_bounds(Rect::new(2.0, 4.0, 6.0, 8.0));
    }

    // Replayed value, then a single update for the new bounds
    let frames = frames.lock().unwrap();
    assert!(frames.len() == 2);
    assert!(frames[1] == FrameAnimation::new(Rect::new(2.0, 4.0, 1.5, 8.0), 0.0));
}

#[test]
fn setting_current_bounds_does_not_publish() {
    let mut view_model      = ProgressBarViewModel::new();
    let (frames, _lifetime) = record_frames(&view_model);

    for _ in 0..3 {
        view_model.set_bounds(Rect::zero());
    }

    assert!(*frames.lock().unwrap() == vec![FrameAnimation::zero()]);
}

#[test]
fn set_progress_publishes_frame_without_animation() {
    let mut view_model = ProgressBarViewModel::new();
    view_model.set_bounds(Rect::new(2.0, 4.0, 6.0, 8.0));

    view_model.set_progress(0.5, false);

    assert!(view_model.mask_layer_frame_animation().get() == FrameAnimation::new(Rect::new(2.0, 4.0, 3.0, 8.0), 0.0));
}

#[test]
fn set_progress_publishes_frame_with_animation_duration() {
    let mut view_model = ProgressBarViewModel::new();
    view_model.set_bounds(Rect::new(2.0, 4.0, 6.0, 8.0));
    view_model.set_animation_duration(123.456);

    view_model.set_progress(0.75, true);

    assert!(view_model.mask_layer_frame_animation().get() == FrameAnimation::new(Rect::new(2.0, 4.0, 4.5, 8.0), 123.456));
}

#[test]
fn set_progress_publishes_once_per_call() {
    let mut view_model = ProgressBarViewModel::new();
    view_model.set_bounds(Rect::new(0.0, 0.0, 100.0, 10.0));

    let (frames, _lifetime) = record_frames(&view_model);

    view_model.set_progress(0.5, false);
    view_model.set_progress(0.5, true);
    view_model.set_progress(0.25, true);

    let frames = frames.lock().unwrap();
    assert!(frames.len() == 4);
    assert!(frames[1] == FrameAnimation::new(Rect::new(0.0, 0.0, 50.0, 10.0), 0.0));
    assert!(frames[2] == FrameAnimation::new(Rect::new(0.0, 0.0, 50.0, 10.0), 0.25));
    assert!(frames[3] == FrameAnimation::new(Rect::new(0.0, 0.0, 25.0, 10.0), 0.25));
}

#[test]
fn assigning_progress_always_publishes_snap_update() {
    let mut view_model = ProgressBarViewModel::new();
    view_model.set_bounds(Rect::new(0.0, 0.0, 100.0, 10.0));
    view_model.set_animation_duration(2.0);

    let (frames, _lifetime) = record_frames(&view_model);

    view_model.assign_progress(0.5);
    view_model.assign_progress(0.5);

    let frames = frames.lock().unwrap();
    assert!(frames.len() == 3);
    assert!(frames[1] == FrameAnimation::new(Rect::new(0.0, 0.0, 50.0, 10.0), 0.0));
    assert!(frames[2] == frames[1]);
}

#[test]
fn animation_duration_is_read_when_progress_is_set() {
    let mut view_model = ProgressBarViewModel::new();
    view_model.set_bounds(Rect::new(0.0, 0.0, 100.0, 10.0));

    let (frames, _lifetime) = record_frames(&view_model);

    view_model.set_progress(0.5, true);
    view_model.set_animation_duration(1.0);
    view_model.set_progress(0.75, true);

    let frames = frames.lock().unwrap();
    assert!(frames.len() == 3);
    assert!(frames[1].duration == 0.25);
    assert!(frames[2].duration == 1.0);
}

#[test]
fn bounds_changes_are_never_animated() {
    let mut view_model = ProgressBarViewModel::new();
    view_model.set_animation_duration(5.0);
    view_model.set_progress(0.5, true);

    view_model.set_bounds(Rect::new(0.0, 0.0, 40.0, 4.0));

    assert!(view_model.mask_layer_frame_animation().get() == FrameAnimation::new(Rect::new(0.0, 0.0, 20.0, 4.0), 0.0));
}

#[test]
fn released_observer_stops_receiving_frames() {
    let mut view_model          = ProgressBarViewModel::new();
    let (frames, mut lifetime)  = record_frames(&view_model);

    view_model.set_bounds(Rect::new(0.0, 0.0, 10.0, 10.0));
    lifetime.done();
    view_model.set_progress(1.0, false);

    assert!(frames.lock().unwrap().len() == 2);
}

#[test]
fn late_observer_receives_current_frame() {
    let mut view_model = ProgressBarViewModel::new();
    view_model.set_bounds(Rect::new(0.0, 0.0, 10.0, 10.0));

    let (frames, _lifetime) = record_frames(&view_model);

    assert!(*frames.lock().unwrap() == vec![FrameAnimation::new(Rect::new(0.0, 0.0, 5.0, 10.0), 0.0)]);
}

#[test]
fn frames_can_be_followed_as_a_stream() {
    use futures::prelude::*;
    use futures::executor;

    let mut view_model  = ProgressBarViewModel::new();
    let mut frames      = follow(view_model.mask_layer_frame_animation());

    assert!(executor::block_on(frames.next()) == Some(FrameAnimation::zero()));

    view_model.set_bounds(Rect::new(0.0, 0.0, 10.0, 10.0));
    assert!(executor::block_on(frames.next()) == Some(FrameAnimation::new(Rect::new(0.0, 0.0, 5.0, 10.0), 0.0)));
}
