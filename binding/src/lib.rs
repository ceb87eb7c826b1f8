//!
//! # Observable holders
//!
//! This library provides the reactive primitive used by the progress bar view model:
//! a shared slot that holds exactly one current value and pushes every new value to
//! the things that are observing it.
//!
//! A holder can be created using `let holder = hold(X)`. Its value can be replaced
//! using `holder.set(Y)` or retrieved using `holder.get()`.
//!
//! The value can be watched using `observe`, as in
//! `let lifetime = holder.observe(observer(|value| println!("Now {}", value)))`.
//! The observer is called straight away with the current value, then once for every
//! later call to `set()`. Observers are called synchronously, on the thread that called
//! `set()`, in the order that they were registered. There's no buffering and no check
//! for equality: setting the same value twice notifies twice.
//!
//! ```
//! # use progress_binding::*;
//! # use std::sync::*;
//! let holder          = hold(1);
//! let seen            = Arc::new(Mutex::new(vec![]));
//!
//! let record          = Arc::clone(&seen);
//! let mut lifetime    = holder.observe(observer(move |value: &i32| record.lock().unwrap().push(*value)));
//!
//! holder.set(2);
//! holder.set(2);
//! lifetime.done();
//! holder.set(3);                  // Lifetime is done, so this isn't observed
//!
//! # assert!(*seen.lock().unwrap() == vec![1, 2, 2]);
//! ```
//!
//! The lifetime value returned can be used to stop the observer from being called.
//! Unless `lifetime.keep_alive()` is called, it will also stop the observer once it
//! goes out of scope.
//!
//! Cloning a holder creates a new handle that references the same slot, much like an
//! `Arc<Mutex<X>>`. `ObservableRef` wraps a holder so it can be watched but not set,
//! and `follow()` turns any observable into a `Stream` of its values.
//!

mod traits;
mod holder;
mod releasable;
mod observe_fn;
mod observable_ref;
mod follow;

pub use self::traits::*;
pub use self::holder::*;
pub use self::releasable::*;
pub use self::observe_fn::*;
pub use self::observable_ref::*;
pub use self::follow::*;

///
/// Creates a holder containing the specified initial value
///
pub fn hold<Value: 'static+Clone+Send>(val: Value) -> Holder<Value> {
    Holder::new(val)
}
