use super::traits::*;
use super::observe_fn::*;

use futures::prelude::*;
use futures::task::{Context, Poll, Waker};

use std::pin::*;
use std::sync::*;

///
/// Core data structures for a follow stream
///
struct FollowCore<Value> {
    /// The most recent value that has not been read from the stream yet
    pending: Option<Value>,

    /// What to wake when a new value arrives
    waker: Option<Waker>
}

///
/// Stream that follows the values of an observable
///
/// Values that are published between two polls are coalesced: the stream only ever
/// returns the most recent one.
///
pub struct FollowStream<Value> {
    /// The core of this stream
    core: Arc<Mutex<FollowCore<Value>>>,

    /// Lifetime of the observer (released when the stream is dropped)
    #[allow(dead_code)]
    observer: Box<dyn Releasable>
}

impl<Value> Stream for FollowStream<Value> {
    type Item = Value;

    fn poll_next(self: Pin<&mut Self>, context: &mut Context) -> Poll<Option<Value>> {
        let mut core = self.core.lock().unwrap();

        match core.pending.take() {
            Some(value) => Poll::Ready(Some(value)),
            None        => {
                // Wake this stream when the observable publishes again
                core.waker = Some(context.waker().clone());
                Poll::Pending
            }
        }
    }
}

///
/// Creates a stream from an observable
///
/// The first value returned is the value the observable held when the stream was created.
///
pub fn follow<Value, TObservable>(observable: TObservable) -> FollowStream<Value>
where   Value:          'static+Clone+Send,
        TObservable:    Observable<Value> {
    let core = FollowCore {
        pending:    None,
        waker:      None
    };
    let core        = Arc::new(Mutex::new(core));

    // Only hold a weak reference from the observer so the stream can be freed
    let weak_core   = Arc::downgrade(&core);
    let observer    = observable.observe(observer(move |value: &Value| {
        if let Some(core) = weak_core.upgrade() {
            let waker = {
                let mut core    = core.lock().unwrap();
                core.pending    = Some(value.clone());
                core.waker.take()
            };

            if let Some(waker) = waker {
                waker.wake();
            }
        }
    }));

    FollowStream {
        core:       core,
        observer:   observer
    }
}
