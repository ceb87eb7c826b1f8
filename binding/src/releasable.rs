use super::traits::*;

use std::sync::*;

///
/// An observer that can be released (and then tidied up later)
///
pub struct ReleasableObserver<Value> {
    /// Set to true if this should not be released when dropped
    keep_alive: bool,

    /// The observer, or None if it has been released
    target: Arc<Mutex<Option<Arc<dyn Observer<Value>>>>>
}

impl<Value> ReleasableObserver<Value> {
    ///
    /// Creates a new releasable observer
    ///
    pub fn new(target: Arc<dyn Observer<Value>>) -> ReleasableObserver<Value> {
        ReleasableObserver {
            keep_alive: false,
            target:     Arc::new(Mutex::new(Some(target)))
        }
    }

    ///
    /// Creates a copy of this observer that will not release the target when it is dropped
    ///
    /// Observables keep the owned copy and hand the original to whoever subscribed
    ///
    pub fn clone_as_owned(&self) -> ReleasableObserver<Value> {
        ReleasableObserver {
            keep_alive: true,
            target:     Arc::clone(&self.target)
        }
    }

    ///
    /// Sends a value to the observer and returns whether or not it was still in use
    ///
    pub fn send(&self, value: &Value) -> bool {
        // Fetch the target with the lock held, but call it outside of the lock
        let target = self.target.lock().unwrap().clone();

        if let Some(target) = target {
            target.on_next(value);
            true
        } else {
            false
        }
    }

    ///
    /// True if this item is still in use
    ///
    pub fn is_in_use(&self) -> bool {
        self.target.lock().unwrap().is_some()
    }
}

impl<Value> Releasable for ReleasableObserver<Value> {
    fn keep_alive(&mut self) {
        self.keep_alive = true;
    }

    fn done(&mut self) {
        let mut target = self.target.lock().unwrap();

        *target = None;
    }
}

impl<Value> Drop for ReleasableObserver<Value> {
    fn drop(&mut self) {
        if !self.keep_alive {
            self.done();
        }
    }
}
