use super::traits::*;
use super::releasable::*;

use std::sync::*;

///
/// The value stored in a holder along with the observers waiting for it to change
///
struct HeldValue<Value> {
    /// The current value
    value: Value,

    /// What to call when the value is replaced
    observers: Vec<ReleasableObserver<Value>>
}

impl<Value: 'static+Clone+Send> HeldValue<Value> {
    ///
    /// Creates a new held value with no observers
    ///
    fn new(value: Value) -> HeldValue<Value> {
        HeldValue {
            value:      value,
            observers:  vec![]
        }
    }

    ///
    /// Retrieves a copy of the list of observers for this value
    ///
    fn get_observers(&self) -> Vec<ReleasableObserver<Value>> {
        self.observers
            .iter()
            .map(|item| item.clone_as_owned())
            .collect()
    }

    ///
    /// If there are any observers in this object that aren't in use, remove them
    ///
    fn filter_unused_observers(&mut self) {
        self.observers.retain(|releasable| releasable.is_in_use());
    }

    ///
    /// Registers a new observer, returning the releasable that controls its lifetime
    ///
    fn add_observer(&mut self, what: Arc<dyn Observer<Value>>) -> ReleasableObserver<Value> {
        self.filter_unused_observers();

        let releasable = ReleasableObserver::new(what);
        self.observers.push(releasable.clone_as_owned());

        releasable
    }
}

///
/// A shared slot containing a single value that can be observed
///
/// Cloning a holder creates another reference to the same slot. Every call to `set()`
/// replaces the value and sends it to all of the observers registered at that point,
/// synchronously and in the order they were registered. New observers receive the
/// current value as soon as they're registered.
///
#[derive(Clone)]
pub struct Holder<Value> {
    /// The value stored in this holder
    core: Arc<Mutex<HeldValue<Value>>>
}

impl<Value: 'static+Clone+Send> Holder<Value> {
    ///
    /// Creates a new holder with the specified initial value
    ///
    pub fn new(value: Value) -> Holder<Value> {
        Holder {
            core: Arc::new(Mutex::new(HeldValue::new(value)))
        }
    }

    ///
    /// The number of observers that have not been released yet
    ///
    pub fn observer_count(&self) -> usize {
        self.core.lock().unwrap()
            .observers
            .iter()
            .filter(|observer| observer.is_in_use())
            .count()
    }
}

impl<Value: 'static+Clone+Send> Observable<Value> for Holder<Value> {
    fn get(&self) -> Value {
        self.core.lock().unwrap().value.clone()
    }

    fn observe(&self, what: Arc<dyn Observer<Value>>) -> Box<dyn Releasable> {
        // Register the observer and read the current value with the lock held
        let (releasable, current_value) = {
            let mut core    = self.core.lock().unwrap();
            let releasable  = core.add_observer(what);

            (releasable, core.value.clone())
        };

        // Replay the current value outside of the lock
        releasable.send(&current_value);

        Box::new(releasable)
    }
}

impl<Value: 'static+Clone+Send> MutableObservable<Value> for Holder<Value> {
    fn set(&self, new_value: Value) {
        // Replace the value with the lock held
        let (observers, value) = {
            let mut core    = self.core.lock().unwrap();
            core.value      = new_value;

            (core.get_observers(), core.value.clone())
        };

        // Call the observers outside of the lock
        let mut needs_filtering = false;

        for observer in observers {
            needs_filtering = !observer.send(&value) || needs_filtering;
        }

        if needs_filtering {
            let mut core = self.core.lock().unwrap();
            core.filter_unused_observers();
        }
    }
}
