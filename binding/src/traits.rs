use std::sync::*;

///
/// Trait implemented by items that want to receive the values published by an observable
///
pub trait Observer<Value> : Sync+Send {
    ///
    /// Called with the new value whenever the observable is updated (and once with the current value on subscription)
    ///
    fn on_next(&self, value: &Value);
}

///
/// Trait implemented by an object that can be released: for example to stop receiving
/// values when they are no longer required.
///
pub trait Releasable : Send {
    ///
    /// Indicates that this object should not be released on drop
    ///
    fn keep_alive(&mut self);

    ///
    /// Indicates that this object is finished with and should be released
    ///
    fn done(&mut self);
}

///
/// Trait implemented by something that holds a single current value that can be observed
///
pub trait Observable<Value> : Send+Sync {
    ///
    /// Retrieves the current value
    ///
    fn get(&self) -> Value;

    ///
    /// Supplies an observer to be called with every value published by this item
    ///
    /// The observer is called immediately with the current value, then with each
    /// subsequent value as it is set, in the order the observers were registered.
    ///
    /// The releasable that's returned has keep_alive turned off by default, so
    /// be sure to store it in a variable or call keep_alive() to keep it around
    /// (if the observer stops receiving values straight away, this is likely to be the problem)
    ///
    fn observe(&self, observer: Arc<dyn Observer<Value>>) -> Box<dyn Releasable>;
}

///
/// Trait implemented by an observable whose value can be replaced
///
pub trait MutableObservable<Value> : Observable<Value> {
    ///
    /// Replaces the current value and notifies every observer, even if the value is unchanged
    ///
    fn set(&self, new_value: Value);
}
