use super::traits::*;

use std::sync::*;

///
/// An `ObservableRef` references another observable without needing to know precisely
/// what kind of observable it is. It is read-only, so it's mostly useful for handing
/// a holder to something that should watch it but never publish to it. Create one with
/// `ObservableRef::from(holder)`.
///
/// Cloning an `ObservableRef` will create another reference to the same observable.
///
#[derive(Clone)]
pub struct ObservableRef<Value> {
    reference: Arc<dyn Observable<Value>>
}

impl<Value> Observable<Value> for ObservableRef<Value> {
    #[inline]
    fn get(&self) -> Value {
        self.reference.get()
    }

    #[inline]
    fn observe(&self, what: Arc<dyn Observer<Value>>) -> Box<dyn Releasable> {
        self.reference.observe(what)
    }
}

impl<Value> ObservableRef<Value> {
    ///
    /// Creates a new ObservableRef from a reference to an existing observable
    ///
    #[inline]
    pub fn new<TObservable: 'static+Clone+Observable<Value>>(observable: &TObservable) -> ObservableRef<Value> {
        ObservableRef {
            reference: Arc::new(observable.clone())
        }
    }

    ///
    /// Creates a new ObservableRef from an existing observable
    ///
    #[inline]
    pub fn from<TObservable: 'static+Observable<Value>>(observable: TObservable) -> ObservableRef<Value> {
        ObservableRef {
            reference: Arc::new(observable)
        }
    }
}
