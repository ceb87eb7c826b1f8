use super::traits::*;

use std::sync::*;

struct ObserveFn<TFn> {
    on_next: Mutex<TFn>
}

impl<Value, TFn> Observer<Value> for ObserveFn<TFn>
where TFn: Send+FnMut(&Value) -> () {
    fn on_next(&self, value: &Value) {
        let mut on_next = self.on_next.lock().unwrap();

        (*on_next)(value)
    }
}

///
/// Creates an observer from a function
///
/// The function is not re-entrant: publishing to the same observable from within the
/// function will deadlock when the new value reaches this observer again.
///
pub fn observer<Value, TFn>(on_next: TFn) -> Arc<dyn Observer<Value>>
where TFn: 'static+Send+FnMut(&Value) -> () {
    Arc::new(ObserveFn { on_next: Mutex::new(on_next) })
}
