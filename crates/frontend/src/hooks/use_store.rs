use agui_core::SharedStore;
use yew::prelude::*;

/// Current value of a [`SharedStore`], re-rendering on every update
#[hook]
pub fn use_store<T>(store: &SharedStore<T>) -> T
where
    T: Clone + 'static,
{
    let value = {
        let store = store.clone();
        use_state(move || store.get())
    };

    {
        let value = value.clone();
        let store = store.clone();
        use_effect_with((), move |()| {
            value.set(store.get());
            let subscription = store.subscribe(move |next: &T| value.set(next.clone()));
            move || store.unsubscribe(subscription)
        });
    }

    (*value).clone()
}
