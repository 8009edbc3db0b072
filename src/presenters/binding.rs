use crate::{CounterViewModelType, CounterWidgets, Subscription};

/// Binds a view-model's outputs onto the counter widgets: the label shows
/// [`CounterViewModelType::count_text`] and the decrement control follows
/// [`CounterViewModelType::is_decrement_enabled`]. Both are applied
/// immediately with the current values.
///
/// The widgets stay bound for as long as the returned subscriptions live.
pub fn bind(
    view_model: &dyn CounterViewModelType,
    widgets: &CounterWidgets,
) -> Vec<Subscription> {
    let mut bindings = Vec::new();

    view_model
        .count_text()
        .subscribe({
            let label = widgets.count_label.clone();
            move |text| label.set_text(Some(text.clone()))
        })
        .store_in(&mut bindings);

    view_model
        .is_decrement_enabled()
        .subscribe({
            let decrement = widgets.decrement.clone();
            move |enabled| decrement.set_enabled(*enabled)
        })
        .store_in(&mut bindings);

    bindings
}
