//! Row-selection checkbox cell.

use std::collections::HashSet;

use leptos::prelude::*;
use thaw::*;

/// Checkbox cell for selecting a single row.
///
/// Stops click propagation so toggling the checkbox never triggers the
/// row's own click handling.
#[component]
pub fn TableCellCheckbox(
    /// Id of the row this cell belongs to
    item_id: i64,

    /// Selected ids
    #[prop(into)]
    selected: Signal<HashSet<i64>>,

    /// Callback on change (item id, checked)
    on_change: Callback<(i64, bool)>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selected.get().contains(&item_id)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run((item_id, checked));
                }
            />
        </TableCell>
    }
}
