//! Sortable table header cell with a direction indicator.

use leptos::prelude::*;
use thaw::*;

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};

/// Header cell that toggles sorting when clicked.
///
/// The indicator shows the direction for the active column and a neutral
/// glyph for the rest.
#[component]
pub fn SortableHeaderCell(
    /// Header text
    #[prop(into)]
    label: String,

    /// Field this column sorts by
    #[prop(into)]
    sort_field: String,

    /// Currently active sort field from state
    #[prop(into)]
    current_sort_field: Signal<String>,

    /// Sort direction from state
    #[prop(into)]
    sort_ascending: Signal<bool>,

    /// Callback with the clicked column's field
    on_sort: Callback<String>,

    /// Minimum column width
    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_class = sort_field;

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(sort_field_for_click.clone())
            >
                {label}
                <span class=move || get_sort_class(&current_sort_field.get(), &sort_field_for_class)>
                    {move || {
                        get_sort_indicator(
                            &current_sort_field.get(),
                            &sort_field_for_indicator,
                            sort_ascending.get(),
                        )
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}
