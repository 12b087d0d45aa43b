//! Header checkbox that selects or clears every visible row.

use std::collections::HashSet;

use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// All/some/none state of the visible selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Tri-state over the rows currently shown: checked only when every
/// visible row is selected, indeterminate when some but not all are.
pub fn selection_state(visible: &[i64], selected: &HashSet<i64>) -> SelectionState {
    if visible.is_empty() {
        return SelectionState::Unchecked;
    }

    let count = visible.iter().filter(|id| selected.contains(id)).count();

    if count == 0 {
        SelectionState::Unchecked
    } else if count == visible.len() {
        SelectionState::Checked
    } else {
        SelectionState::Indeterminate
    }
}

#[component]
pub fn TableHeaderCheckbox(
    /// Ids of the rows currently shown on the page
    #[prop(into)]
    visible_ids: Signal<Vec<i64>>,

    /// Selected ids
    #[prop(into)]
    selected: Signal<HashSet<i64>>,

    /// Callback on click (true = select all visible, false = clear)
    on_change: Callback<bool>,
) -> impl IntoView {
    let state = Signal::derive(move || selection_state(&visible_ids.get(), &selected.get()));

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // The indeterminate state only exists as a DOM property.
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(state.get() == SelectionState::Indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || state.get() == SelectionState::Checked
                on:change=move |ev| {
                    on_change.run(event_target_checked(&ev));
                }
            />
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(ids: &[i64]) -> HashSet<i64> {
        ids.iter().copied().collect()
    }

    #[test]
    fn unchecked_when_nothing_selected() {
        assert_eq!(
            selection_state(&[1, 2, 3], &selected(&[])),
            SelectionState::Unchecked
        );
    }

    #[test]
    fn checked_when_all_visible_selected() {
        assert_eq!(
            selection_state(&[1, 2, 3], &selected(&[1, 2, 3])),
            SelectionState::Checked
        );
        // Selection beyond the visible page still counts as "all".
        assert_eq!(
            selection_state(&[1, 2], &selected(&[1, 2, 99])),
            SelectionState::Checked
        );
    }

    #[test]
    fn indeterminate_when_partially_selected() {
        assert_eq!(
            selection_state(&[1, 2, 3], &selected(&[2])),
            SelectionState::Indeterminate
        );
    }

    #[test]
    fn empty_page_is_unchecked() {
        assert_eq!(
            selection_state(&[], &selected(&[1])),
            SelectionState::Unchecked
        );
    }
}
