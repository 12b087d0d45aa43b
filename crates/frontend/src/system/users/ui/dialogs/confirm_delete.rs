use leptos::prelude::*;
use thaw::*;

use crate::shared::modal::Modal;

/// Confirmation step in front of an irreversible action.
///
/// Visibility is controlled by the owner: mount to show, unmount to
/// close. Confirm fires `on_confirm` exactly once per click and is
/// disabled while `busy` is set; Cancel only ever fires `on_cancel`.
/// The dialog itself performs no network work.
#[component]
pub fn ConfirmDeleteDialog(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    /// Set by the owner while its delete request is in flight.
    #[prop(into)]
    busy: Signal<bool>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title=title description=description on_close=on_cancel>
            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                    disabled=busy
                >
                    "Cancel"
                </Button>
                <Button
                    class="button--danger"
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_confirm.run(())
                    disabled=busy
                >
                    {move || if busy.get() { "Deleting..." } else { "Delete" }}
                </Button>
            </div>
        </Modal>
    }
}
