use leptos::ev;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Dialog shell: dimmed overlay plus a centered surface with a title bar.
///
/// The body and footer come from `children`, so a form dialog can wrap
/// both in its own `<form>` element. Clicking the overlay closes the
/// dialog; clicks inside the surface do not propagate.
#[component]
pub fn Modal(
    /// Title shown in the header bar.
    #[prop(into)]
    title: String,
    /// Secondary line under the title.
    #[prop(optional, into)]
    description: MaybeProp<String>,
    /// Callback when the modal should close (overlay click, close button).
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <div>
                        <h2 class="modal-title">{title}</h2>
                        {move || {
                            description
                                .get()
                                .map(|text| view! { <p class="modal-description">{text}</p> })
                        }}
                    </div>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
