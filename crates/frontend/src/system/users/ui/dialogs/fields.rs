//! Labeled inputs used by the create/edit dialogs.

use leptos::prelude::*;

use crate::shared::icons::icon;

/// Text input with label and an error line fed by the server response.
#[component]
pub fn TextField(
    /// ID for the input element
    id: &'static str,
    /// Label text
    label: &'static str,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    on_input: Callback<String>,
    /// Validation message shown under the input
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "email", etc.
    #[prop(optional, default = "text")]
    input_type: &'static str,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Disabled state
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id>
                {label}
            </label>
            <input
                id=id
                class="form__input"
                type=input_type
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                required=required
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <p class="form__error">{msg}</p> })}
        </div>
    }
}

/// Password input with a show/hide toggle.
///
/// Masking toggles per field; two password inputs in the same form never
/// share it.
#[component]
pub fn PasswordField(
    /// ID for the input element
    id: &'static str,
    /// Label text
    label: &'static str,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    on_input: Callback<String>,
    /// Validation message shown under the input
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Disabled state
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let show = RwSignal::new(false);

    view! {
        <div class="form__group form__group--password">
            <label class="form__label" for=id>
                {label}
            </label>
            <input
                id=id
                class="form__input"
                type=move || if show.get() { "text" } else { "password" }
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                required=required
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <button
                type="button"
                class="form__password-toggle"
                tabindex="-1"
                on:click=move |_| show.update(|v| *v = !*v)
            >
                {move || if show.get() { icon("eye-off") } else { icon("eye") }}
            </button>
            {move || error.get().map(|msg| view! { <p class="form__error">{msg}</p> })}
        </div>
    }
}
