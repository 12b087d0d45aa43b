use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::modal::Modal;
use crate::shared::toast::use_toasts;
use crate::system::users::api::{self, ApiError};

use super::fields::{PasswordField, TextField};
use super::form::{UserFormData, UserFormErrors};

/// Create-user dialog.
///
/// Owners mount it only while it is open, so every open starts from a
/// fresh, empty form.
#[component]
pub fn CreateUserDialog(
    on_close: Callback<()>,
    /// Called after the user was created; the owner closes the dialog and
    /// reloads the list.
    on_created: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(UserFormData::for_create());
    let errors = RwSignal::new(UserFormErrors::default());
    let processing = RwSignal::new(false);
    let toasts = use_toasts();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if processing.get_untracked() {
            return;
        }

        let dto = form.with_untracked(|f| f.create_dto());
        let name = dto.name.clone();

        processing.set(true);
        errors.set(UserFormErrors::default());

        spawn_local(async move {
            match api::create_user(dto).await {
                Ok(()) => {
                    toasts.success(move || {
                        let name = name.clone();
                        view! { "User " <strong>{name}</strong> " created successfully" }
                            .into_any()
                    });
                    // try_set: the dialog may have been unmounted while the
                    // request was in flight.
                    let _ = processing.try_set(false);
                    on_created.run(());
                }
                Err(ApiError::Validation(response)) => {
                    let _ = errors.try_set(UserFormErrors::from_response(&response));
                    let _ = processing.try_set(false);
                }
                Err(e) => {
                    toasts.error(move || {
                        view! { "Failed to create user: " {e.to_string()} }.into_any()
                    });
                    let _ = processing.try_set(false);
                }
            }
        });
    };

    let disabled = Signal::derive(move || processing.get());

    view! {
        <Modal title="Create User" description="Add a new user to your account." on_close=on_close>
            <form on:submit=on_submit>
                <div class="modal-body">
                    <TextField
                        id="name"
                        label="Name"
                        value=Signal::derive(move || form.with(|f| f.name.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.name = v))
                        error=Signal::derive(move || errors.with(|e| e.name.clone()))
                        placeholder="Enter user name"
                        required=true
                        disabled=disabled
                    />
                    <TextField
                        id="email"
                        label="Email"
                        input_type="email"
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.email = v))
                        error=Signal::derive(move || errors.with(|e| e.email.clone()))
                        placeholder="Enter user email"
                        required=true
                        disabled=disabled
                    />
                    <PasswordField
                        id="password"
                        label="Password"
                        value=Signal::derive(move || form.with(|f| f.password.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.password = v))
                        error=Signal::derive(move || errors.with(|e| e.password.clone()))
                        placeholder="Enter user password"
                        required=true
                        disabled=disabled
                    />
                    <PasswordField
                        id="password_confirmation"
                        label="Confirm Password"
                        value=Signal::derive(move || form.with(|f| f.password_confirmation.clone()))
                        on_input=Callback::new(move |v| {
                            form.update(|f| f.password_confirmation = v)
                        })
                        error=Signal::derive(move || {
                            errors.with(|e| e.password_confirmation.clone())
                        })
                        placeholder="Confirm user password"
                        required=true
                        disabled=disabled
                    />
                </div>

                <div class="modal-footer">
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| on_close.run(())
                        disabled=move || processing.get()
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || processing.get()
                    >
                        {move || if processing.get() { "Creating..." } else { "Create User" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
