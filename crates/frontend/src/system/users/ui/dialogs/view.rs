use contracts::system::users::User;
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::format_datetime_long;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

fn format_timestamp(value: &Option<String>) -> String {
    value
        .as_deref()
        .map(format_datetime_long)
        .unwrap_or_else(|| "Not available".to_string())
}

/// Read-only summary of a user record. No network interaction.
#[component]
pub fn ViewUserDialog(user: User, on_close: Callback<()>) -> impl IntoView {
    let created = format_timestamp(&user.created_at);
    let updated = format_timestamp(&user.updated_at);
    let verified = user.email_verified_at.is_some();

    view! {
        <Modal
            title="User Details"
            description="View detailed information about this user."
            on_close=on_close
        >
            <div class="modal-body">
                <div class="detail-row">
                    {icon("user")}
                    <div class="detail-row__content">
                        <span class="detail-row__label">"Full Name"</span>
                        <p class="detail-row__value">{user.name.clone()}</p>
                    </div>
                </div>

                <div class="detail-row">
                    {icon("mail")}
                    <div class="detail-row__content">
                        <span class="detail-row__label">"Email Address"</span>
                        <p class="detail-row__value">{user.email.clone()}</p>
                        {verified
                            .then(|| view! { <span class="badge badge--success">"Verified"</span> })}
                    </div>
                </div>

                {user
                    .role
                    .clone()
                    .map(|role| {
                        view! {
                            <div class="detail-row">
                                {icon("shield")}
                                <div class="detail-row__content">
                                    <span class="detail-row__label">"Role"</span>
                                    <p class="detail-row__value detail-row__value--capitalize">
                                        {role}
                                    </p>
                                </div>
                            </div>
                        }
                    })}

                <div class="detail-row">
                    {icon("calendar")}
                    <div class="detail-row__content">
                        <span class="detail-row__label">"Account Created"</span>
                        <p class="detail-row__value">{created}</p>
                    </div>
                </div>

                <div class="detail-row">
                    {icon("calendar")}
                    <div class="detail-row__content">
                        <span class="detail-row__label">"Last Updated"</span>
                        <p class="detail-row__value">{updated}</p>
                    </div>
                </div>

                <div class="detail-row detail-row--accent">
                    <div class="detail-row__content">
                        <span class="detail-row__label">"User ID"</span>
                        <p class="detail-row__value detail-row__value--mono">
                            {format!("#{}", user.id)}
                        </p>
                    </div>
                </div>
            </div>

            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Close"
                </Button>
            </div>
        </Modal>
    }
}
