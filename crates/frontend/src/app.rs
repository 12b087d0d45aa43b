use leptos::prelude::*;

use crate::shared::toast::{ToastHost, ToastService};
use crate::system::users::ui::list::UsersListPage;

#[component]
pub fn App() -> impl IntoView {
    // Provide the toast surface to the whole app via context.
    provide_context(ToastService::new());

    view! {
        <UsersListPage />
        <ToastHost />
    }
}
