//! Per-row actions: the dropdown menu and the dialogs it opens.

use contracts::system::users::User;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use crate::system::users::api;
use crate::system::users::ui::dialogs::{ConfirmDeleteDialog, EditUserDialog, ViewUserDialog};

/// Which dialog a row currently shows.
///
/// One tagged value instead of a boolean per dialog: two dialogs open at
/// once is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowDialog {
    #[default]
    None,
    View,
    Edit,
    Delete,
}

/// Menu/dialog coordination for one row.
///
/// A selected action is parked in `pending` while the menu dismisses;
/// `menu_settled` then promotes it to `active_dialog`. A dialog therefore
/// never becomes active while `menu_open` is still true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowActionsState {
    pub menu_open: bool,
    pub active_dialog: RowDialog,
    pending: Option<RowDialog>,
}

impl RowActionsState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the menu without selecting anything.
    pub fn dismiss_menu(&mut self) {
        self.menu_open = false;
        self.pending = None;
    }

    /// An action was picked: close the menu and park the dialog until the
    /// dismissal has settled.
    pub fn select(&mut self, dialog: RowDialog) {
        self.menu_open = false;
        self.pending = Some(dialog);
    }

    /// The menu's close transition finished; show the parked dialog.
    pub fn menu_settled(&mut self) {
        if let Some(dialog) = self.pending.take() {
            self.active_dialog = dialog;
        }
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = RowDialog::None;
    }
}

/// Pause between the menu's dismissal and mounting a dialog, so the
/// dialog never contends with the closing menu for focus.
const MENU_DISMISS_MS: u32 = 150;

#[component]
pub fn RowActionsCell(
    user: User,
    /// Called after a mutation succeeded so the page can reload the list.
    on_changed: Callback<()>,
) -> impl IntoView {
    let state = RwSignal::new(RowActionsState::default());
    let deleting = RwSignal::new(false);
    let toasts = use_toasts();

    let select_action = move |dialog: RowDialog| {
        state.update(|s| s.select(dialog));
        spawn_local(async move {
            TimeoutFuture::new(MENU_DISMISS_MS).await;
            // try_update: the row may be gone by the time the menu settles.
            let _ = state.try_update(|s| s.menu_settled());
        });
    };

    let close_dialog = Callback::new(move |_: ()| state.update(|s| s.close_dialog()));

    let user_id = user.id;
    let name_for_delete = user.name.clone();

    let confirm_delete = Callback::new(move |_: ()| {
        if deleting.get_untracked() {
            return;
        }
        deleting.set(true);

        let name = name_for_delete.clone();
        spawn_local(async move {
            match api::delete_user(user_id).await {
                Ok(()) => {
                    let name = name.clone();
                    toasts.success(move || {
                        let name = name.clone();
                        view! { "User " <strong>{name}</strong> " deleted successfully" }
                            .into_any()
                    });
                    let _ = deleting.try_set(false);
                    let _ = state.try_update(|s| s.close_dialog());
                    on_changed.run(());
                }
                Err(e) => {
                    log::error!("Failed to delete user {}: {}", user_id, e);
                    let name = name.clone();
                    toasts.error(move || {
                        let name = name.clone();
                        view! { "Failed to delete user " <strong>{name}</strong> }.into_any()
                    });
                    let _ = deleting.try_set(false);
                    let _ = state.try_update(|s| s.close_dialog());
                }
            }
        });
    });

    let saved = Callback::new(move |_: ()| {
        state.update(|s| s.close_dialog());
        on_changed.run(());
    });

    let user_for_view = user.clone();
    let user_for_edit = user.clone();
    let name_for_confirm = user.name.clone();

    view! {
        <TableCell class="row-actions-cell" on:click=|e| e.stop_propagation()>
            <div class="row-menu" on:mouseleave=move |_| state.update(|s| s.dismiss_menu())>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| state.update(|s| s.toggle_menu())
                    attr:title="Actions"
                >
                    {icon("more-horizontal")}
                </Button>

                <Show when=move || state.get().menu_open>
                    <div class="row-menu__items">
                        <button
                            class="row-menu__item"
                            on:click=move |_| select_action(RowDialog::View)
                        >
                            {icon("eye")}
                            " View"
                        </button>
                        <button
                            class="row-menu__item"
                            on:click=move |_| select_action(RowDialog::Edit)
                        >
                            {icon("edit")}
                            " Edit"
                        </button>
                        <button
                            class="row-menu__item row-menu__item--danger"
                            on:click=move |_| select_action(RowDialog::Delete)
                        >
                            {icon("trash")}
                            " Delete"
                        </button>
                    </div>
                </Show>
            </div>

            {move || match state.get().active_dialog {
                RowDialog::None => view! { <></> }.into_any(),
                RowDialog::View => {
                    view! {
                        <ViewUserDialog user=user_for_view.clone() on_close=close_dialog />
                    }
                        .into_any()
                }
                RowDialog::Edit => {
                    view! {
                        <EditUserDialog
                            user=user_for_edit.clone()
                            on_close=close_dialog
                            on_saved=saved
                        />
                    }
                        .into_any()
                }
                RowDialog::Delete => {
                    view! {
                        <ConfirmDeleteDialog
                            title="Delete User"
                            description=format!(
                                "This will permanently delete {}. This action cannot be undone.",
                                name_for_confirm,
                            )
                            busy=Signal::derive(move || deleting.get())
                            on_cancel=close_dialog
                            on_confirm=confirm_delete
                        />
                    }
                        .into_any()
                }
            }}
        </TableCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_closes_menu_before_dialog_opens() {
        let mut state = RowActionsState::default();
        state.toggle_menu();
        assert!(state.menu_open);

        state.select(RowDialog::Delete);
        // Menu is closed and the dialog is not yet visible.
        assert!(!state.menu_open);
        assert_eq!(state.active_dialog, RowDialog::None);

        state.menu_settled();
        assert_eq!(state.active_dialog, RowDialog::Delete);
    }

    #[test]
    fn settle_without_selection_is_a_noop() {
        let mut state = RowActionsState::default();
        state.toggle_menu();
        state.dismiss_menu();
        state.menu_settled();
        assert_eq!(state.active_dialog, RowDialog::None);
    }

    #[test]
    fn dismiss_cancels_a_parked_selection() {
        let mut state = RowActionsState::default();
        state.toggle_menu();
        state.select(RowDialog::Edit);
        state.dismiss_menu();
        state.menu_settled();
        assert_eq!(state.active_dialog, RowDialog::None);
    }

    #[test]
    fn close_dialog_resets_only_the_dialog() {
        let mut state = RowActionsState::default();
        state.select(RowDialog::View);
        state.menu_settled();
        state.close_dialog();
        assert_eq!(state.active_dialog, RowDialog::None);
        assert!(!state.menu_open);

        // A settled state does not resurrect the old dialog.
        state.menu_settled();
        assert_eq!(state.active_dialog, RowDialog::None);
    }
}
