mod columns;
mod row_actions;
mod state;

use std::collections::HashSet;

use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::icons::icon;
use crate::shared::list_utils::sort_list;
use crate::system::users::api;
use crate::system::users::ui::dialogs::CreateUserDialog;
use columns::{ColumnKind, USER_COLUMNS};
use row_actions::RowActionsCell;
use state::create_state;

#[component]
pub fn UsersListPage() -> impl IntoView {
    let state = create_state();
    let all_users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_create, set_show_create) = signal(false);
    let selected: RwSignal<HashSet<i64>> = RwSignal::new(HashSet::new());

    let refresh_view = move || {
        let query = state.with_untracked(|s| s.search_query.to_lowercase());
        let mut data = all_users.get_untracked();
        if !query.is_empty() {
            data.retain(|u| {
                u.name.to_lowercase().contains(&query) || u.email.to_lowercase().contains(&query)
            });
        }
        state.update(|s| {
            sort_list(&mut data, &s.sort_field, s.sort_ascending);
            s.total_count = data.len();
            s.recalc_pagination();
            let start = s.page * s.page_size;
            let end = (start + s.page_size).min(data.len());
            s.items = data.get(start..end).unwrap_or(&[]).to_vec();
        });
    };

    // Reloads only the user list; the rest of the page keeps its state.
    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(data) => {
                    all_users.set(data);
                    state.update(|s| s.is_loaded = true);
                    refresh_view();
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("Failed to load users: {}", e);
                    set_error.set(Some(format!("Failed to load users: {}", e)));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let search_signal = RwSignal::new(String::new());

    let apply_search = move || {
        state.update(|s| {
            s.search_query = search_signal.get_untracked();
            s.page = 0;
        });
        refresh_view();
    };

    let toggle_sort = move |field: String| {
        state.update(|s| {
            if s.sort_field == field {
                s.sort_ascending = !s.sort_ascending;
            } else {
                s.sort_field = field;
                s.sort_ascending = true;
            }
        });
        refresh_view();
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
        refresh_view();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 0;
        });
        refresh_view();
    };

    let visible_ids =
        Signal::derive(move || state.get().items.iter().map(|u| u.id).collect::<Vec<_>>());
    let selected_signal = Signal::derive(move || selected.get());

    let toggle_selection = move |id: i64, checked: bool| {
        selected.update(|s| {
            if checked {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        });
    };

    let toggle_all = move |check_all: bool| {
        if check_all {
            let all_ids = visible_ids.get_untracked().into_iter().collect();
            selected.set(all_ids);
        } else {
            selected.set(HashSet::new());
        }
    };

    let on_row_changed = Callback::new(move |_: ()| load_data());

    view! {
        <div class="page" id="users--list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
                    <Badge>{move || state.get().total_count.to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create.set(true)
                    >
                        {icon("user-plus")}
                        " Create User"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Search"</span>
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || state.get().page)
                                total_pages=Signal::derive(move || state.get().total_pages)
                                total_count=Signal::derive(move || state.get().total_count)
                                page_size=Signal::derive(move || state.get().page_size)
                                on_page_change=Callback::new(go_to_page)
                                on_page_size_change=Callback::new(change_page_size)
                            />
                        </div>
                        <div class="filter-panel-header__right"></div>
                    </div>

                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;">
                                <Input value=search_signal placeholder="Name or email..." />
                            </div>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| apply_search()
                                disabled=Signal::derive(move || loading.get())
                            >
                                "Search"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    search_signal.set(String::new());
                                    state
                                        .update(|s| {
                                            s.search_query = String::new();
                                            s.page = 0;
                                        });
                                    refresh_view();
                                }
                            >
                                "Reset"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {USER_COLUMNS
                                    .iter()
                                    .map(|col| match col.kind {
                                        ColumnKind::Select => {
                                            view! {
                                                <TableHeaderCheckbox
                                                    visible_ids=visible_ids
                                                    selected=selected_signal
                                                    on_change=Callback::new(toggle_all)
                                                />
                                            }
                                                .into_any()
                                        }
                                        ColumnKind::Field if col.sortable => {
                                            view! {
                                                <SortableHeaderCell
                                                    label=col.title
                                                    sort_field=col.key
                                                    current_sort_field=Signal::derive(move || {
                                                        state.with(|s| s.sort_field.clone())
                                                    })
                                                    sort_ascending=Signal::derive(move || {
                                                        state.with(|s| s.sort_ascending)
                                                    })
                                                    on_sort=Callback::new(toggle_sort)
                                                    min_width=col.min_width
                                                />
                                            }
                                                .into_any()
                                        }
                                        ColumnKind::Field => {
                                            view! {
                                                <TableHeaderCell resizable=false min_width=col.min_width>
                                                    {col.title}
                                                </TableHeaderCell>
                                            }
                                                .into_any()
                                        }
                                        ColumnKind::Actions => {
                                            view! {
                                                <TableHeaderCell resizable=false min_width=col.min_width>
                                                </TableHeaderCell>
                                            }
                                                .into_any()
                                        }
                                    })
                                    .collect_view()}
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|u| u.id
                                children=move |user| {
                                    view! {
                                        <TableRow>
                                            {USER_COLUMNS
                                                .iter()
                                                .map(|col| {
                                                    let user = user.clone();
                                                    match col.kind {
                                                    ColumnKind::Select => {
                                                        view! {
                                                            <TableCellCheckbox
                                                                item_id=user.id
                                                                selected=selected_signal
                                                                on_change=Callback::new(move |(id, checked)| {
                                                                    toggle_selection(id, checked)
                                                                })
                                                            />
                                                        }
                                                            .into_any()
                                                    }
                                                    ColumnKind::Field => {
                                                        match col.key {
                                                            "email" => {
                                                                view! {
                                                                    <TableCell>
                                                                        <TableCellLayout truncate=true>
                                                                            {user.email.clone()}
                                                                        </TableCellLayout>
                                                                    </TableCell>
                                                                }
                                                                    .into_any()
                                                            }
                                                            _ => {
                                                                view! {
                                                                    <TableCell>
                                                                        <TableCellLayout truncate=true>
                                                                            <span style="font-weight: 500;">{user.name.clone()}</span>
                                                                        </TableCellLayout>
                                                                    </TableCell>
                                                                }
                                                                    .into_any()
                                                            }
                                                        }
                                                    }
                                                    ColumnKind::Actions => {
                                                        view! {
                                                            <RowActionsCell
                                                                user=user.clone()
                                                                on_changed=on_row_changed
                                                            />
                                                        }
                                                            .into_any()
                                                    }
                                                }
                                                })
                                                .collect_view()}
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                {move || {
                    show_create
                        .get()
                        .then(|| {
                            view! {
                                <CreateUserDialog
                                    on_close=Callback::new(move |_| set_show_create.set(false))
                                    on_created=Callback::new(move |_| {
                                        set_show_create.set(false);
                                        load_data();
                                    })
                                />
                            }
                        })
                }}
            </div>
        </div>
    }
}
