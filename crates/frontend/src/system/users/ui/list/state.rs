use contracts::system::users::User;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct UsersListState {
    pub items: Vec<User>,
    pub search_query: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl Default for UsersListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            sort_field: "name".to_string(),
            sort_ascending: true,
            page: 0,
            page_size: 25,
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

impl UsersListState {
    /// Recompute the page count and clamp the current page after the
    /// filtered item count changed.
    pub fn recalc_pagination(&mut self) {
        let total_pages = if self.total_count == 0 {
            1
        } else {
            (self.total_count + self.page_size - 1) / self.page_size
        };
        self.total_pages = total_pages;
        if self.page >= total_pages {
            self.page = total_pages.saturating_sub(1);
        }
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_still_has_one_page() {
        let mut state = UsersListState::default();
        state.total_count = 0;
        state.recalc_pagination();
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn partial_last_page_is_counted() {
        let mut state = UsersListState {
            total_count: 51,
            page_size: 25,
            ..Default::default()
        };
        state.recalc_pagination();
        assert_eq!(state.total_pages, 3);
    }

    #[test]
    fn page_is_clamped_when_results_shrink() {
        let mut state = UsersListState {
            total_count: 120,
            page_size: 25,
            page: 4,
            ..Default::default()
        };
        state.recalc_pagination();
        assert_eq!(state.page, 4);

        // A narrower filter leaves fewer pages than the current index.
        state.total_count = 10;
        state.recalc_pagination();
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.page, 0);
    }
}
