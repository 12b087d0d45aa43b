//! Column layout of the users table.

use std::cmp::Ordering;

use contracts::system::users::User;

use crate::shared::list_utils::Sortable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Header checkbox plus a per-row selection checkbox.
    Select,
    /// Regular data column.
    Field,
    /// Per-row actions menu.
    Actions,
}

/// Static descriptor for one table column.
#[derive(Debug, Clone, Copy)]
pub struct ColumnDef {
    pub key: &'static str,
    pub title: &'static str,
    pub kind: ColumnKind,
    pub sortable: bool,
    pub min_width: f64,
}

/// Ordered column set consumed by the table renderer. Built once, never
/// mutated at runtime.
pub const USER_COLUMNS: &[ColumnDef] = &[
    ColumnDef {
        key: "select",
        title: "",
        kind: ColumnKind::Select,
        sortable: false,
        min_width: 40.0,
    },
    ColumnDef {
        key: "name",
        title: "Name",
        kind: ColumnKind::Field,
        sortable: true,
        min_width: 160.0,
    },
    ColumnDef {
        key: "email",
        title: "Email",
        kind: ColumnKind::Field,
        sortable: true,
        min_width: 200.0,
    },
    ColumnDef {
        key: "actions",
        title: "",
        kind: ColumnKind::Actions,
        sortable: false,
        min_width: 60.0,
    },
];

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "email" => self
                .email
                .to_lowercase()
                .cmp(&other.email.to_lowercase()),
            // "name" and anything unknown fall back to the name column.
            _ => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str) -> User {
        User {
            id: 1,
            name: name.to_string(),
            email: email.to_string(),
            created_at: None,
            updated_at: None,
            email_verified_at: None,
            role: None,
        }
    }

    #[test]
    fn columns_are_ordered_select_fields_actions() {
        let keys: Vec<&str> = USER_COLUMNS.iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["select", "name", "email", "actions"]);

        assert_eq!(USER_COLUMNS.first().unwrap().kind, ColumnKind::Select);
        assert_eq!(USER_COLUMNS.last().unwrap().kind, ColumnKind::Actions);
    }

    #[test]
    fn only_data_columns_are_sortable() {
        let sortable: Vec<&str> = USER_COLUMNS
            .iter()
            .filter(|c| c.sortable)
            .map(|c| c.key)
            .collect();
        assert_eq!(sortable, vec!["name", "email"]);
    }

    #[test]
    fn every_sortable_column_is_handled_by_compare() {
        let a = user("Alice", "z@example.com");
        let b = user("Bob", "a@example.com");

        for col in USER_COLUMNS.iter().filter(|c| c.sortable) {
            let forward = a.compare_by_field(&b, col.key);
            let backward = b.compare_by_field(&a, col.key);
            assert_eq!(forward, backward.reverse(), "column {}", col.key);
            assert_ne!(forward, Ordering::Equal, "column {}", col.key);
        }
    }

    #[test]
    fn name_comparison_ignores_case() {
        let a = user("alice", "a@example.com");
        let b = user("Bob", "b@example.com");
        assert_eq!(a.compare_by_field(&b, "name"), Ordering::Less);
    }
}
