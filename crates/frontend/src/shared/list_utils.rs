/// Универсальные утилиты для работы со списками (сортировка, заголовки таблиц)
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Сортирует список по указанному полю
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS-класс индикатора: активная колонка подсвечивается
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        email: &'static str,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "email" => self.email.cmp(other.email),
                _ => self.name.cmp(other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "carol", email: "c@x.io" },
            Row { name: "alice", email: "a@x.io" },
            Row { name: "bob", email: "b@x.io" },
        ]
    }

    #[test]
    fn sorts_ascending_and_descending() {
        let mut items = rows();
        sort_list(&mut items, "name", true);
        assert_eq!(
            items.iter().map(|r| r.name).collect::<Vec<_>>(),
            vec!["alice", "bob", "carol"]
        );

        sort_list(&mut items, "email", false);
        assert_eq!(
            items.iter().map(|r| r.email).collect::<Vec<_>>(),
            vec!["c@x.io", "b@x.io", "a@x.io"]
        );
    }

    #[test]
    fn indicator_reflects_active_field() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "email", true), " ⇅");
    }

    #[test]
    fn class_marks_active_column() {
        assert_eq!(
            get_sort_class("name", "name"),
            "table__sort-indicator table__sort-indicator--active"
        );
        assert_eq!(get_sort_class("name", "email"), "table__sort-indicator");
    }
}
