/// Утилиты сортировки списков
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Returns a sorted copy; the source slice is left untouched.
///
/// The sort is stable: equal elements keep their relative order.
pub fn sorted_by_field<T: Sortable + Clone>(items: &[T], field: &str, ascending: bool) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
    sorted
}
