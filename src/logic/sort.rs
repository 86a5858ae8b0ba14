//! Catalog ordering
//!
//! Sorting is stable: entries with equal keys keep their filtered order. A
//! key the listing does not offer (model year on drivers, experience or
//! review count on vehicles) leaves the order untouched, exactly like an
//! absent key.

use std::cmp::Ordering;

use tracing::debug;

use crate::model::{Amount, DriverProfile, Vehicle};
use crate::types::SortKey;

/// Fields a catalog entry exposes to the sorter
pub trait Sortable {
    fn price(&self) -> Amount;
    fn rating(&self) -> f32;
    fn review_count(&self) -> u32;

    fn year(&self) -> Option<u16> {
        None
    }

    fn experience(&self) -> Option<u8> {
        None
    }

    /// Whether `key` orders this kind of entry at all
    fn supports(key: SortKey) -> bool;
}

impl Sortable for Vehicle {
    fn price(&self) -> Amount {
        self.price_per_day
    }

    fn rating(&self) -> f32 {
        self.rating
    }

    fn review_count(&self) -> u32 {
        self.reviews
    }

    fn year(&self) -> Option<u16> {
        Some(self.year)
    }

    fn supports(key: SortKey) -> bool {
        !matches!(key, SortKey::Experience | SortKey::Reviews)
    }
}

impl Sortable for DriverProfile {
    fn price(&self) -> Amount {
        self.price_per_hour
    }

    fn rating(&self) -> f32 {
        self.rating
    }

    fn review_count(&self) -> u32 {
        self.reviews
    }

    fn experience(&self) -> Option<u8> {
        Some(self.experience)
    }

    fn supports(key: SortKey) -> bool {
        !matches!(key, SortKey::Year)
    }
}

/// Comparator for `key`. Everything but `PriceLow` sorts descending.
fn compare<T: Sortable>(a: &T, b: &T, key: SortKey) -> Ordering {
    match key {
        SortKey::PriceLow => a.price().cmp(&b.price()),
        SortKey::PriceHigh => b.price().cmp(&a.price()),
        SortKey::Rating => b.rating().total_cmp(&a.rating()),
        SortKey::Year => b.year().cmp(&a.year()),
        SortKey::Experience => b.experience().cmp(&a.experience()),
        SortKey::Reviews => b.review_count().cmp(&a.review_count()),
    }
}

/// Return a copy of `items` ordered by `key`.
///
/// `None`, or a key `T` does not support, returns the items in their
/// current order.
pub fn sort_catalog<T: Sortable + Clone>(items: &[T], key: Option<SortKey>) -> Vec<T> {
    let mut sorted = items.to_vec();
    match key {
        Some(key) if T::supports(key) => {
            // slice::sort_by is stable
            sorted.sort_by(|a, b| compare(a, b, key));
            debug!(%key, count = sorted.len(), "Sorted catalog");
        }
        Some(key) => debug!(%key, "Sort key does not apply, keeping order"),
        None => {}
    }
    sorted
}

/// Order vehicles by `key`
pub fn sort_vehicles(vehicles: &[Vehicle], key: Option<SortKey>) -> Vec<Vehicle> {
    sort_catalog(vehicles, key)
}

/// Order drivers by `key`
pub fn sort_drivers(drivers: &[DriverProfile], key: Option<SortKey>) -> Vec<DriverProfile> {
    sort_catalog(drivers, key)
}
