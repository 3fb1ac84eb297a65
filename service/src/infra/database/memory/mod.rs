//! In-memory [`Database`] implementation.

mod impls;
mod sample;

use std::sync::Arc;

use itertools::Itertools as _;
use tracing as log;

use crate::domain::Property;
#[cfg(doc)]
use crate::infra::Database;

/// Read-only in-memory catalog of [`Property`] entities.
///
/// Cloning is cheap: all the clones share the same catalog.
#[derive(Clone, Debug)]
pub struct Memory {
    /// [`Property`] entities of this catalog in their listing order.
    properties: Arc<[Property]>,
}

impl Memory {
    /// Creates a new [`Memory`] catalog out of the provided `properties`.
    ///
    /// Only the first of [`Property`] entities sharing the same ID is kept.
    #[must_use]
    pub fn new(properties: impl IntoIterator<Item = Property>) -> Self {
        let properties = properties
            .into_iter()
            .unique_by(|p| p.id.clone())
            .collect::<Arc<[_]>>();
        log::debug!("loaded {} properties into catalog", properties.len());

        Self { properties }
    }

    /// Creates a new [`Memory`] catalog of the compiled-in sample
    /// [`Property`] entities.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(sample::properties())
    }

    /// Returns all the [`Property`] entities of this catalog in their
    /// listing order.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }
}

#[cfg(test)]
mod spec {
    use super::Memory;

    #[test]
    fn sample_has_unique_ids_in_order() {
        let catalog = Memory::sample();

        let ids = catalog
            .properties()
            .iter()
            .map(|p| p.id.to_string())
            .collect::<Vec<_>>();

        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn keeps_first_of_duplicates() {
        let sample = Memory::sample();
        let mut duplicate = sample.properties()[0].clone();
        duplicate.title = "Duplicate".parse().unwrap();

        let catalog = Memory::new(
            [duplicate.clone()]
                .into_iter()
                .chain(sample.properties().iter().cloned()),
        );

        assert_eq!(catalog.properties().len(), 8);
        assert_eq!(catalog.properties()[0], duplicate);
    }

    #[test]
    fn clones_share_catalog() {
        let catalog = Memory::sample();
        let clone = catalog.clone();

        assert!(std::ptr::eq(catalog.properties(), clone.properties()));
    }
}
