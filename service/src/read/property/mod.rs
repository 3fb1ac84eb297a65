//! [`Property`]-related read definitions.

mod category;
pub mod list;
mod params;

use crate::domain::property::{self, Kind};
#[cfg(doc)]
use crate::domain::Property;

pub use self::category::Category;

/// Selector of [`Property`] entities similar to a specific one.
#[derive(Clone, Debug)]
pub struct SimilarTo {
    /// ID of the [`Property`] to exclude from the selection.
    pub id: property::Id,

    /// [`Kind`] the selected [`Property`] entities should be of.
    pub kind: Kind,

    /// Maximum number of [`Property`] entities to select.
    pub limit: usize,
}

/// Selector of featured [`Property`] entities.
#[derive(Clone, Copy, Debug, Default)]
pub struct Featured;
