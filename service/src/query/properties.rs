//! [`Query`] collection related to the multiple [`Property`] entities.

use common::operations::By;

use crate::{
    domain::Property,
    read::property::{list, Featured as FeaturedSelector},
};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a list of [`Property`] entities matching a [`list::Filter`].
pub type List = DatabaseQuery<By<Vec<Property>, list::Filter>>;

/// Queries a list of featured [`Property`] entities.
pub type Featured = DatabaseQuery<By<Vec<Property>, FeaturedSelector>>;
