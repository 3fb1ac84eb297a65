//! [`Property`]-related [`Database`] implementations.

use std::convert::Infallible;

use common::operations::{By, Select};
use tracing as log;

use crate::{
    domain::{property, Property},
    infra::Database,
    read::property::{list, Featured, SimilarTo},
};

use super::Memory;

impl Database<Select<By<Vec<Property>, list::Filter>>> for Memory {
    type Ok = Vec<Property>;
    type Err = Infallible;

    fn execute(
        &self,
        Select(by): Select<By<Vec<Property>, list::Filter>>,
    ) -> Result<Self::Ok, Self::Err> {
        let filter = by.into_inner();

        let found = list::evaluate(self.properties(), &filter)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();
        log::debug!(
            query = %filter.to_query(),
            "{} of {} properties matched",
            found.len(),
            self.properties().len(),
        );

        Ok(found)
    }
}

impl Database<Select<By<Option<Property>, property::Id>>> for Memory {
    type Ok = Option<Property>;
    type Err = Infallible;

    fn execute(
        &self,
        Select(by): Select<By<Option<Property>, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.properties().iter().find(|p| p.id == id).cloned())
    }
}

impl Database<Select<By<Vec<Property>, SimilarTo>>> for Memory {
    type Ok = Vec<Property>;
    type Err = Infallible;

    fn execute(
        &self,
        Select(by): Select<By<Vec<Property>, SimilarTo>>,
    ) -> Result<Self::Ok, Self::Err> {
        let SimilarTo { id, kind, limit } = by.into_inner();
        Ok(self
            .properties()
            .iter()
            .filter(|p| p.kind == kind && p.id != id)
            .take(limit)
            .cloned()
            .collect())
    }
}

impl Database<Select<By<Vec<Property>, Featured>>> for Memory {
    type Ok = Vec<Property>;
    type Err = Infallible;

    fn execute(
        &self,
        _: Select<By<Vec<Property>, Featured>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self
            .properties()
            .iter()
            .filter(|p| p.featured)
            .cloned()
            .collect())
    }
}
