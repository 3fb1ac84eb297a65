//! [`Query`] collection related to a single [`Property`].

use std::convert::Infallible;

use common::operations::{By, Select};

use crate::{
    domain::{property, Property},
    infra::Database,
    read::property::SimilarTo,
    Service,
};

use super::{DatabaseQuery, Query};

/// Queries a [`Property`] by its [`property::Id`].
pub type ById = DatabaseQuery<By<Option<Property>, property::Id>>;

/// Queries [`Property`] entities of the same [`property::Kind`] as the one
/// with the provided [`property::Id`], excluding it.
///
/// Returns no more than [`Config::similar_limit`] entities, and none if
/// there is no [`Property`] with the provided [`property::Id`].
///
/// [`Config::similar_limit`]: crate::Config::similar_limit
#[derive(Clone, Debug)]
pub struct Similar(pub property::Id);

impl<Db> Query<Similar> for Service<Db>
where
    Self: Query<ById, Ok = Option<Property>, Err = Infallible>,
    Db: Database<
        Select<By<Vec<Property>, SimilarTo>>,
        Ok = Vec<Property>,
        Err = Infallible,
    >,
{
    type Ok = Vec<Property>;
    type Err = Infallible;

    fn execute(&self, Similar(id): Similar) -> Result<Self::Ok, Self::Err> {
        let Some(property) = self.execute(ById::by(id))? else {
            return Ok(Vec::new());
        };

        self.database().execute(Select(By::<Vec<Property>, _>::new(
            SimilarTo {
                id: property.id,
                kind: property.kind,
                limit: self.config().similar_limit,
            },
        )))
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::property, infra::Memory, query::Query as _, Config, Service,
    };

    use super::{ById, Similar};

    fn id(id: &str) -> property::Id {
        id.parse().unwrap()
    }

    fn ids(properties: &[crate::domain::Property]) -> Vec<&str> {
        properties.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn finds_by_id() {
        let service = Service::new(Config::default(), Memory::sample());

        let found = service.execute(ById::by(id("4"))).unwrap().unwrap();
        assert_eq!(found.title.as_str(), "Modern Urban Loft");
        assert_eq!(found.city(), Some("Chicago"));

        assert!(service.execute(ById::by(id("unknown"))).unwrap().is_none());
    }

    #[test]
    fn finds_similar_of_same_kind() {
        let service = Service::new(Config::default(), Memory::sample());

        let found = service.execute(Similar(id("1"))).unwrap();
        assert_eq!(ids(&found), ["3", "5", "8"]);

        let found = service.execute(Similar(id("2"))).unwrap();
        assert_eq!(ids(&found), ["4"]);
    }

    #[test]
    fn respects_similar_limit() {
        let service = Service::new(
            Config { similar_limit: 1 },
            Memory::sample(),
        );

        let found = service.execute(Similar(id("8"))).unwrap();

        assert_eq!(ids(&found), ["1"]);
    }

    #[test]
    fn finds_no_similar_of_unknown() {
        let service = Service::new(Config::default(), Memory::sample());

        assert!(service.execute(Similar(id("9"))).unwrap().is_empty());
    }
}
