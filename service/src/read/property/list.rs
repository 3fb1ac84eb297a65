//! [`Property`] list definitions.

use std::collections::BTreeSet;

use common::Money;
use smart_default::SmartDefault;

use crate::domain::{
    property::{Amenity, Bathrooms, Bedrooms, Kind, Status},
    Property,
};

use super::Category;

/// Filter narrowing a list of [`Property`] entities.
///
/// [`Filter::default()`] matches every [`Property`].
#[derive(Clone, Debug, Eq, PartialEq, SmartDefault)]
pub struct Filter {
    /// [`Status`] to match, if any.
    pub status: Option<Status>,

    /// [`Kind`] to match, if any.
    pub kind: Option<Kind>,

    /// Minimum price (inclusive).
    pub min_price: Money,

    /// Maximum price (inclusive).
    #[default(Money::MAX)]
    pub max_price: Money,

    /// Minimum number of bedrooms.
    pub min_beds: Bedrooms,

    /// Minimum number of bathrooms.
    pub min_baths: Bathrooms,

    /// [`Amenity`] labels, all of which must be present.
    pub amenities: BTreeSet<Amenity>,

    /// Text to search in an address for, case-insensitively.
    pub location: Option<String>,

    /// [`Category`] to match.
    pub category: Category,
}

impl Filter {
    /// Indicates whether the provided [`Property`] satisfies every
    /// constraint of this [`Filter`].
    ///
    /// An inverted price range (`min_price` above a bounded `max_price`)
    /// matches nothing.
    #[must_use]
    pub fn matches(&self, property: &Property) -> bool {
        self.status.is_none_or(|s| s == property.status)
            && self.kind.is_none_or(|k| k == property.kind)
            && property.price >= self.min_price
            && (!self.has_max_price() || property.price <= self.max_price)
            && property.bedrooms >= self.min_beds
            && property.bathrooms >= self.min_baths
            && self.amenities.iter().all(|a| property.has_amenity(a))
            && self.location().is_none_or(|token| {
                property
                    .address
                    .as_str()
                    .to_lowercase()
                    .contains(&token.to_lowercase())
            })
            && self.category.matches(property)
    }

    /// Returns the trimmed non-empty location token of this [`Filter`], if
    /// any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }

    /// Indicates whether the maximum price of this [`Filter`] is bounded.
    ///
    /// A zero maximum means no maximum, same as [`Money::MAX`].
    #[must_use]
    pub fn has_max_price(&self) -> bool {
        self.max_price != Money::MAX && !self.max_price.amount().is_zero()
    }
}

/// Evaluates the provided [`Filter`] over the provided `properties`.
///
/// Matching [`Property`] entities are returned in their original order.
pub fn evaluate<'p>(
    properties: impl IntoIterator<Item = &'p Property>,
    filter: &Filter,
) -> Vec<&'p Property> {
    properties
        .into_iter()
        .filter(|property| filter.matches(property))
        .collect()
}

#[cfg(test)]
mod spec {
    use std::collections::BTreeSet;

    use common::Money;

    use crate::{
        domain::{
            property::{Amenity, Bathrooms, Kind, Status},
            Property,
        },
        infra::Memory,
        read::property::Category,
    };

    use super::{evaluate, Filter};

    fn catalog() -> Vec<Property> {
        Memory::sample().properties().to_vec()
    }

    fn ids(properties: &[&Property]) -> Vec<String> {
        properties.iter().map(|p| p.id.to_string()).collect()
    }

    fn money(amount: u32) -> Money {
        Money::new(amount.into())
    }

    fn amenities(labels: &[&str]) -> BTreeSet<Amenity> {
        labels.iter().map(|l| l.parse().unwrap()).collect()
    }

    /// A bunch of filters, each narrower than the previous one.
    fn narrowing() -> Vec<Filter> {
        let mut filter = Filter::default();
        let mut filters = vec![filter.clone()];

        filter.status = Some(Status::ForSale);
        filters.push(filter.clone());
        filter.max_price = money(2_000_000);
        filters.push(filter.clone());
        filter.min_beds = 3;
        filters.push(filter.clone());
        filter.amenities = amenities(&["Fireplace"]);
        filters.push(filter.clone());
        filter.location = Some("francisco".into());
        filters.push(filter.clone());
        filter.kind = Some(Kind::Townhouse);
        filters.push(filter);

        filters
    }

    #[test]
    fn default_matches_everything() {
        let catalog = catalog();

        let found = evaluate(&catalog, &Filter::default());

        assert_eq!(found.len(), catalog.len());
        assert!(found.iter().zip(&catalog).all(|(a, b)| *a == b));
    }

    #[test]
    fn filters_by_status() {
        let catalog = catalog();
        let records = [catalog[3].clone(), catalog[6].clone()];

        let found = evaluate(
            &records,
            &Filter {
                status: Some(Status::ForRent),
                ..Filter::default()
            },
        );

        assert_eq!(ids(&found), ["4"]);
    }

    #[test]
    fn filters_by_min_price() {
        let catalog = catalog();

        let found = evaluate(
            &catalog,
            &Filter {
                min_price: money(1_000_000),
                ..Filter::default()
            },
        );

        assert_eq!(ids(&found), ["1", "2", "5"]);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let catalog = catalog();

        let found = evaluate(
            &catalog,
            &Filter {
                min_price: money(2500),
                max_price: money(4500),
                ..Filter::default()
            },
        );

        assert_eq!(ids(&found), ["4", "6"]);
    }

    #[test]
    fn inverted_price_range_matches_nothing() {
        let catalog = catalog();

        let found = evaluate(
            &catalog,
            &Filter {
                min_price: money(1_000_000),
                max_price: money(1000),
                ..Filter::default()
            },
        );

        assert!(found.is_empty());
    }

    #[test]
    fn zero_max_price_is_unbounded() {
        let catalog = catalog();

        let found = evaluate(
            &catalog,
            &Filter {
                min_price: money(1_000_000),
                max_price: Money::ZERO,
                ..Filter::default()
            },
        );

        assert_eq!(ids(&found), ["1", "2", "5"]);
    }

    #[test]
    fn negative_bounds_are_permissive() {
        let catalog = catalog();

        let found = evaluate(
            &catalog,
            &Filter {
                min_price: Money::new((-5).into()),
                min_baths: Bathrooms::new("-1".parse().unwrap()),
                ..Filter::default()
            },
        );

        assert_eq!(ids(&found), ["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn requires_all_amenities() {
        let catalog = catalog();

        let found = evaluate(
            &catalog,
            &Filter {
                amenities: amenities(&["Pool", "Spa"]),
                ..Filter::default()
            },
        );
        assert_eq!(ids(&found), ["1"]);

        let found = evaluate(
            &catalog,
            &Filter {
                amenities: amenities(&["Pool"]),
                ..Filter::default()
            },
        );
        assert_eq!(ids(&found), ["1", "6"]);
    }

    #[test]
    fn amenities_are_case_sensitive() {
        let catalog = catalog();

        let found = evaluate(
            &catalog,
            &Filter {
                amenities: amenities(&["pool"]),
                ..Filter::default()
            },
        );

        assert!(found.is_empty());
    }

    #[test]
    fn filters_by_kind() {
        let catalog = catalog();

        let found = evaluate(
            &catalog,
            &Filter {
                kind: Some(Kind::Condo),
                ..Filter::default()
            },
        );

        assert_eq!(ids(&found), ["6"]);
    }

    #[test]
    fn filters_by_rooms() {
        let catalog = catalog();

        let found = evaluate(
            &catalog,
            &Filter {
                min_beds: 3,
                min_baths: Bathrooms::new("2.5".parse().unwrap()),
                ..Filter::default()
            },
        );

        assert_eq!(ids(&found), ["1", "2", "5", "7"]);
    }

    #[test]
    fn searches_location_case_insensitively() {
        let catalog = catalog();

        let found = evaluate(
            &catalog,
            &Filter {
                location: Some("SAN ".into()),
                ..Filter::default()
            },
        );
        assert_eq!(ids(&found), ["5", "6"]);

        let found = evaluate(
            &catalog,
            &Filter {
                location: Some(String::new()),
                ..Filter::default()
            },
        );
        assert_eq!(found.len(), catalog.len());

        let found = evaluate(
            &catalog,
            &Filter {
                location: Some("   ".into()),
                ..Filter::default()
            },
        );
        assert_eq!(found.len(), catalog.len());
    }

    #[test]
    fn filters_by_category() {
        let catalog = catalog();

        let found = evaluate(
            &catalog,
            &Filter {
                category: Category::Trending,
                status: Some(Status::ForRent),
                ..Filter::default()
            },
        );

        assert_eq!(ids(&found), ["6"]);
    }

    #[test]
    fn empty_catalog_yields_nothing() {
        let nothing = Vec::<Property>::new();

        assert!(evaluate(&nothing, &Filter::default()).is_empty());
    }

    #[test]
    fn result_is_ordered_subsequence() {
        let catalog = catalog();

        for filter in narrowing() {
            let found = evaluate(&catalog, &filter);

            let mut rest = catalog.iter();
            for property in found {
                assert!(
                    rest.any(|p| p == property),
                    "{filter:?} reordered or fabricated `{}`",
                    property.id,
                );
            }
        }
    }

    #[test]
    fn is_idempotent() {
        let catalog = catalog();

        for filter in narrowing() {
            let once = evaluate(&catalog, &filter);
            let twice = evaluate(once.iter().copied(), &filter);

            assert_eq!(once, twice, "{filter:?}");
        }
    }

    #[test]
    fn narrowing_never_grows() {
        let catalog = catalog();

        let sizes = narrowing()
            .iter()
            .map(|f| evaluate(&catalog, f).len())
            .collect::<Vec<_>>();

        assert!(sizes.windows(2).all(|w| w[0] >= w[1]), "{sizes:?}");
        assert_eq!(sizes.last(), Some(&0));
    }
}
