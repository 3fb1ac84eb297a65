//! URL query parameters of a [`Filter`].

use std::borrow::Cow;

use common::Money;
use url::form_urlencoded;

use crate::domain::property::Amenity;

use super::{list::Filter, Category};

/// Parameter of [`Filter::status`].
const STATUS: &str = "status";

/// Parameter of [`Filter::kind`].
const TYPE: &str = "type";

/// Parameter of [`Filter::min_price`].
const MIN_PRICE: &str = "minPrice";

/// Parameter of [`Filter::max_price`].
const MAX_PRICE: &str = "maxPrice";

/// Parameter of [`Filter::min_beds`].
const BEDS: &str = "beds";

/// Parameter of [`Filter::min_baths`].
const BATHS: &str = "baths";

/// Repeatable parameter of [`Filter::amenities`].
const AMENITIES: &str = "amenities";

/// Parameter of [`Filter::location`].
const LOCATION: &str = "location";

/// Parameter of [`Filter::category`].
const CATEGORY: &str = "category";

impl Filter {
    /// Parses a [`Filter`] out of the provided URL `query` string (with or
    /// without the leading `?`).
    ///
    /// Parsing never fails: missing, unknown or malformed parameters fall
    /// back to their unconstrained values. Only the first occurrence of a
    /// non-repeatable parameter counts.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let pairs = form_urlencoded::parse(
            query.strip_prefix('?').unwrap_or(query).as_bytes(),
        )
        .collect::<Vec<(Cow<'_, str>, Cow<'_, str>)>>();
        let get = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.trim())
        };

        Self {
            status: get(STATUS).and_then(|v| v.parse().ok()),
            kind: get(TYPE).and_then(|v| v.parse().ok()),
            min_price: get(MIN_PRICE)
                .and_then(|v| v.parse().ok())
                .unwrap_or(Money::ZERO),
            max_price: get(MAX_PRICE)
                .and_then(|v| v.parse().ok())
                .filter(|max: &Money| !max.amount().is_zero())
                .unwrap_or(Money::MAX),
            min_beds: get(BEDS).and_then(|v| v.parse().ok()).unwrap_or(0),
            min_baths: get(BATHS)
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            amenities: pairs
                .iter()
                .filter(|(k, _)| k == AMENITIES)
                .filter_map(|(_, v)| Amenity::new(v.trim()))
                .collect(),
            location: get(LOCATION)
                .filter(|v| !v.is_empty())
                .map(ToOwned::to_owned),
            category: get(CATEGORY)
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        }
    }

    /// Serializes this [`Filter`] into a URL query string (without the
    /// leading `?`).
    ///
    /// Only constraining parameters are emitted, so the default [`Filter`]
    /// produces an empty string.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());

        if let Some(status) = self.status {
            _ = query.append_pair(STATUS, status.as_ref());
        }
        if let Some(kind) = self.kind {
            _ = query.append_pair(TYPE, kind.as_ref());
        }
        if self.min_price > Money::ZERO {
            _ = query.append_pair(
                MIN_PRICE,
                &self.min_price.amount().normalize().to_string(),
            );
        }
        if self.has_max_price() {
            _ = query.append_pair(
                MAX_PRICE,
                &self.max_price.amount().normalize().to_string(),
            );
        }
        if self.min_beds > 0 {
            _ = query.append_pair(BEDS, &self.min_beds.to_string());
        }
        if !self.min_baths.count().is_zero() {
            _ = query.append_pair(
                BATHS,
                &self.min_baths.count().normalize().to_string(),
            );
        }
        for amenity in &self.amenities {
            _ = query.append_pair(AMENITIES, amenity.as_str());
        }
        if let Some(location) = self.location() {
            _ = query.append_pair(LOCATION, location);
        }
        if self.category != Category::All {
            _ = query.append_pair(CATEGORY, self.category.as_ref());
        }

        query.finish()
    }
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::{
        domain::property::{Amenity, Bathrooms, Kind, Status},
        infra::Memory,
        read::property::{
            list::{evaluate, Filter},
            Category,
        },
    };

    fn money(amount: u32) -> Money {
        Money::new(amount.into())
    }

    #[test]
    fn default_is_empty_query() {
        assert_eq!(Filter::from_query(""), Filter::default());
        assert_eq!(Filter::from_query("?"), Filter::default());
        assert_eq!(Filter::default().to_query(), "");
    }

    #[test]
    fn parses_every_parameter() {
        let filter = Filter::from_query(
            "?status=for-rent&type=condo&minPrice=1000&maxPrice=5000\
             &beds=2&baths=1.5&amenities=Pool&amenities=Ocean+View\
             &location=San%20Diego&category=trending",
        );

        assert_eq!(filter.status, Some(Status::ForRent));
        assert_eq!(filter.kind, Some(Kind::Condo));
        assert_eq!(filter.min_price, money(1000));
        assert_eq!(filter.max_price, money(5000));
        assert_eq!(filter.min_beds, 2);
        assert_eq!(filter.min_baths, Bathrooms::new("1.5".parse().unwrap()));
        assert_eq!(
            filter
                .amenities
                .iter()
                .map(Amenity::as_str)
                .collect::<Vec<&str>>(),
            ["Ocean View", "Pool"],
        );
        assert_eq!(filter.location.as_deref(), Some("San Diego"));
        assert_eq!(filter.category, Category::Trending);
    }

    #[test]
    fn falls_back_on_malformed_values() {
        let filter = Filter::from_query(
            "status=all&type=castle&minPrice=cheap&maxPrice=0&beds=-1\
             &baths=x&amenities=&location=%20&category=moon&foo=bar",
        );

        assert_eq!(filter, Filter::default());
    }

    #[test]
    fn first_occurrence_wins() {
        let filter = Filter::from_query("type=house&type=condo");

        assert_eq!(filter.kind, Some(Kind::House));
    }

    #[test]
    fn serializes_only_constraints() {
        let filter = Filter {
            status: Some(Status::ForSale),
            min_price: money(500_000),
            min_beds: 3,
            location: Some("New York".into()),
            ..Filter::default()
        };

        assert_eq!(
            filter.to_query(),
            "status=for-sale&minPrice=500000&beds=3&location=New+York",
        );
    }

    #[test]
    fn survives_serialization() {
        let query = "status=for-rent&type=apartment&minPrice=1000\
                     &maxPrice=2000000&beds=1&baths=2.5\
                     &amenities=Garden&amenities=Pool&location=Chicago\
                     &category=apartment";

        let filter = Filter::from_query(query);

        assert_eq!(filter.to_query(), query);
        assert_eq!(Filter::from_query(&filter.to_query()), filter);
    }

    #[test]
    fn survives_serialization_of_blank_values() {
        let catalog = Memory::sample();
        let matched = |filter: &Filter| {
            evaluate(catalog.properties(), filter)
                .into_iter()
                .map(|p| p.id.to_string())
                .collect::<Vec<_>>()
        };

        for filter in [
            Filter {
                max_price: Money::ZERO,
                ..Filter::default()
            },
            Filter {
                min_price: money(1_000_000),
                max_price: Money::ZERO,
                ..Filter::default()
            },
            Filter {
                location: Some("   ".into()),
                ..Filter::default()
            },
            Filter {
                location: Some(" Chicago ".into()),
                ..Filter::default()
            },
        ] {
            let restored = Filter::from_query(&filter.to_query());

            assert_eq!(matched(&restored), matched(&filter), "{filter:?}");
        }

        let filter = Filter {
            max_price: Money::ZERO,
            location: Some("  ".into()),
            ..Filter::default()
        };
        assert_eq!(filter.to_query(), "");
    }
}
