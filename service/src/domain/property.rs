//! [`Property`] definitions.

use std::str::FromStr;

use common::{define_kind, Money};
use derive_more::{AsRef, Display, From, Into};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// Property listed for rent or sale.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// ID of this [`Property`].
    pub id: Id,

    /// [`Title`] of this [`Property`].
    pub title: Title,

    /// [`Address`] this [`Property`] is located at.
    pub address: Address,

    /// Price of this [`Property`].
    ///
    /// Monthly rent for [`Status::ForRent`], the full price otherwise.
    pub price: Money,

    /// Number of bedrooms in this [`Property`].
    pub bedrooms: Bedrooms,

    /// Number of bathrooms in this [`Property`].
    pub bathrooms: Bathrooms,

    /// Living area of this [`Property`].
    pub square_feet: SquareFeet,

    /// [`Description`] of this [`Property`].
    pub description: Description,

    /// Images of this [`Property`], the first one being the cover.
    pub images: Vec<ImageUrl>,

    /// [`Amenity`] labels of this [`Property`].
    pub amenities: Vec<Amenity>,

    /// [`Kind`] of this [`Property`].
    #[serde(rename = "type")]
    pub kind: Kind,

    /// [`Status`] of this [`Property`].
    pub status: Status,

    /// Geographic [`Coordinates`] of this [`Property`].
    pub location: Coordinates,

    /// Year this [`Property`] was built in.
    pub year_built: YearBuilt,

    /// Indicator whether this [`Property`] is promoted.
    pub featured: bool,
}

impl Property {
    /// Returns the city this [`Property`] is located in, if its [`Address`]
    /// mentions one.
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.address.city()
    }

    /// Indicates whether this [`Property`] has the provided [`Amenity`].
    #[must_use]
    pub fn has_amenity(&self, amenity: &Amenity) -> bool {
        self.amenities.contains(amenity)
    }
}

/// Defines a validated text newtype.
macro_rules! define_text {
    (
        #[doc = $doc:literal]
        struct $name:ident(max = $max:literal);
    ) => {
        #[doc = $doc]
        #[derive(
            AsRef,
            Clone,
            Debug,
            Display,
            Eq,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
            Serialize,
        )]
        #[as_ref(str)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!(
                "Creates a new [`", stringify!($name), "`] if the given ",
                "`value` is valid.",
            )]
            #[must_use]
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let value = value.into();
                Self::check(&value).then_some(Self(value))
            }

            #[doc = concat!(
                "Returns this [`", stringify!($name), "`] as a string slice.",
            )]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            #[doc = concat!(
                "Checks whether the given `value` is a valid [`",
                stringify!($name), "`].",
            )]
            fn check(value: &str) -> bool {
                value.trim() == value
                    && !value.is_empty()
                    && value.len() <= $max
            }
        }

        impl FromStr for $name {
            type Err = &'static str;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s).ok_or(concat!("invalid `", stringify!($name), "`"))
            }
        }
    };
}

define_text! {
    #[doc = "ID of a [`Property`]."]
    struct Id(max = 64);
}

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

define_text! {
    #[doc = "Title of a [`Property`]."]
    struct Title(max = 256);
}

define_text! {
    #[doc = "Full address of a [`Property`], like \
             `123 Oceanview Drive, Miami, FL 33101`."]
    struct Address(max = 512);
}

impl Address {
    /// Creates a new [`Address`] out of its parts.
    #[must_use]
    pub fn from_parts(
        street: &str,
        city: &str,
        state: &str,
        zip_code: &str,
    ) -> Option<Self> {
        Self::new(format!("{street}, {city}, {state} {zip_code}"))
    }

    /// Returns the city part of this [`Address`].
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.0
            .split(',')
            .nth(1)
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }
}

define_text! {
    #[doc = "Free-text description of a [`Property`]."]
    struct Description(max = 4096);
}

define_text! {
    #[doc = "Reference to an image of a [`Property`]."]
    struct ImageUrl(max = 2048);
}

define_text! {
    #[doc = "Amenity label of a [`Property`], like `Pool` or `Fireplace`."]
    struct Amenity(max = 128);
}

/// Number of bedrooms in a [`Property`].
pub type Bedrooms = u8;

/// Living area of a [`Property`] in square feet.
pub type SquareFeet = u32;

/// Year a [`Property`] was built in.
pub type YearBuilt = u16;

/// Number of bathrooms in a [`Property`], where half-baths count as `0.5`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Bathrooms(Decimal);

impl Bathrooms {
    /// Creates new [`Bathrooms`] out of the provided `count`.
    #[must_use]
    pub const fn new(count: Decimal) -> Self {
        Self(count)
    }

    /// Returns the count of these [`Bathrooms`].
    #[must_use]
    pub const fn count(self) -> Decimal {
        self.0
    }
}

impl FromStr for Bathrooms {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .map(Self)
            .map_err(|_| "invalid `Bathrooms`")
    }
}

/// Geographic coordinates of a [`Property`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub lat: f64,

    /// Longitude in degrees.
    pub lng: f64,
}

define_kind! {
    #[doc = "Kind of a [`Property`]."]
    enum Kind {
        #[doc = "A detached house."]
        House,

        #[doc = "An apartment in a building."]
        Apartment,

        #[doc = "A condominium unit."]
        Condo,

        #[doc = "A townhouse."]
        Townhouse,
    }
}

define_kind! {
    #[doc = "Status of a [`Property`] on the market."]
    enum Status {
        #[doc = "The [`Property`] is for sale."]
        ForSale,

        #[doc = "The [`Property`] is for rent."]
        ForRent,
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::{Address, Amenity, Bathrooms, Id, Kind, Status, Title};

    #[test]
    fn text_validation() {
        assert!(Title::new("Modern Urban Loft").is_some());
        assert!(Title::new("").is_none());
        assert!(Title::new(" Loft").is_none());
        assert!(Title::new("Loft ").is_none());
        assert!(Amenity::new("x".repeat(129)).is_none());
        assert!(Id::from_str("7").is_ok());
        assert!(Id::from_str("").is_err());
    }

    #[test]
    fn random_ids_differ() {
        assert_ne!(Id::random(), Id::random());
    }

    #[test]
    fn address_city() {
        let address =
            Address::new("123 Oceanview Drive, Miami, FL 33101").unwrap();
        assert_eq!(address.city(), Some("Miami"));

        let address = Address::new("444 Urban Street").unwrap();
        assert_eq!(address.city(), None);

        let address = Address::new("444 Urban Street, , TX").unwrap();
        assert_eq!(address.city(), None);
    }

    #[test]
    fn address_from_parts() {
        let address =
            Address::from_parts("555 Pine Trail", "Aspen", "CO", "81611")
                .unwrap();
        assert_eq!(address.to_string(), "555 Pine Trail, Aspen, CO 81611");
        assert_eq!(address.city(), Some("Aspen"));
    }

    #[test]
    fn bathrooms_from_str() {
        assert_eq!(
            Bathrooms::from_str("3.5").unwrap(),
            Bathrooms::new("3.5".parse().unwrap()),
        );
        assert!(Bathrooms::from_str("many").is_err());
    }

    #[test]
    fn kinds_use_kebab_case() {
        assert_eq!(Status::ForSale.to_string(), "for-sale");
        assert_eq!(Status::from_str("for-rent").unwrap(), Status::ForRent);
        assert_eq!(Kind::from_str("townhouse").unwrap(), Kind::Townhouse);
        assert!(Kind::from_str("castle").is_err());
    }
}
