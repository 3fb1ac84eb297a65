//! [`Command`] for submitting a new listing.

use std::fmt;

use common::Money;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use time::OffsetDateTime;
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::Property;
use crate::{
    domain::property::{
        self, Address, Amenity, Bathrooms, Bedrooms, Description, ImageUrl,
        Kind, SquareFeet, Status, Title, YearBuilt,
    },
    Service,
};

use super::Command;

/// [`Command`] for submitting a new [`Property`] listing.
///
/// Every field holds the raw user input. Nothing is stored: a successful
/// submission results in a validated [`Draft`].
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default, rename_all = "camelCase")]
pub struct SubmitListing {
    /// Title of the listing.
    pub title: String,

    /// Description of the listing.
    pub description: String,

    /// Price of the listing.
    pub price: String,

    /// Street address of the listing.
    pub address: String,

    /// City of the listing.
    pub city: String,

    /// State of the listing.
    pub state: String,

    /// Zip code of the listing.
    pub zip_code: String,

    /// [`Kind`] of the listing.
    #[default("house".to_owned())]
    pub property_type: String,

    /// [`Status`] of the listing.
    #[default("for-sale".to_owned())]
    pub status: String,

    /// Number of bedrooms of the listing.
    pub bedrooms: String,

    /// Number of bathrooms of the listing.
    pub bathrooms: String,

    /// Living area of the listing in square feet.
    pub square_feet: String,

    /// Year the listed property was built in.
    pub year_built: String,

    /// [`Amenity`] labels of the listing.
    pub amenities: Vec<String>,

    /// [`ImageUrl`]s of the listing.
    pub images: Vec<String>,

    /// Indicator whether the terms and conditions are agreed to.
    pub agree_to_terms: bool,
}

/// Validated [`SubmitListing`], ready to become a [`Property`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    /// ID assigned to this [`Draft`].
    pub id: property::Id,

    /// [`Title`] of this [`Draft`].
    pub title: Title,

    /// [`Address`] of this [`Draft`].
    pub address: Address,

    /// Price of this [`Draft`].
    pub price: Money,

    /// Number of bedrooms of this [`Draft`].
    pub bedrooms: Bedrooms,

    /// Number of bathrooms of this [`Draft`].
    pub bathrooms: Bathrooms,

    /// Living area of this [`Draft`].
    pub square_feet: SquareFeet,

    /// [`Description`] of this [`Draft`].
    pub description: Description,

    /// Images of this [`Draft`].
    pub images: Vec<ImageUrl>,

    /// [`Amenity`] labels of this [`Draft`].
    pub amenities: Vec<Amenity>,

    /// [`Kind`] of this [`Draft`].
    #[serde(rename = "type")]
    pub kind: Kind,

    /// [`Status`] of this [`Draft`].
    pub status: Status,

    /// Year the property of this [`Draft`] was built in.
    pub year_built: YearBuilt,
}

impl SubmitListing {
    /// Validates this [`SubmitListing`] against the provided `current_year`.
    ///
    /// Text inputs are trimmed before validation. Empty `bedrooms` and
    /// `bathrooms` mean zero.
    ///
    /// # Errors
    ///
    /// Errors with every [`Violation`] found, if any.
    #[expect(clippy::too_many_lines, reason = "flat list of rules")]
    pub fn validate(self, current_year: i32) -> Result<Draft, ExecutionError> {
        let mut violations = Vec::new();
        let mut check = Check(&mut violations);

        let title = check.or(
            min_chars(&self.title, 5).and_then(Title::new),
            Violation::Title,
        );
        let description = check.or(
            min_chars(&self.description, 20).and_then(Description::new),
            Violation::Description,
        );
        let price = check.or(
            self.price
                .parse::<Money>()
                .ok()
                .filter(|p| *p > Money::ZERO),
            Violation::Price,
        );
        let street =
            check.or(min_chars(&self.address, 5), Violation::Address);
        let city = check.or(min_chars(&self.city, 2), Violation::City);
        let state = check.or(min_chars(&self.state, 2), Violation::State);
        let zip_code =
            check.or(min_chars(&self.zip_code, 5), Violation::ZipCode);
        let kind = check.or(
            self.property_type.trim().parse::<Kind>().ok(),
            Violation::Kind,
        );
        let status = check.or(
            self.status.trim().parse::<Status>().ok(),
            Violation::Status,
        );
        let bedrooms = check.or(
            or_zero(&self.bedrooms).parse::<Bedrooms>().ok(),
            Violation::Bedrooms,
        );
        let bathrooms = check.or(
            or_zero(&self.bathrooms)
                .parse::<Bathrooms>()
                .ok()
                .filter(|b| !b.count().is_sign_negative()),
            Violation::Bathrooms,
        );
        let square_feet = check.or(
            self.square_feet
                .trim()
                .parse::<SquareFeet>()
                .ok()
                .filter(|s| *s > 0),
            Violation::SquareFeet,
        );
        let year_built = check.or(
            self.year_built
                .trim()
                .parse::<YearBuilt>()
                .ok()
                .filter(|y| *y > 1800 && i32::from(*y) <= current_year),
            Violation::YearBuilt(current_year),
        );
        let amenities = check.or(
            self.amenities
                .iter()
                .map(|a| Amenity::new(a.trim()))
                .collect::<Option<Vec<_>>>(),
            Violation::Amenity,
        );
        let images = check.or(
            self.images
                .iter()
                .map(|i| ImageUrl::new(i.trim()))
                .collect::<Option<Vec<_>>>(),
            Violation::Image,
        );
        let agreed =
            check.or(self.agree_to_terms.then_some(()), Violation::Terms);

        let (
            Some(title),
            Some(description),
            Some(price),
            Some(street),
            Some(city),
            Some(state),
            Some(zip_code),
            Some(kind),
            Some(status),
            Some(bedrooms),
            Some(bathrooms),
            Some(square_feet),
            Some(year_built),
            Some(amenities),
            Some(images),
            Some(()),
        ) = (
            title,
            description,
            price,
            street,
            city,
            state,
            zip_code,
            kind,
            status,
            bedrooms,
            bathrooms,
            square_feet,
            year_built,
            amenities,
            images,
            agreed,
        )
        else {
            return Err(ExecutionError { violations });
        };

        let Some(address) = Address::from_parts(street, city, state, zip_code)
        else {
            return Err(ExecutionError {
                violations: vec![Violation::Address],
            });
        };

        Ok(Draft {
            id: property::Id::random(),
            title,
            address,
            price,
            bedrooms,
            bathrooms,
            square_feet,
            description,
            images,
            amenities,
            kind,
            status,
            year_built,
        })
    }
}

impl<Db> Command<SubmitListing> for Service<Db> {
    type Ok = Draft;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: SubmitListing) -> Result<Self::Ok, Self::Err> {
        let current_year = OffsetDateTime::now_utc().year();

        let draft = cmd.validate(current_year).map_err(|e| {
            log::debug!("listing rejected: {e}");
            tracerr::new!(e)
        })?;
        log::info!("listing `{}` accepted as `{}`", draft.title, draft.id);

        Ok(draft)
    }
}

/// Collector of [`Violation`]s.
struct Check<'v>(&'v mut Vec<Violation>);

impl Check<'_> {
    /// Passes the provided `value` through, recording the `violation` if
    /// there is no `value`.
    fn or<T>(&mut self, value: Option<T>, violation: Violation) -> Option<T> {
        if value.is_none() {
            self.0.push(violation);
        }
        value
    }
}

/// Returns the trimmed `input` if it's at least `min` characters long.
fn min_chars(input: &str, min: usize) -> Option<&str> {
    let input = input.trim();
    (input.chars().count() >= min).then_some(input)
}

/// Returns the trimmed `input`, or `0` if it's empty.
fn or_zero(input: &str) -> &str {
    match input.trim() {
        "" => "0",
        input => input,
    }
}

/// Rule of a [`SubmitListing`] violated by its input.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Violation {
    /// Title is too short.
    #[display("Title must be at least 5 characters")]
    Title,

    /// Description is too short.
    #[display("Description must be at least 20 characters")]
    Description,

    /// Price is not a positive number.
    #[display("Price must be a positive number")]
    Price,

    /// Address is missing.
    #[display("Address is required")]
    Address,

    /// City is missing.
    #[display("City is required")]
    City,

    /// State is missing.
    #[display("State is required")]
    State,

    /// Zip code is missing.
    #[display("Zip code is required")]
    ZipCode,

    /// Unknown property type.
    #[display(
        "Property type must be one of: house, apartment, condo, townhouse"
    )]
    Kind,

    /// Unknown status.
    #[display("Status must be one of: for-sale, for-rent")]
    Status,

    /// Bedrooms is not a non-negative integer.
    #[display("Bedrooms must be a non-negative number")]
    Bedrooms,

    /// Bathrooms is not a non-negative number.
    #[display("Bathrooms must be a non-negative number")]
    Bathrooms,

    /// Square feet is not a positive number.
    #[display("Square feet must be a positive number")]
    SquareFeet,

    /// Year built is out of range, up to the contained current year.
    #[display("Year built must be between 1800 and {_0}")]
    YearBuilt(i32),

    /// Some amenity label is blank or too long.
    #[display("Amenities must not be blank")]
    Amenity,

    /// Some image reference is blank or too long.
    #[display("Images must not be blank")]
    Image,

    /// Terms and conditions are not agreed to.
    #[display("You must agree to the terms and conditions")]
    Terms,
}

/// Error of [`SubmitListing`] [`Command`] execution.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub struct ExecutionError {
    /// Every [`Violation`] of the submitted listing.
    pub violations: Vec<Violation>,
}

impl Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid listing: ")?;
        for (n, violation) in self.violations.iter().enumerate() {
            if n > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}
