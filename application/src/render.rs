//! Rendering of the catalog for terminal output.
//!
//! Every view is [`Display`]ed as text, and those having a JSON form are
//! [`Serialize`]able as well.

use std::fmt::{self, Display};

use common::Money;
use itertools::Itertools as _;
use serde::Serialize;
use service::{
    command::submit_listing::Draft,
    domain::{
        property::{Kind, Status},
        Property,
    },
    read::property::{list::Filter, Category},
};

/// Price of a [`Property`], per month when it's for rent.
#[derive(Clone, Copy, Debug)]
pub struct Price<'a>(pub &'a Property);

impl Display for Price<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Property { price, status, .. } = self.0;
        match status {
            Status::ForRent => write!(f, "{price}/mo"),
            Status::ForSale => write!(f, "{price}"),
        }
    }
}

/// Returns the human-readable label of the provided [`Status`].
const fn status_label(status: Status) -> &'static str {
    match status {
        Status::ForSale => "For Sale",
        Status::ForRent => "For Rent",
    }
}

/// Returns the human-readable label of the provided [`Kind`].
const fn kind_label(kind: Kind) -> &'static str {
    match kind {
        Kind::House => "Entire home",
        Kind::Apartment => "Entire apartment",
        Kind::Condo => "Entire condo",
        Kind::Townhouse => "Entire townhouse",
    }
}

/// Short card of a [`Property`] in a list.
#[derive(Clone, Copy, Debug)]
pub struct Card<'a>(pub &'a Property);

impl Display for Card<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.0;

        write!(f, "#{} {}", p.id, p.title)?;
        if p.featured {
            let badge = match p.status {
                Status::ForRent => "Superhost",
                Status::ForSale => "Featured",
            };
            write!(f, " [{badge}]")?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "   {} · {} · {} bd · {} ba · {} sqft",
            p.city().unwrap_or(p.address.as_str()),
            kind_label(p.kind),
            p.bedrooms,
            p.bathrooms,
            p.square_feet,
        )?;
        write!(f, "   {} · {}", Price(p), status_label(p.status))
    }
}

/// Results of a search by a [`Filter`].
///
/// Serializes as the found [`Property`] entities only.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(transparent)]
pub struct Results<'a> {
    /// [`Filter`] the search was made by.
    #[serde(skip)]
    pub filter: &'a Filter,

    /// Found [`Property`] entities.
    pub properties: &'a [Property],
}

impl Display for Results<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.properties.is_empty() {
            writeln!(f, "No properties found")?;
            return write!(
                f,
                "Try changing your search criteria or explore other \
                 categories",
            );
        }

        for property in self.properties {
            writeln!(f, "{}", Card(property))?;
            writeln!(f)?;
        }

        let count = self.properties.len();
        let noun = if count == 1 { "property" } else { "properties" };
        write!(f, "{count} {noun}")?;
        let filter = self.filter;
        if filter.min_price > Money::ZERO || filter.has_max_price() {
            write!(f, " · price {} - ", filter.min_price.compact())?;
            if filter.has_max_price() {
                write!(f, "{}", filter.max_price.compact())?;
            } else {
                write!(f, "any")?;
            }
        }
        Ok(())
    }
}

/// Full view of a [`Property`] along with similar ones.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Detail<'a> {
    /// [`Property`] to show.
    pub property: &'a Property,

    /// [`Property`] entities similar to the shown one.
    pub similar: &'a [Property],
}

impl Display for Detail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.property;

        writeln!(f, "{}", p.title)?;
        writeln!(f, "{}", p.address)?;
        writeln!(f, "{} · {}", Price(p), status_label(p.status))?;
        writeln!(
            f,
            "{} bedrooms · {} bathrooms · {} sq ft · built in {}",
            p.bedrooms, p.bathrooms, p.square_feet, p.year_built,
        )?;
        writeln!(f, "{}", kind_label(p.kind))?;
        writeln!(f)?;
        writeln!(f, "{}", p.description)?;
        writeln!(f)?;
        writeln!(f, "Amenities: {}", p.amenities.iter().join(", "))?;
        writeln!(f, "Location: {}, {}", p.location.lat, p.location.lng)?;
        write!(f, "Images: {}", p.images.len())?;

        if !self.similar.is_empty() {
            writeln!(f)?;
            writeln!(f)?;
            write!(f, "Similar properties:")?;
            for similar in self.similar {
                writeln!(f)?;
                write!(f, "{}", Card(similar))?;
            }
        }
        Ok(())
    }
}

/// Browsing [`Category`] along with its name.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct CategoryEntry {
    /// ID of the [`Category`].
    pub id: Category,

    /// Human-readable name of the [`Category`].
    pub name: &'static str,
}

/// List of all the browsing [`Category`] variants.
#[derive(Clone, Debug, Serialize)]
#[serde(transparent)]
pub struct Categories(pub Vec<CategoryEntry>);

impl Categories {
    /// Lists all the browsing [`Category`] variants.
    #[must_use]
    pub fn all() -> Self {
        Self(
            Category::all()
                .iter()
                .map(|&id| CategoryEntry {
                    id,
                    name: id.name(),
                })
                .collect(),
        )
    }
}

impl Display for Categories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .0
            .iter()
            .format_with("\n", |c, f| {
                f(&format_args!("{:<12} {}", c.id.as_ref(), c.name))
            });
        write!(f, "{lines}")
    }
}

/// Accepted [`Draft`] of a submitted listing.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(transparent)]
pub struct Submitted<'a>(pub &'a Draft);

impl Display for Submitted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.0;

        writeln!(f, "Listing `{}` is valid (draft `{}`)", d.title, d.id)?;
        writeln!(f, "{}", d.address)?;
        writeln!(
            f,
            "{}{} · {} · {}",
            d.price,
            if d.status == Status::ForRent { "/mo" } else { "" },
            status_label(d.status),
            kind_label(d.kind),
        )?;
        write!(
            f,
            "{} bedrooms · {} bathrooms · {} sq ft · built in {}",
            d.bedrooms, d.bathrooms, d.square_feet, d.year_built,
        )
    }
}
