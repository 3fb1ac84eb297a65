//! [`Args`] definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use common::Money;
use service::{
    domain::property::{self, Amenity, Bathrooms, Bedrooms, Kind, Status},
    read::property::{list::Filter, Category},
};

/// Browser of the property listings catalog.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: String,

    /// Print JSON instead of text, regardless of the configured format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Command of the [`Args`].
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search properties matching a filter.
    Search(Search),

    /// Show a property along with similar ones.
    Show {
        /// ID of the property.
        id: property::Id,
    },

    /// List featured properties.
    Featured,

    /// List browsing categories.
    Categories,

    /// Validate a "list your property" form stored as JSON.
    Submit {
        /// Path to the JSON file with the form.
        file: PathBuf,
    },
}

/// Arguments of the [`Command::Search`].
///
/// Options take precedence over the same parameters in the query string.
#[derive(Debug, Default, clap::Args)]
pub struct Search {
    /// URL query string, like `status=for-rent&beds=2&amenities=Pool`.
    #[arg(default_value = "")]
    pub query: String,

    /// Property status (`for-sale` or `for-rent`).
    #[arg(long)]
    pub status: Option<Status>,

    /// Property type (`house`, `apartment`, `condo` or `townhouse`).
    #[arg(long = "type")]
    pub kind: Option<Kind>,

    /// Minimum price in dollars.
    #[arg(long)]
    pub min_price: Option<Money>,

    /// Maximum price in dollars.
    #[arg(long)]
    pub max_price: Option<Money>,

    /// Minimum number of bedrooms.
    #[arg(long)]
    pub beds: Option<Bedrooms>,

    /// Minimum number of bathrooms.
    #[arg(long)]
    pub baths: Option<Bathrooms>,

    /// Required amenity (repeatable).
    #[arg(long = "amenity")]
    pub amenities: Vec<Amenity>,

    /// Text to search in addresses for.
    #[arg(long)]
    pub location: Option<String>,

    /// Browsing category, like `trending` or `apartment`.
    #[arg(long)]
    pub category: Option<Category>,
}

impl Search {
    /// Builds the [`Filter`] described by these [`Search`] arguments.
    #[must_use]
    pub fn into_filter(self) -> Filter {
        let Self {
            query,
            status,
            kind,
            min_price,
            max_price,
            beds,
            baths,
            amenities,
            location,
            category,
        } = self;

        let mut filter = Filter::from_query(&query);
        if status.is_some() {
            filter.status = status;
        }
        if kind.is_some() {
            filter.kind = kind;
        }
        if let Some(min_price) = min_price {
            filter.min_price = min_price;
        }
        if let Some(max_price) = max_price {
            filter.max_price = max_price;
        }
        if let Some(beds) = beds {
            filter.min_beds = beds;
        }
        if let Some(baths) = baths {
            filter.min_baths = baths;
        }
        filter.amenities.extend(amenities);
        if location.is_some() {
            filter.location = location;
        }
        if let Some(category) = category {
            filter.category = category;
        }
        filter
    }
}
