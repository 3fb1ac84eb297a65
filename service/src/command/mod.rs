//! [`Command`] definition.

pub mod submit_listing;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::submit_listing::SubmitListing;
