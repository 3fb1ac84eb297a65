//! [`Category`] definitions.

use common::define_kind;

#[cfg(doc)]
use crate::domain::property::Amenity;
use crate::domain::{property::Kind, Property};

define_kind! {
    #[doc = "Browsing category of [`Property`] entities."]
    enum Category {
        #[doc = "Every [`Property`]."]
        All,

        #[doc = "Properties at the waterfront."]
        Beachfront,

        #[doc = "Properties with a mountain view."]
        Mountain,

        #[doc = "Properties in the countryside."]
        Countryside,

        #[doc = "Camping sites."]
        Camping,

        #[doc = "Mansions."]
        Mansion,

        #[doc = "Lofts."]
        Loft,

        #[doc = "Properties in the tropics."]
        Tropical,

        #[doc = "Properties with ski-in/ski-out access."]
        SkiIn,

        #[doc = "Featured properties."]
        Trending,

        #[doc = "Historic properties."]
        Historic,

        #[doc = "Properties at a lake."]
        Lakefront,

        #[doc = "Apartments."]
        Apartment,
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::All
    }
}

impl Category {
    /// Returns the human-readable name of this [`Category`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Beachfront => "Beachfront",
            Self::Mountain => "Mountain view",
            Self::Countryside => "Countryside",
            Self::Camping => "Camping",
            Self::Mansion => "Mansions",
            Self::Loft => "Lofts",
            Self::Tropical => "Tropical",
            Self::SkiIn => "Ski-in/out",
            Self::Trending => "Trending",
            Self::Historic => "Historic",
            Self::Lakefront => "Lakefront",
            Self::Apartment => "Apartments",
        }
    }

    /// Indicates whether the provided [`Property`] belongs to this
    /// [`Category`].
    ///
    /// Categories without any backing [`Property`] attribute match nothing.
    #[must_use]
    pub fn matches(self, property: &Property) -> bool {
        match self {
            Self::All => true,
            Self::Beachfront => has_amenity(property, "Waterfront"),
            Self::Mountain => has_amenity(property, "Mountain View"),
            Self::Apartment => property.kind == Kind::Apartment,
            Self::Trending => property.featured,
            Self::Countryside
            | Self::Camping
            | Self::Mansion
            | Self::Loft
            | Self::Tropical
            | Self::SkiIn
            | Self::Historic
            | Self::Lakefront => false,
        }
    }
}

/// Indicates whether the provided [`Property`] has the `label`ed [`Amenity`].
fn has_amenity(property: &Property, label: &str) -> bool {
    property
        .amenities
        .iter()
        .any(|amenity| amenity.as_str() == label)
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use crate::infra::Memory;

    use super::Category;

    fn ids(category: Category) -> Vec<String> {
        Memory::sample()
            .properties()
            .iter()
            .filter(|p| category.matches(p))
            .map(|p| p.id.to_string())
            .collect()
    }

    #[test]
    fn parses_ids() {
        assert_eq!(Category::from_str("ski-in").unwrap(), Category::SkiIn);
        assert_eq!(Category::from_str("all").unwrap(), Category::All);
        assert_eq!(Category::SkiIn.name(), "Ski-in/out");
        assert_eq!(Category::all().len(), 13);
        assert_eq!(Category::default(), Category::All);
    }

    #[test]
    fn all_matches_everything() {
        assert_eq!(
            ids(Category::All),
            ["1", "2", "3", "4", "5", "6", "7", "8"],
        );
    }

    #[test]
    fn trending_matches_featured() {
        assert_eq!(ids(Category::Trending), ["1", "2", "5", "6"]);
    }

    #[test]
    fn apartment_matches_kind() {
        assert_eq!(ids(Category::Apartment), ["2", "4"]);
    }

    #[test]
    fn amenity_categories_require_exact_labels() {
        // "Mountain Views" is not "Mountain View".
        assert!(ids(Category::Mountain).is_empty());
        assert!(ids(Category::Beachfront).is_empty());
    }

    #[test]
    fn amenity_categories_match_labeled_properties() {
        let catalog = Memory::sample();
        let with_amenity = |label: &str| {
            let mut property = catalog.properties()[0].clone();
            property.amenities = vec![label.parse().unwrap()];
            property
        };

        let waterfront = with_amenity("Waterfront");
        let mountain_view = with_amenity("Mountain View");

        assert!(Category::Beachfront.matches(&waterfront));
        assert!(!Category::Beachfront.matches(&mountain_view));
        assert!(Category::Mountain.matches(&mountain_view));
        assert!(!Category::Mountain.matches(&waterfront));
        assert!(!Category::Mountain.matches(&with_amenity("mountain view")));
    }

    #[test]
    fn unbacked_categories_match_nothing() {
        for category in [Category::Camping, Category::Historic, Category::Loft]
        {
            assert!(ids(category).is_empty(), "{category} matched");
        }
    }
}
