//! Macros for defining kind enums.

/// Macro for defining a kind enum.
///
/// Every variant is represented by its `kebab-case` name both in
/// [`Display`]/[`FromStr`] and in [`serde`] formats.
///
/// [`Display`]: std::fmt::Display
/// [`FromStr`]: std::str::FromStr
/// [`serde`]: https://docs.rs/serde
///
/// # Example
///
/// ```rust
/// # use common::define_kind;
///
/// define_kind! {
///     #[doc = "Shape kind."]
///     enum Kind {
///         #[doc = "A cube"]
///         Cube,
///
///         #[doc = "A sphere"]
///         Sphere,
///     }
/// }
/// ```
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                $variant:ident
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::serde::Deserialize,
            $crate::private::strum::AsRefStr,
            $crate::private::strum::Display,
            $crate::private::strum::EnumString,
            Eq,
            Hash,
            PartialEq,
            $crate::private::serde::Serialize,
        )]
        #[doc = $doc]
        #[serde(rename_all = "kebab-case")]
        #[strum(serialize_all = "kebab-case")]
        pub enum $name {
            $(
                 #[doc = $variant_doc]
                 $variant,
            )*
        }

        impl $name {
            /// Returns all the variants in their declaration order.
            #[must_use]
            pub const fn all() -> &'static [Self] {
                &[$(Self::$variant),*]
            }
        }
    };
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    define_kind! {
        #[doc = "Kind used in tests."]
        enum Tenure {
            #[doc = "Sold."]
            ForSale,

            #[doc = "Rented."]
            ForRent,
        }
    }

    #[test]
    fn uses_kebab_case() {
        assert_eq!(Tenure::ForSale.to_string(), "for-sale");
        assert_eq!(Tenure::ForRent.as_ref(), "for-rent");
        assert_eq!(Tenure::from_str("for-rent").unwrap(), Tenure::ForRent);

        assert!(Tenure::from_str("ForRent").is_err());
        assert!(Tenure::from_str("all").is_err());
    }

    #[test]
    fn lists_all_variants_in_order() {
        assert_eq!(Tenure::all(), &[Tenure::ForSale, Tenure::ForRent]);
    }
}
