//! String-backed enumerations.
//!
//! Listing tags are stored as plain strings by the marketplace. Each tag has a
//! known vocabulary, but a value outside it is kept verbatim in `Other` rather
//! than rejected: renderers fall back to a default label for it.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Value outside the known vocabulary, kept verbatim
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $text,)+
                    $name::Other(value) => value,
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($text => $name::$variant,)+
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($text => $name::$variant,)+
                    _ => $name::Other(value),
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(value) => value,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

vocabulary! {
    /// Lifecycle status of a listing
    pub enum ListingStatus {
        Draft => "draft",
        Active => "active",
        Suspended => "suspended",
        Sold => "sold",
        Closed => "closed",
        Rejected => "rejected",
        Spam => "spam",
    }
}

vocabulary! {
    /// Which type-specific record a listing is composed with
    pub enum ListingType {
        Item => "item",
        Lodging => "lodging",
        /// Listing with no type-specific record
        Empty => "empty",
    }
}

vocabulary! {
    /// How the listing changes hands
    pub enum SaleType {
        Sell => "sell",
        Rent => "rent",
        Book => "book",
        Trade => "trade",
        Free => "free",
    }
}

vocabulary! {
    /// Physical condition of an item
    pub enum Condition {
        NotApplicable => "n/a",
        New => "new",
        Excellent => "excellent",
        VeryGood => "very good",
        Good => "good",
        Acceptable => "acceptable",
        Damaged => "damaged",
    }
}

vocabulary! {
    /// Kind of lodging being booked
    pub enum LodgingType {
        Hotel => "hotel",
        Airbnb => "airbnb",
        Cruise => "cruise",
    }
}

impl Default for ListingStatus {
    fn default() -> Self {
        Self::Draft
    }
}

impl Default for Condition {
    fn default() -> Self {
        Self::NotApplicable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values_parse_to_variants() {
        assert_eq!(SaleType::from("book"), SaleType::Book);
        assert_eq!(Condition::from("very good"), Condition::VeryGood);
        assert_eq!(LodgingType::from("hotel"), LodgingType::Hotel);
        assert_eq!(ListingStatus::from("sold"), ListingStatus::Sold);
    }

    #[test]
    fn test_unknown_values_are_kept_verbatim() {
        let sale = SaleType::from("auction".to_string());
        assert_eq!(sale, SaleType::Other("auction".to_string()));
        assert_eq!(sale.as_str(), "auction");
    }

    #[test]
    fn test_serde_roundtrips_through_plain_strings() {
        let json = serde_json::to_string(&LodgingType::Cruise).unwrap();
        assert_eq!(json, r#""cruise""#);

        let parsed: LodgingType = serde_json::from_str(r#""hostel""#).unwrap();
        assert_eq!(parsed, LodgingType::Other("hostel".to_string()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#""hostel""#);
    }

    #[test]
    fn test_known_values_display_as_their_tag() {
        for text in ["item", "lodging", "empty"] {
            let listing_type = ListingType::from(text);
            assert!(!matches!(listing_type, ListingType::Other(_)));
            assert_eq!(listing_type.to_string(), text);
        }
    }
}
