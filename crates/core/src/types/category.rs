//! Product categories.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// A category string that does not name any [`Category`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// The category a product is shelved under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tops,
    Outerwear,
    Bottoms,
}

impl Category {
    /// Every category, in the order the shop's category select lists them.
    pub const ALL: [Self; 3] = [Self::Tops, Self::Bottoms, Self::Outerwear];

    /// The identifier used in query strings and the category select.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tops => "tops",
            Self::Outerwear => "outerwear",
            Self::Bottoms => "bottoms",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tops => "Tops",
            Self::Outerwear => "Outerwear",
            Self::Bottoms => "Bottoms",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tops" => Ok(Self::Tops),
            "outerwear" => Ok(Self::Outerwear),
            "bottoms" => Ok(Self::Bottoms),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}
