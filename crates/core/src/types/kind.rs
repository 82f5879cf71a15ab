//! Cart item kinds.

use serde::{Deserialize, Serialize};

/// What kind of thing a cart line refers to.
///
/// Supplies and accessories are `Product`; a for-sale animal is `Pet`.
/// Cart lines are keyed by `(id, kind)`, so a pet and a product sharing an
/// identifier never collapse into one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Product,
    Pet,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Product => write!(f, "product"),
            Self::Pet => write!(f, "pet"),
        }
    }
}

impl std::str::FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "product" => Ok(Self::Product),
            "pet" => Ok(Self::Pet),
            _ => Err(format!("invalid item kind: {s}")),
        }
    }
}
