//! Coarse age buckets for pet listings.

use serde::{Deserialize, Serialize};

/// Coarse age bucket derived from a listing's free-text age field.
///
/// The ordering used for age sorting is
/// `Puppy < Young < Adult < Senior < Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AgeCategory {
    /// Under a year old (also kittens).
    Puppy,
    /// Up to three years.
    Young,
    /// Four to seven years.
    Adult,
    /// Eight years and older.
    Senior,
    /// Age text could not be interpreted.
    #[default]
    Unknown,
}

impl AgeCategory {
    /// Bucket a whole number of years.
    #[must_use]
    pub const fn from_years(years: u32) -> Self {
        match years {
            0..=3 => Self::Young,
            4..=7 => Self::Adult,
            _ => Self::Senior,
        }
    }

    /// Sort rank: `Puppy` sorts first, `Unknown` last.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Puppy => 0,
            Self::Young => 1,
            Self::Adult => 2,
            Self::Senior => 3,
            Self::Unknown => 4,
        }
    }
}

impl std::fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Puppy => write!(f, "puppy"),
            Self::Young => write!(f, "young"),
            Self::Adult => write!(f, "adult"),
            Self::Senior => write!(f, "senior"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for AgeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "puppy" => Ok(Self::Puppy),
            "young" => Ok(Self::Young),
            "adult" => Ok(Self::Adult),
            "senior" => Ok(Self::Senior),
            "unknown" => Ok(Self::Unknown),
            _ => Err(format!("invalid age category: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordering() {
        assert!(AgeCategory::Puppy.rank() < AgeCategory::Young.rank());
        assert!(AgeCategory::Young.rank() < AgeCategory::Adult.rank());
        assert!(AgeCategory::Adult.rank() < AgeCategory::Senior.rank());
        assert!(AgeCategory::Senior.rank() < AgeCategory::Unknown.rank());
    }

    #[test]
    fn test_from_years_boundaries() {
        assert_eq!(AgeCategory::from_years(3), AgeCategory::Young);
        assert_eq!(AgeCategory::from_years(4), AgeCategory::Adult);
        assert_eq!(AgeCategory::from_years(7), AgeCategory::Adult);
        assert_eq!(AgeCategory::from_years(8), AgeCategory::Senior);
    }

    #[test]
    fn test_display_from_str_roundtrip() {
        for category in [
            AgeCategory::Puppy,
            AgeCategory::Young,
            AgeCategory::Adult,
            AgeCategory::Senior,
            AgeCategory::Unknown,
        ] {
            let parsed: AgeCategory = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&AgeCategory::Puppy).unwrap();
        assert_eq!(json, "\"puppy\"");
    }
}
