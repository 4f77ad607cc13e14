use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Vehicle price tier offered by the financing form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tier1,
    Tier2,
    Tier3,
}

impl Category {
    /// All tiers in form order
    pub const ALL: [Category; 3] = [Category::Tier1, Category::Tier2, Category::Tier3];

    /// Fixed vehicle price for this tier
    pub fn price(&self) -> Decimal {
        match self {
            Category::Tier1 => Decimal::from(725_000),
            Category::Tier2 => Decimal::from(770_000),
            Category::Tier3 => Decimal::from(855_000),
        }
    }

    /// Price lookup for a possibly unresolved selection; unresolved is 0
    pub fn price_of(category: Option<Category>) -> Decimal {
        category.map(|c| c.price()).unwrap_or(Decimal::ZERO)
    }

    /// Label shown in the form's category selector
    pub fn label(&self) -> &'static str {
        match self {
            Category::Tier1 => "فئة اولى",
            Category::Tier2 => "فئة تانيه",
            Category::Tier3 => "فئة تالته",
        }
    }

    /// Resolves a selector value; `None` when nothing matches
    pub fn resolve(selection: &str) -> Option<Category> {
        selection.parse().ok()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Tier1 => write!(f, "tier1"),
            Category::Tier2 => write!(f, "tier2"),
            Category::Tier3 => write!(f, "tier3"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Some(category) = Category::ALL.into_iter().find(|c| c.label() == trimmed) {
            return Ok(category);
        }

        match trimmed.to_lowercase().replace(['_', '-', ' '], "").as_str() {
            "tier1" | "1" => Ok(Category::Tier1),
            "tier2" | "2" => Ok(Category::Tier2),
            "tier3" | "3" => Ok(Category::Tier3),
            _ => Err(format!("Invalid category: {}", s)),
        }
    }
}
