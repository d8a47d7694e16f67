//! Fixed taxonomy of property price factors, grouped into three categories.

use serde::{Deserialize, Serialize};

/// Top-level grouping of price factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Amenities,
    Macro,
    Geographic,
}

impl Category {
    /// All categories in processing order.
    pub const ALL: [Category; 3] = [Category::Amenities, Category::Macro, Category::Geographic];

    /// Human-readable name, as used in progress logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::Amenities => "Amenities",
            Category::Macro => "Macro",
            Category::Geographic => "Geographic",
        }
    }

    /// Lower-case key under which the category's factors are stored.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Category::Amenities => "amenities",
            Category::Macro => "macro",
            Category::Geographic => "geographic",
        }
    }

    /// Ordered factor names belonging to this category.
    #[must_use]
    pub fn factors(self) -> &'static [&'static str] {
        PRICE_FACTORS
            .iter()
            .find(|(category, _)| *category == self)
            .map(|(_, factors)| *factors)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Category → ordered factor names.
pub const PRICE_FACTORS: &[(Category, &[&str])] = &[
    (
        Category::Amenities,
        &[
            "Future hospitals or clinics",
            "New school construction",
            "University expansion",
            "Retail park or shopping center development",
            "New entertainment facilities",
            "New parks or recreational green spaces",
            "Police or fire station construction",
            "Library or community center projects",
            "Religious or cultural center construction",
            "EV charging station rollouts",
        ],
    ),
    (
        Category::Macro,
        &[
            "Interest Rate Trends",
            "Inflation Rate or CPI",
            "Mortgage Affordability Policies",
            "Stamp Duty Changes",
            "Government Housing Policies",
            "Planning law Reform",
            "Rental Regulation Zones",
            "Population Growth or Migration",
            "Employment or Unemployment Rate",
            "Post-Election Political Changes",
        ],
    ),
    (
        Category::Geographic,
        &[
            "Flood risk zones",
            "Low elevation or slope",
            "Near water bodies",
            "Soil quality or subsidence risk",
            "Near greenbelt or AONB areas",
            "Good air quality",
            "High noise pollution",
            "South-facing or high sunlight area",
            "Seismic or mining instability",
            "Urban vs rural zoning",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_ten_factors() {
        for category in Category::ALL {
            assert_eq!(category.factors().len(), 10, "{category}");
        }
    }

    #[test]
    fn taxonomy_order_matches_category_order() {
        let order: Vec<Category> = PRICE_FACTORS.iter().map(|(c, _)| *c).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn factors_keep_declared_order() {
        let macro_factors = Category::Macro.factors();
        assert_eq!(macro_factors[0], "Interest Rate Trends");
        assert_eq!(macro_factors[9], "Post-Election Political Changes");
    }

    #[test]
    fn keys_are_lowercase_names() {
        for category in Category::ALL {
            assert_eq!(category.key(), category.name().to_lowercase());
        }
    }
}
