use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::taxonomy::Category;

/// Raw web-search payload. Passed through to the extractor untouched.
pub type SearchResult = serde_json::Map<String, serde_json::Value>;

/// Format of [`AggregateResult::timestamp`].
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An event as parsed from model output, before location resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEvent {
    pub event: String,
    pub timeline: i32,
    pub link: String,
}

impl ExtractedEvent {
    /// Attach a resolved location, producing a storable [`Event`].
    #[must_use]
    pub fn with_location(self, location: String) -> Event {
        Event {
            event: self.event,
            timeline: self.timeline,
            link: self.link,
            location,
        }
    }
}

/// A future event accepted into a factor result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub event: String,
    /// Year in `2025..=2029`.
    pub timeline: i32,
    pub link: String,
    pub location: String,
}

/// Per-factor outcome. Only recorded when at least one event survived filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorResult {
    pub query: String,
    pub events: Vec<Event>,
    pub confidence_score: f64,
    pub impact_score: f64,
}

/// Factor name → result, kept in insertion order.
///
/// Re-inserting a factor replaces its result without moving it.
pub type FactorMap = IndexMap<String, FactorResult>;

/// Factor results grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryFactors {
    pub amenities: FactorMap,
    #[serde(rename = "macro")]
    pub macroeconomic: FactorMap,
    pub geographic: FactorMap,
}

impl CategoryFactors {
    #[must_use]
    pub fn get(&self, category: Category) -> &FactorMap {
        match category {
            Category::Amenities => &self.amenities,
            Category::Macro => &self.macroeconomic,
            Category::Geographic => &self.geographic,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut FactorMap {
        match category {
            Category::Amenities => &mut self.amenities,
            Category::Macro => &mut self.macroeconomic,
            Category::Geographic => &mut self.geographic,
        }
    }

    /// Total number of recorded factors across all categories.
    #[must_use]
    pub fn factor_count(&self) -> usize {
        self.amenities.len() + self.macroeconomic.len() + self.geographic.len()
    }
}

/// The document produced by one pipeline run for one postcode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub postcode: String,
    pub timestamp: String,
    pub search_count: u32,
    pub factors: CategoryFactors,
}

impl AggregateResult {
    /// Start an empty result stamped with the current local time.
    #[must_use]
    pub fn new(postcode: &str) -> Self {
        Self {
            postcode: postcode.to_string(),
            timestamp: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
            search_count: 0,
            factors: CategoryFactors::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factor_result(query: &str) -> FactorResult {
        FactorResult {
            query: query.to_string(),
            events: vec![Event {
                event: "New hospital opens in 2026".to_string(),
                timeline: 2026,
                link: "https://example.gov.uk/plan".to_string(),
                location: "Within SW3".to_string(),
            }],
            confidence_score: 0.8,
            impact_score: 0.8,
        }
    }

    #[test]
    fn factor_map_serializes_in_insertion_order() {
        let mut map = FactorMap::new();
        map.insert("Zoning".to_string(), factor_result("z"));
        map.insert("Air quality".to_string(), factor_result("a"));
        let json = serde_json::to_string(&map).unwrap();
        let zoning = json.find("Zoning").unwrap();
        let air = json.find("Air quality").unwrap();
        assert!(zoning < air, "expected insertion order, got {json}");
    }

    #[test]
    fn factor_map_insert_replaces_existing_entry() {
        let mut map = FactorMap::new();
        map.insert("Stamp Duty Changes".to_string(), factor_result("first"));
        map.insert("Stamp Duty Changes".to_string(), factor_result("second"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Stamp Duty Changes").unwrap().query, "second");
    }

    #[test]
    fn macro_category_serializes_under_macro_key() {
        let mut aggregate = AggregateResult::new("SW3");
        aggregate
            .factors
            .get_mut(Category::Macro)
            .insert("Interest Rate Trends".to_string(), factor_result("q"));

        let value = serde_json::to_value(&aggregate).unwrap();
        assert!(value["factors"]["macro"]["Interest Rate Trends"].is_object());
        assert!(value["factors"]["amenities"].as_object().unwrap().is_empty());
        assert!(value["factors"]["geographic"].as_object().unwrap().is_empty());
    }

    #[test]
    fn aggregate_result_round_trips_through_json() {
        let mut aggregate = AggregateResult::new("SW3 4AA");
        aggregate.search_count = 4;
        aggregate
            .factors
            .get_mut(Category::Geographic)
            .insert("Flood risk zones".to_string(), factor_result("flood"));

        let json = serde_json::to_string(&aggregate).unwrap();
        let back: AggregateResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, aggregate);
        assert_eq!(back.factors.factor_count(), 1);
    }

    #[test]
    fn timestamp_uses_second_precision_format() {
        let aggregate = AggregateResult::new("SW3");
        assert!(
            chrono::NaiveDateTime::parse_from_str(&aggregate.timestamp, TIMESTAMP_FORMAT).is_ok(),
            "unexpected timestamp: {}",
            aggregate.timestamp
        );
    }

    #[test]
    fn extracted_event_gains_location() {
        let extracted = ExtractedEvent {
            event: "Tram extension opens 2027".to_string(),
            timeline: 2027,
            link: String::new(),
        };
        let event = extracted.with_location("Within SW3".to_string());
        assert_eq!(event.timeline, 2027);
        assert_eq!(event.location, "Within SW3");
    }
}
