// File: src/catalog.rs
// Purpose: In-memory item catalog, search filters and search URL parameters

use crate::item::{BookableItem, Equipment, Experience};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Catalog file layout: `[[experiences]]` and `[[equipment]]` tables
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    experiences: Vec<Experience>,
    #[serde(default)]
    equipment: Vec<Equipment>,
}

/// Snapshot of everything that can be booked
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<BookableItem>,
}

impl Catalog {
    pub fn new(items: Vec<BookableItem>) -> Self {
        Self { items }
    }

    /// Parses a catalog from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content).context("Failed to parse catalog")?;
        let items = file
            .experiences
            .into_iter()
            .map(BookableItem::from)
            .chain(file.equipment.into_iter().map(BookableItem::from))
            .collect();

        Ok(Self { items })
    }

    /// Loads a catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {:?}", path))?;

        let catalog = Self::from_toml(&content)
            .with_context(|| format!("Invalid catalog file: {:?}", path))?;

        tracing::debug!(path = %path.display(), items = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn items(&self) -> &[BookableItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&BookableItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Items matching every set filter, in catalog order
    pub fn search(&self, filters: &SearchFilters) -> Vec<&BookableItem> {
        self.items.iter().filter(|item| filters.matches(item)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Catalog search criteria; unset criteria match everything
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    pub query: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub price_range: Option<PriceRange>,
    pub difficulty: Option<String>,
    pub min_rating: Option<f32>,
    pub participants: Option<u32>,
}

impl SearchFilters {
    pub fn matches(&self, item: &BookableItem) -> bool {
        if let Some(query) = non_blank(&self.query) {
            if !contains_ignore_case(item.display_name(), query) {
                return false;
            }
        }

        if let Some(category) = non_blank(&self.category) {
            if !item.category().eq_ignore_ascii_case(category) {
                return false;
            }
        }

        if let Some(range) = &self.price_range {
            if !range.contains(item.base_price()) {
                return false;
            }
        }

        if let Some(min_rating) = self.min_rating {
            if item.rating() < min_rating {
                return false;
            }
        }

        match item {
            BookableItem::Experience(experience) => self.matches_experience(experience),
            // equipment carries no location, difficulty or party size
            BookableItem::Equipment(_) => {
                non_blank(&self.location).is_none() && non_blank(&self.difficulty).is_none()
            }
        }
    }

    fn matches_experience(&self, experience: &Experience) -> bool {
        if let Some(location) = non_blank(&self.location) {
            if !contains_ignore_case(&experience.location, location) {
                return false;
            }
        }

        if let Some(difficulty) = non_blank(&self.difficulty) {
            if !experience.difficulty.as_str().eq_ignore_ascii_case(difficulty) {
                return false;
            }
        }

        match self.participants {
            Some(party) => party <= experience.max_participants,
            None => true,
        }
    }
}

/// Search bar input turned into `/search` URL parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub location: String,
    pub date: Option<NaiveDate>,
    pub participants: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            query: String::new(),
            location: String::new(),
            date: None,
            participants: 1,
        }
    }
}

impl SearchQuery {
    /// `q`, `location`, `date` when set; `participants` only when not 1
    pub fn to_query_string(&self) -> String {
        let mut params: Vec<(&str, String)> = Vec::new();

        if !self.query.is_empty() {
            params.push(("q", self.query.clone()));
        }
        if !self.location.is_empty() {
            params.push(("location", self.location.clone()));
        }
        if let Some(date) = self.date {
            params.push(("date", date.format("%Y-%m-%d").to_string()));
        }
        if self.participants != 1 {
            params.push(("participants", self.participants.to_string()));
        }

        params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Path the search bar navigates to
    pub fn to_url(&self) -> String {
        format!("/search?{}", self.to_query_string())
    }

    /// Filters the catalog collaborator receives for this query
    pub fn to_filters(&self) -> SearchFilters {
        SearchFilters {
            query: (!self.query.is_empty()).then(|| self.query.clone()),
            location: (!self.location.is_empty()).then(|| self.location.clone()),
            participants: (self.participants != 1).then_some(self.participants),
            ..SearchFilters::default()
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::fixtures::{kayak, surf_lesson};
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::new(vec![surf_lesson(), kayak(15.0, 80.0)])
    }

    fn search_ids(filters: &SearchFilters) -> Vec<String> {
        catalog()
            .search(filters)
            .iter()
            .map(|item| item.id().to_string())
            .collect()
    }

    #[test]
    fn test_find() {
        assert_eq!(catalog().find("eq-1").map(|i| i.id()), Some("eq-1"));
        assert!(catalog().find("missing").is_none());
    }

    #[test]
    fn test_empty_filters_match_everything() {
        assert_eq!(catalog().search(&SearchFilters::default()).len(), 2);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let filters = SearchFilters {
            query: Some("SURF".to_string()),
            ..Default::default()
        };
        assert_eq!(search_ids(&filters), vec!["exp-1"]);
    }

    #[test]
    fn test_location_excludes_equipment() {
        let filters = SearchFilters {
            location: Some("zarautz".to_string()),
            ..Default::default()
        };
        assert_eq!(search_ids(&filters), vec!["exp-1"]);
    }

    #[test]
    fn test_party_size_must_fit() {
        let filters = SearchFilters {
            participants: Some(8),
            ..Default::default()
        };
        assert_eq!(search_ids(&filters), vec!["eq-1"]);
    }

    #[test]
    fn test_price_range_uses_base_price() {
        let filters = SearchFilters {
            price_range: Some(PriceRange { min: 0.0, max: 20.0 }),
            ..Default::default()
        };
        assert_eq!(search_ids(&filters), vec!["eq-1"]);
    }

    #[test]
    fn test_query_string() {
        let query = SearchQuery {
            query: "surf lesson".to_string(),
            location: "San Sebastián".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 1),
            participants: 1,
        };
        assert_eq!(
            query.to_query_string(),
            "q=surf%20lesson&location=San%20Sebasti%C3%A1n&date=2026-08-01"
        );
    }

    #[test]
    fn test_query_string_includes_party_size() {
        let query = SearchQuery {
            participants: 4,
            ..Default::default()
        };
        assert_eq!(query.to_url(), "/search?participants=4");
        assert_eq!(query.to_filters().participants, Some(4));
    }

    #[test]
    fn test_from_toml() {
        let content = r#"
            [[experiences]]
            id = "exp-9"
            title = "Reef dive"
            category = "diving"
            duration = 180
            max_participants = 4
            price_per_participant = 85.0
            difficulty = "intermediate"
            location = "Cabo de Gata"
            rating = 4.9

            [[equipment]]
            id = "eq-9"
            name = "Wetsuit 4/3"
            category = "wetsuit"
            price_per_hour = 5.0
            price_per_day = 20.0
        "#;

        let catalog = Catalog::from_toml(content).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find("exp-9").and_then(|i| i.max_participants()), Some(4));
        assert_eq!(catalog.find("eq-9").map(|i| i.base_price()), Some(5.0));
    }

    #[test]
    fn test_bad_toml_is_error() {
        assert!(Catalog::from_toml("[[experiences]]\nid = 3").is_err());
    }
}
