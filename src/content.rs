//! Bundled page content: movies, subscription plans and FAQ entries.
//!
//! The catalog is embedded at compile time and parsed once on startup. Nothing
//! here is mutated afterwards.

use log::{error, info};
use serde::Deserialize;

use crate::config;
use crate::error::LandingError;

const BUNDLED_CATALOG: &str = include_str!("catalog.json");

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub poster_url: String,
    pub backdrop_url: String,
    #[serde(default)]
    pub genre: Vec<String>,
    pub trailer_url: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SubscriptionPlan {
    pub name: String,
    pub price: String,
    pub quality: String,
    pub resolution: String,
    #[serde(default)]
    pub devices: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ContentStore {
    #[serde(default)]
    pub movies: Vec<MediaItem>,
    #[serde(default)]
    pub plans: Vec<SubscriptionPlan>,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
}

impl ContentStore {
    pub fn from_json(raw: &str) -> Result<Self, LandingError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Loads the catalog shipped with the binary. A broken catalog leaves the
    /// page with empty sections instead of failing to mount.
    pub fn bundled() -> Self {
        match Self::from_json(BUNDLED_CATALOG) {
            Ok(store) => {
                info!(
                    "Loaded catalog: {} movies, {} plans, {} faq entries",
                    store.movies.len(),
                    store.plans.len(),
                    store.faq.len()
                );
                store
            }
            Err(e) => {
                error!("{}", e);
                Self::default()
            }
        }
    }

    pub fn movie(&self, id: u32) -> Option<&MediaItem> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    pub fn featured(&self) -> Option<&MediaItem> {
        self.movies
            .get(config::FEATURED_MOVIE_INDEX)
            .or_else(|| self.movies.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_has_original_sections() {
        let store = ContentStore::from_json(BUNDLED_CATALOG).unwrap();
        assert_eq!(store.movies.len(), 1);
        assert_eq!(store.plans.len(), 3);
        assert_eq!(store.faq.len(), 2);
        assert_eq!(store.faq[0].question, "What is Netflix?");
        let names: Vec<_> = store.plans.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Basic", "Standard", "Premium"]);
    }

    #[test]
    fn movie_lookup_by_id() {
        let store = ContentStore::bundled();
        assert_eq!(store.movie(1).map(|m| m.title.as_str()), Some("Game of Thrones"));
        assert!(store.movie(42).is_none());
        assert_eq!(store.featured().map(|m| m.id), Some(1));
    }

    #[test]
    fn missing_genre_defaults_to_empty() {
        let raw = r#"{"movies": [{
            "id": 7, "title": "Untagged", "description": "",
            "posterUrl": "p.jpg", "backdropUrl": "b.jpg", "trailerUrl": "t"
        }]}"#;
        let store = ContentStore::from_json(raw).unwrap();
        assert!(store.movies[0].genre.is_empty());
        assert!(store.plans.is_empty());
        assert!(store.faq.is_empty());
    }

    #[test]
    fn empty_store_has_no_featured_movie() {
        assert!(ContentStore::default().featured().is_none());
    }

    #[test]
    fn invalid_catalog_is_reported() {
        let err = ContentStore::from_json("{ not json").unwrap_err();
        assert!(matches!(err, LandingError::Catalog(_)));
    }
}
