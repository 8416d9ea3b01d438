//! Application state - single source of truth
//!
//! Components only ever see `&AppState`; the reducer is the only writer.

use serde::Deserialize;

use crate::api::DEFAULT_ENDPOINT;
use crate::machine::FilmsMachine;

/// Spinner frame interval while loading
pub const LOADING_ANIM_TICK_MS: u64 = 80;

/// One film as returned by the API
///
/// `episode_id` keys the rendered list. Two films sharing an episode id are
/// accepted as-is and rendered twice.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub title: String,
    pub episode_id: i64,
    pub director: String,
}

/// The `data` payload of the films query, in server order
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllFilms {
    pub all_films: Vec<Film>,
}

impl AllFilms {
    pub fn new(all_films: Vec<Film>) -> Self {
        Self { all_films }
    }

    pub fn len(&self) -> usize {
        self.all_films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_films.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Film> {
        self.all_films.iter()
    }
}

/// Everything the UI needs to render
#[derive(Clone, Debug)]
pub struct AppState {
    /// loading / success / error plus the last fetched payload
    pub machine: FilmsMachine,

    /// First film row shown; reset whenever a new list arrives
    pub list_offset: usize,

    /// Animation frame counter (for loading spinner)
    pub tick_count: u32,

    /// Where films are fetched from, shown under the heading
    pub endpoint: String,
}

impl AppState {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            machine: FilmsMachine::new(),
            list_offset: 0,
            tick_count: 0,
            endpoint: endpoint.into(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_all_films_keeps_order() {
        let data = json!({
            "allFilms": [
                { "title": "A New Hope", "episodeId": 4, "director": "George Lucas" },
                { "title": "The Empire Strikes Back", "episodeId": 5, "director": "Irvin Kershner" }
            ]
        });

        let films: AllFilms = serde_json::from_value(data).unwrap();

        assert_eq!(films.len(), 2);
        let titles: Vec<&str> = films.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["A New Hope", "The Empire Strikes Back"]);
        assert_eq!(films.all_films[1].episode_id, 5);
    }

    #[test]
    fn test_decode_rejects_missing_field() {
        let data = json!({ "allFilms": [{ "title": "A New Hope", "episodeId": 4 }] });
        assert!(serde_json::from_value::<AllFilms>(data).is_err());
    }
}
