//! Movie record and genre types shared across the store, validator and routes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of genres a movie can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Romance,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Thriller,
}

/// All genres, in canonical order. Used for validation messages and parsing.
pub const GENRES: [Genre; 9] = [
    Genre::Action,
    Genre::Adventure,
    Genre::Comedy,
    Genre::Drama,
    Genre::Fantasy,
    Genre::Horror,
    Genre::Romance,
    Genre::SciFi,
    Genre::Thriller,
];

impl Genre {
    /// Wire name of the genre, as it appears in JSON and query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
            Genre::Thriller => "Thriller",
        }
    }

    /// Case-sensitive lookup by wire name.
    pub fn parse(name: &str) -> Option<Genre> {
        GENRES.iter().copied().find(|g| g.as_str() == name)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A movie record as stored in the collection and returned to clients.
///
/// `id` is assigned server-side at creation (UUID v4) and never changes.
/// Seed files must carry ids; client payloads must not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub director: String,
    /// Runtime in minutes.
    pub duration: i64,
    pub poster: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    pub genre: Vec<Genre>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_wire_names_round_trip() {
        for genre in GENRES {
            assert_eq!(Genre::parse(genre.as_str()), Some(genre));
        }
        assert_eq!(Genre::parse("sci-fi"), None);
        assert_eq!(Genre::parse("Musical"), None);
    }

    #[test]
    fn sci_fi_serializes_with_hyphen() {
        let json = serde_json::to_string(&Genre::SciFi).unwrap();
        assert_eq!(json, "\"Sci-Fi\"");
        let back: Genre = serde_json::from_str("\"Sci-Fi\"").unwrap();
        assert_eq!(back, Genre::SciFi);
    }

    #[test]
    fn movie_without_rate_omits_the_field() {
        let movie = Movie {
            id: "abc".to_string(),
            title: "Alien".to_string(),
            year: 1979,
            director: "Ridley Scott".to_string(),
            duration: 117,
            poster: "http://example.com/alien.jpg".to_string(),
            rate: None,
            genre: vec![Genre::Horror, Genre::SciFi],
        };
        let value = serde_json::to_value(&movie).unwrap();
        assert!(value.get("rate").is_none());
        assert_eq!(value["genre"][1], "Sci-Fi");
    }
}
