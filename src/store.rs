//! In-memory movie collection.
//!
//! The store is an explicitly owned object injected into the handler layer
//! through [`crate::state::ServerState`] rather than a process global, so
//! tests get isolated collections and the service stays sound on the
//! multi-threaded runtime. Insertion order is preserved; `id` is the only
//! uniqueness constraint and there are no secondary indices. All mutations
//! are memory-only and lost on process exit.

use crate::error::{ApiError, ServerResult};
use crate::model::Movie;
use crate::validate::{MoviePatch, NewMovie};
use parking_lot::RwLock;
use std::path::Path;
use uuid::Uuid;

/// Ordered, lock-guarded collection of movie records.
#[derive(Debug, Default)]
pub struct MovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl MovieStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given records, in order.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(movies),
        }
    }

    /// Load the collection from a JSON seed file (an array of movie records,
    /// ids included). An unreadable or malformed seed fails startup.
    pub fn from_seed(path: &Path) -> ServerResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ApiError::Config(format!("Cannot read seed file {}: {e}", path.display())))?;
        let movies: Vec<Movie> = serde_json::from_str(&raw)
            .map_err(|e| ApiError::Config(format!("Invalid seed file {}: {e}", path.display())))?;
        Ok(Self::with_movies(movies))
    }

    /// List movies in insertion order. With a filter, only movies whose genre
    /// sequence contains a case-sensitive exact match to the filter string.
    pub fn list(&self, genre: Option<&str>) -> Vec<Movie> {
        let movies = self.movies.read();
        match genre {
            Some(genre) => movies
                .iter()
                .filter(|movie| movie.genre.iter().any(|g| g.as_str() == genre))
                .cloned()
                .collect(),
            None => movies.clone(),
        }
    }

    /// Find a movie by exact id match.
    pub fn get(&self, id: &str) -> Option<Movie> {
        self.movies.read().iter().find(|m| m.id == id).cloned()
    }

    /// Append a validated movie with a freshly generated id and return the
    /// stored record. Client-supplied ids never reach this point.
    pub fn create(&self, new: NewMovie) -> Movie {
        let movie = Movie {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            year: new.year,
            director: new.director,
            duration: new.duration,
            poster: new.poster,
            rate: new.rate,
            genre: new.genre,
        };
        self.movies.write().push(movie.clone());
        movie
    }

    /// Merge a validated patch over the record with the given id and return
    /// the merged record. `None` if the id is absent; the collection is left
    /// untouched in that case.
    pub fn update(&self, id: &str, patch: &MoviePatch) -> Option<Movie> {
        let mut movies = self.movies.write();
        let movie = movies.iter_mut().find(|m| m.id == id)?;
        patch.apply(movie);
        Some(movie.clone())
    }

    /// Remove the record with the given id. `false` if no record matched.
    pub fn delete(&self, id: &str) -> bool {
        let mut movies = self.movies.write();
        match movies.iter().position(|m| m.id == id) {
            Some(index) => {
                movies.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.movies.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Genre;
    use std::io::Write;

    fn new_movie(title: &str, genre: Vec<Genre>) -> NewMovie {
        NewMovie {
            title: title.to_string(),
            year: 2000,
            director: "Someone".to_string(),
            duration: 100,
            poster: "http://example.com/poster.jpg".to_string(),
            rate: None,
            genre,
        }
    }

    #[test]
    fn create_assigns_fresh_unique_ids_and_appends() {
        let store = MovieStore::new();
        let first = store.create(new_movie("First", vec![Genre::Drama]));
        let second = store.create(new_movie("Second", vec![Genre::Comedy]));
        assert_ne!(first.id, second.id);
        assert!(!first.id.is_empty());

        let all = store.list(None);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title, "First");
        assert_eq!(all[1].title, "Second");
    }

    #[test]
    fn get_returns_the_created_record() {
        let store = MovieStore::new();
        let created = store.create(new_movie("Dune", vec![Genre::SciFi]));
        assert_eq!(store.get(&created.id), Some(created));
        assert_eq!(store.get("no-such-id"), None);
    }

    #[test]
    fn update_merges_and_leaves_other_fields_alone() {
        let store = MovieStore::new();
        let created = store.create(new_movie("Dune", vec![Genre::SciFi]));
        let patch = MoviePatch {
            year: Some(2022),
            ..MoviePatch::default()
        };
        let updated = store.update(&created.id, &patch).unwrap();
        assert_eq!(updated.year, 2022);
        assert_eq!(updated.title, "Dune");
        assert_eq!(updated.id, created.id);
        assert_eq!(store.get(&created.id), Some(updated));
    }

    #[test]
    fn update_on_missing_id_does_not_mutate() {
        let store = MovieStore::new();
        store.create(new_movie("Dune", vec![Genre::SciFi]));
        let patch = MoviePatch {
            title: Some("Renamed".to_string()),
            ..MoviePatch::default()
        };
        assert_eq!(store.update("no-such-id", &patch), None);
        assert_eq!(store.list(None)[0].title, "Dune");
    }

    #[test]
    fn delete_removes_exactly_one_record() {
        let store = MovieStore::new();
        let first = store.create(new_movie("First", vec![Genre::Drama]));
        let second = store.create(new_movie("Second", vec![Genre::Drama]));
        assert!(store.delete(&first.id));
        assert!(!store.delete(&first.id));
        assert_eq!(store.get(&first.id), None);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&second.id).map(|m| m.title), Some("Second".to_string()));
    }

    #[test]
    fn genre_filter_is_exact_and_order_preserving() {
        let store = MovieStore::new();
        store.create(new_movie("A", vec![Genre::Action, Genre::SciFi]));
        store.create(new_movie("B", vec![Genre::Drama]));
        store.create(new_movie("C", vec![Genre::SciFi]));

        let scifi = store.list(Some("Sci-Fi"));
        assert_eq!(
            scifi.iter().map(|m| m.title.as_str()).collect::<Vec<_>>(),
            vec!["A", "C"]
        );
        assert!(store.list(Some("Horror")).is_empty());
        assert!(store.list(Some("sci-fi")).is_empty());
    }

    #[test]
    fn seed_file_populates_the_collection() {
        let mut seed = tempfile::NamedTempFile::new().unwrap();
        write!(
            seed,
            r#"[{{
                "id": "seed-1",
                "title": "Alien",
                "year": 1979,
                "director": "Ridley Scott",
                "duration": 117,
                "poster": "http://example.com/alien.jpg",
                "rate": 8.5,
                "genre": ["Horror", "Sci-Fi"]
            }}]"#
        )
        .unwrap();

        let store = MovieStore::from_seed(seed.path()).unwrap();
        assert_eq!(store.len(), 1);
        let alien = store.get("seed-1").unwrap();
        assert_eq!(alien.genre, vec![Genre::Horror, Genre::SciFi]);
    }

    #[test]
    fn malformed_seed_fails_with_config_error() {
        let mut seed = tempfile::NamedTempFile::new().unwrap();
        write!(seed, "not json").unwrap();
        let err = MovieStore::from_seed(seed.path()).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }
}
