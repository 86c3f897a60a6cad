//! Movie payload validation.
//!
//! The validator works on an arbitrary `serde_json::Value` rather than a typed
//! extractor so that a body with several bad fields reports every violation in
//! one structured issue list instead of failing on the first deserialization
//! error. Two entry points:
//!
//! - [`validate_movie`]: full validation for POST, all fields required
//! - [`validate_partial_movie`]: PATCH validation, no field required
//!
//! Unknown fields (including a client-supplied `id`) are ignored in both modes
//! and never carried into the result.

use crate::model::{Genre, Movie, GENRES};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

/// One validation failure: the offending field path and a human message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub field: String,
    pub message: String,
}

impl Issue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A fully validated movie payload, still without an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: i64,
    pub poster: String,
    pub rate: Option<f64>,
    pub genre: Vec<Genre>,
}

/// A validated partial update. `None` means the field was absent from the
/// request body and must be left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub duration: Option<i64>,
    pub poster: Option<String>,
    pub rate: Option<f64>,
    pub genre: Option<Vec<Genre>>,
}

impl MoviePatch {
    /// Merge this patch over an existing record: present fields overwrite,
    /// absent fields are retained.
    pub fn apply(&self, movie: &mut Movie) {
        if let Some(title) = &self.title {
            movie.title = title.clone();
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(director) = &self.director {
            movie.director = director.clone();
        }
        if let Some(duration) = self.duration {
            movie.duration = duration;
        }
        if let Some(poster) = &self.poster {
            movie.poster = poster.clone();
        }
        if let Some(rate) = self.rate {
            movie.rate = Some(rate);
        }
        if let Some(genre) = &self.genre {
            movie.genre = genre.clone();
        }
    }
}

/// Validate a full movie payload. Every required field must be present and
/// well-typed; all violations are collected, not just the first.
pub fn validate_movie(body: &Value) -> Result<NewMovie, Vec<Issue>> {
    let obj = as_object(body)?;
    let mut issues = Vec::new();

    let title = title_value(obj.get("title"), true, &mut issues);
    let year = year_value(obj.get("year"), true, &mut issues);
    let director = director_value(obj.get("director"), true, &mut issues);
    let duration = duration_value(obj.get("duration"), true, &mut issues);
    let poster = poster_value(obj.get("poster"), true, &mut issues);
    let rate = rate_value(obj.get("rate"), &mut issues);
    let genre = genre_value(obj.get("genre"), true, &mut issues);

    match (title, year, director, duration, poster, genre) {
        (Some(title), Some(year), Some(director), Some(duration), Some(poster), Some(genre))
            if issues.is_empty() =>
        {
            Ok(NewMovie {
                title,
                year,
                director,
                duration,
                poster,
                rate,
                genre,
            })
        }
        _ => Err(issues),
    }
}

/// Validate a partial movie payload. Same per-field constraints as
/// [`validate_movie`], but absent fields are fine.
pub fn validate_partial_movie(body: &Value) -> Result<MoviePatch, Vec<Issue>> {
    let obj = as_object(body)?;
    let mut issues = Vec::new();

    let patch = MoviePatch {
        title: title_value(obj.get("title"), false, &mut issues),
        year: year_value(obj.get("year"), false, &mut issues),
        director: director_value(obj.get("director"), false, &mut issues),
        duration: duration_value(obj.get("duration"), false, &mut issues),
        poster: poster_value(obj.get("poster"), false, &mut issues),
        rate: rate_value(obj.get("rate"), &mut issues),
        genre: genre_value(obj.get("genre"), false, &mut issues),
    };

    if issues.is_empty() {
        Ok(patch)
    } else {
        Err(issues)
    }
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, Vec<Issue>> {
    body.as_object()
        .ok_or_else(|| vec![Issue::new("body", "Request body must be a JSON object")])
}

fn title_value(value: Option<&Value>, required: bool, issues: &mut Vec<Issue>) -> Option<String> {
    match value {
        None => {
            if required {
                issues.push(Issue::new("title", "Title is required"));
            }
            None
        }
        Some(Value::String(title)) => Some(title.clone()),
        Some(_) => {
            issues.push(Issue::new("title", "Title must be a string"));
            None
        }
    }
}

fn year_value(value: Option<&Value>, required: bool, issues: &mut Vec<Issue>) -> Option<i32> {
    let value = match value {
        Some(value) => value,
        None => {
            if required {
                issues.push(Issue::new("year", "Required"));
            }
            return None;
        }
    };
    // `as_i64` rejects both non-numbers and non-integral numbers.
    let Some(year) = value.as_i64() else {
        issues.push(Issue::new("year", "Year must be an integer"));
        return None;
    };
    if !(1900..=2024).contains(&year) {
        issues.push(Issue::new("year", "Year must be between 1900 and 2024"));
        return None;
    }
    Some(year as i32)
}

fn director_value(value: Option<&Value>, required: bool, issues: &mut Vec<Issue>) -> Option<String> {
    match value {
        None => {
            if required {
                issues.push(Issue::new("director", "Required"));
            }
            None
        }
        Some(Value::String(director)) if !director.is_empty() => Some(director.clone()),
        Some(Value::String(_)) => {
            issues.push(Issue::new("director", "Director must not be empty"));
            None
        }
        Some(_) => {
            issues.push(Issue::new("director", "Director must be a string"));
            None
        }
    }
}

fn duration_value(value: Option<&Value>, required: bool, issues: &mut Vec<Issue>) -> Option<i64> {
    let value = match value {
        Some(value) => value,
        None => {
            if required {
                issues.push(Issue::new("duration", "Required"));
            }
            return None;
        }
    };
    let Some(duration) = value.as_i64() else {
        issues.push(Issue::new("duration", "Duration must be an integer"));
        return None;
    };
    if duration <= 0 {
        issues.push(Issue::new("duration", "Duration must be a positive integer"));
        return None;
    }
    Some(duration)
}

fn poster_value(value: Option<&Value>, required: bool, issues: &mut Vec<Issue>) -> Option<String> {
    match value {
        None => {
            if required {
                issues.push(Issue::new("poster", "Required"));
            }
            None
        }
        Some(Value::String(poster)) => {
            if Url::parse(poster).is_err() {
                issues.push(Issue::new("poster", "Poster must be a valid URL"));
                return None;
            }
            Some(poster.clone())
        }
        Some(_) => {
            issues.push(Issue::new("poster", "Poster must be a string"));
            None
        }
    }
}

fn rate_value(value: Option<&Value>, issues: &mut Vec<Issue>) -> Option<f64> {
    let value = value?;
    let Some(rate) = value.as_f64() else {
        issues.push(Issue::new("rate", "Rate must be a number"));
        return None;
    };
    if !(0.0..=10.0).contains(&rate) {
        issues.push(Issue::new("rate", "Rate must be between 0 and 10"));
        return None;
    }
    Some(rate)
}

fn genre_value(
    value: Option<&Value>,
    required: bool,
    issues: &mut Vec<Issue>,
) -> Option<Vec<Genre>> {
    let value = match value {
        Some(value) => value,
        None => {
            if required {
                issues.push(Issue::new("genre", "Genre is required"));
            }
            return None;
        }
    };
    let Some(items) = value.as_array() else {
        issues.push(Issue::new("genre", "Genre must be an array of strings"));
        return None;
    };
    let mut genres = Vec::with_capacity(items.len());
    let mut valid = true;
    for (index, item) in items.iter().enumerate() {
        match item.as_str().and_then(Genre::parse) {
            Some(genre) => genres.push(genre),
            None => {
                issues.push(Issue::new(
                    format!("genre.{index}"),
                    format!("Genre must be one of: {}", genre_names()),
                ));
                valid = false;
            }
        }
    }
    valid.then_some(genres)
}

fn genre_names() -> String {
    GENRES
        .iter()
        .map(|g| g.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
