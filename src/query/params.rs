//! # Query Parameter Parser
//!
//! Turns the raw `key=value` pairs of a `/movie` query string into a typed
//! [`MovieQuery`].

use thiserror::Error;

/// Parameter names the service understands
pub const ALLOWED_PARAMS: [&str; 3] = ["genre", "country", "avg_vote"];

/// Query validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// Parameters were submitted but none of them is recognized
    #[error("Queries must be 'genre', 'country' or 'avg_vote'.")]
    UnrecognizedParams,

    /// `avg_vote` is not a finite decimal number
    #[error("'avg_vote' must be a number.")]
    InvalidVote(String),
}

/// Check submitted parameter names against [`ALLOWED_PARAMS`].
///
/// An empty set passes. Otherwise at least one name must be recognized;
/// unrecognized names next to a recognized one are ignored.
pub fn validate_param_names<'a, I>(names: I) -> Result<(), QueryError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut submitted = false;
    for name in names {
        if ALLOWED_PARAMS.contains(&name) {
            return Ok(());
        }
        submitted = true;
    }

    if submitted {
        Err(QueryError::UnrecognizedParams)
    } else {
        Ok(())
    }
}

/// Parsed `/movie` query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieQuery {
    /// Substring to look for in the genre field
    pub genre: Option<String>,

    /// Substring to look for in the country field
    pub country: Option<String>,

    /// Minimum average vote, inclusive
    pub avg_vote: Option<f64>,
}

impl MovieQuery {
    /// Validate and parse query string pairs.
    ///
    /// Empty values leave the matching filter off. When a key repeats, the
    /// last value wins.
    pub fn from_pairs<K, V>(pairs: &[(K, V)]) -> Result<Self, QueryError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        validate_param_names(pairs.iter().map(|(key, _)| key.as_ref()))?;

        let mut query = MovieQuery::default();
        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "genre" => query.genre = non_empty(value),
                "country" => query.country = non_empty(value),
                "avg_vote" => query.avg_vote = parse_vote(value)?,
                _ => {}
            }
        }

        Ok(query)
    }

    /// True when no filter is active
    pub fn is_unfiltered(&self) -> bool {
        self.genre.is_none() && self.country.is_none() && self.avg_vote.is_none()
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parse a vote threshold; blank input means no threshold
fn parse_vote(value: &str) -> Result<Option<f64>, QueryError> {
    let trimmed = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    match trimmed.parse::<f64>() {
        Ok(threshold) if threshold.is_finite() => Ok(Some(threshold)),
        _ => Err(QueryError::InvalidVote(value.to_string())),
    }
}
