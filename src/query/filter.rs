//! # Movie Filters
//!
//! Predicates over [`Movie`] records and the pipeline that narrows a
//! dataset with them.

use crate::catalog::Movie;

use super::params::MovieQuery;

/// Text fields that support substring search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Genre,
    Country,
}

impl TextField {
    fn value<'a>(&self, movie: &'a Movie) -> &'a str {
        match self {
            TextField::Genre => &movie.genre,
            TextField::Country => &movie.country,
        }
    }
}

/// A single filter predicate
#[derive(Debug, Clone, PartialEq)]
pub enum MovieFilter {
    /// Case-insensitive substring match on a text field.
    /// `needle` is stored lowercased.
    Contains { field: TextField, needle: String },

    /// `avg_vote >= threshold`
    MinVote(f64),
}

impl MovieFilter {
    /// Substring filter; matching ignores case on both sides
    pub fn contains(field: TextField, needle: &str) -> Self {
        MovieFilter::Contains {
            field,
            needle: needle.to_lowercase(),
        }
    }

    pub fn min_vote(threshold: f64) -> Self {
        MovieFilter::MinVote(threshold)
    }

    /// Check if a movie passes this filter
    pub fn matches(&self, movie: &Movie) -> bool {
        match self {
            MovieFilter::Contains { field, needle } => {
                field.value(movie).to_lowercase().contains(needle.as_str())
            }
            MovieFilter::MinVote(threshold) => movie.avg_vote >= *threshold,
        }
    }
}

/// Filters combined with AND logic, applied in insertion order
#[derive(Debug, Clone, Default)]
pub struct FilterPipeline {
    filters: Vec<MovieFilter>,
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, filter: MovieFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Build the pipeline for a query: genre, then country, then avg_vote
    pub fn from_query(query: &MovieQuery) -> Self {
        let mut pipeline = Self::new();
        if let Some(genre) = &query.genre {
            pipeline = pipeline.and(MovieFilter::contains(TextField::Genre, genre));
        }
        if let Some(country) = &query.country {
            pipeline = pipeline.and(MovieFilter::contains(TextField::Country, country));
        }
        if let Some(threshold) = query.avg_vote {
            pipeline = pipeline.and(MovieFilter::min_vote(threshold));
        }
        pipeline
    }

    pub fn filters(&self) -> &[MovieFilter] {
        &self.filters
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Narrow `movies` by each filter in turn.
    ///
    /// Survivors keep their relative order. The input slice is untouched.
    pub fn apply<'a>(&self, movies: &'a [Movie]) -> Vec<&'a Movie> {
        let mut working: Vec<&Movie> = movies.iter().collect();
        for filter in &self.filters {
            working.retain(|movie| filter.matches(movie));
        }
        working
    }
}
