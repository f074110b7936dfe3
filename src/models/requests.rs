//! Request DTOs for the catalogue API
//!
//! Defines the structure of incoming HTTP request bodies.

use chrono::{Datelike, Utc};
use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::models::Genre;

/// Earliest release year accepted (first commercial phonograph records).
pub const MIN_RELEASE_YEAR: i32 = 1877;

/// Maximum title and artist name length in characters
pub const MAX_NAME_LENGTH: usize = 255;

/// Request body for creating or replacing an album
/// (POST /api/v1/album, PUT /api/v1/album/:id)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumRequest {
    pub title: String,
    /// Artist is looked up by name and created if missing
    pub artist_name: String,
    pub genre: String,
    pub release_year: i32,
    pub stock: i32,
    pub price: f64,
}

/// A validated album payload, ready for the service.
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumDraft {
    pub title: String,
    pub artist_name: String,
    pub genre: Genre,
    pub release_year: i32,
    pub stock: i32,
    pub price: f64,
}

impl AlbumRequest {
    /// Validates the request and converts it into an [`AlbumDraft`].
    pub fn into_draft(self) -> Result<AlbumDraft> {
        let title = required_name("Title", &self.title)?;
        let artist_name = required_name("Artist name", &self.artist_name)?;
        let genre = self
            .genre
            .parse::<Genre>()
            .map_err(CatalogError::InvalidInput)?;

        let latest_year = Utc::now().year() + 1;
        if !(MIN_RELEASE_YEAR..=latest_year).contains(&self.release_year) {
            return Err(CatalogError::InvalidInput(format!(
                "Release year must be between {} and {}",
                MIN_RELEASE_YEAR, latest_year
            )));
        }
        if self.stock < 0 {
            return Err(CatalogError::InvalidInput(
                "Stock cannot be negative".to_string(),
            ));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CatalogError::InvalidInput(
                "Price must be a non-negative number".to_string(),
            ));
        }

        Ok(AlbumDraft {
            title,
            artist_name,
            genre,
            release_year: self.release_year,
            stock: self.stock,
            price: self.price,
        })
    }
}

/// Request body for POST /api/v1/artist
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistRequest {
    pub artist_name: String,
}

impl ArtistRequest {
    /// Returns the trimmed artist name or an input error.
    pub fn validate(&self) -> Result<String> {
        required_name("Artist name", &self.artist_name)
    }
}

fn required_name(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::InvalidInput(format!(
            "{} must not be blank",
            field
        )));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(CatalogError::InvalidInput(format!(
            "{} exceeds maximum length of {} characters",
            field, MAX_NAME_LENGTH
        )));
    }
    Ok(trimmed.to_string())
}
