//! AniList GraphQL response types.
//!
//! Every field the API may null out is optional here; the mapper decides the
//! fallback for each one.

use crate::error::UpstreamError;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level GraphQL response body
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Option<Vec<UpstreamError>>,
}

/// `data` of a paginated media query
#[derive(Debug, Clone, Deserialize)]
pub struct PageData {
    #[serde(rename = "Page")]
    pub page: Option<MediaPage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaPage {
    pub media: Option<Vec<Media>>,
}

/// `data` of a single media lookup
#[derive(Debug, Clone, Deserialize)]
pub struct MediaData {
    #[serde(rename = "Media")]
    pub media: Option<Media>,
}

/// One anime entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: i64,
    #[serde(default)]
    pub title: MediaTitle,
    #[serde(default)]
    pub cover_image: Option<CoverImage>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub episodes: Option<u32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub start_date: Option<FuzzyDate>,
    #[serde(default)]
    pub season_year: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Media {
    pub fn cover_url(&self) -> String {
        self.cover_image
            .as_ref()
            .and_then(|c| c.large.clone())
            .unwrap_or_default()
    }

    /// Start year, falling back to the season year
    pub fn start_year(&self) -> Option<i32> {
        self.start_date
            .as_ref()
            .and_then(|d| d.year)
            .or(self.season_year)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaTitle {
    #[serde(default)]
    pub romaji: Option<String>,
    #[serde(default)]
    pub english: Option<String>,
    #[serde(default)]
    pub native: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoverImage {
    #[serde(default)]
    pub large: Option<String>,
}

/// Partial date; AniList leaves unknown components null
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzyDate {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Airing season as named by the `MediaSeason` enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "WINTER",
            Season::Spring => "SPRING",
            Season::Summer => "SUMMER",
            Season::Fall => "FALL",
        }
    }

    /// Season and season-year containing the given date.
    ///
    /// December already belongs to the next year's winter.
    pub fn for_date(date: impl Datelike) -> (Season, i32) {
        match date.month() {
            12 => (Season::Winter, date.year() + 1),
            1 | 2 => (Season::Winter, date.year()),
            3..=5 => (Season::Spring, date.year()),
            6..=8 => (Season::Summer, date.year()),
            _ => (Season::Fall, date.year()),
        }
    }

    pub fn current() -> (Season, i32) {
        Self::for_date(chrono::Utc::now().date_naive())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "WINTER" => Ok(Season::Winter),
            "SPRING" => Ok(Season::Spring),
            "SUMMER" => Ok(Season::Summer),
            "FALL" | "AUTUMN" => Ok(Season::Fall),
            _ => Err(format!("invalid season: {}", s)),
        }
    }
}
