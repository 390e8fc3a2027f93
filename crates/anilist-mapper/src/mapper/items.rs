//! Output shapes.
//!
//! Serialized field names follow the scraper contract downstream consumers
//! already parse, including its mix of snake_case and camelCase.

use serde::{Deserialize, Serialize};

/// Literal shown when the episode count is unknown
pub const UNKNOWN_EPISODES: &str = "Unknown";

/// Search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    pub anime_id: i64,
    pub name: String,
    pub img_url: String,
    pub status: String,
}

/// Entry of the popular, seasonal, completed and ongoing listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingItem {
    pub anime_id: i64,
    pub anime_title: String,
    pub img_url: String,
    pub status: String,
}

/// Entry of the genre and movie catalogs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub anime_id: i64,
    pub anime_title: String,
    pub anime_img: String,
    pub released_date: String,
    pub anime_url: String,
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopAiringItem {
    pub anime_id: i64,
    pub anime_title: String,
    pub anime_img: String,
    /// Always empty: the upstream has no per-entry latest episode
    pub latest_ep: String,
    pub anime_url: String,
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentItem {
    pub anime_id: i64,
    pub anime_title: String,
    pub anime_img: String,
    /// Always empty, see [`TopAiringItem::latest_ep`]
    pub episode_num: String,
    pub anime_url: String,
}

/// Episode total: a count, or the [`UNKNOWN_EPISODES`] literal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TotalEpisodes {
    Count(u32),
    Placeholder(String),
}

impl TotalEpisodes {
    /// Zero is treated like an absent count.
    pub fn from_count(count: Option<u32>) -> Self {
        match count {
            Some(n) if n > 0 => TotalEpisodes::Count(n),
            _ => TotalEpisodes::Placeholder(UNKNOWN_EPISODES.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartDate {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

/// Denormalized detail record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimeDetails {
    pub name: String,
    #[serde(rename = "nativeName", skip_serializing_if = "Option::is_none", default)]
    pub native_name: Option<String>,
    #[serde(rename = "type")]
    pub anime_type: Option<String>,
    pub released: Option<i32>,
    #[serde(rename = "startDate")]
    pub start_date: StartDate,
    pub status: String,
    pub genres: Vec<String>,
    pub othername: String,
    pub synopsis: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "totalEpisodes")]
    pub total_episodes: TotalEpisodes,
    // The upstream has no per-episode pages; these stay empty.
    pub episode_id: Vec<String>,
    pub episode_info_html: String,
    pub episode_page: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_names() {
        let search = SearchItem {
            anime_id: 1,
            name: "Cowboy Bebop".to_string(),
            img_url: "img".to_string(),
            status: "Completed".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&search).unwrap(),
            json!({ "anime_id": 1, "name": "Cowboy Bebop", "img_url": "img", "status": "Completed" })
        );

        let listing = ListingItem {
            anime_id: 1,
            anime_title: "Cowboy Bebop".to_string(),
            img_url: "img".to_string(),
            status: "Completed".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&listing).unwrap(),
            json!({ "animeId": 1, "animeTitle": "Cowboy Bebop", "imgUrl": "img", "status": "Completed" })
        );

        let top = TopAiringItem {
            anime_id: 1,
            anime_title: "t".to_string(),
            anime_img: "i".to_string(),
            latest_ep: String::new(),
            anime_url: "u".to_string(),
            genres: vec!["Action".to_string()],
        };
        let value = serde_json::to_value(&top).unwrap();
        assert_eq!(value["latestEp"], json!(""));
        assert_eq!(value["animeUrl"], json!("u"));
    }

    #[test]
    fn test_total_episodes_serialization() {
        assert_eq!(serde_json::to_value(TotalEpisodes::from_count(Some(26))).unwrap(), json!(26));
        assert_eq!(serde_json::to_value(TotalEpisodes::from_count(None)).unwrap(), json!("Unknown"));
        assert_eq!(serde_json::to_value(TotalEpisodes::from_count(Some(0))).unwrap(), json!("Unknown"));
    }

    #[test]
    fn test_native_name_omitted_when_absent() {
        let details = AnimeDetails {
            name: "x".to_string(),
            native_name: None,
            anime_type: Some("TV".to_string()),
            released: None,
            start_date: StartDate::default(),
            status: String::new(),
            genres: vec![],
            othername: String::new(),
            synopsis: String::new(),
            image_url: String::new(),
            total_episodes: TotalEpisodes::from_count(None),
            episode_id: vec![],
            episode_info_html: String::new(),
            episode_page: String::new(),
        };
        let value = serde_json::to_value(&details).unwrap();
        assert!(value.get("nativeName").is_none());
        assert_eq!(value["type"], json!("TV"));
        assert_eq!(value["released"], json!(null));
        assert_eq!(value["episode_id"], json!([]));
    }
}
