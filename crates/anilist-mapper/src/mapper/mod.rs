//! Use-case mapping over the AniList API.
//!
//! Each method issues exactly one query (none for [`AnimeMapper::thread_url`]),
//! maps the returned records into the scraper-shaped output and appends them
//! to the caller's accumulator. Nothing is retried or cached, and a failed
//! call contributes nothing: the caller keeps its previous list.

pub mod items;
pub mod normalize;

pub use items::*;
pub use normalize::{accumulate, resolve_title, translate_status};

use crate::api::queries::{self, PAGE_SIZE};
use crate::api::types::{Media, MediaData, PageData, Season};
use crate::api::QueryExecutor;
use crate::error::{MapperError, Result};
use serde_json::{json, Value};
use tracing::{debug, info};

/// Maps AniList responses into scraper-shaped results
pub struct AnimeMapper<E> {
    executor: E,
    site_url: String,
}

impl<E: QueryExecutor> AnimeMapper<E> {
    /// Create a mapper; `site_url` is the base of synthesized detail links
    pub fn new(executor: E, site_url: impl Into<String>) -> Self {
        Self {
            executor,
            site_url: site_url.into(),
        }
    }

    /// Search anime by keyword
    pub async fn search(
        &self,
        keyword: &str,
        page: u32,
        list: &[SearchItem],
    ) -> Result<Vec<SearchItem>> {
        info!(keyword = keyword, page = page, "Searching anime");
        let media = self
            .fetch_page("search", queries::SEARCH, page, json!({ "search": keyword }))
            .await?;
        Ok(accumulate(list, media.iter().map(search_item)))
    }

    /// Most popular anime of all time
    pub async fn popular(&self, page: u32, list: &[ListingItem]) -> Result<Vec<ListingItem>> {
        info!(page = page, "Fetching popular anime");
        let media = self
            .fetch_page("popular", queries::POPULAR, page, json!({}))
            .await?;
        Ok(accumulate(list, media.iter().map(listing_item)))
    }

    /// Most popular anime of one season
    pub async fn new_season(
        &self,
        season: Season,
        year: i32,
        page: u32,
        list: &[ListingItem],
    ) -> Result<Vec<ListingItem>> {
        info!(season = %season, year = year, page = page, "Fetching seasonal anime");
        let media = self
            .fetch_page(
                "seasonal",
                queries::SEASONAL,
                page,
                json!({ "season": season, "seasonYear": year }),
            )
            .await?;
        Ok(accumulate(list, media.iter().map(listing_item)))
    }

    pub async fn genre(
        &self,
        genre: &str,
        page: u32,
        list: &[CatalogItem],
    ) -> Result<Vec<CatalogItem>> {
        info!(genre = genre, page = page, "Fetching anime by genre");
        let media = self
            .fetch_page("genre", queries::GENRE, page, json!({ "genre": genre }))
            .await?;
        Ok(accumulate(list, media.iter().map(|m| self.catalog_item(m))))
    }

    pub async fn completed(&self, page: u32, list: &[ListingItem]) -> Result<Vec<ListingItem>> {
        info!(page = page, "Fetching completed anime");
        let media = self
            .fetch_page("completed", queries::COMPLETED, page, json!({}))
            .await?;
        Ok(accumulate(list, media.iter().map(listing_item)))
    }

    pub async fn ongoing(&self, page: u32, list: &[ListingItem]) -> Result<Vec<ListingItem>> {
        info!(page = page, "Fetching ongoing anime");
        let media = self
            .fetch_page("ongoing", queries::ONGOING, page, json!({}))
            .await?;
        Ok(accumulate(list, media.iter().map(listing_item)))
    }

    pub async fn top_airing(
        &self,
        page: u32,
        list: &[TopAiringItem],
    ) -> Result<Vec<TopAiringItem>> {
        info!(page = page, "Fetching top airing anime");
        let media = self
            .fetch_page("top_airing", queries::TOP_AIRING, page, json!({}))
            .await?;
        Ok(accumulate(
            list,
            media.iter().map(|m| TopAiringItem {
                anime_id: m.id,
                anime_title: resolve_title(&m.title),
                anime_img: m.cover_url(),
                latest_ep: String::new(),
                anime_url: normalize::detail_url(&self.site_url, m.id),
                genres: m.genres.clone(),
            }),
        ))
    }

    pub async fn movies(&self, page: u32, list: &[CatalogItem]) -> Result<Vec<CatalogItem>> {
        info!(page = page, "Fetching anime movies");
        let media = self
            .fetch_page("movies", queries::MOVIES, page, json!({}))
            .await?;
        Ok(accumulate(list, media.iter().map(|m| self.catalog_item(m))))
    }

    /// Airing anime ordered by most recent upstream update
    pub async fn recently_added(
        &self,
        page: u32,
        list: &[RecentItem],
    ) -> Result<Vec<RecentItem>> {
        info!(page = page, "Fetching recently added anime");
        let media = self
            .fetch_page("recently_added", queries::RECENTLY_ADDED, page, json!({}))
            .await?;
        Ok(accumulate(
            list,
            media.iter().map(|m| RecentItem {
                anime_id: m.id,
                anime_title: resolve_title(&m.title),
                anime_img: m.cover_url(),
                episode_num: String::new(),
                anime_url: normalize::detail_url(&self.site_url, m.id),
            }),
        ))
    }

    /// Listing by initial letter.
    ///
    /// AniList has no prefix filter, so this is a keyword search for the letter.
    pub async fn alphabetical(
        &self,
        letter: &str,
        page: u32,
        list: &[SearchItem],
    ) -> Result<Vec<SearchItem>> {
        self.search(letter, page, list).await
    }

    /// Full record for one anime
    pub async fn details(&self, id: i64) -> Result<AnimeDetails> {
        info!(id = id, "Fetching anime details");

        let data = match self
            .executor
            .execute(queries::DETAILS, json!({ "id": id }))
            .await
        {
            Ok(data) => data,
            Err(e) if e.is_upstream_not_found() => return Err(MapperError::NotFound(id)),
            Err(e) => return Err(e),
        };

        let media = decode::<MediaData>("Media", data)?
            .media
            .ok_or(MapperError::NotFound(id))?;

        Ok(details_from(media))
    }

    /// Detail record backing a watch page
    pub async fn watch(&self, id: i64) -> Result<AnimeDetails> {
        self.details(id).await
    }

    /// Link to a forum thread; the thread is not checked for existence.
    pub fn thread_url(&self, id: u64) -> String {
        normalize::thread_url(&self.site_url, id)
    }

    async fn fetch_page(
        &self,
        use_case: &str,
        query: &str,
        page: u32,
        mut variables: Value,
    ) -> Result<Vec<Media>> {
        variables["page"] = json!(page);
        variables["perPage"] = json!(PAGE_SIZE);

        let data = self.executor.execute(query, variables).await?;
        let media = decode::<PageData>("Page", data)?
            .page
            .ok_or_else(|| MapperError::Shape("missing field `Page`".to_string()))?
            .media
            .ok_or_else(|| MapperError::Shape("missing field `Page.media`".to_string()))?;

        debug!(use_case = use_case, page = page, count = media.len(), "Fetched media page");
        Ok(media)
    }

    fn catalog_item(&self, media: &Media) -> CatalogItem {
        CatalogItem {
            anime_id: media.id,
            anime_title: resolve_title(&media.title),
            anime_img: media.cover_url(),
            released_date: media
                .start_year()
                .map(|year| year.to_string())
                .unwrap_or_default(),
            anime_url: normalize::detail_url(&self.site_url, media.id),
            genres: media.genres.clone(),
        }
    }
}

/// Decode `data`; `Null` or a wrongly typed payload is a shape error
fn decode<T: serde::de::DeserializeOwned>(field: &str, data: Value) -> Result<T> {
    if data.is_null() {
        return Err(MapperError::Shape(format!(
            "missing `data` (expected `{}`)",
            field
        )));
    }
    serde_json::from_value(data)
        .map_err(|e| MapperError::Shape(format!("cannot decode `{}`: {}", field, e)))
}

fn status_of(media: &Media) -> String {
    media
        .status
        .as_deref()
        .map(translate_status)
        .unwrap_or_default()
}

fn search_item(media: &Media) -> SearchItem {
    SearchItem {
        anime_id: media.id,
        name: resolve_title(&media.title),
        img_url: media.cover_url(),
        status: status_of(media),
    }
}

fn listing_item(media: &Media) -> ListingItem {
    ListingItem {
        anime_id: media.id,
        anime_title: resolve_title(&media.title),
        img_url: media.cover_url(),
        status: status_of(media),
    }
}

fn details_from(media: Media) -> AnimeDetails {
    let start = media.start_date.unwrap_or_default();

    AnimeDetails {
        name: resolve_title(&media.title),
        native_name: media.title.native.clone().filter(|n| !n.is_empty()),
        anime_type: media.format.clone(),
        released: media.start_year(),
        start_date: StartDate {
            year: start.year,
            month: start.month,
            day: start.day,
        },
        status: status_of(&media),
        othername: media.synonyms.join(", "),
        synopsis: media.description.unwrap_or_default(),
        image_url: media
            .cover_image
            .and_then(|c| c.large)
            .unwrap_or_default(),
        total_episodes: TotalEpisodes::from_count(media.episodes),
        genres: media.genres,
        episode_id: Vec::new(),
        episode_info_html: String::new(),
        episode_page: String::new(),
    }
}
