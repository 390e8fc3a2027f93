//! Pure helpers shared by every use case.

use crate::api::types::MediaTitle;

/// Translate an AniList status into the scraper vocabulary.
///
/// Values outside the table pass through unchanged.
pub fn translate_status(status: &str) -> String {
    match status {
        "FINISHED" => "Completed".to_string(),
        "RELEASING" => "Ongoing".to_string(),
        "NOT_YET_RELEASED" => "Upcoming".to_string(),
        other => other.to_string(),
    }
}

/// Display title: english when non-empty, else romaji. Native is never used.
pub fn resolve_title(title: &MediaTitle) -> String {
    title
        .english
        .as_deref()
        .filter(|english| !english.is_empty())
        .or(title.romaji.as_deref())
        .unwrap_or_default()
        .to_string()
}

pub fn detail_url(site_url: &str, id: i64) -> String {
    format!("{}/anime/{}", site_url.trim_end_matches('/'), id)
}

pub fn thread_url(site_url: &str, id: u64) -> String {
    format!("{}/forum/thread/{}", site_url.trim_end_matches('/'), id)
}

/// Prior items followed by the new page, leaving `list` untouched
pub fn accumulate<T: Clone>(list: &[T], page: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut out = list.to_vec();
    out.extend(page);
    out
}
