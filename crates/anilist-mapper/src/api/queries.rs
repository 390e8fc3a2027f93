//! GraphQL documents sent to AniList.
//!
//! List documents share one template: `$page`/`$perPage` pagination, a media
//! filter, and the listing selection set.

/// Number of media per page requested from the upstream
pub const PAGE_SIZE: u32 = 20;

macro_rules! page_query {
    (@build [$($params:literal)?] $filter:literal) => {
        concat!(
            "query ($page: Int, $perPage: Int", $(", ", $params,)? ") {\n",
            "  Page(page: $page, perPage: $perPage) {\n",
            "    media(", $filter, ") {\n",
            "      id\n",
            "      title { romaji english native }\n",
            "      coverImage { large }\n",
            "      status\n",
            "      genres\n",
            "      format\n",
            "      startDate { year month day }\n",
            "      seasonYear\n",
            "    }\n",
            "  }\n",
            "}\n"
        )
    };
    ($params:literal, $filter:literal) => {
        page_query!(@build [$params] $filter)
    };
    ($filter:literal) => {
        page_query!(@build [] $filter)
    };
}

pub const SEARCH: &str = page_query!("$search: String", "search: $search, type: ANIME");

pub const POPULAR: &str = page_query!("type: ANIME, sort: POPULARITY_DESC");

pub const SEASONAL: &str = page_query!(
    "$season: MediaSeason, $seasonYear: Int",
    "season: $season, seasonYear: $seasonYear, type: ANIME, sort: POPULARITY_DESC"
);

pub const GENRE: &str = page_query!(
    "$genre: String",
    "genre_in: [$genre], type: ANIME, sort: POPULARITY_DESC"
);

pub const COMPLETED: &str = page_query!("status: FINISHED, type: ANIME, sort: POPULARITY_DESC");

pub const ONGOING: &str = page_query!("status: RELEASING, type: ANIME, sort: POPULARITY_DESC");

// Same filter and order as ONGOING.
pub const TOP_AIRING: &str = page_query!("status: RELEASING, type: ANIME, sort: POPULARITY_DESC");

pub const MOVIES: &str = page_query!("format: MOVIE, type: ANIME, sort: POPULARITY_DESC");

pub const RECENTLY_ADDED: &str =
    page_query!("status: RELEASING, type: ANIME, sort: UPDATED_AT_DESC");

pub const DETAILS: &str = "query ($id: Int) {
  Media(id: $id, type: ANIME) {
    id
    title { romaji english native }
    description(asHtml: false)
    episodes
    coverImage { large }
    genres
    status
    startDate { year month day }
    seasonYear
    format
    synonyms
  }
}
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_documents_are_paginated() {
        for doc in [
            SEARCH, POPULAR, SEASONAL, GENRE, COMPLETED, ONGOING, TOP_AIRING, MOVIES,
            RECENTLY_ADDED,
        ] {
            assert!(doc.starts_with("query ($page: Int, $perPage: Int"));
            assert!(doc.contains("Page(page: $page, perPage: $perPage)"));
            assert!(doc.contains("type: ANIME"));
            assert!(doc.contains("coverImage { large }"));
        }
    }

    #[test]
    fn test_filters() {
        assert!(SEARCH.contains("$search: String"));
        assert!(SEASONAL.contains("season: $season, seasonYear: $seasonYear"));
        assert!(GENRE.contains("genre_in: [$genre]"));
        assert!(COMPLETED.contains("status: FINISHED"));
        assert!(ONGOING.contains("status: RELEASING"));
        assert!(MOVIES.contains("format: MOVIE"));
        assert!(RECENTLY_ADDED.contains("sort: UPDATED_AT_DESC"));
        assert!(POPULAR.starts_with("query ($page: Int, $perPage: Int) {"));
    }

    #[test]
    fn test_details_document() {
        assert!(DETAILS.contains("Media(id: $id, type: ANIME)"));
        assert!(DETAILS.contains("synonyms"));
        assert!(DETAILS.contains("description(asHtml: false)"));
    }
}
