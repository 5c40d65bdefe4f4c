use log::error;
use web_sys::{window, MediaQueryList};

use crate::models::SiteContent;

const SITE_CONTENT: &str = include_str!("../content/site.json");

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub fn parse_site_content(raw: &str) -> Result<SiteContent, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Bundled site content. A broken file logs and renders an empty page
/// instead of failing the whole app.
pub fn site_content() -> SiteContent {
    parse_site_content(SITE_CONTENT).unwrap_or_else(|e| {
        error!("Failed to parse site content: {}", e);
        SiteContent::default()
    })
}

pub fn media_query(query: &str) -> Option<MediaQueryList> {
    window()?.match_media(query).ok().flatten()
}

fn media_matches(query: &str) -> bool {
    media_query(query).map_or(false, |mql| mql.matches())
}

pub fn prefers_reduced_motion() -> bool {
    media_matches(REDUCED_MOTION_QUERY)
}

pub fn prefers_dark_scheme() -> bool {
    media_matches(DARK_SCHEME_QUERY)
}
