use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const USER_AGENT: &str = concat!("pokewealth-sdk/", env!("CARGO_PKG_VERSION"));

pub const ANALYZE_CARD_PATH: &str = "/analyze-card";
pub const SAVE_CARD_PATH: &str = "/save-card";
pub const CARDS_PATH: &str = "/cards";
pub const PORTFOLIO_ANALYTICS_PATH: &str = "/portfolio/analytics";

/// How long the "card saved" notice stays up before it clears itself.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

pub fn card_image_path(id: i64) -> String {
    format!("{}/{}/image", CARDS_PATH, id)
}

pub fn price_history_path(id: i64) -> String {
    format!("{}/{}/price-history", CARDS_PATH, id)
}

/// Join an origin and an endpoint path without doubling the slash.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
