use jobtrackpath_core::api::DEFAULT_WAITLIST_PATH;
use jobtrackpath_core::{Carousel, Slide, AUTO_ADVANCE_INTERVAL};

pub const DEFAULT_LOG_FILTER: &str = "info,jobtrackpath=debug";

/// Empty means same origin.
pub fn get_backend_url() -> String {
    backend_url(option_env!("BACKEND_URL"))
}

pub fn waitlist_url() -> String {
    join_url(&get_backend_url(), option_env!("WAITLIST_PATH"))
}

pub fn carousel_interval_ms() -> u32 {
    interval_ms(option_env!("CAROUSEL_INTERVAL_MS"))
}

pub fn log_filter() -> &'static str {
    option_env!("RUST_LOG")
        .filter(|filter| !filter.trim().is_empty())
        .unwrap_or(DEFAULT_LOG_FILTER)
}

/// The product screenshots, in display order.
pub fn showcase_carousel() -> Carousel {
    Carousel::new(
        Slide::new("/images/board_trans_bg.png", "Kanban Board View"),
        [Slide::new(
            "/images/conversation_trans_bg.png",
            "Conversation Tracker View",
        )],
    )
}

fn backend_url(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or("").trim_end_matches('/').to_string()
}

fn join_url(base: &str, path: Option<&str>) -> String {
    let path = path
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .unwrap_or(DEFAULT_WAITLIST_PATH);
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

// Zero and unparsable values fall back to the default.
fn interval_ms(raw: Option<&str>) -> u32 {
    let default = AUTO_ADVANCE_INTERVAL.as_millis() as u32;
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|&ms| ms > 0)
        .unwrap_or(default)
}
