use std::time::Duration;

use crate::state::DEFAULT_TICK_INTERVAL;
use crate::{ConfigError, TabId};

pub const DEFAULT_BASE_PATH: &str = "/dataviz-portfolio/";
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 860.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix of every generated asset url; always starts and ends with `/`.
    pub base_path: String,
    pub initial_tab: TabId,
    pub tick_interval: Duration,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            initial_tab: TabId::first(),
            tick_interval: DEFAULT_TICK_INTERVAL,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl AppConfig {
    pub fn with_base_path(mut self, raw: &str) -> Self {
        self.base_path = normalize_base_path(raw);
        self
    }

    pub fn asset_url(&self, asset: &str) -> String {
        format!("{}{}", self.base_path, asset.trim_start_matches('/'))
    }

    /// Inverse of [`AppConfig::asset_url`]; `None` for urls outside the base path.
    pub fn strip_base<'a>(&self, url: &'a str) -> Option<&'a str> {
        url.strip_prefix(self.base_path.as_str())
    }
}

pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

pub fn parse_tick_ms(raw: &str) -> Result<Duration, ConfigError> {
    let ms: u64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidTick(raw.to_string()))?;
    if ms == 0 {
        return Err(ConfigError::ZeroTick);
    }
    Ok(Duration::from_millis(ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_path_is_normalized() {
        assert_eq!(normalize_base_path("/dataviz-portfolio/"), "/dataviz-portfolio/");
        assert_eq!(normalize_base_path("dataviz-portfolio"), "/dataviz-portfolio/");
        assert_eq!(normalize_base_path(" /a/b "), "/a/b/");
        assert_eq!(normalize_base_path(""), "/");
        assert_eq!(normalize_base_path("///"), "/");
    }

    #[test]
    fn asset_urls_use_the_base_path() {
        let config = AppConfig::default();
        assert_eq!(
            config.asset_url("icons/globe.svg"),
            "/dataviz-portfolio/icons/globe.svg"
        );
        let root = AppConfig::default().with_base_path("");
        assert_eq!(root.asset_url("/icons/zap.svg"), "/icons/zap.svg");

        let url = config.asset_url("icons/zap.svg");
        assert_eq!(config.strip_base(&url), Some("icons/zap.svg"));
        assert_eq!(config.strip_base("/elsewhere/zap.svg"), None);
    }

    #[test]
    fn tick_interval_parsing() {
        assert_eq!(parse_tick_ms("50"), Ok(Duration::from_millis(50)));
        assert_eq!(parse_tick_ms(" 16 "), Ok(Duration::from_millis(16)));
        assert_eq!(parse_tick_ms("0"), Err(ConfigError::ZeroTick));
        assert_eq!(
            parse_tick_ms("fast"),
            Err(ConfigError::InvalidTick("fast".to_string()))
        );
    }

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.initial_tab, TabId::Overview);
        assert_eq!(config.tick_interval, Duration::from_millis(50));
    }
}
