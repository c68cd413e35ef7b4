use std::time::Duration;

use viz_core::TabId;
use viz_core::config::parse_tick_ms;

const MIN_WINDOW_EDGE: f32 = 320.0;

pub fn parse_tab(raw: &str) -> Result<TabId, String> {
    raw.trim().parse::<TabId>().map_err(|err| err.to_string())
}

pub fn parse_tick(raw: &str) -> Result<Duration, String> {
    parse_tick_ms(raw).map_err(|err| err.to_string())
}

pub fn parse_window_edge(raw: &str) -> Result<f32, String> {
    let value: f32 = raw
        .trim()
        .parse()
        .map_err(|_| format!("invalid window size: {raw}"))?;
    if !value.is_finite() || value < MIN_WINDOW_EDGE {
        return Err(format!("window size must be at least {MIN_WINDOW_EDGE}px"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_parse_by_id() {
        assert_eq!(parse_tab("global-impact"), Ok(TabId::GlobalImpact));
        assert_eq!(parse_tab(" about "), Ok(TabId::About));
        let err = parse_tab("pricing").unwrap_err();
        assert!(err.contains("pricing"));
        assert!(err.contains("tech-trends"));
    }

    #[test]
    fn tick_must_be_positive_millis() {
        assert_eq!(parse_tick("50"), Ok(Duration::from_millis(50)));
        assert!(parse_tick("0").is_err());
        assert!(parse_tick("-5").is_err());
        assert!(parse_tick("1.5").is_err());
    }

    #[test]
    fn window_edges_have_a_floor() {
        assert_eq!(parse_window_edge("1280"), Ok(1280.0));
        assert!(parse_window_edge("100").is_err());
        assert!(parse_window_edge("wide").is_err());
        assert!(parse_window_edge("NaN").is_err());
    }
}
