use std::time::Duration;

use tracing::{debug, info, trace};

use crate::bind::{BoundChart, bind_tab};
use crate::catalog::{TabDescriptor, TabId, descriptor};

/// The animation counter wraps back to zero after this many ticks.
pub const ANIMATION_PERIOD: u8 = 100;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Transient hover target: a category of one chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hover {
    pub chart: &'static str,
    pub category: String,
}

/// Everything the dashboard mutates: the active tab, the cosmetic
/// animation counter and the hover selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    active: TabId,
    animation: u8,
    hover: Option<Hover>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(TabId::first())
    }
}

impl ViewState {
    pub fn new(initial: TabId) -> Self {
        Self {
            active: initial,
            animation: 0,
            hover: None,
        }
    }

    pub fn active_tab(&self) -> TabId {
        self.active
    }

    pub fn active_descriptor(&self) -> &'static TabDescriptor {
        descriptor(self.active)
    }

    /// Switches to the tab named `id`. Unknown ids leave the state untouched.
    pub fn select_tab(&mut self, id: &str) -> bool {
        match TabId::parse(id) {
            Some(tab) => {
                self.select(tab);
                true
            }
            None => {
                debug!(tab = id, "ignoring unknown tab id");
                false
            }
        }
    }

    pub fn select(&mut self, tab: TabId) {
        if self.active != tab {
            info!(from = %self.active, to = %tab, "tab selected");
            self.hover = None;
        }
        self.active = tab;
    }

    /// Advances the animation counter, wrapping at [`ANIMATION_PERIOD`].
    pub fn tick(&mut self) -> u8 {
        self.animation = (self.animation + 1) % ANIMATION_PERIOD;
        self.animation
    }

    pub fn animation_counter(&self) -> u8 {
        self.animation
    }

    /// Counter as a `0.0..1.0` phase.
    pub fn animation_phase(&self) -> f32 {
        f32::from(self.animation) / f32::from(ANIMATION_PERIOD)
    }

    /// Returns true when the hover target changed.
    pub fn hover(&mut self, chart: &'static str, category: impl Into<String>) -> bool {
        let next = Hover {
            chart,
            category: category.into(),
        };
        if self.hover.as_ref() == Some(&next) {
            return false;
        }
        trace!(chart, category = %next.category, "hover");
        self.hover = Some(next);
        true
    }

    /// Returns true when something was hovered before.
    pub fn clear_hover(&mut self) -> bool {
        self.hover.take().is_some()
    }

    pub fn hovered(&self) -> Option<&Hover> {
        self.hover.as_ref()
    }

    pub fn hovered_category(&self, chart: &str) -> Option<&str> {
        self.hover
            .as_ref()
            .filter(|h| h.chart == chart)
            .map(|h| h.category.as_str())
    }

    /// Charts of the active tab bound against their datasets.
    pub fn bound_charts(&self) -> Vec<BoundChart<'static>> {
        bind_tab(self.active, self.hover.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChartKind;

    #[test]
    fn starts_on_first_declared_tab() {
        let state = ViewState::default();
        assert_eq!(state.active_tab(), TabId::Overview);
        assert_eq!(state.animation_counter(), 0);
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn select_tab_accepts_every_valid_id() {
        let mut state = ViewState::default();
        for tab in TabId::ALL {
            assert!(state.select_tab(tab.as_str()));
            assert_eq!(state.active_tab(), tab);
            assert_eq!(state.active_descriptor().id, tab);
        }
    }

    #[test]
    fn select_tab_ignores_unknown_ids() {
        let mut state = ViewState::new(TabId::GlobalImpact);
        state.hover("emissions-vs-population", "Asia");
        let before = state.clone();
        for bogus in ["", "pricing", "Overview", "tech-trends "] {
            assert!(!state.select_tab(bogus));
            assert_eq!(state, before);
        }
    }

    #[test]
    fn reselecting_same_tab_keeps_hover() {
        let mut state = ViewState::new(TabId::GlobalImpact);
        state.hover("emissions-vs-population", "Asia");
        state.select(TabId::GlobalImpact);
        assert_eq!(state.hovered_category("emissions-vs-population"), Some("Asia"));

        state.select(TabId::TechTrends);
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn animation_counter_has_period_one_hundred() {
        let mut state = ViewState::default();
        for _ in 0..37 {
            state.tick();
        }
        let start = state.animation_counter();
        let mut max_seen = 0;
        for _ in 0..ANIMATION_PERIOD {
            max_seen = max_seen.max(state.tick());
        }
        assert_eq!(state.animation_counter(), start);
        assert_eq!(max_seen, ANIMATION_PERIOD - 1);
        assert_eq!(state.active_tab(), TabId::Overview);
    }

    #[test]
    fn hover_reports_changes() {
        let mut state = ViewState::new(TabId::GlobalImpact);
        assert!(state.hover("emissions-vs-population", "Asia"));
        assert!(!state.hover("emissions-vs-population", "Asia"));
        assert!(state.hover("emissions-vs-population", "Europe"));
        assert_eq!(state.hovered_category("renewable-by-region"), None);
        assert!(state.clear_hover());
        assert!(!state.clear_hover());
    }

    #[test]
    fn bound_charts_follow_the_active_tab() {
        let mut state = ViewState::default();
        assert_eq!(state.bound_charts()[0].kind(), ChartKind::Pie);

        state.select_tab("tech-trends");
        let charts = state.bound_charts();
        assert_eq!(charts[0].kind(), ChartKind::Line);
        assert_eq!(charts[0].len(), 7);
        assert_eq!(charts[0].series().len(), 5);

        state.select_tab("global-impact");
        state.hover("emissions-vs-population", "Oceania");
        let charts = state.bound_charts();
        assert_eq!(charts[0].kind(), ChartKind::Scatter);
        assert_eq!(charts[0].len(), 6);

        state.select_tab("about");
        assert!(state.bound_charts().is_empty());
    }
}
