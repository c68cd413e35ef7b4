use std::collections::HashMap;
use std::time::Duration;

use gpui::{AsyncApp, Bounds, Context, Pixels, Task, WeakEntity};
use tracing::{debug, info};
use viz_core::{AppConfig, TabId, ViewState};

pub struct DashboardView {
    pub(super) state: ViewState,
    pub(super) config: AppConfig,
    /// Canvas bounds of the charts painted last frame, keyed by chart id.
    pub(super) chart_bounds: HashMap<&'static str, Bounds<Pixels>>,
    pub(super) hover_position: Option<(f32, f32)>,
    pub(super) root_origin: (f32, f32),
    animation: Option<Task<()>>,
}

impl DashboardView {
    pub fn new(config: AppConfig, cx: &mut Context<Self>) -> Self {
        let animation = Some(Self::spawn_animation(config.tick_interval, cx));
        Self {
            state: ViewState::new(config.initial_tab),
            config,
            chart_bounds: HashMap::new(),
            hover_position: None,
            root_origin: (0.0, 0.0),
            animation,
        }
    }

    /// Recurring tick; ends on its own once the view is released.
    fn spawn_animation(interval: Duration, cx: &mut Context<Self>) -> Task<()> {
        debug!(interval_ms = interval.as_millis() as u64, "animation started");
        cx.spawn(async move |this: WeakEntity<Self>, cx: &mut AsyncApp| {
            loop {
                cx.background_executor().timer(interval).await;
                let ticked = this.update(cx, |view, cx| {
                    view.state.tick();
                    cx.notify();
                });
                if ticked.is_err() {
                    break;
                }
            }
        })
    }

    pub(crate) fn stop_animation(&mut self) {
        if self.animation.take().is_some() {
            debug!("animation stopped");
        }
    }

    #[cfg(test)]
    pub(crate) fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn active_tab(&self) -> TabId {
        self.state.active_tab()
    }

    pub fn animation_counter(&self) -> u8 {
        self.state.animation_counter()
    }

    pub fn hovered_category(&self, chart: &str) -> Option<&str> {
        self.state.hovered_category(chart)
    }

    pub fn select_tab(&mut self, id: &str, cx: &mut Context<Self>) -> bool {
        let before = self.state.active_tab();
        if !self.state.select_tab(id) {
            return false;
        }
        if self.state.active_tab() != before {
            self.hover_position = None;
            self.chart_bounds.clear();
        }
        cx.notify();
        true
    }
}

impl Drop for DashboardView {
    fn drop(&mut self) {
        self.stop_animation();
        info!(tab = %self.state.active_tab(), "dashboard closed");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gpui::TestAppContext;
    use viz_core::{AppConfig, DEFAULT_TICK_INTERVAL};

    use super::DashboardView;

    #[gpui::test]
    async fn animation_ticks_until_stopped(cx: &TestAppContext) {
        let mut cx = cx.clone();
        cx.update(gpui_component::theme::init);
        let (dashboard, cx) =
            cx.add_window_view(|_, cx| DashboardView::new(AppConfig::default(), cx));
        cx.run_until_parked();
        assert_eq!(dashboard.update(cx, |view, _| view.animation_counter()), 0);
        assert!(dashboard.update(cx, |view, _| view.is_animating()));

        for expected in 1..=3 {
            cx.executor().advance_clock(DEFAULT_TICK_INTERVAL);
            cx.run_until_parked();
            assert_eq!(
                dashboard.update(cx, |view, _| view.animation_counter()),
                expected
            );
        }

        dashboard.update(cx, |view, _| view.stop_animation());
        for _ in 0..3 {
            cx.executor().advance_clock(DEFAULT_TICK_INTERVAL);
            cx.run_until_parked();
        }
        assert_eq!(dashboard.update(cx, |view, _| view.animation_counter()), 3);
        assert!(!dashboard.update(cx, |view, _| view.is_animating()));
    }

    #[gpui::test]
    async fn releasing_the_view_ends_the_tick(cx: &TestAppContext) {
        let mut cx = cx.clone();
        cx.update(gpui_component::theme::init);
        let (dashboard, cx) =
            cx.add_window_view(|_, cx| DashboardView::new(AppConfig::default(), cx));
        cx.run_until_parked();

        let notified = Rc::new(Cell::new(0u32));
        let counter = notified.clone();
        let _subscription = cx.update(|_, cx| {
            cx.observe(&dashboard, move |_, _| counter.set(counter.get() + 1))
        });
        cx.executor().advance_clock(DEFAULT_TICK_INTERVAL);
        cx.run_until_parked();
        assert!(notified.get() >= 1);

        let weak = dashboard.downgrade();
        cx.update(|window, _| window.remove_window());
        drop(dashboard);
        cx.run_until_parked();
        assert!(weak.upgrade().is_none());

        let before = notified.get();
        for _ in 0..3 {
            cx.executor().advance_clock(DEFAULT_TICK_INTERVAL);
            cx.run_until_parked();
        }
        assert_eq!(notified.get(), before);
    }

    #[gpui::test]
    async fn tick_interval_comes_from_config(cx: &TestAppContext) {
        let mut cx = cx.clone();
        cx.update(gpui_component::theme::init);
        let config = AppConfig {
            tick_interval: DEFAULT_TICK_INTERVAL * 4,
            ..AppConfig::default()
        };
        let (dashboard, cx) =
            cx.add_window_view(move |_, cx| DashboardView::new(config.clone(), cx));
        cx.run_until_parked();

        cx.executor().advance_clock(DEFAULT_TICK_INTERVAL);
        cx.run_until_parked();
        assert_eq!(dashboard.update(cx, |view, _| view.animation_counter()), 0);

        cx.executor().advance_clock(DEFAULT_TICK_INTERVAL * 3);
        cx.run_until_parked();
        assert_eq!(dashboard.update(cx, |view, _| view.animation_counter()), 1);
    }
}
