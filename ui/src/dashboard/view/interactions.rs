use gpui::{Context, Pixels, Point};

use super::DashboardView;
use crate::dashboard::canvas::{Plot, hit_test};

impl DashboardView {
    pub(crate) fn handle_chart_hover(
        &mut self,
        chart_id: &'static str,
        position: Point<Pixels>,
        cx: &mut Context<Self>,
    ) {
        let Some(bounds) = self.chart_bounds.get(chart_id).copied() else {
            return;
        };
        let (mx, my) = (f32::from(position.x), f32::from(position.y));
        let plot = Plot::from_bounds(bounds);
        let charts = self.state.bound_charts();
        let Some(chart) = charts.iter().find(|c| c.config.id == chart_id) else {
            return;
        };

        let label = hit_test(chart, &plot, mx, my)
            .and_then(|idx| chart.label_at(idx))
            .map(str::to_owned);
        match label {
            Some(label) => {
                self.state.hover(chart_id, label);
                self.hover_position = Some((mx, my));
                cx.notify();
            }
            None => {
                if self.state.hovered_category(chart_id).is_some() {
                    self.state.clear_hover();
                    self.hover_position = None;
                    cx.notify();
                }
            }
        }
    }

    /// Drops the hover once the pointer leaves the hovered chart.
    pub(crate) fn clear_hover_outside(&mut self, position: Point<Pixels>, cx: &mut Context<Self>) {
        let Some(hover) = self.state.hovered() else {
            return;
        };
        let inside = self.chart_bounds.get(hover.chart).is_some_and(|bounds| {
            Plot::from_bounds(*bounds).contains(f32::from(position.x), f32::from(position.y))
        });
        if !inside {
            self.state.clear_hover();
            self.hover_position = None;
            cx.notify();
        }
    }
}

#[cfg(test)]
mod tests {
    use gpui::{TestAppContext, point, px};
    use viz_core::{AppConfig, AxisSide, BoundData, TabId};

    use super::DashboardView;
    use crate::dashboard::canvas::{Plot, scatter_position};

    const SCATTER: &str = "emissions-vs-population";

    #[gpui::test]
    async fn hovering_a_scatter_point_highlights_and_clears(cx: &TestAppContext) {
        let mut cx = cx.clone();
        cx.update(gpui_component::theme::init);
        let config = AppConfig {
            initial_tab: TabId::GlobalImpact,
            ..AppConfig::default()
        };
        let (dashboard, cx) =
            cx.add_window_view(move |_, cx| DashboardView::new(config.clone(), cx));
        cx.refresh().expect("refresh");
        cx.run_until_parked();

        let asia = dashboard.update(cx, |view, _| {
            let bounds = *view.chart_bounds.get(SCATTER).expect("scatter painted");
            let charts = view.state.bound_charts();
            let chart = &charts[0];
            let BoundData::Scatter { points, .. } = &chart.data else {
                panic!("expected scatter data");
            };
            let asia = points.iter().find(|p| p.label == "Asia").expect("asia");
            let plot = Plot::from_bounds(bounds);
            scatter_position(
                &plot,
                asia,
                chart.x_range().expect("x range"),
                chart.value_range(AxisSide::Left),
            )
        });

        dashboard.update(cx, |view, cx| {
            view.handle_chart_hover(SCATTER, point(px(asia.0), px(asia.1)), cx);
        });
        assert_eq!(
            dashboard.update(cx, |view, _| view.hovered_category(SCATTER).map(str::to_owned)),
            Some("Asia".to_string())
        );
        let tooltip = dashboard.update(cx, |view, _| view.tooltip_overlay().is_some());
        assert!(tooltip);

        dashboard.update(cx, |view, cx| {
            view.clear_hover_outside(point(px(-10.), px(-10.)), cx);
        });
        assert_eq!(
            dashboard.update(cx, |view, _| view.hovered_category(SCATTER).map(str::to_owned)),
            None
        );
    }

    #[gpui::test]
    async fn switching_tabs_drops_the_hover(cx: &TestAppContext) {
        let mut cx = cx.clone();
        cx.update(gpui_component::theme::init);
        let config = AppConfig {
            initial_tab: TabId::GlobalImpact,
            ..AppConfig::default()
        };
        let (dashboard, cx) =
            cx.add_window_view(move |_, cx| DashboardView::new(config.clone(), cx));
        cx.run_until_parked();

        dashboard.update(cx, |view, cx| {
            view.state.hover(SCATTER, "Europe");
            view.select_tab("global-impact", cx);
        });
        assert!(dashboard.update(cx, |view, _| view.hovered_category(SCATTER).is_some()));

        dashboard.update(cx, |view, cx| {
            view.select_tab("growth-analytics", cx);
        });
        assert!(dashboard.update(cx, |view, _| view.state.hovered().is_none()));
    }
}
