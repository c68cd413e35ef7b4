use gpui::{
    Bounds, Context, Div, MouseMoveEvent, Pixels, SharedString, Stateful, div, prelude::*, px,
    rgb,
};
use viz_core::format::{format_number, format_raw};
use viz_core::{AxisSide, BarLayout, BoundChart, BoundData};

use super::DashboardView;
use crate::components::legend::{legend_item, legend_row};
use crate::dashboard::canvas::chart_canvas;

const AXIS_WIDTH: f32 = 56.0;
const AXIS_TEXT: u32 = 0x94a3b8;
const TICK_FRACTIONS: [f64; 5] = [1.0, 0.75, 0.5, 0.25, 0.0];

fn tick_label(value: f64, span: f64) -> String {
    if span >= 10.0 {
        format_number(value.round())
    } else {
        format_number(value)
    }
}

fn ticks((lo, hi): (f64, f64)) -> Vec<String> {
    TICK_FRACTIONS
        .iter()
        .map(|f| tick_label(lo + (hi - lo) * f, hi - lo))
        .collect()
}

fn value_axis(range: (f64, f64), height: f32) -> Div {
    div()
        .w(px(AXIS_WIDTH))
        .h(px(height))
        .flex_none()
        .flex()
        .flex_col()
        .justify_between()
        .items_end()
        .pr_2()
        .text_xs()
        .text_color(rgb(AXIS_TEXT))
        .children(ticks(range))
}

fn band_labels(labels: &[String]) -> Div {
    div()
        .flex_1()
        .flex()
        .text_xs()
        .text_color(rgb(AXIS_TEXT))
        .children(
            labels
                .iter()
                .map(|label| div().flex_1().flex().justify_center().child(label.clone())),
        )
}

fn gutter() -> Div {
    div().w(px(AXIS_WIDTH)).flex_none()
}

fn series_legend(chart: &BoundChart) -> Div {
    legend_row(
        chart
            .series()
            .iter()
            .map(|s| legend_item(s.spec.color.hex(), s.spec.label)),
    )
}

impl DashboardView {
    /// Interactive plot area; its first child is the canvas whose bounds drive hit testing.
    fn plot_region(
        &self,
        chart: BoundChart<'static>,
        height: f32,
        cx: &mut Context<Self>,
    ) -> Stateful<Div> {
        let chart_id = chart.config.id;
        let hover = self
            .state
            .hovered_category(chart_id)
            .and_then(|category| chart.point_index(category));
        let track_bounds = cx.processor(
            move |this: &mut DashboardView, bounds: Vec<Bounds<Pixels>>, _, _| {
                if let Some(canvas_bounds) = bounds.first() {
                    this.chart_bounds.insert(chart_id, *canvas_bounds);
                }
            },
        );
        let on_move = cx.listener(
            move |this: &mut DashboardView, event: &MouseMoveEvent, _, cx| {
                this.handle_chart_hover(chart_id, event.position, cx);
            },
        );
        div()
            .flex_1()
            .h(px(height))
            .on_children_prepainted(track_bounds)
            .on_mouse_move(on_move)
            .child(chart_canvas(chart, hover).size_full())
            .id(SharedString::from(format!("chart-{chart_id}")))
            .debug_selector(move || format!("chart-{chart_id}"))
    }

    pub(super) fn chart_panel(
        &self,
        chart: BoundChart<'static>,
        height: f32,
        cx: &mut Context<Self>,
    ) -> Div {
        let panel = div().flex().flex_col().gap_3().w_full();
        match &chart.data {
            BoundData::Line { categories, .. } | BoundData::Area { categories, .. } => {
                let categories = categories.clone();
                let left = chart.value_range(AxisSide::Left);
                let right = chart
                    .uses_axis(AxisSide::Right)
                    .then(|| chart.value_range(AxisSide::Right));
                let legend = series_legend(&chart);
                let mut row = div()
                    .flex()
                    .w_full()
                    .child(value_axis(left, height))
                    .child(self.plot_region(chart, height, cx));
                let mut labels = div()
                    .flex()
                    .w_full()
                    .child(gutter())
                    .child(band_labels(&categories));
                if let Some(range) = right {
                    row = row.child(value_axis(range, height).items_start().pl_2());
                    labels = labels.child(gutter());
                }
                panel.child(row).child(labels).child(legend)
            }
            BoundData::Bar {
                categories,
                layout: BarLayout::Vertical,
                ..
            } => {
                let categories = categories.clone();
                let range = chart.value_range(AxisSide::Left);
                let legend = series_legend(&chart);
                panel
                    .child(
                        div()
                            .flex()
                            .w_full()
                            .child(value_axis(range, height))
                            .child(self.plot_region(chart, height, cx)),
                    )
                    .child(
                        div()
                            .flex()
                            .w_full()
                            .child(gutter())
                            .child(band_labels(&categories)),
                    )
                    .child(legend)
            }
            BoundData::Bar {
                categories,
                layout: BarLayout::Horizontal,
                ..
            } => {
                let (lo, hi) = chart.value_range(AxisSide::Left);
                let rows = div()
                    .w(px(AXIS_WIDTH))
                    .h(px(height))
                    .flex_none()
                    .flex()
                    .flex_col()
                    .text_xs()
                    .text_color(rgb(AXIS_TEXT))
                    .children(categories.iter().map(|c| {
                        div()
                            .flex_1()
                            .flex()
                            .items_center()
                            .justify_end()
                            .pr_2()
                            .child(c.clone())
                    }));
                let values = div()
                    .flex_1()
                    .flex()
                    .justify_between()
                    .text_xs()
                    .text_color(rgb(AXIS_TEXT))
                    .child(tick_label(lo, hi - lo))
                    .child(tick_label((lo + hi) / 2.0, hi - lo))
                    .child(tick_label(hi, hi - lo));
                let legend = series_legend(&chart);
                panel
                    .child(
                        div()
                            .flex()
                            .w_full()
                            .child(rows)
                            .child(self.plot_region(chart, height, cx)),
                    )
                    .child(div().flex().w_full().child(gutter()).child(values))
                    .child(legend)
            }
            BoundData::Scatter { x, y, color_by, .. } => {
                let x_range = chart.x_range().unwrap_or((0.0, 1.0));
                let y_range = chart.value_range(AxisSide::Left);
                let (x_title, y_title) = (x.title, y.title);
                let scale_label = |value: f64| {
                    format!("{} {}{}", color_by.name, format_raw(value), color_by.suffix)
                };
                let legend = legend_row([
                    legend_item(color_by.low.hex(), scale_label(color_by.domain.0)),
                    legend_item(color_by.high.hex(), scale_label(color_by.domain.1)),
                ]);
                let span = x_range.1 - x_range.0;
                let x_ticks = div()
                    .flex_1()
                    .flex()
                    .justify_between()
                    .text_xs()
                    .text_color(rgb(AXIS_TEXT))
                    .children(
                        TICK_FRACTIONS
                            .iter()
                            .rev()
                            .map(|f| tick_label(x_range.0 + span * f, span)),
                    );
                panel
                    .child(div().text_xs().text_color(rgb(AXIS_TEXT)).child(y_title))
                    .child(
                        div()
                            .flex()
                            .w_full()
                            .child(value_axis(y_range, height))
                            .child(self.plot_region(chart, height, cx)),
                    )
                    .child(div().flex().w_full().child(gutter()).child(x_ticks))
                    .child(
                        div()
                            .flex()
                            .justify_center()
                            .text_xs()
                            .text_color(rgb(AXIS_TEXT))
                            .child(x_title),
                    )
                    .child(legend)
            }
            BoundData::Pie { slices } => {
                let breakdown = div().flex_1().flex().flex_col().justify_center().gap_4().children(
                    slices.iter().map(|slice| {
                        div()
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(legend_item(slice.color.hex(), slice.label()))
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(rgb(0xcbd5e1))
                                    .child(format!("{}%", format_raw(slice.value))),
                            )
                    }),
                );
                panel.child(
                    div()
                        .flex()
                        .w_full()
                        .gap_8()
                        .child(self.plot_region(chart, height, cx))
                        .child(breakdown),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_run_top_down_and_round_wide_ranges() {
        assert_eq!(ticks((0.0, 100.0)), vec!["100", "75", "50", "25", "0"]);
        assert_eq!(ticks((0.0, 2.0)), vec!["2", "1.5", "1", "0.5", "0"]);
        assert_eq!(ticks((0.0, 20000.0))[0], "20,000");
    }
}
