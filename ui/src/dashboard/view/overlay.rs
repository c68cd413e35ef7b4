use gpui::{Div, div, prelude::*, px, rgb};

use super::DashboardView;

const TIP_WIDTH: f32 = 200.0;
const LINE_HEIGHT: f32 = 18.0;

impl DashboardView {
    /// Tooltip for the hovered chart, clamped to that chart's bounds.
    pub(super) fn tooltip_overlay(&self) -> Option<Div> {
        let hover = self.state.hovered()?;
        let (mx, my) = self.hover_position?;
        let bounds = self.chart_bounds.get(hover.chart)?;
        let charts = self.state.bound_charts();
        let chart = charts.iter().find(|c| c.config.id == hover.chart)?;
        let tooltip = chart.tooltip_at(chart.point_index(&hover.category)?)?;

        let origin_x = f32::from(bounds.origin.x);
        let origin_y = f32::from(bounds.origin.y);
        let max_x = origin_x + f32::from(bounds.size.width);
        let max_y = origin_y + f32::from(bounds.size.height);
        let tip_height = 24.0 + LINE_HEIGHT * (tooltip.lines.len() as f32 + 1.0);
        let mut x = mx + 14.0;
        let mut y = my + 14.0;
        if x + TIP_WIDTH > max_x {
            x = (mx - TIP_WIDTH - 14.0).max(origin_x);
        }
        if y + tip_height > max_y {
            y = (max_y - tip_height).max(origin_y);
        }
        let (root_x, root_y) = self.root_origin;

        let lines = tooltip.lines.into_iter().map(|line| {
            div()
                .text_sm()
                .text_color(rgb(line.color.hex()))
                .child(line.text)
        });

        Some(
            div()
                .absolute()
                .left(px(x - root_x))
                .top(px(y - root_y))
                .min_w(px(140.))
                .max_w(px(TIP_WIDTH))
                .bg(rgb(0xffffff))
                .rounded_lg()
                .shadow_lg()
                .p_3()
                .flex()
                .flex_col()
                .gap_1()
                .child(
                    div()
                        .font_weight(gpui::FontWeight::BOLD)
                        .text_color(rgb(0x1f2937))
                        .child(tooltip.title),
                )
                .children(lines),
        )
    }
}
