use gpui::{
    Bounds, Context, MouseMoveEvent, Pixels, Render, Window, div, prelude::*, rgb,
};

use super::DashboardView;
use super::sections::{body::body, footer::footer, header::header, tabs::tab_bar};

impl Render for DashboardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let header = header(
            self.config.asset_url("icons/bar-chart.svg"),
            self.state.animation_phase(),
        );
        let tabs = tab_bar(self, cx);
        let body = body(self, cx);
        let tooltip = self.tooltip_overlay();

        let root = div()
            .flex()
            .flex_col()
            .size_full()
            .bg(rgb(0x0b1220))
            .text_color(gpui::white())
            .child(header)
            .child(tabs)
            .child(body)
            .child(footer());

        let track_root = cx.processor(
            |this: &mut DashboardView, bounds: Vec<Bounds<Pixels>>, _, _| {
                if let Some(root_bounds) = bounds.first() {
                    this.root_origin = (
                        f32::from(root_bounds.origin.x),
                        f32::from(root_bounds.origin.y),
                    );
                }
            },
        );
        let clear_hover = cx.listener(
            |this: &mut DashboardView, event: &MouseMoveEvent, _, cx| {
                this.clear_hover_outside(event.position, cx);
            },
        );

        div()
            .relative()
            .size_full()
            .on_children_prepainted(track_root)
            .on_mouse_move(clear_hover)
            .child(root)
            .children(tooltip)
    }
}
