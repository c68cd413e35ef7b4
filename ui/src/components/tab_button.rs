use gpui::{Div, SharedString, Stateful, div, prelude::*, px, rgb, svg};

use crate::components::button_effect;

const ACTIVE_BG: u32 = 0x2563eb;
const IDLE_BG: u32 = 0x0f172a;

pub fn tab_button(
    id: &str,
    label: &'static str,
    icon: impl Into<SharedString>,
    active: bool,
) -> Stateful<Div> {
    let base_bg = if active { ACTIVE_BG } else { IDLE_BG };
    let text = if active { 0xffffff } else { 0x94a3b8 };
    let button = div()
        .px_4()
        .py_2()
        .rounded_lg()
        .bg(rgb(base_bg))
        .flex()
        .items_center()
        .gap_2()
        .text_sm()
        .text_color(rgb(text))
        .child(
            svg()
                .path(icon.into())
                .w(px(16.))
                .h(px(16.))
                .text_color(rgb(text)),
        )
        .child(label)
        .id(SharedString::from(format!("tab-{id}")));
    button_effect::apply(button, base_bg)
}
