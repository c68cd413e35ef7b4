use gpui::{Div, SharedString, div, prelude::*, px, rgb};

/// Colored swatch followed by a label, as used under charts and in the pie breakdown.
pub fn legend_item(color: u32, label: impl Into<SharedString>) -> Div {
    div()
        .flex()
        .items_center()
        .gap_2()
        .text_xs()
        .text_color(rgb(0xcbd5e1))
        .child(div().w(px(10.)).h(px(10.)).rounded_sm().bg(rgb(color)))
        .child(label.into())
}

pub fn legend_row(items: impl IntoIterator<Item = Div>) -> Div {
    div()
        .flex()
        .flex_wrap()
        .justify_center()
        .gap_4()
        .children(items)
}
