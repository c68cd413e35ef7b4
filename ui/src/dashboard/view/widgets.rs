use gpui::{Div, FontWeight, SharedString, div, prelude::*, px, rgb, rgba, svg};

use crate::dashboard::content::{Insight, StatCard};

pub(crate) fn card() -> Div {
    div()
        .bg(rgb(0x1e293b))
        .border_1()
        .border_color(rgb(0x334155))
        .rounded_xl()
        .p_6()
        .flex()
        .flex_col()
        .gap_4()
}

pub(crate) fn card_title(title: impl Into<SharedString>) -> Div {
    div()
        .text_xl()
        .font_weight(FontWeight::BOLD)
        .text_color(rgb(0xffffff))
        .child(title.into())
}

pub(crate) fn stat_card(stat: &StatCard, icon_path: String) -> Div {
    let icon = div()
        .w(px(44.))
        .h(px(44.))
        .rounded_lg()
        .bg(rgb(stat.color))
        .flex()
        .items_center()
        .justify_center()
        .child(
            svg()
                .path(SharedString::from(icon_path))
                .w(px(22.))
                .h(px(22.))
                .text_color(rgb(0xffffff)),
        );
    let mut top = div().flex().items_center().justify_between().child(icon);
    if let Some(badge) = stat.badge {
        top = top.child(chip(badge, 0xffffff33));
    }
    card()
        .flex_1()
        .child(top)
        .child(
            div()
                .text_3xl()
                .font_weight(FontWeight::BOLD)
                .text_color(rgb(0xffffff))
                .child(stat.value),
        )
        .child(div().text_color(rgb(0xcbd5e1)).child(stat.label))
}

/// Small rounded label over a translucent fill (`rgba` hex).
pub(crate) fn chip(label: impl Into<SharedString>, fill: u32) -> Div {
    div()
        .px_3()
        .py_1()
        .rounded_full()
        .bg(rgba(fill))
        .text_xs()
        .text_color(rgb(0xffffff))
        .child(label.into())
}

pub(crate) fn insight_list(insights: &[Insight]) -> Div {
    div().flex().flex_col().gap_3().children(insights.iter().map(|insight| {
        div()
            .flex()
            .items_start()
            .gap_2()
            .text_color(rgb(0xcbd5e1))
            .child(div().text_color(rgb(insight.color)).child("•"))
            .child(insight.text)
    }))
}

pub(crate) fn check_item(text: &'static str) -> Div {
    div()
        .flex()
        .items_start()
        .gap_3()
        .text_color(rgb(0xcbd5e1))
        .child(
            div()
                .w(px(22.))
                .h(px(22.))
                .flex_none()
                .rounded_full()
                .bg(rgb(0x3b82f6))
                .flex()
                .items_center()
                .justify_center()
                .text_xs()
                .text_color(rgb(0xffffff))
                .child("✓"),
        )
        .child(text)
}
