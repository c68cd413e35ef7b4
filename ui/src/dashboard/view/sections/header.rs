use std::f32::consts::TAU;

use gpui::{
    Div, FontWeight, SharedString, div, linear_color_stop, linear_gradient, prelude::*, px, rgb,
    rgba, svg,
};

use crate::dashboard::content::{AUTHOR, TAGLINE, TITLE};

/// Alpha of the header pulse for an animation phase in `0.0..1.0`.
pub(crate) fn pulse_alpha(phase: f32) -> u8 {
    let wave = ((phase * TAU).sin() + 1.0) / 2.0;
    (0x40 as f32 + wave * (0xff - 0x40) as f32).round() as u8
}

pub(crate) fn header(logo_icon: String, phase: f32) -> Div {
    let pulse = 0x10b98100 | u32::from(pulse_alpha(phase));
    let logo = div()
        .w(px(48.))
        .h(px(48.))
        .rounded_lg()
        .bg(linear_gradient(
            135.,
            linear_color_stop(rgb(0x3b82f6), 0.),
            linear_color_stop(rgb(0x9333ea), 1.),
        ))
        .flex()
        .items_center()
        .justify_center()
        .child(
            svg()
                .path(SharedString::from(logo_icon))
                .w(px(24.))
                .h(px(24.))
                .text_color(rgb(0xffffff)),
        );

    let brand = div()
        .flex()
        .items_center()
        .gap_3()
        .child(logo)
        .child(
            div()
                .flex()
                .flex_col()
                .child(
                    div()
                        .flex()
                        .items_center()
                        .gap_2()
                        .child(
                            div()
                                .text_2xl()
                                .font_weight(FontWeight::BOLD)
                                .text_color(rgb(0xffffff))
                                .child(TITLE),
                        )
                        .child(div().w(px(8.)).h(px(8.)).rounded_full().bg(rgba(pulse))),
                )
                .child(div().text_sm().text_color(rgb(0xcbd5e1)).child(TAGLINE)),
        );

    let author = div()
        .flex()
        .flex_col()
        .items_end()
        .child(div().text_sm().text_color(rgb(0x9ca3af)).child("Portfolio by"))
        .child(
            div()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(rgb(0xffffff))
                .child(AUTHOR),
        );

    div()
        .w_full()
        .px_6()
        .py_5()
        .bg(rgb(0x020617))
        .border_b_1()
        .border_color(rgb(0x1e293b))
        .flex()
        .items_center()
        .justify_between()
        .child(brand)
        .child(author)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_stays_visible_over_a_full_period() {
        assert_eq!(pulse_alpha(0.0), 0xa0);
        assert_eq!(pulse_alpha(0.25), 0xff);
        assert_eq!(pulse_alpha(0.75), 0x40);
        for step in 0..100 {
            assert!(pulse_alpha(step as f32 / 100.0) >= 0x40);
        }
    }
}
