use gpui::{Div, div, prelude::*, rgb};

use crate::dashboard::content::{FOOTER, FOOTER_SUBTITLE};

pub(crate) fn footer() -> Div {
    div()
        .w_full()
        .py_4()
        .bg(rgb(0x020617))
        .border_t_1()
        .border_color(rgb(0x1e293b))
        .flex()
        .flex_col()
        .items_center()
        .gap_1()
        .text_color(rgb(0x9ca3af))
        .child(div().text_sm().child(FOOTER))
        .child(div().text_xs().child(FOOTER_SUBTITLE))
}
