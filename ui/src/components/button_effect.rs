use gpui::{Div, Stateful, prelude::*, rgb};

pub fn apply(button: Stateful<Div>, base_bg: u32) -> Stateful<Div> {
    let (hover_bg, active_bg) = hover_and_active_bg(base_bg);
    button
        .cursor_pointer()
        .on_hover(|_, window, _| window.refresh())
        .hover(move |s| s.bg(rgb(hover_bg)))
        .active(move |s| s.bg(rgb(active_bg)))
}

/// Known surfaces get hand-picked neighbours; anything else is tinted/shaded.
pub fn hover_and_active_bg(base_bg: u32) -> (u32, u32) {
    match base_bg {
        0x0f172a => (0x1e293b, 0x020617),
        0x1e293b => (0x334155, 0x0f172a),
        0x2563eb => (0x3b82f6, 0x1d4ed8),
        _ => (tint(base_bg, 0.18), shade(base_bg, 0.18)),
    }
}

fn tint(color: u32, amount: f32) -> u32 {
    map_channels(color, |c| c + (255.0 - c) * amount.clamp(0.0, 1.0))
}

fn shade(color: u32, amount: f32) -> u32 {
    map_channels(color, |c| c * (1.0 - amount.clamp(0.0, 1.0)))
}

fn map_channels(color: u32, f: impl Fn(f32) -> f32) -> u32 {
    [16u32, 8, 0].iter().fold(0, |acc, shift| {
        let channel = ((color >> shift) & 0xff) as f32;
        let mapped = f(channel).round().clamp(0.0, 255.0) as u32;
        acc | (mapped << shift)
    })
}
