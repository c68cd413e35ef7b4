use crate::chart::{AxisSpec, ColorScale};
use crate::format::{format_raw, format_value};
use crate::{Rgb, ScatterPoint, Value, palette};

/// One `(series label, color, raw value)` triple under the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipEntry {
    pub label: String,
    pub color: Rgb,
    pub value: Value,
}

impl TooltipEntry {
    pub fn new(label: impl Into<String>, color: Rgb, value: Value) -> Self {
        Self {
            label: label.into(),
            color,
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipLine {
    pub text: String,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub title: String,
    pub lines: Vec<TooltipLine>,
}

/// `None` means nothing to draw: no active point, or an empty payload.
pub fn format_tooltip(active: bool, label: &str, payload: &[TooltipEntry]) -> Option<Tooltip> {
    if !active || payload.is_empty() {
        return None;
    }
    Some(Tooltip {
        title: label.to_string(),
        lines: payload
            .iter()
            .map(|entry| TooltipLine {
                text: format_entry(entry),
                color: entry.color,
            })
            .collect(),
    })
}

pub fn format_entry(entry: &TooltipEntry) -> String {
    format!("{}: {}", entry.label, format_value(&entry.value))
}

/// Scatter points describe themselves with raw, unit-suffixed numbers.
pub fn scatter_tooltip(
    point: &ScatterPoint,
    x: &AxisSpec,
    y: &AxisSpec,
    color_by: &ColorScale,
) -> Tooltip {
    let mut lines = vec![
        TooltipLine {
            text: format!("{}: {}{}", x.name, format_raw(point.x), x.suffix),
            color: palette::MUTED,
        },
        TooltipLine {
            text: format!("{}: {}{}", y.name, format_raw(point.y), y.suffix),
            color: palette::MUTED,
        },
    ];
    if let Some(value) = point.color_value {
        lines.push(TooltipLine {
            text: format!("{}: {}{}", color_by.name, format_raw(value), color_by.suffix),
            color: palette::SUCCESS,
        });
    }
    Tooltip {
        title: point.label.to_string(),
        lines,
    }
}
