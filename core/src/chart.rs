use crate::{DatasetId, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Line,
    Bar,
    Scatter,
    Pie,
    Area,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisSide {
    Left,
    Right,
}

/// One plotted field: where it comes from and how it is labelled.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub field: &'static str,
    pub label: &'static str,
    pub color: Rgb,
    pub axis: AxisSide,
}

impl SeriesSpec {
    pub const fn new(field: &'static str, label: &'static str, color: Rgb) -> Self {
        Self {
            field,
            label,
            color,
            axis: AxisSide::Left,
        }
    }

    pub const fn on_axis(mut self, axis: AxisSide) -> Self {
        self.axis = axis;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarLayout {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSelection {
    All,
    Last,
}

/// A numeric scatter axis. `name` and `suffix` feed the point tooltip,
/// `title` is drawn along the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub field: &'static str,
    pub title: &'static str,
    pub name: &'static str,
    pub suffix: &'static str,
}

/// Maps a numeric field onto a color ramp between `low` and `high`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    pub field: &'static str,
    pub name: &'static str,
    pub suffix: &'static str,
    pub domain: (f64, f64),
    pub low: Rgb,
    pub high: Rgb,
}

impl ColorScale {
    pub fn color_for(&self, value: f64) -> Rgb {
        let (min, max) = self.domain;
        let span = max - min;
        let t = if span.abs() < f64::EPSILON {
            0.0
        } else {
            (value - min) / span
        };
        self.low.lerp(self.high, t)
    }
}

/// Per-kind chart payload. Every field a chart reads is named here.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Line {
        category: &'static str,
        series: Vec<SeriesSpec>,
        domain: Option<(f64, f64)>,
    },
    Bar {
        category: &'static str,
        series: Vec<SeriesSpec>,
        layout: BarLayout,
        rows: RowSelection,
    },
    Scatter {
        label: &'static str,
        x: AxisSpec,
        y: AxisSpec,
        color_by: ColorScale,
        highlight: Rgb,
    },
    Pie {
        name: &'static str,
        value: &'static str,
        color: Option<&'static str>,
    },
    Area {
        category: &'static str,
        series: Vec<SeriesSpec>,
    },
}

impl ChartSpec {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartSpec::Line { .. } => ChartKind::Line,
            ChartSpec::Bar { .. } => ChartKind::Bar,
            ChartSpec::Scatter { .. } => ChartKind::Scatter,
            ChartSpec::Pie { .. } => ChartKind::Pie,
            ChartSpec::Area { .. } => ChartKind::Area,
        }
    }

    pub fn series(&self) -> &[SeriesSpec] {
        match self {
            ChartSpec::Line { series, .. }
            | ChartSpec::Bar { series, .. }
            | ChartSpec::Area { series, .. } => series,
            ChartSpec::Scatter { .. } | ChartSpec::Pie { .. } => &[],
        }
    }

    /// Every dataset field this chart reads.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            ChartSpec::Line {
                category, series, ..
            }
            | ChartSpec::Bar {
                category, series, ..
            }
            | ChartSpec::Area { category, series } => std::iter::once(*category)
                .chain(series.iter().map(|s| s.field))
                .collect(),
            ChartSpec::Scatter {
                label, x, y, color_by, ..
            } => vec![*label, x.field, y.field, color_by.field],
            ChartSpec::Pie { name, value, color } => {
                let mut fields = vec![*name, *value];
                fields.extend(*color);
                fields
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub id: &'static str,
    pub title: &'static str,
    pub dataset: DatasetId,
    pub spec: ChartSpec,
}

impl ChartConfig {
    pub fn kind(&self) -> ChartKind {
        self.spec.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;

    #[test]
    fn fields_cover_category_and_series() {
        let spec = ChartSpec::Area {
            category: "month",
            series: vec![
                SeriesSpec::new("users", "Users", palette::PRIMARY),
                SeriesSpec::new("revenue", "Revenue ($)", palette::SUCCESS)
                    .on_axis(AxisSide::Right),
            ],
        };
        assert_eq!(spec.kind(), ChartKind::Area);
        assert_eq!(spec.fields(), vec!["month", "users", "revenue"]);
        assert_eq!(spec.series()[1].axis, AxisSide::Right);
    }

    #[test]
    fn pie_fields_include_optional_color() {
        let spec = ChartSpec::Pie {
            name: "name",
            value: "value",
            color: None,
        };
        assert_eq!(spec.fields(), vec!["name", "value"]);
        assert!(spec.series().is_empty());
    }

    #[test]
    fn color_scale_spans_its_domain() {
        let scale = ColorScale {
            field: "renewable",
            name: "Renewable",
            suffix: "%",
            domain: (0.0, 100.0),
            low: Rgb(0x000000),
            high: Rgb(0x0000ff),
        };
        assert_eq!(scale.color_for(0.0), Rgb(0x000000));
        assert_eq!(scale.color_for(100.0), Rgb(0x0000ff));
        assert_eq!(scale.color_for(150.0), Rgb(0x0000ff));

        let flat = ColorScale {
            domain: (5.0, 5.0),
            ..scale
        };
        assert_eq!(flat.color_for(5.0), Rgb(0x000000));
    }
}
