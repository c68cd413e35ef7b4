use std::f64::consts::TAU;

use crate::chart::{
    AxisSide, AxisSpec, BarLayout, ChartConfig, ChartKind, ChartSpec, ColorScale, RowSelection,
    SeriesSpec,
};
use crate::format::format_percent;
use crate::tooltip::{Tooltip, TooltipEntry, format_tooltip, scatter_tooltip};
use crate::{Dataset, Hover, Record, Rgb, TabId, Value, catalog, data, palette};

pub const POINT_RADIUS: f32 = 8.0;
pub const HIGHLIGHT_RADIUS: f32 = 10.0;

const RANGE_PADDING: f64 = 0.05;

/// A configured series projected over the bound rows, one slot per row.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundSeries<'a> {
    pub spec: &'a SeriesSpec,
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub color_value: Option<f64>,
    pub color: Rgb,
    pub radius: f32,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    pub fraction: f64,
    pub color: Rgb,
    /// Radians, clockwise from three o'clock.
    pub start_angle: f64,
    pub sweep_angle: f64,
}

impl PieSlice {
    pub fn label(&self) -> String {
        format!("{} {}", self.name, format_percent(self.fraction))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoundData<'a> {
    Line {
        categories: Vec<String>,
        series: Vec<BoundSeries<'a>>,
        domain: Option<(f64, f64)>,
    },
    Bar {
        categories: Vec<String>,
        series: Vec<BoundSeries<'a>>,
        layout: BarLayout,
    },
    Area {
        categories: Vec<String>,
        series: Vec<BoundSeries<'a>>,
    },
    Scatter {
        points: Vec<ScatterPoint>,
        x: &'a AxisSpec,
        y: &'a AxisSpec,
        color_by: &'a ColorScale,
    },
    Pie {
        slices: Vec<PieSlice>,
    },
}

/// A chart config resolved against its (borrowed, never copied) dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundChart<'a> {
    pub config: &'a ChartConfig,
    pub dataset: &'a Dataset,
    pub rows: &'a [Record],
    pub data: BoundData<'a>,
}

impl<'a> BoundChart<'a> {
    pub fn kind(&self) -> ChartKind {
        self.config.kind()
    }

    pub fn len(&self) -> usize {
        match &self.data {
            BoundData::Line { categories, .. }
            | BoundData::Bar { categories, .. }
            | BoundData::Area { categories, .. } => categories.len(),
            BoundData::Scatter { points, .. } => points.len(),
            BoundData::Pie { slices } => slices.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn categories(&self) -> &[String] {
        match &self.data {
            BoundData::Line { categories, .. }
            | BoundData::Bar { categories, .. }
            | BoundData::Area { categories, .. } => categories,
            BoundData::Scatter { .. } | BoundData::Pie { .. } => &[],
        }
    }

    pub fn series(&self) -> &[BoundSeries<'a>] {
        match &self.data {
            BoundData::Line { series, .. }
            | BoundData::Bar { series, .. }
            | BoundData::Area { series, .. } => series,
            BoundData::Scatter { .. } | BoundData::Pie { .. } => &[],
        }
    }

    /// Vertical value range for `axis`; for scatter charts `Left` is the y axis.
    pub fn value_range(&self, axis: AxisSide) -> (f64, f64) {
        match &self.data {
            BoundData::Line {
                domain: Some(domain),
                ..
            } => *domain,
            BoundData::Line { series, .. }
            | BoundData::Bar { series, .. }
            | BoundData::Area { series, .. } => axis_range(
                series
                    .iter()
                    .filter(|s| s.spec.axis == axis)
                    .flat_map(|s| s.values.iter().flatten().copied()),
            ),
            BoundData::Scatter { points, .. } => axis_range(points.iter().map(|p| p.y)),
            BoundData::Pie { slices } => {
                (0.0, slices.iter().map(|s| s.value).sum::<f64>().max(1.0))
            }
        }
    }

    /// Horizontal range of a scatter chart; category charts have none.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        match &self.data {
            BoundData::Scatter { points, .. } => Some(axis_range(points.iter().map(|p| p.x))),
            _ => None,
        }
    }

    pub fn uses_axis(&self, axis: AxisSide) -> bool {
        self.series().iter().any(|s| s.spec.axis == axis)
    }

    pub fn point_index(&self, label: &str) -> Option<usize> {
        match &self.data {
            BoundData::Scatter { points, .. } => points.iter().position(|p| p.label == label),
            BoundData::Pie { slices } => slices.iter().position(|s| s.name == label),
            _ => self.categories().iter().position(|c| c == label),
        }
    }

    pub fn label_at(&self, index: usize) -> Option<&str> {
        match &self.data {
            BoundData::Scatter { points, .. } => points.get(index).map(|p| p.label.as_str()),
            BoundData::Pie { slices } => slices.get(index).map(|s| s.name.as_str()),
            _ => self.categories().get(index).map(String::as_str),
        }
    }

    /// Tooltip for the row at `index`, reading only configured fields.
    pub fn tooltip_at(&self, index: usize) -> Option<Tooltip> {
        match &self.data {
            BoundData::Line { categories, series, .. }
            | BoundData::Bar { categories, series, .. }
            | BoundData::Area { categories, series } => {
                let label = categories.get(index)?;
                let row = self.rows.get(index)?;
                let payload: Vec<TooltipEntry> = series
                    .iter()
                    .filter_map(|s| {
                        row.get(s.spec.field)
                            .map(|value| TooltipEntry::new(s.spec.label, s.spec.color, value))
                    })
                    .collect();
                format_tooltip(true, label, &payload)
            }
            BoundData::Scatter {
                points,
                x,
                y,
                color_by,
            } => points
                .get(index)
                .map(|point| scatter_tooltip(point, x, y, color_by)),
            BoundData::Pie { slices } => {
                let slice = slices.get(index)?;
                format_tooltip(
                    true,
                    &slice.name,
                    &[TooltipEntry::new(
                        slice.name.clone(),
                        slice.color,
                        Value::Number(slice.value),
                    )],
                )
            }
        }
    }
}

/// Binds every chart of `tab`; `hover` only affects the chart it names.
pub fn bind_tab(tab: TabId, hover: Option<&Hover>) -> Vec<BoundChart<'static>> {
    catalog::descriptor(tab)
        .charts
        .iter()
        .map(|config| {
            let hovered = hover
                .filter(|h| h.chart == config.id)
                .map(|h| h.category.as_str());
            bind(config, data::dataset(config.dataset), hovered)
        })
        .collect()
}

pub fn bind<'a>(
    config: &'a ChartConfig,
    dataset: &'a Dataset,
    hovered: Option<&str>,
) -> BoundChart<'a> {
    let all = dataset.records();
    let (rows, data) = match &config.spec {
        ChartSpec::Line {
            category,
            series,
            domain,
        } => (
            all,
            BoundData::Line {
                categories: categories(all, category),
                series: bind_series(all, series),
                domain: *domain,
            },
        ),
        ChartSpec::Bar {
            category,
            series,
            layout,
            rows,
        } => {
            let rows = select_rows(all, *rows);
            (
                rows,
                BoundData::Bar {
                    categories: categories(rows, category),
                    series: bind_series(rows, series),
                    layout: *layout,
                },
            )
        }
        ChartSpec::Area { category, series } => (
            all,
            BoundData::Area {
                categories: categories(all, category),
                series: bind_series(all, series),
            },
        ),
        ChartSpec::Scatter {
            label,
            x,
            y,
            color_by,
            highlight,
        } => (
            all,
            BoundData::Scatter {
                points: scatter_points(all, label, x, y, color_by, *highlight, hovered),
                x,
                y,
                color_by,
            },
        ),
        ChartSpec::Pie { name, value, color } => (
            all,
            BoundData::Pie {
                slices: pie_slices(all, name, value, *color),
            },
        ),
    };
    BoundChart {
        config,
        dataset,
        rows,
        data,
    }
}

/// `record[field]` for every record, `None` where it is absent or not numeric.
pub fn project(records: &[Record], field: &str) -> Vec<Option<f64>> {
    records.iter().map(|r| r.number(field)).collect()
}

fn select_rows(records: &[Record], selection: RowSelection) -> &[Record] {
    match selection {
        RowSelection::All => records,
        RowSelection::Last => &records[records.len().saturating_sub(1)..],
    }
}

fn categories(records: &[Record], field: &str) -> Vec<String> {
    records
        .iter()
        .map(|r| r.get(field).map(|v| v.to_string()).unwrap_or_default())
        .collect()
}

fn bind_series<'a>(records: &[Record], specs: &'a [SeriesSpec]) -> Vec<BoundSeries<'a>> {
    specs
        .iter()
        .map(|spec| BoundSeries {
            spec,
            values: project(records, spec.field),
        })
        .collect()
}

fn scatter_points(
    records: &[Record],
    label: &str,
    x: &AxisSpec,
    y: &AxisSpec,
    color_by: &ColorScale,
    highlight: Rgb,
    hovered: Option<&str>,
) -> Vec<ScatterPoint> {
    records
        .iter()
        .filter_map(|r| {
            let (px, py) = (r.number(x.field)?, r.number(y.field)?);
            let label = r.get(label).map(|v| v.to_string()).unwrap_or_default();
            let highlighted = hovered == Some(label.as_str());
            let color_value = r.number(color_by.field);
            let color = match (highlighted, color_value) {
                (true, _) => highlight,
                (false, Some(v)) => color_by.color_for(v),
                (false, None) => palette::PRIMARY,
            };
            Some(ScatterPoint {
                label,
                x: px,
                y: py,
                color_value,
                color,
                radius: if highlighted { HIGHLIGHT_RADIUS } else { POINT_RADIUS },
                highlighted,
            })
        })
        .collect()
}

fn pie_slices(records: &[Record], name: &str, value: &str, color: Option<&str>) -> Vec<PieSlice> {
    let values: Vec<f64> = records
        .iter()
        .map(|r| r.number(value).filter(|v| v.is_finite()).unwrap_or(0.0).max(0.0))
        .collect();
    let total: f64 = values.iter().sum();

    let mut angle = 0.0;
    records
        .iter()
        .zip(values)
        .enumerate()
        .map(|(idx, (record, value))| {
            let fraction = if total > 0.0 { value / total } else { 0.0 };
            let sweep = fraction * TAU;
            let slice_color = color
                .and_then(|field| record.get(field))
                .and_then(|v| v.as_text())
                .and_then(Rgb::from_hex)
                .unwrap_or(palette::CYCLE[idx % palette::CYCLE.len()]);
            let slice = PieSlice {
                name: record.get(name).map(|v| v.to_string()).unwrap_or_default(),
                value,
                fraction,
                color: slice_color,
                start_angle: angle,
                sweep_angle: sweep,
            };
            angle += sweep;
            slice
        })
        .collect()
}

fn axis_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (mut lo, mut hi) = values
        .filter(|v| v.is_finite())
        .fold((0.0_f64, f64::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if hi == f64::MIN {
        return (0.0, 1.0);
    }
    hi = hi.max(0.0);
    if hi == lo {
        hi = lo + 1.0;
    }
    let pad = (hi - lo) * RANGE_PADDING;
    hi += pad;
    if lo < 0.0 {
        lo -= pad;
    }
    (lo, hi)
}
