use gpui::{
    BorderStyle, Bounds, Canvas, PathBuilder, Rgba, Window, canvas, linear_color_stop,
    linear_gradient, point, px, quad, rgb, rgba, size,
};
use viz_core::{AxisSide, BarLayout, BoundChart, BoundData, BoundSeries, PieSlice, ScatterPoint};

const BACKGROUND: u32 = 0x0f172a;
const GRID_COLOR: u32 = 0x1e293b;
const CROSSHAIR_COLOR: u32 = 0x475569;
const BAND_HIGHLIGHT: u32 = 0xffffff10;
const LINE_WIDTH: f32 = 2.5;
const DOT_RADIUS: f32 = 3.5;
const BAR_GROUP_FILL: f32 = 0.8;
const PIE_FILL: f32 = 0.85;
const PIE_HOVER_OFFSET: f32 = 6.0;
const PIE_STEP_RADIANS: f64 = 0.04;
const SCATTER_HIT_SLOP: f32 = 4.0;

/// Plot rectangle in window pixels; every painter and hit test maps through it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Plot {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Plot {
    pub fn from_bounds(bounds: Bounds<gpui::Pixels>) -> Self {
        Self {
            x: f32::from(bounds.origin.x),
            y: f32::from(bounds.origin.y),
            width: f32::from(bounds.size.width),
            height: f32::from(bounds.size.height),
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    fn band(extent: f32, count: usize) -> f32 {
        extent / count.max(1) as f32
    }

    /// Center of category `idx` out of `count` equal bands.
    pub fn category_x(&self, idx: usize, count: usize) -> f32 {
        self.x + (idx as f32 + 0.5) * Self::band(self.width, count)
    }

    pub fn category_at(&self, px: f32, count: usize) -> Option<usize> {
        band_index(px - self.x, self.width, count)
    }

    pub fn row_at(&self, py: f32, count: usize) -> Option<usize> {
        band_index(py - self.y, self.height, count)
    }

    pub fn value_y(&self, value: f64, (lo, hi): (f64, f64)) -> f32 {
        self.y + (1.0 - unit(value, lo, hi)) * self.height
    }

    pub fn value_x(&self, value: f64, (lo, hi): (f64, f64)) -> f32 {
        self.x + unit(value, lo, hi) * self.width
    }

    pub fn pie_geometry(&self) -> (f32, f32, f32) {
        let radius = self.width.min(self.height) * 0.5 * PIE_FILL;
        (
            self.x + self.width / 2.0,
            self.y + self.height / 2.0,
            radius.max(0.0),
        )
    }
}

fn band_index(offset: f32, extent: f32, count: usize) -> Option<usize> {
    if count == 0 || extent <= 0.0 || offset < 0.0 || offset >= extent {
        return None;
    }
    let idx = (offset / Plot::band(extent, count)).floor() as usize;
    Some(idx.min(count - 1))
}

fn unit(value: f64, lo: f64, hi: f64) -> f32 {
    let span = hi - lo;
    if span.abs() < f64::EPSILON {
        return 0.5;
    }
    ((value - lo) / span).clamp(0.0, 1.0) as f32
}

pub(crate) fn scatter_position(
    plot: &Plot,
    point: &ScatterPoint,
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> (f32, f32) {
    (plot.value_x(point.x, x_range), plot.value_y(point.y, y_range))
}

/// Index of the slice under the pointer, measured clockwise from three o'clock.
pub(crate) fn slice_at(slices: &[PieSlice], plot: &Plot, px: f32, py: f32) -> Option<usize> {
    let (cx, cy, radius) = plot.pie_geometry();
    let (dx, dy) = (px - cx, py - cy);
    if dx.hypot(dy) > radius + PIE_HOVER_OFFSET {
        return None;
    }
    let angle = f64::from(dy).atan2(f64::from(dx)).rem_euclid(std::f64::consts::TAU);
    slices.iter().position(|slice| {
        slice.sweep_angle > 0.0
            && angle >= slice.start_angle
            && angle < slice.start_angle + slice.sweep_angle
    })
}

fn nearest_point(
    points: &[ScatterPoint],
    plot: &Plot,
    x_range: (f64, f64),
    y_range: (f64, f64),
    px: f32,
    py: f32,
) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .filter_map(|(idx, p)| {
            let (x, y) = scatter_position(plot, p, x_range, y_range);
            let distance = (px - x).hypot(py - y);
            (distance <= p.radius + SCATTER_HIT_SLOP).then_some((idx, distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(idx, _)| idx)
}

/// Maps a pointer position to the row index it designates on `chart`.
pub(crate) fn hit_test(chart: &BoundChart, plot: &Plot, px: f32, py: f32) -> Option<usize> {
    if !plot.contains(px, py) {
        return None;
    }
    match &chart.data {
        BoundData::Line { categories, .. } | BoundData::Area { categories, .. } => {
            plot.category_at(px, categories.len())
        }
        BoundData::Bar {
            categories, layout, ..
        } => match layout {
            BarLayout::Vertical => plot.category_at(px, categories.len()),
            BarLayout::Horizontal => plot.row_at(py, categories.len()),
        },
        BoundData::Scatter { points, .. } => {
            let x_range = chart.x_range()?;
            let y_range = chart.value_range(AxisSide::Left);
            nearest_point(points, plot, x_range, y_range, px, py)
        }
        BoundData::Pie { slices } => slice_at(slices, plot, px, py),
    }
}

/// Canvas for one bound chart; `hover` is the hovered row index, if any.
pub(crate) fn chart_canvas(
    chart: BoundChart<'static>,
    hover: Option<usize>,
) -> Canvas<BoundChart<'static>> {
    canvas(
        move |_, _, _| chart,
        move |bounds, chart, window, _| {
            window.paint_quad(quad(
                bounds,
                px(6.),
                rgb(BACKGROUND),
                px(0.),
                rgb(BACKGROUND),
                BorderStyle::default(),
            ));
            let plot = Plot::from_bounds(bounds);
            if plot.width <= 0.0 || plot.height <= 0.0 {
                return;
            }
            match &chart.data {
                BoundData::Line { categories, series, .. } => {
                    paint_grid(window, &plot);
                    paint_crosshair(window, &plot, hover, categories.len());
                    paint_lines(window, &plot, &chart, series, hover);
                }
                BoundData::Area { categories, series } => {
                    paint_grid(window, &plot);
                    paint_crosshair(window, &plot, hover, categories.len());
                    paint_areas(window, &plot, &chart, series);
                    paint_lines(window, &plot, &chart, series, hover);
                }
                BoundData::Bar {
                    categories,
                    series,
                    layout,
                } => {
                    paint_grid(window, &plot);
                    paint_bars(window, &plot, &chart, categories.len(), series, *layout, hover);
                }
                BoundData::Scatter { points, .. } => {
                    paint_grid(window, &plot);
                    paint_scatter(window, &plot, &chart, points);
                }
                BoundData::Pie { slices } => paint_pie(window, &plot, slices, hover),
            }
        },
    )
}

fn fill_rect(window: &mut Window, x: f32, y: f32, w: f32, h: f32, color: Rgba, radius: f32) {
    window.paint_quad(quad(
        Bounds {
            origin: point(px(x), px(y)),
            size: size(px(w), px(h)),
        },
        px(radius),
        color,
        px(0.),
        color,
        BorderStyle::default(),
    ));
}

fn stroke_segment(window: &mut Window, from: (f32, f32), to: (f32, f32), color: u32) {
    let mut builder = PathBuilder::stroke(px(1.));
    builder.move_to(point(px(from.0), px(from.1)));
    builder.line_to(point(px(to.0), px(to.1)));
    if let Ok(path) = builder.build() {
        window.paint_path(path, rgb(color));
    }
}

fn paint_grid(window: &mut Window, plot: &Plot) {
    for frac in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let y = (plot.y + plot.height * frac).min(plot.y + plot.height - 1.0);
        stroke_segment(window, (plot.x, y), (plot.x + plot.width, y), GRID_COLOR);
    }
}

fn paint_crosshair(window: &mut Window, plot: &Plot, hover: Option<usize>, count: usize) {
    if let Some(idx) = hover.filter(|idx| *idx < count) {
        let x = plot.category_x(idx, count);
        stroke_segment(window, (x, plot.y), (x, plot.y + plot.height), CROSSHAIR_COLOR);
    }
}

/// Contiguous runs of present values as `(x, y)` points; gaps split runs.
fn runs(plot: &Plot, series: &BoundSeries, range: (f64, f64)) -> Vec<Vec<(f32, f32)>> {
    let count = series.values.len();
    let mut out: Vec<Vec<(f32, f32)>> = Vec::new();
    let mut current = Vec::new();
    for (idx, value) in series.values.iter().enumerate() {
        match value {
            Some(v) => current.push((plot.category_x(idx, count), plot.value_y(*v, range))),
            None if !current.is_empty() => out.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

fn paint_lines(
    window: &mut Window,
    plot: &Plot,
    chart: &BoundChart,
    series: &[BoundSeries],
    hover: Option<usize>,
) {
    for s in series {
        let range = chart.value_range(s.spec.axis);
        let color = s.spec.color.hex();
        for run in runs(plot, s, range) {
            if run.len() > 1 {
                let mut builder = PathBuilder::stroke(px(LINE_WIDTH));
                builder.move_to(point(px(run[0].0), px(run[0].1)));
                for &(x, y) in &run[1..] {
                    builder.line_to(point(px(x), px(y)));
                }
                if let Ok(path) = builder.build() {
                    window.paint_path(path, rgb(color));
                }
            }
        }
        for (idx, value) in s.values.iter().enumerate() {
            let Some(v) = value else { continue };
            let r = if hover == Some(idx) { DOT_RADIUS * 2.0 } else { DOT_RADIUS };
            let x = plot.category_x(idx, s.values.len());
            let y = plot.value_y(*v, range);
            fill_rect(window, x - r, y - r, r * 2.0, r * 2.0, rgb(color), r);
        }
    }
}

fn paint_areas(window: &mut Window, plot: &Plot, chart: &BoundChart, series: &[BoundSeries]) {
    for s in series {
        let range = chart.value_range(s.spec.axis);
        let baseline = plot.value_y(range.0.max(0.0), range);
        for run in runs(plot, s, range) {
            let (Some(first), Some(last)) = (run.first(), run.last()) else {
                continue;
            };
            let mut builder = PathBuilder::fill();
            builder.move_to(point(px(first.0), px(baseline)));
            for &(x, y) in &run {
                builder.line_to(point(px(x), px(y)));
            }
            builder.line_to(point(px(last.0), px(baseline)));
            builder.close();
            if let Ok(path) = builder.build() {
                window.paint_path(
                    path,
                    linear_gradient(
                        180.,
                        linear_color_stop(rgba(s.spec.color.with_alpha(0xcc)), 0.05),
                        linear_color_stop(rgba(s.spec.color.with_alpha(0x10)), 0.95),
                    ),
                );
            }
        }
    }
}

fn paint_bars(
    window: &mut Window,
    plot: &Plot,
    chart: &BoundChart,
    count: usize,
    series: &[BoundSeries],
    layout: BarLayout,
    hover: Option<usize>,
) {
    if count == 0 || series.is_empty() {
        return;
    }
    let per_group = series.len() as f32;
    match layout {
        BarLayout::Vertical => {
            let band = plot.width / count as f32;
            let group = band * BAR_GROUP_FILL;
            let bar = group / per_group;
            for idx in 0..count {
                let left = plot.x + idx as f32 * band;
                if hover == Some(idx) {
                    fill_rect(window, left, plot.y, band, plot.height, rgba(BAND_HIGHLIGHT), 0.);
                }
                for (slot, s) in series.iter().enumerate() {
                    let Some(v) = s.values.get(idx).copied().flatten() else {
                        continue;
                    };
                    let range = chart.value_range(s.spec.axis);
                    let (top, base) = (plot.value_y(v, range), plot.value_y(0.0, range));
                    let x = left + (band - group) / 2.0 + slot as f32 * bar;
                    let y = top.min(base);
                    let h = (top - base).abs().max(1.0);
                    fill_rect(window, x, y, (bar - 2.0).max(1.0), h, rgb(s.spec.color.hex()), 4.);
                }
            }
        }
        BarLayout::Horizontal => {
            let band = plot.height / count as f32;
            let group = band * BAR_GROUP_FILL;
            let bar = group / per_group;
            let range = chart.value_range(AxisSide::Left);
            let base = plot.value_x(0.0, range);
            for idx in 0..count {
                let top = plot.y + idx as f32 * band;
                if hover == Some(idx) {
                    fill_rect(window, plot.x, top, plot.width, band, rgba(BAND_HIGHLIGHT), 0.);
                }
                for (slot, s) in series.iter().enumerate() {
                    let Some(v) = s.values.get(idx).copied().flatten() else {
                        continue;
                    };
                    let end = plot.value_x(v, range);
                    let y = top + (band - group) / 2.0 + slot as f32 * bar;
                    let w = (end - base).abs().max(1.0);
                    fill_rect(
                        window,
                        base.min(end),
                        y,
                        w,
                        (bar - 2.0).max(1.0),
                        rgb(s.spec.color.hex()),
                        4.,
                    );
                }
            }
        }
    }
}

fn paint_scatter(window: &mut Window, plot: &Plot, chart: &BoundChart, points: &[ScatterPoint]) {
    let Some(x_range) = chart.x_range() else {
        return;
    };
    let y_range = chart.value_range(AxisSide::Left);
    // Highlighted points last so they sit on top.
    let ordered = points
        .iter()
        .filter(|p| !p.highlighted)
        .chain(points.iter().filter(|p| p.highlighted));
    for p in ordered {
        let (x, y) = scatter_position(plot, p, x_range, y_range);
        let r = p.radius;
        fill_rect(window, x - r, y - r, r * 2.0, r * 2.0, rgb(p.color.hex()), r);
    }
}

fn paint_pie(window: &mut Window, plot: &Plot, slices: &[PieSlice], hover: Option<usize>) {
    let (cx, cy, radius) = plot.pie_geometry();
    for (idx, slice) in slices.iter().enumerate() {
        if slice.sweep_angle <= 0.0 {
            continue;
        }
        let r = if hover == Some(idx) {
            radius + PIE_HOVER_OFFSET
        } else {
            radius
        };
        let steps = (slice.sweep_angle / PIE_STEP_RADIANS).ceil().max(1.0) as usize;
        let mut builder = PathBuilder::fill();
        builder.move_to(point(px(cx), px(cy)));
        for step in 0..=steps {
            let angle = slice.start_angle + slice.sweep_angle * step as f64 / steps as f64;
            let x = cx + r * angle.cos() as f32;
            let y = cy + r * angle.sin() as f32;
            builder.line_to(point(px(x), px(y)));
        }
        builder.close();
        if let Ok(path) = builder.build() {
            window.paint_path(path, rgb(slice.color.hex()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viz_core::{TabId, bind_tab};

    fn plot() -> Plot {
        Plot {
            x: 100.0,
            y: 50.0,
            width: 700.0,
            height: 300.0,
        }
    }

    #[test]
    fn categories_split_the_plot_into_equal_bands() {
        let plot = plot();
        assert_eq!(plot.category_x(0, 7), 150.0);
        assert_eq!(plot.category_at(100.0, 7), Some(0));
        assert_eq!(plot.category_at(799.0, 7), Some(6));
        assert_eq!(plot.category_at(800.0, 7), None);
        assert_eq!(plot.category_at(99.0, 7), None);
        assert_eq!(plot.category_at(300.0, 0), None);
        assert_eq!(plot.row_at(60.0, 1), Some(0));
    }

    #[test]
    fn values_map_top_down() {
        let plot = plot();
        assert_eq!(plot.value_y(0.0, (0.0, 100.0)), 350.0);
        assert_eq!(plot.value_y(100.0, (0.0, 100.0)), 50.0);
        assert_eq!(plot.value_y(500.0, (0.0, 100.0)), 50.0);
        assert_eq!(plot.value_x(50.0, (0.0, 100.0)), 450.0);
        assert_eq!(plot.value_y(3.0, (3.0, 3.0)), 200.0);
    }

    #[test]
    fn line_hit_test_selects_the_category_band() {
        let charts = bind_tab(TabId::TechTrends, None);
        let trend = &charts[0];
        let plot = plot();
        assert_eq!(hit_test(trend, &plot, 150.0, 200.0), Some(0));
        assert_eq!(hit_test(trend, &plot, 790.0, 200.0), Some(6));
        assert_eq!(trend.label_at(6), Some("2024"));
        assert_eq!(hit_test(trend, &plot, 150.0, 10.0), None);
    }

    #[test]
    fn scatter_hit_test_finds_the_point_under_the_pointer() {
        let charts = bind_tab(TabId::GlobalImpact, None);
        let scatter = &charts[0];
        let plot = plot();
        let BoundData::Scatter { points, .. } = &scatter.data else {
            panic!("expected scatter data");
        };
        let asia = points.iter().position(|p| p.label == "Asia").unwrap();
        let x_range = scatter.x_range().unwrap();
        let y_range = scatter.value_range(AxisSide::Left);
        let (x, y) = scatter_position(&plot, &points[asia], x_range, y_range);
        assert_eq!(hit_test(scatter, &plot, x + 2.0, y - 2.0), Some(asia));
    }

    #[test]
    fn pie_hit_test_follows_slice_angles() {
        let charts = bind_tab(TabId::Overview, None);
        let pie = &charts[0];
        let plot = plot();
        let (cx, cy, radius) = plot.pie_geometry();
        // Just below three o'clock lies inside the first slice.
        assert_eq!(hit_test(pie, &plot, cx + radius / 2.0, cy + 1.0), Some(0));
        assert_eq!(hit_test(pie, &plot, cx + radius * 3.0, cy), None);
        let BoundData::Pie { slices } = &pie.data else {
            panic!("expected pie data");
        };
        let last = slices.len() - 1;
        assert_eq!(slice_at(slices, &plot, cx + radius / 2.0, cy - 1.0), Some(last));
    }
}
