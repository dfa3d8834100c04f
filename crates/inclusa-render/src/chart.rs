//! SVG chart geometry for the dashboard.
//!
//! Charts are computed here as plain coordinates and path data; the
//! dashboard template only draws them. Coordinates are rounded to one
//! decimal to keep the markup small.

use std::f64::consts::{FRAC_PI_2, PI};

use inclusa_dashboard::aggregate::{CategoryCount, DailyCount};
use serde::Serialize;

const PALETTE: [&str; 9] = [
    "#667eea", "#764ba2", "#4facfe", "#43e97b", "#fa709a", "#fee140", "#30cfd0", "#a8edea",
    "#ff9a9e",
];

pub const PIE_SIZE: f64 = 320.0;

pub const PLOT_WIDTH: f64 = 560.0;
pub const PLOT_HEIGHT: f64 = 280.0;
const MARGIN_LEFT: f64 = 40.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 50.0;
const BAR_FILL: f64 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    pub percent: f64,
    /// Wedge path; empty when the slice is the whole pie.
    pub path: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub size: f64,
    pub center: f64,
    pub radius: f64,
    /// A single category covers the whole pie and is drawn as a circle.
    pub full: bool,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub count: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label_x: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub width: f64,
    pub height: f64,
    pub baseline: f64,
    pub max: usize,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePoint {
    pub label: String,
    pub count: usize,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub width: f64,
    pub height: f64,
    pub baseline: f64,
    pub max: usize,
    /// `points` attribute of the SVG polyline.
    pub polyline: String,
    pub points: Vec<LinePoint>,
}

/// Proportions of each category, clockwise from twelve o'clock.
pub fn pie_chart(counts: &[CategoryCount]) -> PieChart {
    let center = PIE_SIZE / 2.0;
    let radius = center - 10.0;
    let total: usize = counts.iter().map(|c| c.count).sum();
    let full = counts.len() == 1;

    let mut slices = Vec::with_capacity(counts.len());
    let mut start = -FRAC_PI_2;
    for (i, entry) in counts.iter().enumerate() {
        let fraction = if total == 0 {
            0.0
        } else {
            entry.count as f64 / total as f64
        };
        let sweep = fraction * 2.0 * PI;
        let end = start + sweep;
        let path = if full {
            String::new()
        } else {
            let large_arc = u8::from(sweep > PI);
            format!(
                "M {c} {c} L {x1} {y1} A {r} {r} 0 {large_arc} 1 {x2} {y2} Z",
                c = round1(center),
                r = round1(radius),
                x1 = round1(center + radius * start.cos()),
                y1 = round1(center + radius * start.sin()),
                x2 = round1(center + radius * end.cos()),
                y2 = round1(center + radius * end.sin()),
            )
        };
        slices.push(PieSlice {
            label: entry.category.clone(),
            count: entry.count,
            percent: round1(fraction * 100.0),
            path,
            color: color(i),
        });
        start = end;
    }

    PieChart {
        size: PIE_SIZE,
        center,
        radius,
        full,
        slices,
    }
}

/// One bar per category, scaled to the largest count.
pub fn bar_chart(counts: &[CategoryCount]) -> BarChart {
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0);
    let (plot_width, plot_height) = plot_area();
    let slot = if counts.is_empty() {
        0.0
    } else {
        plot_width / counts.len() as f64
    };

    let bars = counts
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let height = scale(entry.count, max, plot_height);
            let x = MARGIN_LEFT + i as f64 * slot + slot * (1.0 - BAR_FILL) / 2.0;
            Bar {
                label: entry.category.clone(),
                count: entry.count,
                x: round1(x),
                y: round1(MARGIN_TOP + plot_height - height),
                width: round1(slot * BAR_FILL),
                height: round1(height),
                label_x: round1(MARGIN_LEFT + i as f64 * slot + slot / 2.0),
                color: color(i),
            }
        })
        .collect();

    BarChart {
        width: PLOT_WIDTH,
        height: PLOT_HEIGHT,
        baseline: MARGIN_TOP + plot_height,
        max,
        bars,
    }
}

/// Daily counts joined in date order. Points are evenly spaced.
pub fn line_chart(trend: &[DailyCount]) -> LineChart {
    let max = trend.iter().map(|d| d.count).max().unwrap_or(0);
    let (plot_width, plot_height) = plot_area();
    let step = if trend.len() > 1 {
        plot_width / (trend.len() - 1) as f64
    } else {
        0.0
    };

    let points: Vec<LinePoint> = trend
        .iter()
        .enumerate()
        .map(|(i, day)| {
            let x = if trend.len() == 1 {
                MARGIN_LEFT + plot_width / 2.0
            } else {
                MARGIN_LEFT + i as f64 * step
            };
            LinePoint {
                label: day.date.to_string(),
                count: day.count,
                x: round1(x),
                y: round1(MARGIN_TOP + plot_height - scale(day.count, max, plot_height)),
            }
        })
        .collect();

    let polyline = points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");

    LineChart {
        width: PLOT_WIDTH,
        height: PLOT_HEIGHT,
        baseline: MARGIN_TOP + plot_height,
        max,
        polyline,
        points,
    }
}

fn plot_area() -> (f64, f64) {
    (
        PLOT_WIDTH - MARGIN_LEFT - MARGIN_RIGHT,
        PLOT_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM,
    )
}

fn scale(count: usize, max: usize, extent: f64) -> f64 {
    if max == 0 {
        0.0
    } else {
        count as f64 / max as f64 * extent
    }
}

fn color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
