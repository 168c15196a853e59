use crate::image_loader::{Histogram, BINS};
use egui::{self, epaint::TextShape, Align2, Color32, FontId, Pos2, Rect, Stroke, Vec2};
use std::f32::consts::FRAC_PI_2;

const CHART_BG: Color32 = Color32::WHITE;
const AXIS_COLOR: Color32 = Color32::from_rgb(40, 40, 40);
const GRID_COLOR: Color32 = Color32::from_rgb(225, 225, 225);
const TEXT_COLOR: Color32 = Color32::from_rgb(30, 30, 30);

// Space around the plot area for title, labels and ticks
const MARGIN_LEFT: f32 = 72.0;
const MARGIN_RIGHT: f32 = 16.0;
const MARGIN_TOP: f32 = 30.0;
const MARGIN_BOTTOM: f32 = 44.0;

const X_TICK_STEP: usize = 50;
const Y_TICK_TARGET: u64 = 5;

pub struct ChartStyle<'a> {
    pub title: &'a str,
    pub line_color: Color32,
}

/// Polyline vertices for the histogram curve. The x-axis spans [0, 256) and
/// the y-axis spans [0, `y_max`].
pub fn curve_points(counts: &[u64], y_max: u64, plot: Rect) -> Vec<Pos2> {
    let scale = if y_max == 0 { 0.0 } else { plot.height() / y_max as f32 };
    counts
        .iter()
        .enumerate()
        .map(|(level, &count)| {
            let x = plot.left() + level as f32 / BINS as f32 * plot.width();
            let y = plot.bottom() - count.min(y_max) as f32 * scale;
            egui::pos2(x, y)
        })
        .collect()
}

/// Step between y-axis ticks: 1, 2 or 5 times a power of ten.
pub fn tick_step(max: u64, target: u64) -> u64 {
    let raw = max.div_ceil(target.max(1)).max(1);
    let mut magnitude = 1u64;
    while magnitude.saturating_mul(10) <= raw {
        magnitude *= 10;
    }
    [1, 2, 5, 10]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|&step| step >= raw)
        .unwrap_or(10 * magnitude)
}

/// Tick values from 0 up to and including the last multiple of the step below `max`.
pub fn y_ticks(max: u64) -> Vec<u64> {
    let step = tick_step(max, Y_TICK_TARGET);
    (0..=max / step).map(|i| i * step).collect()
}

pub fn render_histogram_chart(ui: &mut egui::Ui, histogram: &Histogram, style: &ChartStyle<'_>) {
    let size = Vec2::new(ui.available_width(), ui.available_height());
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = response.rect;

    painter.rect_filled(rect, 0.0, CHART_BG);

    let plot = Rect::from_min_max(
        egui::pos2(rect.left() + MARGIN_LEFT, rect.top() + MARGIN_TOP),
        egui::pos2(rect.right() - MARGIN_RIGHT, rect.bottom() - MARGIN_BOTTOM),
    );
    if plot.width() <= 0.0 || plot.height() <= 0.0 {
        return;
    }

    let font = FontId::proportional(12.0);
    let y_max = histogram.max_count().max(1);

    // Y ticks and horizontal grid
    for value in y_ticks(y_max) {
        let y = plot.bottom() - value as f32 / y_max as f32 * plot.height();
        painter.line_segment(
            [egui::pos2(plot.left(), y), egui::pos2(plot.right(), y)],
            Stroke::new(1.0, GRID_COLOR),
        );
        painter.text(
            egui::pos2(plot.left() - 6.0, y),
            Align2::RIGHT_CENTER,
            value.to_string(),
            font.clone(),
            TEXT_COLOR,
        );
    }

    // X ticks
    for level in (0..=BINS).step_by(X_TICK_STEP) {
        let x = plot.left() + level as f32 / BINS as f32 * plot.width();
        painter.line_segment(
            [egui::pos2(x, plot.bottom()), egui::pos2(x, plot.bottom() + 4.0)],
            Stroke::new(1.0, AXIS_COLOR),
        );
        painter.text(
            egui::pos2(x, plot.bottom() + 6.0),
            Align2::CENTER_TOP,
            level.to_string(),
            font.clone(),
            TEXT_COLOR,
        );
    }

    painter.line(
        curve_points(histogram.counts(), y_max, plot),
        Stroke::new(1.5, style.line_color),
    );

    // Axes
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], Stroke::new(1.0, AXIS_COLOR));
    painter.line_segment([plot.left_bottom(), plot.left_top()], Stroke::new(1.0, AXIS_COLOR));

    // Title and axis labels
    painter.text(
        egui::pos2(plot.center().x, rect.top() + 6.0),
        Align2::CENTER_TOP,
        style.title,
        FontId::proportional(15.0),
        TEXT_COLOR,
    );
    painter.text(
        egui::pos2(plot.center().x, rect.bottom() - 4.0),
        Align2::CENTER_BOTTOM,
        "Bins",
        FontId::proportional(13.0),
        TEXT_COLOR,
    );

    let galley = painter.layout_no_wrap("Number of Pixels".to_string(), FontId::proportional(13.0), TEXT_COLOR);
    let label_pos = egui::pos2(rect.left() + 6.0, plot.center().y + galley.size().x / 2.0);
    painter.add(TextShape::new(label_pos, galley, TEXT_COLOR).with_angle(-FRAC_PI_2));
}
