use std::f32::consts::{FRAC_PI_2, TAU};

use egui::{Align2, Color32, Pos2, Rect, Rounding, Sense, Shape, Stroke, Ui, Vec2};

use crate::model::{AreaBreakdown, Status, StatusCounts};
use crate::ui::theme;

const AXIS_WIDTH: f32 = 32.0;
const LABEL_BAND: f32 = 38.0;
const TOP_PAD: f32 = 10.0;
/// Longest arc covered by one pie polygon; keeps every piece convex.
const MAX_WEDGE: f32 = FRAC_PI_2;
const ARC_STEP: f32 = 0.04;

/// Colored swatches naming each status.
fn show_legend(ui: &mut Ui) {
    ui.horizontal(|ui| {
        for status in Status::all() {
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
            ui.painter()
                .rect_filled(rect, Rounding::same(2.0), theme::status_color(*status));
            ui.label(egui::RichText::new(status.label()).size(11.0).color(theme::TEXT_SECONDARY));
            ui.add_space(8.0);
        }
    });
}

/// Bars of record count per area, stacked by status.
pub fn show_area_chart(bars: &[AreaBreakdown], ui: &mut Ui) {
    show_legend(ui);

    let size = Vec2::new(ui.available_width(), theme::CHART_HEIGHT);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let canvas = response.rect;
    painter.rect_filled(canvas, Rounding::same(6.0), theme::BG_DARK);

    let plot = Rect::from_min_max(
        Pos2::new(canvas.left() + AXIS_WIDTH, canvas.top() + TOP_PAD),
        Pos2::new(canvas.right() - 8.0, canvas.bottom() - LABEL_BAND),
    );
    let max = bars.iter().map(|b| b.counts.total()).max().unwrap_or(0).max(1);
    let step = tick_step(max);
    let y_for = |count: usize| plot.bottom() - plot.height() * count as f32 / max as f32;

    // Horizontal grid with count labels
    let mut tick = 0;
    while tick <= max {
        let y = y_for(tick);
        painter.line_segment(
            [Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)],
            Stroke::new(0.5, theme::GRID_LINE),
        );
        painter.text(
            Pos2::new(plot.left() - 6.0, y),
            Align2::RIGHT_CENTER,
            tick.to_string(),
            theme::font_axis(),
            theme::TEXT_DIM,
        );
        tick += step;
    }

    if bars.is_empty() {
        return;
    }
    let slot = plot.width() / bars.len() as f32;
    let bar_width = (slot * 0.6).min(60.0);
    let hover = response.hover_pos();
    let mut hovered: Option<(&AreaBreakdown, Status)> = None;

    for (i, bar) in bars.iter().enumerate() {
        let center_x = plot.left() + slot * (i as f32 + 0.5);
        let mut base = 0;
        for status in Status::all() {
            let count = bar.counts.get(*status);
            if count == 0 {
                continue;
            }
            let segment = Rect::from_min_max(
                Pos2::new(center_x - bar_width / 2.0, y_for(base + count)),
                Pos2::new(center_x + bar_width / 2.0, y_for(base)),
            );
            painter.rect_filled(segment, Rounding::same(theme::BAR_ROUNDING), theme::status_color(*status));
            if hover.is_some_and(|p| segment.contains(p)) {
                hovered = Some((bar, *status));
                painter.rect_stroke(segment, Rounding::same(theme::BAR_ROUNDING), Stroke::new(1.5, Color32::WHITE));
            }
            base += count;
        }

        // Area name under the bar, wrapped to the slot
        let galley = painter.layout(
            bar.area.label().to_string(),
            theme::font_small(),
            theme::TEXT_SECONDARY,
            slot - 4.0,
        );
        let pos = Pos2::new(center_x - galley.size().x / 2.0, plot.bottom() + 4.0);
        painter.galley(pos, galley, Color32::TRANSPARENT);
    }

    if let Some((bar, status)) = hovered {
        egui::show_tooltip_at_pointer(ui.ctx(), ui.layer_id(), egui::Id::new("area-chart-tip"), |ui| {
            ui.strong(bar.area.label());
            ui.label(format!("{}: {}", status.label(), bar.counts.get(status)));
            ui.label(format!("Total: {}", bar.counts.total()));
        });
    }
}

/// Pie of record count per status.
pub fn show_status_chart(counts: &StatusCounts, ui: &mut Ui) {
    show_legend(ui);

    let size = Vec2::new(ui.available_width(), theme::CHART_HEIGHT);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let canvas = response.rect;
    painter.rect_filled(canvas, Rounding::same(6.0), theme::BG_DARK);

    let center = canvas.center();
    let radius = (canvas.height().min(canvas.width()) / 2.0 - 16.0).max(10.0);
    let total = counts.total();
    if total == 0 {
        painter.text(center, Align2::CENTER_CENTER, "No data", theme::font_axis(), theme::TEXT_DIM);
        return;
    }

    let start = -FRAC_PI_2;
    let hovered = response.hover_pos().and_then(|p| {
        let offset = p - center;
        if offset.length() > radius {
            return None;
        }
        let angle = (offset.y.atan2(offset.x) - start).rem_euclid(TAU);
        slice_at(counts, angle)
    });

    let mut from = start;
    for status in Status::all() {
        let count = counts.get(*status);
        if count == 0 {
            continue;
        }
        let sweep = TAU * count as f32 / total as f32;
        draw_slice(&painter, center, radius, from, from + sweep, theme::status_color(*status));
        if hovered == Some(*status) {
            draw_slice(&painter, center, radius + 4.0, from, from + sweep, Color32::from_white_alpha(30));
        }
        from += sweep;
    }

    if let Some(status) = hovered {
        let count = counts.get(status);
        egui::show_tooltip_at_pointer(ui.ctx(), ui.layer_id(), egui::Id::new("status-chart-tip"), |ui| {
            ui.strong(status.label());
            ui.label(format!("{count} of {total} projects"));
        });
    }
}

/// The status whose slice covers `angle`, measured clockwise from the top.
fn slice_at(counts: &StatusCounts, angle: f32) -> Option<Status> {
    let total = counts.total() as f32;
    let mut upto = 0.0;
    for status in Status::all() {
        upto += TAU * counts.get(*status) as f32 / total;
        if angle < upto {
            return Some(*status);
        }
    }
    None
}

fn draw_slice(painter: &egui::Painter, center: Pos2, radius: f32, from: f32, to: f32, color: Color32) {
    let mut a = from;
    while a < to {
        let b = (a + MAX_WEDGE).min(to);
        let mut points = vec![center];
        let mut t = a;
        while t < b {
            points.push(center + Vec2::angled(t) * radius);
            t += ARC_STEP;
        }
        points.push(center + Vec2::angled(b) * radius);
        painter.add(Shape::convex_polygon(points, color, Stroke::NONE));
        a = b;
    }
}

/// Grid spacing giving at most about five lines.
fn tick_step(max: usize) -> usize {
    match max {
        0..=5 => 1,
        6..=10 => 2,
        11..=25 => 5,
        _ => (max / 5).max(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_lookup_follows_status_order() {
        let counts = StatusCounts {
            pending: 1,
            in_progress: 1,
            completed: 2,
        };
        assert_eq!(slice_at(&counts, 0.1), Some(Status::Pending));
        assert_eq!(slice_at(&counts, TAU * 0.3), Some(Status::InProgress));
        assert_eq!(slice_at(&counts, TAU * 0.9), Some(Status::Completed));
    }

    #[test]
    fn empty_slices_are_skipped() {
        let counts = StatusCounts {
            pending: 0,
            in_progress: 0,
            completed: 3,
        };
        assert_eq!(slice_at(&counts, 0.0), Some(Status::Completed));
    }

    #[test]
    fn tick_step_keeps_grid_sparse() {
        assert_eq!(tick_step(1), 1);
        assert_eq!(tick_step(8), 2);
        assert_eq!(tick_step(20), 5);
        assert_eq!(tick_step(50), 10);
    }
}
