use egui::{RichText, Ui};
use egui_phosphor::regular as icons;

use crate::model::Metrics;
use crate::ui::{section_header, theme};

/// Render the counters row.
pub fn show_metrics(metrics: &Metrics, ui: &mut Ui) {
    section_header(ui, icons::CHART_LINE_UP, "General statistics");

    let average = metrics
        .average_progress
        .map_or_else(|| "no data".to_string(), |avg| avg.to_string());

    ui.columns(3, |cols| {
        metric_card(&mut cols[0], "Completed projects", &metrics.completed.to_string());
        metric_card(&mut cols[1], "In progress", &metrics.in_progress.to_string());
        metric_card(&mut cols[2], "Average progress (%)", &average);
    });
}

fn metric_card(ui: &mut Ui, title: &str, value: &str) {
    egui::Frame::none()
        .fill(theme::BG_HEADER)
        .rounding(egui::Rounding::same(6.0))
        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new(title).size(11.0).color(theme::TEXT_SECONDARY));
            ui.label(RichText::new(value).font(theme::font_metric()).strong());
        });
}
