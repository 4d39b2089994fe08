use egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::model::ProjectRecord;
use crate::ui::theme;

const HEADERS: [&str; 9] = [
    "ID",
    "Project",
    "Area",
    "Owner",
    "Status",
    "Progress",
    "Start",
    "Est. end",
    "Notes",
];

/// Render records as a scrollable, striped table.
///
/// Callers that show more than one table per frame wrap each in `ui.push_id`.
pub fn show_record_table<'a>(
    records: impl IntoIterator<Item = &'a ProjectRecord>,
    max_height: f32,
    ui: &mut Ui,
) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(80.0))
        .column(Column::initial(220.0).clip(true))
        .column(Column::initial(160.0).clip(true))
        .column(Column::initial(120.0).clip(true))
        .column(Column::auto().at_least(90.0))
        .column(Column::initial(110.0))
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder().clip(true))
        .max_scroll_height(max_height)
        .header(theme::ROW_HEIGHT, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.label(RichText::new(title).size(11.0).color(theme::TEXT_DIM).strong());
                });
            }
        })
        .body(|mut body| {
            for record in records {
                body.row(theme::ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.label(RichText::new(record.id.as_str()).monospace());
                    });
                    row.col(|ui| {
                        ui.label(&record.name);
                    });
                    row.col(|ui| {
                        ui.label(record.area.label());
                    });
                    row.col(|ui| {
                        ui.label(&record.owner);
                    });
                    row.col(|ui| {
                        ui.label(
                            RichText::new(record.status.label()).color(theme::status_color(record.status)),
                        );
                    });
                    row.col(|ui| {
                        let bar = egui::ProgressBar::new(f32::from(record.progress) / 100.0)
                            .desired_width(100.0)
                            .fill(theme::status_color(record.status))
                            .text(format!("{}%", record.progress));
                        ui.add(bar);
                    });
                    row.col(|ui| {
                        ui.label(
                            RichText::new(record.start.format("%Y-%m-%d").to_string())
                                .color(theme::TEXT_SECONDARY),
                        );
                    });
                    row.col(|ui| {
                        ui.label(
                            RichText::new(record.end.format("%Y-%m-%d").to_string())
                                .color(theme::TEXT_SECONDARY),
                        );
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(&record.notes).color(theme::TEXT_SECONDARY));
                    });
                });
            }
        });
}
