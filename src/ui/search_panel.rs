use egui::{Color32, RichText, Ui};
use egui_phosphor::regular as icons;

use crate::model::Status;
use crate::session::{Action, Session};
use crate::ui::record_table::show_record_table;
use crate::ui::{section_header, theme};
use crate::view::SearchView;

/// Render search, selection and the edit/delete controls.
pub fn show_search_panel(session: &mut Session, search: &SearchView<'_>, ui: &mut Ui) -> Option<Action> {
    let mut action = None;
    section_header(ui, icons::MAGNIFYING_GLASS, "Find and update an existing project");

    let query_edit = ui.add_sized(
        [ui.available_width().min(480.0), 24.0],
        egui::TextEdit::singleline(&mut session.query).hint_text("Search by project name or ID..."),
    );
    if query_edit.changed() {
        action = Some(Action::Search(session.query.clone()));
    }

    let hits = match search {
        SearchView::Idle => return action,
        SearchView::NotFound => {
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("{}  No projects found with that name or ID.", icons::WARNING))
                    .color(theme::STATUS_PENDING),
            );
            return action;
        }
        SearchView::Matches(hits) => hits,
    };

    ui.add_space(4.0);
    ui.label(RichText::new(format!("Results found: {}", hits.len())).color(theme::TEXT_SECONDARY));
    ui.push_id("search_results", |ui| {
        show_record_table(hits.iter().copied(), 180.0, ui);
    });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("Select a project to edit or delete:").color(theme::TEXT_SECONDARY));
        let current = session
            .selected
            .as_ref()
            .map_or_else(|| "Choose...".to_string(), |id| id.to_string());
        egui::ComboBox::from_id_salt("search_selection")
            .selected_text(current)
            .width(160.0)
            .show_ui(ui, |ui| {
                for record in hits {
                    let is_current = session.selected.as_ref() == Some(&record.id);
                    if ui.selectable_label(is_current, record.id.as_str()).clicked() && !is_current {
                        action = Some(Action::Select(record.id.clone()));
                    }
                }
            });
    });

    let Some(id) = session.selected.clone() else {
        return action;
    };
    let name = hits
        .iter()
        .find(|r| r.id == id)
        .map_or_else(|| id.to_string(), |r| r.name.clone());

    ui.add_space(8.0);
    ui.label(
        RichText::new(format!("{}  Edit project: {}", icons::PENCIL_SIMPLE, name))
            .strong()
            .size(14.0),
    );
    ui.add_space(2.0);

    egui::Frame::none()
        .fill(theme::BG_DARK)
        .rounding(egui::Rounding::same(6.0))
        .inner_margin(egui::Margin::same(10.0))
        .stroke(egui::Stroke::new(1.0, theme::BORDER_SUBTLE))
        .show(ui, |ui| {
            egui::Grid::new("edit_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .min_col_width(theme::FORM_LABEL_WIDTH)
                .show(ui, |ui| {
                    ui.label(RichText::new("Status").color(theme::TEXT_SECONDARY));
                    egui::ComboBox::from_id_salt("edit_status")
                        .selected_text(
                            RichText::new(session.edit.status.label())
                                .color(theme::status_color(session.edit.status)),
                        )
                        .width(200.0)
                        .show_ui(ui, |ui| {
                            for status in Status::all() {
                                ui.selectable_value(&mut session.edit.status, *status, status.label());
                            }
                        });
                    ui.end_row();

                    ui.label(RichText::new("Progress (%)").color(theme::TEXT_SECONDARY));
                    ui.add(egui::Slider::new(&mut session.edit.progress, 0..=100));
                    ui.end_row();

                    ui.label(RichText::new("Notes").color(theme::TEXT_SECONDARY));
                    ui.add_sized([360.0, 60.0], egui::TextEdit::multiline(&mut session.edit.notes));
                    ui.end_row();
                });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let save = egui::Button::new(
                    RichText::new(format!("{}  Save changes", icons::FLOPPY_DISK)).color(Color32::WHITE),
                )
                .fill(theme::ACCENT);
                if ui.add_sized([140.0, 28.0], save).clicked() {
                    action = Some(Action::Update {
                        id: id.clone(),
                        edit: session.edit.clone(),
                    });
                }

                let delete = egui::Button::new(
                    RichText::new(format!("{}  Delete project", icons::TRASH)).color(Color32::WHITE),
                )
                .fill(theme::DANGER);
                if ui.add_sized([140.0, 28.0], delete).clicked() {
                    action = Some(Action::Delete(id.clone()));
                }
            });
        });

    action
}
