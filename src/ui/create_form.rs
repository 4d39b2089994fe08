use egui::{Color32, RichText, Ui};
use egui_phosphor::regular as icons;

use crate::model::{Area, NewRecord};
use crate::session::Action;
use crate::ui::{section_header, theme};

/// Render the "add project" form. Returns a `Create` action on submit.
pub fn show_create_form(form: &mut NewRecord, ui: &mut Ui) -> Option<Action> {
    let mut action = None;
    section_header(ui, icons::PLUS_CIRCLE, "Add a new project or activity");

    egui::Frame::none()
        .fill(theme::BG_DARK)
        .rounding(egui::Rounding::same(6.0))
        .inner_margin(egui::Margin::same(10.0))
        .stroke(egui::Stroke::new(1.0, theme::BORDER_SUBTLE))
        .show(ui, |ui| {
            egui::Grid::new("create_form_grid")
                .num_columns(2)
                .striped(false)
                .spacing([12.0, 8.0])
                .min_col_width(theme::FORM_LABEL_WIDTH)
                .show(ui, |ui| {
                    label(ui, "Project or activity name");
                    ui.add_sized(
                        [360.0, 24.0],
                        egui::TextEdit::singleline(&mut form.name).hint_text("Name..."),
                    );
                    ui.end_row();

                    label(ui, "Responsible area");
                    egui::ComboBox::from_id_salt("create_area")
                        .selected_text(form.area.label())
                        .width(360.0)
                        .show_ui(ui, |ui| {
                            for area in Area::all() {
                                ui.selectable_value(&mut form.area, *area, area.label());
                            }
                        });
                    ui.end_row();

                    label(ui, "Owner");
                    ui.add_sized(
                        [360.0, 24.0],
                        egui::TextEdit::singleline(&mut form.owner).hint_text("Person in charge..."),
                    );
                    ui.end_row();

                    label(ui, "Start date");
                    ui.add(egui_extras::DatePickerButton::new(&mut form.start).id_salt("create_start"));
                    ui.end_row();

                    label(ui, "Estimated end date");
                    ui.add(egui_extras::DatePickerButton::new(&mut form.end).id_salt("create_end"));
                    ui.end_row();

                    label(ui, "Progress (%)");
                    ui.add(egui::Slider::new(&mut form.progress, 0..=100));
                    ui.end_row();

                    label(ui, "Notes");
                    ui.add_sized(
                        [360.0, 60.0],
                        egui::TextEdit::multiline(&mut form.notes).hint_text("Comments or observations..."),
                    );
                    ui.end_row();
                });

            ui.add_space(6.0);
            let submit = egui::Button::new(
                RichText::new(format!("{}  Add project", icons::PLUS)).color(Color32::WHITE),
            )
            .fill(theme::ACCENT)
            .rounding(egui::Rounding::same(4.0));
            if ui.add_sized([140.0, 28.0], submit).clicked() {
                action = Some(Action::Create(form.clone()));
            }
        });

    action
}

fn label(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).color(theme::TEXT_SECONDARY));
}
