use std::path::Path;

use crate::app::TrackerApp;
use crate::session::Notice;
use crate::ui::theme;
use egui::{Color32, Context, RichText, Ui, Window};
use egui_phosphor::regular as icons;

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut TrackerApp, ctx: &Context) {
    let mut should_close = false;
    Window::new("About")
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([320.0, 180.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(RichText::new("Project Tracker").strong());
                ui.add_space(2.0);
                ui.label(RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION"))).color(theme::TEXT_SECONDARY));
                ui.add_space(10.0);
                ui.label("Register, search and update the projects");
                ui.label("and activities of each department.");
                ui.add_space(14.0);
                if ui.add_sized([100.0, 28.0], egui::Button::new("Close")).clicked() {
                    should_close = true;
                }
            });
        });
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_about = false;
    }
}

/// Banner for the latest notice. Returns true when the user dismisses it.
pub fn show_notice(notice: &Notice, ui: &mut Ui) -> bool {
    let color = theme::notice_color(notice.kind);
    let mut dismissed = false;
    egui::Frame::none()
        .fill(color.gamma_multiply(0.18))
        .stroke(egui::Stroke::new(1.0, color))
        .rounding(egui::Rounding::same(4.0))
        .inner_margin(egui::Margin::symmetric(10.0, 6.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&notice.message).color(theme::TEXT_PRIMARY));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let close = ui.add(
                        egui::Button::new(RichText::new(icons::X).size(11.0).color(theme::TEXT_DIM)).frame(false),
                    );
                    if close.on_hover_text("Dismiss").clicked() {
                        dismissed = true;
                    }
                });
            });
        });
    dismissed
}

/// Full-page error shown when the data file cannot be read. Returns true on Retry.
pub fn show_load_error(path: &Path, error: &str, ui: &mut Ui) -> bool {
    let mut retry = false;
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(
            RichText::new(format!("{}  The project file could not be loaded", icons::WARNING_OCTAGON))
                .size(18.0)
                .strong()
                .color(theme::DANGER),
        );
        ui.add_space(8.0);
        ui.label(RichText::new(path.display().to_string()).monospace().color(theme::TEXT_SECONDARY));
        ui.add_space(8.0);
        egui::Frame::dark_canvas(ui.style()).show(ui, |ui| {
            ui.set_max_width(640.0);
            ui.label(RichText::new(error).monospace().size(11.0));
        });
        ui.add_space(12.0);
        ui.label(RichText::new("Fix or move the file, then retry.").color(theme::TEXT_DIM));
        ui.add_space(6.0);
        let btn = egui::Button::new(
            RichText::new(format!("{}  Retry", icons::ARROW_CLOCKWISE)).color(Color32::WHITE),
        )
        .fill(theme::ACCENT);
        if ui.add_sized([120.0, 28.0], btn).clicked() {
            retry = true;
        }
    });
    retry
}
