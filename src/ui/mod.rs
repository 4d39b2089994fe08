pub mod charts;
pub mod create_form;
pub mod dialogs;
pub mod metrics_panel;
pub mod record_table;
pub mod search_panel;
pub mod theme;
pub mod toolbar;

use egui::{RichText, Ui};

/// Icon plus title heading used by every page section.
pub fn section_header(ui: &mut Ui, icon: &str, title: &str) {
    ui.add_space(10.0);
    ui.label(
        RichText::new(format!("{icon}  {title}"))
            .font(theme::font_section())
            .strong()
            .color(theme::TEXT_PRIMARY),
    );
    ui.add_space(4.0);
}
