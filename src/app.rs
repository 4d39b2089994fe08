use std::path::Path;

use egui::RichText;
use egui_phosphor::regular as icons;

use crate::io::CsvStore;
use crate::model::Table;
use crate::session::{Action, Notice, Session};
use crate::tracker::Tracker;
use crate::ui;
use crate::view::RenderModel;

/// Whether the backing file could be read this session.
pub enum LoadState {
    Ready(Tracker),
    Failed { error: String },
}

/// Main application state.
pub struct TrackerApp {
    store: CsvStore,
    pub state: LoadState,
    pub session: Session,

    // Dialog state
    pub show_about: bool,

    // Status message
    pub status_message: String,
}

impl TrackerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, store: CsvStore) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let mut app = Self {
            state: LoadState::Failed { error: String::new() },
            store,
            session: Session::new(chrono::Local::now().date_naive()),
            show_about: false,
            status_message: "Ready".to_string(),
        };
        app.open();
        app
    }

    pub fn data_path(&self) -> &Path {
        self.store.path()
    }

    fn open(&mut self) {
        match Tracker::open(self.store.clone()) {
            Ok(tracker) => {
                self.status_message = format!("Loaded {} projects", tracker.table().len());
                self.state = LoadState::Ready(tracker);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load project table");
                self.status_message = "Load failed".to_string();
                self.state = LoadState::Failed { error: e.to_string() };
            }
        }
    }

    // --- File operations ---

    /// Re-read the backing file, or retry a failed load.
    pub fn reload(&mut self) {
        let LoadState::Ready(tracker) = &mut self.state else {
            self.open();
            return;
        };
        match tracker.reload() {
            Ok(()) => {
                self.status_message = format!("Reloaded {} projects", tracker.table().len());
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to reload project table");
                self.status_message = "Reload failed".to_string();
                self.state = LoadState::Failed { error: e.to_string() };
            }
        }
    }

    pub fn export_csv(&mut self) {
        let LoadState::Ready(tracker) = &self.state else {
            return;
        };
        if tracker.table().is_empty() {
            self.status_message = "Nothing to export: no projects registered".to_string();
            return;
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name("proyectos-export.csv")
            .save_file()
        {
            match crate::io::write_table(tracker.table().records(), &path) {
                Ok(count) => {
                    self.status_message = format!("Exported {} projects to CSV", count);
                }
                Err(e) => {
                    tracing::error!(error = %e, "CSV export failed");
                    self.status_message = format!("CSV export failed: {}", e);
                }
            }
        }
    }

    pub fn open_data_folder(&mut self) {
        let dir = self
            .store
            .path()
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();
        if let Err(e) = open::that(&dir) {
            tracing::warn!(dir = %dir.display(), error = %e, "could not open data folder");
            self.status_message = format!("Could not open {}: {}", dir.display(), e);
        }
    }

    // --- Record operations ---

    fn dispatch(&mut self, action: Action) {
        let LoadState::Ready(tracker) = &mut self.state else {
            return;
        };
        match tracker.dispatch(&mut self.session, action) {
            Ok(transition) if transition.mutated => {
                self.status_message = format!("Saved {} projects", tracker.table().len());
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!(error = %e, "failed to persist project table");
                self.status_message = "Save failed".to_string();
                self.session.notice = Some(Notice::error(format!("Could not save changes: {}", e)));
            }
        }
    }
}

/// Render every section of the tracker page and collect the user's action.
fn show_tracker_page(table: &Table, session: &mut Session, ui: &mut egui::Ui) -> Option<Action> {
    let model = RenderModel::build(table, &session.query);
    let mut action = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(6.0);
            ui.heading(
                RichText::new(format!("{}  Project Tracker · CONALEP Hidalgo", icons::CHART_BAR))
                    .strong(),
            );
            ui.label(
                RichText::new(
                    "Register, look up and update the status of the projects and activities \
                     of the General Directorate.",
                )
                .color(ui::theme::TEXT_SECONDARY),
            );

            if let Some(notice) = &session.notice {
                ui.add_space(6.0);
                if ui::dialogs::show_notice(notice, ui) {
                    action = Some(Action::DismissNotice);
                }
            }

            if let Some(submitted) = ui::create_form::show_create_form(&mut session.create, ui) {
                action = Some(submitted);
            }
            ui.add_space(4.0);
            ui.separator();

            if let Some(requested) = ui::search_panel::show_search_panel(session, &model.search, ui) {
                action = Some(requested);
            }
            ui.add_space(4.0);
            ui.separator();

            ui::section_header(ui, icons::TABLE, "Registered projects");
            ui.label(RichText::new(format!("Total projects: {}", model.metrics.total)).strong());
            ui.push_id("listing", |ui| {
                ui::record_table::show_record_table(model.records, 420.0, ui);
            });
            ui.add_space(4.0);
            ui.separator();

            ui::metrics_panel::show_metrics(&model.metrics, ui);

            ui::section_header(ui, icons::CHART_BAR, "Projects by area");
            ui::charts::show_area_chart(&model.by_area, ui);

            ui::section_header(ui, icons::CHART_PIE, "Projects by status");
            ui::charts::show_status_chart(&model.by_status, ui);
            ui.add_space(16.0);
        });

    action
}

impl eframe::App for TrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        // Handle keyboard shortcuts outside closures to avoid borrow issues
        if ctx.input(|i| i.key_pressed(egui::Key::F5)) {
            self.reload();
        }

        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        let record_count = match &self.state {
            LoadState::Ready(tracker) => tracker.table().len(),
            LoadState::Failed { .. } => 0,
        };
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::STATUS_BAR_BG)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        RichText::new(&self.status_message)
                            .size(11.0)
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("Projects: {}", record_count))
                                .size(10.5)
                                .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Central panel: the tracker page, or the load error
        let mut action = None;
        let mut retry = false;
        egui::CentralPanel::default().show(ctx, |ui| match &self.state {
            LoadState::Ready(tracker) => {
                action = show_tracker_page(tracker.table(), &mut self.session, ui);
            }
            LoadState::Failed { error } => {
                retry = ui::dialogs::show_load_error(self.store.path(), error, ui);
            }
        });

        if let Some(action) = action {
            self.dispatch(action);
        }
        if retry {
            self.reload();
        }

        // Dialogs
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }
}
