use anyhow::Result;
use eframe::egui;

use crate::banner::BannerVisibility;
use crate::bootstrap::{OrgViewer, StatusSeverity};
use crate::view::ViewMode;

const APP_TITLE: &str = "orgview";
const MAINTENANCE_NOTICE: &str =
    "Scheduled maintenance this weekend may delay organization data refreshes.";

/// Native host surface for the viewer core. All mutation goes through the
/// core's public operations; the shell only wires widgets to them.
pub fn run_shell(viewer: OrgViewer) -> Result<()> {
    eframe::run_native(
        APP_TITLE,
        eframe::NativeOptions::default(),
        Box::new(move |_cc| Ok(Box::new(ShellApp::new(viewer)))),
    )
    .map_err(|error| anyhow::anyhow!("viewer shell exited with error: {error}"))
}

struct ShellApp {
    viewer: OrgViewer,
    selected_role: Option<String>,
}

impl ShellApp {
    fn new(viewer: OrgViewer) -> Self {
        Self {
            viewer,
            selected_role: None,
        }
    }

    fn render_banner(&mut self, ctx: &egui::Context) {
        if self.viewer.banner.visibility() != BannerVisibility::Visible {
            return;
        }

        egui::TopBottomPanel::top("viewer_banner").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    egui::Color32::from_rgb(140, 84, 0),
                    self.viewer.banner.message_html(),
                );
                if ui.button("Dismiss").clicked() {
                    self.viewer.banner.handle_close_click();
                }
            });
        });
    }

    fn render_status(&self, ctx: &egui::Context) {
        if self.viewer.status.is_clear() {
            return;
        }

        egui::TopBottomPanel::bottom("viewer_status").show(ctx, |ui| {
            let color = match self.viewer.status.severity() {
                StatusSeverity::Info => egui::Color32::from_rgb(26, 103, 64),
                StatusSeverity::Error => egui::Color32::from_rgb(173, 33, 33),
            };
            ui.colored_label(color, self.viewer.status.message());
        });
    }

    fn render_toggle_row(&mut self, ui: &mut egui::Ui) {
        let mut clicked_index = None;
        ui.horizontal(|ui| {
            for (index, button) in self.viewer.view.buttons().iter().enumerate() {
                let label = match button.target() {
                    ViewMode::Tree => "Tree",
                    ViewMode::Map => "Map",
                };
                if ui.selectable_label(button.active(), label).clicked() {
                    clicked_index = Some(index);
                }
            }
        });

        if let Some(index) = clicked_index {
            self.viewer.view.handle_toggle_click(index);
        }
    }

    fn render_panels(&mut self, ui: &mut egui::Ui) {
        if self.viewer.view.is_inert() {
            ui.label("Viewer is not initialized; see the status line.");
            return;
        }

        let tree_visible = self
            .viewer
            .view
            .tree_panel()
            .is_some_and(|panel| panel.visible());
        if tree_visible {
            ui.heading("Organization tree");
            ui.label("Tree view rendered by the UI collaborator.");
            ui.separator();
            self.render_role_browser(ui);
            return;
        }

        ui.heading("Organization map");
        match self.viewer.view.map_panel().and_then(|panel| panel.notice()) {
            Some(notice) => {
                ui.colored_label(egui::Color32::from_rgb(140, 84, 0), notice);
            }
            None => {
                ui.label("Map renderer active.");
            }
        }
    }

    fn render_role_browser(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Role interactions").strong());

        let role_names = self
            .viewer
            .catalog
            .role_names()
            .map(str::to_owned)
            .collect::<Vec<_>>();
        ui.horizontal(|ui| {
            for role in &role_names {
                let selected = self.selected_role.as_deref() == Some(role.as_str());
                if ui.selectable_label(selected, role.as_str()).clicked() {
                    self.selected_role = Some(role.clone());
                }
            }
        });

        let Some(role) = self.selected_role.clone() else {
            ui.label("Select a role to list its interactions.");
            return;
        };
        let Some(descriptors) = self.viewer.catalog.interactions(&role) else {
            ui.label(format!("No interactions recorded for {role}."));
            return;
        };

        for descriptor in descriptors {
            ui.label(format!("{}: {}", descriptor.label, descriptor.description));
        }
    }

    fn render_operator_row(&mut self, ui: &mut egui::Ui) {
        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Show maintenance notice").clicked() {
                self.viewer.banner.show(MAINTENANCE_NOTICE, true);
            }
            if ui.button("Hide banner").clicked() {
                self.viewer.banner.hide();
            }
        });
    }
}

impl eframe::App for ShellApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_banner(ctx);
        self.render_status(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_toggle_row(ui);
            ui.separator();
            self.render_panels(ui);
            self.render_operator_row(ui);
        });
    }
}
