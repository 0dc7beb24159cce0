// Directory tree pane: filesystem roots with lazily expanded nodes.
// Children are read only while a node is open; closed branches cost nothing.

use crate::app::Rummage;
use crate::io;
use eframe::egui;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

const ACTIVE_COLOR: egui::Color32 = egui::Color32::from_rgb(120, 180, 255);

impl Rummage {
    pub(crate) fn render_tree_pane(
        &self,
        ui: &mut egui::Ui,
        next_navigation: &RefCell<Option<PathBuf>>,
    ) {
        ui.add_space(4.0);
        ui.vertical_centered(|ui| {
            ui.heading("Folders");
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("tree_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for root in filesystem_roots() {
                    self.show_tree_node(ui, &root, next_navigation);
                }
            });
    }

    fn show_tree_node(
        &self,
        ui: &mut egui::Ui,
        path: &Path,
        next_navigation: &RefCell<Option<PathBuf>>,
    ) {
        // Roots like "/" have no file name component
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let color = if path == self.nav.current() {
            ACTIVE_COLOR
        } else {
            ui.visuals().text_color()
        };

        let header = egui::CollapsingHeader::new(
            egui::RichText::new(format!("📁 {}", name)).color(color),
        )
        .id_salt(path.to_path_buf())
        .default_open(false)
        .show(ui, |ui| {
            for child in io::read_subdirectories(path) {
                self.show_tree_node(ui, &child.path, next_navigation);
            }
        });

        if header.header_response.clicked() {
            *next_navigation.borrow_mut() = Some(path.to_path_buf());
        }
    }
}

#[cfg(windows)]
fn filesystem_roots() -> Vec<PathBuf> {
    ('A'..='Z')
        .map(|drive| PathBuf::from(format!("{}:\\", drive)))
        .filter(|p| p.is_dir())
        .collect()
}

#[cfg(not(windows))]
fn filesystem_roots() -> Vec<PathBuf> {
    vec![PathBuf::from("/")]
}
