// File listing table: icon, Name, Type, Size, Modified.

use crate::app::Rummage;
use crate::format::{format_size, format_timestamp};
use crate::style;
use eframe::egui;
use std::cell::RefCell;
use std::path::PathBuf;

/// A click on a listing row, with the modifiers that decide how the
/// selection changes. Applied after rendering, outside the table borrow.
pub(crate) struct RowClick {
    pub index: usize,
    pub toggle: bool,
    pub extend: bool,
}

impl Rummage {
    pub(crate) fn render_listing_pane(
        &self,
        ui: &mut egui::Ui,
        next_navigation: &RefCell<Option<PathBuf>>,
        next_click: &RefCell<Option<RowClick>>,
    ) {
        if self.entries.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("Empty folder");
            });
            return;
        }

        egui::ScrollArea::vertical()
            .id_salt("listing_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                use egui_extras::{Column, TableBuilder};

                TableBuilder::new(ui)
                    .striped(true)
                    .resizable(true)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(Column::auto().at_least(style::ICON_COL_WIDTH))
                    .column(Column::remainder().clip(true))
                    .column(Column::initial(style::TYPE_COL_WIDTH))
                    .column(Column::initial(style::SIZE_COL_WIDTH))
                    .column(Column::initial(style::MODIFIED_COL_WIDTH))
                    .header(style::HEADER_HEIGHT, |mut header| {
                        header.col(|ui| {
                            ui.label("");
                        });
                        header.col(|ui| {
                            ui.label("Name");
                        });
                        header.col(|ui| {
                            ui.label("Type");
                        });
                        header.col(|ui| {
                            ui.label("Size");
                        });
                        header.col(|ui| {
                            ui.label("Modified");
                        });
                    })
                    .body(|body| {
                        body.rows(style::ROW_HEIGHT, self.entries.len(), |mut row| {
                            let index = row.index();
                            let entry = &self.entries[index];
                            row.set_selected(self.selection.contains(index));

                            row.col(|ui| {
                                ui.label(entry.icon());
                            });

                            row.col(|ui| {
                                let mut text = egui::RichText::new(&entry.name);
                                if entry.is_dir {
                                    text = text.color(egui::Color32::from_rgb(120, 180, 255));
                                }
                                let response = style::truncated_label_with_sense(
                                    ui,
                                    text,
                                    egui::Sense::click(),
                                );
                                if response.clicked() {
                                    let modifiers = ui.input(|i| i.modifiers);
                                    *next_click.borrow_mut() = Some(RowClick {
                                        index,
                                        toggle: modifiers.command,
                                        extend: modifiers.shift,
                                    });
                                }
                                if response.double_clicked() {
                                    *next_navigation.borrow_mut() = Some(entry.path.clone());
                                }
                            });

                            row.col(|ui| {
                                ui.label(entry.kind());
                            });

                            row.col(|ui| {
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        let size = entry
                                            .size
                                            .map(format_size)
                                            .unwrap_or_default();
                                        ui.label(size);
                                    },
                                );
                            });

                            row.col(|ui| {
                                ui.label(format_timestamp(entry.modified));
                            });
                        });
                    });
            });
    }
}
