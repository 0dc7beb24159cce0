// Toolbar: history buttons, refresh, home, delete, and the address bar.

use crate::app::Rummage;
use eframe::egui;

impl Rummage {
    pub(crate) fn render_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(self.nav.can_go_back(), egui::Button::new("←"))
                    .on_hover_text("Back")
                    .clicked()
                {
                    self.go_back();
                }
                if ui
                    .add_enabled(self.nav.can_go_forward(), egui::Button::new("→"))
                    .on_hover_text("Forward")
                    .clicked()
                {
                    self.go_forward();
                }
                if ui
                    .add_enabled(self.nav.can_go_up(), egui::Button::new("↑"))
                    .on_hover_text("Up one level")
                    .clicked()
                {
                    self.go_up();
                }
                if ui.button("⟳").on_hover_text("Refresh").clicked() {
                    self.refresh_entries();
                }
                if ui.button("🏠").on_hover_text("Home").clicked() {
                    self.go_home();
                }
                if ui
                    .add_enabled(!self.selection.is_empty(), egui::Button::new("🗑"))
                    .on_hover_text("Delete")
                    .clicked()
                {
                    self.request_delete();
                }

                ui.separator();
                ui.label("Address:");

                let theme_button_space = egui::vec2(40.0, 0.0);
                let response = ui.add_sized(
                    ui.available_size() - theme_button_space,
                    egui::TextEdit::singleline(&mut self.address_input),
                );
                if response.lost_focus() && ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
                    self.submit_address();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("☀/🌙").on_hover_text("Toggle theme").clicked() {
                        self.toggle_theme(ctx);
                    }
                });
            });
            ui.add_space(4.0);
        });
    }
}
