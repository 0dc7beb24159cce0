// Modal dialogs: error messages and delete confirmation.

use crate::app::Rummage;
use eframe::egui;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub enum Modal {
    Error { title: String, message: String },
    ConfirmDelete { paths: Vec<PathBuf> },
}

/// A key press this frame that is not an auto-repeat of a held key.
/// Repeats are ignored so a key held down since before the modal opened
/// cannot dismiss it.
fn fresh_key_press(ctx: &egui::Context, key: egui::Key) -> bool {
    ctx.input(|i| {
        i.events.iter().any(|event| {
            matches!(
                event,
                egui::Event::Key {
                    key: k,
                    pressed: true,
                    repeat: false,
                    ..
                } if *k == key
            )
        })
    })
}

impl Rummage {
    pub(crate) fn render_modals(&mut self, ctx: &egui::Context) {
        // The key press that opened a modal must not also dismiss it:
        // the toolbar and modals render in the same frame, so the Enter
        // that submitted a bad address is still in this frame's input.
        let keys_active = !std::mem::take(&mut self.modal_opened_this_frame);

        let Some(modal) = self.modal.clone() else {
            return;
        };

        match modal {
            Modal::Error { title, message } => {
                let mut close = false;
                egui::Window::new(title)
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                    .show(ctx, |ui| {
                        ui.label(message);
                        ui.add_space(10.0);
                        ui.vertical_centered(|ui| {
                            if ui.button("OK").clicked() {
                                close = true;
                            }
                        });
                    });
                if keys_active
                    && (fresh_key_press(ctx, egui::Key::Enter)
                        || fresh_key_press(ctx, egui::Key::Escape))
                {
                    close = true;
                }
                if close {
                    self.modal = None;
                }
            }
            Modal::ConfirmDelete { paths } => {
                let count = paths.len();
                let what = if count == 1 {
                    "file".to_string()
                } else {
                    format!("{} files", count)
                };
                let mut decision = None;

                egui::Window::new("Confirm Delete")
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                    .show(ctx, |ui| {
                        ui.label(format!(
                            "Are you sure you want to delete the selected {}?",
                            what
                        ));
                        ui.add_space(10.0);
                        ui.horizontal(|ui| {
                            if ui.button("Delete").clicked() {
                                decision = Some(true);
                            }
                            if ui.button("Cancel").clicked() {
                                decision = Some(false);
                            }
                        });
                    });

                if keys_active {
                    if fresh_key_press(ctx, egui::Key::Enter)
                        || fresh_key_press(ctx, egui::Key::Y)
                    {
                        decision = Some(true);
                    }
                    if fresh_key_press(ctx, egui::Key::Escape)
                        || fresh_key_press(ctx, egui::Key::N)
                    {
                        decision = Some(false);
                    }
                }

                if let Some(confirmed) = decision {
                    self.modal = None;
                    if confirmed {
                        self.delete_paths(&paths);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn enter_press(repeat: bool) -> egui::Event {
        egui::Event::Key {
            key: egui::Key::Enter,
            physical_key: None,
            pressed: true,
            repeat,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn enter_release() -> egui::Event {
        egui::Event::Key {
            key: egui::Key::Enter,
            physical_key: None,
            pressed: false,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn run_frame(ctx: &egui::Context, events: Vec<egui::Event>, app: &mut Rummage) {
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            app.render_modals(ctx);
        });
    }

    #[test]
    fn test_error_modal_survives_the_enter_that_opened_it() {
        let ctx = egui::Context::default();
        let mut app = Rummage::with_config(Config::default());

        // The Enter submitting a bad address and the modal render happen
        // in the same frame
        let input = egui::RawInput {
            events: vec![enter_press(false)],
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            app.show_error("Error", "Invalid directory path: /nope".to_string());
            app.render_modals(ctx);
        });
        assert!(app.modal.is_some());
    }

    #[test]
    fn test_error_modal_closes_on_a_later_enter() {
        let ctx = egui::Context::default();
        let mut app = Rummage::with_config(Config::default());

        app.show_error("Error", "something went wrong".to_string());
        run_frame(&ctx, vec![], &mut app);
        assert!(app.modal.is_some());

        run_frame(&ctx, vec![enter_press(false)], &mut app);
        assert!(app.modal.is_none());
    }

    #[test]
    fn test_held_enter_repeats_do_not_dismiss() {
        let ctx = egui::Context::default();
        let mut app = Rummage::with_config(Config::default());

        // The Enter that confirmed the delete dialog lands in the same
        // frame the error modal opens, and the key stays held. egui
        // recomputes each event's `repeat` flag from its own key-down
        // tracking, so the initial press must be delivered for the later
        // repeat to stay a repeat.
        let input = egui::RawInput {
            events: vec![enter_press(false)],
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            app.show_error("Delete Error", "/tmp/full: Directory not empty".to_string());
            app.render_modals(ctx);
        });
        assert!(app.modal.is_some());

        // Auto-repeat of a key held since the confirm dialog
        run_frame(&ctx, vec![enter_press(true)], &mut app);
        assert!(app.modal.is_some());

        run_frame(&ctx, vec![enter_release(), enter_press(false)], &mut app);
        assert!(app.modal.is_none());
    }
}
