use crate::config::Config;
use crate::entry::FileEntry;
use crate::io;
use crate::state::{NavigationState, SelectionState};
use crate::style::{self, Theme};
use crate::view::{Modal, RowClick};
use eframe::egui;
use std::cell::RefCell;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub struct Rummage {
    pub(crate) nav: NavigationState,
    pub(crate) entries: Vec<FileEntry>,
    pub(crate) selection: SelectionState,
    pub(crate) address_input: String,
    pub(crate) modal: Option<Modal>,
    /// Set when a modal opens; the dismissal keys skip the frame that
    /// opened it, so the key press that triggered the modal cannot also
    /// close it.
    pub(crate) modal_opened_this_frame: bool,
    status: Option<(String, Instant)>,
    theme: Theme,
    config: Config,
}

impl Rummage {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let app = Self::with_config(config);
        app.theme.apply(&cc.egui_ctx);
        app
    }

    pub(crate) fn with_config(config: Config) -> Self {
        let theme = Theme::from_name(&config.theme.mode);
        let start = home_directory();
        let mut app = Self {
            nav: NavigationState::new(start.clone()),
            entries: Vec::new(),
            selection: SelectionState::new(),
            address_input: start.display().to_string(),
            modal: None,
            modal_opened_this_frame: false,
            status: None,
            theme,
            config,
        };
        app.refresh_entries();
        app
    }

    // --- Navigation ---

    /// Enter a directory, or open a file with the default application.
    pub(crate) fn navigate_to(&mut self, path: PathBuf) {
        if path.is_dir() {
            if self.nav.navigate(path) {
                self.after_location_change();
            }
        } else {
            self.open_entry(&path);
        }
    }

    pub(crate) fn go_back(&mut self) {
        if self.nav.go_back() {
            self.after_location_change();
        }
    }

    pub(crate) fn go_forward(&mut self) {
        if self.nav.go_forward() {
            self.after_location_change();
        }
    }

    pub(crate) fn go_up(&mut self) {
        if self.nav.go_up() {
            self.after_location_change();
        }
    }

    pub(crate) fn go_home(&mut self) {
        self.navigate_to(home_directory());
    }

    fn after_location_change(&mut self) {
        self.selection.clear();
        self.address_input = self.nav.current().display().to_string();
        self.refresh_entries();
    }

    pub(crate) fn refresh_entries(&mut self) {
        match io::read_directory(self.nav.current()) {
            Ok(entries) => {
                self.entries = entries;
                self.selection.retain_valid(self.entries.len());
            }
            Err(e) => {
                self.entries.clear();
                self.selection.clear();
                self.show_error("Error", format!("Error reading directory: {}", e));
            }
        }
    }

    pub(crate) fn submit_address(&mut self) {
        let address = self.address_input.trim().to_string();
        let path = PathBuf::from(&address);
        if path.is_dir() {
            self.navigate_to(path);
        } else {
            self.show_error("Error", format!("Invalid directory path: {}", address));
            self.address_input = self.nav.current().display().to_string();
        }
    }

    // --- Selection ---

    pub(crate) fn handle_row_click(&mut self, click: RowClick) {
        if click.extend {
            self.selection.extend_to(click.index);
        } else if click.toggle {
            self.selection.toggle(click.index);
        } else {
            self.selection.select(click.index);
        }
    }

    // --- File operations ---

    pub(crate) fn open_entry(&mut self, path: &Path) {
        if let Err(e) = io::open_with_default(path) {
            self.show_error("Error", format!("Error opening file: {}", e));
        }
    }

    pub(crate) fn request_delete(&mut self) {
        let paths = self.selection.selected_paths(&self.entries);
        if !paths.is_empty() {
            self.modal = Some(Modal::ConfirmDelete { paths });
            self.modal_opened_this_frame = true;
        }
    }

    pub(crate) fn delete_paths(&mut self, paths: &[PathBuf]) {
        let report = io::delete_entries(paths);
        self.set_status(report.summary());
        if let Some(message) = report.failure_message() {
            self.show_error("Delete Error", message);
        }
        self.refresh_entries();
    }

    // --- Messages ---

    pub(crate) fn show_error(&mut self, title: &str, message: String) {
        self.modal = Some(Modal::Error {
            title: title.to_string(),
            message,
        });
        self.modal_opened_this_frame = true;
    }

    fn set_status(&mut self, message: String) {
        self.status = Some((message, Instant::now()));
    }

    fn clear_expired_status(&mut self) {
        if let Some((_, since)) = &self.status {
            if since.elapsed().as_secs() >= style::MESSAGE_TIMEOUT_SECS {
                self.status = None;
            }
        }
    }

    pub(crate) fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.theme.apply(ctx);
    }

    // --- Input ---

    fn handle_input(&mut self, ctx: &egui::Context) {
        // Modal dialogs own the keyboard while they are up, and so does a
        // focused text edit (the address bar).
        if self.modal.is_some() || ctx.wants_keyboard_input() {
            return;
        }

        if ctx.input(|i| i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft)) {
            self.go_back();
        }
        if ctx.input(|i| i.modifiers.alt && i.key_pressed(egui::Key::ArrowRight)) {
            self.go_forward();
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Backspace)) {
            self.go_up();
        }
        if ctx.input(|i| i.key_pressed(egui::Key::F5)) {
            self.refresh_entries();
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Delete)) {
            self.request_delete();
        }
    }

    fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{} items", self.entries.len()));
                if !self.selection.is_empty() {
                    ui.label(format!("| {} selected", self.selection.len()));
                }
                if let Some((message, _)) = &self.status {
                    ui.label(format!("| {}", message));
                }
            });
        });
    }
}

impl eframe::App for Rummage {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.clear_expired_status();
        self.handle_input(ctx);

        // Deferred actions: clicks inside the table and tree are applied
        // after rendering, once their borrows are released
        let next_navigation: RefCell<Option<PathBuf>> = RefCell::new(None);
        let next_click: RefCell<Option<RowClick>> = RefCell::new(None);

        self.render_toolbar(ctx);
        self.render_status_bar(ctx);

        let tree_panel = egui::SidePanel::left("tree_panel")
            .resizable(true)
            .default_width(self.config.panel.tree_width)
            .width_range(style::TREE_MIN..=style::TREE_MAX)
            .show(ctx, |ui| {
                self.render_tree_pane(ui, &next_navigation);
            });
        self.config.panel.tree_width = tree_panel.response.rect.width();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_listing_pane(ui, &next_navigation, &next_click);
        });

        self.render_modals(ctx);

        let window = ctx.input(|i| i.screen_rect().size());
        self.config.window.width = window.x;
        self.config.window.height = window.y;

        if let Some(click) = next_click.into_inner() {
            self.handle_row_click(click);
        }
        if let Some(path) = next_navigation.into_inner() {
            self.navigate_to(path);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.config.theme.mode = self.theme.name().to_string();
        if let Err(e) = self.config.save() {
            tracing::warn!(error = %e, "failed to save config on exit");
        }
    }
}

/// The user's home directory, falling back to the working directory.
fn home_directory() -> PathBuf {
    directories::UserDirs::new()
        .map(|ud| ud.home_dir().to_path_buf())
        .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from("/")))
}
