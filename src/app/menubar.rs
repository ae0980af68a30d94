use std::{
    collections::VecDeque,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    app::{
        App,
        error_dialog::ResultExt,
    },
    util::format_path,
    view_model::Action,
};

pub struct MenuBar<'a> {
    app: &'a mut App,
}

impl<'a> MenuBar<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                self.file_menu(ui);
                self.palette_menu(ui);
                self.help_menu(ui);
            });
        });
    }

    /// To configure menus to our liking. Call from inside the menu.
    fn setup_menu(&self, ui: &mut egui::Ui) {
        ui.set_min_width(150.0);
    }

    fn file_menu(&mut self, ui: &mut egui::Ui) {
        ui.menu_button("File", |ui| {
            self.setup_menu(ui);

            if ui.button(Action::Open.label()).clicked() {
                self.app.perform(Action::Open);
            }
            ui.menu_button("Open Recent", |ui| {
                let recently_open = RecentlyOpenedFiles::get(ui.ctx());

                if !recently_open.files.is_empty() {
                    for path in recently_open.files {
                        if ui.button(format_path(&path).to_string()).clicked() {
                            RecentlyOpenedFiles::move_to_top(ui.ctx(), &path);
                            self.app.open_file(&path).ok_or_handle(ui.ctx());
                        }
                    }
                }
                else {
                    ui.label("No recently open files");
                }
            });

            ui.separator();

            if ui
                .add_enabled(
                    !self.app.view_model.palette().is_empty(),
                    egui::Button::new(Action::Save.label()),
                )
                .clicked()
            {
                self.app.perform(Action::Save);
            }

            ui.separator();

            if ui.button("Exit").clicked() {
                tracing::info!("App close requested by user");
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    }

    fn palette_menu(&mut self, ui: &mut egui::Ui) {
        ui.menu_button("Palette", |ui| {
            self.setup_menu(ui);

            let selection = self.app.view_model.selection();
            let palette = self.app.view_model.palette();
            let can_add = !palette.contains(selection);
            let can_delete = palette.contains(selection);

            if ui
                .add_enabled(can_add, egui::Button::new(Action::Add.label()))
                .clicked()
            {
                self.app.perform(Action::Add);
            }
            if ui
                .add_enabled(can_delete, egui::Button::new(Action::Delete.label()))
                .clicked()
            {
                self.app.perform(Action::Delete);
            }

            ui.separator();

            if ui.button(Action::ChooseColor.label()).clicked() {
                self.app.perform(Action::ChooseColor);
            }
        });
    }

    fn help_menu(&mut self, ui: &mut egui::Ui) {
        ui.menu_button("Help", |ui| {
            self.setup_menu(ui);

            if ui.button("About").clicked() {
                self.app.show_about = true;
            }
        });
    }
}

/// Container to store recently opened files in egui's memory
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RecentlyOpenedFiles {
    pub files: VecDeque<PathBuf>,
}

impl RecentlyOpenedFiles {
    pub fn get(ctx: &egui::Context) -> Self {
        ctx.memory_mut(|memory| {
            memory
                .data
                .get_persisted_mut_or_default::<Self>(egui::Id::NULL)
                .clone()
        })
    }

    pub fn insert(ctx: &egui::Context, path: impl AsRef<Path>, limit: usize) {
        ctx.memory_mut(|memory| {
            memory
                .data
                .get_persisted_mut_or_default::<Self>(egui::Id::NULL)
                .push(path.as_ref(), limit);
        });
    }

    pub fn move_to_top(ctx: &egui::Context, path: impl AsRef<Path>) {
        ctx.memory_mut(|memory| {
            let this = memory
                .data
                .get_persisted_mut_or_default::<Self>(egui::Id::NULL);
            let limit = this.files.len().max(1);
            this.push(path.as_ref(), limit);
        });
    }

    /// Puts `path` in front, removing any older entry for it, and drops the
    /// oldest entries beyond `limit`.
    fn push(&mut self, path: &Path, limit: usize) {
        self.files.retain(|file| file != path);
        self.files.push_front(path.to_owned());
        self.files.truncate(limit);
    }
}
