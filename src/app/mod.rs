pub mod editor;
pub mod error_dialog;
pub mod menubar;
pub mod picker;
pub mod start;

use std::path::Path;

use color_eyre::eyre::WrapErr;
use egui_file_dialog::FileDialog;

use crate::{
    Error,
    app::{
        editor::Editor,
        error_dialog::{
            ErrorDialog,
            ResultExt,
            show_error_dialog,
        },
        menubar::{
            MenuBar,
            RecentlyOpenedFiles,
        },
        picker::ColorPickerDialog,
        start::CreateAppContext,
    },
    config::AppConfig,
    files::AppFiles,
    palette_file,
    view_model::{
        Action,
        ActionOutcome,
        ViewModel,
    },
};

#[derive(Debug)]
pub struct App {
    pub app_files: AppFiles,
    pub config: AppConfig,
    pub view_model: ViewModel,
    pub editor: Editor,
    pub file_dialog: FileDialog,
    pub color_picker: ColorPickerDialog,
    pub show_about: bool,
}

impl App {
    pub fn new(context: CreateAppContext) -> Self {
        tracing::info!(?context.app_files);

        let mut error_dialog = ErrorDialog::default();

        // modify egui styles
        context.egui_context.all_styles_mut(|style| {
            style.compact_menu_style = false;
        });

        // create file dialog for opening and saving palettes
        let file_dialog = FileDialog::new()
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .add_file_filter_extensions(
                palette_file::FILE_FILTER_NAME,
                vec![palette_file::FILE_EXTENSION],
            )
            .default_file_filter(palette_file::FILE_FILTER_NAME);

        let mut app = Self {
            app_files: context.app_files,
            view_model: ViewModel::new(context.config.initial_color),
            config: context.config,
            editor: Editor::default(),
            file_dialog,
            color_picker: ColorPickerDialog::default(),
            show_about: false,
        };

        if let Some(path) = &context.args.file {
            // if a file was passed via command line argument, open it
            RecentlyOpenedFiles::insert(
                &context.egui_context,
                path,
                app.config.recently_opened_files_limit,
            );

            app.open_file(path).ok_or_handle(&mut error_dialog);
        }

        error_dialog.register_in_context(&context.egui_context);

        app
    }

    /// Performs an action, opening whatever dialog it needs.
    pub fn perform(&mut self, action: Action) {
        let outcome = self.view_model.dispatch(action);
        tracing::debug!(%action, ?outcome, "action performed");

        match outcome {
            ActionOutcome::Changed | ActionOutcome::Unchanged => {}
            ActionOutcome::PickFileToOpen => {
                self.file_dialog.set_user_data(FileDialogAction::Open);
                self.file_dialog.pick_file();
            }
            ActionOutcome::PickFileToSave => {
                self.file_dialog.set_user_data(FileDialogAction::Save);
                self.file_dialog.save_file();
            }
            ActionOutcome::PickColor => {
                self.color_picker.open(self.view_model.selection());
            }
        }
    }

    pub fn open_file(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let lines = palette_file::read_lines(path)?;

        self.view_model
            .load_from(lines)
            .with_context(|| format!("Could not load palette: {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            colors = self.view_model.palette().len(),
            "Palette opened"
        );
        Ok(())
    }

    pub fn save_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let Some(lines) = self.view_model.save_to()
        else {
            tracing::debug!("palette is empty, not saving");
            return Ok(());
        };

        let path = palette_file::with_default_extension(path.as_ref());
        palette_file::write_lines(&path, &lines)?;

        tracing::info!(path = %path.display(), colors = lines.len(), "Palette saved");
        Ok(())
    }

    fn handle_file_dialog(&mut self, ctx: &egui::Context) {
        self.file_dialog.update(ctx);

        if let Some(path) = self.file_dialog.take_picked() {
            if let Some(file_dialog_action) =
                self.file_dialog.user_data::<FileDialogAction>().copied()
            {
                match file_dialog_action {
                    FileDialogAction::Open => {
                        RecentlyOpenedFiles::insert(
                            ctx,
                            &path,
                            self.config.recently_opened_files_limit,
                        );
                        self.open_file(&path).ok_or_handle(ctx);
                    }
                    FileDialogAction::Save => {
                        self.save_file(&path).ok_or_handle(ctx);
                    }
                }
            }
            else {
                tracing::warn!("File dialog without action");
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // show top menubar
        MenuBar::new(self).show(ctx);

        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                self.editor.show(ui, &mut self.view_model, &self.config)
            })
            .inner;
        if let Some(action) = action {
            self.perform(action);
        }

        if let Some(color) = self.color_picker.show(ctx) {
            self.view_model.color.set_color(color);
        }

        egui::Window::new("About")
            .movable(true)
            .collapsible(false)
            .open(&mut self.show_about)
            .show(ctx, |ui| {
                ui.label(format!("Version: {}", std::env!("CARGO_PKG_VERSION")));
            });

        self.handle_file_dialog(ctx);

        show_error_dialog(ctx);
    }
}

#[derive(Clone, Copy, Debug)]
enum FileDialogAction {
    Open,
    Save,
}
