use eframe::NativeOptions;
use egui::ViewportBuilder;

use crate::{
    Error,
    app::App,
    args::Args,
    config::AppConfig,
    files::AppFiles,
};

#[derive(Clone, Debug)]
pub struct CreateAppContext {
    pub egui_context: egui::Context,
    pub app_files: AppFiles,
    pub config: AppConfig,
    pub args: Args,
}

pub fn run_app(args: Args) -> Result<(), Error> {
    let app_files = AppFiles::open()?;

    // load config
    let config = if args.ignore_config {
        AppConfig::default()
    }
    else {
        app_files.read_config_or_create::<AppConfig>()?
    };
    tracing::debug!(?config);

    eframe::run_native(
        "color-translator",
        NativeOptions {
            viewport: ViewportBuilder::default()
                .with_title("Color Translator")
                .with_app_id("color-translator")
                .with_inner_size([420.0, 320.0]),
            persistence_path: Some(app_files.egui_persist_path()),
            ..Default::default()
        },
        Box::new(|cc| {
            let create_app_context = CreateAppContext {
                egui_context: cc.egui_ctx.clone(),
                app_files,
                config,
                args,
            };

            Ok(Box::new(App::new(create_app_context)))
        }),
    )?;
    Ok(())
}
