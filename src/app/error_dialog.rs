use std::sync::Arc;

use egui::Id;
use parking_lot::Mutex;

use crate::Error;

pub fn show_error_dialog(ctx: &egui::Context) {
    let Some(container) = ctx.data(|data| data.get_temp::<Container>(Id::NULL))
    else {
        tracing::warn!("error dialog not registered in egui context");
        return;
    };

    let mut inner = container.inner.lock();
    inner.show(ctx);
}

pub trait ResultExt<T>: Sized {
    fn ok_or_handle(self, handler: impl ErrorHandler) -> Option<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    Error: From<E>,
{
    fn ok_or_handle(self, handler: impl ErrorHandler) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                handler.handle_error(error.into());
                None
            }
        }
    }
}

pub trait ErrorHandler {
    fn handle_error(self, error: Error);
}

impl ErrorHandler for &mut ErrorDialog {
    fn handle_error(self, error: Error) {
        self.set_error(error);
    }
}

impl ErrorHandler for &egui::Context {
    fn handle_error(self, error: Error) {
        match self.data(|data| data.get_temp::<Container>(Id::NULL)) {
            Some(container) => container.inner.lock().set_error(error),
            None => tracing::error!(?error, "error dialog not registered"),
        }
    }
}

#[derive(Debug, Default)]
pub struct ErrorDialog {
    error: Option<Error>,
}

impl ErrorDialog {
    pub fn set_error<E>(&mut self, error: E)
    where
        Error: From<E>,
    {
        let error = Error::from(error);
        tracing::error!(?error);
        self.error = Some(error);
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn clear(&mut self) {
        self.error = None;
    }

    /// Moves the dialog into the egui context, so that it can be reached from
    /// anywhere that has a [`egui::Context`].
    pub fn register_in_context(self, ctx: &egui::Context) {
        ctx.data_mut(|data| {
            data.insert_temp(
                Id::NULL,
                Container {
                    inner: Arc::new(Mutex::new(self)),
                },
            );
        })
    }

    fn show(&mut self, ctx: &egui::Context) {
        if let Some(error) = &self.error {
            let mut open1 = true;
            let mut open2 = true;

            egui::Window::new("Error")
                .movable(true)
                .open(&mut open1)
                .collapsible(false)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical()
                        .id_salt("error_message")
                        .show(ui, |ui| {
                            egui::Frame::new().inner_margin(5).show(ui, |ui| {
                                ui.label(format!("{error:#}"));
                            });
                        });

                    ui.separator();

                    ui.with_layout(egui::Layout::right_to_left(Default::default()), |ui| {
                        if ui.button("Close").clicked() {
                            open2 = false;
                        }
                    });
                });

            if !open1 || !open2 {
                self.clear();
            }
        }
    }
}

#[derive(Clone, Debug, Default)]
struct Container {
    inner: Arc<Mutex<ErrorDialog>>,
}
