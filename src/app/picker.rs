use egui::widgets::color_picker::{
    Alpha,
    color_picker_color32,
};

use crate::color::Color;

/// Modal-ish window with a full color picker.
///
/// [`show`][Self::show] returns the picked color once the user confirms. If
/// the window is closed or cancelled nothing is returned.
#[derive(Debug, Default)]
pub struct ColorPickerDialog {
    pending: Option<egui::Color32>,
}

impl ColorPickerDialog {
    pub fn open(&mut self, initial: Color) {
        self.pending = Some(initial.into());
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<Color> {
        let pending = self.pending.as_mut()?;

        let mut open = true;
        let mut picked = None;
        let mut cancelled = false;

        egui::Window::new("Choose Color")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                color_picker_color32(ui, pending, Alpha::Opaque);

                ui.separator();

                ui.with_layout(egui::Layout::right_to_left(Default::default()), |ui| {
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                    if ui.button("OK").clicked() {
                        picked = Some(Color::from(*pending));
                    }
                });
            });

        if !open || cancelled || picked.is_some() {
            self.pending = None;
        }

        picked
    }
}
