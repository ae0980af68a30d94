use egui::widgets::color_picker::show_color;

use crate::{
    config::AppConfig,
    view_model::{
        Action,
        ViewModel,
    },
};

/// Central panel: the selected color, its text forms and the palette.
#[derive(Debug, Default)]
pub struct Editor {
    rgb_buffer: String,
    hex_buffer: String,
    /// Revision of the color state the buffers were last filled from.
    synced_revision: Option<u64>,
}

impl Editor {
    /// Shows the editor. Returns the action of any button that was clicked.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        view_model: &mut ViewModel,
        config: &AppConfig,
    ) -> Option<Action> {
        let mut action = None;

        let revision = view_model.color.revision();
        let resync = self.synced_revision != Some(revision);
        self.synced_revision = Some(revision);

        ui.horizontal(|ui| {
            show_color(
                ui,
                egui::Color32::from(view_model.selection()),
                egui::vec2(64.0, 64.0),
            );

            egui::Grid::new("color_text")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.label("RGB");
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.rgb_buffer).desired_width(120.0),
                    );
                    if response.changed() && view_model.color.set_rgb_text(&self.rgb_buffer) {
                        // the other field picks this up next frame
                        ui.ctx().request_repaint();
                    }
                    if (resync || response.lost_focus()) && !response.has_focus() {
                        self.rgb_buffer = view_model.color.rgb_text();
                    }
                    ui.end_row();

                    ui.label("Hex");
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.hex_buffer).desired_width(120.0),
                    );
                    if response.changed() && view_model.color.set_hex_text(&self.hex_buffer) {
                        // the other field picks this up next frame
                        ui.ctx().request_repaint();
                    }
                    if (resync || response.lost_focus()) && !response.has_focus() {
                        self.hex_buffer = view_model.color.hex_text();
                    }
                    ui.end_row();
                });
        });

        ui.horizontal(|ui| {
            for button in [Action::ChooseColor, Action::Add, Action::Delete] {
                if ui.button(button.label()).clicked() {
                    action = Some(button);
                }
            }
        });

        ui.separator();

        let palette = view_model.palette();
        if palette.is_empty() {
            ui.weak("Palette is empty");
        }
        else {
            let mut selected = None;

            egui::ScrollArea::vertical()
                .id_salt("palette")
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        for (index, color) in palette.colors().iter().enumerate() {
                            let mut swatch = egui::Button::new("")
                                .fill(egui::Color32::from(*color))
                                .min_size(egui::vec2(config.swatch_size, config.swatch_size));
                            if view_model.is_selected(*color) {
                                swatch = swatch
                                    .stroke(egui::Stroke::new(2.0, ui.visuals().strong_text_color()));
                            }

                            if ui.add(swatch).on_hover_text(color.to_string()).clicked() {
                                selected = Some(index);
                            }
                        }
                    });
                });

            if let Some(index) = selected {
                view_model.select(index);
            }
        }

        action
    }
}
