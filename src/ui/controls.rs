use egui;
use macroquad::prelude::Vec2;

use super::UiState;
use crate::show::{ShowCommand, ShowState};

/// Floating button strip along the bottom edge.
pub fn draw_controls(
    ctx: &egui::Context,
    show: &ShowState,
    ui_state: &mut UiState,
    sound_enabled: bool,
    pointer: Vec2,
    commands: &mut Vec<ShowCommand>,
) {
    egui::Window::new("controls")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -16.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                title_badge(ui, "SKYBURST");
                ui.separator();

                if ui.button(egui::RichText::new("Launch Fireworks").strong()).clicked() {
                    commands.push(ShowCommand::LaunchButton { pointer });
                }

                // One-shot reveal; the button goes away once used
                if !show.surprise_used
                    && ui
                        .button(
                            egui::RichText::new("Surprise!")
                                .strong()
                                .color(egui::Color32::from_rgb(255, 215, 0)),
                        )
                        .clicked()
                {
                    commands.push(ShowCommand::Surprise { pointer });
                }

                ui.separator();
                let sound_label = if sound_enabled { "Sound: On" } else { "Sound: Off" };
                if ui.selectable_label(sound_enabled, sound_label).clicked() {
                    commands.push(ShowCommand::ToggleSound);
                }
                if ui.selectable_label(show.auto_launch, "Auto").clicked() {
                    commands.push(ShowCommand::ToggleAutoLaunch);
                }
                ui.toggle_value(&mut ui_state.show_hud, "HUD");
            });

            ui.label(
                egui::RichText::new("Click the sky to launch. Space: burst  A: auto  H: HUD")
                    .small()
                    .color(egui::Color32::from_rgb(150, 170, 185)),
            );
        });
}

fn title_badge(ui: &mut egui::Ui, label: &str) {
    let text = egui::RichText::new(label)
        .strong()
        .color(egui::Color32::from_rgb(190, 220, 255));
    ui.label(text);
}
