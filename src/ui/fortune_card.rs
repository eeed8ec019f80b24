use egui;
use macroquad::prelude::Vec2;

use crate::show::{FortuneCard, ShowCommand};

pub fn draw_fortune_card(
    ctx: &egui::Context,
    card: &FortuneCard,
    pointer: Vec2,
    commands: &mut Vec<ShowCommand>,
) {
    egui::Window::new("Your Fortune")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 40.0))
        .show(ctx, |ui| {
            ui.set_max_width(320.0);
            ui.vertical_centered(|ui| {
                // Blank face while the card is turning over
                let text = if card.flipping { "..." } else { card.text.as_str() };
                ui.label(
                    egui::RichText::new(text)
                        .size(18.0)
                        .color(egui::Color32::from_rgb(255, 236, 179)),
                );
                ui.add_space(8.0);
                let button = ui.add_enabled(!card.flipping, egui::Button::new("New Fortune"));
                if button.clicked() {
                    commands.push(ShowCommand::NewFortune { pointer });
                }
            });
        });
}
