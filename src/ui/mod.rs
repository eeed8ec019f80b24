pub mod controls;
pub mod fortune_card;

use macroquad::prelude::Vec2;

use crate::show::{ShowCommand, ShowState};

/// Panel state that outlives a frame.
#[derive(Default)]
pub struct UiState {
    pub show_hud: bool,
}

/// Draw all egui panels and collect what the user asked for this frame.
/// `pointer` is the mouse position in screen pixels; effects spawn there.
pub fn draw_ui(
    show: &ShowState,
    ui_state: &mut UiState,
    sound_enabled: bool,
    pointer: Vec2,
) -> Vec<ShowCommand> {
    let mut commands = Vec::new();

    egui_macroquad::ui(|ctx| {
        controls::draw_controls(ctx, show, ui_state, sound_enabled, pointer, &mut commands);
        if show.fortune_card.visible {
            fortune_card::draw_fortune_card(ctx, &show.fortune_card, pointer, &mut commands);
        }
    });

    egui_macroquad::draw();
    commands
}
