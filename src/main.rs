use std::path::PathBuf;

use macroquad::logging::{info, warn};
use macroquad::prelude::*;

mod audio;
mod blast;
mod canvas;
mod confetti;
mod config;
mod field;
mod firework;
mod fortune;
mod particle;
mod renderer;
mod reporting;
mod scheduler;
mod settings;
mod show;
mod sparkles;
mod stats;
mod surface;
mod ui;

use audio::{ShowAudio, SoundEffects};
use canvas::TrailCanvas;
use reporting::FrameTimings;
use settings::{CliOptions, SettingsError, ShowSettings, DEFAULT_SETTINGS_PATH};
use show::{ShowCommand, ShowState};
use surface::ScreenSurface;
use ui::UiState;

fn window_conf() -> Conf {
    Conf {
        window_title: "Skyburst".to_string(),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

/// Settings file (if any) overlaid by command-line flags. Problems fall back to defaults.
fn load_settings() -> ShowSettings {
    let cli = match CliOptions::parse(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(e) => {
            warn!("[FIREWORKS] {}; ignoring command line", e);
            CliOptions::default()
        }
    };

    let path = cli
        .config_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));
    let mut settings = match ShowSettings::load(&path) {
        Ok(settings) => {
            info!("[FIREWORKS] Loaded settings from {}", path.display());
            settings
        }
        // No settings file in the working directory is the normal case
        Err(SettingsError::Io { .. }) if cli.config_path.is_none() => ShowSettings::default(),
        Err(e) => {
            warn!("[FIREWORKS] {}; using defaults", e);
            ShowSettings::default()
        }
    };

    cli.apply(&mut settings);
    settings
}

#[macroquad::main(window_conf)]
async fn main() {
    let settings = load_settings();
    let seed = settings
        .seed
        .unwrap_or_else(|| (macroquad::miniquad::date::now() * 1000.0) as u64);
    info!("[FIREWORKS] Starting show (seed {})", seed);

    let mut audio = ShowAudio::load(&settings.sound_path, settings.sound_enabled).await;
    if !audio.is_available() {
        info!("[FIREWORKS] Sound effects disabled for this session");
    }

    let mut canvas = TrailCanvas::new();
    let mut show = ShowState::new(&settings, seed, canvas.size(), get_time());
    let mut ui_state = UiState {
        show_hud: settings.show_hud,
    };
    let mut timings = FrameTimings::new();

    loop {
        let now = get_time();
        let pointer = Vec2::from(mouse_position());

        // Keyboard and sky clicks only when egui isn't using them
        let mut egui_wants_pointer = false;
        let mut egui_wants_keyboard = false;
        egui_macroquad::cfg(|ctx| {
            egui_wants_pointer = ctx.wants_pointer_input();
            egui_wants_keyboard = ctx.wants_keyboard_input();
        });

        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if !egui_wants_keyboard {
            if is_key_pressed(KeyCode::Space) {
                show.apply(ShowCommand::KeyboardBurst, now, &mut audio);
            }
            if is_key_pressed(KeyCode::A) {
                show.apply(ShowCommand::ToggleAutoLaunch, now, &mut audio);
            }
            if is_key_pressed(KeyCode::H) {
                ui_state.show_hud = !ui_state.show_hud;
            }
        }
        if !egui_wants_pointer && is_mouse_button_pressed(MouseButton::Left) {
            show.apply(ShowCommand::CanvasClick { pointer }, now, &mut audio);
        }

        // Sky: faded and redrawn into the persistent target
        canvas.check_resize();
        canvas.begin();
        let mut sky = ScreenSurface::new(canvas.size());
        show.tick(now, &mut sky, &mut audio);
        canvas.present();

        let mut screen = ScreenSurface::for_screen();
        show.draw_overlays(now, &mut screen);
        if ui_state.show_hud {
            renderer::draw_hud(&show);
        }

        let commands = ui::draw_ui(&show, &mut ui_state, audio.is_enabled(), pointer);
        for command in commands {
            show.apply(command, now, &mut audio);
        }

        timings.record(get_frame_time() as f64, show.field.particle_count());
        next_frame().await;
    }

    let report = timings.report(seed, show.launched_total, show.stats.total_bursts);
    match serde_json::to_string(&report) {
        Ok(json) => info!("[FIREWORKS] Session report: {}", json),
        Err(e) => warn!("[FIREWORKS] Could not serialize session report: {}", e),
    }
}
