use macroquad::audio::{load_sound, load_sound_from_bytes, play_sound, PlaySoundParams, Sound};
use macroquad::logging::{info, warn};

use crate::blast;
use crate::config;

/// Fire-and-forget sound effects triggered by the show.
///
/// Implementations must never fail the caller: a missing device, a missing
/// file or a muted state all degrade to silence.
pub trait SoundEffects {
    fn play_launch_sound(&mut self);

    fn play_celebration_sound(&mut self) {
        self.play_launch_sound();
    }

    fn is_enabled(&self) -> bool;

    fn set_enabled(&mut self, enabled: bool);
}

/// Launch-blast player backed by macroquad's audio mixer.
pub struct ShowAudio {
    blast: Option<Sound>,
    enabled: bool,
}

impl ShowAudio {
    /// Load the blast sample from `path`, falling back to the built-in blast.
    /// If neither can be decoded the player stays silent.
    pub async fn load(path: &str, enabled: bool) -> Self {
        let blast = match load_sound(path).await {
            Ok(sound) => {
                info!("[FIREWORKS] Loaded launch sound from {}", path);
                Some(sound)
            }
            Err(e) => {
                info!("[FIREWORKS] No launch sound at {} ({:?}), using built-in blast", path, e);
                match load_sound_from_bytes(&blast::blast_wav()).await {
                    Ok(sound) => Some(sound),
                    Err(e) => {
                        warn!("[FIREWORKS] Built-in blast failed to load: {:?}, running silent", e);
                        None
                    }
                }
            }
        };
        Self { blast, enabled }
    }

    pub fn is_available(&self) -> bool {
        self.blast.is_some()
    }
}

impl SoundEffects for ShowAudio {
    fn play_launch_sound(&mut self) {
        if !self.enabled {
            return;
        }
        let Some(ref blast) = self.blast else {
            return;
        };

        // Overlapping plays are mixed
        let volume = macroquad::rand::gen_range(config::LAUNCH_VOLUME_MIN, config::LAUNCH_VOLUME_MAX);
        play_sound(
            blast,
            PlaySoundParams {
                looped: false,
                volume,
            },
        );
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
