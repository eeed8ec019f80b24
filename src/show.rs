use macroquad::logging::info;
use macroquad::prelude::*;
use ::rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::audio::SoundEffects;
use crate::config;
use crate::confetti::ConfettiSystem;
use crate::field::FireworkField;
use crate::firework::{random_shell_color, Firework};
use crate::fortune::FortuneDeck;
use crate::scheduler::{Interval, LaunchRequest, LaunchScheduler, TimerQueue};
use crate::settings::ShowSettings;
use crate::sparkles::SparkleLayer;
use crate::stats::ShowStats;
use crate::surface::{rgb, with_alpha, Surface};

/// User intents coming from the panel, pointer and keyboard.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShowCommand {
    /// "Launch Fireworks" button.
    LaunchButton { pointer: Vec2 },
    /// Click on the sky itself.
    CanvasClick { pointer: Vec2 },
    /// "Surprise" button: reveal the fortune card and celebrate.
    Surprise { pointer: Vec2 },
    /// "New Fortune" button on the card.
    NewFortune { pointer: Vec2 },
    ToggleSound,
    ToggleAutoLaunch,
    KeyboardBurst,
}

/// Deferred overlay work, released by the same virtual clock as launches.
#[derive(Clone, Copy, Debug, PartialEq)]
enum OverlayEvent {
    Sparkle(Vec2),
    RevealFortune,
}

#[derive(Clone, Debug, Default)]
pub struct FortuneCard {
    pub visible: bool,
    pub text: String,
    /// Card is mid-flip; the next fortune has not been revealed yet.
    pub flipping: bool,
}

/// Explicit simulation context: everything one fireworks show owns.
pub struct ShowState {
    pub field: FireworkField,
    pub launches: LaunchScheduler,
    overlay_timers: TimerQueue<OverlayEvent>,
    ambient: Option<Interval>,
    pub confetti: ConfettiSystem,
    pub sparkles: SparkleLayer,
    fortunes: FortuneDeck,
    pub fortune_card: FortuneCard,
    pub surprise_used: bool,
    pub auto_launch: bool,
    pub bounds: Vec2,
    pub rng: ChaCha8Rng,
    pub seed: u64,
    pub frame_count: u64,
    pub launched_total: u64,
    pub stats: ShowStats,
}

impl ShowState {
    pub fn new(settings: &ShowSettings, seed: u64, bounds: Vec2, now: f64) -> Self {
        let mut launches = LaunchScheduler::new(config::BURST_SPACING_SECS);
        if settings.opening_burst > 0 {
            launches.launch_burst(now + settings.opening_delay_secs, settings.opening_burst);
        }

        let ambient = settings
            .ambient_sparkles
            .then(|| Interval::new(now, config::AMBIENT_SPARKLE_PERIOD_SECS));

        Self {
            field: FireworkField::new(),
            launches,
            overlay_timers: TimerQueue::new(),
            ambient,
            confetti: ConfettiSystem::new(),
            sparkles: SparkleLayer::new(),
            fortunes: FortuneDeck::new(settings.fortunes.clone()),
            fortune_card: FortuneCard::default(),
            surprise_used: false,
            auto_launch: settings.auto_launch,
            bounds,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            frame_count: 0,
            launched_total: 0,
            stats: ShowStats::new(600),
        }
    }

    /// Admit one firework immediately. Missing coordinates are randomized:
    /// x over the full width, target altitude in the top band below 100 px.
    pub fn launch(&mut self, request: LaunchRequest) {
        let x = request
            .x
            .unwrap_or_else(|| self.rng.gen::<f32>() * self.bounds.x);
        let target_y = request.target_y.unwrap_or_else(|| {
            config::TARGET_MIN_ALTITUDE
                + self.rng.gen::<f32>() * self.bounds.y * config::TARGET_BAND_FRACTION
        });
        let color = random_shell_color(&mut self.rng);
        let firework = Firework::new(x, target_y, color, self.bounds.y, &mut self.rng);
        self.field.admit(firework);
        self.launched_total += 1;
    }

    /// Stagger `count` random launches starting at `now`.
    pub fn launch_burst(&mut self, now: f64, count: usize) {
        self.launches.launch_burst(now, count);
    }

    /// One display frame: release due timers, fade, cull, advance and draw,
    /// then maybe launch on our own.
    pub fn tick(&mut self, now: f64, surface: &mut dyn Surface, sound: &mut dyn SoundEffects) {
        self.bounds = surface.size();

        for request in self.launches.due_launches(now) {
            self.launch(request);
        }
        self.run_overlay_timers(now);
        self.confetti.update(now);
        self.sparkles.update(now);

        let (r, g, b) = config::FADE_COLOR;
        surface.fade(with_alpha(rgb(r, g, b), config::FADE_ALPHA));

        self.field.remove_dead();
        let bursts = self.field.advance(&mut self.rng, sound, surface);

        if self.auto_launch && self.rng.gen::<f32>() < config::AUTO_LAUNCH_CHANCE {
            self.launch(LaunchRequest::random());
        }

        self.stats
            .record(self.field.len(), self.field.particle_count(), bursts);
        self.frame_count += 1;
    }

    /// Confetti and sparkles live above the fading sky and are redrawn fresh.
    pub fn draw_overlays(&self, now: f64, surface: &mut dyn Surface) {
        self.confetti.draw(now, surface);
        self.sparkles.draw(now, surface);
    }

    pub fn apply(&mut self, command: ShowCommand, now: f64, sound: &mut dyn SoundEffects) {
        match command {
            ShowCommand::LaunchButton { pointer } => {
                self.launch_burst(now, config::BUTTON_BURST);
                for i in 0..config::BUTTON_SPARKLES {
                    let jitter = vec2(self.rng.gen::<f32>() - 0.5, self.rng.gen::<f32>() - 0.5)
                        * config::BUTTON_SPARKLE_JITTER;
                    self.overlay_timers.schedule(
                        now + config::BUTTON_SPARKLE_SPACING_SECS * i as f64,
                        OverlayEvent::Sparkle(pointer + jitter),
                    );
                }
            }
            ShowCommand::CanvasClick { pointer } => {
                self.launch(LaunchRequest::at(
                    pointer.x,
                    pointer.y * config::CLICK_TARGET_FRACTION,
                ));
                self.sparkles.spawn(pointer, now, &mut self.rng);
            }
            ShowCommand::Surprise { pointer } => {
                if self.surprise_used {
                    return;
                }
                self.surprise_used = true;
                self.fortune_card.visible = true;
                self.fortune_card.text = self.fortunes.draw(&mut self.rng).to_string();
                info!("[FIREWORKS] Surprise revealed after {} frames", self.frame_count);

                self.confetti
                    .burst(pointer, config::SURPRISE_CONFETTI, now, &mut self.rng);
                self.launch_burst(now, config::SURPRISE_BURST);
                sound.play_celebration_sound();
                for i in 0..config::SURPRISE_SPARKLES {
                    let origin = vec2(self.rng.gen::<f32>() * self.bounds.x, self.bounds.y);
                    self.overlay_timers.schedule(
                        now + config::SURPRISE_SPARKLE_SPACING_SECS * i as f64,
                        OverlayEvent::Sparkle(origin),
                    );
                }
            }
            ShowCommand::NewFortune { pointer } => {
                if !self.fortune_card.visible {
                    return;
                }
                self.fortune_card.flipping = true;
                self.overlay_timers
                    .schedule(now + config::FORTUNE_FLIP_SECS, OverlayEvent::RevealFortune);
                sound.play_celebration_sound();
                self.confetti
                    .burst(pointer, config::FORTUNE_CONFETTI, now, &mut self.rng);
            }
            ShowCommand::ToggleSound => {
                let enabled = !sound.is_enabled();
                sound.set_enabled(enabled);
                info!("[FIREWORKS] Sound {}", if enabled { "on" } else { "off" });
                if enabled {
                    sound.play_celebration_sound();
                }
            }
            ShowCommand::ToggleAutoLaunch => {
                self.auto_launch = !self.auto_launch;
                info!(
                    "[FIREWORKS] Autonomous launches {}",
                    if self.auto_launch { "on" } else { "off" }
                );
            }
            ShowCommand::KeyboardBurst => {
                self.launch_burst(now, config::KEYBOARD_BURST);
            }
        }
    }

    fn run_overlay_timers(&mut self, now: f64) {
        for event in self.overlay_timers.drain_due(now) {
            match event {
                OverlayEvent::Sparkle(origin) => self.sparkles.spawn(origin, now, &mut self.rng),
                OverlayEvent::RevealFortune => {
                    self.fortune_card.text = self.fortunes.draw(&mut self.rng).to_string();
                    self.fortune_card.flipping = false;
                }
            }
        }

        let fired = self
            .ambient
            .as_mut()
            .is_some_and(|interval| interval.poll(now));
        if fired && self.rng.gen::<f32>() < config::AMBIENT_SPARKLE_CHANCE {
            let origin = vec2(self.rng.gen::<f32>() * self.bounds.x, self.bounds.y);
            self.sparkles.spawn(origin, now, &mut self.rng);
        }
    }
}
