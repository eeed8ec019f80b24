use ::rand::Rng;

use crate::audio::SoundEffects;
use crate::firework::{ExplosionPattern, Firework};
use crate::surface::Surface;

/// The live set of fireworks. Order carries no meaning.
#[derive(Default)]
pub struct FireworkField {
    fireworks: Vec<Firework>,
    last_pattern: Option<ExplosionPattern>,
}

impl FireworkField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn admit(&mut self, firework: Firework) {
        self.fireworks.push(firework);
    }

    /// Drop fully spent fireworks in place. Returns how many were removed.
    pub fn remove_dead(&mut self) -> usize {
        let before = self.fireworks.len();
        self.fireworks.retain(|f| !f.is_dead());
        before - self.fireworks.len()
    }

    /// Update then draw each live firework, one at a time.
    /// Returns the number of shells that burst during this pass.
    pub fn advance(
        &mut self,
        rng: &mut impl Rng,
        sound: &mut dyn SoundEffects,
        surface: &mut dyn Surface,
    ) -> u32 {
        let mut bursts = 0;
        for firework in &mut self.fireworks {
            let was_climbing = !firework.exploded();
            firework.update(rng, sound);
            if was_climbing && firework.exploded() {
                bursts += 1;
                self.last_pattern = firework.pattern();
            }
            firework.draw(surface);
        }
        bursts
    }

    pub fn len(&self) -> usize {
        self.fireworks.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.fireworks.is_empty()
    }

    pub fn particle_count(&self) -> usize {
        self.fireworks.iter().map(|f| f.particles().len()).sum()
    }

    pub fn climbing_count(&self) -> usize {
        self.fireworks.iter().filter(|f| !f.exploded()).count()
    }

    pub fn last_pattern(&self) -> Option<ExplosionPattern> {
        self.last_pattern
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Firework> {
        self.fireworks.iter()
    }
}
