use ::rand::Rng;

pub const DEFAULT_FORTUNES: [&str; 15] = [
    "2026 brings you unexpected opportunities that will change your life for the better!",
    "Your creativity will reach new heights this year. Trust your unique vision!",
    "A meaningful connection awaits you in the coming months. Keep your heart open!",
    "Financial abundance flows your way in 2026. Smart decisions lead to prosperity!",
    "Your health journey takes a positive turn. Energy and vitality are yours!",
    "A long-held dream finally becomes reality this year. Believe in yourself!",
    "Travel and adventure are written in your stars for 2026. Pack your bags!",
    "Your kindness creates ripples that return as waves of joy. Keep spreading love!",
    "A mentor or guide appears when you need them most. Wisdom is coming!",
    "2026 is YOUR year to shine. The spotlight finds you!",
    "Unexpected laughter and joy fill your days. Embrace every moment!",
    "Your hard work pays off in spectacular ways. Success is inevitable!",
    "Love deepens and grows stronger than ever in 2026. Cherish your connections!",
    "A creative project brings you recognition and fulfillment. Start creating!",
    "Peace and harmony become your constant companions this year. Breathe deeply!",
];

/// Draws fortunes without repeats until every one has been shown once.
pub struct FortuneDeck {
    fortunes: Vec<String>,
    used: Vec<bool>,
    remaining: usize,
}

impl FortuneDeck {
    /// An empty list falls back to the built-in fortunes.
    pub fn new(fortunes: Vec<String>) -> Self {
        let fortunes = if fortunes.is_empty() {
            DEFAULT_FORTUNES.iter().map(|s| s.to_string()).collect()
        } else {
            fortunes
        };
        let len = fortunes.len();
        Self {
            fortunes,
            used: vec![false; len],
            remaining: len,
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.fortunes.len()
    }

    pub fn draw(&mut self, rng: &mut impl Rng) -> &str {
        if self.remaining == 0 {
            self.used.iter_mut().for_each(|u| *u = false);
            self.remaining = self.fortunes.len();
        }

        // Pick uniformly among the unused entries
        let mut pick = rng.gen_range(0..self.remaining);
        let mut chosen = 0;
        for (idx, used) in self.used.iter().enumerate() {
            if *used {
                continue;
            }
            if pick == 0 {
                chosen = idx;
                break;
            }
            pick -= 1;
        }

        self.used[chosen] = true;
        self.remaining -= 1;
        &self.fortunes[chosen]
    }
}
