use std::f64::consts::TAU;

use ::rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const SAMPLE_RATE: u32 = 22050;
const DURATION_SECS: f64 = 0.6;

/// Built-in launch blast, used when no sample file can be loaded.
/// A noise crackle over a falling low thump, both decaying exponentially.
pub fn blast_wav() -> Vec<u8> {
    let num_samples = (SAMPLE_RATE as f64 * DURATION_SECS) as usize;
    let mut samples = Vec::with_capacity(num_samples);
    // Same waveform on every run
    let mut rng = ChaCha8Rng::seed_from_u64(0xB1A57);

    for i in 0..num_samples {
        let t = i as f64 / SAMPLE_RATE as f64;

        // Thump sweeps 110 -> 40 Hz
        let freq = 40.0 + 70.0 * (-t * 8.0).exp();
        let thump = (TAU * freq * t).sin() * (-t * 9.0).exp();
        let crackle = rng.gen_range(-1.0..1.0) * (-t * 14.0).exp();
        let attack = (t / 0.005).min(1.0);

        samples.push((attack * (0.6 * thump + 0.4 * crackle)) as f32);
    }

    encode_wav_mono(&samples)
}

/// 16-bit PCM mono WAV.
fn encode_wav_mono(samples: &[f32]) -> Vec<u8> {
    let bytes_per_sample = 2u16;
    let num_channels = 1u16;
    let data_size = samples.len() as u32 * bytes_per_sample as u32;
    let file_size = 36 + data_size;

    let mut buf = Vec::with_capacity(file_size as usize + 8);
    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&file_size.to_le_bytes());
    buf.extend_from_slice(b"WAVE");

    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes());
    buf.extend_from_slice(&1u16.to_le_bytes()); // PCM
    buf.extend_from_slice(&num_channels.to_le_bytes());
    buf.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    let block_align = num_channels * bytes_per_sample;
    buf.extend_from_slice(&(SAMPLE_RATE * block_align as u32).to_le_bytes());
    buf.extend_from_slice(&block_align.to_le_bytes());
    buf.extend_from_slice(&(bytes_per_sample * 8).to_le_bytes());

    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&data_size.to_le_bytes());
    for &sample in samples {
        let pcm = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        buf.extend_from_slice(&pcm.to_le_bytes());
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u32_at(bytes: &[u8], at: usize) -> u32 {
        u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
    }

    #[test]
    fn blast_is_a_well_formed_pcm_wav() {
        let wav = blast_wav();
        assert_eq!(&wav[..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(u32_at(&wav, 24), SAMPLE_RATE);
        assert_eq!(&wav[36..40], b"data");

        let data_size = u32_at(&wav, 40) as usize;
        assert_eq!(data_size, (SAMPLE_RATE as f64 * DURATION_SECS) as usize * 2);
        assert_eq!(wav.len(), 44 + data_size);
        assert_eq!(u32_at(&wav, 4) as usize, wav.len() - 8);
    }

    #[test]
    fn blast_is_audible_and_decays() {
        let wav = blast_wav();
        let pcm: Vec<i16> = wav[44..]
            .chunks_exact(2)
            .map(|b| i16::from_le_bytes([b[0], b[1]]))
            .collect();
        let peak = |range: &[i16]| range.iter().map(|s| s.unsigned_abs()).max().unwrap_or(0);

        let head = peak(&pcm[..pcm.len() / 6]);
        let tail = peak(&pcm[pcm.len() * 5 / 6..]);
        assert!(head > 4000, "head peak {head}");
        assert!(tail < head / 4, "tail {tail} vs head {head}");
        assert_eq!(wav, blast_wav());
    }
}
