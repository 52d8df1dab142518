//! Seed derivation and the Lehmer pseudo-random stream behind map generation.
//!
//! The stream is part of the crate's golden-fixture contract: draws are never
//! reordered, and all float math stays in single precision.

const MULTIPLIER: i32 = 48_271;
const MODULUS: i32 = 2_147_483_647;
const SCHRAGE_QUOTIENT: i32 = 44_488;
const SCHRAGE_REMAINDER: i32 = 3_399;

/// Folds an arbitrary seed string into an integer seed. Each byte is XORed in
/// at a shift that cycles through 0..24, so long strings keep contributing
/// entropy to the low bits instead of vanishing past bit 31.
pub fn derive_seed(seed_text: &str) -> i32 {
    let mut seed = 0_i32;
    let mut shift = 0_u32;
    for byte in seed_text.bytes() {
        seed ^= i32::from(byte) << shift;
        shift = (shift + 1) % 24;
    }
    seed
}

/// Minimal-standard Lehmer generator (multiplier 48271 over 2^31 - 1),
/// stepped with Schrage's decomposition so every intermediate fits in `i32`.
pub(super) struct Lehmer31 {
    state: i32,
}

impl Lehmer31 {
    /// Seeds the stream, masking to 31 bits and coercing zero to one so the
    /// generator can never get stuck on the fixed point.
    pub(super) fn seeded(seed: i32) -> Self {
        let state = seed & 0x7fff_ffff;
        Self { state: if state == 0 { 1 } else { state } }
    }

    fn next_state(&mut self) -> i32 {
        self.state = MULTIPLIER * (self.state % SCHRAGE_QUOTIENT)
            - SCHRAGE_REMAINDER * (self.state / SCHRAGE_QUOTIENT);
        if self.state < 0 {
            self.state += MODULUS;
        }
        self.state
    }

    /// Uniform float in (0, 1): the low 16 bits of the state, offset by half
    /// a bucket.
    pub(super) fn next_unit(&mut self) -> f32 {
        let low_bits = self.next_state() & 0xffff;
        low_bits as f32 / 65_536.0 + 0.5 / 65_536.0
    }

    /// Uniform integer over the inclusive range [from, to]; reversed bounds
    /// are swapped rather than rejected.
    pub(super) fn roll(&mut self, from: i32, to: i32) -> i32 {
        let (from, to) = if to < from { (to, from) } else { (from, to) };
        (self.next_unit() * (to - from + 1) as f32) as i32 + from
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_fold_matches_reference_values() {
        assert_eq!(derive_seed("MyMap"), 1_411);
        assert_eq!(derive_seed("d9341"), 618);
        assert_eq!(derive_seed(""), 0);
        assert_eq!(derive_seed("a"), 97);
        assert_eq!(derive_seed("ab"), 97 ^ (98 << 1));
    }

    #[test]
    fn seed_fold_shift_cycles_back_to_zero_after_24_bytes() {
        let base = "x".repeat(24);
        let extended = format!("{base}y");
        assert_eq!(derive_seed(&extended), derive_seed(&base) ^ i32::from(b'y'));
    }

    #[test]
    fn state_sequence_matches_reference_values() {
        let mut rng = Lehmer31::seeded(1_411);
        assert_eq!(rng.next_state(), 68_110_381);
        assert_eq!(rng.next_state(), 2_106_221_341);
    }

    #[test]
    fn zero_seed_is_coerced_to_one() {
        let mut from_zero = Lehmer31::seeded(0);
        let mut from_one = Lehmer31::seeded(1);
        assert_eq!(from_zero.next_state(), from_one.next_state());
    }

    #[test]
    fn first_roll_for_known_seed_matches_reference_value() {
        let mut rng = Lehmer31::seeded(1_411);
        assert_eq!(rng.roll(10, 15), 11);
    }

    #[test]
    fn rolls_stay_inside_the_inclusive_range_and_swap_reversed_bounds() {
        let mut rng = Lehmer31::seeded(987_654);
        for _ in 0..1_000 {
            let value = rng.roll(3, 7);
            assert!((3..=7).contains(&value));
        }
        let mut forward = Lehmer31::seeded(42);
        let mut reversed = Lehmer31::seeded(42);
        for _ in 0..100 {
            assert_eq!(forward.roll(1, 2), reversed.roll(2, 1));
        }
    }

    #[test]
    fn unit_draws_stay_inside_the_half_open_interval() {
        let mut rng = Lehmer31::seeded(314_159);
        for _ in 0..1_000 {
            let value = rng.next_unit();
            assert!(value > 0.0 && value < 1.0);
        }
    }

    #[test]
    fn identical_seeds_produce_identical_streams() {
        let mut left = Lehmer31::seeded(777);
        let mut right = Lehmer31::seeded(777);
        for _ in 0..256 {
            assert_eq!(left.next_state(), right.next_state());
        }
    }
}
