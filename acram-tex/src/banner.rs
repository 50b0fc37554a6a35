//! Banner phrases printed at the top of every document.

use rand::{seq::SliceRandom, Rng};

/// The phrases to choose from. They are LaTeX source, so special characters are escaped.
pub const BANNERS: &[&str] = &[
    "Take that, Stephen Wolfram!",
    "Our logarithms are 100\\% natural!",
    "After a few simple but tedious transformations, we obviously get:",
    "Well, this one is obvious anyway.",
    "A derivative? Yes, a derivative\\dots",
];

/// Picks a banner using the given random number generator.
pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    BANNERS.choose(rng).copied().unwrap_or_default()
}

/// Picks a banner at random.
pub fn random() -> &'static str {
    pick(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use super::*;

    #[test]
    fn picks_a_known_banner() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            assert!(BANNERS.contains(&pick(&mut rng)));
        }
        assert!(BANNERS.contains(&random()));
    }
}
