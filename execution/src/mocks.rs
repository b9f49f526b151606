use rand::{rngs::StdRng, Rng, SeedableRng};

/// Generates a reproducible sequence of non-tie score pairs.
pub fn create_score_pairs(seed: u64, count: usize) -> Vec<(u8, u8)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| create_score_pair(&mut rng)).collect()
}

/// Draws one non-tie score pair with both scores in 0-9.
pub fn create_score_pair(rng: &mut impl Rng) -> (u8, u8) {
    loop {
        let player = rng.gen_range(0..=9u8);
        let banker = rng.gen_range(0..=9u8);
        if player != banker {
            return (player, banker);
        }
    }
}
