//! Motivational lines shown on the dashboard.

use rand::seq::IndexedRandom;
use rand::Rng;

pub const MOTIVATIONAL_QUOTES: [&str; 8] = [
    "Your health is an investment, not an expense.",
    "Take care of your body. It's the only place you have to live.",
    "Small steps every day lead to big changes.",
    "Progress, not perfection.",
    "Your body can stand almost anything. It's your mind you have to convince.",
    "Health is wealth. Invest wisely.",
    "Every workout is progress. Every healthy meal is progress.",
    "Believe in yourself and all that you are.",
];

/// Picks one quote uniformly at random.
pub fn random_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    MOTIVATIONAL_QUOTES
        .choose(rng)
        .copied()
        .unwrap_or(MOTIVATIONAL_QUOTES[0])
}
