//! Randomized display content.
//!
//! All randomness used by the fragment handlers goes through
//! [`ContentRandomizer`], so handlers never call the RNG directly and tests
//! can drive the same picks from a seeded generator via the `*_with` twins.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Quotes shown in the dynamic content fragment.
const QUOTES: &[&str] = &[
    "Subscribe to the newsletter.",
    "Certify your skills with our assessment program.",
    "Test your knowledge with our skill quizzes.",
    "Fund your certification through your training budget.",
];

/// Background color classes for the dynamic content fragment.
const COLORS: &[&str] = &[
    "bg-blue-100",
    "bg-green-100",
    "bg-yellow-100",
    "bg-pink-100",
    "bg-purple-100",
];

/// Probability that the simulated status reads "online".
const ONLINE_PROBABILITY: f64 = 0.3;

/// Source of randomized display content.
///
/// Stateless; every pick is independent.
pub struct ContentRandomizer;

impl ContentRandomizer {
    /// Pick a quote uniformly from the fixed list.
    #[must_use]
    pub fn pick_quote() -> &'static str {
        Self::pick_quote_with(&mut rand::rng())
    }

    /// Pick a quote using the supplied generator.
    #[must_use]
    pub fn pick_quote_with<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
        QUOTES.choose(rng).copied().unwrap_or_default()
    }

    /// Pick a background color class uniformly from the fixed list.
    #[must_use]
    pub fn pick_color() -> &'static str {
        Self::pick_color_with(&mut rand::rng())
    }

    /// Pick a background color class using the supplied generator.
    #[must_use]
    pub fn pick_color_with<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
        COLORS.choose(rng).copied().unwrap_or_default()
    }

    /// Simulate the online status: true with probability 0.3.
    #[must_use]
    pub fn pick_online_status() -> bool {
        Self::pick_online_status_with(&mut rand::rng())
    }

    /// Simulate the online status using the supplied generator.
    #[must_use]
    pub fn pick_online_status_with<R: Rng + ?Sized>(rng: &mut R) -> bool {
        rng.random_bool(ONLINE_PROBABILITY)
    }
}
