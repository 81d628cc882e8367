//! Local quotes served when the upstream provider cannot be reached.

use rand::Rng;

/// Never empty.
pub const FALLBACK_QUOTES: [&str; 4] = [
    "Simplicity is the ultimate sophistication. - Leonardo da Vinci",
    "First, solve the problem. Then, write the code. - John Johnson",
    "Premature optimization is the root of all evil. - Donald Knuth",
    "Talk is cheap. Show me the code. - Linus Torvalds",
];

/// Picks the fallback at `index`, wrapping around the list.
pub fn fallback_quote(index: usize) -> &'static str {
    FALLBACK_QUOTES[index % FALLBACK_QUOTES.len()]
}

/// Picks a fallback at random.
pub fn random_fallback() -> &'static str {
    fallback_quote(rand::thread_rng().gen_range(0..FALLBACK_QUOTES.len()))
}
