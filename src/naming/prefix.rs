//! Bijective base-24 prefixes over the Greek alphabet.
//!
//! Indices 0..=23 map to a single letter, 24..=599 to two letters joined by
//! `-`, 600.. to three, and so on. There is no zero digit, so every index has
//! exactly one prefix and no two indices share one.

use crate::consts::SEPARATOR;

/// Digit symbols in order; `GREEK_ALPHABET[0]` is the first project prefix.
pub(crate) const GREEK_ALPHABET: [&str; 24] = [
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
    "lambda", "mu", "nu", "xi", "omicron", "pi", "rho", "sigma", "tau", "upsilon", "phi", "chi",
    "psi", "omega",
];

const BASE: u64 = GREEK_ALPHABET.len() as u64;

/// Map an index to its prefix, most significant letter first.
pub(crate) fn prefix_for(index: u64) -> String {
    if index < BASE {
        return GREEK_ALPHABET[index as usize].to_string();
    }

    let mut letters = Vec::new();
    let mut n = index;
    loop {
        letters.push(GREEK_ALPHABET[(n % BASE) as usize]);
        if n < BASE {
            break;
        }
        // n >= BASE here, so n / BASE >= 1
        n = n / BASE - 1;
    }
    letters.reverse();
    letters.join(SEPARATOR)
}
