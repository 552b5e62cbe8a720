//! Feedback evaluation - the Mastermind scoring rule
//!
//! Two passes over the pair of codes:
//!
//! 1. **Exact**: same color in the same slot. Each such slot is marked
//!    consumed, on both sides, so it cannot score again.
//! 2. **Partial**: per-color counts over the slots left unconsumed on each
//!    side; each color scores `min(secret_left, guess_left)`.
//!
//! A slot is therefore consumed at most once in total, which keeps
//! `exact + partial <= CODE_LEN` even with repeated colors.

use crate::types::{Code, Feedback, CODE_LEN, PALETTE_SIZE};

/// Score `guess` against `secret`.
///
/// # Examples
///
/// ```
/// use mastermind_core::evaluate;
/// use mastermind_core::types::{Code, Feedback};
///
/// let secret: Code = "1123".parse().unwrap();
/// let guess: Code = "1114".parse().unwrap();
/// assert_eq!(evaluate(&secret, &guess), Feedback::new(2, 0));
/// ```
pub fn evaluate(secret: &Code, guess: &Code) -> Feedback {
    let mut consumed = [false; CODE_LEN];
    let mut exact = 0u8;

    for i in 0..CODE_LEN {
        if secret[i] == guess[i] {
            consumed[i] = true;
            exact += 1;
        }
    }

    let mut secret_left = [0u8; PALETTE_SIZE];
    let mut guess_left = [0u8; PALETTE_SIZE];
    for i in (0..CODE_LEN).filter(|&i| !consumed[i]) {
        secret_left[secret[i].slot()] += 1;
        guess_left[guess[i].slot()] += 1;
    }

    let partial = secret_left
        .iter()
        .zip(guess_left.iter())
        .map(|(&s, &g)| s.min(g))
        .sum::<u8>();

    debug_assert!(exact as usize + partial as usize <= CODE_LEN);
    Feedback::new(exact, partial)
}
