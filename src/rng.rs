//! Random source for card sampling.
//!
//! Sampling never reaches for a process-wide generator: callers build one
//! here and pass it in. ChaCha8 keeps seeded runs identical across platforms.
//!
//! ```
//! use bingo_sheets::{generate, rng::card_rng, GridSize, WordPool};
//!
//! let pool = WordPool::from(&["A", "B", "C", "D"][..]);
//! let a = generate(GridSize::new(2, 2), 3, &pool, &mut card_rng(Some(7))).unwrap();
//! let b = generate(GridSize::new(2, 2), 3, &pool, &mut card_rng(Some(7))).unwrap();
//! assert_eq!(a, b);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generator type used for card sampling.
pub type CardRng = ChaCha8Rng;

/// Build the sampling generator: deterministic when `seed` is given, seeded
/// from OS entropy otherwise.
#[must_use]
pub fn card_rng(seed: Option<u64>) -> CardRng {
    match seed {
        Some(seed) => {
            log::debug!("sampling with fixed seed {}", seed);
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    }
}
