//! Object id generation.
//!
//! Ids are short base-36 strings so they stay compact inside share links.
//! The generator is injected into the board; seeding it makes ids
//! reproducible in tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::constants::OBJECT_ID_LEN;
use crate::types::ObjectId;

const BASE36_DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Source of fresh object ids.
pub trait IdGenerator: Send + Sync {
    fn next_id(&mut self) -> ObjectId;
}

/// Random base-36 ids drawn from a seeded ChaCha stream.
///
/// Uniqueness is probabilistic: 36^8 possible ids.
pub struct RandomIds {
    rng: ChaCha8Rng,
}

impl RandomIds {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> ObjectId {
        let id: String = (0..OBJECT_ID_LEN)
            .map(|_| BASE36_DIGITS[self.rng.gen_range(0..BASE36_DIGITS.len())] as char)
            .collect();
        ObjectId::new(id)
    }
}
