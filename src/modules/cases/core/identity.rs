// Numeric suffixes for case codes.
//
// A suffix source only has to make collisions unlikely. Uniqueness is enforced by
// the case store, which rejects duplicate codes so the creator can mint again.

use crate::modules::cases::core::case::CaseCode;
use std::sync::atomic::{AtomicU32, Ordering};
use uuid::Uuid;

pub const SUFFIX_SPACE: u32 = 1_000_000;

pub trait SuffixSource: Send + Sync {
    fn next_suffix(&self) -> u32;
}

/// Draws the suffix from the random bits of a v7 uuid.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSuffix;

impl SuffixSource for RandomSuffix {
    fn next_suffix(&self) -> u32 {
        (Uuid::now_v7().as_u128() % SUFFIX_SPACE as u128) as u32
    }
}

#[derive(Debug)]
pub struct SequentialSuffix {
    next: AtomicU32,
}

impl SequentialSuffix {
    pub fn starting_at(first: u32) -> Self {
        Self {
            next: AtomicU32::new(first),
        }
    }
}

impl SuffixSource for SequentialSuffix {
    fn next_suffix(&self) -> u32 {
        self.next.fetch_add(1, Ordering::SeqCst) % SUFFIX_SPACE
    }
}

pub fn mint_code(prefix: &str, suffixes: &dyn SuffixSource) -> CaseCode {
    CaseCode::compose(prefix, suffixes.next_suffix())
}
