use log::{debug, info, warn};

use crate::denomination::{CLASS_COUNT, Denomination, to_classes};
use crate::error::{Result, WalletError};

/// Largest wallet the solver accepts.
pub const MAX_NOTES: usize = 100_000;

/// Number of subsets of denominations.
pub const MASK_COUNT: usize = 1 << CLASS_COUNT;

// One position of the DP table: best kept count per (mask, last kept class).
type Layer = [[u32; CLASS_COUNT]; MASK_COUNT];

/// Validates the raw note values and returns the minimum number of notes that
/// have to be moved so that every denomination forms a single block.
pub fn solve(values: &[u64]) -> Result<usize> {
    let notes = to_classes(values)?;
    let moves = min_moves(&notes)?;
    info!("The number of transitions are: {}", moves);
    Ok(moves)
}

/// Minimum moves for an already mapped wallet. Fails only when the wallet is
/// larger than [`MAX_NOTES`].
pub fn min_moves(notes: &[Denomination]) -> Result<usize> {
    if notes.len() > MAX_NOTES {
        warn!("rejecting wallet of {} notes (max {})", notes.len(), MAX_NOTES);
        return Err(WalletError::SizeLimitExceeded {
            len: notes.len(),
            max: MAX_NOTES,
        });
    }

    let kept = max_kept(notes) as usize;
    debug!("{} notes, {} can stay in place", notes.len(), kept);
    Ok(notes.len() - kept)
}

/// Largest number of notes that can stay where they are, i.e. the longest
/// subsequence in which every denomination appears as one contiguous run.
///
/// tally[mask][last] holds the best kept count over the processed prefix where
/// `mask` is the set of denominations that have been kept at least once and
/// `last` is the denomination of the most recently kept note. A note of class c
/// can be kept when c has never been kept, or when it extends the open run of c.
/// Everything else has to move.
///
/// Each position only reads the previous one, so two layers are rolled instead
/// of allocating the full (n + 1) x 128 x 7 table.
pub fn max_kept(notes: &[Denomination]) -> u32 {
    // Base case: keeping nothing is always possible.
    let mut tally: Layer = [[0; CLASS_COUNT]; MASK_COUNT];

    for note in notes {
        let c = note.id();
        let bit = 1 << c;

        // Carry forward: the note is moved and every state keeps its count.
        let mut next = tally;

        for mask in 0..MASK_COUNT {
            let unused = mask & bit == 0;
            for last in 0..CLASS_COUNT {
                if unused || last == c {
                    let candidate = tally[mask][last] + 1;
                    let slot = &mut next[mask | bit][c];
                    if candidate > *slot {
                        *slot = candidate;
                    }
                }
            }
        }

        tally = next;
    }

    tally.iter().flatten().copied().max().unwrap_or(0)
}
