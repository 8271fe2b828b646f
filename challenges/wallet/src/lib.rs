//! Minimum number of notes to move so that a wallet is grouped by denomination.

pub mod denomination;
pub mod error;
pub mod input;
pub mod solver;

pub use denomination::{CLASS_COUNT, DENOMINATIONS, Denomination};
pub use error::{Result, WalletError};
pub use solver::{MAX_NOTES, max_kept, min_moves, solve};
