use std::fmt;

/// Reasons a wallet is rejected before (or while) it is loaded.
#[derive(Debug)]
pub enum WalletError {
    /// A note value outside the recognised denominations.
    InvalidDenomination { index: usize, value: u64 },
    /// More notes than the solver is sized for.
    SizeLimitExceeded { len: usize, max: usize },
    /// A token in the input that is not an integer.
    InvalidInputShape { index: usize, token: String },
    Io(std::io::Error),
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletError::InvalidDenomination { index, value } => {
                write!(f, "invalid denomination {} at position {}", value, index)
            }
            WalletError::SizeLimitExceeded { len, max } => {
                write!(f, "wallet holds {} notes, at most {} are supported", len, max)
            }
            WalletError::InvalidInputShape { index, token } => {
                write!(f, "expected an integer note value at position {}, found {:?}", index, token)
            }
            WalletError::Io(err) => write!(f, "could not read notes: {}", err),
        }
    }
}

impl std::error::Error for WalletError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WalletError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        WalletError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, WalletError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = WalletError::InvalidDenomination { index: 3, value: 999 };
        assert_eq!(err.to_string(), "invalid denomination 999 at position 3");

        let err = WalletError::SizeLimitExceeded { len: 7, max: 5 };
        assert_eq!(err.to_string(), "wallet holds 7 notes, at most 5 are supported");
    }
}
