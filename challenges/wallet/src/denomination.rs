use log::warn;

use crate::error::{Result, WalletError};

/// Number of distinct note values a wallet may hold.
pub const CLASS_COUNT: usize = 7;

/// A recognised banknote. The discriminant is the class id used by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Denomination {
    Ten = 0,
    Twenty = 1,
    Fifty = 2,
    Hundred = 3,
    TwoHundred = 4,
    FiveHundred = 5,
    TwoThousand = 6,
}

/// Every denomination in id order, paired with its face value.
pub const DENOMINATIONS: [(Denomination, u64); CLASS_COUNT] = [
    (Denomination::Ten, 10),
    (Denomination::Twenty, 20),
    (Denomination::Fifty, 50),
    (Denomination::Hundred, 100),
    (Denomination::TwoHundred, 200),
    (Denomination::FiveHundred, 500),
    (Denomination::TwoThousand, 2000),
];

impl Denomination {
    pub fn from_value(value: u64) -> Option<Denomination> {
        DENOMINATIONS
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(d, _)| *d)
    }

    pub fn from_id(id: usize) -> Option<Denomination> {
        DENOMINATIONS.get(id).map(|(d, _)| *d)
    }

    #[inline(always)]
    pub fn id(self) -> usize {
        self as usize
    }

    pub fn value(self) -> u64 {
        DENOMINATIONS[self.id()].1
    }
}

/// Maps raw note values onto denominations, rejecting the first value that
/// is not a recognised note.
pub fn to_classes(values: &[u64]) -> Result<Vec<Denomination>> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            Denomination::from_value(value).ok_or_else(|| {
                warn!("rejecting note {} at position {}", value, index);
                WalletError::InvalidDenomination { index, value }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_value_order() {
        for (id, (d, value)) in DENOMINATIONS.iter().enumerate() {
            assert_eq!(d.id(), id);
            assert_eq!(d.value(), *value);
            assert_eq!(Denomination::from_id(id), Some(*d));
        }
        assert_eq!(Denomination::from_id(CLASS_COUNT), None);
    }

    #[test]
    fn test_example() {
        let classes = to_classes(&[100, 200, 10, 2000]).unwrap();
        assert_eq!(
            classes,
            vec![
                Denomination::Hundred,
                Denomination::TwoHundred,
                Denomination::Ten,
                Denomination::TwoThousand
            ]
        );
    }

    #[test]
    fn test_rejects_unknown_value() {
        match to_classes(&[10, 999, 20]) {
            Err(WalletError::InvalidDenomination { index, value }) => {
                assert_eq!(index, 1);
                assert_eq!(value, 999);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(Denomination::from_value(0).is_none());
        assert!(Denomination::from_value(1000).is_none());
    }
}
