// src/sheet/column.rs
//! Spreadsheet column labels: bijective base-26 over `A..=Z` (no zero digit).

use crate::error::{Error, Result};

/// `1 → "A"`, `26 → "Z"`, `27 → "AA"`, `52 → "AZ"`. Fails only on `0`.
pub fn column_letter(n: u32) -> Result<String> {
    if n == 0 {
        return Err(Error::InvalidColumn(s!("column index must be 1 or more")));
    }
    let mut n = n;
    let mut rev = Vec::with_capacity(3);
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        rev.push(char::from(b'A' + rem));
        n = (n - 1) / 26;
    }
    Ok(rev.into_iter().rev().collect())
}

/// Inverse of [`column_letter`]. Case-insensitive.
pub fn column_index(label: &str) -> Result<u32> {
    let label = label.trim();
    if label.is_empty() {
        return Err(Error::InvalidColumn(s!("empty column label")));
    }
    let mut n: u32 = 0;
    for ch in label.chars() {
        if !ch.is_ascii_alphabetic() {
            return Err(Error::InvalidColumn(format!("{label:?}")));
        }
        let digit = u32::from(ch.to_ascii_uppercase() as u8 - b'A') + 1;
        n = n
            .checked_mul(26)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| Error::InvalidColumn(format!("{label:?} is out of range")))?;
    }
    Ok(n)
}

/// A1-style cell reference, e.g. `a1(42, 15) == "O42"`.
pub fn a1(row: u32, col: u32) -> Result<String> {
    if row == 0 {
        return Err(Error::InvalidColumn(s!("row index must be 1 or more")));
    }
    Ok(format!("{}{row}", column_letter(col)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_for_known_indices() {
        assert_eq!(column_letter(1).unwrap(), "A");
        assert_eq!(column_letter(7).unwrap(), "G");
        assert_eq!(column_letter(26).unwrap(), "Z");
        assert_eq!(column_letter(27).unwrap(), "AA");
        assert_eq!(column_letter(52).unwrap(), "AZ");
        assert_eq!(column_letter(53).unwrap(), "BA");
        assert_eq!(column_letter(702).unwrap(), "ZZ");
        assert_eq!(column_letter(703).unwrap(), "AAA");
    }

    #[test]
    fn zero_is_rejected() {
        assert!(column_letter(0).is_err());
        assert!(a1(0, 1).is_err());
    }

    #[test]
    fn index_inverts_letter() {
        for n in [1, 2, 25, 26, 27, 51, 52, 700, 16_384] {
            assert_eq!(column_index(&column_letter(n).unwrap()).unwrap(), n);
        }
        assert_eq!(column_index("ao").unwrap(), 41);
        assert!(column_index("").is_err());
        assert!(column_index("A1").is_err());
    }

    #[test]
    fn a1_reference() {
        assert_eq!(a1(42, 15).unwrap(), "O42");
        assert_eq!(a1(1, 27).unwrap(), "AA1");
    }
}
