//! Payment card numbers.

use super::digits::DigitSequence;

/// True when `raw` has 13 to 19 digits and passes the Luhn checksum.
pub fn is_valid_card_number(raw: &str) -> bool {
    let digits = DigitSequence::from_raw(raw);
    if !(13..=19).contains(&digits.len()) {
        return false;
    }
    luhn_sum(digits.as_slice()) % 10 == 0
}

fn luhn_sum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d);
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum()
}
