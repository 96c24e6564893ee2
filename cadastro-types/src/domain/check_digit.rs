//! Modulo-11 verifier digits used by CPF and CNPJ.
//!
//! Both documents compute a digit from everything before it: each digit is
//! multiplied by a weight assigned from the rightmost position leftward, the
//! products are summed, and the sum is reduced modulo 11. The schemes only
//! differ in how the weights grow.

/// How weights are assigned, starting at 2 on the rightmost digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weighting {
    /// 2, 3, 4, ... without bound (CPF).
    Ascending,
    /// 2, 3, ..., `max`, then back to 2 (CNPJ uses `max = 9`).
    Cyclic { max: u32 },
}

impl Weighting {
    fn weights(self) -> impl Iterator<Item = u32> {
        let mut next = 2;
        std::iter::from_fn(move || {
            let weight = next;
            next = match self {
                Weighting::Cyclic { max } if next >= max => 2,
                _ => next + 1,
            };
            Some(weight)
        })
    }
}

/// Computes one verifier digit over `digits`.
pub fn verifier_digit(digits: &[u8], weighting: Weighting) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .zip(weighting.weights())
        .map(|(&d, w)| u32::from(d) * w)
        .sum();

    match sum % 11 {
        0 | 1 => 0,
        rem => (11 - rem) as u8,
    }
}

/// Computes both verifier digits for `base`.
///
/// The second digit is computed over `base` followed by the first one.
pub fn check_digits(base: &[u8], weighting: Weighting) -> [u8; 2] {
    let first = verifier_digit(base, weighting);

    let mut extended = Vec::with_capacity(base.len() + 1);
    extended.extend_from_slice(base);
    extended.push(first);

    [first, verifier_digit(&extended, weighting)]
}

#[cfg(test)]
mod tests {
    use super::*;

    const CNPJ: Weighting = Weighting::Cyclic { max: 9 };

    #[test]
    fn test_ascending_weights() {
        let w: Vec<u32> = Weighting::Ascending.weights().take(10).collect();
        assert_eq!(w, vec![2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn test_cyclic_weights_wrap_after_nine() {
        let w: Vec<u32> = CNPJ.weights().take(13).collect();
        assert_eq!(w, vec![2, 3, 4, 5, 6, 7, 8, 9, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_cpf_check_digits() {
        // 249.715.637-92
        assert_eq!(
            check_digits(&[2, 4, 9, 7, 1, 5, 6, 3, 7], Weighting::Ascending),
            [9, 2]
        );
    }

    #[test]
    fn test_cnpj_check_digits() {
        // 11.444.777/0001-61
        assert_eq!(
            check_digits(&[1, 1, 4, 4, 4, 7, 7, 7, 0, 0, 0, 1], CNPJ),
            [6, 1]
        );
    }

    #[test]
    fn test_low_remainders_map_to_zero() {
        // sum = 11 -> remainder 0
        assert_eq!(verifier_digit(&[3, 1], Weighting::Ascending), 0);
        // sum = 12 -> remainder 1
        assert_eq!(verifier_digit(&[6], Weighting::Ascending), 0);
        // sum = 2 -> remainder 2 -> 9
        assert_eq!(verifier_digit(&[1], Weighting::Ascending), 9);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(verifier_digit(&[], CNPJ), 0);
    }
}
