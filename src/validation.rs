/// Luhn mod-10 check over the decimal digits of `card_number`.
///
/// Separators and whitespace are ignored; an input with no digits at all is
/// rejected rather than treated as checksum 0.
pub fn is_valid_card(card_number: &str) -> bool {
    let digits: Vec<u32> = card_number.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.is_empty() {
        return false;
    }

    let mut checksum = 0;
    let mut double = false;
    for &d in digits.iter().rev() {
        let mut d = d;
        if double {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        checksum += d;
        double = !double;
    }
    checksum % 10 == 0
}

/// Valid iff `cvv` is exactly 3 or 4 ASCII decimal digits.
pub fn is_valid_cvv(cvv: &str) -> bool {
    matches!(cvv.len(), 3 | 4) && cvv.bytes().all(|b| b.is_ascii_digit())
}
