/// Abbreviate a number to thousands, grouping digits by three
///
/// `"10000000"` becomes `"10 000k"`. Inputs shorter than four characters are
/// returned unchanged.
pub fn make_number_readable(number: &str) -> String {
    let digits: Vec<char> = number.chars().collect();
    if digits.len() < 4 {
        return number.to_string();
    }

    let thousands = &digits[..digits.len() - 3];
    let first_group = match thousands.len() % 3 {
        0 => 3,
        n => n,
    };

    let mut readable: String = thousands[..first_group].iter().collect();
    for group in thousands[first_group..].chunks(3) {
        readable.push(' ');
        readable.extend(group);
    }
    readable.push('k');
    readable
}

/// Greatest common divisor; `gcd(0, n) == n`
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
