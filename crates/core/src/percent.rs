//! Percentage rounding shared by progress and score computations.
//!
//! Every derived percentage in CareerPath goes through [`ratio`], which
//! rounds half to even in exact integer arithmetic. `1 of 8` milestones is
//! therefore 12 (12.5 rounds down to the even neighbour) and `3 of 8` is 38.

/// Round `100 * num / den` to the nearest integer, ties to even.
///
/// Returns 0 when `den` is 0.
pub fn ratio(num: u64, den: u64) -> u64 {
    if den == 0 {
        return 0;
    }
    div_round_even(num.saturating_mul(100), den)
}

/// Round `num / den` to the nearest integer, ties to even.
///
/// Returns 0 when `den` is 0.
pub fn div_round_even(num: u64, den: u64) -> u64 {
    if den == 0 {
        return 0;
    }
    let quotient = num / den;
    let twice_rem = (num % den) * 2;
    if twice_rem > den || (twice_rem == den && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

/// [`ratio`] narrowed to a 0-100 percentage.
///
/// `num` larger than `den` saturates at 100.
pub fn percentage(num: u64, den: u64) -> u8 {
    ratio(num, den).min(100) as u8
}
