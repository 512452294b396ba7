use crate::{
    Digits, Error, Result,
    integer::{
        decrement_integer, increment_integer, is_min_integer, split_integer_part,
        validate_order_key,
    },
    midpoint,
};
use core::mem;

/// Returns the deterministic order key strictly between `low` and `high`.
///
/// `None` stands for an open bound. Integer-part arithmetic is preferred over
/// growing the fractional part, which keeps keys short when items are
/// repeatedly appended or prepended.
///
/// # Errors
///
/// - Any validation error for a malformed bound.
/// - [`Error::OrderViolation`] if `low >= high`.
/// - [`Error::KeyspaceExhausted`] if no integer below `high` can be formed.
///
/// # Example
/// ```
/// use fracdex::{key_between, BASE_62};
///
/// assert_eq!(key_between(None, None, &BASE_62).unwrap(), "a0");
/// assert_eq!(key_between(Some("a0"), None, &BASE_62).unwrap(), "a1");
/// assert_eq!(key_between(None, Some("a0"), &BASE_62).unwrap(), "Zz");
/// assert_eq!(key_between(Some("a0"), Some("a1"), &BASE_62).unwrap(), "a0V");
/// ```
pub fn key_between(low: Option<&str>, high: Option<&str>, digits: &Digits) -> Result<String> {
    check_bounds(low, high, digits)?;
    match (low, high) {
        (None, None) => Ok(first_key(digits)),
        (None, Some(high)) => key_below(high, digits),
        (Some(low), None) => key_above(low, digits),
        (Some(low), Some(high)) => key_inside(low, high, digits),
    }
}

/// Returns `n` strictly increasing deterministic keys between `low` and
/// `high`.
///
/// With one open side the keys form a chain growing away from the closed
/// side. With both sides closed the range is split recursively around a
/// middle key, so fractional parts grow with `log(n)` rather than `n`.
///
/// # Errors
///
/// Same as [`key_between`], plus [`Error::TooManyKeys`] if room for `n` keys
/// cannot be allocated.
///
/// # Example
/// ```
/// use fracdex::{keys_between, BASE_62};
///
/// let keys = keys_between(None, None, 3, &BASE_62).unwrap();
/// assert_eq!(keys, ["a0", "a1", "a2"]);
/// ```
pub fn keys_between(
    low: Option<&str>,
    high: Option<&str>,
    n: usize,
    digits: &Digits,
) -> Result<Vec<String>> {
    match n {
        0 => {
            check_bounds(low, high, digits)?;
            return Ok(Vec::new());
        }
        1 => return Ok(vec![key_between(low, high, digits)?]),
        _ => {}
    }

    match (low, high) {
        (_, None) => {
            let mut keys = with_capacity(n)?;
            let mut last = key_between(low, None, digits)?;
            for _ in 1..n {
                let next = key_between(Some(last.as_str()), None, digits)?;
                keys.push(mem::replace(&mut last, next));
            }
            keys.push(last);
            Ok(keys)
        }
        (None, Some(_)) => {
            let mut keys = with_capacity(n)?;
            let mut first = key_between(None, high, digits)?;
            for _ in 1..n {
                let next = key_between(None, Some(first.as_str()), digits)?;
                keys.push(mem::replace(&mut first, next));
            }
            keys.push(first);
            keys.reverse();
            Ok(keys)
        }
        (Some(low), Some(high)) => {
            let mut keys = with_capacity(n)?;
            split_between(low, high, n, digits, &mut keys)?;
            Ok(keys)
        }
    }
}

/// Appends `n` keys between two closed bounds, placing a middle key first and
/// filling each side recursively.
fn split_between(
    low: &str,
    high: &str,
    n: usize,
    digits: &Digits,
    keys: &mut Vec<String>,
) -> Result<()> {
    if n == 0 {
        return Ok(());
    }
    let half = n / 2;
    let mid = key_between(Some(low), Some(high), digits)?;
    split_between(low, &mid, half, digits, keys)?;
    keys.push(mid.clone());
    split_between(&mid, high, n - half - 1, digits, keys)
}

/// Reserves room for `n` keys, failing instead of aborting on huge counts.
fn with_capacity(n: usize) -> Result<Vec<String>> {
    let mut keys = Vec::new();
    keys.try_reserve_exact(n)
        .map_err(|_| Error::TooManyKeys { count: n })?;
    Ok(keys)
}

fn check_bounds(low: Option<&str>, high: Option<&str>, digits: &Digits) -> Result<()> {
    if let Some(low) = low {
        validate_order_key(low, digits)?;
    }
    if let Some(high) = high {
        validate_order_key(high, digits)?;
    }
    match (low, high) {
        (Some(low), Some(high)) if low >= high => Err(Error::OrderViolation {
            low: low.to_owned(),
            high: high.to_owned(),
        }),
        _ => Ok(()),
    }
}

/// Integer zero with an empty fraction, the first key ever handed out.
fn first_key(digits: &Digits) -> String {
    let mut key = String::with_capacity(2);
    key.push('a');
    key.push(char::from(digits.zero()));
    key
}

fn key_below(high: &str, digits: &Digits) -> Result<String> {
    let (int, frac) = split_integer_part(high)?;
    if is_min_integer(int, digits) {
        return Ok(format!("{int}{}", midpoint("", Some(frac), digits)?));
    }
    // A non-empty fraction means the bare integer already sorts below.
    if int.len() < high.len() {
        return Ok(int.to_owned());
    }
    match decrement_integer(int, digits)? {
        // The reserved minimum is not a usable key on its own.
        Some(prev) if is_min_integer(&prev, digits) => {
            Ok(format!("{prev}{}", midpoint("", None, digits)?))
        }
        Some(prev) => Ok(prev),
        None => Err(Error::KeyspaceExhausted),
    }
}

fn key_above(low: &str, digits: &Digits) -> Result<String> {
    let (int, frac) = split_integer_part(low)?;
    match increment_integer(int, digits)? {
        Some(next) => Ok(next),
        None => Ok(format!("{int}{}", midpoint(frac, None, digits)?)),
    }
}

fn key_inside(low: &str, high: &str, digits: &Digits) -> Result<String> {
    let (int_low, frac_low) = split_integer_part(low)?;
    let (int_high, frac_high) = split_integer_part(high)?;
    if int_low == int_high {
        return Ok(format!(
            "{int_low}{}",
            midpoint(frac_low, Some(frac_high), digits)?
        ));
    }
    let next = increment_integer(int_low, digits)?.ok_or(Error::KeyspaceExhausted)?;
    // Compare against the whole upper key, fraction included.
    if next.as_str() < high {
        return Ok(next);
    }
    Ok(format!("{int_low}{}", midpoint(frac_low, None, digits)?))
}
