use crate::{Digits, Error, Result, integer::check_digits};

/// Returns a digit string strictly between `low` and `high`.
///
/// Both arguments are *fractional* digit strings, read as base-`B` fractions
/// (`"V"` is `31/62` under [`BASE_62`]). `high = None` means "no upper bound",
/// in which case the result is simply greater than `low`. The shortest
/// candidate is preferred, growing the result one digit at a time only when
/// the two inputs are adjacent.
///
/// # Errors
///
/// - [`Error::OrderViolation`] if `high` is present and `low >= high`.
/// - [`Error::TrailingZero`] if either input ends in the zero digit.
/// - [`Error::InvalidDigit`] if either input contains a foreign character.
///
/// # Example
/// ```
/// use fracdex::{midpoint, BASE_62};
///
/// assert_eq!(midpoint("", None, &BASE_62).unwrap(), "V");
/// assert_eq!(midpoint("", Some("V"), &BASE_62).unwrap(), "G");
/// assert_eq!(midpoint("a", Some("b"), &BASE_62).unwrap(), "aV");
/// ```
///
/// [`BASE_62`]: crate::BASE_62
pub fn midpoint(low: &str, high: Option<&str>, digits: &Digits) -> Result<String> {
    if let Some(high) = high {
        if low >= high {
            return Err(Error::OrderViolation {
                low: low.to_owned(),
                high: high.to_owned(),
            });
        }
    }
    for part in core::iter::once(low).chain(high) {
        check_digits(part, part, digits)?;
        if part.as_bytes().last() == Some(&digits.zero()) {
            return Err(Error::TrailingZero {
                key: part.to_owned(),
            });
        }
    }

    let mut out = String::with_capacity(low.len().max(high.map_or(0, str::len)) + 1);
    bisect(low.as_bytes(), high.map(str::as_bytes), digits, &mut out);
    Ok(out)
}

/// Appends the midpoint of two validated, ordered digit strings to `out`.
fn bisect(mut low: &[u8], mut high: Option<&[u8]>, digits: &Digits, out: &mut String) {
    let zero = digits.zero();
    let value = |b: u8| digits.index_of(b).unwrap_or(0);

    loop {
        if let Some(h) = high {
            // `low` reads as if padded with zero digits.
            let common = h
                .iter()
                .enumerate()
                .take_while(|&(i, &b)| low.get(i).copied().unwrap_or(zero) == b)
                .count();
            out.extend(h[..common].iter().map(|&b| char::from(b)));
            low = low.get(common..).unwrap_or_default();
            high = Some(&h[common..]);
        }

        let da = low.first().map_or(0, |&b| value(b));
        let db = high
            .and_then(|h| h.first())
            .map_or(digits.base(), |&b| value(b));

        if db > da + 1 {
            out.push(char::from(digits.symbol((da + db).div_ceil(2))));
            return;
        }
        // Adjacent digits: no room at this position.
        if let Some(h) = high.filter(|h| h.len() > 1) {
            out.push(char::from(h[0]));
            return;
        }
        out.push(char::from(digits.symbol(da)));
        low = low.get(1..).unwrap_or_default();
        high = None;
    }
}
