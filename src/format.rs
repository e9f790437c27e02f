//! Fixed-width decimal formatting for the status screen.
//!
//! The screen layout relies on an exact textual contract, so numbers are
//! formatted by hand rather than through `core::fmt`:
//!
//! | Rule            | Behaviour                                         |
//! |-----------------|---------------------------------------------------|
//! | Width           | right-justified, space-padded to `width` chars     |
//! | Fraction        | exactly `precision` digits (0–9)                   |
//! | Rounding        | half away from zero                               |
//! | Sign            | `-` only when the rounded magnitude is non-zero   |
//! | Non-finite      | `nan`, `inf`, `-inf`                              |
//!
//! `format_fixed::<8>(23.45, 4, 1)` yields `"23.5"`,
//! `format_fixed::<8>(5.0, 4, 1)` yields `" 5.0"`.

use core::fmt;

use heapless::String;

/// Largest precision the formatter accepts.
pub const MAX_PRECISION: u8 = 9;

/// Scaled magnitudes at or above this do not fit the integer path.
const MAX_SCALED: f64 = 1.0e18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// The formatted text does not fit the output buffer.
    Capacity,
    /// `precision` exceeds [`MAX_PRECISION`].
    Precision,
    /// The value is too large for the fixed-point path.
    Overflow,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capacity => write!(f, "output buffer too small"),
            Self::Precision => write!(f, "precision too large"),
            Self::Overflow => write!(f, "value out of range"),
        }
    }
}

/// Format `value` with `precision` fractional digits, right-justified to at
/// least `width` characters.
pub fn format_fixed<const N: usize>(
    value: f32,
    width: usize,
    precision: u8,
) -> Result<String<N>, FormatError> {
    if precision > MAX_PRECISION {
        return Err(FormatError::Precision);
    }

    // Longest body: sign + 18 integer digits + '.' + 9 fraction digits.
    let mut body: String<32> = String::new();

    if value.is_nan() {
        push(&mut body, "nan")?;
    } else if value.is_infinite() {
        push(&mut body, if value < 0.0 { "-inf" } else { "inf" })?;
    } else {
        let scale = 10u64.pow(u32::from(precision));
        let magnitude = f64::from(value).abs() * scale as f64 + 0.5;
        if magnitude >= MAX_SCALED {
            return Err(FormatError::Overflow);
        }
        let scaled = magnitude as u64;

        if value.is_sign_negative() && scaled != 0 {
            push(&mut body, "-")?;
        }
        push_digits(&mut body, scaled / scale, 1)?;
        if precision > 0 {
            push(&mut body, ".")?;
            push_digits(&mut body, scaled % scale, usize::from(precision))?;
        }
    }

    let mut out = String::new();
    for _ in body.len()..width {
        out.push(' ').map_err(|_| FormatError::Capacity)?;
    }
    push(&mut out, &body)?;
    Ok(out)
}

fn push<const N: usize>(buf: &mut String<N>, s: &str) -> Result<(), FormatError> {
    buf.push_str(s).map_err(|_| FormatError::Capacity)
}

/// Append the decimal digits of `n`, zero-padded to `min_digits`.
fn push_digits<const N: usize>(
    buf: &mut String<N>,
    mut n: u64,
    min_digits: usize,
) -> Result<(), FormatError> {
    let mut digits = [0u8; 20];
    let mut len = 0;
    while n > 0 || len < min_digits {
        digits[len] = b'0' + (n % 10) as u8;
        n /= 10;
        len += 1;
    }
    for &d in digits[..len].iter().rev() {
        buf.push(char::from(d)).map_err(|_| FormatError::Capacity)?;
    }
    Ok(())
}
