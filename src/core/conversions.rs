//! Caller-facing value coercions and log redaction helpers.

use crate::core::QuartersError;

const TOKEN_MASK_PREFIX_LEN: usize = 6;
const TOKEN_MASK_SUFFIX_LEN: usize = 4;

/// An amount of Quarters (or a token count) supplied by the caller.
///
/// Amounts can be given either as integers or as strings (for example straight
/// from a form field). They are coerced to an integer before being sent:
///
/// - integers pass through unchanged;
/// - strings are trimmed, and an optionally signed run of digits is parsed;
/// - decimal strings are truncated toward zero (`"5.9"` becomes `5`);
/// - anything else is rejected with a validation error.
///
/// A value that coerces to zero is treated as missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quantity {
    /// An already-numeric amount.
    Int(i64),
    /// A textual amount that still needs parsing.
    Text(String),
}

impl Quantity {
    /// Coerces the quantity to a non-zero integer.
    ///
    /// `field` names the argument in the validation error.
    ///
    /// # Errors
    ///
    /// Returns [`QuartersError::Validation`] if the value is empty, zero, or not numeric.
    pub fn to_int(&self, field: &str) -> Result<i64, QuartersError> {
        let n = match self {
            Self::Int(n) => *n,
            Self::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Err(QuartersError::required(field));
                }
                parse_integer(s).ok_or_else(|| {
                    QuartersError::validation(format!("{field} must be an integer"))
                })?
            }
        };
        if n == 0 {
            return Err(QuartersError::required(field));
        }
        Ok(n)
    }
}

fn parse_integer(s: &str) -> Option<i64> {
    if let Ok(n) = s.parse::<i64>() {
        return Some(n);
    }

    // Accept "12.50" style input, dropping the fractional part.
    let (int_part, frac_part) = s.split_once('.')?;
    if frac_part.is_empty() || !frac_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match int_part {
        "" | "+" | "-" => Some(0),
        digits => digits.parse::<i64>().ok(),
    }
}

macro_rules! quantity_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Quantity {
                fn from(n: $t) -> Self {
                    Self::Int(i64::from(n))
                }
            }
        )*
    };
}

quantity_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl TryFrom<u64> for Quantity {
    type Error = QuartersError;

    fn try_from(n: u64) -> Result<Self, Self::Error> {
        i64::try_from(n)
            .map(Self::Int)
            .map_err(|_| QuartersError::validation("quantity is out of range"))
    }
}

impl From<&str> for Quantity {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Quantity {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Shortens a secret for logs and `Debug` output: `abcdef...wxyz`.
///
/// Values too short to keep a prefix and a suffix are replaced with stars.
pub(crate) fn mask_token(token: &str) -> String {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let len = trimmed.len();
    if len <= TOKEN_MASK_PREFIX_LEN + TOKEN_MASK_SUFFIX_LEN
        || !trimmed.is_char_boundary(TOKEN_MASK_PREFIX_LEN)
        || !trimmed.is_char_boundary(len - TOKEN_MASK_SUFFIX_LEN)
    {
        return "*".repeat(len.min(8));
    }

    let prefix = &trimmed[..TOKEN_MASK_PREFIX_LEN];
    let suffix = &trimmed[len - TOKEN_MASK_SUFFIX_LEN..];
    format!("{prefix}...{suffix}")
}
