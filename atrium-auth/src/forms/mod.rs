//! Sign-in and sign-up forms.

pub mod login;
pub mod signup;

pub use login::SignInForm;
pub use signup::SignUpForm;

/// Case-insensitive pattern for `local@domain.tld` addresses.
pub const EMAIL_PATTERN: &str = r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$";

/// Symbols accepted by the sign-up password complexity rule.
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

/// Complexity rule for sign-up passwords: only letters, digits, and the
/// fixed symbol set, with at least one lowercase letter, one uppercase
/// letter, one digit, and one symbol. Length is checked by an earlier rule.
pub(crate) fn password_complexity(value: &str) -> bool {
    let symbol = |c: char| PASSWORD_SYMBOLS.contains(c);
    value.chars().all(|c| c.is_ascii_alphanumeric() || symbol(c))
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(symbol)
}
