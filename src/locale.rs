//! Numeric locale queries.
//!
//! Some interchange parsers read floating point numbers with the process
//! numeric locale, so a locale using `,` as decimal separator silently breaks
//! them. The orchestrator only needs the active decimal separator, which it
//! gets from an injected [`NumericLocale`].

/// Source of the active decimal separator.
pub trait NumericLocale: Send + Sync {
    /// Decimal separator of the active numeric locale.
    fn decimal_point(&self) -> char;
}

/// A locale with a fixed decimal separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedLocale(pub char);

impl FixedLocale {
    /// The `C` locale.
    pub const C: Self = Self('.');
    /// A typical continental European locale.
    pub const COMMA: Self = Self(',');
}

impl Default for FixedLocale {
    fn default() -> Self {
        Self::C
    }
}

impl NumericLocale for FixedLocale {
    fn decimal_point(&self) -> char {
        self.0
    }
}

/// The numeric locale the process is currently running under, as reported by
/// `localeconv`.
///
/// A process starts in the `C` locale and only leaves it when something calls
/// `setlocale`, so this reports `.` unless the host application switched
/// locales. Environment variables such as `LANG` are not consulted.
///
/// Each query reads the process state again. `setlocale` must not run
/// concurrently with a query.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessNumericLocale;

impl NumericLocale for ProcessNumericLocale {
    #[cfg(unix)]
    fn decimal_point(&self) -> char {
        // SAFETY: `localeconv` returns static storage that stays valid until the
        // next `localeconv`/`setlocale` call, and the string is copied out here.
        let raw = unsafe {
            let conv = libc::localeconv();
            if conv.is_null() || (*conv).decimal_point.is_null() {
                return '.';
            }
            std::ffi::CStr::from_ptr((*conv).decimal_point)
                .to_bytes()
                .to_vec()
        };
        decode_decimal_point(&raw)
    }

    #[cfg(not(unix))]
    fn decimal_point(&self) -> char {
        '.'
    }
}

/// First character of a `localeconv` decimal point in the locale's encoding.
///
/// An empty string means `.`.
#[cfg_attr(not(unix), allow(dead_code))]
fn decode_decimal_point(bytes: &[u8]) -> char {
    String::from_utf8_lossy(bytes).chars().next().unwrap_or('.')
}
