//! Recipient currency descriptors.

use std::fmt::Display;
use std::str::FromStr;

/// Currency the user remits from, unless overridden in the config.
pub const DEFAULT_SOURCE_CURRENCY: &str = "USD";

/// Immutable descriptor for a recipient currency. The set is fixed at build
/// time and lives for the whole process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyOption {
    pub country: &'static str,
    pub code: &'static str,
    pub symbol: &'static str,
}

/// Recipient currencies the calculator supports.
pub const RECIPIENT_CURRENCIES: [CurrencyOption; 3] = [
    CurrencyOption {
        country: "South Korea",
        code: "KRW",
        symbol: "₩",
    },
    CurrencyOption {
        country: "Japan",
        code: "JPY",
        symbol: "¥",
    },
    CurrencyOption {
        country: "Philippines",
        code: "PHP",
        symbol: "₱",
    },
];

impl CurrencyOption {
    /// Looks up a recipient currency by its ISO code, case-insensitively.
    pub fn by_code(code: &str) -> Option<CurrencyOption> {
        RECIPIENT_CURRENCIES
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
            .copied()
    }
}

impl Display for CurrencyOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.country, self.code)
    }
}

impl FromStr for CurrencyOption {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurrencyOption::by_code(s).ok_or_else(|| {
            anyhow::anyhow!(
                "Unsupported recipient currency: {} (expected one of KRW, JPY, PHP)",
                s
            )
        })
    }
}
