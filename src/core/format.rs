//! Locale-independent number formatting for the dashboard.

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    Currency,
    Percent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    currency_symbol: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}

impl Formatter {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn format(&self, value: f64, kind: FormatKind) -> String {
        match kind {
            FormatKind::Currency => self.currency(value),
            FormatKind::Percent => self.percent(value),
        }
    }

    /// Whole currency units with `,` thousands separators, e.g. `₹1,234,568`.
    ///
    /// Negative amounts keep the sign after the symbol: `₹-1,234`.
    pub fn currency(&self, value: f64) -> String {
        format!(
            "{}{}",
            self.currency_symbol,
            group_thousands(&format!("{:.0}", whole_units(value)))
        )
    }

    pub fn percent(&self, value: f64) -> String {
        format!("{value:.2}%")
    }

    pub fn optional_percent(&self, value: Option<f64>) -> String {
        value.map_or_else(|| "N/A".to_string(), |v| self.percent(v))
    }
}

/// Rounds half-to-even to whole currency units. Anything that rounds to zero
/// comes back as `+0.0`, so it neither prints nor colours as negative.
pub fn whole_units(value: f64) -> f64 {
    let rounded = value.round_ties_even();
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Inserts `,` between every three integer digits of a plain decimal string.
pub fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Two significant digits with an SI prefix: `200`, `1.2k`, `12k`, `3.4M`.
///
/// Negative values use the typographic minus sign, as chart labels do.
pub fn si(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let sign = if value < 0.0 { "−" } else { "" };

    let scientific = format!("{:.1e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let prefix_exponent = exponent.div_euclid(3).clamp(-8, 8);
    let prefix = SI_PREFIXES[(prefix_exponent + 8) as usize];
    let integer_digits = exponent - prefix_exponent * 3 + 1;
    let len = digits.len() as i32;

    let body = if integer_digits == len {
        digits
    } else if integer_digits > len {
        format!("{digits}{}", "0".repeat((integer_digits - len) as usize))
    } else if integer_digits > 0 {
        let (int, frac) = digits.split_at(integer_digits as usize);
        format!("{int}.{frac}")
    } else {
        format!("0.{}{digits}", "0".repeat((1 - integer_digits) as usize))
    };

    format!("{sign}{body}{prefix}")
}
