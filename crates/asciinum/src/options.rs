use bitflags::bitflags;

bitflags! {
    /// Notations a literal may be written in.
    ///
    /// `GENERAL` (fixed or scientific) is the default.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(
        feature = "serde",
        derive(serde::Serialize, serde::Deserialize),
        serde(transparent)
    )]
    pub struct CharsFormat: u8 {
        /// Scientific notation, e.g. `1.5e3`.
        const SCIENTIFIC = 1 << 0;
        /// Fixed notation, e.g. `1500.0`.
        const FIXED = 1 << 2;
        /// Either notation.
        const GENERAL = Self::FIXED.bits() | Self::SCIENTIFIC.bits();
    }
}

impl Default for CharsFormat {
    fn default() -> Self {
        CharsFormat::GENERAL
    }
}

/// Which grammar the literal must obey.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ParseRules {
    /// The permissive grammar accepted by `strtod`-like functions: `.5`,
    /// `-.5`, `1.` and `007` are all numbers.
    #[default]
    General,
    /// The JSON number grammar: an integer digit is mandatory before the
    /// decimal point, at least one digit must follow it, and redundant
    /// leading zeros are rejected.
    Json,
}

/// Configuration options for the number scanner.
///
/// # Examples
///
/// ```rust
/// use asciinum::{CharsFormat, ParseOptions, ParseRules};
///
/// let options = ParseOptions {
///     format: CharsFormat::FIXED,
///     decimal_point: b',',
///     ..Default::default()
/// };
/// assert_eq!(options.rules, ParseRules::General);
/// ```
///
/// # Default
///
/// General notation, general rules, `.` as decimal point, everything else
/// `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ParseOptions {
    /// Which notations are legal.
    ///
    /// With `SCIENTIFIC` alone an exponent is mandatory; with `FIXED` alone an
    /// `e` marker ends the literal.
    ///
    /// # Default
    ///
    /// `CharsFormat::GENERAL`
    pub format: CharsFormat,

    /// Grammar dialect.
    ///
    /// # Default
    ///
    /// `ParseRules::General`
    pub rules: ParseRules,

    /// Whether JSON integers keep a 20th digit of precision.
    ///
    /// A `u64` holds up to 20 decimal digits. When `true` and the rules are
    /// `Json`, a pure integer literal of exactly 20 digits is kept exact as
    /// long as it does not overflow, instead of being truncated to 19 digits.
    ///
    /// # Default
    ///
    /// `false`
    pub parse_ints: bool,

    /// The decimal separator. Must be an ASCII byte that is not a digit.
    ///
    /// # Default
    ///
    /// `b'.'`
    pub decimal_point: u8,

    /// Whether a leading `+` is accepted like a leading `-`.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_leading_plus: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new(CharsFormat::GENERAL)
    }
}

impl ParseOptions {
    /// General rules with the given notation.
    #[must_use]
    pub const fn new(format: CharsFormat) -> Self {
        Self {
            format,
            rules: ParseRules::General,
            parse_ints: false,
            decimal_point: b'.',
            allow_leading_plus: false,
        }
    }

    /// Options for JSON number tokens.
    #[must_use]
    pub const fn json() -> Self {
        Self::new(CharsFormat::GENERAL).with_rules(ParseRules::Json)
    }

    /// Sets [`ParseOptions::rules`].
    #[must_use]
    pub const fn with_rules(mut self, rules: ParseRules) -> Self {
        self.rules = rules;
        self
    }

    /// Sets [`ParseOptions::parse_ints`].
    #[must_use]
    pub const fn with_parse_ints(mut self, parse_ints: bool) -> Self {
        self.parse_ints = parse_ints;
        self
    }

    /// Sets [`ParseOptions::decimal_point`].
    #[must_use]
    pub const fn with_decimal_point(mut self, decimal_point: u8) -> Self {
        self.decimal_point = decimal_point;
        self
    }

    /// Sets [`ParseOptions::allow_leading_plus`].
    #[must_use]
    pub const fn with_leading_plus(mut self, allow: bool) -> Self {
        self.allow_leading_plus = allow;
        self
    }

    pub(crate) const fn is_json(&self) -> bool {
        matches!(self.rules, ParseRules::Json)
    }

    pub(crate) const fn allows_fixed(&self) -> bool {
        self.format.contains(CharsFormat::FIXED)
    }

    pub(crate) const fn allows_scientific(&self) -> bool {
        self.format.contains(CharsFormat::SCIENTIFIC)
    }
}
