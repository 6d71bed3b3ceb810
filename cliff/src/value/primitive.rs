//! Booleans, integers, floats, strings and counters.

use super::{Element, FlagValue, ValueKind, sealed::Sealed};

/// A counter incremented once per occurrence of the flag.
///
/// `-vvv` parses as `Count(3)`. Occurrences are added to the declared
/// default, so a default of `Count(1)` plus `-v` yields `Count(2)`.
///
/// Clap counts occurrences in a `u8`: a single command line contributes at
/// most 255, further occurrences are ignored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Count(pub usize);

impl Count {
    /// Number of occurrences seen.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for Count {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl Sealed for Count {}

impl FlagValue for Count {
    const KIND: ValueKind = ValueKind::Counter;
    type Item = u8;

    fn value_name() -> String {
        "count".to_owned()
    }

    fn parse_item(raw: &str) -> Result<u8, String> {
        parse_integer(raw)
    }

    fn from_items(items: Vec<u8>) -> Option<Self> {
        items.last().map(|n| Self(usize::from(*n)))
    }

    fn over_default(self, default: &Self) -> Self {
        Self(self.0.saturating_add(default.0))
    }

    fn default_text(&self) -> Option<String> {
        (self.0 != 0).then(|| self.0.to_string())
    }
}

impl Sealed for bool {}

impl Element for bool {
    fn type_name() -> &'static str {
        "bool"
    }

    fn parse_element(raw: &str) -> Result<Self, String> {
        parse_bool(raw)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl FlagValue for bool {
    const KIND: ValueKind = ValueKind::Switch;
    type Item = Self;

    fn value_name() -> String {
        "bool".to_owned()
    }

    fn parse_item(raw: &str) -> Result<Self, String> {
        parse_bool(raw)
    }

    fn from_items(items: Vec<Self>) -> Option<Self> {
        items.into_iter().last()
    }

    fn default_text(&self) -> Option<String> {
        self.then(|| "true".to_owned())
    }
}

/// Accepts the same spellings as Go's `strconv.ParseBool`.
pub(crate) fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(format!("invalid boolean '{raw}'")),
    }
}

/// Parses an integer literal with an optional sign, radix prefix (`0x`, `0o`,
/// `0b`, or a leading `0` for octal) and `_` separators.
pub(crate) fn parse_integer<T>(raw: &str) -> Result<T, String>
where
    T: TryFrom<i128>,
{
    let (negative, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let (radix, digits) = split_radix(unsigned);
    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    if cleaned.is_empty() || cleaned.starts_with(['+', '-']) || digits.starts_with('_') {
        return Err(format!("invalid integer '{raw}'"));
    }
    let magnitude = i128::from_str_radix(&cleaned, radix)
        .map_err(|err| format!("invalid integer '{raw}': {err}"))?;
    let value = if negative { -magnitude } else { magnitude };
    T::try_from(value).map_err(|_| format!("integer '{raw}' is out of range"))
}

fn split_radix(unsigned: &str) -> (u32, &str) {
    const PREFIXES: [(&str, u32); 6] = [
        ("0x", 16),
        ("0X", 16),
        ("0o", 8),
        ("0O", 8),
        ("0b", 2),
        ("0B", 2),
    ];
    for (prefix, radix) in PREFIXES {
        if let Some(rest) = unsigned.strip_prefix(prefix) {
            return (radix, rest);
        }
    }
    match unsigned.strip_prefix('0') {
        Some(rest) if !rest.is_empty() => (8, rest),
        _ => (10, unsigned),
    }
}

fn parse_float<T>(raw: &str) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>()
        .map_err(|err| format!("invalid number '{raw}': {err}"))
}

macro_rules! integer_value {
    ($($ty:ty => $name:literal),+ $(,)?) => {
        $(
            scalar_value!(
                $ty,
                name = $name,
                parse = parse_integer::<$ty>,
                render = |v: &$ty| v.to_string(),
                default = |v: &$ty| (*v != 0).then(|| v.to_string()),
            );
        )+
    };
}

integer_value!(
    i8 => "int8",
    i16 => "int16",
    i32 => "int32",
    i64 => "int64",
    isize => "int",
    u8 => "uint8",
    u16 => "uint16",
    u32 => "uint32",
    u64 => "uint64",
    usize => "uint",
);

scalar_value!(
    f32,
    name = "float32",
    parse = parse_float::<f32>,
    render = |v: &f32| v.to_string(),
    default = |v: &f32| (*v != 0.0).then(|| v.to_string()),
);

scalar_value!(
    f64,
    name = "float64",
    parse = parse_float::<f64>,
    render = |v: &f64| v.to_string(),
    default = |v: &f64| (*v != 0.0).then(|| v.to_string()),
);

scalar_value!(
    String,
    name = "string",
    parse = |raw: &str| -> Result<String, String> { Ok(raw.to_owned()) },
    render = Clone::clone,
    default = |v: &String| (!v.is_empty()).then(|| format!("{v:?}")),
);
