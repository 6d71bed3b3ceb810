//! Durations written with unit suffixes, such as `1h30m` or `250ms`.

use std::time::Duration;

const NANOS_PER_SECOND: u128 = 1_000_000_000;

const UNITS: [(&str, u128); 8] = [
    ("ns", 1),
    ("us", 1_000),
    ("\u{b5}s", 1_000),
    ("\u{3bc}s", 1_000),
    ("ms", 1_000_000),
    ("s", NANOS_PER_SECOND),
    ("m", 60 * NANOS_PER_SECOND),
    ("h", 3_600 * NANOS_PER_SECOND),
];

/// Parses a sequence of decimal numbers, each with an optional fraction and a
/// unit suffix. `0` is accepted without a unit; negative durations are not.
pub(crate) fn parse_duration(raw: &str) -> Result<Duration, String> {
    let body = raw.strip_prefix('+').unwrap_or(raw);
    if body.starts_with('-') {
        return Err(format!("negative duration '{raw}' is not supported"));
    }
    if body == "0" {
        return Ok(Duration::ZERO);
    }
    if body.is_empty() {
        return Err(format!("invalid duration '{raw}'"));
    }

    let mut total: u128 = 0;
    let mut rest = body;
    while !rest.is_empty() {
        let (component, tail) = split_component(rest)
            .ok_or_else(|| format!("invalid duration '{raw}'"))?;
        let nanos = component
            .nanos()
            .map_err(|reason| format!("invalid duration '{raw}': {reason}"))?;
        total = total
            .checked_add(nanos)
            .ok_or_else(|| format!("duration '{raw}' is out of range"))?;
        rest = tail;
    }
    u64::try_from(total)
        .map(Duration::from_nanos)
        .map_err(|_| format!("duration '{raw}' is out of range"))
}

struct Component<'a> {
    whole: &'a str,
    fraction: &'a str,
    unit: &'a str,
}

impl Component<'_> {
    fn nanos(&self) -> Result<u128, String> {
        let scale = UNITS
            .iter()
            .find(|(name, _)| *name == self.unit)
            .map(|(_, scale)| *scale)
            .ok_or_else(|| {
                if self.unit.is_empty() {
                    "missing unit".to_owned()
                } else {
                    format!("unknown unit '{}'", self.unit)
                }
            })?;
        let whole: u128 = if self.whole.is_empty() {
            0
        } else {
            self.whole.parse().map_err(|_| "value out of range".to_owned())?
        };
        let mut nanos = whole
            .checked_mul(scale)
            .ok_or_else(|| "value out of range".to_owned())?;
        if !self.fraction.is_empty() {
            // Digits beyond nanosecond precision cannot change the result.
            let digits: String = self.fraction.chars().take(18).collect();
            let exponent = u32::try_from(digits.len()).map_err(|_| "fraction too long".to_owned())?;
            let numerator: u128 = digits.parse().map_err(|_| "invalid fraction".to_owned())?;
            let fractional = numerator
                .checked_mul(scale)
                .and_then(|scaled| scaled.checked_div(10_u128.pow(exponent)))
                .ok_or_else(|| "value out of range".to_owned())?;
            nanos = nanos
                .checked_add(fractional)
                .ok_or_else(|| "value out of range".to_owned())?;
        }
        Ok(nanos)
    }
}

fn split_component(input: &str) -> Option<(Component<'_>, &str)> {
    let (whole, after_whole) = split_digits(input);
    let (fraction, after_fraction) = match after_whole.strip_prefix('.') {
        Some(tail) => split_digits(tail),
        None => ("", after_whole),
    };
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    let unit_len = after_fraction
        .find(|c: char| c.is_ascii_digit() || c == '.')
        .unwrap_or(after_fraction.len());
    let (unit, tail) = after_fraction.split_at(unit_len);
    Some((
        Component {
            whole,
            fraction,
            unit,
        },
        tail,
    ))
}

fn split_digits(input: &str) -> (&str, &str) {
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    input.split_at(end)
}

/// Formats a duration as `1h30m0s`, `1.5s`, `250ms`, `10µs` or `42ns`.
pub(crate) fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos == 0 {
        return "0s".to_owned();
    }
    if nanos < 1_000 {
        return format!("{nanos}ns");
    }
    if nanos < 1_000_000 {
        return format!("{}\u{b5}s", decimal(nanos, 3));
    }
    if nanos < NANOS_PER_SECOND {
        return format!("{}ms", decimal(nanos, 6));
    }

    let secs = duration.as_secs();
    let hours = secs.div_euclid(3_600);
    let minutes = secs.div_euclid(60).rem_euclid(60);
    let seconds = decimal(
        u128::from(secs.rem_euclid(60)) * NANOS_PER_SECOND + u128::from(duration.subsec_nanos()),
        9,
    );
    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

fn decimal(value: u128, places: u32) -> String {
    let scale = 10_u128.pow(places);
    let whole = value.div_euclid(scale);
    let fraction = value.rem_euclid(scale);
    if fraction == 0 {
        return whole.to_string();
    }
    let width = usize::try_from(places).unwrap_or(9);
    let digits = format!("{fraction:0width$}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

scalar_value!(
    Duration,
    name = "duration",
    parse = parse_duration,
    render = |v: &Duration| format_duration(*v),
    default = |v: &Duration| (!v.is_zero()).then(|| format_duration(*v)),
);
