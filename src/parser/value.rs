use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::Value;

const TRUE_WORDS: [&str; 3] = ["yes", "on", "enabled"];
const FALSE_WORDS: [&str; 3] = ["no", "off", "disabled"];

static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)\s+(\p{L}+)$").expect("static regex must compile")
});

/// Infer the type of a raw scalar value.
///
/// Rules are tried in order and the first match wins:
/// boolean word, `<integer> <unit>` duration, signed integer, text.
/// Never fails; anything unrecognised comes back as `Value::Text`.
pub fn coerce(raw: &str) -> Value {
    let value = coerce_bool(raw)
        .or_else(|| coerce_duration(raw))
        .or_else(|| raw.parse::<i64>().ok().map(Value::Integer))
        .unwrap_or_else(|| Value::Text(raw.to_string()));

    tracing::trace!(raw, kind = value.kind(), "coerced scalar");
    value
}

fn coerce_bool(raw: &str) -> Option<Value> {
    if TRUE_WORDS.iter().any(|w| raw.eq_ignore_ascii_case(w)) {
        Some(Value::Boolean(true))
    } else if FALSE_WORDS.iter().any(|w| raw.eq_ignore_ascii_case(w)) {
        Some(Value::Boolean(false))
    } else {
        None
    }
}

fn coerce_duration(raw: &str) -> Option<Value> {
    let caps = DURATION_RE.captures(raw)?;
    let amount: u64 = caps[1].parse().ok()?;
    let unit = caps[2].to_lowercase();

    let duration = match unit.as_str() {
        "ns" | "nanosecond" | "nanoseconds" => Duration::from_nanos(amount),
        "us" | "µs" | "μs" | "microsecond" | "microseconds" => {
            Duration::from_nanos(amount.checked_mul(1_000)?)
        }
        "ms" | "millisecond" | "milliseconds" => Duration::from_nanos(amount.checked_mul(1_000_000)?),
        "s" | "sec" | "secs" | "second" | "seconds" => Duration::from_secs(amount),
        "m" | "min" | "mins" | "minute" | "minutes" => Duration::from_secs(amount.checked_mul(60)?),
        "h" | "hr" | "hrs" | "hour" | "hours" => Duration::from_secs(amount.checked_mul(3_600)?),
        "d" | "day" | "days" => Duration::from_secs(amount.checked_mul(86_400)?),
        "w" | "week" | "weeks" => Duration::from_secs(amount.checked_mul(604_800)?),
        _ => return None,
    };

    Some(Value::Duration(duration))
}
