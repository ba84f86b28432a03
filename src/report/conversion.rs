// Author: Dustin Pilgrim
// License: MIT

use std::time::Duration;

use crate::ast::{Mapping, Value};
use crate::ProfileError;

fn type_error(expected: &str, value: &Value, hint: &str, code: u32) -> ProfileError {
    ProfileError::TypeError {
        message: format!("Expected {}, got {} '{}'", expected, value.kind(), value),
        line: 0,
        hint: Some(hint.into()),
        code: Some(code),
    }
}

impl TryFrom<Value> for String {
    type Error = ProfileError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s),
            _ => Err(type_error("text", &value, "Read it as its typed value instead", 401)),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = ProfileError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => Ok(n),
            _ => Err(type_error("integer", &value, "The report value is not a plain number", 402)),
        }
    }
}

macro_rules! impl_try_from_integer {
    ($($ty:ty => $code:expr),* $(,)?) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = ProfileError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let n = i64::try_from(value)?;
                    <$ty>::try_from(n).map_err(|_| ProfileError::TypeError {
                        message: format!("Number {} out of range for {}", n, stringify!($ty)),
                        line: 0,
                        hint: Some(format!(
                            "Use a number between {} and {}",
                            <$ty>::MIN,
                            <$ty>::MAX
                        )),
                        code: Some($code),
                    })
                }
            }
        )*
    };
}

impl_try_from_integer! {
    i32 => 403,
    u8 => 407,
    u16 => 411,
    u32 => 408,
    u64 => 406,
    usize => 409,
}

impl TryFrom<Value> for bool {
    type Error = ProfileError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Boolean(b) => Ok(b),
            Value::Text(ref s) if s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false") => {
                Err(type_error(
                    "boolean",
                    &value,
                    "Reports spell booleans as Yes/No, On/Off or Enabled/Disabled",
                    404,
                ))
            }
            _ => Err(type_error("boolean", &value, "Expected Yes/No, On/Off or Enabled/Disabled", 404)),
        }
    }
}

impl TryFrom<Value> for Duration {
    type Error = ProfileError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Duration(d) => Ok(d),
            _ => Err(type_error("duration", &value, "Durations look like '30 minutes' or '2 hours'", 405)),
        }
    }
}

impl TryFrom<Value> for Mapping {
    type Error = ProfileError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Mapping(items) => Ok(items),
            _ => Err(type_error("section", &value, "Only heading lines ('Key:') produce sections", 410)),
        }
    }
}
