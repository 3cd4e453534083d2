//! Canonical text encoding for hashing.
//!
//! JSON-shaped output with object keys sorted by byte value and no whitespace.
//! Numbers use Rust's shortest round-trip decimal form, which never switches
//! to exponent notation and is identical on every platform. `15`, `15.0` and
//! `1.5e1` all encode as `15`; `-0.0` encodes as `0`.

use serde_json::{Number, Value};

use crate::logic::error::{SentinelError, SentinelResult};

/// Encode `value` into its canonical text form.
pub fn canonicalize(value: &Value) -> SentinelResult<String> {
    let mut out = String::with_capacity(256);
    write_value(&mut out, value)?;
    Ok(out)
}

fn write_value(out: &mut String, value: &Value) -> SentinelResult<()> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => write_number(out, n)?,
        Value::String(s) => write_string(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item)?;
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();

            out.push('{');
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(out, key);
                out.push(':');
                write_value(out, &map[key.as_str()])?;
            }
            out.push('}');
        }
    }
    Ok(())
}

fn write_number(out: &mut String, n: &Number) -> SentinelResult<()> {
    if let Some(i) = n.as_i64() {
        out.push_str(&i.to_string());
        return Ok(());
    }
    if let Some(u) = n.as_u64() {
        out.push_str(&u.to_string());
        return Ok(());
    }

    let f = n
        .as_f64()
        .ok_or_else(|| SentinelError::Encoding(format!("unrepresentable number {}", n)))?;
    out.push_str(&format_float(f)?);
    Ok(())
}

/// Fixed-notation float formatting used by the encoder.
pub fn format_float(f: f64) -> SentinelResult<String> {
    if !f.is_finite() {
        return Err(SentinelError::Encoding(format!("non-finite number {}", f)));
    }
    if f == 0.0 {
        return Ok("0".to_string());
    }
    Ok(format!("{}", f))
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}
