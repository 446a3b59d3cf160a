//! Prioritized alias probing over a JSON object
//!
//! Two probing flavours mirror how the dashboard reads records:
//! - text probes skip empty strings (`a || b || c`)
//! - amount probes take the first non-null value, even `0` (`a ?? b ?? c`)
//!
//! Aliases may be dotted paths (`member.name`) into nested objects.

use serde_json::Value;

use super::currency::parse_currency;

/// Resolve a dotted path inside a JSON value
pub fn lookup<'a>(raw: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(raw, |current, key| current.as_object()?.get(key))
}

/// First alias whose value is present and not `null`
pub fn first_present<'a>(raw: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    aliases
        .iter()
        .filter_map(|alias| lookup(raw, alias))
        .find(|v| !v.is_null())
}

/// Text form of a scalar; empty/blank strings count as absent
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// First alias holding non-empty text
pub fn first_text(raw: &Value, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .filter_map(|alias| lookup(raw, alias))
        .find_map(scalar_text)
}

/// [`first_text`] with a default
pub fn text_or(raw: &Value, aliases: &[&str], default: &str) -> String {
    first_text(raw, aliases).unwrap_or_else(|| default.to_string())
}

/// First present amount, parsed with currency rules
pub fn first_amount(raw: &Value, aliases: &[&str]) -> Option<f64> {
    first_present(raw, aliases).map(parse_currency)
}

/// [`first_amount`] defaulting to zero
pub fn amount_or_zero(raw: &Value, aliases: &[&str]) -> f64 {
    first_amount(raw, aliases).unwrap_or(0.0)
}

/// First present boolean; accepts `true`/`false`, `"true"`/`"false"`, `1`/`0`
pub fn first_bool(raw: &Value, aliases: &[&str]) -> Option<bool> {
    first_present(raw, aliases).and_then(|v| match v {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Person name chain: full-name aliases, then `first + last`, then
/// fallback aliases, then `default`.
pub fn person_name(
    raw: &Value,
    full: &[&str],
    first: &[&str],
    last: &[&str],
    fallback: &[&str],
    default: &str,
) -> String {
    if let Some(name) = first_text(raw, full) {
        return name;
    }

    let joined = [first_text(raw, first), first_text(raw, last)]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    if !joined.is_empty() {
        return joined;
    }

    text_or(raw, fallback, default)
}

/// Array under the first alias that holds one
pub fn first_array<'a>(raw: &'a Value, aliases: &[&str]) -> &'a [Value] {
    aliases
        .iter()
        .filter_map(|alias| lookup(raw, alias))
        .find_map(|v| v.as_array())
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_skips_empty() {
        let raw = json!({"fullName": "  ", "name": "Sara"});
        assert_eq!(first_text(&raw, &["fullName", "name"]).as_deref(), Some("Sara"));
    }

    #[test]
    fn test_amount_keeps_zero() {
        let raw = json!({"baseSalary": 0, "salary": 5000});
        assert_eq!(first_amount(&raw, &["baseSalary", "salary"]), Some(0.0));
        let raw = json!({"baseSalary": null, "salary": "AED 5,000"});
        assert_eq!(first_amount(&raw, &["baseSalary", "salary"]), Some(5000.0));
    }

    #[test]
    fn test_nested_lookup() {
        let raw = json!({"member": {"name": "Omar"}});
        assert_eq!(text_or(&raw, &["memberName", "member.name"], "?"), "Omar");
        assert_eq!(lookup(&raw, "member.name.first"), None);
    }

    #[test]
    fn test_person_name_chain() {
        let names = |raw: &Value| {
            person_name(raw, &["fullName", "name"], &["firstName"], &["lastName"], &["memberName"], "Unknown")
        };
        assert_eq!(names(&json!({"firstName": "Ana", "lastName": "Ruiz"})), "Ana Ruiz");
        assert_eq!(names(&json!({"lastName": "Ruiz"})), "Ruiz");
        assert_eq!(names(&json!({"memberName": "A.R."})), "A.R.");
        assert_eq!(names(&json!(null)), "Unknown");
    }

    #[test]
    fn test_bool_forms() {
        assert_eq!(first_bool(&json!({"a": "true"}), &["a"]), Some(true));
        assert_eq!(first_bool(&json!({"a": 0}), &["a"]), Some(false));
        assert_eq!(first_bool(&json!({"a": "maybe"}), &["a"]), None);
    }
}
