//! `${field}` placeholder substitution.

use super::{Field, OnboardingConfig};

const OPEN: &str = "${";
const CLOSE: char = '}';

/// Replace every `${key}` naming a schema field with that field's value.
///
/// Keys match the lower-cased field name exactly. The scan runs once, left to
/// right, so substituted values are never scanned again. Unknown tokens and
/// unterminated `${` are copied through unchanged.
pub fn substitute(template: &str, config: &OnboardingConfig) -> String {
    if !template.contains(OPEN) {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find(OPEN) {
        let after_open = &rest[start + OPEN.len()..];
        let Some(end) = after_open.find(CLOSE) else {
            break;
        };
        let key = &after_open[..end];
        if let Some(inner) = key.find(OPEN) {
            out.push_str(&rest[..start + OPEN.len() + inner]);
            rest = &after_open[inner..];
            continue;
        }
        out.push_str(&rest[..start]);
        match Field::from_placeholder_key(key) {
            Some(field) => out.push_str(config.get(field)),
            None => out.push_str(&rest[start..start + OPEN.len() + end + 1]),
        }
        rest = &after_open[end + 1..];
    }
    out.push_str(rest);
    out
}

/// `${...}` tokens still present in `text`, in order of appearance.
pub fn unresolved_placeholders(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find(OPEN) {
        let after_open = &rest[start + OPEN.len()..];
        let Some(end) = after_open.find(CLOSE) else {
            break;
        };
        if let Some(inner) = after_open[..end].find(OPEN) {
            rest = &after_open[inner..];
            continue;
        }
        tokens.push(rest[start..start + OPEN.len() + end + 1].to_string());
        rest = &after_open[end + 1..];
    }
    tokens
}
