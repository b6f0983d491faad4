use std::borrow::Cow;

/// A value that can be matched against a fuzzy query
///
/// Implementors expose their matchable text in two ways: `full_text` is the
/// item's own string form, used when the caller gives no field keys, and
/// `field_text` resolves one named field for key-driven matching. A missing
/// field is `None` and contributes empty text rather than an error; a `None`
/// from `full_text` means the item has no usable string form at all.
pub trait Candidate {
    /// Get the text of a named field, if the candidate has one
    fn field_text(&self, key: &str) -> Option<String> {
        let _ = key;
        None
    }

    /// Get the candidate's own text form, if it has one
    fn full_text(&self) -> Option<String>;
}

impl Candidate for String {
    fn full_text(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl Candidate for &str {
    fn full_text(&self) -> Option<String> {
        Some((*self).to_string())
    }
}

impl Candidate for Cow<'_, str> {
    fn full_text(&self) -> Option<String> {
        Some(self.clone().into_owned())
    }
}

/// JSON values match like loosely-typed records: strings and scalar
/// primitives stringify, objects resolve fields by key, and bare arrays or
/// objects have no usable full-text form.
impl Candidate for serde_json::Value {
    fn field_text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(value_text)
    }

    fn full_text(&self) -> Option<String> {
        value_text(self)
    }
}

fn value_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
