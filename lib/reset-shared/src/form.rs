use serde::{Deserialize, Serialize};

/// The fields of one reset form submission, in the order
/// they appear in the form.
///
/// Duplicate field names are kept as they are, like a
/// urlencoded form body keeps them; nothing is deduplicated
/// or reordered. The payload lives for exactly one
/// submission attempt.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ResetForm {
    fields: Vec<(String, String)>,
}

impl ResetForm {
    /// Creates an empty form payload.
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Appends one field at the end of the payload.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// The fields in submission order.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Encodes the payload as `key=value&key=value` with
    /// standard URL percent-encoding rules, keeping the
    /// field order of the form.
    pub fn url_encoded(&self) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.fields {
            ser.append_pair(name, value);
        }
        ser.finish()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for ResetForm {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
