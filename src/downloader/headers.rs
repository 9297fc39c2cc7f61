/// Response headers as received, looked up case-insensitively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.entries.push((name.to_string(), value.to_string()));
    }

    /// First value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Lowercased `Content-Type`, empty when absent.
    pub fn content_type(&self) -> String {
        self.get("content-type")
            .map(str::to_ascii_lowercase)
            .unwrap_or_default()
    }

    /// `Content-Length` in bytes. A value that is not a number counts as absent.
    pub fn content_length(&self) -> Option<u64> {
        let raw = self.get("content-length")?;

        match raw.trim().parse::<u64>() {
            Ok(length) => Some(length),
            Err(_) => {
                tracing::warn!(value = raw, "ignoring malformed content-length");
                None
            }
        }
    }

    pub fn is_image(&self) -> bool {
        self.content_type().starts_with("image/")
    }
}
