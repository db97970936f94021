//! Keeping credential values out of output.

/// Masks registered secret values in strings.
///
/// Remote clients register the credentials they send so that error messages
/// built from transport errors (which may echo a request URL) never carry
/// them.
///
/// # Example
///
/// ```
/// use auto_push::credentials::mask::OutputMasker;
///
/// let mut masker = OutputMasker::new();
/// masker.add_secret("k-123");
///
/// let output = masker.mask("GET /weather?appid=k-123 failed");
/// assert_eq!(output, "GET /weather?appid=[REDACTED] failed");
/// ```
#[derive(Debug, Clone)]
pub struct OutputMasker {
    secrets: Vec<String>,
    mask: String,
}

impl OutputMasker {
    /// Create a new masker with the default mask string.
    pub fn new() -> Self {
        Self {
            secrets: Vec::new(),
            mask: "[REDACTED]".to_string(),
        }
    }

    /// Register a secret value to be masked. Empty strings are ignored.
    pub fn add_secret(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() && !self.secrets.contains(&value) {
            self.secrets.push(value);
        }
    }

    /// Mask any secret values in the given string.
    pub fn mask(&self, input: &str) -> String {
        self.secrets
            .iter()
            .fold(input.to_string(), |acc, secret| acc.replace(secret, &self.mask))
    }

    /// Get the number of registered secrets.
    pub fn secret_count(&self) -> usize {
        self.secrets.len()
    }
}

impl Default for OutputMasker {
    fn default() -> Self {
        Self::new()
    }
}

/// Show only the last four characters of a secret.
///
/// Values of eight characters or fewer are hidden completely.
pub fn preview(value: &str) -> String {
    let count = value.chars().count();
    if count <= 8 {
        return "*".repeat(count.max(4));
    }
    let tail: String = value.chars().skip(count - 4).collect();
    format!("****{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_single_secret() {
        let mut masker = OutputMasker::new();
        masker.add_secret("super-secret-value");

        let output = masker.mask("The key is super-secret-value here");

        assert_eq!(output, "The key is [REDACTED] here");
    }

    #[test]
    fn masks_multiple_secrets_and_occurrences() {
        let mut masker = OutputMasker::new();
        masker.add_secret("one");
        masker.add_secret("two");

        let output = masker.mask("one two one");

        assert_eq!(output, "[REDACTED] [REDACTED] [REDACTED]");
    }

    #[test]
    fn ignores_empty_and_duplicate_secrets() {
        let mut masker = OutputMasker::new();
        masker.add_secret("");
        masker.add_secret("dup");
        masker.add_secret("dup");

        assert_eq!(masker.secret_count(), 1);
    }

    #[test]
    fn no_masking_without_secrets() {
        let masker = OutputMasker::default();
        assert_eq!(masker.mask("plain"), "plain");
    }

    #[test]
    fn preview_keeps_last_four() {
        assert_eq!(preview("ghp_abcdefghijkl"), "****ijkl");
    }

    #[test]
    fn preview_hides_short_values() {
        assert_eq!(preview("abc"), "****");
        assert_eq!(preview("12345678"), "********");
        assert_eq!(preview(""), "****");
    }
}
