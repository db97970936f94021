//! Credential file parsing.
//!
//! The credential file uses the standard `.env` format: one `KEY=value`
//! line per credential. The file is append-only, so a key may appear more
//! than once; the last occurrence is authoritative.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{AutoPushError, Result};

/// Parses `.env`-style credential files.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Empty: `KEY=`
/// - Comments: `# This is a comment`
/// - Whitespace around equals: `KEY = value`
/// - Values with equals signs: `TOKEN=abc==`
///
/// # Example
///
/// ```
/// use auto_push::credentials::EnvFileParser;
///
/// let content = r#"
/// # written by auto-push config
/// GITHUB_TOKEN=old
/// WEATHER_API_KEY="k-123"
/// GITHUB_TOKEN=new
/// "#;
///
/// let vars = EnvFileParser::parse(content);
/// assert_eq!(vars.get("GITHUB_TOKEN"), Some(&"new".to_string()));
/// assert_eq!(vars.get("WEATHER_API_KEY"), Some(&"k-123".to_string()));
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse file content into a map; later lines overwrite earlier ones.
    pub fn parse(content: &str) -> HashMap<String, String> {
        Self::parse_entries(content).into_iter().collect()
    }

    /// Parse file content into every `(key, value)` pair, in file order.
    pub fn parse_entries(content: &str) -> Vec<(String, String)> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(Self::parse_line)
            .collect()
    }

    fn parse_line(line: &str) -> Option<(String, String)> {
        let eq_pos = line.find('=')?;
        let key = line[..eq_pos].trim().to_string();
        if key.is_empty() {
            return None;
        }
        let value = Self::unquote(line[eq_pos + 1..].trim());

        Some((key, value))
    }

    /// Remove surrounding quotes from a value.
    fn unquote(value: &str) -> String {
        if value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')))
        {
            value[1..value.len() - 1].to_string()
        } else {
            value.to_string()
        }
    }

    /// Read a credential file, returning its content or `None` if it doesn't exist.
    pub fn read_optional(path: &Path) -> Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(AutoPushError::Persistence {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Format a single `KEY=value` line, including the trailing newline.
    ///
    /// Values that [`parse`](Self::parse) would trim or unquote are wrapped
    /// in one extra pair of double quotes, so they read back unchanged.
    pub fn format_line(key: &str, value: &str) -> String {
        if Self::needs_quotes(value) {
            format!("{}=\"{}\"\n", key, value)
        } else {
            format!("{}={}\n", key, value)
        }
    }

    fn needs_quotes(value: &str) -> bool {
        const QUOTES: [char; 2] = ['"', '\''];
        value.trim() != value || value.starts_with(QUOTES) || value.ends_with(QUOTES)
    }

    /// Check that a key is usable as an environment variable name.
    pub fn is_valid_key(key: &str) -> bool {
        let mut chars = key.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_simple_file() {
        let content = "GITHUB_TOKEN=abc123\nWEATHER_API_KEY=w-1\n";

        let vars = EnvFileParser::parse(content);

        assert_eq!(vars.get("GITHUB_TOKEN"), Some(&"abc123".to_string()));
        assert_eq!(vars.get("WEATHER_API_KEY"), Some(&"w-1".to_string()));
    }

    #[test]
    fn last_occurrence_wins() {
        let content = "GITHUB_TOKEN=first\nGITHUB_TOKEN=second\n";

        let vars = EnvFileParser::parse(content);

        assert_eq!(vars.len(), 1);
        assert_eq!(vars.get("GITHUB_TOKEN"), Some(&"second".to_string()));
    }

    #[test]
    fn entries_keep_duplicates_in_order() {
        let content = "A=1\nB=2\nA=3\n";

        let entries = EnvFileParser::parse_entries(content);

        assert_eq!(
            entries,
            vec![
                ("A".to_string(), "1".to_string()),
                ("B".to_string(), "2".to_string()),
                ("A".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let content = "# comment\n\nKEY=value\n   \n# another\n";

        let vars = EnvFileParser::parse(content);

        assert_eq!(vars.len(), 1);
        assert_eq!(vars.get("KEY"), Some(&"value".to_string()));
    }

    #[test]
    fn handles_quoted_values() {
        let content = "DOUBLE=\"double quoted\"\nSINGLE='single quoted'\nLONE=\"\n";

        let vars = EnvFileParser::parse(content);

        assert_eq!(vars.get("DOUBLE"), Some(&"double quoted".to_string()));
        assert_eq!(vars.get("SINGLE"), Some(&"single quoted".to_string()));
        assert_eq!(vars.get("LONE"), Some(&"\"".to_string()));
    }

    #[test]
    fn handles_values_with_equals() {
        let vars = EnvFileParser::parse("TOKEN=abc==");
        assert_eq!(vars.get("TOKEN"), Some(&"abc==".to_string()));
    }

    #[test]
    fn handles_empty_values() {
        let vars = EnvFileParser::parse("EMPTY=");
        assert_eq!(vars.get("EMPTY"), Some(&"".to_string()));
    }

    #[test]
    fn ignores_lines_without_key() {
        let vars = EnvFileParser::parse("no equals here\n=orphan\nKEY=v\n");
        assert_eq!(vars.len(), 1);
    }

    #[test]
    fn read_optional_returns_none_for_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = EnvFileParser::read_optional(&temp.path().join(".env")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn read_optional_reports_directory_as_persistence_error() {
        let temp = TempDir::new().unwrap();
        let result = EnvFileParser::read_optional(temp.path());
        assert!(matches!(result, Err(AutoPushError::Persistence { .. })));
    }

    #[test]
    fn format_line_appends_newline() {
        assert_eq!(EnvFileParser::format_line("K", "v"), "K=v\n");
        assert_eq!(EnvFileParser::format_line("K", ""), "K=\n");
    }

    #[test]
    fn format_line_quotes_values_parse_would_alter() {
        assert_eq!(EnvFileParser::format_line("K", " padded "), "K=\" padded \"\n");
        assert_eq!(EnvFileParser::format_line("K", "'x'"), "K=\"'x'\"\n");
        assert_eq!(EnvFileParser::format_line("K", "a\"b"), "K=a\"b\n");
    }

    #[test]
    fn formatted_values_parse_back_unchanged() {
        for value in [
            "plain",
            "\"quoted\"",
            " padded ",
            "'x'",
            "\"",
            "'",
            "tail\"",
            "mid\"dle",
            "  ",
            "abc==",
            "",
        ] {
            let line = EnvFileParser::format_line("TOKEN", value);
            let vars = EnvFileParser::parse(&line);
            assert_eq!(vars.get("TOKEN").map(String::as_str), Some(value), "{line:?}");
        }
    }

    #[test]
    fn validates_keys() {
        assert!(EnvFileParser::is_valid_key("GITHUB_TOKEN"));
        assert!(EnvFileParser::is_valid_key("_PRIVATE1"));
        assert!(!EnvFileParser::is_valid_key(""));
        assert!(!EnvFileParser::is_valid_key("1ABC"));
        assert!(!EnvFileParser::is_valid_key("WITH SPACE"));
        assert!(!EnvFileParser::is_valid_key("A=B"));
    }
}
