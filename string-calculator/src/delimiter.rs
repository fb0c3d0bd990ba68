//! Delimiter set resolution and `//` header parsing

/// Marker that opens a custom delimiter header
pub const HEADER_MARKER: &str = "//";

/// Ordered set of literal delimiter strings
///
/// Never empty: it is seeded from a validated
/// [`CalculatorConfig`](crate::CalculatorConfig).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterSet {
    delimiters: Vec<String>,
    custom: Option<usize>,
}

impl DelimiterSet {
    /// Create a set from the configured defaults
    pub fn new(defaults: &[String]) -> Self {
        Self {
            delimiters: defaults.to_vec(),
            custom: None,
        }
    }

    /// Append the custom delimiter declared by a header
    pub fn push_custom(&mut self, delimiter: impl Into<String>) {
        self.delimiters.push(delimiter.into());
        self.custom = Some(self.delimiters.len() - 1);
    }

    /// All delimiters in match priority order
    pub fn as_slice(&self) -> &[String] {
        &self.delimiters
    }

    /// The custom delimiter, if a header declared one
    pub fn custom(&self) -> Option<&str> {
        self.custom.map(|idx| self.delimiters[idx].as_str())
    }
}

/// Split a headed input into the declared delimiter and the body
///
/// Returns `None` when `input` does not start with `//`. The header runs up
/// to the first newline; without one the body is empty. One outer `[`/`]`
/// pair is stripped from the declared delimiter.
pub fn split_header(input: &str) -> Option<(&str, &str)> {
    let rest = input.strip_prefix(HEADER_MARKER)?;
    let (raw, body) = rest.split_once('\n').unwrap_or((rest, ""));
    Some((strip_brackets(raw), body))
}

fn strip_brackets(raw: &str) -> &str {
    raw.strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .unwrap_or(raw)
}

/// Resolve the active delimiter set and the string to tokenize
pub fn resolve<'a>(
    input: &'a str,
    defaults: &[String],
    allow_custom: bool,
) -> (DelimiterSet, &'a str) {
    let mut set = DelimiterSet::new(defaults);

    if !allow_custom {
        return (set, input);
    }

    match split_header(input) {
        Some((custom, body)) => {
            if custom.is_empty() {
                log::trace!("header declares an empty delimiter, ignoring it");
            } else {
                log::trace!("custom delimiter {custom:?} declared");
                set.push_custom(custom);
            }
            (set, body)
        }
        None => (set, input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Vec<String> {
        vec![",".to_string(), "\n".to_string()]
    }

    #[test]
    fn test_split_header_plain() {
        assert_eq!(split_header("//;\n1;2"), Some((";", "1;2")));
    }

    #[test]
    fn test_split_header_bracketed() {
        assert_eq!(split_header("//[***]\n1***2"), Some(("***", "1***2")));
    }

    #[test]
    fn test_split_header_strips_one_pair_only() {
        assert_eq!(split_header("//[[;]]\n1"), Some(("[;]", "1")));
    }

    #[test]
    fn test_split_header_unbalanced_brackets_kept() {
        assert_eq!(split_header("//[;\n1"), Some(("[;", "1")));
        assert_eq!(split_header("//;]\n1"), Some((";]", "1")));
        assert_eq!(split_header("//[\n1"), Some(("[", "1")));
    }

    #[test]
    fn test_split_header_without_newline() {
        assert_eq!(split_header("//;"), Some((";", "")));
    }

    #[test]
    fn test_split_header_splits_on_first_newline_only() {
        assert_eq!(split_header("//;\n1\n2"), Some((";", "1\n2")));
    }

    #[test]
    fn test_no_header() {
        assert_eq!(split_header("1,2"), None);
        assert_eq!(split_header("/1,2"), None);
    }

    #[test]
    fn test_resolve_default() {
        let (set, body) = resolve("1,2\n3", &defaults(), true);
        assert_eq!(set.as_slice(), &[",", "\n"]);
        assert_eq!(set.custom(), None);
        assert_eq!(body, "1,2\n3");
    }

    #[test]
    fn test_resolve_custom_appended_last() {
        let (set, body) = resolve("//|\n1|2", &defaults(), true);
        assert_eq!(set.as_slice(), &[",", "\n", "|"]);
        assert_eq!(set.custom(), Some("|"));
        assert_eq!(body, "1|2");
    }

    #[test]
    fn test_resolve_empty_custom_ignored() {
        let (set, body) = resolve("//[]\n1,2", &defaults(), true);
        assert_eq!(set.custom(), None);
        assert_eq!(set.as_slice(), &[",", "\n"]);
        assert_eq!(body, "1,2");
    }

    #[test]
    fn test_resolve_headers_disabled() {
        let (set, body) = resolve("//;\n1;2", &defaults(), false);
        assert_eq!(set.custom(), None);
        assert_eq!(body, "//;\n1;2");
    }
}
