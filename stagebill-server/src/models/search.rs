//! Case-insensitive substring search terms

/// A user-supplied search term, matched literally as a substring
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Wrap a raw term. Absent or empty terms match everything.
    pub fn new(raw: Option<&str>) -> Self {
        Self(raw.unwrap_or_default().to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ILIKE pattern with `\` as the escape character, so `%` and `_`
    /// inside the term match themselves.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for c in self.0.chars() {
            if matches!(c, '\\' | '%' | '_') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_term() {
        assert_eq!(SearchTerm::new(Some("hop")).like_pattern(), "%hop%");
    }

    #[test]
    fn empty_matches_everything() {
        assert_eq!(SearchTerm::new(None).like_pattern(), "%%");
        assert_eq!(SearchTerm::new(Some("")).like_pattern(), "%%");
    }

    #[test]
    fn escapes_wildcards() {
        assert_eq!(SearchTerm::new(Some("50%_off")).like_pattern(), r"%50\%\_off%");
        assert_eq!(SearchTerm::new(Some(r"a\b")).like_pattern(), r"%a\\b%");
    }
}
