//! POSIX shell escaping
//!
//! Every value token of a generated command is wrapped for safe inclusion
//! as a single-quoted shell argument.

/// Quote a value as a single shell word.
///
/// Wraps the value in single quotes and replaces every embedded single
/// quote with `'\''` (close quote, escaped literal quote, reopen quote).
/// Nothing else is special inside single quotes, so newlines, `$`,
/// backticks and double quotes pass through untouched.
pub fn shell_escape(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values_are_quoted() {
        assert_eq!(shell_escape("hello"), "'hello'");
        assert_eq!(shell_escape("hello world"), "'hello world'");
        assert_eq!(shell_escape(""), "''");
    }

    #[test]
    fn test_embedded_quote_reopens() {
        assert_eq!(shell_escape("o'neill"), r"'o'\''neill'");
        assert_eq!(shell_escape("''"), r"''\'''\'''");
    }

    #[test]
    fn test_inert_specials_untouched() {
        assert_eq!(
            shell_escape(r#"Hello $123 o'neill -"-"#),
            r#"'Hello $123 o'\''neill -"-'"#
        );
        assert_eq!(shell_escape("hello\nworld"), "'hello\nworld'");
        assert_eq!(shell_escape("`pwd` $(id)"), "'`pwd` $(id)'");
    }
}
