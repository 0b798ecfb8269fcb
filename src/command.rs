//! Shell command token sequence

use std::fmt;

/// An ordered sequence of shell tokens.
///
/// Built once per conversion and never mutated after being returned.
/// [`Command::to_string`] (via [`fmt::Display`]) yields a ready to
/// copy/paste command line; [`Command::into_tokens`] yields an exec-style
/// argv for callers that want to spawn the process themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    tokens: Vec<String>,
}

impl Command {
    /// Create an empty command.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one token.
    pub(crate) fn push(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    /// The raw token sequence.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Consume the command, yielding its tokens.
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_join_with_single_spaces() {
        let mut cmd = Command::new();
        cmd.push("curl");
        cmd.push("-X");
        cmd.push("'GET'");
        assert_eq!(cmd.to_string(), "curl -X 'GET'");
        assert_eq!(cmd.tokens(), ["curl", "-X", "'GET'"]);
    }

    #[test]
    fn test_empty_command_renders_empty() {
        assert_eq!(Command::new().to_string(), "");
        assert!(Command::new().into_tokens().is_empty());
    }
}
