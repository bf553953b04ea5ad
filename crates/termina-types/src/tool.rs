//! Tool schema and argument types.

/// Schema describing a command's interface and its help text.
///
/// The `usage` line and `man_page` text are observable output (`--help`,
/// `man`), so their wording is part of the command's contract.
#[derive(Debug, Clone)]
pub struct ToolSchema {
    /// Command name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Usage synopsis, e.g. `ls [OPTION]... [FILE]...`.
    pub usage: String,
    /// Example invocations.
    pub examples: Vec<String>,
    /// Manual page body.
    pub man_page: String,
}

impl ToolSchema {
    /// Create a new tool schema.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            usage: name.clone(),
            name,
            description: description.into(),
            examples: Vec::new(),
            man_page: String::new(),
        }
    }

    /// Set the usage synopsis.
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Add an example invocation.
    pub fn example(mut self, code: impl Into<String>) -> Self {
        self.examples.push(code.into());
        self
    }

    /// Set the manual page text.
    pub fn man_page(mut self, text: impl Into<String>) -> Self {
        self.man_page = text.into();
        self
    }

    /// The `--help` summary: usage, description and examples.
    pub fn help_summary(&self) -> String {
        format!(
            "Usage: {}\n\n{}\n\nExamples:\n{}",
            self.usage,
            self.description,
            self.examples.join("\n")
        )
    }
}

/// Parsed arguments ready for tool execution.
///
/// Input is split on whitespace only, so every argument is a raw token.
/// Flags are not pre-parsed: each command interprets its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolArgs {
    /// Positional arguments in order.
    pub positional: Vec<String>,
}

impl ToolArgs {
    /// Create empty args.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a positional argument by index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.positional.len()
    }

    /// True if there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty()
    }

    /// Check if a literal flag token (e.g. `-a`, `--all`) is present.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.positional.iter().any(|a| a == flag)
    }

    /// Arguments that do not look like flags.
    pub fn operands(&self) -> impl Iterator<Item = &str> {
        self.positional
            .iter()
            .map(String::as_str)
            .filter(|a| !a.starts_with('-'))
    }
}

impl<S: Into<String>> FromIterator<S> for ToolArgs {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            positional: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_summary_lists_examples() {
        let schema = ToolSchema::new("ls", "List directory contents")
            .usage("ls [OPTION]... [FILE]...")
            .example("ls")
            .example("ls -l");
        assert_eq!(
            schema.help_summary(),
            "Usage: ls [OPTION]... [FILE]...\n\nList directory contents\n\nExamples:\nls\nls -l"
        );
    }

    #[test]
    fn operands_skip_flags() {
        let args: ToolArgs = ["-la", "/home", "--all", "x"].into_iter().collect();
        let ops: Vec<_> = args.operands().collect();
        assert_eq!(ops, vec!["/home", "x"]);
        assert!(args.has_flag("-la"));
        assert!(!args.has_flag("-l"));
    }
}
