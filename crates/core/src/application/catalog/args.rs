// Argument string assembly for catalog tools

use crate::domain::error::{DomainError, Result};
use std::fmt::Display;

/// Flag-append builder producing the argument string handed to the executor
///
/// Absent and empty values are skipped. Values are shell-quoted only when
/// they need it, so the executor's word splitter yields them back unchanged.
#[derive(Debug, Clone)]
pub struct ArgumentBuilder {
    parts: Vec<String>,
}

impl ArgumentBuilder {
    /// Start with a (possibly multi-word) subcommand, pushed verbatim
    pub fn new(subcommand: &str) -> Self {
        Self {
            parts: vec![subcommand.to_string()],
        }
    }

    /// Append a bare value if present
    pub fn positional<V: Display>(mut self, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.push_value(value);
        }
        self
    }

    /// Append a bare value that has already been validated
    pub fn value<V: Display>(mut self, value: V) -> Self {
        self.push_value(value);
        self
    }

    /// Append `flag value` if the value is present and non-empty
    pub fn option<V: Display>(mut self, flag: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            let rendered = value.to_string();
            if !rendered.is_empty() {
                self.parts.push(flag.to_string());
                self.parts.push(quote(&rendered));
            }
        }
        self
    }

    /// Append `flag` when enabled
    pub fn switch(mut self, flag: &str, enabled: bool) -> Self {
        if enabled {
            self.parts.push(flag.to_string());
        }
        self
    }

    pub fn build(self) -> String {
        self.parts.join(" ")
    }

    fn push_value<V: Display>(&mut self, value: V) {
        let rendered = value.to_string();
        if !rendered.is_empty() {
            self.parts.push(quote(&rendered));
        }
    }
}

fn quote(value: &str) -> String {
    shell_words::quote(value).into_owned()
}

/// Reject a blank required parameter
pub fn require<'a>(
    tool: &'static str,
    parameter: &'static str,
    value: &'a str,
) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingParameter { tool, parameter });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_absent_and_empty_values() {
        let args = ArgumentBuilder::new("build")
            .option("--project", None::<&str>)
            .option("--configuration", Some(""))
            .positional(None::<&str>)
            .build();

        assert_eq!(args, "build");
    }

    #[test]
    fn test_appends_in_call_order() {
        let args = ArgumentBuilder::new("logs")
            .positional(Some("webapi"))
            .switch("--follow", true)
            .switch("--detailed", false)
            .option("--tail", Some(100))
            .build();

        assert_eq!(args, "logs webapi --follow --tail 100");
    }

    #[test]
    fn test_quotes_values_with_spaces() {
        let args = ArgumentBuilder::new("template search")
            .value("web api")
            .option("--tags", Some("a,b"))
            .build();

        assert_eq!(args, "template search 'web api' --tags a,b");
        assert_eq!(
            shell_words::split(&args).unwrap(),
            vec!["template", "search", "web api", "--tags", "a,b"]
        );
    }

    #[test]
    fn test_require_rejects_blank() {
        assert!(require("aspire_template_install", "templateSource", "  ").is_err());
        assert_eq!(
            require("aspire_template_install", "templateSource", "pkg").unwrap(),
            "pkg"
        );
    }
}
