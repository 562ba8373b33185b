//! Human-readable error rendering using miette
//!
//! This module renders eachwise errors as graphical reports with their
//! diagnostic code and help text.

use crate::Error;
use miette::{GraphicalReportHandler, GraphicalTheme, MietteDiagnostic};
use std::io::Write;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The character set to use for rendering.
    /// Defaults to Unicode for rich visual output.
    pub charset: CharSet,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig::default()
    }
}

impl RenderConfig {
    const fn default() -> Self {
        Self {
            color: true,
            charset: CharSet::Unicode,
        }
    }

    fn theme(&self) -> GraphicalTheme {
        match (self.charset, self.color) {
            (CharSet::Unicode, true) => GraphicalTheme::unicode(),
            (CharSet::Unicode, false) => GraphicalTheme::unicode_nocolor(),
            (CharSet::Ascii, true) => GraphicalTheme::ascii(),
            (CharSet::Ascii, false) => GraphicalTheme::none(),
        }
    }
}

/// Convert an error into a miette diagnostic carrying its code and help.
pub fn to_diagnostic(error: &Error) -> MietteDiagnostic {
    let diagnostic = MietteDiagnostic::new(error.to_string()).with_code(error.code());
    match error.help() {
        Some(help) => diagnostic.with_help(help),
        None => diagnostic,
    }
}

/// Render an error with graphical formatting to stderr using default config.
///
/// # Example
/// ```no_run
/// use eachwise::{mutate, render_error};
///
/// let mut numbers = vec![1, 2, 3];
/// if let Err(e) = mutate(0, 5, &mut numbers) {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// This is the main rendering function. Use this when you need control over
/// the output destination or rendering options.
///
/// # Example
/// ```
/// use eachwise::{Error, RenderConfig, render_error_to};
///
/// let error = Error::invalid_argument("callback is not a function, found int");
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&error, &mut buf, &config).unwrap();
/// assert!(String::from_utf8_lossy(&buf).contains("callback is not a function"));
/// ```
pub fn render_error_to(
    error: &Error,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let handler = GraphicalReportHandler::new_themed(config.theme());
    let mut rendered = String::new();
    handler
        .render_report(&mut rendered, &to_diagnostic(error))
        .map_err(|_| std::io::Error::other("failed to format error report"))?;
    writer.write_all(rendered.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OutOfRange, mutate};
    use expect_test::expect;
    use pretty_assertions::assert_eq;

    const UNICODE_CONFIG: RenderConfig = RenderConfig {
        color: false,
        charset: CharSet::Unicode,
    };

    const ASCII_CONFIG: RenderConfig = RenderConfig {
        color: false,
        charset: CharSet::Ascii,
    };

    fn render_error_string(error: &Error, config: &RenderConfig) -> String {
        let mut buf = Vec::new();
        render_error_to(error, &mut buf, config).unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn out_of_range() -> Error {
        let mut numbers = vec![1, 2, 3];
        mutate(0, 5, &mut numbers).unwrap_err()
    }

    #[test]
    fn test_error_debug() {
        expect![[r#"IndexOutOfRange { index: 5, len: 3 }"#]]
            .assert_eq(&format!("{:?}", out_of_range()));
    }

    #[test]
    fn test_diagnostic_carries_code_and_help() {
        use miette::Diagnostic;

        let diagnostic = to_diagnostic(&out_of_range());

        assert_eq!(
            diagnostic.code().map(|code| code.to_string()).as_deref(),
            Some("eachwise::index_out_of_range")
        );
        assert!(diagnostic.help().is_some());
    }

    #[test]
    fn test_out_of_range_unicode() {
        let output = render_error_string(&out_of_range(), &UNICODE_CONFIG);

        assert!(output.contains("eachwise::index_out_of_range"));
        assert!(output.contains("index 5 is out of range for a sequence of length 3"));
        assert!(output.contains(&format!("{:?}", OutOfRange::Ignore)));
        assert!(!output.contains('\u{1b}'), "no ANSI escapes without color");
    }

    #[test]
    fn test_invalid_argument_ascii() {
        let error = Error::invalid_argument("string is not iterable");

        let output = render_error_string(&error, &ASCII_CONFIG);

        assert!(output.contains("eachwise::invalid_argument"));
        assert!(output.contains("invalid argument: string is not iterable"));
        assert!(output.is_ascii());
    }
}
