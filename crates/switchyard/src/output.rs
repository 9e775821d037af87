//! Output sinks.
//!
//! Everything the engine prints goes through the [`Output`] trait: help
//! pages, error reports and whatever command handlers choose to write. Each
//! call carries a [`Role`] hint; sinks decide what the hint means.
//!
//! - [`ConsoleOutput`] writes to the process streams through `console`,
//!   styling each role with a [`Theme`].
//! - [`BufferOutput`] captures both streams in memory, for tests and for
//!   embedding the engine in another program.

use std::fmt;

use console::Term;
use tracing::debug;

use crate::theme::Theme;

/// What a piece of text is, as far as styling is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Plain,
    Heading,
    Command,
    Description,
    Required,
    Error,
    Tip,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Plain => "plain",
            Role::Heading => "heading",
            Role::Command => "command",
            Role::Description => "description",
            Role::Required => "required",
            Role::Error => "error",
            Role::Tip => "tip",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether [`ConsoleOutput`] applies styles.
///
/// - `Auto` - style when `console` detects a color-capable terminal
/// - `Styled` - always emit ANSI escape codes
/// - `Plain` - never emit escape codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMode {
    #[default]
    Auto,
    Styled,
    Plain,
}

/// A sink for standard and error output.
///
/// Only [`write`](Output::write) and [`error`](Output::error) are required.
pub trait Output {
    /// Writes to the standard stream.
    fn write(&mut self, text: &str, role: Role);

    /// Writes to the error stream.
    fn error(&mut self, text: &str, role: Role);

    fn write_ln(&mut self, text: &str, role: Role) {
        self.write(text, role);
        self.write("\n", Role::Plain);
    }

    fn err_ln(&mut self, text: &str, role: Role) {
        self.error(text, role);
        self.error("\n", Role::Plain);
    }

    /// An empty line on the standard stream.
    fn space(&mut self) {
        self.write("\n", Role::Plain);
    }
}

// ============================================================================
// In-memory capture
// ============================================================================

/// Collects output in two strings.
///
/// With [`with_tags`](BufferOutput::with_tags) every non-plain write is
/// wrapped as `[role]text[/role]`, which makes styling visible in assertions.
#[derive(Debug, Clone, Default)]
pub struct BufferOutput {
    stdout: String,
    stderr: String,
    tags: bool,
}

impl BufferOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags() -> Self {
        Self {
            tags: true,
            ..Self::default()
        }
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    pub fn clear(&mut self) {
        self.stdout.clear();
        self.stderr.clear();
    }

    fn push(tags: bool, buffer: &mut String, text: &str, role: Role) {
        if tags && role != Role::Plain {
            buffer.push_str(&format!("[{role}]{text}[/{role}]"));
        } else {
            buffer.push_str(text);
        }
    }
}

impl Output for BufferOutput {
    fn write(&mut self, text: &str, role: Role) {
        Self::push(self.tags, &mut self.stdout, text, role);
    }

    fn error(&mut self, text: &str, role: Role) {
        Self::push(self.tags, &mut self.stderr, text, role);
    }
}

// ============================================================================
// Terminal
// ============================================================================

/// Writes to stdout and stderr, styling roles with a [`Theme`].
#[derive(Debug, Clone)]
pub struct ConsoleOutput {
    out: Term,
    err: Term,
    theme: Theme,
    out_styled: bool,
    err_styled: bool,
}

impl ConsoleOutput {
    pub fn new(mode: TextMode, theme: Theme) -> Self {
        let (out_styled, err_styled) = match mode {
            TextMode::Auto => (console::colors_enabled(), console::colors_enabled_stderr()),
            TextMode::Styled => (true, true),
            TextMode::Plain => (false, false),
        };
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            out_styled,
            err_styled,
        }
    }

    fn paint(&self, text: &str, role: Role, styled: bool) -> String {
        if !styled || role == Role::Plain {
            return text.to_string();
        }
        self.theme
            .style(role)
            .force_styling(true)
            .apply_to(text)
            .to_string()
    }
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new(TextMode::Auto, Theme::default())
    }
}

impl Output for ConsoleOutput {
    fn write(&mut self, text: &str, role: Role) {
        let painted = self.paint(text, role, self.out_styled);
        if let Err(err) = self.out.write_str(&painted) {
            debug!(%err, "stdout write failed");
        }
    }

    fn error(&mut self, text: &str, role: Role) {
        let painted = self.paint(text, role, self.err_styled);
        if let Err(err) = self.err.write_str(&painted) {
            debug!(%err, "stderr write failed");
        }
    }
}
