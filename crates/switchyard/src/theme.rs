//! Role styling for terminal output.

use std::collections::HashMap;

use console::Style;

use crate::output::Role;

/// Maps each [`Role`] to a `console` style.
///
/// Roles without an entry render unstyled.
///
/// ```rust
/// use console::Style;
/// use switchyard::{Role, Theme};
///
/// let theme = Theme::default().add(Role::Command, Style::new().cyan().bold());
/// assert_eq!(theme.len(), Theme::default().len());
/// ```
#[derive(Debug, Clone)]
pub struct Theme {
    styles: HashMap<Role, Style>,
}

impl Theme {
    /// An empty theme.
    pub fn new() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    /// Sets the style for `role`, replacing any previous one.
    pub fn add(mut self, role: Role, style: Style) -> Self {
        self.styles.insert(role, style);
        self
    }

    pub fn style(&self, role: Role) -> Style {
        self.styles.get(&role).cloned().unwrap_or_else(Style::new)
    }

    pub fn has(&self, role: Role) -> bool {
        self.styles.contains_key(&role)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::new()
            .add(Role::Heading, Style::new().bold())
            .add(Role::Command, Style::new().yellow().bold())
            .add(Role::Description, Style::new().green())
            .add(Role::Required, Style::new().red())
            .add(Role::Error, Style::new().red().bold())
            .add(Role::Tip, Style::new().dim())
    }
}
