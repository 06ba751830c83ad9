//! Shell configuration

/// Presentation options for an interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Print the banner and the numbered menu before each prompt
    pub show_menu: bool,

    /// Render listings and return outcomes as pretty JSON
    pub json: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            show_menu: true,
            json: false,
        }
    }
}
