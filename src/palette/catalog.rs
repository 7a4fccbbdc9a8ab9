//! Command registry for the palette.
//!
//! The site ships eight commands: four page jumps, two theme switches,
//! project search and help. Descriptions may depend on live state (the
//! theme-cycle entry shows the current theme), so the list is rebuilt
//! whenever the palette opens.

use crate::theme::ThemeState;

/// Keyboard shortcut summary shown by the help command
pub const HELP_TEXT: &str =
    "hjkl/arrows=navigate, Enter/Space=select, :=command, /=search, gg=top, G=bottom, Esc=close";

/// Pages of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Projects,
    Contact,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Projects => "/projects",
            Route::Contact => "/contact",
        }
    }
}

/// What running a command does. Dispatched by the caller's [`CommandHandler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    Navigate(Route),
    ToggleThemeMode,
    CycleThemeVariant,
    /// Go to the projects page and focus its search input
    SearchProjects,
    ShowHelp,
}

/// Side-effecting half of the palette: whatever runs a chosen command.
pub trait CommandHandler {
    fn handle(&mut self, action: CommandAction);
}

impl<F: FnMut(CommandAction)> CommandHandler for F {
    fn handle(&mut self, action: CommandAction) {
        self(action)
    }
}

/// A palette entry
#[derive(Debug, Clone, PartialEq)]
pub struct CommandDescriptor {
    /// Unique identifier for the entry
    pub id: String,
    /// Display name shown in results
    pub title: String,
    /// Shown below the title
    pub description: String,
    /// Extra words the entry can be found by
    pub keywords: Vec<String>,
    pub action: CommandAction,
}

impl CommandDescriptor {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        keywords: &[&str],
        action: CommandAction,
    ) -> Self {
        CommandDescriptor {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            action,
        }
    }
}

/// The site's commands, with descriptions reflecting `theme`.
pub fn default_commands(theme: &ThemeState) -> Vec<CommandDescriptor> {
    vec![
        CommandDescriptor::new(
            "about",
            "Open About",
            "View profile and background",
            &["about", "profile", "bio", "background"],
            CommandAction::Navigate(Route::About),
        ),
        CommandDescriptor::new(
            "projects",
            "Open Projects",
            "Browse project portfolio",
            &["projects", "portfolio", "work", "code"],
            CommandAction::Navigate(Route::Projects),
        ),
        CommandDescriptor::new(
            "contact",
            "Open Contact",
            "Get in touch",
            &["contact", "email", "reach", "touch"],
            CommandAction::Navigate(Route::Contact),
        ),
        CommandDescriptor::new(
            "home",
            "Go Home",
            "Return to landing page",
            &["home", "landing", "main"],
            CommandAction::Navigate(Route::Home),
        ),
        CommandDescriptor::new(
            "theme-toggle",
            "Toggle Theme Mode",
            "Switch between light and dark mode",
            &["theme", "dark", "light", "mode", "toggle"],
            CommandAction::ToggleThemeMode,
        ),
        CommandDescriptor::new(
            "theme-cycle",
            "Cycle Theme Variant",
            format!("Current: {}", theme.name()),
            &["theme", "variant", "color", "style", "neutral", "warm", "cool"],
            CommandAction::CycleThemeVariant,
        ),
        CommandDescriptor::new(
            "search",
            "Search Projects",
            "Focus project search",
            &["search", "find", "filter", "projects"],
            CommandAction::SearchProjects,
        ),
        CommandDescriptor::new(
            "help",
            "Show Help",
            "Display keyboard shortcuts",
            &["help", "shortcuts", "keys", "commands"],
            CommandAction::ShowHelp,
        ),
    ]
}
