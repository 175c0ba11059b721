#![allow(dead_code)]

use console::style;
use std::fmt;

/// Enhanced error type with suggestions
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Create error for missing data directory
pub fn data_dir_not_found() -> CliError {
    let current_dir = std::env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    CliError::new("No wardtrace data directory found")
        .with_context(format!(
            "No .wardtrace directory exists here or in any parent directory.\n\nCurrent directory: {}",
            current_dir
        ))
        .with_suggestion("Initialize one: wardtrace init")
        .with_suggestion("Or point at an existing one: wardtrace --data-dir <path> ...")
        .with_help("Run: wardtrace init --help")
}

/// Create error for an unparseable record id
pub fn invalid_id(id: &str) -> CliError {
    CliError::new("Invalid record id")
        .with_context(format!("'{}' is not a valid id (expected a UUID).", id))
        .with_suggestion("List records to find the id: wardtrace rooms list")
}

/// Create error for a missing room
pub fn room_not_found(id: &str) -> CliError {
    CliError::new("Room not found")
        .with_context(format!("No saved room has id {}.", id))
        .with_suggestion("List saved rooms: wardtrace rooms list")
}

/// Create error for an unreadable or malformed draft file
pub fn invalid_draft(path: &str, reason: &str) -> CliError {
    CliError::new("Cannot import draft")
        .with_context(format!("Draft file: {}\n\nReason: {}", path, reason))
        .with_suggestion(
            "A draft is JSON with: name, floor_plan {name, image_ref, width_meters, \
             height_meters, canvas_width_px, canvas_height_px}, points [{x, y}, ..], \
             and an optional gateway {x, y, name}",
        )
        .with_help("Run: wardtrace rooms add --help")
}
