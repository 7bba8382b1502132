//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, Write};

use anyhow::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_status, display_success, display_warning, format_article_card,
    format_onboarding_slide, format_release, format_release_notes, format_settings,
    format_version_list,
};

/// A command entered on the onboarding prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingCommand {
    Next,
    Previous,
    /// Jump to a slide (0-based)
    GoTo(usize),
    Quit,
}

/// Parses one line of onboarding input.
///
/// Enter or `n` moves forward, `p` moves back, `q` quits and a number from 1
/// jumps to that slide. Anything else is `None`.
pub fn parse_onboarding_input(input: &str) -> Option<OnboardingCommand> {
    match input.trim().to_lowercase().as_str() {
        "" | "n" | "next" => Some(OnboardingCommand::Next),
        "p" | "prev" | "previous" => Some(OnboardingCommand::Previous),
        "q" | "quit" => Some(OnboardingCommand::Quit),
        other => match other.parse::<usize>() {
            Ok(position) if position > 0 => Some(OnboardingCommand::GoTo(position - 1)),
            _ => None,
        },
    }
}

/// Prompts for the next onboarding command, asking again on unrecognised input.
pub fn prompt_onboarding_command(slide_count: usize) -> Result<OnboardingCommand> {
    loop {
        print!(
            "\n[Enter/n] next  [p] previous  [1-{}] jump  [q] quit: ",
            slide_count
        );
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(OnboardingCommand::Quit);
        }

        match parse_onboarding_input(&input) {
            Some(command) => return Ok(command),
            None => display_error(&format!("Unrecognised input '{}'", input.trim())),
        }
    }
}

/// Prompts user to select a version from the release notes.
///
/// If only one version is available, returns it directly without prompting.
/// Otherwise displays numbered list and accepts 1-based index selection.
/// Default selection is the first version (index 1) if user presses Enter.
///
/// # Arguments
/// * `versions` - Versions in document order
///
/// # Returns
/// * `Ok(String)` - The selected version
/// * `Err` - If selection is invalid or no versions exist
pub fn select_version(versions: &[&str]) -> Result<String> {
    match versions {
        [] => return Err(anyhow::anyhow!("No versions to choose from")),
        [only] => return Ok(only.to_string()),
        _ => {}
    }

    println!("\n{}", console::style("Available versions:").bold());
    for (i, version) in versions.iter().enumerate() {
        println!("  {}. {}", i + 1, version);
    }

    print!("\nSelect a version (1-{}) [default: 1]: ", versions.len());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let selection = input.trim();

    // If empty input, default to first version (index 1)
    let index = if selection.is_empty() {
        1
    } else {
        selection.parse::<usize>().unwrap_or(0)
    };

    if index > 0 && index <= versions.len() {
        Ok(versions[index - 1].to_string())
    } else {
        Err(anyhow::anyhow!("Invalid selection"))
    }
}
