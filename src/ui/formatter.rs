//! Pure formatting functions for UI output.
//!
//! The `format_*` functions build the text and are testable; the `display_*`
//! functions print it.

use console::style;

use crate::article::ArticleCard;
use crate::onboarding::OnboardingTour;
use crate::release_notes::{ReleaseInfo, ReleaseNotesStore};
use crate::settings::Settings;
use crate::warning::ReaderWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal warning to the user.
pub fn display_warning(warning: &ReaderWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Format a single release: heading with version, date and author, followed
/// by one indented line per note.
///
/// Missing dates and authors are omitted rather than shown as placeholders.
pub fn format_release(version: &str, info: &ReleaseInfo) -> String {
    let mut heading = format!("{}", style(format!("v{}", version)).bold());
    match info.release_date.as_deref() {
        Some(date) => heading.push_str(&format!(" ({})", date)),
        None => heading.push_str(&format!(" {}", style("(unreleased)").dim())),
    }
    if let Some(author) = info.release_author.as_deref() {
        heading.push_str(&format!(" by {}", author));
    }

    let mut out = heading;
    for line in info.release_notes.joined().lines() {
        out.push_str(&format!("\n  - {}", line));
    }
    out
}

/// Format every release in document order, headed by the repository link.
pub fn format_release_notes(store: &ReleaseNotesStore) -> String {
    let mut out = format!(
        "{}\n{}",
        style("Release notes").bold().underlined(),
        style(store.git_repo_url()).cyan()
    );
    for version in store.versions() {
        if let Some(info) = store.release_info(version) {
            out.push_str("\n\n");
            out.push_str(&format_release(version, info));
        }
    }
    out
}

/// Format the version list, marking the latest release.
pub fn format_version_list(store: &ReleaseNotesStore) -> String {
    let latest = store.latest_version();
    let mut out = format!("{}", style("Releases:").bold());
    for version in store.versions() {
        if Some(version) == latest {
            out.push_str(&format!("\n  - {} {}", version, style("(latest)").green()));
        } else {
            out.push_str(&format!("\n  - {}", version));
        }
    }
    out
}

/// Format the effective reader settings.
pub fn format_settings(settings: &Settings) -> String {
    format!(
        "{}\n  open links in new tab: {} (target {})\n  show images:           {}",
        style("Reader settings:").bold(),
        settings.open_new_tab,
        settings.link_target(),
        settings.show_images
    )
}

/// Format an article card as it would appear in the feed.
pub fn format_article_card(card: &ArticleCard) -> String {
    let mut out = format!("{}", style(&card.title).bold());
    match card.author.as_deref() {
        Some(author) => out.push_str(&format!("\n{} · {}", author, card.published)),
        None => out.push_str(&format!("\n{}", card.published)),
    }
    if let Some(summary) = card.summary.as_deref() {
        out.push_str(&format!("\n\n{}", summary));
    }
    if card.has_image {
        if let Some(src) = card.image_src.as_deref() {
            out.push_str(&format!("\n\n[image] {}", src));
        }
    }
    out.push_str(&format!(
        "\n\n{} (opens in {})",
        style(&card.link).cyan(),
        card.target
    ));
    out
}

/// Format the current onboarding slide with a position indicator.
pub fn format_onboarding_slide(tour: &OnboardingTour) -> String {
    let slide = tour.current();
    let dots: String = (0..crate::onboarding::SLIDES.len())
        .map(|i| if i == tour.index() { '●' } else { '○' })
        .collect();

    let body = if slide.caption.is_empty() {
        "Welcome to RSS Reader".to_string()
    } else {
        format!("{}\n  ({})", slide.caption, slide.image)
    };
    format!("\n{}\n  {}", body, dots)
}
