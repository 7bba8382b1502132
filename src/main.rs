use anyhow::{Context, Result};
use clap::Parser;

use rss_reader::article::{Article, ArticleCard};
use rss_reader::onboarding::{OnboardingTour, TourStep, SLIDES};
use rss_reader::settings;
use rss_reader::ui::{self, OnboardingCommand};
use rss_reader::warning::ReaderWarning;
use rss_reader::ReleaseNotesStore;

#[derive(clap::Parser)]
#[command(
    name = "rss-reader",
    about = "Browse RSS reader release notes, settings and article cards"
)]
struct Args {
    #[arg(short, long, help = "Release notes JSON file (defaults to the bundled notes)")]
    notes: Option<String>,

    #[arg(short, long, help = "Custom settings file path")]
    config: Option<String>,

    #[arg(short, long, help = "Show the notes for a single release")]
    release: Option<String>,

    #[arg(long, help = "Show the notes for the latest release")]
    latest: bool,

    #[arg(long, help = "Choose a release interactively")]
    pick: bool,

    #[arg(short, long, help = "List released versions and exit")]
    list: bool,

    #[arg(long, help = "Print the source repository URL and exit")]
    repo: bool,

    #[arg(long, help = "Show the effective reader settings and exit")]
    settings: bool,

    #[arg(long, help = "Render an article card from a JSON file")]
    article: Option<String>,

    #[arg(long, help = "Walk through the onboarding slides")]
    onboarding: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Args::parse()) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if args.version {
        println!("rss-reader {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if args.settings || args.article.is_some() {
        let settings = settings::load_settings(args.config.as_deref())
            .context("Error loading settings")?;

        if args.settings {
            println!("{}", ui::format_settings(&settings));
        }
        if let Some(path) = args.article.as_deref() {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read article '{}'", path))?;
            let article = Article::from_json(&json)?;
            let card = ArticleCard::new(&article, &settings);
            if settings.show_images && card.image_src.is_none() {
                ui::display_warning(&ReaderWarning::NoImage {
                    title: card.title.clone(),
                });
            }
            println!("{}", ui::format_article_card(&card));
        }
        return Ok(());
    }

    if args.onboarding {
        return run_onboarding();
    }

    let store = match args.notes.as_deref() {
        Some(path) => ReleaseNotesStore::load(path)
            .with_context(|| format!("Failed to load release notes from '{}'", path))?,
        None => ReleaseNotesStore::bundled().context("Bundled release notes are invalid")?,
    };

    if args.repo {
        println!("{}", store.git_repo_url());
        return Ok(());
    }

    if store.versions().is_empty() {
        ui::display_warning(&ReaderWarning::EmptyDocument);
        return Ok(());
    }

    if args.list {
        println!("{}", ui::format_version_list(&store));
        return Ok(());
    }

    let selected = if let Some(version) = args.release {
        Some(version)
    } else if args.latest {
        store.latest_version().map(str::to_string)
    } else if args.pick {
        Some(ui::select_version(&store.versions())?)
    } else {
        None
    };

    match selected {
        Some(version) => show_release(&store, &version),
        None => println!("{}", ui::format_release_notes(&store)),
    }

    Ok(())
}

fn show_release(store: &ReleaseNotesStore, version: &str) {
    let Some(info) = store.release_info(version) else {
        ui::display_warning(&ReaderWarning::VersionNotFound {
            version: version.to_string(),
            available: store.versions().len(),
        });
        return;
    };

    if !info.is_published() {
        ui::display_warning(&ReaderWarning::UnreleasedVersion {
            version: version.to_string(),
        });
    }
    println!("{}", ui::format_release(version, info));
}

fn run_onboarding() -> Result<()> {
    let mut tour = OnboardingTour::new();
    loop {
        println!("{}", ui::format_onboarding_slide(&tour));

        match ui::prompt_onboarding_command(SLIDES.len())? {
            OnboardingCommand::Next => {
                if tour.next() == TourStep::Finished {
                    ui::display_success("You're all set. Happy reading!");
                    return Ok(());
                }
            }
            OnboardingCommand::Previous => {
                tour.previous();
            }
            OnboardingCommand::GoTo(index) => {
                if let Err(e) = tour.go_to(index) {
                    ui::display_error(&e.to_string());
                }
            }
            OnboardingCommand::Quit => {
                ui::display_status("Onboarding skipped.");
                return Ok(());
            }
        }
    }
}
