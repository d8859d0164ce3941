use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use tag_release::config;
use tag_release::git::{Git2Repository, Repository};
use tag_release::notes::ReleaseNotes;
use tag_release::release::{self, ReleaseOutcome, ReleaseStep};
use tag_release::ui;

#[derive(clap::Parser)]
#[command(
    name = "tag-release",
    version,
    about = "Make release commits and tag"
)]
struct Args {
    #[arg(help = "Release version number MAJOR.MINOR.PATCH")]
    release_version: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(outcome) => {
            ui::display_release_summary(&outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ReleaseOutcome> {
    let repo = Git2Repository::open(".").context("Not in a git repository")?;

    let config_path = config::config_path_from_env();
    let config = config::load_config(config_path.as_deref(), repo.workdir())
        .context("Error loading config")?;

    let notes = ReleaseNotes::new(repo.workdir(), &config.release_notes.directory);
    let tag_prefix = config.tag.prefix.as_str();

    let outcome = release::run_release_with_progress(
        &repo,
        &notes,
        &args.release_version,
        tag_prefix,
        |step| match step {
            ReleaseStep::Verify { version } => {
                ui::display_status(&format!("Verifying release {}", version))
            }
            ReleaseStep::Warning(warning) => ui::display_warning(warning),
            ReleaseStep::MoveNotes { from, to } => ui::display_status(&format!(
                "Moving {} to {}",
                from.display(),
                to.display()
            )),
            ReleaseStep::CommitAndTag { tag } => {
                ui::display_status(&format!("Committing and creating tag {}", tag))
            }
        },
    )?;
    ui::display_success(&format!("Created tag: {}", outcome.tag));

    Ok(outcome)
}
