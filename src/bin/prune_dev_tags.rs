use anyhow::Result;
use clap::Parser;

use git_devtags::config::{self, Config};
use git_devtags::git::{GitCli, TagStore};
use git_devtags::{prune, ui};

#[derive(clap::Parser)]
#[command(
    name = "prune-dev-tags",
    about = "Prune old -dev git tags, keeping dev tags only for the newest official releases"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Show what would be done without deleting any tags")]
    dry_run: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let git = GitCli::new();
    if let Err(e) = run(&git, &config, args.dry_run) {
        ui::display_error(&e.to_string());
        std::process::exit(e.exit_status());
    }

    Ok(())
}

fn run(store: &dyn TagStore, config: &Config, dry_run: bool) -> git_devtags::Result<()> {
    let tags = store.list_tags()?;
    if tags.is_empty() {
        println!("No tags found.");
        return Ok(());
    }

    // A repository that is entirely pre-release has nothing to protect
    // against, so there is nothing to do. Not an error.
    let Some(plan) = prune::plan_prune(&tags, config.keep_releases) else {
        println!("No official release tags found (x.y.z). Nothing to do.");
        return Ok(());
    };

    ui::display_prune_plan(&plan);

    if plan.doomed.is_empty() {
        return Ok(());
    }

    if dry_run {
        println!("\nDry-run mode: no tags have been deleted.");
        return Ok(());
    }

    prune::execute_plan(store, &plan, &config.remote)?;

    ui::display_success(&format!(
        "Done. Deleted dev tags outside the {} latest official releases (local and {}).",
        config.keep_releases, config.remote
    ));
    Ok(())
}
