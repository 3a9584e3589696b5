use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use git_devtags::git::{GitCli, TagStore};
use git_devtags::{output, resolve, ui};

#[derive(clap::Parser)]
#[command(
    name = "resolve-dev-version",
    about = "Resolve the next development tag from the repository's release tags"
)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    let git = GitCli::new();
    if let Err(e) = run(&git) {
        ui::display_error(&e.to_string());
        std::process::exit(e.exit_status());
    }

    Ok(())
}

fn run(store: &dyn TagStore) -> git_devtags::Result<()> {
    let tags = store.list_tags_version_sorted()?;
    let resolution = resolve::resolve_next_dev(&tags)?;

    // The output file designation is resolved here at the boundary; the
    // computation itself never reads the environment.
    let ci_output_file = std::env::var_os(output::CI_OUTPUT_FILE_VAR).map(PathBuf::from);
    output::emit_resolution(&resolution, ci_output_file.as_deref())
}
