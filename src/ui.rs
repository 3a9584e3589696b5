//! Terminal reporting helpers.
//!
//! Small display functions shared by both binaries, plus the pruner's plan
//! report. Errors go to stderr, everything else to stdout.

use console::style;

use crate::prune::PrunePlan;

/// Print an error message in red to stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print the full pruning report: every official release found, the
/// protected lineages, and the dev tags marked for deletion (sorted for
/// display). Printed in all cases, dry-run or not.
pub fn display_prune_plan(plan: &PrunePlan) {
    println!("{}", style("Official releases found (sorted):").bold());
    for lineage in &plan.official {
        println!("  {}", lineage);
    }

    println!(
        "\n{}",
        style("Keeping dev tags ONLY for the following official releases:").bold()
    );
    for lineage in &plan.protected {
        println!("  {}", lineage);
    }

    if plan.doomed.is_empty() {
        println!("\nNo dev tags need to be deleted.");
    } else {
        println!("\n{}", style("Dev tags to delete:").bold());
        let mut doomed = plan.doomed.clone();
        doomed.sort();
        for tag in doomed {
            println!("  {}", tag);
        }
    }
}
