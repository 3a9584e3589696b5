//! Pruning of obsolete development tags.
//!
//! Dev tags are kept only for the newest official release lineages; every
//! other lineage's dev tags are deleted, locally and on the remote. The
//! decision is computed up front as a [PrunePlan] value so it can be
//! reported (and tested) independently of the deletions.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::Result;
use crate::git::TagStore;
use crate::ui;
use crate::version::{parse_tag, VersionKey};

/// The outcome of the pruning decision, before anything is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrunePlan {
    /// All distinct official release lineages, sorted ascending by numeric
    /// `(major, minor, patch)` order.
    pub official: Vec<VersionKey>,
    /// The protected lineages (the newest entries of `official`); their dev
    /// tags are never deleted.
    pub protected: Vec<VersionKey>,
    /// Dev tags marked for deletion, grouped by lineage in key order,
    /// within a lineage in tag-listing order.
    pub doomed: Vec<String>,
}

/// Computes the pruning decision for a tag list.
///
/// Tags not matching the version grammar are silently ignored. Official
/// tags collapse into a set of lineages; dev tags group under their
/// lineage. The newest `keep` lineages are protected (all of them, if
/// fewer than `keep` exist) and every dev tag outside the protected set is
/// marked for deletion.
///
/// # Arguments
/// * `tags` - Tag names as listed by the tool
/// * `keep` - How many of the newest official lineages keep their dev tags
///
/// # Returns
/// * `Some(PrunePlan)` - The decision
/// * `None` - No official release tags exist; nothing to do
pub fn plan_prune(tags: &[String], keep: usize) -> Option<PrunePlan> {
    let mut official: BTreeSet<VersionKey> = BTreeSet::new();
    let mut dev_by_lineage: BTreeMap<VersionKey, Vec<String>> = BTreeMap::new();

    for tag in tags {
        let Some(version) = parse_tag(tag) else {
            continue;
        };
        if version.is_official() {
            official.insert(version.key());
        } else {
            dev_by_lineage
                .entry(version.key())
                .or_default()
                .push(tag.clone());
        }
    }

    if official.is_empty() {
        return None;
    }

    let official: Vec<VersionKey> = official.into_iter().collect();
    let protected: Vec<VersionKey> = official
        .iter()
        .skip(official.len().saturating_sub(keep))
        .copied()
        .collect();

    let mut doomed = Vec::new();
    for (lineage, dev_tags) in &dev_by_lineage {
        if protected.contains(lineage) {
            continue;
        }
        doomed.extend(dev_tags.iter().cloned());
    }

    Some(PrunePlan {
        official,
        protected,
        doomed,
    })
}

/// Deletes every doomed tag in the plan, locally then on `remote`.
///
/// Deletions run strictly one tag at a time; the first failing subprocess
/// aborts the whole run with its error, leaving earlier deletions in
/// place. There is no rollback.
pub fn execute_plan(store: &dyn TagStore, plan: &PrunePlan, remote: &str) -> Result<()> {
    for tag in &plan.doomed {
        ui::display_status(&format!("Deleting tag: {}", tag));
        store.delete_local_tag(tag)?;
        store.delete_remote_tag(remote, tag)?;
    }
    Ok(())
}
