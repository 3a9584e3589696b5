//! Next development version resolution.
//!
//! Works off git's own `v:refname` tag order rather than re-sorting from
//! scratch. That order ranks `X.Y.Z-dev.N` after `X.Y.Z`, so when the last
//! version-like tag shares the latest official tag as a string prefix it is
//! collapsed down to the official tag before deriving the next version.
//! That prefix check is the entire correction applied to git's order.

use crate::error::{DevTagsError, Result};
use crate::version::{parse_tag, Version};

/// The resolver's computed outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The most recent tag after the prefix-collapse correction.
    pub latest_tag: String,
    /// The most recent official release tag (`X.Y.Z`).
    pub latest_official_tag: String,
    /// The next development tag to cut.
    pub next_dev_tag: String,
    /// Whether `next_dev_tag` was derived by incrementing an existing
    /// `-dev.N` suffix (as opposed to bumping the patch of an official
    /// release).
    pub incremented_dev: bool,
}

/// Computes the next development tag from a version-sorted tag list.
///
/// # Arguments
/// * `sorted_tags` - All tags in the tool's `v:refname` order
///
/// # Returns
/// * `Ok(Resolution)` - Latest tags and the computed next dev tag
/// * `Err(DevTagsError::NoVersionTags)` - No tag matches the version
///   grammar
/// * `Err(DevTagsError::NoOfficialTags)` - Version tags exist but none is
///   an official `X.Y.Z` release
pub fn resolve_next_dev(sorted_tags: &[String]) -> Result<Resolution> {
    let versions: Vec<(&String, Version)> = sorted_tags
        .iter()
        .filter_map(|tag| parse_tag(tag).map(|v| (tag, v)))
        .collect();

    let (latest_raw, mut latest) = versions.last().cloned().ok_or(DevTagsError::NoVersionTags)?;
    let mut latest_tag = latest_raw.clone();

    let (official_raw, official) = versions
        .iter()
        .rev()
        .find(|(_, v)| v.is_official())
        .cloned()
        .ok_or(DevTagsError::NoOfficialTags)?;
    let latest_official_tag = official_raw.clone();

    // Git ranks a dev tag after its base release, so the raw latest may be
    // a dev tag of an already-released base. Collapse it to the official
    // tag; no other disambiguation is attempted.
    if latest_tag.starts_with(&latest_official_tag) {
        latest = official;
        latest_tag = latest_official_tag.clone();
    }

    let incremented_dev = latest.dev.is_some();
    let next_dev_tag = latest.next_dev().to_string();

    Ok(Resolution {
        latest_tag,
        latest_official_tag,
        next_dev_tag,
        incremented_dev,
    })
}
