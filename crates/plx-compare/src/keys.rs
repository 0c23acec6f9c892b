use std::collections::BTreeSet;

use plx_core::normalize_opt;

use crate::defaults::fill_defaults;
use crate::record::{VersionRecord, MODEL_FIELD};

/// Fields never surfaced by key classification.
pub const DEFAULT_BLACKLIST: [&str; 2] = ["id", "alias"];

/// Fields whose values differ across the versions.
///
/// Versions are default-filled first, the field universe is the union of
/// all field names minus the blacklist, and `model` is always excluded here
/// because callers render model differences separately. Fewer than two
/// versions cannot differ.
pub fn differing_keys(versions: &[VersionRecord]) -> BTreeSet<String> {
    if versions.len() < 2 {
        return BTreeSet::new();
    }
    let filled: Vec<VersionRecord> = versions.iter().map(fill_defaults).collect();
    let mut keys = union_field_names(&filled);
    for field in DEFAULT_BLACKLIST {
        keys.remove(field);
    }
    keys.remove(MODEL_FIELD);
    keys.into_iter()
        .filter(|field| distinct_normalizations(&filled, field) > 1)
        .collect()
}

/// Fields identical across every version, under the default blacklist.
pub fn matching_keys(versions: &[VersionRecord]) -> BTreeSet<String> {
    matching_keys_excluding(versions, &[])
}

/// Fields identical across every version, with extra excluded fields.
///
/// Header-only views pass `model` here so the header can render it on its
/// own. A single version matches on all of its default-filled fields.
pub fn matching_keys_excluding(
    versions: &[VersionRecord],
    extra_blacklist: &[&str],
) -> BTreeSet<String> {
    if versions.is_empty() {
        return BTreeSet::new();
    }
    let filled: Vec<VersionRecord> = versions.iter().map(fill_defaults).collect();
    let mut keys = union_field_names(&filled);
    for field in DEFAULT_BLACKLIST.iter().chain(extra_blacklist) {
        keys.remove(*field);
    }
    if filled.len() == 1 {
        return keys;
    }
    keys.into_iter()
        .filter(|field| distinct_normalizations(&filled, field) == 1)
        .collect()
}

fn union_field_names(versions: &[VersionRecord]) -> BTreeSet<String> {
    versions
        .iter()
        .flat_map(|version| version.field_names().map(str::to_string))
        .collect()
}

/// Number of distinct canonical encodings a field takes across the set.
fn distinct_normalizations(versions: &[VersionRecord], field: &str) -> usize {
    versions
        .iter()
        .map(|version| normalize_opt(version.get(field)))
        .collect::<BTreeSet<String>>()
        .len()
}
