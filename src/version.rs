use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;
use semver::Version;

/// Matches the first dotted numeric sequence in a release tag.
static VERSION_SEQUENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)*").unwrap());

/// How an observed version relates to the recorded one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionOrdering {
    /// The observed version precedes the recorded one.
    Older,
    /// Both versions are equal.
    Same,
    /// The observed version supersedes the recorded one.
    Newer,
}

/// Extracts the first dotted numeric sequence from a raw release tag and
/// prefixes it with `v`.
///
/// Returns `None` when the tag contains no numeric sequence at all; such a
/// release is treated as unparsable and never recorded.
pub fn normalize_tag(tag: &str) -> Option<String> {
    VERSION_SEQUENCE.find(tag).map(|m| format!("v{}", m.as_str()))
}

/// Parses a version string, with or without a leading `v`, as a semantic
/// version.
pub fn parse(version: &str) -> Option<Version> {
    Version::parse(version.strip_prefix('v').unwrap_or(version)).ok()
}

/// Whether a version string matches the semantic-version grammar.
pub fn is_valid(version: &str) -> bool {
    parse(version).is_some()
}

/// Classifies `observed` against `recorded` under semantic-version
/// precedence (major/minor/patch, then pre-release tags; build metadata
/// carries no precedence).
///
/// Returns `None` when either string fails validation; callers must decide
/// how to surface that before trusting any ordering.
pub fn compare(observed: &str, recorded: &str) -> Option<VersionOrdering> {
    let observed = parse(observed)?;
    let recorded = parse(recorded)?;
    Some(match observed.cmp_precedence(&recorded) {
        Ordering::Less => VersionOrdering::Older,
        Ordering::Equal => VersionOrdering::Same,
        Ordering::Greater => VersionOrdering::Newer,
    })
}
