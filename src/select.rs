use crate::types::Release;

/// Picks the release to track from the hosting API's list.
///
/// Drafts are excluded unconditionally. Prereleases are excluded unless
/// `include_beta` is set. Candidates are considered in the order the API
/// returned them (effectively reverse-chronological), and the first
/// survivor wins.
pub fn select_release(releases: &[Release], include_beta: bool) -> Option<&Release> {
    if let Some(preferred) = releases
        .iter()
        .filter(|r| !r.draft)
        .find(|r| include_beta || !r.prerelease)
    {
        return Some(preferred);
    }

    // Fallback: never report "nothing available" while a draft-free release
    // exists. A repository that only publishes prereleases is still tracked
    // even when beta tracking is off.
    releases.iter().find(|r| !r.draft)
}
