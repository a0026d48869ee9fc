/// Extracts a strict `x.y.z` version from a tag like `v1.2.3` or
/// `v1.2.3-4-gabcd`. The packaging tooling downstream rejects anything with
/// a pre-release or build suffix, so only a plain numeric triple qualifies.
pub fn extract_semantic_version(tag: &str) -> Option<&str> {
    let tag = tag.strip_prefix('v').unwrap_or(tag);
    let version = match tag.split_once('-') {
        Some((head, _)) => head,
        None => tag,
    };
    is_numeric_triple(version).then_some(version)
}

/// Everything after the first `-` of a loose descriptor, used as the
/// release-candidate marker. A descriptor without a `-` has no marker.
pub fn rc_suffix(descriptor: &str) -> &str {
    descriptor
        .split_once('-')
        .map(|(_, rest)| rest)
        .unwrap_or("")
}

fn is_numeric_triple(candidate: &str) -> bool {
    let fields: Vec<&str> = candidate.split('.').collect();
    fields.len() == 3
        && fields
            .iter()
            .all(|field| !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit()))
}
