//! Path utilities

use std::path::Path;

/// Normalize path separators to forward slashes (for resource lists)
pub fn normalize_path<P: AsRef<Path>>(path: P) -> String {
    path.as_ref().to_string_lossy().replace('\\', "/")
}

/// Express `path` relative to `base`, using forward slashes.
///
/// Resolution runs through three tiers and never fails:
///
/// 1. Structured resolution via [`Path::strip_prefix`]. A target that is
///    already relative is taken as base-relative verbatim, which keeps
///    re-normalization idempotent.
/// 2. Case-insensitive prefix strip of the base string from the target
///    string. Handles drive-letter and separator mismatches between the
///    two paths.
/// 3. The bare file name. Lossy last resort; callers must tolerate an
///    imprecise result here.
pub fn to_relative<P: AsRef<Path>, B: AsRef<Path>>(path: P, base: B) -> String {
    let path = path.as_ref();
    let base = base.as_ref();

    if let Ok(rel) = path.strip_prefix(base) {
        return normalize_path(rel);
    }

    if path.is_relative() {
        return normalize_path(path);
    }

    let p = normalize_path(path);
    let b = normalize_path(base);
    if let Some(stripped) = strip_prefix_ci(&p, &b) {
        return stripped.to_string();
    }

    path.file_name()
        .map_or(p, |name| name.to_string_lossy().into_owned())
}

/// Strip `base` from the front of `path`, ignoring ASCII case, along with
/// any separators that follow it.
fn strip_prefix_ci<'a>(path: &'a str, base: &str) -> Option<&'a str> {
    let prefix = path.as_bytes().get(..base.len())?;
    if prefix.eq_ignore_ascii_case(base.as_bytes()) {
        Some(path[base.len()..].trim_start_matches(['/', '\\']))
    } else {
        None
    }
}
