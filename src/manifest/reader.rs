//! Manifest reading
//!
//! The consuming side of the manifest contract: the engine resolves "first
//! bitmap in directory X" by reading the category's resource list instead
//! of scanning the directory at runtime.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;

/// Read a manifest file into its list of asset-relative resource paths.
///
/// One entry per non-blank line, trimmed of trailing CR/LF. Entries keep
/// their forward-slash form.
pub fn read_manifest(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let mut entries = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let entry = line.trim_end_matches(['\r', '\n']);
        if !entry.is_empty() {
            entries.push(entry.to_string());
        }
    }
    Ok(entries)
}

/// Find the first entry located directly inside `dir`.
///
/// `dir` is a forward-slash directory path relative to the asset root, with
/// no trailing slash. An entry matches when it is `dir/<file>` with no
/// further subdirectory, so `graphic/characters/hero` will not match
/// entries under `hero2/` or `hero/alt/`.
#[must_use]
pub fn find_first_in_dir<'a, S: AsRef<str>>(entries: &'a [S], dir: &str) -> Option<&'a str> {
    let dir = dir.trim_end_matches('/');
    entries.iter().find_map(|entry| {
        let entry: &str = entry.as_ref();
        let in_dir = entry
            .strip_prefix(dir)
            .and_then(|rest| rest.strip_prefix('/'))
            .is_some_and(|file| !file.is_empty() && !file.contains('/'));
        in_dir.then_some(entry)
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_read_manifest_round_trip() {
        let temp = TempDir::new().unwrap();
        let list = temp.path().join("tiles.txt");
        fs::write(&list, "graphic/tiles/grass/0.bmp\ngraphic/tiles/grass/1.bmp\n").unwrap();

        let entries = read_manifest(&list).unwrap();

        assert_eq!(
            entries,
            vec!["graphic/tiles/grass/0.bmp", "graphic/tiles/grass/1.bmp"]
        );
    }

    #[test]
    fn test_read_manifest_skips_blank_lines_and_cr() {
        let temp = TempDir::new().unwrap();
        let list = temp.path().join("faces.txt");
        fs::write(&list, "graphic/faces/a.bmp\r\n\ngraphic/faces/b.bmp\n").unwrap();

        let entries = read_manifest(&list).unwrap();

        assert_eq!(entries, vec!["graphic/faces/a.bmp", "graphic/faces/b.bmp"]);
    }

    #[test]
    fn test_find_first_in_dir() {
        let entries = [
            "graphic/characters/hero2/0.bmp",
            "graphic/characters/hero/alt/0.bmp",
            "graphic/characters/hero/0.bmp",
            "graphic/characters/hero/1.bmp",
        ];

        assert_eq!(
            find_first_in_dir(&entries, "graphic/characters/hero"),
            Some("graphic/characters/hero/0.bmp")
        );
        assert_eq!(find_first_in_dir(&entries, "graphic/characters/ghost"), None);
    }
}
