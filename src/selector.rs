use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::error::{Result, RotateError};

// --- Helper: List candidate images, sorted by name ---
// Dot files are skipped, everything else counts whatever its type or extension.
pub fn candidates(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_err = |source| RotateError::ReadDir { path: dir.to_path_buf(), source };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        paths.push(entry.path());
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Picks the image to show for `source`.
///
/// A file is returned as is. A directory yields one of its entries, drawn
/// uniformly with a single index from `rng`.
pub fn resolve_with<R: Rng + ?Sized>(source: &Path, rng: &mut R) -> Result<PathBuf> {
    if source.is_file() {
        return Ok(source.to_path_buf());
    }
    if !source.is_dir() {
        return Err(RotateError::SourceNotFound(source.to_path_buf()));
    }

    let mut paths = candidates(source)?;
    if paths.is_empty() {
        return Err(RotateError::NoCandidateImage(source.to_path_buf()));
    }
    let index = rng.random_range(0..paths.len());
    Ok(paths.swap_remove(index))
}

pub fn resolve(source: &Path) -> Result<PathBuf> {
    resolve_with(source, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs::File;
    use tempfile::TempDir;

    fn dir_with(names: &[&str]) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in names {
            File::create(dir.path().join(name)).unwrap();
        }
        dir
    }

    #[test]
    fn file_source_is_returned_unchanged() {
        let dir = dir_with(&["a.png", "b.png"]);
        let file = dir.path().join("a.png");
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(resolve_with(&file, &mut rng).unwrap(), file);
        }
    }

    #[test]
    fn empty_directory_has_no_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve(dir.path()).unwrap_err();
        assert!(matches!(err, RotateError::NoCandidateImage(p) if p == dir.path()));
    }

    #[test]
    fn directory_with_only_dot_files_has_no_candidate() {
        let dir = dir_with(&[".hidden"]);
        assert!(matches!(resolve(dir.path()), Err(RotateError::NoCandidateImage(_))));
    }

    #[test]
    fn missing_source_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(resolve(&missing), Err(RotateError::SourceNotFound(p)) if p == missing));
    }

    #[test]
    fn candidates_are_sorted_and_unfiltered() {
        let dir = dir_with(&["c.txt", "a.jpg", "b"]);
        fs::create_dir(dir.path().join("d")).unwrap();
        let names: Vec<_> = candidates(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.jpg", "b", "c.txt", "d"]);
    }

    #[test]
    fn single_entry_is_always_picked() {
        let dir = dir_with(&["only.png"]);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(resolve_with(dir.path(), &mut rng).unwrap(), dir.path().join("only.png"));
        }
    }

    #[test]
    fn directory_pick_is_uniform() {
        let names = ["1.png", "2.png", "3.png", "4.png", "5.png"];
        let dir = dir_with(&names);
        let mut rng = StdRng::seed_from_u64(42);

        const SAMPLES: usize = 50_000;
        let mut counts = [0usize; 5];
        for _ in 0..SAMPLES {
            let picked = resolve_with(dir.path(), &mut rng).unwrap();
            let name = picked.file_name().unwrap().to_str().unwrap();
            let slot = names.iter().position(|n| *n == name).unwrap();
            counts[slot] += 1;
        }

        let expected = SAMPLES as f64 / names.len() as f64;
        let chi_square: f64 = counts
            .iter()
            .map(|&c| (c as f64 - expected).powi(2) / expected)
            .sum();
        // 4 degrees of freedom, p = 0.001
        assert!(chi_square < 18.47, "chi-square {chi_square} for counts {counts:?}");
    }
}
