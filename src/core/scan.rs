use crate::domain::model::CandidateDirectory;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Immediate subdirectories of `base`, sorted by name. Dot entries are left out,
/// the same set a shell `base/*` glob would produce.
///
/// A base that does not exist, or is not a directory, has no candidates.
pub fn scan_candidates(base: &Path, descriptor_file: &str) -> Result<Vec<CandidateDirectory>> {
    if !base.is_dir() {
        tracing::debug!("{} is not a directory, nothing to scan", base.display());
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(base)? {
        let entry = entry?;
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }
        paths.push(base.join(name));
    }
    paths.sort();

    let candidates: Vec<CandidateDirectory> = paths
        .into_iter()
        .map(|path| CandidateDirectory::inspect(path, descriptor_file))
        .filter(|candidate| candidate.is_dir)
        .collect();

    tracing::debug!(
        "Found {} candidate directories in {}",
        candidates.len(),
        base.display()
    );
    Ok(candidates)
}
