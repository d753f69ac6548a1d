//! Directory traversal
//!
//! Iterative breadth-first walk over the scan root using an explicit
//! work-list, collecting paths of supported manifest files. Excluded
//! directory names are skipped before descending, so nothing inside an
//! excluded directory is ever visited. Unreadable subdirectories are
//! recorded as warnings and the walk continues; only a bad root is
//! fatal.

use crate::error::{NufindError, Result};
use crate::models::Settings;
use crate::parsers::is_manifest_name;
use glob::Pattern;
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;

pub struct Walker {
    settings: Settings,
    warnings: Vec<(PathBuf, NufindError)>,
}

fn classify_dir_error(path: PathBuf, err: std::io::Error) -> NufindError {
    if err.kind() == std::io::ErrorKind::PermissionDenied {
        NufindError::permission_denied(path)
    } else {
        NufindError::directory_traversal_error(path, format!("Failed to read directory: {}", err))
    }
}

impl Walker {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            warnings: Vec::new(),
        }
    }

    /// Walk the tree and return every matched manifest path, in
    /// traversal order.
    pub fn find_manifests(&mut self) -> Result<Vec<PathBuf>> {
        let root = self.settings.scan_path.clone();
        if !root.is_dir() {
            return Err(NufindError::InvalidPath { path: root });
        }

        let patterns = self.compile_exclude_patterns()?;
        let mut matches = Vec::new();
        let mut queue: VecDeque<(PathBuf, usize)> = VecDeque::new();
        queue.push_back((root.clone(), 0));

        while let Some((dir, depth)) = queue.pop_front() {
            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(err) => {
                    // A bad root aborts; a bad subdirectory is skipped
                    if depth == 0 {
                        return Err(classify_dir_error(dir, err));
                    }
                    let err = classify_dir_error(dir.clone(), err);
                    self.warnings.push((dir, err));
                    continue;
                }
            };

            for entry in entries {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        self.warnings
                            .push((dir.clone(), classify_dir_error(dir.clone(), err)));
                        continue;
                    }
                };

                let name = entry.file_name().to_string_lossy().into_owned();
                if self.is_excluded(&name, &patterns) {
                    continue;
                }

                let path = entry.path();
                let file_type = match entry.file_type() {
                    Ok(ft) => ft,
                    Err(err) => {
                        self.warnings
                            .push((path.clone(), NufindError::io_error(err)));
                        continue;
                    }
                };

                if file_type.is_symlink() {
                    if !self.settings.follow_links {
                        continue;
                    }
                    if path.is_dir() {
                        self.enqueue_dir(&mut queue, path, depth);
                    } else if path.is_file() && is_manifest_name(&name) {
                        matches.push(path);
                    }
                } else if file_type.is_dir() {
                    self.enqueue_dir(&mut queue, path, depth);
                } else if file_type.is_file() && is_manifest_name(&name) {
                    matches.push(path);
                }
            }
        }

        Ok(matches)
    }

    fn enqueue_dir(&self, queue: &mut VecDeque<(PathBuf, usize)>, path: PathBuf, depth: usize) {
        if let Some(max) = self.settings.max_depth {
            if depth + 1 > max {
                return;
            }
        }
        queue.push_back((path, depth + 1));
    }

    /// Check an entry name against the fixed excluded set and any
    /// user-supplied glob patterns.
    fn is_excluded(&self, name: &str, patterns: &[Pattern]) -> bool {
        self.settings.excluded_dirs.contains(name)
            || patterns.iter().any(|p| p.matches(name))
    }

    fn compile_exclude_patterns(&self) -> Result<Vec<Pattern>> {
        self.settings
            .exclude_patterns
            .iter()
            .map(|p| Pattern::new(p).map_err(NufindError::from))
            .collect()
    }

    /// Non-fatal problems collected during traversal.
    pub fn warnings(&self) -> &[(PathBuf, NufindError)] {
        &self.warnings
    }

    /// Drain collected warnings into the caller's accumulator.
    pub fn take_warnings(&mut self) -> Vec<(PathBuf, NufindError)> {
        std::mem::take(&mut self.warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &std::path::Path) {
        fs::write(path, "").unwrap();
    }

    fn settings_for(root: &std::path::Path) -> Settings {
        Settings {
            scan_path: root.to_path_buf(),
            ..Settings::default()
        }
    }

    #[test]
    fn finds_both_manifest_kinds() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("App.csproj"));
        touch(&dir.path().join("packages.config"));
        touch(&dir.path().join("readme.md"));

        let mut walker = Walker::new(settings_for(dir.path()));
        let mut found = walker.find_manifests().unwrap();
        found.sort();
        assert_eq!(found.len(), 2);
        assert!(found[0].ends_with("App.csproj"));
        assert!(found[1].ends_with("packages.config"));
    }

    #[test]
    fn descends_into_subdirectories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("src").join("App");
        fs::create_dir_all(&nested).unwrap();
        touch(&nested.join("App.csproj"));

        let mut walker = Walker::new(settings_for(dir.path()));
        let found = walker.find_manifests().unwrap();
        assert_eq!(found, vec![nested.join("App.csproj")]);
    }

    #[test]
    fn excluded_directories_are_never_entered() {
        let dir = tempdir().unwrap();
        for name in [".git", "bin", "obj", "lib"] {
            let excluded = dir.path().join(name);
            fs::create_dir(&excluded).unwrap();
            touch(&excluded.join("packages.config"));
        }
        touch(&dir.path().join("kept.csproj"));

        let mut walker = Walker::new(settings_for(dir.path()));
        let found = walker.find_manifests().unwrap();
        assert_eq!(found, vec![dir.path().join("kept.csproj")]);
    }

    #[test]
    fn exclude_glob_patterns_match_directory_names() {
        let dir = tempdir().unwrap();
        let generated = dir.path().join("generated-v2");
        fs::create_dir(&generated).unwrap();
        touch(&generated.join("packages.config"));
        touch(&dir.path().join("App.csproj"));

        let mut settings = settings_for(dir.path());
        settings.exclude_patterns = vec!["generated-*".to_string()];
        let mut walker = Walker::new(settings);
        let found = walker.find_manifests().unwrap();
        assert_eq!(found, vec![dir.path().join("App.csproj")]);
    }

    #[test]
    fn max_depth_limits_descent() {
        let dir = tempdir().unwrap();
        let shallow = dir.path().join("a");
        let deep = shallow.join("b");
        fs::create_dir_all(&deep).unwrap();
        touch(&shallow.join("shallow.csproj"));
        touch(&deep.join("deep.csproj"));

        let mut settings = settings_for(dir.path());
        settings.max_depth = Some(1);
        let mut walker = Walker::new(settings);
        let found = walker.find_manifests().unwrap();
        assert_eq!(found, vec![shallow.join("shallow.csproj")]);
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempdir().unwrap();
        let mut settings = settings_for(dir.path());
        settings.scan_path = dir.path().join("does-not-exist");
        let mut walker = Walker::new(settings);
        assert!(matches!(
            walker.find_manifests(),
            Err(NufindError::InvalidPath { .. })
        ));
    }

    #[test]
    fn invalid_exclude_pattern_is_an_error() {
        let dir = tempdir().unwrap();
        let mut settings = settings_for(dir.path());
        settings.exclude_patterns = vec!["[".to_string()];
        let mut walker = Walker::new(settings);
        assert!(matches!(
            walker.find_manifests(),
            Err(NufindError::GlobPattern { .. })
        ));
    }

    #[test]
    fn names_that_only_contain_manifest_suffix_do_not_match() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("App.csproj.orig"));
        touch(&dir.path().join("old.packages.config.bak"));

        let mut walker = Walker::new(settings_for(dir.path()));
        assert!(walker.find_manifests().unwrap().is_empty());
    }
}
