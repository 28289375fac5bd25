use derive_new::new;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Porcelain code for untracked entries
pub const UNTRACKED_CODE: &str = "??";

/// Which kinds of change count; nothing selected means everything counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct StatusFilter {
    pub worktree: bool,
    pub index: bool,
    pub untracked: bool,
}

impl StatusFilter {
    pub fn is_unfiltered(&self) -> bool {
        !(self.worktree || self.index || self.untracked)
    }

    /// Whether a raw porcelain line (`XY path`) belongs to a selected kind
    ///
    /// `X` is the index column, `Y` the work tree column.
    pub fn admits(&self, line: &str) -> bool {
        if self.is_unfiltered() {
            return true;
        }

        let mut columns = line.chars();
        let (Some(x), Some(y)) = (columns.next(), columns.next()) else {
            return false;
        };
        let changed = |column: char| !matches!(column, ' ' | '?' | '!');

        (self.untracked && x == '?' && y == '?')
            || (self.index && changed(x))
            || (self.worktree && changed(y))
    }
}

/// Changes of a single working tree grouped by porcelain status code
///
/// Paths keep the order in which git reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReport {
    entries: BTreeMap<String, Vec<PathBuf>>,
}

impl StatusReport {
    /// Build a report from `git status --porcelain` lines
    pub fn parse<I, S>(work_tree: &Path, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = StatusReport::default();
        lines
            .into_iter()
            .for_each(|line| report.push_line(work_tree, line.as_ref()));
        report
    }

    /// Add one porcelain line
    ///
    /// The first whitespace separated field is the code, the second the
    /// path relative to `work_tree`; anything after that is ignored.
    pub fn push_line(&mut self, work_tree: &Path, line: &str) {
        let mut fields = line.split_whitespace();
        let (Some(code), Some(path)) = (fields.next(), fields.next()) else {
            if !line.trim().is_empty() {
                warn!(work_tree = %work_tree.display(), line, "Ignoring malformed status line");
            }
            return;
        };

        if code == UNTRACKED_CODE && Self::is_self_named(work_tree, Path::new(path)) {
            // most likely a binary built into a directory of the same name
            debug!(work_tree = %work_tree.display(), path, "Ignoring self-named untracked entry");
            return;
        }

        self.insert(code, PathBuf::from(path));
    }

    pub fn insert(&mut self, code: &str, path: PathBuf) {
        self.entries.entry(code.to_string()).or_default().push(path);
    }

    fn is_self_named(work_tree: &Path, path: &Path) -> bool {
        let full_path = work_tree.join(path);
        let parent_name = full_path.parent().and_then(Path::file_name);

        matches!(
            (full_path.file_name(), parent_name),
            (Some(name), Some(parent)) if name == parent
        )
    }

    pub fn is_clean(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &BTreeMap<String, Vec<PathBuf>> {
        &self.entries
    }

    pub fn paths(&self, code: &str) -> &[PathBuf] {
        self.entries.get(code).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of affected paths per code, codes in lexicographic order
    pub fn counts(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(code, paths)| (code.as_str(), paths.len()))
    }
}
