use std::fmt;
use std::path::{Path, PathBuf};

/// An immediate entry of the base directory considered for publishing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateDirectory {
    pub path: PathBuf,
    pub is_dir: bool,
    pub has_descriptor: bool,
}

impl CandidateDirectory {
    pub fn inspect(path: PathBuf, descriptor_file: &str) -> Self {
        let is_dir = path.is_dir();
        let has_descriptor = is_dir && path.join(descriptor_file).is_file();
        Self {
            path,
            is_dir,
            has_descriptor,
        }
    }

    pub fn qualifies(&self) -> bool {
        self.is_dir && self.has_descriptor
    }
}

/// Upload invocation. Arguments are kept verbatim; patterns such as `*.jar`
/// are left for the shell to expand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl TransferCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for TransferCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryOutcome {
    Published(CommandOutput),
    DryRun,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub base_dir: PathBuf,
    pub entries: Vec<(PathBuf, DirectoryOutcome)>,
}

impl PublishReport {
    pub fn new(base_dir: &Path) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, dir: PathBuf, outcome: DirectoryOutcome) {
        self.entries.push((dir, outcome));
    }

    pub fn published(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, o)| matches!(o, DirectoryOutcome::Published(_)))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, o)| matches!(o, DirectoryOutcome::Skipped))
            .count()
    }

    pub fn dry_runs(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, o)| matches!(o, DirectoryOutcome::DryRun))
            .count()
    }

    /// Transfers that ran but reported a non-success exit status.
    pub fn failed(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, o)| matches!(o, DirectoryOutcome::Published(out) if !out.success()))
            .count()
    }
}
