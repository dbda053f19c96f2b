use crate::core::scan::scan_candidates;
use crate::core::workdir::ScopedDir;
use crate::domain::model::{DirectoryOutcome, PublishReport};
use crate::domain::ports::{CommandRunner, PublishSettings};
use crate::utils::error::{PublishError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct Publisher<R: CommandRunner, C: PublishSettings> {
    runner: R,
    settings: C,
    base_dir: PathBuf,
    dry_run: bool,
    strict: bool,
}

impl<R: CommandRunner, C: PublishSettings> Publisher<R, C> {
    pub fn new(runner: R, settings: C, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            settings,
            base_dir: base_dir.into(),
            dry_run: false,
            strict: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Treat a transfer with a non-success exit status as fatal for the run.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub async fn run(&self) -> Result<PublishReport> {
        let mut stdout = std::io::stdout();
        self.run_with_output(&mut stdout).await
    }

    pub async fn run_with_output<W: Write + Send>(&self, out: &mut W) -> Result<PublishReport> {
        let descriptor = self.settings.descriptor_file();
        let command = self.settings.transfer_command();
        let mut report = PublishReport::new(&self.base_dir);

        emit(
            out,
            format_args!("looking for namespaces in {}...", self.base_dir.display()),
        )?;

        let candidates = scan_candidates(&self.base_dir, descriptor)?;
        tracing::info!(
            "🔍 {} candidate directories under {}",
            candidates.len(),
            self.base_dir.display()
        );

        for candidate in candidates {
            let qualifies = candidate.qualifies();
            let dir = candidate.path;
            emit(out, format_args!("Processing {}...", dir.display()))?;

            if !qualifies {
                emit(
                    out,
                    format_args!("-> No {} found in {} - skipping", descriptor, dir.display()),
                )?;
                report.record(dir, DirectoryOutcome::Skipped);
                continue;
            }

            emit(out, format_args!("-> {}", command))?;

            if self.dry_run {
                tracing::debug!("Dry run, not executing in {}", dir.display());
                report.record(dir, DirectoryOutcome::DryRun);
                continue;
            }

            let output = {
                let _scope = ScopedDir::enter(&dir)?;
                self.runner.run(&command).await?
            };

            if output.success() {
                tracing::info!("✅ Uploaded {}", dir.display());
            } else {
                tracing::warn!(
                    "⚠️ Transfer in {} exited with {:?}",
                    dir.display(),
                    output.exit_code
                );
                if self.strict {
                    return Err(PublishError::TransferFailedError {
                        dir,
                        code: output.exit_code,
                    });
                }
            }

            report.record(dir, DirectoryOutcome::Published(output));
        }

        out.flush().map_err(output_error)?;
        Ok(report)
    }
}

fn emit<W: Write>(out: &mut W, line: std::fmt::Arguments<'_>) -> Result<()> {
    writeln!(out, "{}", line).map_err(output_error)
}

fn output_error(e: std::io::Error) -> PublishError {
    PublishError::OutputError {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PublishConfig;
    use crate::core::test_support::cwd_lock;
    use crate::domain::model::{CommandOutput, TransferCommand};
    use async_trait::async_trait;
    use std::fs;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct RecordingRunner {
        calls: Arc<Mutex<Vec<(String, PathBuf)>>>,
        exit_code: i32,
    }

    impl RecordingRunner {
        fn failing(exit_code: i32) -> Self {
            Self {
                exit_code,
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<(String, PathBuf)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommandRunner for RecordingRunner {
        async fn run(&self, command: &TransferCommand) -> Result<CommandOutput> {
            let cwd = std::env::current_dir()?;
            self.calls.lock().unwrap().push((command.command_line(), cwd));
            Ok(CommandOutput {
                exit_code: Some(self.exit_code),
                ..Default::default()
            })
        }
    }

    fn namespace_tree() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        fs::create_dir(base.join("a")).unwrap();
        fs::create_dir(base.join("b")).unwrap();
        fs::write(base.join("a").join("project.clj"), "(defproject a \"0.1.0\")").unwrap();
        fs::write(base.join("b").join("README.md"), "docs").unwrap();
        fs::write(base.join("notes.txt"), "").unwrap();
        temp_dir
    }

    #[tokio::test]
    async fn test_narration_and_single_transfer() {
        let _lock = cwd_lock();
        let temp_dir = namespace_tree();
        let base = temp_dir.path();
        let runner = RecordingRunner::default();
        let publisher = Publisher::new(runner.clone(), PublishConfig::default(), base);

        let mut out = Vec::new();
        let report = publisher.run_with_output(&mut out).await.unwrap();

        let expected = format!(
            "looking for namespaces in {base}...\n\
             Processing {a}...\n\
             -> scp pom.xml *.jar clojars@clojars.org:\n\
             Processing {b}...\n\
             -> No project.clj found in {b} - skipping\n",
            base = base.display(),
            a = base.join("a").display(),
            b = base.join("b").display(),
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "scp pom.xml *.jar clojars@clojars.org:");
        assert_eq!(
            calls[0].1.canonicalize().unwrap(),
            base.join("a").canonicalize().unwrap()
        );
        assert_eq!(report.published(), 1);
        assert_eq!(report.skipped(), 1);
    }

    #[tokio::test]
    async fn test_failed_transfer_does_not_stop_the_scan() {
        let _lock = cwd_lock();
        let temp_dir = TempDir::new().unwrap();
        for name in ["x", "y"] {
            let dir = temp_dir.path().join(name);
            fs::create_dir(&dir).unwrap();
            fs::write(dir.join("project.clj"), "").unwrap();
        }
        let runner = RecordingRunner::failing(1);
        let publisher = Publisher::new(runner.clone(), PublishConfig::default(), temp_dir.path());

        let report = publisher.run_with_output(&mut Vec::new()).await.unwrap();

        assert_eq!(runner.calls().len(), 2);
        assert_eq!(report.published(), 2);
        assert_eq!(report.failed(), 2);
    }

    #[tokio::test]
    async fn test_strict_mode_surfaces_failure_and_restores_cwd() {
        let _lock = cwd_lock();
        let temp_dir = namespace_tree();
        let before = std::env::current_dir().unwrap();
        let runner = RecordingRunner::failing(255);
        let publisher = Publisher::new(runner.clone(), PublishConfig::default(), temp_dir.path())
            .with_strict(true);

        let err = publisher.run_with_output(&mut Vec::new()).await.unwrap_err();

        match err {
            PublishError::TransferFailedError { dir, code } => {
                assert_eq!(dir, temp_dir.path().join("a"));
                assert_eq!(code, Some(255));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(std::env::current_dir().unwrap(), before);
    }

    #[tokio::test]
    async fn test_dry_run_prints_but_never_runs() {
        let _lock = cwd_lock();
        let temp_dir = namespace_tree();
        let runner = RecordingRunner::default();
        let publisher = Publisher::new(runner.clone(), PublishConfig::default(), temp_dir.path())
            .with_dry_run(true);

        let mut out = Vec::new();
        let report = publisher.run_with_output(&mut out).await.unwrap();

        assert!(runner.calls().is_empty());
        assert_eq!(report.dry_runs(), 1);
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("-> scp pom.xml *.jar clojars@clojars.org:\n"));
    }

    #[tokio::test]
    async fn test_custom_descriptor_in_skip_message() {
        let _lock = cwd_lock();
        let temp_dir = namespace_tree();
        let config = PublishConfig {
            descriptor_file: "deps.edn".to_string(),
            ..Default::default()
        };
        let publisher = Publisher::new(RecordingRunner::default(), config, temp_dir.path());

        let mut out = Vec::new();
        let report = publisher.run_with_output(&mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(report.skipped(), 2);
        assert!(text.contains(&format!(
            "-> No deps.edn found in {} - skipping",
            temp_dir.path().join("a").display()
        )));
    }
}
