use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

use crate::identity::GitUser;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("failed to run git: {0}")]
    Io(#[from] std::io::Error),
    #[error("git config {key} exited with {status}")]
    Failed { key: String, status: ExitStatus },
}

/// Where an applied identity lands: the current repository or the user-wide
/// Git configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Local,
    Global,
}

impl Scope {
    pub fn adverb(&self) -> &'static str {
        match self {
            Scope::Local => "locally",
            Scope::Global => "globally",
        }
    }
}

/// Seam for the `git config` invocations so command workflows can be tested
/// against a recording fake.
pub trait GitRunner {
    fn set_config(&self, scope: Scope, key: &str, value: &str) -> Result<(), GitError>;
}

/// Real adapter: one `git config [--global] <key> <value>` process per call,
/// stderr forwarded to the caller's stderr.
pub struct GitCli;

impl GitRunner for GitCli {
    fn set_config(&self, scope: Scope, key: &str, value: &str) -> Result<(), GitError> {
        let mut cmd = Command::new("git");
        cmd.arg("config");
        if scope == Scope::Global {
            cmd.arg("--global");
        }
        cmd.arg(key)
            .arg(value)
            .stdout(Stdio::null())
            .stderr(Stdio::inherit());
        let status = cmd.status()?;
        if !status.success() {
            return Err(GitError::Failed {
                key: key.to_string(),
                status,
            });
        }
        Ok(())
    }
}

/// Apply one identity: name, then email, then the signing key only when one
/// is set. The first failure aborts; keys already applied stay applied.
pub fn apply_user(runner: &dyn GitRunner, user: &GitUser, scope: Scope) -> Result<(), GitError> {
    runner.set_config(scope, "user.name", &user.name)?;
    runner.set_config(scope, "user.email", &user.email)?;
    if user.has_gpg_key() {
        runner.set_config(scope, "user.signingkey", &user.gpg_key)?;
    }
    Ok(())
}
