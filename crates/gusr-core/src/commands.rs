use anyhow::{anyhow, Result};

use crate::git::{apply_user, GitRunner, Scope};
use crate::identity::GitUser;
use crate::prompt::Prompter;
use crate::store::UserStore;

/// Prompt for a new user, append it to the stored collection and persist.
/// Nothing is written when any prompt fails.
pub fn add(store: &UserStore, prompter: &dyn Prompter) -> Result<GitUser> {
    let name = prompter.input("Git user name")?;
    let email = prompter.input("Git user email")?;
    let gpg_key = prompter.input("GPG key (optional)")?;

    let user = GitUser::new(name, email).with_gpg_key(gpg_key);
    let mut users = store.load()?;
    users.push(user.clone());
    store.save(&users)?;
    Ok(user)
}

/// Stored users in insertion order.
pub fn list(store: &UserStore) -> Result<Vec<GitUser>> {
    Ok(store.load()?)
}

#[derive(Debug, PartialEq, Eq)]
pub enum SetOutcome {
    /// Nothing stored yet; no selection prompt was shown.
    NoUsers,
    Applied(GitUser),
}

/// Let the user pick a stored identity and apply it via `git config` at the
/// given scope.
pub fn set(
    store: &UserStore,
    prompter: &dyn Prompter,
    runner: &dyn GitRunner,
    scope: Scope,
) -> Result<SetOutcome> {
    let users = store.load()?;
    if users.is_empty() {
        return Ok(SetOutcome::NoUsers);
    }

    let labels: Vec<String> = users.iter().map(|user| user.name.clone()).collect();
    let label = format!("Select a Git user to set {}", scope.adverb());
    let index = prompter.select(&label, &labels)?;
    let user = users
        .into_iter()
        .nth(index)
        .ok_or_else(|| anyhow!("selection index {index} out of range"))?;

    apply_user(runner, &user, scope)?;
    Ok(SetOutcome::Applied(user))
}
