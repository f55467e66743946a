use anyhow::Result;
use clap::{Parser, Subcommand};

use gusr_core::commands::{self, SetOutcome};
use gusr_core::git::{GitCli, Scope};
use gusr_core::identity::GitUser;
use gusr_core::store::UserStore;

mod prompt;

use prompt::TermPrompter;

#[derive(Parser)]
#[command(name = "gusr", version, about = "Manage and switch Git users")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a Git user
    Add,
    /// List all Git users
    List,
    /// Set the Git user for the current repository or globally
    Set {
        /// Apply the user to the global Git configuration
        #[arg(short = 'g', long = "global")]
        global: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = UserStore::open_default()?;
    store.ensure()?;

    match cli.command {
        Command::Add => {
            let user = commands::add(&store, &TermPrompter)?;
            println!("Git user {} <{}> added", user.name, user.email);
        }
        Command::List => {
            print_users(&commands::list(&store)?);
        }
        Command::Set { global } => {
            let scope = if global { Scope::Global } else { Scope::Local };
            match commands::set(&store, &TermPrompter, &GitCli, scope)? {
                SetOutcome::NoUsers => {
                    println!("There is no user saved. Add one with `gusr add`.");
                }
                SetOutcome::Applied(user) => {
                    println!("Git user {} set {}", user.name, scope.adverb());
                }
            }
        }
    }
    Ok(())
}

fn print_users(users: &[GitUser]) {
    if users.is_empty() {
        println!("There is no user saved.");
        return;
    }
    println!("Git users:");
    for user in users {
        println!("- {} <{}>", user.name, user.email);
        if user.has_gpg_key() {
            println!("  GPG key: {}", user.gpg_key);
        }
    }
}
