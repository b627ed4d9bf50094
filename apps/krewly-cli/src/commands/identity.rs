// identity.rs — Identity subcommands: the mock signed-in user.

use clap::Subcommand;
use krewly_identity::{User, UserRole};

use crate::commands::open_identity_store;
use crate::config::CliConfig;

#[derive(Subcommand)]
pub enum IdentityCommands {
    /// Sign in as a mock user.
    Set {
        /// Email address for the identity.
        email: String,
        /// Role: vendor, client or admin.
        #[arg(long, default_value = "client")]
        role: UserRole,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
    },
    /// Show the signed-in user.
    Show,
    /// Sign out.
    Clear,
}

pub fn execute(cmd: &IdentityCommands, config: &CliConfig) -> anyhow::Result<()> {
    let mut store = open_identity_store(config)?;

    match cmd {
        IdentityCommands::Set {
            email,
            role,
            first_name,
            last_name,
        } => {
            let mut user = User::new(email.clone(), *role);
            user.first_name = first_name.clone();
            user.last_name = last_name.clone();
            store.save(&user)?;
            println!("Signed in as {} ({}, role {}).", user.email, user.id, user.role);
            Ok(())
        }
        IdentityCommands::Show => {
            match store.current()? {
                Some(user) => {
                    println!("User {}", user.id);
                    println!("  Email:  {}", user.email);
                    if let (Some(first), Some(last)) = (&user.first_name, &user.last_name) {
                        println!("  Name:   {} {}", first, last);
                    }
                    println!("  Role:   {}", user.role);
                }
                None => println!("Nobody is signed in."),
            }
            Ok(())
        }
        IdentityCommands::Clear => {
            store.clear()?;
            println!("Signed out.");
            Ok(())
        }
    }
}
