// admin.rs — Admin subcommands: the application review queue.

use anyhow::bail;
use clap::Subcommand;
use krewly_identity::UserRole;
use krewly_vendor::{
    search, seed_mock_applications, ApplicationStatus, ReviewDecision, VendorApplication,
};

use crate::commands::{open_application_store, open_identity_store, print_application};
use crate::config::CliConfig;

#[derive(Subcommand)]
pub enum AdminCommands {
    /// List applications, newest first.
    List {
        /// Filter by status (pending, approved, rejected).
        #[arg(long)]
        status: Option<ApplicationStatus>,
        /// Case-insensitive match on business name, city or state.
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one application in full.
    View {
        /// Application id.
        id: String,
    },
    /// Approve a pending application.
    Approve {
        /// Application id.
        id: String,
    },
    /// Reject a pending application.
    Reject {
        /// Application id.
        id: String,
        /// Reason shown to the applicant.
        #[arg(long)]
        reason: Option<String>,
    },
    /// Show counts per status.
    Counts,
    /// Seed synthetic pending applications (dev).
    Seed {
        /// How many records to add.
        #[arg(long, default_value_t = 5)]
        count: usize,
    },
    /// Wipe all applications and the session pointer (dev).
    Reset,
}

pub fn execute(cmd: &AdminCommands, config: &CliConfig) -> anyhow::Result<()> {
    require_admin(config)?;
    let mut store = open_application_store(config)?;

    match cmd {
        AdminCommands::List { status, search: q } => {
            let mut records = match status {
                Some(status) => store.list_by_status(*status)?,
                None => store.all()?,
            };
            if let Some(q) = q {
                let ids: Vec<String> = search(q, &records).iter().map(|a| a.id.clone()).collect();
                records.retain(|app| ids.contains(&app.id));
            }
            records.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));

            if records.is_empty() {
                println!("No applications found.");
                return Ok(());
            }
            for app in &records {
                print_row(app);
            }
            Ok(())
        }
        AdminCommands::View { id } => {
            match store.get(id)? {
                Some(app) => print_application(&app),
                None => println!("Application not found: {}", id),
            }
            Ok(())
        }
        AdminCommands::Approve { id } => {
            let Some(app) = store.review(id, &ReviewDecision::Approve)? else {
                bail!("application not found: {}", id);
            };
            println!("Approved {} ({}).", app.id, app.business_name);

            // The reference client flips the applicant's role on approval —
            // only possible here when the applicant is the locally stored user.
            let mut identity = open_identity_store(config)?;
            if identity.promote_to_vendor(&app.user_id)?.is_some() {
                println!("User {} is now a vendor.", app.user_id);
            }
            Ok(())
        }
        AdminCommands::Reject { id, reason } => {
            let decision = ReviewDecision::Reject {
                reason: reason.clone(),
            };
            let Some(app) = store.review(id, &decision)? else {
                bail!("application not found: {}", id);
            };
            println!("Rejected {} ({}).", app.id, app.business_name);
            if let Some(reason) = &app.rejection_reason {
                println!("  Reason: {}", reason);
            }
            Ok(())
        }
        AdminCommands::Counts => {
            let counts = store.counts()?;
            println!("All:      {}", counts.all);
            println!("Pending:  {}", counts.pending);
            println!("Approved: {}", counts.approved);
            println!("Rejected: {}", counts.rejected);
            Ok(())
        }
        AdminCommands::Seed { count } => {
            seed_mock_applications(&mut store, *count)?;
            println!(
                "Seeded {} applications ({} total).",
                count,
                store.counts()?.all
            );
            Ok(())
        }
        AdminCommands::Reset => {
            store.clear_all()?;
            println!("All applications cleared.");
            Ok(())
        }
    }
}

/// The admin queue is only reachable by an admin identity, like the
/// reference client's admin layout.
fn require_admin(config: &CliConfig) -> anyhow::Result<()> {
    let identity = open_identity_store(config)?;
    match identity.current()? {
        Some(user) if user.role == UserRole::Admin => Ok(()),
        Some(user) => bail!(
            "admin commands require an admin identity (signed in as {} with role {})",
            user.email,
            user.role
        ),
        None => bail!("nobody is signed in — run `krewly identity set <email> --role admin`"),
    }
}

fn print_row(app: &VendorApplication) {
    println!(
        "{}  {:<8}  {:<24}  {}, {}  ({})",
        app.submitted_at.format("%Y-%m-%d"),
        app.status.to_string(),
        app.business_name,
        app.city,
        app.state,
        app.id
    );
}
