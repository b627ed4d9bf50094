// apply.rs — Applicant-side commands: apply, status.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use base64::prelude::*;
use krewly_identity::UserRole;
use krewly_vendor::{ApplicationDraft, SocialHandles, SubmitError, VendorCategory};

use crate::commands::{open_application_store, open_identity_store, print_application};
use crate::config::CliConfig;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    config: &CliConfig,
    business_name: &str,
    categories: &[String],
    state: &str,
    city: &str,
    travel: bool,
    phone: &str,
    images: &[PathBuf],
    instagram: &str,
    tiktok: Option<&str>,
    twitter: Option<&str>,
) -> anyhow::Result<()> {
    let identity = open_identity_store(config)?;
    let Some(user) = identity.current()? else {
        bail!("nobody is signed in — run `krewly identity set <email>` first");
    };
    if user.role == UserRole::Vendor {
        println!("You are already a vendor — nothing to apply for.");
        return Ok(());
    }

    let mut store = open_application_store(config)?;
    if let Some(existing) = store.current()? {
        println!(
            "You already have an application ({}): status {}.",
            existing.id, existing.status
        );
        return Ok(());
    }

    let mut portfolio = Vec::with_capacity(images.len());
    for path in images {
        let bytes =
            fs::read(path).with_context(|| format!("reading image {}", path.display()))?;
        portfolio.push(BASE64_STANDARD.encode(bytes));
    }

    let draft = ApplicationDraft {
        user_id: user.id.clone(),
        business_name: business_name.to_string(),
        categories: categories
            .iter()
            .map(|label| VendorCategory::from(label.clone()))
            .collect(),
        state: state.to_string(),
        city: city.to_string(),
        available_for_travel: travel,
        phone_number: phone.to_string(),
        portfolio_images: portfolio,
        social_handles: SocialHandles {
            instagram: instagram.to_string(),
            tiktok: tiktok.map(String::from),
            twitter: twitter.map(String::from),
        },
    };

    match store.submit(draft) {
        Ok(app) => {
            println!("Application submitted: {}", app.id);
            println!("  Business: {}", app.business_name);
            println!("  Status:   {} (awaiting review)", app.status);
            Ok(())
        }
        Err(SubmitError::Validation(errors)) => {
            eprintln!("The application has problems:");
            for (field, message) in errors.iter() {
                eprintln!("  {}: {}", field, message);
            }
            bail!("validation failed");
        }
        Err(SubmitError::Store(e)) => Err(e.into()),
    }
}

pub fn status(config: &CliConfig, simulate_approval: bool) -> anyhow::Result<()> {
    let mut store = open_application_store(config)?;

    if simulate_approval {
        match store.approve_current()? {
            Some(app) => {
                let mut identity = open_identity_store(config)?;
                if identity.promote_to_vendor(&app.user_id)?.is_some() {
                    println!("You are now a vendor.");
                }
                println!("Application {} approved.", app.id);
            }
            None => println!("No pending application to approve."),
        }
        return Ok(());
    }

    match store.current()? {
        Some(app) => print_application(&app),
        None => println!("No application on record — run `krewly apply` to submit one."),
    }
    Ok(())
}
