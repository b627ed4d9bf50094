// mod.rs — Command modules and shared store wiring.

pub mod admin;
pub mod apply;
pub mod identity;

use anyhow::Context;
use krewly_identity::IdentityStore;
use krewly_storage::FileKv;
use krewly_vendor::{ApplicationStore, LogSink, VendorApplication};

use crate::config::CliConfig;

/// Open the application store over the CLI's on-disk namespace, with the
/// JSONL event log attached.
pub fn open_application_store(config: &CliConfig) -> anyhow::Result<ApplicationStore<FileKv>> {
    let kv = FileKv::new(&config.store_dir)
        .with_context(|| format!("opening store at {}", config.store_dir.display()))?;
    let mut store = ApplicationStore::new(kv)?;
    store.add_sink(Box::new(LogSink::new(&config.events_log)));
    Ok(store)
}

/// Open the identity store over the same namespace.
pub fn open_identity_store(config: &CliConfig) -> anyhow::Result<IdentityStore<FileKv>> {
    let kv = FileKv::new(&config.store_dir)
        .with_context(|| format!("opening store at {}", config.store_dir.display()))?;
    Ok(IdentityStore::new(kv))
}

/// Print one application in full.
pub fn print_application(app: &VendorApplication) {
    let categories: Vec<&str> = app.categories.iter().map(|c| c.label()).collect();

    println!("Application {}", app.id);
    println!("  Business:  {}", app.business_name);
    println!("  Category:  {}", categories.join(", "));
    println!("  Location:  {}, {}", app.city, app.state);
    println!("  Travels:   {}", if app.available_for_travel { "yes" } else { "no" });
    println!("  Phone:     {}", app.phone_number);
    println!("  Images:    {}", app.portfolio_images.len());
    print!("  Socials:   instagram @{}", app.social_handles.instagram);
    if let Some(tiktok) = &app.social_handles.tiktok {
        print!(", tiktok @{}", tiktok);
    }
    if let Some(twitter) = &app.social_handles.twitter {
        print!(", twitter @{}", twitter);
    }
    println!();
    println!("  Status:    {}", app.status);
    println!("  Submitted: {}", app.submitted_at.format("%Y-%m-%d %H:%M"));
    if let Some(reviewed_at) = app.reviewed_at {
        println!("  Reviewed:  {}", reviewed_at.format("%Y-%m-%d %H:%M"));
    }
    if let Some(reason) = &app.rejection_reason {
        println!("  Reason:    {}", reason);
    }
}
