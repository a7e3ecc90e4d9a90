//! # Init Subcommand
//!
//! Creates the audit table with its header row. Running it against an
//! existing table leaves the table untouched.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use gg_audit::{AuditConfig, AuditLogStore};

/// Arguments for the `graphguard init` subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {}

/// Execute `graphguard init`.
pub fn run_init(_args: &InitArgs, config: &AuditConfig, out: &mut dyn Write) -> Result<u8> {
    let store = AuditLogStore::new(config.clone());
    let created = store
        .ensure_initialized()
        .context("initialising audit log")?;

    if created {
        writeln!(out, "Created audit log at {}", store.path().display())?;
    } else {
        writeln!(out, "Audit log already present at {}", store.path().display())?;
    }
    Ok(0)
}
