//! # Ask Subcommand
//!
//! Answers one question with the keyword placeholder responder and appends
//! the interaction to the audit table.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use gg_audit::{AuditConfig, AuditService, SubmitError};
use gg_responder::{KeywordResponder, Responder};

use crate::EXIT_INVALID_INPUT;

/// Arguments for the `graphguard ask` subcommand.
#[derive(Args, Debug)]
pub struct AskArgs {
    /// The compliance question. The empty string is rejected.
    pub query: String,
}

/// Execute `graphguard ask` with the keyword placeholder responder.
pub fn run_ask(args: &AskArgs, config: &AuditConfig, out: &mut dyn Write) -> Result<u8> {
    run_ask_with(args, config, KeywordResponder::nist(), out)
}

/// Execute `graphguard ask` with a specific responder.
pub fn run_ask_with<R: Responder>(
    args: &AskArgs,
    config: &AuditConfig,
    responder: R,
    out: &mut dyn Write,
) -> Result<u8> {
    let service = AuditService::open(config.clone(), responder).context("opening audit log")?;

    let outcome = match service.submit(&args.query) {
        Ok(outcome) => outcome,
        Err(SubmitError::EmptyQuery) => {
            writeln!(out, "{}", SubmitError::EmptyQuery)?;
            return Ok(EXIT_INVALID_INPUT);
        }
        Err(e) => return Err(e).context("answering query"),
    };

    let record = &outcome.record;
    writeln!(out, "Finding:  {}", outcome.answer.text)?;
    writeln!(out, "Evidence: {}", record.evidence_source)?;
    writeln!(out, "Latency:  {}s", record.latency_seconds)?;
    writeln!(out, "Status:   {}", record.status)?;
    Ok(0)
}
