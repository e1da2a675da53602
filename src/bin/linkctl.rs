//! Command-line front end for the affiliate link resolver.
//!
//! Runs the resolver locally against a programs file, without the HTTP
//! service.
//!
//! # Usage
//!
//! ```bash
//! # Which merchant is this?
//! cargo run --bin linkctl -- detect "https://www.amazon.in/dp/B0123456789"
//!
//! # Strip tracking parameters
//! cargo run --bin linkctl -- clean "https://www.flipkart.com/item?utm_source=x"
//!
//! # Tag a link with your programs (prompts for the URL when omitted)
//! cargo run --bin linkctl -- resolve --programs programs.json "https://www.myntra.com/p/1"
//!
//! # Inspect a programs file
//! cargo run --bin linkctl -- programs --programs programs.json
//! ```
//!
//! # Environment Variables
//!
//! - `PROGRAMS_FILE`: default for `--programs`

use affiliate_linker::domain::entities::{AffiliateProgram, Merchant, Strategy};
use affiliate_linker::domain::resolver::{self, rules};
use affiliate_linker::infrastructure::program_file::load_programs;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::path::{Path, PathBuf};

/// CLI tool for resolving affiliate links.
#[derive(Parser)]
#[command(name = "linkctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the merchant of a URL
    Detect {
        url: String,
    },

    /// Remove tracking parameters from a URL
    Clean {
        url: String,
    },

    /// Resolve a URL into an affiliate link
    Resolve {
        /// URL to resolve (prompted for when omitted)
        url: Option<String>,

        /// JSON file with affiliate programs
        #[arg(short, long, env = "PROGRAMS_FILE")]
        programs: PathBuf,

        /// Skip detection and use this merchant
        #[arg(short, long)]
        merchant: Option<Merchant>,
    },

    /// List programs from a programs file
    Programs {
        /// JSON file with affiliate programs
        #[arg(short, long, env = "PROGRAMS_FILE")]
        programs: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Detect { url } => handle_detect(&url),
        Commands::Clean { url } => handle_clean(&url),
        Commands::Resolve {
            url,
            programs,
            merchant,
        } => handle_resolve(url, &programs, merchant)?,
        Commands::Programs { programs } => handle_programs(&programs)?,
    }

    Ok(())
}

fn handle_detect(url: &str) {
    let merchant = resolver::detect(url);

    println!("{}", "🔍 Merchant Detection".bright_blue().bold());
    println!();
    println!("  URL:             {}", url.bright_black());
    println!("  Merchant:        {}", merchant.to_string().cyan().bold());
    println!(
        "  Tracking param:  {}",
        rules::default_tracking_param(merchant).bright_white()
    );
    println!();
}

fn handle_clean(url: &str) {
    let cleaned = resolver::clean(url);

    println!("{}", "🧹 Clean URL".bright_blue().bold());
    println!();
    println!("  Original: {}", url.bright_black());
    println!("  Cleaned:  {}", cleaned.bright_yellow());
    println!();

    if cleaned == url {
        println!("{}", "  Nothing to remove".yellow());
        println!();
    }
}

/// Resolves one URL against the programs in `path`.
///
/// # Output Format
///
/// ```text
/// 🔗 Resolve Link
///
///   Original: https://www.flipkart.com/item/123?utm_source=x
///   Merchant: flipkart
///   Strategy: DIRECT (program fk)
///   Result:   https://www.flipkart.com/item/123?affid=partner42
/// ```
fn handle_resolve(url: Option<String>, path: &Path, merchant: Option<Merchant>) -> Result<()> {
    let programs = read_programs(path)?;

    println!("{}", "🔗 Resolve Link".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new().with_prompt("URL").interact_text()?,
    };

    let link = resolver::resolve(&url, &programs, merchant);

    let strategy = match link.strategy {
        Strategy::Direct => "DIRECT".green(),
        Strategy::Fallback => "FALLBACK".yellow(),
        Strategy::Unchanged => "UNCHANGED".red(),
    };
    let program = link
        .program
        .as_ref()
        .map(|p| format!(" (program {})", p.id))
        .unwrap_or_default();

    println!("  Original: {}", url.bright_black());
    println!("  Merchant: {}", link.merchant.to_string().cyan());
    println!("  Strategy: {}{}", strategy, program.bright_black());
    println!("  Result:   {}", link.url.bright_yellow().bold());
    println!();

    if link.strategy == Strategy::Unchanged {
        println!(
            "{}",
            "⚠️  No usable program for this merchant and no active fallback".yellow()
        );
        println!();
    }

    Ok(())
}

/// Lists the programs in `path` with their status.
///
/// # Output Format
///
/// ```text
/// 📋 Affiliate Programs
///
///   ID               Merchant    Param       Affiliate ID         Status
///   ──────────────────────────────────────────────────────────────────────────
///   fk               flipkart    affid       partner42            ACTIVE
///   cl               cuelinks    -           12345                ACTIVE
/// ```
fn handle_programs(path: &Path) -> Result<()> {
    let programs = read_programs(path)?;

    println!("{}", "📋 Affiliate Programs".bright_blue().bold());
    println!();

    if programs.is_empty() {
        println!("{}", "  No programs found".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<16} {:<11} {:<11} {:<20} {:<10}",
        "ID".bright_white().bold(),
        "Merchant".bright_white().bold(),
        "Param".bright_white().bold(),
        "Affiliate ID".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for program in &programs {
        print_program_row(program);
    }

    println!();
    println!(
        "  Total: {} ({} active)",
        programs.len().to_string().bright_white().bold(),
        programs.iter().filter(|p| p.active).count()
    );

    if !programs.iter().any(|p| p.active && p.merchant.is_fallback()) {
        println!(
            "  {}",
            "⚠️  No active fallback program; unmatched links stay untagged".yellow()
        );
    }
    println!();

    Ok(())
}

fn print_program_row(program: &AffiliateProgram) {
    let status = if program.active {
        "ACTIVE".green()
    } else {
        "INACTIVE".red()
    };

    let param = if program.merchant.is_fallback() {
        "-".to_string()
    } else {
        program
            .tracking_param()
            .unwrap_or(rules::default_tracking_param(program.merchant))
            .to_string()
    };

    println!(
        "  {:<16} {:<11} {:<11} {:<20} {}",
        program.id.cyan(),
        program.merchant.to_string(),
        param.bright_black(),
        program.affiliate_id().unwrap_or("-"),
        status
    );
}

fn read_programs(path: &Path) -> Result<Vec<AffiliateProgram>> {
    load_programs(path).with_context(|| format!("Failed to load programs from {}", path.display()))
}
