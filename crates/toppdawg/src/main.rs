//! `tdawg` - CLI for toppdawg
//!
//! This binary provides the command-line dashboard for the ToppDawg
//! subscription service: adding dog profiles, computing feeding
//! recommendations, and managing the theme preference.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::Write as _;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::debug;

use toppdawg::cli::{
    AddCommand, Cli, Command, ConfigCommand, FeedCommand, StatusCommand, ThemeAction, ThemeCommand,
};
use toppdawg::dashboard::SessionCommand;
use toppdawg::notify::outbox::OutboxNotifier;
use toppdawg::notify::{dispatch, LogNotifier, Notifier};
use toppdawg::session::LOYALTY_AWARD_POINTS;
use toppdawg::{
    init_logging, AccountSession, BillingClient, Config, Dashboard, FeedingPlan, PetProfile,
    PrefStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("could not load configuration")?;

    // Execute the command
    match cli.command {
        Command::Session => run_session(&config).await,
        Command::Add(cmd) => run_add(&config, cmd).await,
        Command::Feed(cmd) => run_feed(&cmd),
        Command::Theme(cmd) => run_theme(&config, &cmd),
        Command::Status(cmd) => run_status(&config, &cmd),
        Command::Config(cmd) => run_config(&config, cmd),
    }
}

/// Build the dashboard and, when notifications are enabled, its dispatcher.
///
/// The returned join handle (if any) must be awaited after the dashboard is
/// dropped so queued notifications drain before the process exits.
fn build_dashboard(config: &Config) -> anyhow::Result<(Dashboard, Option<JoinHandle<u64>>)> {
    let prefs =
        PrefStore::open(config.prefs_path()).context("could not open the preference store")?;
    let account = AccountSession::from_config(config);

    let (handle, worker) = if config.notify.enabled {
        let notifier: Arc<dyn Notifier> = match config.outbox_path() {
            Some(dir) => Arc::new(OutboxNotifier::new(dir)),
            None => Arc::new(LogNotifier),
        };
        let (handle, worker) = dispatch::spawn(notifier, config.dispatch_config());
        (Some(handle), Some(worker))
    } else {
        (None, None)
    };

    let dashboard = Dashboard::new(prefs, account, handle)?;
    Ok((dashboard, worker))
}

/// Drop the dashboard and wait for any queued notifications to go out.
async fn shutdown(dashboard: Dashboard, worker: Option<JoinHandle<u64>>) {
    drop(dashboard);
    if let Some(worker) = worker {
        match worker.await {
            Ok(delivered) => debug!(delivered, "Notification queue drained"),
            Err(e) => debug!(error = %e, "Dispatch worker did not shut down cleanly"),
        }
    }
}

/// Human label for the theme flag.
fn theme_label(dark_mode: bool) -> &'static str {
    if dark_mode {
        "dark"
    } else {
        "light"
    }
}

fn print_added(profile: &PetProfile, loyalty_points: u32) {
    println!(
        "Added {} ({}, {}).",
        profile.display_name(),
        if profile.breed.is_empty() {
            "unknown breed"
        } else {
            &profile.breed
        },
        profile.life_stage()
    );
    println!(
        "Recommended daily food: {} lbs.",
        profile.recommended_food
    );
    println!("Loyalty points: {loyalty_points} (+{LOYALTY_AWARD_POINTS})");
}

async fn run_session(config: &Config) -> anyhow::Result<()> {
    let (mut dashboard, worker) = build_dashboard(config)?;

    let summary = dashboard.summary();
    println!("ToppDawg dashboard ({} theme)", theme_label(summary.dark_mode));
    match &summary.account_email {
        Some(email) => println!("Signed in as {email}"),
        None => println!("Not signed in; profile confirmations will be skipped"),
    }
    println!("Type 'help' for commands, 'quit' to leave.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("tdawg> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match SessionCommand::parse(&line) {
            Ok(None) => {}
            Ok(Some(SessionCommand::Quit)) => break,
            Ok(Some(command)) => {
                if let Err(e) = run_session_command(&mut dashboard, command) {
                    println!("Error: {e}");
                }
            }
            Err(e) => println!("Error: {e}"),
        }
    }

    let summary = dashboard.summary();
    println!(
        "Session over: {} dog(s) added, {} loyalty points earned.",
        summary.dogs, summary.loyalty_points
    );

    shutdown(dashboard, worker).await;
    Ok(())
}

fn run_session_command(dashboard: &mut Dashboard, command: SessionCommand) -> anyhow::Result<()> {
    match command {
        SessionCommand::Add(draft) => {
            let profile = dashboard.add_profile(draft)?;
            print_added(&profile, dashboard.summary().loyalty_points);
        }
        SessionCommand::Dogs => {
            let dogs = dashboard.session().dogs();
            if dogs.is_empty() {
                println!("No dogs added this session.");
            }
            for (i, dog) in dogs.iter().enumerate() {
                println!(
                    "{}. {} ({}, {}) - {} lbs/day",
                    i + 1,
                    dog.display_name(),
                    if dog.breed.is_empty() {
                        "unknown breed"
                    } else {
                        &dog.breed
                    },
                    dog.life_stage(),
                    dog.recommended_food
                );
            }
        }
        SessionCommand::Points => {
            println!("Loyalty points: {}", dashboard.summary().loyalty_points);
        }
        SessionCommand::Theme => {
            let on = dashboard.toggle_dark_mode()?;
            println!("Theme: {}", theme_label(on));
        }
        SessionCommand::Status => {
            let summary = dashboard.summary();
            println!("Dogs:           {}", summary.dogs);
            println!("Loyalty points: {}", summary.loyalty_points);
            println!("Theme:          {}", theme_label(summary.dark_mode));
            println!(
                "Account:        {}",
                summary.account_email.as_deref().unwrap_or("(signed out)")
            );
        }
        SessionCommand::Help => {
            println!("Commands:");
            println!("  add <name> <breed> <age> <weight> [dietary needs]");
            println!("  dogs     list the dogs added this session");
            println!("  points   show the loyalty point balance");
            println!("  theme    toggle light/dark mode");
            println!("  status   show the dashboard summary");
            println!("  quit     leave the session");
        }
        SessionCommand::Quit => {}
    }
    Ok(())
}

async fn run_add(config: &Config, cmd: AddCommand) -> anyhow::Result<()> {
    let (mut dashboard, worker) = build_dashboard(config)?;

    let result = dashboard.add_profile(cmd.into_draft());
    if let Ok(profile) = &result {
        print_added(profile, dashboard.summary().loyalty_points);
    }

    shutdown(dashboard, worker).await;
    result.map(|_| ()).map_err(Into::into)
}

fn run_feed(cmd: &FeedCommand) -> anyhow::Result<()> {
    let plan = FeedingPlan::compute(cmd.weight, cmd.age)?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        println!("Life stage:             {}", plan.life_stage);
        println!("Recommended daily food: {} lbs.", plan.daily_food_lbs);
    }
    Ok(())
}

fn run_theme(config: &Config, cmd: &ThemeCommand) -> anyhow::Result<()> {
    let prefs =
        PrefStore::open(config.prefs_path()).context("could not open the preference store")?;

    match cmd.action.unwrap_or(ThemeAction::Toggle) {
        ThemeAction::Show => {
            println!("Theme: {}", theme_label(prefs.dark_mode()?));
        }
        ThemeAction::Toggle => {
            let mut dashboard = Dashboard::new(prefs, None, None)?;
            let on = dashboard.toggle_dark_mode()?;
            println!("Theme: {}", theme_label(on));
        }
    }
    Ok(())
}

fn run_status(config: &Config, cmd: &StatusCommand) -> anyhow::Result<()> {
    let prefs =
        PrefStore::open(config.prefs_path()).context("could not open the preference store")?;
    let dark_mode = prefs.dark_mode()?;
    let account = AccountSession::from_config(config);
    let billing = BillingClient::from_config(config);
    let pending = config
        .outbox_path()
        .map(|dir| OutboxNotifier::new(dir).pending_count());

    if cmd.json {
        let status = serde_json::json!({
            "theme": theme_label(dark_mode),
            "account_email": account.as_ref().map(|a| a.email.clone()),
            "billing_configured": billing.is_some(),
            "billing_live_mode": billing.as_ref().map(BillingClient::is_live),
            "outbox_pending": pending,
            "prefs_path": prefs.path(),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("tdawg status");
        println!("------------");
        println!("Theme:       {}", theme_label(dark_mode));
        println!(
            "Account:     {}",
            account
                .as_ref()
                .map_or("(signed out)", |a| a.email.as_str())
        );
        match &billing {
            Some(client) => println!(
                "Billing:     {} ({} mode)",
                client.masked_key(),
                if client.is_live() { "live" } else { "test" }
            ),
            None => println!("Billing:     not configured"),
        }
        match pending {
            Some(count) => println!("Outbox:      {count} pending"),
            None => println!("Outbox:      log-only delivery"),
        }
        println!("Preferences: {}", prefs.path().display());
    }
    Ok(())
}

fn run_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[store]");
                println!("  Preferences path: {}", config.prefs_path().display());
                println!();
                println!("[account]");
                println!(
                    "  Email:            {}",
                    config.account.email.as_deref().unwrap_or("(signed out)")
                );
                println!();
                println!("[billing]");
                println!(
                    "  Publishable key:  {}",
                    BillingClient::from_config(config)
                        .map_or_else(|| "not configured".to_string(), |c| c.masked_key())
                );
                println!();
                println!("[notify]");
                println!("  Enabled:          {}", config.notify.enabled);
                println!(
                    "  Outbox:           {}",
                    config.outbox_path().map_or_else(
                        || "log-only delivery".to_string(),
                        |p| p.display().to_string()
                    )
                );
                println!("  Max attempts:     {}", config.notify.max_attempts);
                println!("  Retry delay (ms): {}", config.notify.retry_delay_ms);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
