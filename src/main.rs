//! Linescope - a terminal structured-text scratchpad with a live line model.
//!
//! # Usage
//!
//! ```bash
//! linescope
//! linescope --policy trailing
//! linescope --no-debug-panes --indent-width 4
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use linescope::app::App;
use linescope::config::{
    ConfigFlags, PolicyMode, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, parse_flag_tokens, save_config_flags,
};
use linescope::editlog;

/// A terminal structured-text scratchpad with a live line model
#[derive(Parser, Debug)]
#[command(name = "linescope", version, about, long_about = None)]
struct Cli {
    /// Indent propagation policy
    #[arg(long, value_enum)]
    policy: Option<PolicyMode>,

    /// Indent unit width in columns (1-8)
    #[arg(long, value_name = "N")]
    indent_width: Option<u16>,

    /// Start with the debug pane column visible
    #[arg(long)]
    debug_panes: bool,

    /// Hide the debug pane column
    #[arg(long)]
    no_debug_panes: bool,

    /// Append edit events to a file
    #[arg(long, value_name = "PATH")]
    edit_log: Option<PathBuf>,

    /// Save current command-line flags as defaults in .linescoperc
    #[arg(long)]
    save: bool,

    /// Clear saved defaults in .linescoperc
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let edit_log_path = effective
        .edit_log
        .clone()
        .or_else(|| std::env::var_os("LINESCOPE_EDIT_LOG").map(PathBuf::from));
    if let Err(err) = editlog::set_log_path(edit_log_path.as_deref()) {
        eprintln!(
            "[warn] Failed to initialize edit log {}: {}",
            edit_log_path
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string()),
            err
        );
    }

    let policy = effective.policy.map(PolicyMode::to_policy).unwrap_or_default();
    let indent_width = effective.indent_width.unwrap_or(2).clamp(1, 8);
    // Debug panes default to visible; --no-debug-panes hides them unless a
    // later --debug-panes wins them back.
    let debug_panes = effective.debug_panes || !effective.no_debug_panes;

    // Run the application
    let mut app = App::new()
        .with_policy(policy)
        .with_indent_width(indent_width)
        .with_debug_panes(debug_panes);

    app.run().context("Application error")
}
