use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::IndentPolicy;

/// Indent propagation contract, as selected on the command line.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyMode {
    /// Deepen every line at or after the trigger (the legacy behavior)
    Trailing,
    /// Deepen only lines created by the current edit
    Scoped,
}

impl PolicyMode {
    pub const fn to_policy(self) -> IndentPolicy {
        match self {
            Self::Trailing => IndentPolicy::TrailingLines,
            Self::Scoped => IndentPolicy::ScopedLines,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub policy: Option<PolicyMode>,
    pub indent_width: Option<u16>,
    pub debug_panes: bool,
    pub no_debug_panes: bool,
    pub edit_log: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            policy: other.policy.or(self.policy),
            indent_width: other.indent_width.or(self.indent_width),
            debug_panes: self.debug_panes || other.debug_panes,
            no_debug_panes: self.no_debug_panes || other.no_debug_panes,
            edit_log: other.edit_log.clone().or_else(|| self.edit_log.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("linescope").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("linescope")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("linescope").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("linescope")
                .join("config");
        }
    }

    PathBuf::from(".linescoperc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".linescoperc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# linescope defaults (saved with --save)".to_string());
    if let Some(policy) = flags.policy {
        let policy_str = match policy {
            PolicyMode::Trailing => "trailing",
            PolicyMode::Scoped => "scoped",
        };
        lines.push(format!("--policy {}", policy_str));
    }
    if let Some(width) = flags.indent_width {
        lines.push(format!("--indent-width {}", width));
    }
    if flags.debug_panes {
        lines.push("--debug-panes".to_string());
    }
    if flags.no_debug_panes {
        lines.push("--no-debug-panes".to_string());
    }
    if let Some(log_path) = &flags.edit_log {
        lines.push(format!("--edit-log {}", log_path.display()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--debug-panes" {
            flags.debug_panes = true;
        } else if token == "--no-debug-panes" {
            flags.no_debug_panes = true;
        } else if token == "--policy" {
            if let Some(next) = tokens.get(i + 1) {
                flags.policy = parse_policy(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--policy=") {
            flags.policy = parse_policy(value);
        } else if token == "--indent-width" {
            if let Some(next) = tokens.get(i + 1) {
                flags.indent_width = next.parse().ok();
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--indent-width=") {
            flags.indent_width = value.parse().ok();
        } else if token == "--edit-log" {
            if let Some(next) = tokens.get(i + 1) {
                flags.edit_log = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--edit-log=") {
            flags.edit_log = Some(PathBuf::from(value));
        }
        i += 1;
    }
    flags
}

fn parse_policy(s: &str) -> Option<PolicyMode> {
    match s {
        "trailing" => Some(PolicyMode::Trailing),
        "scoped" => Some(PolicyMode::Scoped),
        _ => None,
    }
}
