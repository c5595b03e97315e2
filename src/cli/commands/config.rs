//! Config command handler

use crate::args::ConfigSubcommand;
use degree_audit::config::Config;
use degree_audit::warn;
use std::io::{self, Write};
use std::path::Path;

/// Keys accepted by `config get`/`set`/`unset`.
const KNOWN_KEYS: [&str; 5] = ["level", "file", "verbose", "data_file", "reports_dir"];

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => show_all(config),
        Some(ConfigSubcommand::Get { key: Some(key) }) => show_one(config, &key),
        Some(ConfigSubcommand::Set { key, value }) => set_value(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset_value(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset_all(),
    }
}

/// Print every configuration value plus the file it is stored in.
fn show_all(config: &Config) {
    println!("# {}\n", Config::get_config_file_path().display());
    print!("{config}");
}

/// Print a single configuration value.
fn show_one(config: &Config, key: &str) {
    match config.get(key) {
        Some(value) => println!("{value}"),
        None => fail_unknown_key(key),
    }
}

/// Set and persist a configuration value.
fn set_value(config: &mut Config, key: &str, value: &str) {
    if let Err(e) = config.set(key, value) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    persist(config);

    // A dataset path that does not exist yet is legal to store but every
    // audit will fail until the file appears.
    if matches!(key, "data_file" | "data-file") && !value.is_empty() && !Path::new(value).exists() {
        warn!("Audit dataset {value} does not exist yet");
    }

    println!("✓ Set {key} = {value}");
}

/// Restore one key to its compiled-in default and persist.
fn unset_value(config: &mut Config, defaults: &Config, key: &str) {
    if config.unset(key, defaults).is_err() {
        fail_unknown_key(key);
    }
    persist(config);
    println!("✓ Reset {key} to default");
}

/// Delete the config file after confirmation; the next run recreates it.
fn reset_all() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Reset all configuration to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    let answer = response.trim();

    if !answer.eq_ignore_ascii_case("y") && !answer.eq_ignore_ascii_case("yes") {
        println!("✗ Reset cancelled");
        return;
    }

    if let Err(e) = Config::reset() {
        eprintln!("✗ Failed to remove config file: {e}");
        std::process::exit(1);
    }
    println!("✓ Config reset to defaults");
}

fn persist(config: &Config) {
    if let Err(e) = config.save() {
        eprintln!("✗ Failed to save config: {e}");
        std::process::exit(1);
    }
}

fn fail_unknown_key(key: &str) -> ! {
    eprintln!(
        "✗ Unknown config key: '{key}' (known keys: {})",
        KNOWN_KEYS.join(", ")
    );
    std::process::exit(1);
}
