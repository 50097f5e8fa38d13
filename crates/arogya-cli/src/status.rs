//! `arogya status`: show configuration and credential status.

use colored::Colorize;

use arogya_core::config::{api_key_from_env, get_config_path, load_config, SARVAM_API_KEY_ENV};
use arogya_providers::transcription::{LANGUAGE_CODE, MODE, STT_MODEL};

/// Run the status command.
pub fn run() {
    let config = load_config(None);
    let sarvam = &config.sarvam;
    let config_path = get_config_path();

    println!();
    println!("{}", "Arogya Status".cyan().bold());
    println!();

    println!(
        "  {:<18} {} {}",
        "Config:".bold(),
        config_path.display(),
        if config_path.exists() {
            "✓".green().to_string()
        } else {
            "(not found, using defaults)".dimmed().to_string()
        }
    );
    println!("  {:<18} {}", "API base:".bold(), sarvam.api_base);
    println!(
        "  {:<18} {} | language: {} | mode: {}",
        "Speech model:".bold(),
        STT_MODEL,
        LANGUAGE_CODE.dimmed(),
        MODE.dimmed(),
    );
    println!("  {:<18} {}", "Vision model:".bold(), sarvam.chat_model);
    println!("  {:<18} {}s", "Timeout:".bold(), sarvam.timeout_secs);
    println!(
        "  {:<18} {}",
        "Scratch dir:".bold(),
        sarvam.scratch_dir_path().display()
    );

    println!();
    let key_status = if api_key_from_env().is_some() {
        format!("{} (key set)", "✓".green())
    } else {
        format!("{}", "✗ not set".red())
    };
    println!("  {:<18} {}", format!("{SARVAM_API_KEY_ENV}:").as_str().bold(), key_status);
    println!();
}
