//! Feature-set file operations: generate, show, validate, clear.

use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;

use crate::core::feature_set::{self, FeatureSet};

pub fn execute(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("generate", sub_matches)) => generate(sub_matches),
        Some(("show", sub_matches)) => show(sub_matches),
        Some(("validate", sub_matches)) => validate(sub_matches),
        Some(("clear", sub_matches)) => clear(sub_matches),
        _ => {
            println!("Use 'ndm config --help' for more information.");
            Ok(())
        }
    }
}

fn generate(matches: &ArgMatches) -> Result<()> {
    let output = matches
        .get_one::<String>("output")
        .context("output is required")?;

    let device = super::device_from_matches(matches)?;
    let config = feature_set::generate(&device);

    feature_set::save(output, &config)
        .with_context(|| format!("failed to save configuration to {}", output))?;

    println!(
        "{} {}",
        "✓ Configuration saved to".green(),
        output.cyan().bold()
    );
    if let Some(config_file) = config.get("config_file") {
        println!(
            "{} {}",
            "Config template:".white(),
            config_file.cyan().bold()
        );
    }

    Ok(())
}

fn show(matches: &ArgMatches) -> Result<()> {
    let file = matches.get_one::<String>("file").context("file is required")?;

    let config = feature_set::load(file)
        .with_context(|| format!("failed to load configuration from {}", file))?;

    if config.is_empty() {
        println!("{}", "Configuration is empty.".yellow());
        return Ok(());
    }

    println!("{} {}", "Configuration:".white().bold(), file.dimmed());
    for (key, value) in &config {
        let label = format!("{:<12}", format!("{}:", key));
        println!("  {} {}", label.white(), value.cyan());
    }

    Ok(())
}

fn validate(matches: &ArgMatches) -> Result<()> {
    let file = matches.get_one::<String>("file").context("file is required")?;

    let config = feature_set::load(file)
        .with_context(|| format!("failed to load configuration from {}", file))?;

    if feature_set::validate(&config) {
        println!("{}", "Configuration is valid.".green().bold());
        Ok(())
    } else {
        println!(
            "{}",
            "Configuration is missing required keys.".red().bold()
        );
        std::process::exit(1);
    }
}

fn clear(matches: &ArgMatches) -> Result<()> {
    let file = matches.get_one::<String>("file").context("file is required")?;

    feature_set::save(file, &FeatureSet::new())
        .with_context(|| format!("failed to clear configuration at {}", file))?;

    println!("{} {}", "✓ Configuration cleared:".green(), file.cyan());
    Ok(())
}
