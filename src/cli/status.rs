//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::schema;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "igcop Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!("Config file: {}", config_path.display().to_string().cyan());

    if config_path.exists() {
        println!("{} Configuration file found", "✓".green());
    } else {
        println!("{} No configuration file (using defaults)", "○".dimmed());
    }

    match CommandContext::new(opts) {
        Ok(ctx) => {
            println!();
            let format = match ctx.format {
                OutputFormat::Table => "table",
                OutputFormat::Json => "json",
            };
            println!("Output format: {}", format.bold());
            println!("Page size: {}", ctx.page_size().to_string().bold());
            if ctx.strict() {
                println!("Strict decoding: {}", "on".yellow());
            } else {
                println!("Strict decoding: {}", "off".dimmed());
            }
        }
        Err(err) => {
            println!("{} Configuration invalid: {}", "✗".red(), err);
        }
    }

    println!();
    println!("Known asset types: {}", schema::registry().len());
    println!();

    Ok(())
}
