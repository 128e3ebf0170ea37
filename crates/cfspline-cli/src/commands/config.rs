//! Config command implementation.
//!
//! Shows the configuration in effect after merging file and flags.

use anyhow::Result;
use clap::Args;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::config::default_path;
use crate::output::{print_info, print_output, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Only show where the configuration file is looked up
    #[arg(long)]
    pub path: bool,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> Result<()> {
    if args.path {
        return execute_path(ctx);
    }

    let config = &ctx.config;
    match ctx.format {
        OutputFormat::Json => {
            let mut effective = config.clone();
            effective.format = ctx.format;
            println!("{}", serde_json::to_string_pretty(&effective)?);
        }
        format => {
            let rows = vec![
                KeyValue::new("log_filter", &config.log_filter),
                KeyValue::new("format", ctx.format),
                KeyValue::new("precision", config.precision),
                KeyValue::new("profile_interval", config.profile_interval),
            ];
            ctx.header("Current Configuration");
            print_output(&rows, format, config.precision)?;
        }
    }

    Ok(())
}

/// Show configuration file location.
fn execute_path(ctx: &Context) -> Result<()> {
    match (&ctx.source, default_path()) {
        (Some(source), _) => print_info(&format!("Config file: {}", source.display())),
        (None, Some(path)) => {
            print_info(&format!("Config file: {}", path.display()));
            print_info("Status: not created yet (using defaults)");
        }
        (None, None) => print_info("No config directory on this platform (using defaults)"),
    }
    Ok(())
}
