//! Command handlers

use std::path::PathBuf;

use crate::cli::{Cli, Commands};
use crate::output::{output_batch, output_bridge, output_limits, output_verdict};
use tracing::debug;
use weighcheck_app::app::{check_ticket_source, evaluate, ComplianceRequest, TicketFilter};
use weighcheck_app::config::Config;
use weighcheck_app::export::export_to_excel;
use weighcheck_domain::service::max_group_weight;
use weighcheck_types::{Jurisdiction, OutputFormat, Result};

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Classify {
            weight,
            axle_class,
            jurisdiction,
            state_limit,
            axle_count,
            spacing,
        } => {
            let request = ComplianceRequest {
                weight,
                axle_class,
                jurisdiction,
                state_limit,
                axle_count,
                spacing_feet: spacing,
            };
            cmd_classify(&config, &request, output_format)
        }
        Commands::Bridge { axles, spacing } => cmd_bridge(axles, spacing, output_format),
        Commands::Limits { jurisdiction } => cmd_limits(&config, jurisdiction, output_format),
        Commands::CheckTickets {
            path,
            export,
            vehicle,
            date,
        } => {
            let filter = TicketFilter {
                vehicle_id: vehicle,
                date,
            };
            cmd_check_tickets(&config, path, &filter, export, output_format)
        }
        Commands::Config {
            show,
            set_jurisdiction,
            set_output,
            set_limits_file,
            clear_limits_file,
            reset,
        } => cmd_config(
            config,
            show,
            set_jurisdiction,
            set_output,
            set_limits_file,
            clear_limits_file,
            reset,
        ),
    }
}

fn cmd_classify(config: &Config, request: &ComplianceRequest, output_format: OutputFormat) -> Result<()> {
    let table = config.limit_table()?;
    debug!(?request, "classifying weight");
    let verdict = evaluate(config, &table, request)?;
    output_verdict(output_format, &verdict)
}

fn cmd_bridge(axles: u32, spacing: f64, output_format: OutputFormat) -> Result<()> {
    let limit = max_group_weight(axles, spacing)?;
    output_bridge(output_format, axles, spacing, limit)
}

fn cmd_limits(config: &Config, jurisdiction: Option<String>, output_format: OutputFormat) -> Result<()> {
    let table = config.limit_table()?;
    let entries = match jurisdiction {
        Some(code) => {
            let jurisdiction = Jurisdiction::from_code(&code);
            vec![(jurisdiction, table.resolve(jurisdiction).0)]
        }
        None => table.entries(),
    };
    output_limits(output_format, &entries)
}

fn cmd_check_tickets(
    config: &Config,
    path: PathBuf,
    filter: &TicketFilter,
    export: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let table = config.limit_table()?;
    let batch = check_ticket_source(&table, &path, filter)?;
    output_batch(output_format, &batch)?;

    if let Some(export_path) = export {
        export_to_excel(&batch, &export_path)?;
        eprintln!("Exported results to: {}", export_path.display());
    }
    Ok(())
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_jurisdiction: Option<String>,
    set_output: Option<OutputFormat>,
    set_limits_file: Option<PathBuf>,
    clear_limits_file: bool,
    reset: bool,
) -> Result<()> {
    if reset {
        config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        return Ok(());
    }

    let mut modified = false;

    if let Some(code) = set_jurisdiction {
        let jurisdiction = Jurisdiction::from_code(&code);
        if jurisdiction == Jurisdiction::Federal {
            println!("Note: '{}' is not a state code; the federal baseline will be used.", code);
        }
        config.default_jurisdiction = jurisdiction.code();
        modified = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        modified = true;
    }
    if let Some(path) = set_limits_file {
        config.set_limits_file(path)?;
        modified = true;
    }
    if clear_limits_file {
        config.limits_file = None;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || !modified {
        println!("Configuration file: {}", Config::config_path()?.display());
        println!();
        println!("default_jurisdiction: {} ({})", config.default_jurisdiction, config.jurisdiction().name());
        println!("output_format:        {}", config.output_format);
        match &config.limits_file {
            Some(path) => println!("limits_file:          {}", path.display()),
            None => println!("limits_file:          (built-in limits only)"),
        }
    }

    Ok(())
}
