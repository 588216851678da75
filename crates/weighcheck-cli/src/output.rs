//! Output formatting module

use serde::Serialize;
use weighcheck_app::app::TicketBatch;
use weighcheck_domain::model::{BridgeLimit, WeightLimit};
use weighcheck_domain::service::generate_compliance_report;
use weighcheck_types::{ComplianceVerdict, Jurisdiction, OutputFormat, Result};

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    println!("{}", content);
    Ok(())
}

pub fn output_verdict(output_format: OutputFormat, verdict: &ComplianceVerdict) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(verdict);
    }

    println!("\nCompliance Result");
    println!("=================");
    println!("Status:          {}", verdict.status);
    println!(
        "Jurisdiction:    {} ({})",
        verdict.jurisdiction.code(),
        verdict.jurisdiction.name()
    );
    println!("Axle class:      {}", verdict.axle_class);
    println!("Weight:          {:.0} lbs", verdict.weight_pounds);
    println!("Limit:           {} lbs ({:?})", verdict.applicable_limit, verdict.limit_source);
    println!("Load:            {:.1}%", verdict.percent_of_limit);
    if let Some(excess) = verdict.excess_pounds {
        println!("Excess:          {:.0} lbs", excess);
    }
    println!("\n{}", verdict.message);
    Ok(())
}

#[derive(Serialize)]
struct BridgeOutput {
    axle_count: u32,
    spacing_feet: f64,
    limit: BridgeLimit,
    max_weight_pounds: Option<u32>,
}

pub fn output_bridge(
    output_format: OutputFormat,
    axle_count: u32,
    spacing_feet: f64,
    limit: BridgeLimit,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&BridgeOutput {
            axle_count,
            spacing_feet,
            limit,
            max_weight_pounds: limit.floor_pounds(),
        });
    }

    println!("\nBridge Formula");
    println!("==============");
    println!("Axles:           {}", axle_count);
    println!("Spacing:         {:.1} ft", spacing_feet);
    match limit.floor_pounds() {
        Some(pounds) => println!("Max weight:      {} lbs", pounds),
        None => println!("Max weight:      not applicable (single axle; axle-class limit governs)"),
    }
    Ok(())
}

#[derive(Serialize)]
struct LimitRow {
    jurisdiction: Jurisdiction,
    name: &'static str,
    #[serde(flatten)]
    limit: WeightLimit,
}

pub fn output_limits(output_format: OutputFormat, entries: &[(Jurisdiction, WeightLimit)]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let rows: Vec<LimitRow> = entries
            .iter()
            .map(|(jurisdiction, limit)| LimitRow {
                jurisdiction: *jurisdiction,
                name: jurisdiction.name(),
                limit: *limit,
            })
            .collect();
        return print_json(&rows);
    }

    println!(
        "{:<4} {:<22} {:>10} {:>10} {:>10}",
        "Code", "Jurisdiction", "Single", "Tandem", "Gross"
    );
    println!("{}", "-".repeat(60));
    for (jurisdiction, limit) in entries {
        println!(
            "{:<4} {:<22} {:>10} {:>10} {:>10}",
            jurisdiction.code(),
            jurisdiction.name(),
            limit.single_axle,
            limit.tandem_axle,
            limit.gross_vehicle_weight
        );
    }
    Ok(())
}

pub fn output_batch(output_format: OutputFormat, batch: &TicketBatch) -> Result<()> {
    match output_format {
        OutputFormat::Json => print_json(batch),
        OutputFormat::Table => {
            for source in &batch.sources {
                println!("Source: {}", source.display());
            }
            println!();
            print!("{}", generate_compliance_report(&batch.results));
            Ok(())
        }
    }
}
