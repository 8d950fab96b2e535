//! Output formatting module

use haulmatch_app::app::ComparisonOutcome;
use haulmatch_app::report::{build_sections, footnotes, ReportSection, COLUMNS};
use haulmatch_domain::model::{MachineConfiguration, PassMatch};
use haulmatch_types::{OutputFormat, Result};
use serde::Serialize;

pub fn output_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    println!("{}", content);
    Ok(())
}

pub fn output_comparison(
    output_format: OutputFormat,
    outcome: &ComparisonOutcome,
    truck_label: Option<&str>,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return output_json(outcome);
    }

    match outcome {
        ComparisonOutcome::ConfigurationNotFound { configuration } => {
            println!("No safe working load listed for the {}.", configuration);
        }
        ComparisonOutcome::ClassNotFound { model } => {
            println!("No machine class listed for model {}.", model);
        }
        ComparisonOutcome::NoCompatibleBucket {
            swl_kg,
            excavator_class,
            catalog,
        } => {
            println!(
                "No {} bucket fits class {} within a safe working load of {:.0}kg.",
                catalog.label(),
                excavator_class,
                swl_kg
            );
        }
        ComparisonOutcome::Completed(comparison) => {
            let bucket = &comparison.optimal.bucket;
            println!("\nSelected Bucket");
            println!("===============");
            println!("Bucket:          {}", bucket.name);
            println!("Capacity:        {:.2} m³", bucket.size_m3);
            println!("Weight:          {:.0} kg", bucket.weight_kg);
            println!("Class:           {} (machine class {})", bucket.class, comparison.excavator_class);
            println!("Safe work load:  {:.0} kg", comparison.swl.swl_kg);
            println!(
                "Suspended load:  {:.0} kg",
                comparison.optimal.total_suspended_load_kg
            );

            for section in build_sections(comparison)? {
                print_section(&section);
            }

            println!();
            for note in footnotes(comparison, truck_label) {
                println!("{}", note);
            }
            println!(
                "Productivity gain with a 10% faster cycle: {:.0}%",
                comparison.report.productivity_gain_percent
            );
        }
    }

    Ok(())
}

fn print_section(section: &ReportSection) {
    let mut widths = COLUMNS.map(str::len);
    for row in &section.rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    println!("\n{}", section.title);
    println!("{}", "-".repeat(section.title.chars().count()));
    print_row(&COLUMNS, &widths);
    for row in &section.rows {
        print_row(&row.cells(), &widths);
    }
}

fn print_row(cells: &[&str; 5], widths: &[usize; 5]) {
    let mut line = format!("{:<width$}", cells[0], width = widths[0]);
    for (cell, width) in cells[1..].iter().zip(&widths[1..]) {
        line.push_str("  ");
        line.push_str(&format!("{:>width$}", cell, width = *width));
    }
    println!("{}", line.trim_end());
}

pub fn output_swl(
    output_format: OutputFormat,
    configuration: &MachineConfiguration,
    swl_kg: Option<f64>,
    class: Option<i32>,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        #[derive(Serialize)]
        struct SwlLookup<'a> {
            configuration: &'a MachineConfiguration,
            swl_kg: Option<f64>,
            class: Option<i32>,
        }
        return output_json(&SwlLookup {
            configuration,
            swl_kg,
            class,
        });
    }

    println!("{}", configuration);
    match swl_kg {
        Some(swl) => println!("Safe working load: {:.0} kg", swl),
        None => println!("Safe working load: not listed"),
    }
    match class {
        Some(class) => println!("Machine class:     {}", class),
        None => println!("Machine class:     not listed"),
    }
    Ok(())
}

pub fn output_pass_match(output_format: OutputFormat, pass_match: &PassMatch) -> Result<()> {
    if output_format == OutputFormat::Json {
        return output_json(pass_match);
    }

    println!("Rated payload:     {:.0} kg", pass_match.rated_payload_kg);
    println!("Effective payload: {:.0} kg", pass_match.effective_payload_kg);
    println!("Passes:            {:.2}", pass_match.pass_count);
    if pass_match.is_adjusted() {
        println!("Fill factor:       {:.1}%", pass_match.fill_factor_percent());
    }
    Ok(())
}

pub fn output_cascade(output_format: OutputFormat, title: &str, items: &[String]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return output_json(items);
    }

    println!("{}", title);
    if items.is_empty() {
        println!("  (none)");
    }
    for item in items {
        println!("  {}", item);
    }
    Ok(())
}
