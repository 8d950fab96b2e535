//! Command handlers

use crate::cli::{Cli, Commands, MachineArgs};
use crate::output::{
    output_cascade, output_comparison, output_json, output_pass_match, output_swl,
};
use haulmatch_app::app::{run_with_tables, ComparisonOutcome};
use haulmatch_app::config::Config;
use haulmatch_app::export::export_to_excel;
use haulmatch_app::report::{build_sections, footnotes};
use haulmatch_app::repository::{load_reference_tables, open_reference_repo};
use haulmatch_domain::model::{CurrentBucket, SelectionInput};
use haulmatch_domain::repository::ReferenceDataRepository;
use haulmatch_domain::service::{find_swl_record, match_payload, resolve_class};
use haulmatch_types::{BucketCatalogKind, Error, OutputFormat, Result};
use std::path::PathBuf;

pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref dir) = cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Compare {
            machine,
            truck_brand,
            truck_type,
            truck_model,
            payload,
            density,
            quick_hitch,
            current_size,
            current_weight,
            swings_per_minute,
            heavy_duty,
            export,
        } => {
            let catalog = if heavy_duty {
                BucketCatalogKind::HeavyDuty
            } else {
                config.default_catalog
            };
            let request = CompareRequest {
                machine,
                truck: TruckChoice::from_args(truck_brand, truck_type, truck_model, payload)?,
                density,
                quick_hitch,
                current_bucket: CurrentBucket {
                    size_m3: current_size,
                    weight_kg: current_weight,
                },
                swings_per_minute,
                catalog,
            };
            cmd_compare(&config, request, output_format, export)
        }

        Commands::Swl { machine } => cmd_swl(&config, &machine, output_format),

        Commands::Machines { make, model } => cmd_machines(&config, make, model, output_format),

        Commands::Trucks { brand, truck_type } => cmd_trucks(&config, brand, truck_type, output_format),

        Commands::MatchPayload {
            payload_kg,
            pass_load_kg,
        } => {
            let pass_match = match_payload(payload_kg, pass_load_kg)?;
            output_pass_match(output_format, &pass_match)
        }

        Commands::Config {
            show,
            set_data_dir,
            set_catalog,
            set_output,
            reset,
        } => cmd_config(show, set_data_dir, set_catalog, set_output, reset),
    }
}

/// Truck selected by catalog entry or by a bare payload
enum TruckChoice {
    Catalog {
        brand: String,
        truck_type: String,
        model: String,
    },
    Payload(f64),
}

impl TruckChoice {
    fn from_args(
        brand: Option<String>,
        truck_type: Option<String>,
        model: Option<String>,
        payload: Option<f64>,
    ) -> Result<Self> {
        match (brand, truck_type, model, payload) {
            (Some(brand), Some(truck_type), Some(model), None) => Ok(TruckChoice::Catalog {
                brand,
                truck_type,
                model,
            }),
            (None, None, None, Some(tonnes)) => Ok(TruckChoice::Payload(tonnes)),
            _ => Err(Error::invalid_input(
                "give either --truck-brand/--truck-type/--truck-model or --payload",
            )),
        }
    }
}

struct CompareRequest {
    machine: MachineArgs,
    truck: TruckChoice,
    density: f64,
    quick_hitch: f64,
    current_bucket: CurrentBucket,
    swings_per_minute: f64,
    catalog: BucketCatalogKind,
}

fn cmd_compare(
    config: &Config,
    request: CompareRequest,
    output_format: OutputFormat,
    export: Option<PathBuf>,
) -> Result<()> {
    let tables = load_reference_tables(config)?;

    let (truck_payload_tonnes, truck_label) = match request.truck {
        TruckChoice::Catalog {
            brand,
            truck_type,
            model,
        } => {
            let truck = tables
                .dump_trucks
                .find(&brand, &truck_type, &model)
                .ok_or_else(|| {
                    Error::invalid_input(format!(
                        "unknown dump truck: {} {} {}",
                        brand, truck_type, model
                    ))
                })?;
            (
                truck.payload_tonnes,
                Some(format!("{} {} {}", truck.brand, truck.truck_type, truck.model)),
            )
        }
        TruckChoice::Payload(tonnes) => (tonnes, None),
    };

    let input = SelectionInput {
        configuration: request.machine.to_configuration(),
        material_density: request.density,
        quick_hitch_weight_kg: request.quick_hitch,
        current_bucket: request.current_bucket,
        truck_payload_tonnes,
        swings_per_minute: request.swings_per_minute,
        catalog: request.catalog,
    };

    let outcome = run_with_tables(&input, &tables)?;

    if let (Some(path), ComparisonOutcome::Completed(comparison)) = (&export, &outcome) {
        let sections = build_sections(comparison)?;
        let notes = footnotes(comparison, truck_label.as_deref());
        export_to_excel(&sections, &notes, path)?;
        eprintln!("Exported to {}", path.display());
    } else if export.is_some() {
        eprintln!("Nothing to export: no bucket comparison was produced");
    }

    output_comparison(output_format, &outcome, truck_label.as_deref())
}

fn cmd_swl(config: &Config, machine: &MachineArgs, output_format: OutputFormat) -> Result<()> {
    let table = open_reference_repo(config)?.swl_table()?;
    let configuration = machine.to_configuration();

    let record = find_swl_record(&configuration, &table)?;
    let class = resolve_class(&configuration.model, &table)?;
    output_swl(output_format, &configuration, record.map(|r| r.swl_kg), class)
}

fn cmd_machines(
    config: &Config,
    make: Option<String>,
    model: Option<String>,
    output_format: OutputFormat,
) -> Result<()> {
    let table = open_reference_repo(config)?.swl_table()?;

    match (make, model) {
        (Some(make), Some(model)) => {
            let configurations = table.configurations(&make, &model);
            if output_format == OutputFormat::Json {
                return output_json(&configurations);
            }
            let lines: Vec<String> = configurations.iter().map(|c| c.to_string()).collect();
            output_cascade(
                output_format,
                &format!("Configurations of {} {}", make, model),
                &lines,
            )
        }
        (Some(make), None) => {
            let models = owned(table.models(&make));
            output_cascade(output_format, &format!("Models of {}", make), &models)
        }
        _ => output_cascade(output_format, "Makes", &owned(table.makes())),
    }
}

fn cmd_trucks(
    config: &Config,
    brand: Option<String>,
    truck_type: Option<String>,
    output_format: OutputFormat,
) -> Result<()> {
    let trucks = open_reference_repo(config)?.dump_trucks()?;

    match (brand, truck_type) {
        (Some(brand), Some(truck_type)) => {
            let lines: Vec<String> = trucks
                .models(&brand, &truck_type)
                .into_iter()
                .filter_map(|model| trucks.find(&brand, &truck_type, model))
                .map(|t| format!("{} ({:.0} t)", t.model, t.payload_tonnes))
                .collect();
            output_cascade(
                output_format,
                &format!("{} {} models", brand, truck_type),
                &lines,
            )
        }
        (Some(brand), None) => {
            let types = owned(trucks.types(&brand));
            output_cascade(output_format, &format!("Types of {}", brand), &types)
        }
        _ => output_cascade(output_format, "Brands", &owned(trucks.brands())),
    }
}

fn owned(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}

fn cmd_config(
    show: bool,
    set_data_dir: Option<PathBuf>,
    set_catalog: Option<BucketCatalogKind>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(dir) = set_data_dir {
        config.data_dir = Some(dir);
        modified = true;
    }

    if let Some(catalog) = set_catalog {
        config.default_catalog = catalog;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
