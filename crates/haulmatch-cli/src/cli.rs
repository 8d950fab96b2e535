//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use haulmatch_domain::model::MachineConfiguration;
use haulmatch_types::{BucketCatalogKind, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "haulmatch")]
#[command(version)]
#[command(about = "Excavator bucket matching and haul-cycle productivity comparison")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Directory holding the reference CSV files (overrides config)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

/// Full excavator configuration
#[derive(Args, Debug, Clone)]
pub struct MachineArgs {
    /// Excavator make
    #[arg(long)]
    pub make: String,

    /// Excavator model
    #[arg(long)]
    pub model: String,

    /// Boom length (m)
    #[arg(long)]
    pub boom: f64,

    /// Arm length (m)
    #[arg(long)]
    pub arm: f64,

    /// Counterweight (kg)
    #[arg(long)]
    pub counterweight: f64,

    /// Track shoe width (mm)
    #[arg(long)]
    pub shoe_width: f64,

    /// Operating reach (m)
    #[arg(long)]
    pub reach: f64,
}

impl MachineArgs {
    pub fn to_configuration(&self) -> MachineConfiguration {
        MachineConfiguration {
            make: self.make.clone(),
            model: self.model.clone(),
            boom_length_m: self.boom,
            arm_length_m: self.arm,
            counterweight_kg: self.counterweight,
            shoe_width_mm: self.shoe_width,
            reach_m: self.reach,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Select the optimal bucket and compare it with the current one
    Compare {
        #[command(flatten)]
        machine: MachineArgs,

        /// Dump truck brand (with --truck-type and --truck-model)
        #[arg(long, requires_all = ["truck_type", "truck_model"], conflicts_with = "payload")]
        truck_brand: Option<String>,

        /// Dump truck type
        #[arg(long, requires = "truck_brand")]
        truck_type: Option<String>,

        /// Dump truck model
        #[arg(long, requires = "truck_brand")]
        truck_model: Option<String>,

        /// Rated truck payload in tonnes, instead of a catalog truck
        #[arg(long, required_unless_present = "truck_brand")]
        payload: Option<f64>,

        /// Material density (kg/m³)
        #[arg(long)]
        density: f64,

        /// Quick hitch weight (kg)
        #[arg(long, default_value = "0")]
        quick_hitch: f64,

        /// Current bucket capacity (m³)
        #[arg(long)]
        current_size: f64,

        /// Current bucket weight (kg)
        #[arg(long)]
        current_weight: f64,

        /// Bucket swings per minute
        #[arg(long)]
        swings_per_minute: f64,

        /// Search the heavy-duty catalog instead of the configured default
        #[arg(long)]
        heavy_duty: bool,

        /// Export the comparison to an Excel file
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Look up the safe working load and class of a configuration
    Swl {
        #[command(flatten)]
        machine: MachineArgs,
    },

    /// List machine makes, models of a make, or configurations of a model
    Machines {
        /// Narrow to one make
        #[arg(long)]
        make: Option<String>,

        /// Narrow to one model (requires --make)
        #[arg(long, requires = "make")]
        model: Option<String>,
    },

    /// List dump truck brands, types of a brand, or models of a type
    Trucks {
        /// Narrow to one brand
        #[arg(long)]
        brand: Option<String>,

        /// Narrow to one type (requires --brand)
        #[arg(long = "type", requires = "brand")]
        truck_type: Option<String>,
    },

    /// Align a truck payload with whole bucket passes
    MatchPayload {
        /// Rated truck payload (kg)
        #[arg(long)]
        payload_kg: f64,

        /// Load carried per pass (kg)
        #[arg(long)]
        pass_load_kg: f64,
    },

    /// Show or modify configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set reference data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set default bucket catalog
        #[arg(long)]
        set_catalog: Option<BucketCatalogKind>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
