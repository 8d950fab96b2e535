//! Excavator configuration and safe-working-load table

use serde::{Deserialize, Serialize};

use super::distinct;

/// Full machine configuration; identifies one row of the SWL table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineConfiguration {
    pub make: String,
    pub model: String,
    /// Boom length in metres
    pub boom_length_m: f64,
    /// Arm (stick) length in metres
    pub arm_length_m: f64,
    /// Counterweight in kg
    pub counterweight_kg: f64,
    /// Track shoe width in mm
    pub shoe_width_mm: f64,
    /// Operating reach in metres
    pub reach_m: f64,
}

impl std::fmt::Display for MachineConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} with a {}m boom, {}m arm, {}kg counterweight, {}mm shoes at {}m reach",
            self.make,
            self.model,
            self.boom_length_m,
            self.arm_length_m,
            self.counterweight_kg,
            self.shoe_width_mm,
            self.reach_m
        )
    }
}

/// One row of the SWL table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwlRecord {
    pub configuration: MachineConfiguration,
    /// Safe working load in kg
    pub swl_kg: f64,
    /// Manufacturer duty class of the machine
    pub class: i32,
}

/// Immutable snapshot of the machine SWL table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwlTable {
    records: Vec<SwlRecord>,
}

impl SwlTable {
    pub fn new(records: Vec<SwlRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SwlRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Machine makes in table order
    pub fn makes(&self) -> Vec<&str> {
        distinct(self.records.iter().map(|r| r.configuration.make.as_str()))
    }

    /// Models offered by one make
    pub fn models(&self, make: &str) -> Vec<&str> {
        distinct(
            self.records
                .iter()
                .filter(|r| r.configuration.make == make)
                .map(|r| r.configuration.model.as_str()),
        )
    }

    /// Every configuration listed for a make and model
    pub fn configurations(&self, make: &str, model: &str) -> Vec<&MachineConfiguration> {
        self.records
            .iter()
            .filter(|r| r.configuration.make == make && r.configuration.model == model)
            .map(|r| &r.configuration)
            .collect()
    }

    /// Configurations that appear on more than one row
    ///
    /// Each duplicated configuration is reported once.
    pub fn duplicate_configurations(&self) -> Vec<&MachineConfiguration> {
        let mut duplicates: Vec<&MachineConfiguration> = Vec::new();
        for (idx, record) in self.records.iter().enumerate() {
            let config = &record.configuration;
            if duplicates.contains(&config) {
                continue;
            }
            if self.records[idx + 1..].iter().any(|r| r.configuration == *config) {
                duplicates.push(config);
            }
        }
        duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(make: &str, model: &str, reach: f64, swl: f64) -> SwlRecord {
        SwlRecord {
            configuration: MachineConfiguration {
                make: make.to_string(),
                model: model.to_string(),
                boom_length_m: 5.7,
                arm_length_m: 2.9,
                counterweight_kg: 4300.0,
                shoe_width_mm: 600.0,
                reach_m: reach,
            },
            swl_kg: swl,
            class: 20,
        }
    }

    fn table() -> SwlTable {
        SwlTable::new(vec![
            record("Komatsu", "PC210", 6.0, 5200.0),
            record("Cat", "320", 6.0, 5100.0),
            record("Komatsu", "PC210", 7.5, 4100.0),
            record("Komatsu", "PC300", 6.0, 7900.0),
        ])
    }

    #[test]
    fn test_makes_in_table_order() {
        assert_eq!(table().makes(), vec!["Komatsu", "Cat"]);
    }

    #[test]
    fn test_models_for_make() {
        assert_eq!(table().models("Komatsu"), vec!["PC210", "PC300"]);
        assert!(table().models("Volvo").is_empty());
    }

    #[test]
    fn test_configurations_for_model() {
        let t = table();
        let configs = t.configurations("Komatsu", "PC210");
        assert_eq!(configs.len(), 2);
        assert_eq!(configs[1].reach_m, 7.5);
    }

    #[test]
    fn test_duplicate_configurations() {
        assert!(table().duplicate_configurations().is_empty());

        let mut records = table().records().to_vec();
        records.push(record("Cat", "320", 6.0, 4900.0));
        records.push(record("Cat", "320", 6.0, 4800.0));
        let dupes = SwlTable::new(records);
        let found = dupes.duplicate_configurations();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].model, "320");
    }

    #[test]
    fn test_display_names_all_fields() {
        let text = record("Cat", "320", 6.0, 5100.0).configuration.to_string();
        assert!(text.contains("Cat 320"));
        assert!(text.contains("4300kg counterweight"));
        assert!(text.contains("6m reach"));
    }
}
