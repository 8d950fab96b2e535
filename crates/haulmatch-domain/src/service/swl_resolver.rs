//! Safe working load lookup

use haulmatch_types::{Error, Result};
use tracing::debug;

use crate::model::{MachineConfiguration, SwlRecord, SwlTable};

/// Find the single SWL row matching every configuration field
///
/// `Ok(None)` means the configuration is not in the table. Two or more
/// matching rows are reported as `AmbiguousMatch` instead of silently
/// picking one.
pub fn find_swl_record<'a>(
    configuration: &MachineConfiguration,
    table: &'a SwlTable,
) -> Result<Option<&'a SwlRecord>> {
    let mut matches = table
        .records()
        .iter()
        .filter(|r| r.configuration == *configuration);

    let first = matches.next();
    let extra = matches.count();
    if extra > 0 {
        return Err(Error::AmbiguousMatch {
            what: format!("configuration {}", configuration),
            count: extra + 1,
        });
    }

    debug!(found = first.is_some(), "SWL lookup for {}", configuration);
    Ok(first)
}

/// Safe working load in kg for a full configuration
pub fn resolve_swl(configuration: &MachineConfiguration, table: &SwlTable) -> Result<Option<f64>> {
    Ok(find_swl_record(configuration, table)?.map(|r| r.swl_kg))
}

/// Duty class of a machine model
///
/// Looks at the model only. A model normally spans many rows (one per
/// boom/arm/reach combination); those rows must agree on the class.
pub fn resolve_class(model: &str, table: &SwlTable) -> Result<Option<i32>> {
    let mut classes: Vec<i32> = Vec::new();
    for record in table.records().iter().filter(|r| r.configuration.model == model) {
        if !classes.contains(&record.class) {
            classes.push(record.class);
        }
    }

    match classes.as_slice() {
        [] => Ok(None),
        [class] => Ok(Some(*class)),
        many => Err(Error::AmbiguousMatch {
            what: format!("model {} (classes {:?})", model, many),
            count: many.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(model: &str, reach: f64) -> MachineConfiguration {
        MachineConfiguration {
            make: "X".to_string(),
            model: model.to_string(),
            boom_length_m: 6.0,
            arm_length_m: 3.0,
            counterweight_kg: 4000.0,
            shoe_width_mm: 600.0,
            reach_m: reach,
        }
    }

    fn record(model: &str, reach: f64, swl: f64, class: i32) -> SwlRecord {
        SwlRecord {
            configuration: config(model, reach),
            swl_kg: swl,
            class,
        }
    }

    fn table() -> SwlTable {
        SwlTable::new(vec![
            record("Y", 10.0, 12000.0, 20),
            record("Y", 8.0, 14500.0, 20),
            record("Z", 10.0, 9000.0, 15),
        ])
    }

    #[test]
    fn test_resolve_present_configuration() {
        let swl = resolve_swl(&config("Y", 10.0), &table()).unwrap();
        assert_eq!(swl, Some(12000.0));
    }

    #[test]
    fn test_resolve_absent_configuration() {
        assert_eq!(resolve_swl(&config("Y", 9.0), &table()).unwrap(), None);
        assert_eq!(resolve_swl(&config("Q", 10.0), &table()).unwrap(), None);
    }

    #[test]
    fn test_every_field_participates() {
        let mut c = config("Y", 10.0);
        c.shoe_width_mm = 700.0;
        assert_eq!(resolve_swl(&c, &table()).unwrap(), None);

        let mut c = config("Y", 10.0);
        c.make = "W".to_string();
        assert_eq!(resolve_swl(&c, &table()).unwrap(), None);
    }

    #[test]
    fn test_duplicate_configuration_is_ambiguous() {
        let mut records = table().records().to_vec();
        records.push(record("Y", 10.0, 11000.0, 20));
        let result = resolve_swl(&config("Y", 10.0), &SwlTable::new(records));
        assert!(matches!(result, Err(Error::AmbiguousMatch { count: 2, .. })));
    }

    #[test]
    fn test_resolve_class_across_rows() {
        assert_eq!(resolve_class("Y", &table()).unwrap(), Some(20));
        assert_eq!(resolve_class("Z", &table()).unwrap(), Some(15));
        assert_eq!(resolve_class("Q", &table()).unwrap(), None);
    }

    #[test]
    fn test_conflicting_classes_are_ambiguous() {
        let mut records = table().records().to_vec();
        records.push(record("Y", 6.0, 16000.0, 25));
        let result = resolve_class("Y", &SwlTable::new(records));
        assert!(matches!(result, Err(Error::AmbiguousMatch { count: 2, .. })));
    }
}
