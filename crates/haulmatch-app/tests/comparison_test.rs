//! End-to-end comparison tests against synthetic reference tables

use haulmatch_app::app::{run_comparison, run_with_tables, ComparisonOutcome};
use haulmatch_app::config::Config;
use haulmatch_app::report::{build_sections, footnotes};
use haulmatch_app::repository::load_reference_tables;
use haulmatch_domain::model::{
    BucketCatalog, BucketSpec, CurrentBucket, MachineConfiguration, SelectionInput, SwlRecord,
    SwlTable,
};
use haulmatch_types::{BucketCatalogKind, Error};

fn configuration(model: &str) -> MachineConfiguration {
    MachineConfiguration {
        make: "X".to_string(),
        model: model.to_string(),
        boom_length_m: 6.0,
        arm_length_m: 3.0,
        counterweight_kg: 4000.0,
        shoe_width_mm: 600.0,
        reach_m: 10.0,
    }
}

fn swl_table() -> SwlTable {
    SwlTable::new(vec![SwlRecord {
        configuration: configuration("Y"),
        swl_kg: 12000.0,
        class: 20,
    }])
}

fn bucket(name: &str, size: f64, weight: f64, class: i32) -> BucketSpec {
    BucketSpec {
        name: name.to_string(),
        size_m3: size,
        weight_kg: weight,
        class,
    }
}

fn catalog() -> BucketCatalog {
    BucketCatalog::new(
        BucketCatalogKind::Standard,
        vec![
            bucket("B1", 1.0, 1200.0, 18),
            bucket("B2", 1.5, 1600.0, 25),
            bucket("B3", 2.0, 2000.0, 35),
        ],
    )
}

fn input() -> SelectionInput {
    SelectionInput {
        configuration: configuration("Y"),
        material_density: 1500.0,
        quick_hitch_weight_kg: 200.0,
        current_bucket: CurrentBucket {
            size_m3: 1.0,
            weight_kg: 1100.0,
        },
        truck_payload_tonnes: 30.0,
        swings_per_minute: 3.0,
        catalog: BucketCatalogKind::Standard,
    }
}

#[test]
fn test_completed_comparison() {
    let comparison = match run_comparison(&input(), &swl_table(), &catalog()).unwrap() {
        ComparisonOutcome::Completed(c) => c,
        other => panic!("expected a completed comparison, got {:?}", other),
    };

    assert_eq!(comparison.optimal.bucket.name, "B2");
    assert!((comparison.optimal.total_suspended_load_kg - 4050.0).abs() < 1e-9);
    assert_eq!(comparison.excavator_class, 20);
    assert!((comparison.swl.swl_kg - 12000.0).abs() < f64::EPSILON);

    // 30000 / 1500 is already a whole number of passes
    assert!(!comparison.old_match.is_adjusted());
    assert!((comparison.old_match.pass_count - 20.0).abs() < 1e-9);

    // 30000 / 2250 = 13.33, first aligned step is 31410 (13.96 passes)
    assert!(comparison.new_match.is_adjusted());
    assert!((comparison.new_match.effective_payload_kg - 31410.0).abs() < 1e-6);
    let passes = comparison.new_match.pass_count;
    assert!((passes.ceil() - passes).abs() <= 0.05);

    assert!((comparison.report.capacity_m3.old - 1.0).abs() < f64::EPSILON);
    assert!((comparison.report.capacity_m3.new - 1.5).abs() < f64::EPSILON);
    assert!(comparison.report.productivity_gain_percent > 0.0);
}

#[test]
fn test_invalid_density_and_swing_rate() {
    let mut zero_density = input();
    zero_density.material_density = 0.0;
    let result = run_comparison(&zero_density, &swl_table(), &catalog());
    assert!(matches!(result, Err(Error::InvalidInput(_))));

    let mut zero_swings = input();
    zero_swings.swings_per_minute = 0.0;
    let result = run_comparison(&zero_swings, &swl_table(), &catalog());
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

#[test]
fn test_unknown_configuration() {
    let mut request = input();
    request.configuration.reach_m = 11.0;
    let outcome = run_comparison(&request, &swl_table(), &catalog()).unwrap();
    assert!(matches!(
        outcome,
        ComparisonOutcome::ConfigurationNotFound { .. }
    ));
}

#[test]
fn test_no_compatible_bucket() {
    let heavy = BucketCatalog::new(
        BucketCatalogKind::HeavyDuty,
        vec![bucket("Oversize", 2.0, 2000.0, 35)],
    );
    let outcome = run_comparison(&input(), &swl_table(), &heavy).unwrap();
    match outcome {
        ComparisonOutcome::NoCompatibleBucket {
            excavator_class,
            catalog,
            ..
        } => {
            assert_eq!(excavator_class, 20);
            assert_eq!(catalog, BucketCatalogKind::HeavyDuty);
        }
        other => panic!("expected NoCompatibleBucket, got {:?}", other),
    }
}

#[test]
fn test_duplicate_configuration_is_ambiguous() {
    let record = SwlRecord {
        configuration: configuration("Y"),
        swl_kg: 12000.0,
        class: 20,
    };
    let table = SwlTable::new(vec![record.clone(), record]);
    let result = run_comparison(&input(), &table, &catalog());
    assert!(matches!(result, Err(Error::AmbiguousMatch { count: 2, .. })));
}

#[test]
fn test_machine_class_at_top_of_range() {
    let table = SwlTable::new(vec![SwlRecord {
        configuration: configuration("Y"),
        swl_kg: 12000.0,
        class: i32::MAX - 5,
    }]);
    match run_comparison(&input(), &table, &catalog()).unwrap() {
        // B3 now passes the class check and 200 + 3000 + 2000 fits the SWL
        ComparisonOutcome::Completed(c) => assert_eq!(c.optimal.bucket.name, "B3"),
        other => panic!("expected a completed comparison, got {:?}", other),
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let first = run_comparison(&input(), &swl_table(), &catalog()).unwrap();
    let second = run_comparison(&input(), &swl_table(), &catalog()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_report_sections() {
    let ComparisonOutcome::Completed(comparison) =
        run_comparison(&input(), &swl_table(), &catalog()).unwrap()
    else {
        panic!("expected a completed comparison");
    };

    let sections = build_sections(&comparison).unwrap();
    assert_eq!(sections.len(), 4);

    let capacity = &sections[0].rows[0];
    assert_eq!(capacity.old, "1.0");
    assert_eq!(capacity.new, "1.5");
    assert_eq!(capacity.difference, "0.5");
    assert_eq!(capacity.percent, "50%");

    let truck_payload = &sections[1].rows[0];
    assert_eq!(truck_payload.old, "30000");
    assert_eq!(truck_payload.new, "31410*");

    let improved_swings = &sections[3].rows[0];
    assert_eq!(improved_swings.old, "1000");
    assert_eq!(improved_swings.new, "1100");
    assert_eq!(improved_swings.percent, "10%");

    let notes = footnotes(&comparison, Some("Volvo Articulated A30G"));
    assert!(notes[0].contains("104.7%"));
    assert!(notes.iter().any(|n| n.contains("Volvo Articulated A30G")));
}

#[test]
fn test_comparison_from_csv_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("excavator_swl.csv"),
        "make,model,boom_length,arm_length,CWT,shoe_width,reach,swl,class\n\
         X,Y,6,3,4000,600,10,12000,20\n\
         X,Y,6,3,4000,600,12,9000,20\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("bucket_data.csv"),
        "bucket_name,bucket_size,bucket_weight,class\n\
         B1,1.0,1200,18\nB2,1.5,1600,25\nB3,2.0,2000,35\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("bhc_bucket_data.csv"),
        "bucket_name,bucket_size,bucket_weight,class\nHD1,1.2,1900,20\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("dump_trucks.csv"),
        "brand,type,model,payload\nVolvo,Articulated,A30G,30\n",
    )
    .unwrap();

    let config = Config {
        data_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };
    let tables = load_reference_tables(&config).unwrap();
    assert_eq!(tables.swl.len(), 2);

    let truck = tables.dump_trucks.find("Volvo", "Articulated", "A30G").unwrap();
    let mut request = input();
    request.truck_payload_tonnes = truck.payload_tonnes;

    match run_with_tables(&request, &tables).unwrap() {
        ComparisonOutcome::Completed(c) => assert_eq!(c.optimal.bucket.name, "B2"),
        other => panic!("expected a completed comparison, got {:?}", other),
    }

    request.catalog = BucketCatalogKind::HeavyDuty;
    match run_with_tables(&request, &tables).unwrap() {
        ComparisonOutcome::Completed(c) => assert_eq!(c.optimal.bucket.name, "HD1"),
        other => panic!("expected a completed comparison, got {:?}", other),
    }
}
