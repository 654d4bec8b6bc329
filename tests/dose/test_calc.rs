//! Tests for the dose-quantity formula and aggregation
//!
//! Covers the documented properties of the calculation:
//! - Zero dose, zero margin behavior
//! - Linearity in duration
//! - QD/BID equivalence
//! - Round-then-sum grand totals
//! - Reference scenarios

use approx::assert_relative_eq;
use dosecalc::prelude::*;

fn params() -> StudyParameters {
    StudyParameters::new(8, 20.0, 21, 10.0)
}

#[test]
fn test_reference_scenario_once_daily() {
    // 8 animals × 20 g × 21 days, 10% margin, 10 mg/kg QD
    // total = 10 × 0.02 × 8 × 21 = 33.6 mg, with margin 36.96 mg
    let design = StudyDesign::builder("ref")
        .parameters(params())
        .group("G1", 10.0, DosingFrequency::OnceDaily)
        .build();

    let results = design.results().unwrap();
    let row = &results.groups()[0];

    assert_eq!(row.label(), "G1: G1");
    assert_eq!(row.dosing().code(), "QD");
    assert_relative_eq!(row.total_mg(), 33.6, epsilon = 1e-10);
    assert_relative_eq!(row.total_with_margin_mg(), 36.96, epsilon = 1e-10);
}

#[test]
fn test_reference_scenario_twice_daily() {
    // Same globals, BID: 42 doses → 67.2 mg, with margin 73.92 mg
    let design = StudyDesign::builder("ref")
        .parameters(params())
        .group("G1", 10.0, DosingFrequency::TwiceDaily)
        .build();

    let results = design.results().unwrap();
    let row = &results.groups()[0];
    assert_relative_eq!(row.total_mg(), 67.2, epsilon = 1e-10);
    assert_relative_eq!(row.total_with_margin_mg(), 73.92, epsilon = 1e-10);
}

#[test]
fn test_zero_dose_gives_zero_totals() {
    let design = StudyDesign::builder("vehicle only")
        .parameters(params())
        .group("Vehicle", 0.0, DosingFrequency::OnceDaily)
        .build();

    let results = design.results().unwrap();
    let row = &results.groups()[0];
    assert_eq!(row.total_mg(), 0.0);
    assert_eq!(row.total_with_margin_mg(), 0.0);
}

#[test]
fn test_margin_never_decreases_total() {
    for margin in [0.0, 5.0, 10.0, 50.0] {
        let design = StudyDesign::builder("margins")
            .parameters(params().with_margin_percent(margin))
            .group("G1", 7.5, DosingFrequency::OnceDaily)
            .build();

        let results = design.results().unwrap();
        let row = &results.groups()[0];
        assert!(row.total_with_margin_mg() >= row.total_mg());
        if margin == 0.0 {
            assert_eq!(row.total_with_margin_mg(), row.total_mg());
        } else {
            assert!(row.total_with_margin_mg() > row.total_mg());
        }
    }
}

#[test]
fn test_duration_linearity() {
    // Doubling the duration of a QD group doubles the unrounded total;
    // with these inputs the rounded totals double exactly as well
    let base = StudyDesign::builder("d21")
        .parameters(params().with_duration_days(21))
        .group("G1", 10.0, DosingFrequency::OnceDaily)
        .build();
    let doubled = StudyDesign::builder("d42")
        .parameters(params().with_duration_days(42))
        .group("G1", 10.0, DosingFrequency::OnceDaily)
        .build();

    let base_total = base.results().unwrap().groups()[0].total_mg();
    let doubled_total = doubled.results().unwrap().groups()[0].total_mg();
    assert_relative_eq!(doubled_total, 2.0 * base_total, epsilon = 1e-10);
}

#[test]
fn test_bid_equals_qd_at_double_duration() {
    let bid = StudyDesign::builder("bid")
        .parameters(params().with_duration_days(21))
        .group("G1", 10.0, DosingFrequency::TwiceDaily)
        .build();
    let qd = StudyDesign::builder("qd")
        .parameters(params().with_duration_days(42))
        .group("G1", 10.0, DosingFrequency::OnceDaily)
        .build();

    assert_relative_eq!(
        bid.results().unwrap().groups()[0].total_mg(),
        qd.results().unwrap().groups()[0].total_mg(),
        epsilon = 1e-10
    );
}

#[test]
fn test_grand_totals_sum_rounded_rows() {
    // Doses chosen so the raw per-row totals need rounding: the grand total
    // must equal the sum of the rounded rows, not the round of the raw sum
    let design = StudyDesign::builder("rounding")
        .parameters(StudyParameters::new(7, 23.0, 13, 10.0))
        .group("A", 1.111, DosingFrequency::OnceDaily)
        .group("B", 2.222, DosingFrequency::TwiceDaily)
        .group("C", 3.333, DosingFrequency::OnceDaily)
        .build();

    let results = design.results().unwrap();
    let (total, total_margin) = results.grand_totals();

    let row_sum: f64 = results.groups().iter().map(|r| r.total_mg()).sum();
    let row_sum_margin: f64 = results
        .groups()
        .iter()
        .map(|r| r.total_with_margin_mg())
        .sum();

    assert_eq!(total, row_sum);
    assert_eq!(total_margin, row_sum_margin);

    // Every row carries at most two decimals
    for row in results.groups() {
        assert_relative_eq!(
            row.total_mg(),
            (row.total_mg() * 100.0).round() / 100.0,
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_empty_batch_fails() {
    let design = StudyDesign::builder("empty").parameters(params()).build();
    assert!(matches!(design.results(), Err(DoseError::EmptyBatch)));
}

#[test]
fn test_out_of_range_parameter_fails() {
    let design = StudyDesign::builder("bad")
        .parameters(params().with_average_weight_g(250.0))
        .group("G1", 10.0, DosingFrequency::OnceDaily)
        .build();

    assert!(matches!(
        design.results(),
        Err(DoseError::InvalidParameter(_))
    ));
}

#[test]
fn test_twenty_groups_accepted() {
    let mut builder = StudyDesign::builder("full house").parameters(params());
    for _ in 0..20 {
        builder = builder.unnamed_group(5.0, DosingFrequency::OnceDaily);
    }
    let results = builder.build().results().unwrap();
    assert_eq!(results.groups().len(), 20);
    assert_eq!(results.groups()[19].label(), "G20: Group 20");
}

#[test]
fn test_result_set_serde_round_trip() {
    let design = StudyDesign::builder("serde")
        .parameters(params())
        .group("G1", 10.0, DosingFrequency::OnceDaily)
        .build();
    let results = design.results().unwrap();

    let json = serde_json::to_string(&results).unwrap();
    let back: ResultSet = serde_json::from_str(&json).unwrap();

    assert_eq!(back.groups().len(), results.groups().len());
    assert_eq!(back.groups()[0].total_mg(), results.groups()[0].total_mg());
    assert_eq!(back.margin_percent(), results.margin_percent());
}
