use fiscal_projection_errors::entities::Component;
use fiscal_projection_errors::util::ProjectionAccuracyUtil;

const GDP_CSV: &str = "\
fiscal_year,GDP
2019,21000.0
2020,21500.0
2021,23000.0
";

const ACTUALS_CSV: &str = "\
component,category,subcategory,fiscal_year,actual_value
outlay,Total,Total,2019,4400.0
outlay,Total,Total,2020,4500.0
outlay,Total,Total,2021,4600.0
outlay,Mandatory,Fannie Freddie,2019,8.0
revenue,Total,Total,2019,3400.0
revenue,Total,Total,2020,3500.0
revenue,Total,Total,2021,3600.0
deficit,Total,Total,2019,1000.0
deficit,Total,Total,2020,1100.0
deficit,Total,Total,2021,1050.0
debt,Total,Total,2019,16000.0
debt,Total,Total,2020,17000.0
debt,Total,Total,2021,18000.0
";

// One Spring vintage (2019-05-09) for outlay/deficit/debt, one Winter vintage
// (2019-01-28) for revenue, plus a Spring revenue row that the baseline
// selector must ignore.
const BASELINES_CSV: &str = "\
component,category,subcategory,projected_fiscal_year,projected_year_number,Winter_flag,Spring_flag,baseline_date,value
outlay,Total,Total,2019,1,False,True,2019-05-09,4300.0
outlay,Total,Total,2020,2,False,True,2019-05-09,4350.0
outlay,Total,Total,2021,3,False,True,2019-05-09,4380.0
revenue,Total,Total,2019,1,True,False,2019-01-28,3450.0
revenue,Total,Total,2020,2,True,False,2019-01-28,3550.0
revenue,Total,Total,2021,3,True,False,2019-01-28,3650.0
revenue,Total,Total,2019,1,False,True,2019-05-09,9999.0
deficit,Total,Total,2019,1,False,True,2019-05-09,1100.0
deficit,Total,Total,2020,2,False,True,2019-05-09,1050.0
deficit,Total,Total,2021,3,False,True,2019-05-09,1020.0
debt,Total,Total,2019,1,False,True,2019-05-09,16100.0
debt,Total,Total,2020,2,False,True,2019-05-09,17100.0
debt,Total,Total,2021,3,False,True,2019-05-09,18100.0
";

// The 2019 outlay change lands exactly on the vintage date and must not be
// attributed; the Economic change must be ignored outright.
const CHANGES_CSV: &str = "\
component,category,subcategory,projected_fiscal_year,change_category,changes_baseline_date,value
outlay,Total,Total,2020,Legislative,2019-08-01,50.0
outlay,Total,Total,2020,Economic,2019-08-01,77.0
outlay,Total,Total,2019,Legislative,2019-05-09,88.0
revenue,Total,Total,2019,Legislative,2019-06-01,(25.0)
deficit,Total,Total,2019,Legislative,2019-09-01,10.0
deficit,Total,Total,2020,Legislative,2019-09-01,(5.0)
deficit,Total,Total,2021,Legislative,2019-09-01,20.0
";

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn outlay_errors_score_only_vintages_with_attributable_legislation() {
    let (report, _) = ProjectionAccuracyUtil::new()
        .from_string(ACTUALS_CSV, BASELINES_CSV, CHANGES_CSV, GDP_CSV)
        .unwrap();
    let outlay = report.component(Component::Outlay).unwrap();

    // 2019 (same-date change) and 2021 (no change) drop; only 2020 scores.
    assert_eq!(outlay.projection_errors.len(), 1);
    let row = &outlay.projection_errors[0];
    assert_eq!(row.fact.projected_fiscal_year, 2020);
    assert_eq!(row.fact.projected_year_number, 2);
    assert_close(row.fact.legislative_change, 50.0);
    assert_close(row.adjusted_projection, 4400.0);
    assert_close(row.projection_error, -100.0);
    assert_close(row.relative_error.unwrap(), -100.0 / 4500.0 * 100.0);
}

#[test]
fn deficit_errors_invert_sign_and_scale_by_gdp() {
    let (report, _) = ProjectionAccuracyUtil::new()
        .from_string(ACTUALS_CSV, BASELINES_CSV, CHANGES_CSV, GDP_CSV)
        .unwrap();
    let deficit = report.component(Component::Deficit).unwrap();
    assert_eq!(deficit.projection_errors.len(), 3);

    // Year 1: adjusted 1110 vs actual 1000 -> raw +110, inverted -110.
    let y1 = &deficit.projection_errors[0];
    assert_close(y1.projection_error, -110.0);
    assert_close(y1.relative_error.unwrap(), -110.0 / 21000.0 * 100.0);
    // Year 2: adjusted 1045 vs actual 1100 -> raw -55, inverted +55.
    let y2 = &deficit.projection_errors[1];
    assert_close(y2.projection_error, 55.0);
    assert_close(y2.relative_error.unwrap(), 55.0 / 21500.0 * 100.0);
}

#[test]
fn debt_reuses_deficit_legislation_as_inverted_cumulative_effects() {
    let (report, _) = ProjectionAccuracyUtil::new()
        .from_string(ACTUALS_CSV, BASELINES_CSV, CHANGES_CSV, GDP_CSV)
        .unwrap();
    let debt = report.component(Component::Debt).unwrap();
    assert_eq!(debt.projection_errors.len(), 3);

    let changes: Vec<f64> = debt
        .projection_errors
        .iter()
        .map(|r| r.fact.legislative_change)
        .collect();
    assert_eq!(changes, vec![-10.0, -5.0, -25.0]);

    // Debt keeps the raw sign: adjusted 16090 vs actual 16000 -> +90.
    let y1 = &debt.projection_errors[0];
    assert_close(y1.projection_error, 90.0);
    assert_close(y1.relative_error.unwrap(), 90.0 / 21000.0 * 100.0);
}

#[test]
fn revenue_scores_winter_baselines_only() {
    let (report, _) = ProjectionAccuracyUtil::new()
        .from_string(ACTUALS_CSV, BASELINES_CSV, CHANGES_CSV, GDP_CSV)
        .unwrap();
    let revenue = report.component(Component::Revenue).unwrap();

    // Only the 2019 winter row has an attributable change; the Spring 9999
    // row must never reach the output.
    assert_eq!(revenue.projection_errors.len(), 1);
    let row = &revenue.projection_errors[0];
    assert!(row.fact.winter_flag);
    assert_close(row.fact.value, 3450.0);
    assert_close(row.adjusted_projection, 3425.0);
    assert_close(row.projection_error, 25.0);

    assert_eq!(revenue.summary_stats.len(), 1);
    let stats = &revenue.summary_stats[0];
    assert_eq!(stats.number_of_projections, 1);
    assert_eq!(stats.projection_year_range, "2019-2019");
    assert_close(stats.average_error.unwrap(), 25.0 / 3400.0 * 100.0);
}

#[test]
fn output_invariants_hold_for_every_component() {
    let (report, _) = ProjectionAccuracyUtil::new()
        .from_string(ACTUALS_CSV, BASELINES_CSV, CHANGES_CSV, GDP_CSV)
        .unwrap();
    for component_report in &report.components {
        for row in &component_report.projection_errors {
            assert!((1..=11).contains(&row.fact.projected_year_number));
            assert_ne!(row.fact.subcategory, "Fannie Freddie");
        }
        for row in &component_report.summary_stats {
            assert!((1..=11).contains(&row.projected_year_number));
            assert_ne!(row.subcategory, "Fannie Freddie");
        }
        for row in &component_report.actuals_pct_gdp {
            assert_ne!(row.subcategory, "Fannie Freddie");
        }
    }
}

#[test]
fn scaled_actuals_cover_each_component() {
    let (report, _) = ProjectionAccuracyUtil::new()
        .from_string(ACTUALS_CSV, BASELINES_CSV, CHANGES_CSV, GDP_CSV)
        .unwrap();
    let outlay = report.component(Component::Outlay).unwrap();
    // Three Total rows survive; the Fannie Freddie row does not.
    assert_eq!(outlay.actuals_pct_gdp.len(), 3);
    assert_close(
        outlay.actuals_pct_gdp[0].actuals_pct_gdp.unwrap(),
        4400.0 / 21000.0 * 100.0,
    );
    let debt = report.component(Component::Debt).unwrap();
    assert_eq!(debt.actuals_pct_gdp.len(), 3);
}

#[test]
fn reruns_are_byte_identical() {
    let util = ProjectionAccuracyUtil::new();
    let (_, first) = util
        .from_string(ACTUALS_CSV, BASELINES_CSV, CHANGES_CSV, GDP_CSV)
        .unwrap();
    let (_, second) = util
        .from_string(ACTUALS_CSV, BASELINES_CSV, CHANGES_CSV, GDP_CSV)
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn writes_three_tables_per_component() {
    let util = ProjectionAccuracyUtil::new();
    let (_, tables) = util
        .from_string(ACTUALS_CSV, BASELINES_CSV, CHANGES_CSV, GDP_CSV)
        .unwrap();
    assert_eq!(tables.len(), 12);

    let dir = tempfile::tempdir().unwrap();
    util.write_to_dir(&tables, dir.path()).unwrap();
    for name in [
        "outlay_projection_errors",
        "revenue_projection_errors_summary_stats",
        "deficit_projection_errors",
        "debt_actuals_pct_GDP",
    ] {
        let path = dir.path().join(format!("{name}.csv"));
        assert!(path.exists(), "missing {name}.csv");
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(!contents.contains("Fannie Freddie"));
    }
}

#[test]
fn unrecognized_component_in_input_is_fatal() {
    let bad_actuals = "\
component,category,subcategory,fiscal_year,actual_value
interest,Total,Total,2019,1.0
";
    assert!(ProjectionAccuracyUtil::new()
        .from_string(bad_actuals, BASELINES_CSV, CHANGES_CSV, GDP_CSV)
        .is_err());
}

#[test]
fn missing_input_column_is_fatal() {
    let bad_gdp = "fiscal_year\n2019\n";
    assert!(ProjectionAccuracyUtil::new()
        .from_string(ACTUALS_CSV, BASELINES_CSV, CHANGES_CSV, bad_gdp)
        .is_err());
}
