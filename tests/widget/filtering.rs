use fintab::{FinancialTable, SortKey, table::format};

use crate::common::{aapl_2021, aapl_2022, period};

#[test]
fn default_ranges_admit_typical_rows() {
    let mut table = FinancialTable::new();
    table.set_rows(vec![aapl_2021(), aapl_2022()]);

    assert_eq!(table.visible().len(), 2);
}

#[test]
fn year_range_narrows_the_view() {
    let mut table = FinancialTable::new();
    table.set_rows(vec![aapl_2021(), aapl_2022()]);

    table.year_range_mut().set_selected(2022, 2022);

    let visible = table.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].fiscal_year(), 2022);
}

#[test]
fn range_bounds_are_inclusive() {
    let mut table = FinancialTable::new();
    table.set_rows(vec![aapl_2021(), aapl_2022()]);

    // Pin every range exactly to the 2021 row's values.
    let row = aapl_2021();
    table.year_range_mut().set_selected(2021, 2021);
    table.revenue_range_mut().set_selected(row.revenue, row.revenue);
    table
        .net_income_range_mut()
        .set_selected(row.net_income, row.net_income);

    let visible = table.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0], &row);
}

#[test]
fn value_one_outside_either_bound_is_excluded() {
    let mut table = FinancialTable::new();
    let row = aapl_2021();
    table.set_rows(vec![row.clone()]);

    table
        .revenue_range_mut()
        .set_selected(row.revenue + 1, 90_000_000_000_000);
    assert!(table.visible().is_empty());

    table
        .revenue_range_mut()
        .set_selected(1_000_000, row.revenue - 1);
    assert!(table.visible().is_empty());

    table.revenue_range_mut().set_selected(row.revenue, row.revenue);
    assert_eq!(table.visible().len(), 1);
}

#[test]
fn net_income_ceiling_hides_everything_below_it() {
    let mut table = FinancialTable::new();
    table.set_rows(vec![aapl_2021(), aapl_2022()]);

    // Both rows sit far above a 1M..2M window.
    table.net_income_range_mut().set_selected(1_000_000, 2_000_000);

    assert!(table.visible().is_empty());
}

#[test]
fn filters_compose_with_sorting() {
    let mut table = FinancialTable::new();
    let fy2023 = period(
        "2023-09-30",
        383_285_000_000,
        96_995_000_000,
        169_148_000_000,
        6.16,
        114_301_000_000,
    );
    table.set_rows(vec![aapl_2022(), aapl_2021(), fy2023]);

    table.year_range_mut().set_selected(2021, 2022);
    table.sort_by(SortKey::Revenue);
    table.sort_by(SortKey::Revenue);

    let years: Vec<i32> = table.visible().iter().map(|r| r.fiscal_year()).collect();
    assert_eq!(years, vec![2022, 2021]);
}

#[test]
fn inverted_selection_matches_nothing() {
    let mut table = FinancialTable::new();
    table.set_rows(vec![aapl_2021()]);

    // The control stores whatever the UI emitted, verbatim.
    table.year_range_mut().set_selected(2025, 2020);

    assert_eq!(table.year_range().selected(), (2025, 2020));
    assert!(table.visible().is_empty());
}

#[test]
fn rows_outside_year_bounds_never_render() {
    let mut table = FinancialTable::new();
    // Fiscal 2019 sits below the year control's absolute floor of 2020.
    let fy2019 = period(
        "2019-09-28",
        260_174_000_000,
        55_256_000_000,
        98_392_000_000,
        2.97,
        63_930_000_000,
    );
    table.set_rows(vec![fy2019, aapl_2021()]);

    let years: Vec<i32> = table.visible().iter().map(|r| r.fiscal_year()).collect();
    assert_eq!(years, vec![2021]);
}

/* ---------------- cell formatting ---------------- */

#[test]
fn currency_groups_thousands() {
    assert_eq!(format::currency(365_817_000_000), "$365,817,000,000");
    assert_eq!(format::currency(1_000_000), "$1,000,000");
    assert_eq!(format::currency(999), "$999");
    assert_eq!(format::currency(0), "$0");
}

#[test]
fn currency_negative_amounts_carry_a_leading_minus() {
    assert_eq!(format::currency(-4_816_000_000), "-$4,816,000,000");
    assert_eq!(format::currency(-1), "-$1");
}

#[test]
fn eps_renders_unformatted() {
    assert_eq!(format::eps(5.61), "5.61");
    assert_eq!(format::eps(6.0), "6");
    assert_eq!(format::eps(-0.25), "-0.25");
}
