#![cfg(test)]
//! The summary and plot commands operate on a stored table, not on live
//! vendor data. These tests run that path: sink a table, then consume the
//! parquet artifact the way the subcommands do.

use bbg_history::models::DateRange;
use chrono::NaiveDate;
use treasury_sf_basis::{
    io::{DataSink, ParquetSink, read_basis_table},
    models::{BasisRow, BasisTable, Tenor},
    plot, report,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
}

fn stored_table() -> BasisTable {
    let mut rows = Vec::new();
    for tenor in [Tenor::Y2, Tenor::Y10] {
        for d in 1..=10 {
            rows.push(BasisRow {
                date: day(d),
                tenor,
                basis_bps: d as f64 * if tenor == Tenor::Y2 { -1.0 } else { 2.0 },
            });
        }
    }
    // One known gap.
    rows.push(BasisRow {
        date: day(11),
        tenor: Tenor::Y10,
        basis_bps: f64::NAN,
    });
    BasisTable::new(rows)
}

#[tokio::test]
async fn summary_runs_off_the_stored_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ftsfr_treasury_sf_basis.parquet");

    ParquetSink::new(&path).write(&stored_table()).await.unwrap();

    let table = read_basis_table(&path).unwrap();
    let summaries = report::summarize(&table);
    assert_eq!(summaries.len(), 5);

    let two_year = &summaries[0];
    assert_eq!(two_year.tenor, Tenor::Y2);
    assert_eq!(two_year.rows, 10);
    assert_eq!(two_year.missing, 0);
    assert_eq!(two_year.min, -10.0);
    assert_eq!(two_year.max, -1.0);

    let ten_year = summaries
        .iter()
        .find(|summary| summary.tenor == Tenor::Y10)
        .unwrap();
    assert_eq!(ten_year.rows, 11);
    assert_eq!(ten_year.missing, 1);
    assert_eq!(ten_year.observations(), 10);

    let text = report::render(&summaries);
    assert!(text.contains("2Y"));
    assert!(text.contains("30Y"));
}

#[tokio::test]
async fn plot_runs_off_the_stored_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let table_path = dir.path().join("ftsfr_treasury_sf_basis.parquet");
    let chart_path = dir.path().join("treasury_sf_basis.svg");

    ParquetSink::new(&table_path)
        .write(&stored_table())
        .await
        .unwrap();

    let table = read_basis_table(&table_path).unwrap();
    let window = DateRange::new(day(1), day(28)).unwrap();
    plot::render_basis_chart(&table, &chart_path, window).unwrap();

    let svg = std::fs::read_to_string(&chart_path).unwrap();
    assert!(svg.contains("<svg"));
    // Only the two populated tenors appear in the legend.
    assert!(svg.contains("2Y"));
    assert!(svg.contains("10Y"));
}
