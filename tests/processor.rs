//! End-to-end processor behaviour against CSV files on disk.

use data_processor::charts::Chart;
use data_processor::data::LoaderError;
use data_processor::settings::AppSettings;
use data_processor::{DatasetState, Processor, ProcessorError};
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

fn loaded(dir: &TempDir) -> Processor {
    let path = write_csv(dir, "ab.csv", "A,B\n1,5\n2,4\n3,3\n4,2\n5,1\n");
    let mut processor = Processor::default();
    let summary = processor.load(&path).unwrap();
    assert_eq!((summary.rows, summary.columns), (5, 2));
    processor
}

#[test]
fn loaded_columns_are_computable() {
    let dir = tempfile::tempdir().unwrap();
    let processor = loaded(&dir);

    assert_eq!(processor.mean("A").unwrap(), 3.0);
    assert_eq!(processor.mean("B").unwrap(), 3.0);
    assert_eq!(processor.median("A").unwrap(), 3.0);
    assert_eq!(processor.median("B").unwrap(), 3.0);
    assert!((processor.stddev("A").unwrap() - 1.5811).abs() < 1e-4);
    assert_eq!(processor.column_names().unwrap(), vec!["A", "B"]);
}

#[test]
fn statistics_before_load_fail() {
    let processor = Processor::default();
    assert!(matches!(processor.state(), DatasetState::Empty));
    assert!(matches!(
        processor.mean("A"),
        Err(ProcessorError::NoDatasetLoaded)
    ));
}

#[test]
fn failed_load_keeps_previous_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let mut processor = loaded(&dir);

    let err = processor
        .load(Path::new("/definitely/not/here.csv"))
        .unwrap_err();
    assert!(matches!(
        err,
        ProcessorError::Load(LoaderError::NotFound(_))
    ));

    assert!(processor.is_loaded());
    assert_eq!(processor.mean("A").unwrap(), 3.0);
}

#[test]
fn reload_replaces_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let mut processor = loaded(&dir);

    let other = write_csv(&dir, "c.csv", "C\n10\n20\n");
    processor.load(&other).unwrap();

    assert_eq!(processor.mean("C").unwrap(), 15.0);
    assert!(matches!(
        processor.mean("A"),
        Err(ProcessorError::ColumnNotFound(_))
    ));
}

#[test]
fn missing_cells_are_excluded() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "gaps.csv", "value,tag\n1,a\n,b\n3,c\n,d\n5,e\n");
    let mut processor = Processor::default();
    processor.load(&path).unwrap();

    assert_eq!(processor.mean("value").unwrap(), 3.0);
    assert_eq!(processor.median("value").unwrap(), 3.0);
    assert!((processor.stddev("value").unwrap() - 2.0).abs() < 1e-12);
    assert!(matches!(
        processor.mean("tag"),
        Err(ProcessorError::NonNumericColumn { .. })
    ));
}

#[test]
fn missing_value_markers_are_excluded() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "na.csv", "value\n1\nNA\n3\nnan\n");
    let mut processor = Processor::default();
    processor.load(&path).unwrap();

    assert_eq!(processor.mean("value").unwrap(), 2.0);
    assert_eq!(processor.median("value").unwrap(), 2.0);
}

#[test]
fn ragged_csv_fails_and_keeps_previous_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let mut processor = loaded(&dir);

    let ragged = write_csv(&dir, "ragged.csv", "A,B\n1,2,3\n");
    let err = processor.load(&ragged).unwrap_err();
    assert!(matches!(
        err,
        ProcessorError::Load(LoaderError::CsvError(_))
    ));

    assert_eq!(processor.mean("A").unwrap(), 3.0);
}

#[test]
fn charts_return_unit_and_render_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "insurance.csv",
        "age,sex,charges\n19,female,16884.9\n18,male,1725.5\n28,male,4449.4\n33,male,21984.4\n32,female,3866.8\n",
    );
    let mut processor = Processor::new(&AppSettings::default().with_histogram_bins(4));
    processor.load(&path).unwrap();

    let mut sink: Vec<Chart> = Vec::new();
    let () = processor.histogram("age", &mut sink).unwrap();
    let () = processor.bar_chart("sex", "charges", &mut sink).unwrap();

    assert_eq!(sink.len(), 2);
    match &sink[0] {
        Chart::Histogram(h) => {
            assert_eq!(h.bins.len(), 4);
            assert_eq!(h.total_count(), 5);
        }
        other => panic!("unexpected chart {:?}", other),
    }
    match &sink[1] {
        Chart::Bar(b) => {
            let labels: Vec<&str> = b.bars.iter().map(|g| g.label.as_str()).collect();
            assert_eq!(labels, vec!["female", "male"]);
            assert_eq!(b.bars[0].count, 2);
            assert!((b.bars[0].mean - (16884.9 + 3866.8) / 2.0).abs() < 1e-9);
        }
        other => panic!("unexpected chart {:?}", other),
    }
}
