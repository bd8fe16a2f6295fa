#[cfg(test)]
mod tests {
    use motus::libs::export::{ExportBundle, ExportFormat, Exporter};
    use motus::libs::ledger;
    use motus::libs::storage::StudyStore;
    use motus::libs::study::{Activity, Reading, Study};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn recorded_study() -> Study {
        let mut study = Study::new();
        study.add_process("Assembly").unwrap();
        study.add_subprocess("Assembly", "Fit").unwrap();
        study.add_subprocess("Assembly", "Carry").unwrap();
        {
            let proc = study.process_mut("Assembly").unwrap();
            proc.subprocesses[0].activity = Activity::Va;
            proc.subprocesses[0].production_qty = 2;
        }
        for (index, time_ms) in [(0usize, 10_000i64), (0, 20_000), (1, 8_000)] {
            let proc = study.process_mut("Assembly").unwrap();
            let sub = proc.subprocesses[index].clone();
            ledger::append(proc, Reading::capture("Assembly", &sub, time_ms, 0, time_ms));
        }
        study
    }

    #[test]
    fn test_gather_builds_all_three_tables() {
        let study = recorded_study();
        let bundle = ExportBundle::gather(&study);

        assert_eq!(bundle.details.len(), 3);
        assert_eq!(bundle.summary.len(), 2);
        assert_eq!(bundle.details[0].time_secs, 10);
        assert_eq!(bundle.details[0].rating, 100);
        // Carry occurs half as often as Fit.
        assert_eq!(bundle.details[2].frequency, "1/2.00");
        assert!(bundle.analysis.total_secs() > 0.0);
    }

    #[test]
    fn test_gather_empty_study() {
        let bundle = ExportBundle::gather(&Study::new());
        assert!(bundle.is_empty());
    }

    #[test]
    fn test_csv_export_writes_sectioned_file() {
        let dir = TempDir::new().unwrap();
        let study = recorded_study();
        let bundle = ExportBundle::gather(&study);

        let exporter = Exporter::new(ExportFormat::Csv, None, Some(dir.path().to_path_buf()));
        exporter.export(&bundle).unwrap();

        let content = fs::read_to_string(dir.path().join("time_motion_study.csv")).unwrap();
        assert!(content.contains("DETAILED READINGS"));
        assert!(content.contains("PROCESS SUMMARY"));
        assert!(content.contains("ACTIVITY ANALYSIS"));
        assert!(content.contains("Fit"));
        // Summary metrics carry one decimal.
        assert!(content.contains("15.0"));
        assert!(content.contains("7.5"));
    }

    #[test]
    fn test_excel_export_writes_workbook() {
        let dir = TempDir::new().unwrap();
        let study = recorded_study();
        let bundle = ExportBundle::gather(&study);

        let exporter = Exporter::new(ExportFormat::Excel, None, Some(dir.path().to_path_buf()));
        exporter.export(&bundle).unwrap();

        let path = dir.path().join("time_motion_study.xlsx");
        assert!(path.exists());
        assert!(fs::metadata(path).unwrap().len() > 0);
    }

    #[test]
    fn test_explicit_output_path_wins() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("custom.csv");
        let bundle = ExportBundle::gather(&recorded_study());

        let exporter = Exporter::new(ExportFormat::Csv, Some(output.clone()), None);
        exporter.export(&bundle).unwrap();
        assert!(output.exists());
    }

    #[test]
    fn test_failed_export_surfaces_error() {
        let bundle = ExportBundle::gather(&recorded_study());
        let missing_dir = PathBuf::from("/nonexistent-export-target/out.csv");

        let exporter = Exporter::new(ExportFormat::Csv, Some(missing_dir), None);
        assert!(exporter.export(&bundle).is_err());
    }

    #[test]
    fn test_data_survives_failed_export_and_clears_after_success() {
        let dir = TempDir::new().unwrap();
        let store = StudyStore::at(dir.path().join("study.json"));
        let mut study = recorded_study();
        store.save(&mut study).unwrap();

        let bundle = ExportBundle::gather(&study);

        // A failed write leaves both the in-memory study and the saved
        // record untouched.
        let broken = Exporter::new(
            ExportFormat::Csv,
            Some(PathBuf::from("/nonexistent-export-target/out.csv")),
            None,
        );
        assert!(broken.export(&bundle).is_err());
        assert_eq!(study.processes.len(), 1);
        assert!(store.load().has_readings());

        // A successful export is followed by a full clear of both.
        let exporter = Exporter::new(ExportFormat::Csv, None, Some(dir.path().to_path_buf()));
        exporter.export(&bundle).unwrap();
        study.clear();
        store.clear().unwrap();
        assert!(study.processes.is_empty());
        assert!(!store.load().has_readings());
    }

    #[test]
    fn test_alternate_format() {
        assert_eq!(ExportFormat::Excel.alternate(), ExportFormat::Csv);
        assert_eq!(ExportFormat::Csv.alternate(), ExportFormat::Excel);
    }
}
