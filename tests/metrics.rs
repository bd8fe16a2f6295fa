#[cfg(test)]
mod tests {
    use motus::libs::ledger;
    use motus::libs::metrics::{analyze_activity, round_secs, summarize_process};
    use motus::libs::study::{Activity, Reading, Study};

    fn record(study: &mut Study, sub_index: usize, time_ms: i64) {
        let proc = study.process_mut("Assembly").unwrap();
        let sub = proc.subprocesses[sub_index].clone();
        let reading = Reading::capture("Assembly", &sub, time_ms, 0, time_ms);
        ledger::append(proc, reading);
    }

    fn study_with(subs: &[&str]) -> Study {
        let mut study = Study::new();
        study.add_process("Assembly").unwrap();
        for name in subs {
            study.add_subprocess("Assembly", name).unwrap();
        }
        study
    }

    #[test]
    fn test_round_secs() {
        assert_eq!(round_secs(10_000), 10);
        assert_eq!(round_secs(10_499), 10);
        assert_eq!(round_secs(10_500), 11);
    }

    #[test]
    fn test_metric_chain_with_quantity_and_unit_frequency() {
        let mut study = study_with(&["Fit"]);
        {
            let proc = study.process_mut("Assembly").unwrap();
            proc.subprocesses[0].production_qty = 2;
        }
        record(&mut study, 0, 10_000);
        record(&mut study, 0, 20_000);

        let proc = study.process("Assembly").unwrap();
        let summaries = summarize_process(proc);
        assert_eq!(summaries.len(), 1);

        let s = &summaries[0];
        assert_eq!(s.samples, 2);
        assert_eq!(s.avg_secs, 15.0);
        assert_eq!(s.production_qty, 2);
        assert_eq!(s.cycle_secs, 7.5);
        assert_eq!(s.rating, 100);
        assert_eq!(s.basic_secs, 7.5);
        assert_eq!(s.effective_secs, 7.5);
    }

    #[test]
    fn test_durations_round_to_seconds_before_averaging() {
        let mut study = study_with(&["Fit"]);
        record(&mut study, 0, 1_499);
        record(&mut study, 0, 2_501);

        let proc = study.process("Assembly").unwrap();
        let s = &summarize_process(proc)[0];
        // (1 + 3) / 2, not (1.499 + 2.501) / 2
        assert_eq!(s.avg_secs, 2.0);
    }

    #[test]
    fn test_last_nonzero_quantity_wins() {
        let mut study = study_with(&["Fit"]);
        record(&mut study, 0, 10_000); // qty 0 at capture time
        {
            let proc = study.process_mut("Assembly").unwrap();
            proc.subprocesses[0].production_qty = 3;
        }
        record(&mut study, 0, 10_000); // qty 3
        {
            let proc = study.process_mut("Assembly").unwrap();
            proc.subprocesses[0].production_qty = 0;
        }
        record(&mut study, 0, 10_000); // qty 0 again

        let proc = study.process("Assembly").unwrap();
        assert_eq!(summarize_process(proc)[0].production_qty, 3);
    }

    #[test]
    fn test_zero_quantities_fall_back_to_one() {
        let mut study = study_with(&["Fit"]);
        record(&mut study, 0, 10_000);

        let proc = study.process("Assembly").unwrap();
        let s = &summarize_process(proc)[0];
        assert_eq!(s.production_qty, 1);
        assert_eq!(s.cycle_secs, 10.0);
    }

    #[test]
    fn test_rating_is_read_live() {
        let mut study = study_with(&["Fit"]);
        record(&mut study, 0, 10_000);
        {
            let proc = study.process_mut("Assembly").unwrap();
            proc.subprocesses[0].rating = 120;
        }

        let proc = study.process("Assembly").unwrap();
        let s = &summarize_process(proc)[0];
        assert_eq!(s.rating, 120);
        assert_eq!(s.basic_secs, 12.0);
    }

    #[test]
    fn test_deleted_subprocess_rates_at_100() {
        let mut study = study_with(&["Fit"]);
        {
            let proc = study.process_mut("Assembly").unwrap();
            proc.subprocesses[0].rating = 120;
        }
        record(&mut study, 0, 10_000);

        let proc = study.process_mut("Assembly").unwrap();
        let fit_id = proc.subprocesses[0].id;
        proc.remove_subprocess(fit_id);

        let s = &summarize_process(proc)[0];
        assert_eq!(s.rating, 100);
        assert_eq!(s.subprocess, "Fit"); // capture-time name survives
    }

    #[test]
    fn test_effective_time_divides_by_frequency_units() {
        let mut study = study_with(&["Fit", "Carry"]);
        record(&mut study, 0, 10_000);
        record(&mut study, 0, 10_000);
        record(&mut study, 1, 8_000);

        let proc = study.process("Assembly").unwrap();
        let summaries = summarize_process(proc);
        let carry = summaries.iter().find(|s| s.subprocess == "Carry").unwrap();
        // Seen half as often as the most frequent element: 8 * 1 / 2.
        assert_eq!(carry.effective_secs, 4.0);
    }

    #[test]
    fn test_activity_analysis_percentages() {
        let mut study = study_with(&["Fit", "Carry", "Wait"]);
        {
            let proc = study.process_mut("Assembly").unwrap();
            proc.subprocesses[0].activity = Activity::Va;
            proc.subprocesses[1].activity = Activity::Rnva;
            // "Wait" stays unclassified.
        }
        record(&mut study, 0, 30_000);
        record(&mut study, 1, 10_000);
        record(&mut study, 2, 60_000);

        let proc = study.process("Assembly").unwrap();
        let analysis = analyze_activity(&summarize_process(proc));

        assert_eq!(analysis.va_secs, 30.0);
        assert_eq!(analysis.rnva_secs, 10.0);
        assert_eq!(analysis.nva_secs, 0.0);
        // The unclassified element contributes to no bucket.
        assert_eq!(analysis.total_secs(), 40.0);

        let rows = analysis.rows();
        assert_eq!(rows[0].2, 75.0);
        assert_eq!(rows[2].2, 25.0);
        assert_eq!(rows[3].2, 100.0);
    }

    #[test]
    fn test_empty_analysis_reports_zero_percent() {
        let analysis = analyze_activity(&[]);
        let rows = analysis.rows();
        assert_eq!(analysis.total_secs(), 0.0);
        assert!(rows.iter().all(|(_, _, percent)| *percent == 0.0));
    }
}
