#[cfg(test)]
mod tests {
    use motus::libs::frequency::{process_frequencies, Frequency};
    use motus::libs::ledger;
    use motus::libs::study::{Reading, Study};

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
    fn test_most_frequent_subprocess_is_the_unit() {
        let mut study = study_with(&["Fit", "Carry"]);
        for _ in 0..4 {
            record(&mut study, 0, 1_000);
        }
        record(&mut study, 1, 1_000);

        let proc = study.process("Assembly").unwrap();
        let frequencies = process_frequencies(proc);
        let fit = frequencies[&proc.subprocesses[0].id];
        let carry = frequencies[&proc.subprocesses[1].id];

        assert_eq!(fit, Frequency { occurrences: 1, units: 1.0 });
        assert_eq!(carry, Frequency { occurrences: 1, units: 4.0 });
        assert_eq!(fit.text(), "1/1.00");
        assert_eq!(carry.text(), "1/4.00");
    }

    #[test]
    fn test_unrecorded_subprocess_gets_identity() {
        let mut study = study_with(&["Fit", "Idle"]);
        record(&mut study, 0, 1_000);

        let proc = study.process("Assembly").unwrap();
        let frequencies = process_frequencies(proc);
        assert_eq!(frequencies[&proc.subprocesses[1].id], Frequency::identity());
    }

    #[test]
    fn test_deleted_subprocess_still_counts_through_readings() {
        let mut study = study_with(&["Fit", "Carry"]);
        record(&mut study, 0, 1_000);
        record(&mut study, 0, 1_000);
        record(&mut study, 1, 1_000);

        let proc = study.process_mut("Assembly").unwrap();
        let fit_id = proc.subprocesses[0].id;
        let carry_id = proc.subprocesses[1].id;
        proc.remove_subprocess(fit_id);

        let frequencies = process_frequencies(proc);
        // The removed subprocess keeps its count and keeps setting the maximum.
        assert_eq!(frequencies[&fit_id], Frequency { occurrences: 1, units: 1.0 });
        assert_eq!(frequencies[&carry_id], Frequency { occurrences: 1, units: 2.0 });
    }

    #[test]
    fn test_empty_process_maps_everything_to_identity() {
        let study = study_with(&["Fit"]);
        let proc = study.process("Assembly").unwrap();
        let frequencies = process_frequencies(proc);
        assert_eq!(frequencies[&proc.subprocesses[0].id], Frequency::identity());
    }
}
