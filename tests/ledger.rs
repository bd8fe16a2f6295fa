#[cfg(test)]
mod tests {
    use motus::libs::ledger;
    use motus::libs::study::{EntityId, Process, Reading, Study};
    use motus::libs::timer::{self, Clock};
    use std::cell::Cell;

    struct ManualClock(Cell<i64>);

    impl Clock for ManualClock {
        fn now_ms(&self) -> i64 {
            self.0.get()
        }
    }

    /// One reading per duration, recorded as laps at increasing instants.
    fn recorded_study(durations: &[(usize, i64)], subs: &[&str]) -> (Study, Vec<EntityId>) {
        let mut study = Study::new();
        study.add_process("Assembly").unwrap();
        let ids: Vec<EntityId> = subs
            .iter()
            .map(|name| study.add_subprocess("Assembly", name).unwrap())
            .collect();

        let clock = ManualClock(Cell::new(0));
        let proc = study.process_mut("Assembly").unwrap();
        timer::start_process(proc, &clock);
        let mut now = 0;
        for &(sub_index, duration) in durations {
            now += duration;
            clock.0.set(now);
            timer::record_lap(proc, ids[sub_index], &clock).unwrap();
        }
        (study, ids)
    }

    fn readings_of(study: &Study) -> &Vec<Reading> {
        &study.process("Assembly").unwrap().readings
    }

    fn process_mut(study: &mut Study) -> &mut Process {
        study.process_mut("Assembly").unwrap()
    }

    #[test]
    fn test_delete_at_by_position() {
        let (mut study, _) = recorded_study(&[(0, 1_000), (0, 2_000), (0, 3_000)], &["Fit"]);
        let removed = ledger::delete_at(process_mut(&mut study), 1).unwrap();
        assert_eq!(removed.time_ms, 2_000);
        assert_eq!(readings_of(&study).len(), 2);

        assert!(ledger::delete_at(process_mut(&mut study), 5).is_none());
        assert_eq!(readings_of(&study).len(), 2);
    }

    #[test]
    fn test_delete_last_for_restores_previous_display() {
        let (mut study, ids) = recorded_study(&[(0, 1_000), (1, 500), (0, 2_000)], &["Fit", "Carry"]);

        let removed = ledger::delete_last_for(process_mut(&mut study), ids[0]).unwrap();
        assert_eq!(removed.time_ms, 2_000);

        let proc = study.process("Assembly").unwrap();
        // Display falls back to the previous reading of the same subprocess.
        assert_eq!(proc.subprocess(ids[0]).unwrap().last_time_ms, 1_000);
        // The other subprocess's reading is untouched.
        assert_eq!(proc.readings.len(), 2);
        assert!(proc.readings.iter().any(|r| r.subprocess_id == ids[1]));
    }

    #[test]
    fn test_delete_last_for_zeroes_display_when_none_remain() {
        let (mut study, ids) = recorded_study(&[(0, 1_000)], &["Fit"]);

        ledger::delete_last_for(process_mut(&mut study), ids[0]).unwrap();
        let proc = study.process("Assembly").unwrap();
        assert!(proc.readings.is_empty());
        assert_eq!(proc.subprocess(ids[0]).unwrap().last_time_ms, 0);

        assert!(ledger::delete_last_for(process_mut(&mut study), ids[0]).is_none());
    }

    #[test]
    fn test_delete_all_for_removes_only_matching() {
        let (mut study, ids) = recorded_study(&[(0, 1_000), (1, 500), (0, 2_000), (1, 700)], &["Fit", "Carry"]);

        let deleted = ledger::delete_all_for(process_mut(&mut study), ids[0]);
        assert_eq!(deleted, 2);

        let proc = study.process("Assembly").unwrap();
        assert_eq!(proc.readings.len(), 2);
        assert!(proc.readings.iter().all(|r| r.subprocess_id == ids[1]));
        assert_eq!(proc.subprocess(ids[0]).unwrap().last_time_ms, 0);
    }

    #[test]
    fn test_entity_removal_is_separate_from_reading_deletion() {
        let (mut study, ids) = recorded_study(&[(0, 1_000)], &["Fit"]);

        let proc = process_mut(&mut study);
        assert!(proc.remove_subprocess(ids[0]));
        // The ledger still holds the reading until it is deleted explicitly.
        assert_eq!(proc.readings.len(), 1);
        assert_eq!(proc.rating_for(ids[0]), 100);
    }

    #[test]
    fn test_recent_first_orders_by_recorded_at() {
        let (study, _) = recorded_study(&[(0, 1_000), (0, 500_000), (0, 2_000)], &["Fit"]);
        let proc = study.process("Assembly").unwrap();

        let recent = ledger::recent_first(proc);
        assert_eq!(recent.len(), 3);
        for pair in recent.windows(2) {
            assert!(pair[0].recorded_at >= pair[1].recorded_at);
        }
        assert_eq!(recent[0].time_ms, 2_000);
    }

    #[test]
    fn test_delete_at_recent_matches_list_ordering() {
        let (mut study, _) = recorded_study(&[(0, 1_000), (0, 500_000), (0, 2_000)], &["Fit"]);
        {
            let proc = study.process("Assembly").unwrap();
            assert_eq!(ledger::recent_first(proc)[0].time_ms, 2_000);
        }

        // Index 0 removes exactly the reading the list shows first.
        let removed = ledger::delete_at_recent(process_mut(&mut study), 0).unwrap();
        assert_eq!(removed.time_ms, 2_000);
        assert_eq!(readings_of(&study).len(), 2);

        let removed = ledger::delete_at_recent(process_mut(&mut study), 1).unwrap();
        assert_eq!(removed.time_ms, 1_000);

        assert!(ledger::delete_at_recent(process_mut(&mut study), 5).is_none());
        assert_eq!(readings_of(&study).len(), 1);
    }
}
