#[cfg(test)]
mod tests {
    use motus::libs::ledger;
    use motus::libs::storage::StudyStore;
    use motus::libs::study::{Reading, Study};
    use std::fs;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> StudyStore {
        StudyStore::at(dir.path().join("study.json"))
    }

    fn recorded_study() -> Study {
        let mut study = Study::new();
        study.add_process("Assembly").unwrap();
        study.add_subprocess("Assembly", "Fit").unwrap();
        let proc = study.process_mut("Assembly").unwrap();
        let sub = proc.subprocesses[0].clone();
        ledger::append(proc, Reading::capture("Assembly", &sub, 1_000, 0, 1_000));
        study
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut study = recorded_study();
        study.setup_mode = true;
        store.save(&mut study).unwrap();
        assert!(study.saved_at.is_some());

        let loaded = store.load();
        assert!(loaded.setup_mode);
        assert_eq!(loaded.processes.len(), 1);
        let proc = loaded.process("Assembly").unwrap();
        assert_eq!(proc.subprocesses.len(), 1);
        assert_eq!(proc.readings.len(), 1);
        assert_eq!(proc.readings[0].subprocess_id, proc.subprocesses[0].id);
    }

    #[test]
    fn test_missing_record_loads_empty() {
        let dir = TempDir::new().unwrap();
        let loaded = store_in(&dir).load();
        assert!(loaded.processes.is_empty());
        assert!(!loaded.setup_mode);
    }

    #[test]
    fn test_corrupt_record_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("study.json");
        fs::write(&path, "{ not json").unwrap();

        let loaded = StudyStore::at(path).load();
        assert!(loaded.processes.is_empty());
    }

    #[test]
    fn test_clear_removes_the_record() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&mut recorded_study()).unwrap();
        assert!(dir.path().join("study.json").exists());

        store.clear().unwrap();
        assert!(!dir.path().join("study.json").exists());

        // Clearing an absent record is fine.
        store.clear().unwrap();
    }

    #[test]
    fn test_id_counter_reanchors_above_persisted_ids() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut study = recorded_study();
        store.save(&mut study).unwrap();

        let mut loaded = store.load();
        let max_persisted = loaded
            .processes
            .iter()
            .flat_map(|p| std::iter::once(p.id.0).chain(p.subprocesses.iter().map(|s| s.id.0)))
            .max()
            .unwrap();
        let new_id = loaded.add_subprocess("Assembly", "Carry").unwrap();
        assert!(new_id.0 > max_persisted);
    }
}
