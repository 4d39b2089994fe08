use std::collections::HashSet;

use super::record::{NewRecord, ProjectRecord, RecordEdit, RecordId};

/// First identifier handed out when nothing numeric is on file.
pub const FIRST_ID: u64 = 1001;

/// The in-memory project table, most recent record first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    records: Vec<ProjectRecord>,
}

impl Table {
    pub fn new(records: Vec<ProjectRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&ProjectRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    /// Highest numeric suffix on file plus one.
    ///
    /// Ids whose suffix does not parse are ignored. If the maximum is
    /// `u64::MAX`, the lowest free number from `FIRST_ID` up is used instead.
    pub fn next_id(&self) -> RecordId {
        let taken: HashSet<u64> = self.records.iter().filter_map(|r| r.id.numeric_suffix()).collect();
        let next = match taken.iter().max() {
            None => FIRST_ID,
            Some(max) => max
                .checked_add(1)
                .unwrap_or_else(|| (FIRST_ID..).find(|n| !taken.contains(n)).unwrap_or(FIRST_ID)),
        };
        RecordId::from_number(next)
    }

    /// Store a new record at the top of the table and return its id.
    pub fn create(&mut self, form: NewRecord) -> RecordId {
        let id = self.next_id();
        self.records.insert(0, form.into_record(id.clone()));
        id
    }

    /// Rows whose name or id contains `query` as typed, ignoring case.
    ///
    /// Only the empty string means "no search"; whitespace is matched literally.
    pub fn search(&self, query: &str) -> Vec<&ProjectRecord> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.name.to_lowercase().contains(&needle)
                    || r.id.as_str().to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Overwrite status, progress and notes in place. Returns false if the id is gone.
    pub fn update(&mut self, id: &RecordId, edit: RecordEdit) -> bool {
        match self.records.iter_mut().find(|r| &r.id == id) {
            Some(record) => {
                record.status = edit.status;
                record.progress = edit.progress.min(100);
                record.notes = edit.notes;
                true
            }
            None => false,
        }
    }

    /// Drop the record with `id`. Returns false if nothing matched.
    pub fn remove(&mut self, id: &RecordId) -> bool {
        match self.records.iter().position(|r| &r.id == id) {
            Some(idx) => {
                self.records.remove(idx);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::record::{Area, Status};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    pub(crate) fn record(n: u64, name: &str) -> ProjectRecord {
        ProjectRecord {
            id: RecordId::from_number(n),
            name: name.to_string(),
            area: Area::Infrastructure,
            owner: "Ana López".to_string(),
            status: Status::Pending,
            progress: 10,
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            notes: "En ejecución".to_string(),
        }
    }

    /// PROY-1001..=PROY-1005, newest first.
    pub(crate) fn five_records() -> Table {
        Table::new((1001..=1005).rev().map(|n| record(n, &format!("Project {n}"))).collect())
    }

    fn form(name: &str) -> NewRecord {
        let mut form = NewRecord::starting(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        form.name = name.to_string();
        form
    }

    #[test]
    fn empty_table_starts_at_1001() {
        assert_eq!(Table::default().next_id().as_str(), "PROY-1001");
    }

    #[test]
    fn next_id_follows_the_maximum() {
        assert_eq!(five_records().next_id().as_str(), "PROY-1006");

        let gappy = Table::new(vec![record(1003, "a"), record(1100, "b"), record(1001, "c")]);
        assert_eq!(gappy.next_id().as_str(), "PROY-1101");
    }

    #[test]
    fn next_id_skips_unparsable_ids() {
        let mut odd = record(1, "odd");
        odd.id = RecordId::new("PROY-X");
        let table = Table::new(vec![odd.clone()]);
        assert_eq!(table.next_id().as_str(), "PROY-1001");

        let table = Table::new(vec![odd, record(1010, "ok")]);
        assert_eq!(table.next_id().as_str(), "PROY-1011");
    }

    #[test]
    fn create_prepends() {
        let mut table = five_records();
        let id = table.create(form("Nuevo"));
        assert_eq!(id.as_str(), "PROY-1006");
        assert_eq!(table.len(), 6);
        assert_eq!(table.records()[0].id, id);
        assert_eq!(table.records()[0].name, "Nuevo");
    }

    #[test]
    fn create_accepts_empty_strings() {
        let mut table = Table::default();
        let id = table.create(form(""));
        let stored = table.get(&id).unwrap();
        assert!(stored.name.is_empty());
        assert!(stored.owner.is_empty());
    }

    #[test]
    fn search_by_id_fragment() {
        let table = five_records();
        let hits = table.search("1003");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "PROY-1003");
    }

    #[test]
    fn search_ignores_case() {
        let table = Table::new(vec![record(1001, "Revisión de cámaras IP"), record(1002, "Otro")]);
        let hits = table.search("CÁMARAS");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "PROY-1001");
        assert_eq!(table.search("proy-100").len(), 2);
    }

    #[test]
    fn search_matches_nameless_record_by_id() {
        let table = Table::new(vec![record(1001, ""), record(1002, "Something")]);
        let hits = table.search("1001");
        assert_eq!(hits.len(), 1);
        assert!(hits[0].name.is_empty());
    }

    #[test]
    fn empty_query_returns_nothing() {
        let table = five_records();
        assert!(table.search("").is_empty());
        assert!(table.search("no such project").is_empty());
    }

    #[test]
    fn query_whitespace_is_significant() {
        let table = Table::new(vec![record(1001, "Revisión de cámaras IP"), record(1002, "Red  doble")]);
        assert!(table.search("IP ").is_empty());
        assert!(table.search(" revisión").is_empty());
        assert_eq!(table.search("cámaras IP").len(), 1);

        let hits = table.search("  ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "PROY-1002");
    }

    #[test]
    fn next_id_past_u32() {
        let table = Table::new(vec![record(u64::from(u32::MAX), "a")]);
        let next = table.next_id();
        assert_eq!(next.as_str(), "PROY-4294967296");
        assert!(table.get(&next).is_none());
    }

    #[test]
    fn next_id_never_reuses_at_the_top() {
        let table = Table::new(vec![record(u64::MAX, "top"), record(1001, "a"), record(1002, "b")]);
        let next = table.next_id();
        assert_eq!(next.as_str(), "PROY-1003");
        assert!(table.get(&next).is_none());
    }

    #[test]
    fn non_canonical_ids_do_not_count() {
        let mut spaced = record(1, "spaced");
        spaced.id = RecordId::new("PROY- 5000");
        let mut signed = record(1, "signed");
        signed.id = RecordId::new("PROY-+6000");
        let table = Table::new(vec![spaced, signed, record(1010, "ok")]);
        assert_eq!(table.next_id().as_str(), "PROY-1011");
    }

    #[test]
    fn update_touches_only_editable_fields() {
        let mut table = five_records();
        let id = RecordId::from_number(1002);
        let before = table.get(&id).unwrap().clone();

        let edit = RecordEdit {
            status: Status::InProgress,
            progress: 100,
            notes: "Requiere recursos adicionales".to_string(),
        };
        assert!(table.update(&id, edit));

        let after = table.get(&id).unwrap();
        assert_eq!(after.status, Status::InProgress);
        assert_eq!(after.progress, 100);
        assert_eq!(after.notes, "Requiere recursos adicionales");
        assert_eq!(after.id, before.id);
        assert_eq!(after.name, before.name);
        assert_eq!(after.area, before.area);
        assert_eq!(after.owner, before.owner);
        assert_eq!(after.start, before.start);
        assert_eq!(after.end, before.end);
    }

    #[test]
    fn update_missing_id_is_rejected() {
        let mut table = five_records();
        let before = table.clone();
        assert!(!table.update(&RecordId::from_number(9999), RecordEdit::default()));
        assert_eq!(table, before);
    }

    #[test]
    fn remove_drops_exactly_one_row() {
        let mut table = five_records();
        let before = table.clone();
        let id = RecordId::from_number(1003);
        assert!(table.remove(&id));
        assert_eq!(table.len(), 4);
        assert!(table.get(&id).is_none());
        let survivors: Vec<_> = before.records().iter().filter(|r| r.id != id).cloned().collect();
        assert_eq!(table.records(), survivors.as_slice());
    }

    #[test]
    fn remove_missing_id_changes_nothing() {
        let mut table = five_records();
        let before = table.clone();
        assert!(!table.remove(&RecordId::from_number(42)));
        assert_eq!(table, before);
    }

    proptest! {
        #[test]
        fn next_id_is_max_plus_one(suffixes in prop::collection::vec(1u64..1_000_000, 1..40)) {
            let table = Table::new(suffixes.iter().map(|&n| record(n, "p")).collect());
            let max = suffixes.iter().copied().max().unwrap();
            prop_assert_eq!(table.next_id(), RecordId::from_number(max + 1));
        }
    }
}
