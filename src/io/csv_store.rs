use std::path::{Path, PathBuf};

use crate::io::error::StoreError;
use crate::io::seed;
use crate::model::record::COLUMNS;
use crate::model::{ProjectRecord, Table};

/// The comma-delimited file that holds the whole table.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
    seed: u64,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>, seed: u64) -> Self {
        Self {
            path: path.into(),
            seed,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the table, or seed and persist a sample table on first run.
    pub fn load(&self) -> Result<Table, StoreError> {
        if self.path.exists() {
            let table = read_table(&self.path)?;
            tracing::info!(path = %self.path.display(), records = table.len(), "loaded project table");
            return Ok(table);
        }

        tracing::info!(path = %self.path.display(), seed = self.seed, "no data file, generating sample projects");
        let table = seed::generate(self.seed);
        self.save(&table)?;
        Ok(table)
    }

    /// Overwrite the backing file with the full table.
    pub fn save(&self, table: &Table) -> Result<(), StoreError> {
        write_table(table.records(), &self.path)?;
        tracing::debug!(path = %self.path.display(), records = table.len(), "saved project table");
        Ok(())
    }
}

/// Parse every row of `path` into a table.
///
/// Rows keep file order. Any row that does not fit the columns fails the whole read.
pub fn read_table(path: &Path) -> Result<Table, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| StoreError::csv(path, e))?;

    let records = reader
        .deserialize::<ProjectRecord>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| StoreError::csv(path, e))?;
    Ok(Table::new(records))
}

/// Write `records` to `path` under the canonical header, replacing any previous content.
///
/// Returns the number of rows written.
pub fn write_table(records: &[ProjectRecord], path: &Path) -> Result<usize, StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }

    // header written by hand so an empty table still produces one
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| StoreError::csv(path, e))?;

    writer
        .write_record(COLUMNS)
        .map_err(|e| StoreError::csv(path, e))?;
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| StoreError::csv(path, e))?;
    }

    writer.flush().map_err(|e| StoreError::io(path, e))?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::table::tests::{five_records, record};
    use crate::model::{Area, RecordId, Status};
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_seeded_and_written() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("proyectos.csv");
        let store = CsvStore::new(&path, 42);

        let table = store.load().unwrap();
        assert_eq!(table.len(), 50);
        assert!(path.exists());

        let again = store.load().unwrap();
        assert_eq!(again, table);
    }

    #[test]
    fn save_then_load_roundtrips() {
        let tmp = TempDir::new().unwrap();
        let store = CsvStore::new(tmp.path().join("data.csv"), 42);
        let mut table = five_records();
        let mut tricky = record(1010, "Comas, \"comillas\" y\nsaltos");
        tricky.notes = String::new();
        tricky.owner = String::new();
        table = Table::new(std::iter::once(tricky).chain(table.records().iter().cloned()).collect());

        store.save(&table).unwrap();
        assert_eq!(store.load().unwrap(), table);
    }

    #[test]
    fn header_matches_columns_even_when_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.csv");
        let store = CsvStore::new(&path, 42);

        store.save(&Table::default()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim_end(), "ID,Name,Area,Owner,Status,Progress,StartDate,EndDate,Notes");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn rows_serialize_dates_as_iso() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("one.csv");
        write_table(&[record(1001, "Fibra")], &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let row = text.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "PROY-1001,Fibra,Infraestructura,Ana López,Pending,10,2024-01-01,2024-07-01,En ejecución"
        );
    }

    #[test]
    fn reads_files_from_the_spanish_tracker() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("legacy.csv");
        std::fs::write(
            &path,
            "ID,Proyecto,Área,Responsable,Estatus,Avance (%),Fecha de inicio,Fecha estimada de término,Comentarios\n\
             PROY-1002,Revisión de cámaras IP,Informática,Luis Hernández,En progreso,45,2024-02-10,2024-08-01,En revisión por la Dirección\n\
             PROY-1001,Capacitación de personal,Recursos Humanos,María García,Completado,100,2024-01-05,2024-07-20,Completado con éxito\n",
        )
        .unwrap();

        let table = read_table(&path).unwrap();
        assert_eq!(table.len(), 2);
        let first = &table.records()[0];
        assert_eq!(first.id, RecordId::new("PROY-1002"));
        assert_eq!(first.area, Area::InformationTechnology);
        assert_eq!(first.status, Status::InProgress);
        assert_eq!(first.progress, 45);
        assert_eq!(first.start, NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
        assert_eq!(table.records()[1].status, Status::Completed);
    }

    #[test]
    fn unparsable_date_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.csv");
        std::fs::write(
            &path,
            "ID,Name,Area,Owner,Status,Progress,StartDate,EndDate,Notes\n\
             PROY-1001,X,Informática,Ana,Pending,0,not-a-date,2024-01-01,\n",
        )
        .unwrap();

        let err = CsvStore::new(&path, 42).load().unwrap_err();
        assert!(matches!(err, StoreError::Csv { .. }));
    }

    #[test]
    fn missing_column_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.csv");
        std::fs::write(&path, "ID,Name\nPROY-1001,X\n").unwrap();
        assert!(matches!(read_table(&path), Err(StoreError::Csv { .. })));
    }

    fn arb_record() -> impl Strategy<Value = ProjectRecord> {
        (
            1u64..100_000,
            ".{0,20}",
            prop::sample::select(Area::all().to_vec()),
            "[a-zA-Z ]{0,12}",
            prop::sample::select(Status::all().to_vec()),
            0u8..=100,
            0i64..3000,
            0i64..3000,
            ".{0,30}",
        )
            .prop_map(|(n, name, area, owner, status, progress, s, e, notes)| {
                let epoch = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
                ProjectRecord {
                    id: RecordId::from_number(n),
                    name,
                    area,
                    owner,
                    status,
                    progress,
                    start: epoch + chrono::Duration::days(s),
                    end: epoch + chrono::Duration::days(e),
                    notes,
                }
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn any_table_survives_persistence(records in prop::collection::vec(arb_record(), 0..12)) {
            let tmp = TempDir::new().unwrap();
            let store = CsvStore::new(tmp.path().join("p.csv"), 1);
            let table = Table::new(records);
            store.save(&table).unwrap();
            prop_assert_eq!(store.load().unwrap(), table);
        }
    }
}
