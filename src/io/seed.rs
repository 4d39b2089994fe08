//! Sample data for a first run.
//!
//! Every field, dates included, comes from a single RNG seeded with the
//! configured seed, so the same seed always yields the same table.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{Area, ProjectRecord, RecordId, Status, Table};

/// Number of generated records.
pub const SAMPLE_SIZE: u64 = 50;
/// Id of the newest (first) generated record.
pub const HIGHEST_ID: u64 = 1050;

const NAMES: [&str; 7] = [
    "Implementación de fibra óptica",
    "Mantenimiento de red en planteles",
    "Actualización de sistemas internos",
    "Revisión de cámaras IP",
    "Capacitación de personal",
    "Auditoría de infraestructura tecnológica",
    "Desarrollo de software educativo",
];

const OWNERS: [&str; 5] = [
    "Juan Pérez",
    "Ana López",
    "Carlos Torres",
    "María García",
    "Luis Hernández",
];

const NOTES: [&str; 5] = [
    "En espera de aprobación",
    "En ejecución",
    "Completado con éxito",
    "Requiere recursos adicionales",
    "En revisión por la Dirección",
];

const START_WINDOW_DAYS: i64 = 200;
const END_WINDOW_DAYS: i64 = 90;

fn start_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

fn end_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 1).unwrap_or_default()
}

fn pick<'a, T>(rng: &mut StdRng, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Build the sample table: ids `PROY-1050` down to `PROY-1001`.
pub fn generate(seed: u64) -> Table {
    let mut rng = StdRng::seed_from_u64(seed);
    let records = (0..SAMPLE_SIZE)
        .map(|offset| ProjectRecord {
            id: RecordId::from_number(HIGHEST_ID - offset),
            name: pick(&mut rng, &NAMES).to_string(),
            area: *pick(&mut rng, Area::all()),
            owner: pick(&mut rng, &OWNERS).to_string(),
            status: *pick(&mut rng, Status::all()),
            progress: rng.gen_range(0..=100),
            start: start_epoch() + chrono::Duration::days(rng.gen_range(0..=START_WINDOW_DAYS)),
            end: end_epoch() + chrono::Duration::days(rng.gen_range(0..=END_WINDOW_DAYS)),
            notes: pick(&mut rng, &NOTES).to_string(),
        })
        .collect();
    Table::new(records)
}
