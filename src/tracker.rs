use crate::io::{CsvStore, StoreError};
use crate::model::Table;
use crate::session::{self, Action, Session, Transition};

/// Owns the loaded table and writes it back after every change.
pub struct Tracker {
    store: CsvStore,
    table: Table,
}

impl Tracker {
    /// Load the table from the store, seeding it on first run.
    pub fn open(store: CsvStore) -> Result<Self, StoreError> {
        let table = store.load()?;
        Ok(Self { store, table })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Apply one action and persist the whole table if it changed.
    ///
    /// On a failed write the in-memory change is kept.
    pub fn dispatch(&mut self, session: &mut Session, action: Action) -> Result<Transition, StoreError> {
        tracing::debug!(?action, "dispatch");
        let transition = session::apply(&mut self.table, session, action);
        if transition.mutated {
            self.store.save(&self.table)?;
        }
        Ok(transition)
    }

    /// Re-read the backing file, picking up writes from other sessions.
    pub fn reload(&mut self) -> Result<(), StoreError> {
        self.table = self.store.load()?;
        Ok(())
    }
}
