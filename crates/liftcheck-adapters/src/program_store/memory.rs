//! In-memory program store.

use std::sync::{Arc, RwLock};

use uuid::Uuid;

use liftcheck_core::{
    application::{ApplicationError, ports::ProgramStore},
    domain::{DomainValidator as validator, Program, ProgramRecord},
    error::LiftcheckResult,
};

/// Thread-safe in-memory program store.
///
/// Records keep insertion order, which is the order batch validation
/// reports them in.
#[derive(Clone, Default)]
pub struct InMemoryProgramStore {
    inner: Arc<RwLock<Vec<ProgramRecord>>>,
}

impl InMemoryProgramStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of programs.
    pub fn len(&self) -> LiftcheckResult<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.len())
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> LiftcheckResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Clear all programs.
    pub fn clear(&self) -> LiftcheckResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.clear();
        Ok(())
    }
}

impl ProgramStore for InMemoryProgramStore {
    fn get(&self, id: &Uuid) -> LiftcheckResult<ProgramRecord> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .iter()
            .find(|record| record.uuid == *id)
            .cloned()
            .ok_or_else(|| ApplicationError::ProgramNotFound { id: id.to_string() }.into())
    }

    fn find_by_name(&self, name: &str) -> LiftcheckResult<Option<ProgramRecord>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner
            .iter()
            .find(|record| record.program.name == name)
            .cloned())
    }

    fn list(&self) -> LiftcheckResult<Vec<ProgramRecord>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.clone())
    }

    fn insert(&self, program: Program) -> LiftcheckResult<Uuid> {
        let record = ProgramRecord::new(program);
        // Validate before insertion
        validator::validate_program_record(&record)?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let id = record.uuid;
        inner.push(record);
        Ok(id)
    }

    fn remove(&self, id: &Uuid) -> LiftcheckResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let position = inner
            .iter()
            .position(|record| record.uuid == *id)
            .ok_or_else(|| ApplicationError::ProgramNotFound { id: id.to_string() })?;

        inner.remove(position);
        Ok(())
    }
}
