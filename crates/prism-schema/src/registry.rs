use crate::{
    Error,
    model::EntityModel,
    validate::{ValidateError, validate_registry},
};
use std::{
    collections::HashMap,
    sync::{LazyLock, OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use thiserror::Error as ThisError;

///
/// RegistryError
///

#[derive(Debug, ThisError)]
pub enum RegistryError {
    #[error("entity '{0}' is not registered")]
    EntityNotRegistered(String),

    #[error("entity '{0}' already registered")]
    EntityAlreadyRegistered(String),

    #[error("registry is sealed; models must be registered before first use")]
    RegistrySealed,
}

///
/// SchemaRegistry
///
/// Process-wide map from entity path to its declared model. Mutable only
/// during startup registration; read-only once validated.
///

#[derive(Default)]
pub struct SchemaRegistry {
    entities: HashMap<&'static str, &'static EntityModel>,
}

impl SchemaRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity model under its path.
    pub fn register(&mut self, model: &'static EntityModel) -> Result<(), RegistryError> {
        if self.entities.contains_key(model.path) {
            return Err(RegistryError::EntityAlreadyRegistered(
                model.path.to_string(),
            ));
        }

        self.entities.insert(model.path, model);
        Ok(())
    }

    /// Look up a model by entity path.
    pub fn try_get(&self, path: &str) -> Result<&'static EntityModel, RegistryError> {
        self.entities
            .get(path)
            .copied()
            .ok_or_else(|| RegistryError::EntityNotRegistered(path.to_string()))
    }

    /// Look up a model by external entity name.
    pub fn try_get_by_name(&self, name: &str) -> Result<&'static EntityModel, RegistryError> {
        self.entities
            .values()
            .find(|m| m.entity_name == name)
            .copied()
            .ok_or_else(|| RegistryError::EntityNotRegistered(name.to_string()))
    }

    /// Iterate registered models.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static EntityModel)> {
        self.entities.iter().map(|(k, v)| (*k, *v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Validate every registered model; see [`crate::validate`].
    pub fn validate(&self) -> Result<(), ValidateError> {
        validate_registry(self).map_err(ValidateError::Validation)?;
        Ok(())
    }
}

///
/// REGISTRY
/// the process-wide instance
///

static REGISTRY: LazyLock<RwLock<SchemaRegistry>> =
    LazyLock::new(|| RwLock::new(SchemaRegistry::new()));

static REGISTRY_VALIDATED: OnceLock<()> = OnceLock::new();

/// Acquire a write guard to the global registry during startup registration.
pub fn registry_write() -> RwLockWriteGuard<'static, SchemaRegistry> {
    REGISTRY
        .write()
        .expect("registry RwLock poisoned while acquiring write lock")
}

fn registry_read() -> RwLockReadGuard<'static, SchemaRegistry> {
    REGISTRY
        .read()
        .expect("registry RwLock poisoned while acquiring read lock")
}

/// Register a model with the global registry. Fails once the registry has
/// been validated and sealed by [`get_registry`].
pub fn register_global(model: &'static EntityModel) -> Result<(), Error> {
    if REGISTRY_VALIDATED.get().is_some() {
        return Err(RegistryError::RegistrySealed.into());
    }

    registry_write().register(model)?;
    Ok(())
}

/// Read the global registry, validating it exactly once per process.
/// The first successful call seals the registry against registration.
pub fn get_registry() -> Result<RwLockReadGuard<'static, SchemaRegistry>, Error> {
    let registry = registry_read();

    if REGISTRY_VALIDATED.get().is_none() {
        registry.validate()?;
        REGISTRY_VALIDATED.set(()).ok();

        tracing::debug!(entities = registry.len(), "schema registry validated");
    }

    Ok(registry)
}
