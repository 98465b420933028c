use std::collections::HashMap;

use crate::blur_mask::{BlurMaskStage, BLUR_MASK_STAGE_NAME};
use crate::error::StageError;
use crate::stage::Stage;

/// A factory producing a boxed stage.
pub type StageFactory = fn() -> Box<dyn Stage>;

/// A capability table mapping stage names to factories.
///
/// The registry is built and owned by the caller; stages never register
/// themselves through ambient global state. A host wires the table once at
/// startup and instantiates stages by name when building a graph.
#[derive(Default)]
pub struct StageRegistry {
    factories: HashMap<&'static str, StageFactory>,
}

impl StageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stage factory under the given name.
    ///
    /// An existing entry with the same name is replaced.
    pub fn insert(&mut self, name: &'static str, factory: StageFactory) {
        self.factories.insert(name, factory);
    }

    /// Instantiate the stage registered under the given name.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::UnknownStage`] if no factory is registered.
    pub fn create(&self, name: &str) -> Result<Box<dyn Stage>, StageError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| StageError::UnknownStage(name.to_string()))?;
        Ok(factory())
    }

    /// The names of the registered stages.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }
}

/// Add the stages provided by this crate to a registry.
pub fn register_builtin(registry: &mut StageRegistry) {
    registry.insert(BLUR_MASK_STAGE_NAME, || Box::new(BlurMaskStage::new()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_unknown_stage() {
        let registry = StageRegistry::new();
        let result = registry.create("nope");
        assert!(matches!(result, Err(StageError::UnknownStage(_))));
    }

    #[test]
    fn create_builtin_stage() -> Result<(), StageError> {
        let mut registry = StageRegistry::new();
        register_builtin(&mut registry);

        assert!(registry.names().any(|n| n == BLUR_MASK_STAGE_NAME));

        let stage = registry.create(BLUR_MASK_STAGE_NAME)?;
        assert_eq!(stage.name(), BLUR_MASK_STAGE_NAME);
        assert_eq!(stage.contract().inputs.len(), 2);
        assert_eq!(stage.contract().outputs.len(), 1);

        Ok(())
    }
}
