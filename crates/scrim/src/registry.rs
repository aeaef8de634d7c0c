use std::collections::HashMap;

use crate::error::DialogError;
use crate::render_api::Component;
use crate::types::DialogType;

/// Maps dialog types to their renderable components. Process-wide in
/// spirit, but always explicitly constructed and passed by reference so
/// lifetime and test isolation stay clear.
#[derive(Default)]
pub struct ComponentRegistry {
    components: HashMap<DialogType, Component>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every entry in order.
    ///
    /// Not transactional: the first already-registered type aborts the
    /// batch with [`DialogError::DuplicateType`], and entries before it
    /// stay registered.
    pub fn register_batch<I>(&mut self, entries: I) -> Result<(), DialogError>
    where
        I: IntoIterator<Item = (DialogType, Component)>,
    {
        for (ty, component) in entries {
            if self.components.contains_key(&ty) {
                return Err(DialogError::DuplicateType(ty.to_string()));
            }
            self.components.insert(ty, component);
        }
        Ok(())
    }

    /// Unregisters every named type in order.
    ///
    /// Not transactional: the first unknown type aborts the batch with
    /// [`DialogError::UnknownType`], and types before it stay removed.
    /// Live instances of an unregistered type are left orphaned —
    /// close them first.
    pub fn unregister_batch<I>(&mut self, types: I) -> Result<(), DialogError>
    where
        I: IntoIterator<Item = DialogType>,
    {
        for ty in types {
            if self.components.remove(&ty).is_none() {
                return Err(DialogError::UnknownType(ty.to_string()));
            }
        }
        Ok(())
    }

    pub fn lookup(&self, ty: &DialogType) -> Option<Component> {
        self.components.get(ty).cloned()
    }

    pub fn is_registered(&self, ty: &DialogType) -> bool {
        self.components.contains_key(ty)
    }
}
