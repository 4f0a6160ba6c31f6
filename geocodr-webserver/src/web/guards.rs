use std::{ops::Deref, sync::Arc};

use crate::core::registry::ProviderRegistry;

/// Managed state holding the shared, read-only provider registry.
pub struct Geocoding(pub Arc<ProviderRegistry>);

impl Geocoding {
    /// A handle that can be moved into a blocking task.
    pub fn registry(&self) -> Arc<ProviderRegistry> {
        Arc::clone(&self.0)
    }
}

impl Deref for Geocoding {
    type Target = ProviderRegistry;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
