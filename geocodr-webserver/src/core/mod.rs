pub use geocodr_core::{gateways, registry};

pub mod entities {
    pub use geocodr_core::entities::*;
    #[cfg(test)]
    pub use geocodr_entities::builders::*;
}

pub mod usecases {
    pub use geocodr_core::usecases::*;
}

pub mod prelude {
    pub use super::{entities::*, registry::ProviderRegistry};
}
