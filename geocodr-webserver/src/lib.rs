#![recursion_limit = "128"]

#[macro_use]
extern crate log;

use std::sync::Arc;

use geocodr_core::registry::ProviderRegistry;

mod adapters;
mod core;
mod web;

pub use web::{Cfg, ServerCfg};

pub async fn run(registry: Arc<ProviderRegistry>, cfg: Cfg, server: ServerCfg) {
    web::run(registry, cfg, server).await;
}
