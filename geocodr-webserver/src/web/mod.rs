use std::{net::IpAddr, sync::Arc};

use rocket::{
    config::Config as RocketCfg,
    data::{Limits, ToByteUnit},
    Rocket, Route,
};

use crate::core::registry::ProviderRegistry;

pub mod api;
#[cfg(feature = "frontend")]
mod frontend;
mod guards;


/// Settings of the geocoding endpoints.
#[derive(Debug, Clone)]
pub struct Cfg {
    pub max_batch_size: usize,
}

/// Settings of the HTTP listener.
#[derive(Debug, Clone)]
pub struct ServerCfg {
    pub address: IpAddr,
    pub port: u16,
    /// Maximum size of an uploaded CSV file in MiB.
    pub upload_limit_mib: u64,
    pub enable_cors: bool,
}

impl ServerCfg {
    fn rocket_cfg(&self) -> RocketCfg {
        let limit = self.upload_limit_mib.mebibytes();
        RocketCfg {
            address: self.address,
            port: self.port,
            limits: Limits::default()
                .limit("file", limit)
                .limit("data-form", limit)
                .limit("json", limit),
            ..RocketCfg::default()
        }
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    registry: Arc<ProviderRegistry>,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;

    info!(
        "Available geocoding services: {} (default: {})",
        registry.list_available().join(", "),
        registry.default_service()
    );

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(guards::Geocoding(registry))
        .manage(cfg)
        .register("/", api::catchers());

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

#[cfg(not(feature = "frontend"))]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", api::routes())]
}

#[cfg(feature = "frontend")]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", api::routes()), ("/", frontend::routes())]
}

pub async fn run(registry: Arc<ProviderRegistry>, cfg: Cfg, server: ServerCfg) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(server.rocket_cfg()),
        cfg,
    };
    let instance = rocket_instance(options, registry);
    let server_task = if server.enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
