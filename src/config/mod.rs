use anyhow::{anyhow, Context as _, Result};
use std::{
    collections::BTreeMap,
    env, fs,
    io::ErrorKind,
    net::IpAddr,
    path::Path,
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "geocodr.toml";

const ENV_NAME_GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
const ENV_NAME_PORT: &str = "PORT";

#[derive(Debug, Clone)]
pub struct Config {
    pub geocoding: Geocoding,
    pub webserver: WebServer,
    pub gateways: Gateways,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)
                .with_context(|| format!("Invalid configuration file {}", file_path.display()))?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_overrides(
            env::var(ENV_NAME_GOOGLE_API_KEY).ok(),
            env::var(ENV_NAME_PORT).ok(),
        )?;
        Ok(cfg)
    }

    fn apply_overrides(&mut self, google_api_key: Option<String>, port: Option<String>) -> Result<()> {
        if let Some(api_key) = google_api_key.filter(|key| !key.trim().is_empty()) {
            match &mut self.gateways.google {
                Some(google) => google.api_key = api_key,
                None => {
                    self.gateways.google = Some(GoogleGateway {
                        api_key,
                        endpoint: None,
                    });
                }
            }
        }
        if let Some(port) = port {
            self.webserver.port = port
                .parse()
                .with_context(|| format!("Invalid {ENV_NAME_PORT} '{port}'"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl Default for Config {
    /// The built-in configuration without environment overrides.
    fn default() -> Self {
        Self::try_from(raw::Config::default()).expect("Default configuration")
    }
}

#[derive(Debug, Clone)]
pub struct Geocoding {
    pub default_service: String,
    pub max_batch_size: usize,
    /// Fixed delay before each provider request, by provider name.
    pub rate_limits: BTreeMap<String, Duration>,
}

#[derive(Debug, Clone)]
pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub upload_limit_mib: u64,
    pub enable_cors: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Gateways {
    pub nominatim: NominatimGateway,
    pub google: Option<GoogleGateway>,
}

#[derive(Debug, Clone, Default)]
pub struct NominatimGateway {
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GoogleGateway {
    pub api_key: String,
    pub endpoint: Option<String>,
}

fn rate_limit_duration(name: &str, rate_limit: raw::RateLimit) -> Result<Duration> {
    match rate_limit {
        raw::RateLimit::Seconds(secs) => {
            Duration::try_from_secs_f64(secs)
                .map_err(|_| anyhow!("Invalid rate limit of '{name}': {secs}"))
        }
        raw::RateLimit::Duration(duration) => Ok(duration),
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            geocoding,
            webserver,
            gateway,
        } = from;

        let defaults = raw::Geocoding::default();
        let raw::Geocoding {
            default_service,
            max_batch_size,
            rate_limits,
        } = geocoding.unwrap_or_default();

        let default_service = default_service
            .or(defaults.default_service)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| anyhow!("No default geocoding service defined"))?;

        let max_batch_size = max_batch_size
            .or(defaults.max_batch_size)
            .ok_or_else(|| anyhow!("No max. batch size defined"))?;
        if max_batch_size == 0 {
            return Err(anyhow!("The max. batch size must be at least 1"));
        }

        // Configured limits are merged over the built-in ones.
        let mut merged_rate_limits = defaults.rate_limits.unwrap_or_default();
        merged_rate_limits.extend(rate_limits.unwrap_or_default());
        let rate_limits = merged_rate_limits
            .into_iter()
            .map(|(name, limit)| rate_limit_duration(&name, limit).map(|d| (name, d)))
            .collect::<Result<_>>()?;

        let geocoding = Geocoding {
            default_service,
            max_batch_size,
            rate_limits,
        };

        let defaults = raw::WebServer::default();
        let raw::WebServer {
            address,
            port,
            upload_limit_mib,
            cors,
        } = webserver.unwrap_or_default();

        let webserver = WebServer {
            address: address
                .or(defaults.address)
                .ok_or_else(|| anyhow!("No listen address defined"))?,
            port: port
                .or(defaults.port)
                .ok_or_else(|| anyhow!("No port defined"))?,
            upload_limit_mib: upload_limit_mib
                .or(defaults.upload_limit_mib)
                .ok_or_else(|| anyhow!("No upload limit defined"))?,
            enable_cors: cors.or(defaults.cors).unwrap_or(false),
        };

        let raw::Gateway { nominatim, google } = gateway.unwrap_or_default();

        let raw::Nominatim { endpoint } = nominatim.unwrap_or_default();
        let nominatim = NominatimGateway { endpoint };

        let google = google.and_then(|raw::Google { api_key, endpoint }| {
            api_key
                .filter(|key| !key.trim().is_empty())
                .map(|api_key| GoogleGateway { api_key, endpoint })
        });

        Ok(Self {
            geocoding,
            webserver,
            gateways: Gateways { nominatim, google },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn parse(toml: &str) -> Result<Config> {
        let raw: raw::Config = toml::from_str(toml)?;
        Config::try_from(raw)
    }

    #[test]
    fn load_default_config() {
        let cfg = Config::try_from(raw::Config::default()).unwrap();
        assert_eq!(cfg.geocoding.default_service, "nominatim");
        assert_eq!(cfg.geocoding.max_batch_size, 1000);
        assert_eq!(
            cfg.geocoding.rate_limits["nominatim"],
            Duration::from_secs(1)
        );
        assert_eq!(
            cfg.geocoding.rate_limits["google"],
            Duration::from_millis(100)
        );
        assert_eq!(cfg.webserver.port, 5000);
        assert_eq!(cfg.webserver.upload_limit_mib, 10);
        assert!(!cfg.webserver.enable_cors);
        assert!(cfg.gateways.google.is_none());
    }

    #[test]
    fn load_missing_file_as_default() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("does-not-exist.toml");
        let cfg = Config::try_load_from_file_or_default(Some(file)).unwrap();
        assert_eq!(cfg.geocoding.max_batch_size, 1000);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [geocoding]
            default-service = "google"
            max-batch-size = 2

            [geocoding.rate-limits]
            nominatim = "250ms"

            [gateway.google]
            api-key = "secret"
            "#
        )
        .unwrap();
        let cfg = Config::try_load_from_file_or_default(Some(file.path())).unwrap();
        assert_eq!(cfg.geocoding.default_service, "google");
        assert_eq!(cfg.geocoding.max_batch_size, 2);
        assert_eq!(
            cfg.geocoding.rate_limits["nominatim"],
            Duration::from_millis(250)
        );
        // not overridden
        assert_eq!(
            cfg.geocoding.rate_limits["google"],
            Duration::from_millis(100)
        );
        assert!(cfg.gateways.google.is_some());
    }

    #[test]
    fn reject_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[geocoding]\nmax-batch-size = \"many\"").unwrap();
        assert!(Config::try_load_from_file_or_default(Some(file.path())).is_err());
    }

    #[test]
    fn reject_negative_rate_limit() {
        let err = parse("[geocoding.rate-limits]\nnominatim = -1.0").unwrap_err();
        assert!(err.to_string().contains("nominatim"));
    }

    #[test]
    fn reject_non_finite_rate_limit() {
        assert!(parse("[geocoding.rate-limits]\nnominatim = nan").is_err());
        assert!(parse("[geocoding.rate-limits]\nnominatim = inf").is_err());
    }

    #[test]
    fn reject_overflowing_rate_limit() {
        let err = parse("[geocoding.rate-limits]\nnominatim = 1e20").unwrap_err();
        assert!(err.to_string().contains("Invalid rate limit of 'nominatim'"));
    }

    #[test]
    fn accept_zero_rate_limit() {
        let cfg = parse("[geocoding.rate-limits]\nnominatim = 0").unwrap();
        assert_eq!(cfg.geocoding.rate_limits["nominatim"], Duration::ZERO);
    }

    #[test]
    fn reject_empty_default_service() {
        assert!(parse("[geocoding]\ndefault-service = \" \"").is_err());
    }

    #[test]
    fn reject_zero_max_batch_size() {
        assert!(parse("[geocoding]\nmax-batch-size = 0").is_err());
    }

    #[test]
    fn ignore_empty_google_api_key() {
        let cfg = parse("[gateway.google]\napi-key = \"\"").unwrap();
        assert!(cfg.gateways.google.is_none());
    }

    #[test]
    fn override_google_api_key_and_port() {
        let mut cfg = parse("").unwrap();
        cfg.apply_overrides(Some("secret".to_string()), Some("8080".to_string()))
            .unwrap();
        assert_eq!(cfg.gateways.google.unwrap().api_key, "secret");
        assert_eq!(cfg.webserver.port, 8080);
    }

    #[test]
    fn keep_google_endpoint_on_api_key_override() {
        let mut cfg =
            parse("[gateway.google]\napi-key = \"old\"\nendpoint = \"http://localhost\"").unwrap();
        cfg.apply_overrides(Some("new".to_string()), None).unwrap();
        let google = cfg.gateways.google.unwrap();
        assert_eq!(google.api_key, "new");
        assert_eq!(google.endpoint.as_deref(), Some("http://localhost"));
    }

    #[test]
    fn reject_invalid_port_override() {
        let mut cfg = parse("").unwrap();
        assert!(cfg.apply_overrides(None, Some("port".to_string())).is_err());
    }
}
