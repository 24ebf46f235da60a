//! Server settings loaded via OrthoConfig.
//!
//! Values come from `TRACKER_*` environment variables, an optional config
//! file and CLI flags. The conventional `DATABASE_URL` and `PORT` variables
//! act as fallbacks so the server runs unchanged on common PaaS hosts.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use mockable::Env;
use ortho_config::OrthoConfig;
use serde::Deserialize;

use exercise_tracker::outbound::persistence::PoolConfig;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DATABASE_URL_FALLBACK_ENV: &str = "DATABASE_URL";
const PORT_FALLBACK_ENV: &str = "PORT";

fn default_public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

/// Raw configuration as loaded from the environment, files and flags.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRACKER")]
pub struct ServerSettings {
    /// PostgreSQL connection string; memory storage is used when absent.
    pub database_url: Option<String>,
    /// Interface to bind.
    pub host: Option<IpAddr>,
    /// Listening port.
    pub port: Option<u16>,
    /// Directory holding the landing page and static assets.
    pub public_dir: Option<PathBuf>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
}

/// Failures turning [`ServerSettings`] into runtime values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("{name} must be a port number, got {value:?}")]
    InvalidPort { name: &'static str, value: String },
}

/// Settings with every default and fallback applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeSettings {
    pub bind_addr: SocketAddr,
    pub database: Option<PoolConfig>,
    pub public_dir: PathBuf,
}

impl ServerSettings {
    /// Apply defaults and the `DATABASE_URL` / `PORT` fallbacks.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidPort`] when the `PORT` fallback is not
    /// a valid port number.
    pub fn resolve<E: Env>(self, env: &E) -> Result<RuntimeSettings, SettingsError> {
        let port = match self.port {
            Some(port) => port,
            None => fallback_port(env)?,
        };
        let database_url = self
            .database_url
            .or_else(|| env.string(DATABASE_URL_FALLBACK_ENV))
            .filter(|url| !url.trim().is_empty());
        let pool_max_size = self.pool_max_size;
        let database = database_url.map(|url| {
            let config = PoolConfig::new(url);
            match pool_max_size {
                Some(max_size) => config.with_max_size(max_size),
                None => config,
            }
        });

        Ok(RuntimeSettings {
            bind_addr: SocketAddr::new(self.host.unwrap_or(DEFAULT_HOST), port),
            database,
            public_dir: self.public_dir.unwrap_or_else(default_public_dir),
        })
    }
}

fn fallback_port<E: Env>(env: &E) -> Result<u16, SettingsError> {
    match env.string(PORT_FALLBACK_ENV) {
        None => Ok(DEFAULT_PORT),
        Some(raw) if raw.trim().is_empty() => Ok(DEFAULT_PORT),
        Some(raw) => raw.trim().parse().map_err(|_| SettingsError::InvalidPort {
            name: PORT_FALLBACK_ENV,
            value: raw,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use mockable::MockEnv;
    use rstest::rstest;

    fn mock_env(vars: &[(&str, &str)]) -> MockEnv {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        let mut env = MockEnv::new();
        env.expect_string()
            .times(0..)
            .returning(move |key| vars.get(key).cloned());
        env
    }

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("exercise-tracker")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_without_configuration() {
        let runtime = ServerSettings::default()
            .resolve(&mock_env(&[]))
            .expect("resolves");

        assert_eq!(
            runtime.bind_addr,
            SocketAddr::new(DEFAULT_HOST, DEFAULT_PORT)
        );
        assert!(runtime.database.is_none());
        assert_eq!(runtime.public_dir, default_public_dir());
    }

    #[rstest]
    fn conventional_variables_are_fallbacks() {
        let env = mock_env(&[
            ("DATABASE_URL", "postgres://localhost/tracker"),
            ("PORT", "8080"),
        ]);
        let runtime = ServerSettings::default().resolve(&env).expect("resolves");

        assert_eq!(runtime.bind_addr.port(), 8080);
        assert_eq!(
            runtime.database.as_ref().map(PoolConfig::database_url),
            Some("postgres://localhost/tracker")
        );
    }

    #[rstest]
    fn explicit_settings_win_over_fallbacks() {
        let env = mock_env(&[("DATABASE_URL", "postgres://fallback"), ("PORT", "8080")]);
        let settings = ServerSettings {
            database_url: Some("postgres://explicit".to_owned()),
            port: Some(4000),
            pool_max_size: Some(3),
            ..ServerSettings::default()
        };
        let runtime = settings.resolve(&env).expect("resolves");

        assert_eq!(runtime.bind_addr.port(), 4000);
        let database = runtime.database.expect("database configured");
        assert_eq!(database.database_url(), "postgres://explicit");
        assert_eq!(database.max_size(), 3);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_database_url_means_memory_storage(#[case] url: &str) {
        let env = mock_env(&[("DATABASE_URL", url)]);
        let runtime = ServerSettings::default().resolve(&env).expect("resolves");
        assert!(runtime.database.is_none());
    }

    #[rstest]
    fn invalid_port_fallback_is_reported() {
        let env = mock_env(&[("PORT", "http")]);
        let err = ServerSettings::default()
            .resolve(&env)
            .expect_err("invalid port");
        assert_eq!(
            err,
            SettingsError::InvalidPort {
                name: "PORT",
                value: "http".to_owned()
            }
        );
    }

    #[rstest]
    fn prefixed_environment_is_loaded() {
        let _guard = lock_env([
            ("TRACKER_DATABASE_URL", Some("postgres://env".to_owned())),
            ("TRACKER_HOST", Some("127.0.0.1".to_owned())),
            ("TRACKER_PORT", Some("5000".to_owned())),
            ("TRACKER_PUBLIC_DIR", None::<String>),
            ("TRACKER_POOL_MAX_SIZE", Some("4".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.database_url.as_deref(), Some("postgres://env"));
        assert_eq!(settings.host, Some(IpAddr::V4(Ipv4Addr::LOCALHOST)));
        assert_eq!(settings.port, Some(5000));
        assert!(settings.public_dir.is_none());
        assert_eq!(settings.pool_max_size, Some(4));
    }
}
