use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::LabError;

/// Runtime settings. Every field can be overridden with a `SQLI_LAB_` prefixed
/// environment variable, e.g. `SQLI_LAB_LISTEN_ADDR=127.0.0.1:9000`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub listen_addr: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, LabError> {
        Self::figment().extract().map_err(LabError::from)
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed("SQLI_LAB_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_env() {
        figment::Jail::expect_with(|_jail| {
            let cfg: Config = Config::figment().extract()?;
            assert_eq!(cfg, Config::default());
            Ok(())
        });
    }

    #[test]
    fn env_overrides_listen_addr() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("SQLI_LAB_LISTEN_ADDR", "127.0.0.1:9000");
            jail.set_env("SQLI_LAB_LOGLEVEL", "debug");
            let cfg: Config = Config::figment().extract()?;
            assert_eq!(cfg.listen_addr, "127.0.0.1:9000");
            assert_eq!(cfg.loglevel, "debug");
            Ok(())
        });
    }
}
