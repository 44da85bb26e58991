//! CLI argument definitions for the Swift side.

use clap::Args;
use verify_core::{Result, VerifyError};

/// Swift connection options.
#[derive(Args, Clone, Debug, Default)]
pub struct SwiftOpts {
    /// Swift auth URL (v1 auth, e.g. http://swift:8080/auth/v1.0)
    #[arg(long, env = "SWIFT_AUTH_URL")]
    pub auth_url: Option<String>,

    /// Swift account (user), e.g. "test:tester"
    #[arg(long, env = "SWIFT_ACCOUNT")]
    pub account: Option<String>,

    /// Swift container to verify
    #[arg(long, env = "SWIFT_CONTAINER")]
    pub container: Option<String>,

    /// Swift account password
    #[arg(long, env = "SWIFT_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Check SLO ETags. Enable if the container holds Static Large Objects
    #[arg(long, overrides_with = "no_check_slo")]
    pub check_slo: bool,

    /// Do not check whether objects are SLOs
    #[arg(long, overrides_with = "check_slo")]
    pub no_check_slo: bool,
}

/// Validated Swift settings.
#[derive(Clone, Debug)]
pub struct SwiftConfig {
    pub auth_url: String,
    pub account: String,
    pub container: String,
    pub key: String,
    pub check_slo: bool,
}

impl SwiftOpts {
    /// Check that every connection parameter is present.
    pub fn into_config(self) -> Result<SwiftConfig> {
        let check_slo = self.check_slo && !self.no_check_slo;
        Ok(SwiftConfig {
            auth_url: required(self.auth_url, "--auth-url")?,
            account: required(self.account, "--account")?,
            container: required(self.container, "--container")?,
            key: required(self.key, "--key")?,
            check_slo,
        })
    }
}

fn required(value: Option<String>, flag: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(VerifyError::Configuration(format!("{flag} is required"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> SwiftOpts {
        SwiftOpts {
            auth_url: Some("http://swift:8080/auth/v1.0".to_string()),
            account: Some("test:tester".to_string()),
            container: Some("photos".to_string()),
            key: Some("testing".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_into_config_complete() {
        let config = complete().into_config().unwrap();
        assert_eq!(config.account, "test:tester");
        assert_eq!(config.container, "photos");
        assert!(!config.check_slo);
    }

    #[test]
    fn test_into_config_missing_container() {
        let opts = SwiftOpts {
            container: None,
            ..complete()
        };
        let err = opts.into_config().unwrap_err();
        assert!(matches!(err, VerifyError::Configuration(ref m) if m.contains("--container")));
    }

    #[test]
    fn test_into_config_empty_key() {
        let opts = SwiftOpts {
            key: Some(String::new()),
            ..complete()
        };
        assert!(opts.into_config().is_err());
    }

    #[test]
    fn test_no_check_slo_wins() {
        let opts = SwiftOpts {
            check_slo: true,
            no_check_slo: true,
            ..complete()
        };
        assert!(!opts.into_config().unwrap().check_slo);
    }
}
