//! Environment-driven configuration.
//!
//! Configuration is resolved in two stages. [`EnvConfig::read`] pulls the
//! target identifier and prompt from the environment and fails fast when no
//! identifier is present. [`EnvConfig::with_region`] then folds in the region
//! found by the ambient AWS resolution chain, substituting [`DEFAULT_REGION`]
//! when there is none. The result is a [`ProbeConfig`] that is never mutated
//! afterwards.

use std::collections::HashMap;

/// Primary environment variable holding the inference profile identifier.
pub const PROFILE_ARN_VAR: &str = "BEDROCK_INFERENCE_PROFILE_ARN";

/// Fallback environment variable holding the inference profile identifier.
pub const FALLBACK_PROFILE_ARN_VAR: &str = "INFERENCE_PROFILE_ARN";

/// Environment variable overriding the prompt text.
pub const PROMPT_VAR: &str = "PROMPT";

/// Prompt used when [`PROMPT_VAR`] is unset.
pub const DEFAULT_PROMPT: &str = "Say hello in one short sentence.";

/// Region used when the ambient AWS configuration has none.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Errors raised while resolving configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither identifier variable is set to a non-empty value.
    #[error("{} env var is not set.", PROFILE_ARN_VAR)]
    MissingProfileArn,
}

/// Read-only view of process environment variables.
pub trait EnvSource {
    /// Returns the value of `key`, or `None` if it is unset or not unicode.
    fn var(&self, key: &str) -> Option<String>;
}

/// [`EnvSource`] backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for [(&str, &str)] {
    fn var(&self, key: &str) -> Option<String> {
        self.iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| (*value).to_string())
    }
}

/// Settings read directly from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    /// Inference profile ARN or other model identifier.
    pub target: String,
    /// Prompt text sent to the model.
    pub prompt: String,
}

impl EnvConfig {
    /// Reads the target identifier and prompt.
    ///
    /// The identifier comes from the first non-empty of [`PROFILE_ARN_VAR`]
    /// and [`FALLBACK_PROFILE_ARN_VAR`]. A set but empty [`PROMPT_VAR`] is
    /// taken as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingProfileArn`] if no identifier is set.
    pub fn read<E: EnvSource + ?Sized>(env: &E) -> Result<Self, ConfigError> {
        let target = [PROFILE_ARN_VAR, FALLBACK_PROFILE_ARN_VAR]
            .into_iter()
            .filter_map(|key| env.var(key))
            .find(|value| !value.is_empty())
            .ok_or(ConfigError::MissingProfileArn)?;

        let prompt = env
            .var(PROMPT_VAR)
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string());

        Ok(Self { target, prompt })
    }

    /// Completes the configuration with the ambient region, if any.
    #[must_use]
    pub fn with_region(self, ambient: Option<String>) -> ProbeConfig {
        let (region, region_source) = match ambient.filter(|region| !region.is_empty()) {
            Some(region) => (region, RegionSource::Ambient),
            None => (DEFAULT_REGION.to_string(), RegionSource::Default),
        };

        ProbeConfig {
            target: self.target,
            prompt: self.prompt,
            region,
            region_source,
        }
    }
}

/// Where the resolved region came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionSource {
    /// The standard AWS resolution chain (env, profile, IMDS).
    Ambient,
    /// Nothing was configured and [`DEFAULT_REGION`] was substituted.
    Default,
}

/// Fully resolved probe configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Inference profile ARN or other model identifier.
    pub target: String,
    /// Prompt text sent to the model.
    pub prompt: String,
    /// AWS region all clients are built for.
    pub region: String,
    /// Origin of [`ProbeConfig::region`].
    pub region_source: RegionSource,
}

impl ProbeConfig {
    /// Returns `true` if the region was substituted rather than configured.
    #[must_use]
    pub fn region_defaulted(&self) -> bool {
        self.region_source == RegionSource::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARN: &str = "arn:aws:bedrock:us-east-1:123456789012:inference-profile/my-profile";

    #[test]
    fn primary_variable_wins() {
        let env = [
            (PROFILE_ARN_VAR, ARN),
            (FALLBACK_PROFILE_ARN_VAR, "other"),
        ];
        let config = EnvConfig::read(&env[..]).unwrap();
        assert_eq!(config.target, ARN);
    }

    #[test]
    fn fallback_variable_used_when_primary_unset() {
        let env = [(FALLBACK_PROFILE_ARN_VAR, ARN)];
        let config = EnvConfig::read(&env[..]).unwrap();
        assert_eq!(config.target, ARN);
    }

    #[test]
    fn empty_primary_falls_through() {
        let env = [(PROFILE_ARN_VAR, ""), (FALLBACK_PROFILE_ARN_VAR, ARN)];
        let config = EnvConfig::read(&env[..]).unwrap();
        assert_eq!(config.target, ARN);
    }

    #[test]
    fn missing_identifier_is_an_error() {
        let env: [(&str, &str); 1] = [(PROMPT_VAR, "hi")];
        assert_eq!(
            EnvConfig::read(&env[..]),
            Err(ConfigError::MissingProfileArn)
        );
    }

    #[test]
    fn prompt_defaults_and_overrides() {
        let env = [(PROFILE_ARN_VAR, ARN)];
        assert_eq!(EnvConfig::read(&env[..]).unwrap().prompt, DEFAULT_PROMPT);

        let env = [(PROFILE_ARN_VAR, ARN), (PROMPT_VAR, "Count to three.")];
        assert_eq!(
            EnvConfig::read(&env[..]).unwrap().prompt,
            "Count to three."
        );
    }

    #[test]
    fn hashmap_env_source() {
        let mut env = HashMap::new();
        env.insert(FALLBACK_PROFILE_ARN_VAR.to_string(), ARN.to_string());
        assert_eq!(EnvConfig::read(&env).unwrap().target, ARN);
    }

    #[test]
    fn region_defaults_when_absent_or_empty() {
        let base = EnvConfig {
            target: ARN.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        };

        let config = base.clone().with_region(None);
        assert_eq!(config.region, DEFAULT_REGION);
        assert!(config.region_defaulted());

        let config = base.clone().with_region(Some(String::new()));
        assert!(config.region_defaulted());

        let config = base.with_region(Some("eu-west-1".to_string()));
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.region_source, RegionSource::Ambient);
    }

    #[test]
    fn missing_identifier_message_names_variable() {
        let message = ConfigError::MissingProfileArn.to_string();
        assert!(message.contains(PROFILE_ARN_VAR));
    }
}
