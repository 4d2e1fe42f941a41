//! Environment Configuration
//!
//! Both binaries are configured through environment variables only. Missing or
//! unparsable values fall back to defaults instead of failing startup.

use crate::calc::Operator;

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const ENV_ADDR: &str = "ADDR";
pub const ENV_TIME_ADDITION: &str = "TIME_ADDITION_MS";
pub const ENV_TIME_SUBTRACTION: &str = "TIME_SUBTRACTION_MS";
pub const ENV_TIME_MULTIPLICATION: &str = "TIME_MULTIPLICATIONS_MS";
pub const ENV_TIME_DIVISION: &str = "TIME_DIVISIONS_MS";

pub const ENV_COMPUTING_POWER: &str = "COMPUTING_POWER";
pub const ENV_DELAY_MS: &str = "DELAY_MS";
pub const ENV_ORCHESTRATOR_URL: &str = "ORCHESTRATOR_URL";

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_ORCHESTRATOR_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_DELAY_MS: u64 = 1000;

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Simulated execution time per operator, in milliseconds.
///
/// The orchestrator reads the environment once at startup; every task created afterwards
/// takes its duration from that snapshot, so later changes to the variables are not seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationTimings {
    pub addition_ms: u64,
    pub subtraction_ms: u64,
    pub multiplication_ms: u64,
    pub division_ms: u64,
}

impl OperationTimings {
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    /// Builds the timings from an arbitrary key lookup; absent or unparsable keys give 0.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            addition_ms: parse_or(lookup(ENV_TIME_ADDITION), 0),
            subtraction_ms: parse_or(lookup(ENV_TIME_SUBTRACTION), 0),
            multiplication_ms: parse_or(lookup(ENV_TIME_MULTIPLICATION), 0),
            division_ms: parse_or(lookup(ENV_TIME_DIVISION), 0),
        }
    }

    pub fn for_operator(&self, op: Operator) -> u64 {
        match op {
            Operator::Add => self.addition_ms,
            Operator::Subtract => self.subtraction_ms,
            Operator::Multiply => self.multiplication_ms,
            Operator::Divide => self.division_ms,
        }
    }
}

/// Settings of the orchestrator binary.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    pub addr: SocketAddr,
    pub timings: OperationTimings,
}

impl OrchestratorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_addr = SocketAddr::from(([127, 0, 0, 1], 8080));
        let addr = match lookup(ENV_ADDR) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid {}={:?}, using {}", ENV_ADDR, raw, DEFAULT_ADDR);
                default_addr
            }),
            None => default_addr,
        };

        Self {
            addr,
            timings: OperationTimings::from_lookup(lookup),
        }
    }
}

/// Settings of the worker agent binary.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Number of concurrent polling loops.
    pub computing_power: usize,
    /// Minimum time between two polls of one loop.
    pub delay: Duration,
    pub orchestrator_url: String,
}

impl AgentConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let computing_power = parse_or(lookup(ENV_COMPUTING_POWER), 1usize).max(1);
        let delay_ms = parse_or(lookup(ENV_DELAY_MS), DEFAULT_DELAY_MS);
        let orchestrator_url = lookup(ENV_ORCHESTRATOR_URL)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_ORCHESTRATOR_URL.to_string());

        Self {
            computing_power,
            delay: Duration::from_millis(delay_ms),
            orchestrator_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_timings_parse_and_default_to_zero() {
        let timings = OperationTimings::from_lookup(lookup_from(&[
            (ENV_TIME_ADDITION, "100"),
            (ENV_TIME_SUBTRACTION, "not a number"),
            (ENV_TIME_DIVISION, " 40 "),
        ]));

        assert_eq!(timings.for_operator(Operator::Add), 100);
        assert_eq!(timings.for_operator(Operator::Subtract), 0);
        assert_eq!(timings.for_operator(Operator::Multiply), 0);
        assert_eq!(timings.for_operator(Operator::Divide), 40);
    }

    #[test]
    fn test_orchestrator_config_defaults() {
        let config = OrchestratorConfig::from_lookup(|_| None);

        assert_eq!(config.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.timings, OperationTimings::default());
    }

    #[test]
    fn test_orchestrator_config_invalid_addr_falls_back() {
        let config = OrchestratorConfig::from_lookup(lookup_from(&[(ENV_ADDR, "nowhere")]));

        assert_eq!(config.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_agent_config() {
        let config = AgentConfig::from_lookup(lookup_from(&[
            (ENV_COMPUTING_POWER, "0"),
            (ENV_DELAY_MS, "250"),
            (ENV_ORCHESTRATOR_URL, "http://10.0.0.5:9000/"),
        ]));

        assert_eq!(config.computing_power, 1);
        assert_eq!(config.delay, Duration::from_millis(250));
        assert_eq!(config.orchestrator_url, "http://10.0.0.5:9000");

        let defaults = AgentConfig::from_lookup(|_| None);
        assert_eq!(defaults.computing_power, 1);
        assert_eq!(defaults.delay, Duration::from_millis(1000));
        assert_eq!(defaults.orchestrator_url, "http://127.0.0.1:8080");
    }
}
