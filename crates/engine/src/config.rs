//! Engine configuration loaded from environment variables.

/// Round-counter defaults used by the `begin` verb when its flags are
/// absent.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Label of the synthetic round counter (default: `ROUND`).
    pub counter_name: String,
    /// Starting priority of the round counter (default: `101`, above any
    /// plausible initiative roll).
    pub counter_value: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            counter_name: "ROUND".to_string(),
            counter_value: 101.0,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default |
    /// |----------------------------|---------|
    /// | `ROUNDTABLE_COUNTER_NAME`  | `ROUND` |
    /// | `ROUNDTABLE_COUNTER_VALUE` | `101`   |
    pub fn from_env() -> Self {
        let counter_name = std::env::var("ROUNDTABLE_COUNTER_NAME")
            .ok()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "ROUND".to_string());

        let counter_value: f64 = std::env::var("ROUNDTABLE_COUNTER_VALUE")
            .unwrap_or_else(|_| "101".into())
            .parse()
            .expect("ROUNDTABLE_COUNTER_VALUE must be a number");

        Self {
            counter_name,
            counter_value,
        }
    }
}
