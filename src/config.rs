use std::env;

/// Fixed delay of the simulated submission backend, in milliseconds.
const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;

pub struct AppConfig {
    pub bind_addr: String,
    pub submit_delay_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr =
            env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

        let submit_delay_ms = match env::var("SUBMIT_DELAY_MS") {
            Ok(val) => match val.parse() {
                Ok(ms) => ms,
                Err(_) => {
                    log::warn!(
                        "SUBMIT_DELAY_MS is not a number ({val}) — using default {DEFAULT_SUBMIT_DELAY_MS}"
                    );
                    DEFAULT_SUBMIT_DELAY_MS
                }
            },
            Err(_) => DEFAULT_SUBMIT_DELAY_MS,
        };

        Self {
            bind_addr,
            submit_delay_ms,
        }
    }
}
