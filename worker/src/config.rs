/// Runtime configuration, loaded from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_url: String,
    pub redis_url: String,
    pub redis_queue: String,
    pub worker_count: usize,
    pub job_buffer_size: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    MissingVar(&'static str),
}

const DEFAULT_QUEUE: &str = "aggregate_matches";
const DEFAULT_WORKER_COUNT: usize = 4;
const DEFAULT_JOB_BUFFER_SIZE: usize = 100;

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let db_url = required_var("DB_URL")?;
        let redis_url = required_var("REDIS_URL")?;

        let redis_queue = std::env::var("REDIS_QUEUE")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_QUEUE.to_owned());

        Ok(Self {
            db_url,
            redis_url,
            redis_queue,
            worker_count: env_usize("WORKER_COUNT", DEFAULT_WORKER_COUNT).max(1),
            job_buffer_size: env_usize("JOB_BUFFER_SIZE", DEFAULT_JOB_BUFFER_SIZE).max(1),
        })
    }
}

fn required_var(key: &'static str) -> Result<String, ConfigError> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingVar(key))
}

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_db_url_is_rejected() {
        std::env::remove_var("DB_URL");
        std::env::set_var("REDIS_URL", "redis://localhost");

        assert_eq!(Config::from_env(), Err(ConfigError::MissingVar("DB_URL")));
    }

    #[test]
    fn unparsable_numbers_fall_back_to_defaults() {
        std::env::set_var("TEST_WORKER_COUNT_GARBAGE", "not-a-number");
        assert_eq!(env_usize("TEST_WORKER_COUNT_GARBAGE", 4), 4);
        assert_eq!(env_usize("TEST_WORKER_COUNT_UNSET", 100), 100);
    }
}
