use std::time::Duration;
use tracing::warn;

/// ## Interpreter settings
///
/// Canvas extents center the turtle and bound `RANDOM` coordinates.
/// `random_max` bounds `RANDOM` distances and angles and `colour_max`
/// bounds `RANDOM` colour channels.

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub delay: Duration,
    pub random_max: u32,
    pub colour_max: u32,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 800,
            height: 600,
            delay: Duration::from_millis(20),
            random_max: 500,
            colour_max: 256,
            seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(width) = parse(&lookup, "TURTLE_WIDTH") {
            config.width = width;
        }
        if let Some(height) = parse(&lookup, "TURTLE_HEIGHT") {
            config.height = height;
        }
        if let Some(ms) = parse(&lookup, "TURTLE_DELAY_MS") {
            config.delay = Duration::from_millis(ms);
        }
        if let Some(max) = parse(&lookup, "TURTLE_RANDOM_MAX") {
            config.random_max = max;
        }
        config.seed = parse(&lookup, "TURTLE_SEED");
        config
    }

    /// Canvas center. Halves are integer halves.
    pub fn center(&self) -> (f64, f64) {
        ((self.width / 2) as f64, (self.height / 2) as f64)
    }
}

fn parse<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + Default + PartialEq,
{
    let value = lookup(key)?;
    match value.trim().parse::<T>() {
        Ok(v) if may_be_zero(key) || v != T::default() => Some(v),
        _ => {
            warn!(key, value = value.as_str(), "ignoring unusable setting");
            None
        }
    }
}

// Zero extents or bounds would divide by zero in the random draws.
fn may_be_zero(key: &str) -> bool {
    key == "TURTLE_DELAY_MS" || key == "TURTLE_SEED"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = lookup(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.center(), (400.0, 300.0));
    }

    #[test]
    fn test_overrides() {
        let config = lookup(&[
            ("TURTLE_WIDTH", "101"),
            ("TURTLE_DELAY_MS", "0"),
            ("TURTLE_SEED", "42"),
        ]);
        assert_eq!(config.width, 101);
        assert_eq!(config.center().0, 50.0);
        assert_eq!(config.delay, Duration::from_millis(0));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_bad_values_are_ignored() {
        let config = lookup(&[("TURTLE_HEIGHT", "tall"), ("TURTLE_RANDOM_MAX", "0")]);
        assert_eq!(config.height, 600);
        assert_eq!(config.random_max, 500);
    }

    #[test]
    fn test_zero_is_rejected_in_any_spelling() {
        let config = lookup(&[("TURTLE_WIDTH", "00"), ("TURTLE_HEIGHT", "+0")]);
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        let config = lookup(&[("TURTLE_SEED", "000")]);
        assert_eq!(config.seed, Some(0));
    }
}
