use anyhow::{bail, Context, Result};

/// Process-wide configuration, read once at startup and passed into the
/// handler explicitly rather than consulted as ambient state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Identifier of the database instance this function stops.
    pub instance_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var("INSTANCE_ID").context("INSTANCE_ID is not set")?;
        let instance_id = raw.trim().to_string();
        if instance_id.is_empty() {
            bail!("INSTANCE_ID is empty");
        }
        Ok(Self { instance_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: INSTANCE_ID is process-global, so keep all env
    // manipulation in one place.
    #[test]
    fn reads_and_trims_instance_id() {
        std::env::set_var("INSTANCE_ID", "  mydb  ");
        let config = Config::from_env().unwrap();
        assert_eq!(config.instance_id, "mydb");

        std::env::set_var("INSTANCE_ID", "   ");
        assert!(Config::from_env().is_err());

        std::env::remove_var("INSTANCE_ID");
        assert!(Config::from_env().is_err());
    }
}
