use std::env;

use crate::utils::AppError;

/// Configuração lida do ambiente (.env carregado antes em main)
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub mongo_url: String,
    pub db_name: String,
    pub bcrypt_cost: u32,
    pub unique_email_index: bool,
}

impl SeedConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| AppError::MissingConfig(key.to_string()))
        };

        let mongo_url = required("MONGO_URL")?;
        let db_name = required("DB_NAME")?;

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(raw) => parse_cost(&raw)?,
            None => bcrypt::DEFAULT_COST,
        };

        let unique_email_index = lookup("SEED_UNIQUE_EMAIL_INDEX")
            .map(|raw| is_truthy(&raw))
            .unwrap_or(false);

        Ok(Self {
            mongo_url,
            db_name,
            bcrypt_cost,
            unique_email_index,
        })
    }
}

fn parse_cost(raw: &str) -> Result<u32, AppError> {
    let cost: u32 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidConfig(format!("BCRYPT_COST must be an integer, got '{}'", raw)))?;

    if !(4..=31).contains(&cost) {
        return Err(AppError::InvalidConfig(format!(
            "BCRYPT_COST must be between 4 and 31, got {}",
            cost
        )));
    }

    Ok(cost)
}

fn is_truthy(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
