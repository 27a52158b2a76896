use crate::error::AppError;
use crate::region::Region;
use std::env;

pub const DEFAULT_BACKEND: &str = "http://127.0.0.1:3000";
pub const DEFAULT_ASSET_BASE: &str = "./league_data/img";
pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const DEFAULT_IMAGE_RATE: u32 = 20;

#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
    pub region: Region,
    pub asset_base: String,
    pub page_size: usize,
    /// Upper bound on image loads per second during preloading.
    pub image_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            backend_url: DEFAULT_BACKEND.to_string(),
            region: Region::Na,
            asset_base: DEFAULT_ASSET_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            image_rate: DEFAULT_IMAGE_RATE,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        let backend_url =
            env::var("LEAGUE_FINDER_BACKEND").unwrap_or(defaults.backend_url);

        let region = match env::var("LEAGUE_FINDER_REGION") {
            Ok(code) => code.parse()?,
            Err(_) => defaults.region,
        };

        let asset_base = env::var("LEAGUE_FINDER_ASSETS").unwrap_or(defaults.asset_base);

        let page_size = match env::var("LEAGUE_FINDER_PAGE_SIZE") {
            Ok(raw) => parse_positive("LEAGUE_FINDER_PAGE_SIZE", &raw)?,
            Err(_) => defaults.page_size,
        };

        let image_rate = match env::var("LEAGUE_FINDER_IMAGE_RATE") {
            Ok(raw) => parse_positive("LEAGUE_FINDER_IMAGE_RATE", &raw)?,
            Err(_) => defaults.image_rate,
        };

        Ok(Config {
            backend_url,
            region,
            asset_base,
            page_size,
            image_rate,
        })
    }
}

fn parse_positive<T>(name: &str, raw: &str) -> Result<T, AppError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Ok(value),
        _ => Err(AppError::ConfigError(format!(
            "{} must be a positive integer, got `{}`",
            name, raw
        ))),
    }
}
