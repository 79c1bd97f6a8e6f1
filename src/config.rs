use crate::model::{CatalogItem, ConfigError, ReferenceProduct};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize)]
pub struct ItemConfig {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub link: String,
    #[serde(default)]
    pub urls_to_check: Vec<String>,
}

impl From<ItemConfig> for CatalogItem {
    fn from(cfg: ItemConfig) -> Self {
        CatalogItem {
            product: ReferenceProduct::new(cfg.id, cfg.title, cfg.price, cfg.link),
            urls_to_check: cfg.urls_to_check,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub items: Vec<ItemConfig>,
    #[serde(default)]
    pub expected_matches: Option<usize>,
    #[serde(default)]
    pub report_format: ReportFormat,
}

impl AppConfig {
    pub fn links_to_check(&self) -> usize {
        self.items.iter().map(|i| i.urls_to_check.len()).sum()
    }

    /// Consumes the config, yielding the catalog items in file order.
    pub fn into_items(self) -> Vec<CatalogItem> {
        self.items.into_iter().map(CatalogItem::from).collect()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut ids = HashSet::new();
        for item in &self.items {
            if !ids.insert(item.id) {
                return Err(ConfigError::Invalid(format!("duplicate product id {}", item.id)));
            }
            if !item.price.is_finite() || item.price < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "product {} has invalid price {}",
                    item.id, item.price
                )));
            }
        }

        if let Some(expected) = self.expected_matches {
            let total = self.links_to_check();
            if expected > total {
                return Err(ConfigError::Invalid(format!(
                    "expected_matches ({}) exceeds the number of links to check ({})",
                    expected, total
                )));
            }
        }

        Ok(())
    }
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(content)?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}
