use serde::Deserialize;
use std::env;
use std::path::Path;
use storefront_shared::OrderLine;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub storefront: StorefrontConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            allowed_origins: default_allowed_origins(),
        }
    }
}

fn default_port() -> u16 { 8000 }
fn default_allowed_origins() -> Vec<String> { vec!["http://localhost:3000".to_string()] }

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub request_timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: None,
        }
    }
}

fn default_base_url() -> String { "http://localhost:8000".to_string() }

/// The order the storefront submits on "Create Order"
#[derive(Debug, Deserialize, Clone)]
pub struct StorefrontConfig {
    #[serde(default = "default_customer_id")]
    pub customer_id: String,
    #[serde(default = "default_order_lines")]
    pub order_lines: Vec<DraftLine>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            customer_id: default_customer_id(),
            order_lines: default_order_lines(),
        }
    }
}

impl StorefrontConfig {
    pub fn lines(&self) -> Vec<OrderLine> {
        self.order_lines
            .iter()
            .map(|line| OrderLine::new(line.product_id.clone(), line.quantity))
            .collect()
    }
}

// Config keys are snake_case; the camelCase wire form lives on OrderLine.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DraftLine {
    pub product_id: String,
    pub quantity: u32,
}

fn default_customer_id() -> String { "123".to_string() }
fn default_order_lines() -> Vec<DraftLine> {
    vec![DraftLine { product_id: "1".to_string(), quantity: 1 }]
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let file = |name: &str| {
            config::File::with_name(&dir.join(name).to_string_lossy()).required(false)
        };

        let s = config::Config::builder()
            .add_source(file("default"))
            .add_source(file(&run_mode))
            // Not checked in
            .add_source(file("local"))
            // Eg.. `STOREFRONT__SERVER__PORT=9000`
            .add_source(
                config::Environment::with_prefix("STOREFRONT")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_any_source() {
        let config = Config::load_from(Path::new("does-not-exist")).unwrap();

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.allowed_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.client.base_url, "http://localhost:8000");
        assert_eq!(config.client.request_timeout_ms, None);
        assert_eq!(config.storefront.customer_id, "123");
        assert_eq!(config.storefront.lines(), vec![OrderLine::new("1", 1)]);
    }

    #[test]
    fn test_shipped_config_has_no_request_timeout() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../config");
        let config = Config::load_from(&dir).unwrap();

        assert_eq!(config.client.base_url, "http://localhost:8000");
        assert_eq!(config.client.request_timeout_ms, None);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let toml = r#"
            [server]
            port = 9100

            [client]
            base_url = "http://shop.internal:9100"
            request_timeout_ms = 2500

            [[storefront.order_lines]]
            product_id = "3"
            quantity = 2

            [[storefront.order_lines]]
            product_id = "5"
            quantity = 1
        "#;

        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.allowed_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.client.base_url, "http://shop.internal:9100");
        assert_eq!(config.client.request_timeout_ms, Some(2500));
        assert_eq!(config.storefront.customer_id, "123");
        assert_eq!(
            config.storefront.lines(),
            vec![OrderLine::new("3", 2), OrderLine::new("5", 1)]
        );
    }
}
