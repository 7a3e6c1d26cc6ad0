//! # Configuration
//!
//! Read from `CAFE_*` environment variables; everything has a default, so an
//! empty environment runs fully in-process.
//!
//! | Variable | Default |
//! |---|---|
//! | `CAFE_CAFE_NAME` | `Acir Cafe` |
//! | `CAFE_MESSENGER_PAGE_ID` | `61579693577478` |
//! | `CAFE_API_URL`, `CAFE_API_KEY` | unset: in-process order desk |
//! | `CAFE_CLOUDINARY_CLOUD_NAME`, `CAFE_CLOUDINARY_UPLOAD_PRESET` | unset: no receipt uploads |
//! | `CAFE_RECEIPT_MAX_WIDTH` | `1200` |
//! | `CAFE_RECEIPT_QUALITY` | `80` |
//! | `CAFE_COUNTDOWN_SECS` | `5` |
//! | `CAFE_HTTP_TIMEOUT_SECS` | `10` |

use crate::checkout::{CheckoutServices, CheckoutSettings, DEFAULT_MESSENGER_PAGE_ID};
use crate::clients::OrderClient;
use crate::services::{
    ActorOrderService, ApiClient, CloudinaryUploader, OrderService, PaymentMethodSource,
    ReceiptUploader, RestOrderService, RestPaymentMethods, ServiceError, StaticPaymentMethods,
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

const PREFIX: &str = "CAFE_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment: {0}")]
    Env(#[from] envy::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CafeConfig {
    #[serde(default = "default_cafe_name")]
    pub cafe_name: String,
    #[serde(default = "default_page_id")]
    pub messenger_page_id: String,
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub cloudinary_cloud_name: Option<String>,
    pub cloudinary_upload_preset: Option<String>,
    #[serde(default = "default_receipt_max_width")]
    pub receipt_max_width: u32,
    #[serde(default = "default_receipt_quality")]
    pub receipt_quality: u8,
    #[serde(default = "default_countdown_secs")]
    pub countdown_secs: u64,
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

fn default_cafe_name() -> String {
    "Acir Cafe".to_string()
}

fn default_page_id() -> String {
    DEFAULT_MESSENGER_PAGE_ID.to_string()
}

fn default_receipt_max_width() -> u32 {
    1200
}

fn default_receipt_quality() -> u8 {
    80
}

fn default_countdown_secs() -> u64 {
    5
}

fn default_http_timeout_secs() -> u64 {
    10
}

impl CafeConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::validate(envy::prefixed(PREFIX).from_env()?)
    }

    /// Same as [`CafeConfig::from_env`], from explicit `(name, value)` pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self::validate(envy::prefixed(PREFIX).from_iter(vars)?)
    }

    fn validate(config: Self) -> Result<Self, ConfigError> {
        if config.cafe_name.trim().is_empty() {
            return Err(ConfigError::Invalid("cafe name must not be empty".into()));
        }
        if config.receipt_max_width == 0 {
            return Err(ConfigError::Invalid("receipt max width must be positive".into()));
        }
        if !(1..=100).contains(&config.receipt_quality) {
            return Err(ConfigError::Invalid(format!(
                "receipt quality {} is outside 1-100",
                config.receipt_quality
            )));
        }
        info!(
            cafe = %config.cafe_name,
            api = config.api_url.as_deref().unwrap_or("in-process"),
            uploads = config.cloudinary_cloud_name.is_some(),
            "Configuration loaded"
        );
        Ok(config)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn checkout_settings(&self) -> CheckoutSettings {
        CheckoutSettings {
            cafe_name: self.cafe_name.clone(),
            messenger_page_id: self.messenger_page_id.clone(),
            receipt_max_width: self.receipt_max_width,
            receipt_quality: self.receipt_quality,
            counter_countdown: Duration::from_secs(self.countdown_secs),
        }
    }

    /// REST order API when `api_url` is set, otherwise the in-process desk.
    /// Cloudinary uploads need both the cloud name and the upload preset.
    pub fn services(&self, desk: &OrderClient) -> Result<CheckoutServices, ConfigError> {
        let orders: Arc<dyn OrderService>;
        let payment_methods: Arc<dyn PaymentMethodSource>;
        match &self.api_url {
            Some(url) => {
                let api = ApiClient::new(url.as_str(), self.api_key.clone(), self.http_timeout())?;
                orders = Arc::new(RestOrderService::new(api.clone()));
                payment_methods = Arc::new(RestPaymentMethods::new(api));
            }
            None => {
                orders = Arc::new(ActorOrderService::new(desk.clone()));
                payment_methods = Arc::new(StaticPaymentMethods::e_wallets(&self.cafe_name));
            }
        }

        let uploader = match (&self.cloudinary_cloud_name, &self.cloudinary_upload_preset) {
            (Some(cloud), Some(preset)) => {
                let cloudinary = CloudinaryUploader::new(cloud, preset.clone(), self.http_timeout())?;
                Some(Arc::new(cloudinary) as Arc<dyn ReceiptUploader>)
            }
            (None, None) => None,
            _ => {
                warn!("Cloudinary needs both cloud name and upload preset, uploads disabled");
                None
            }
        };

        Ok(CheckoutServices {
            orders,
            uploader,
            payment_methods,
        })
    }
}
