//! Build-time configuration of the order desk client

/// Backend base URL baked in at build time, e.g. `BACKEND_URL=https://api.example.in trunk build`
pub const BACKEND_URL: Option<&str> = option_env!("BACKEND_URL");

/// Port of the backend when the base URL is derived from the page location
pub const DEFAULT_API_PORT: u16 = 3000;

/// localStorage key holding the current shop identifier
pub const SHOP_ID_STORAGE_KEY: &str = "shopId";

/// Currency prefix for amounts
pub const CURRENCY_SYMBOL: &str = "₹";

/// Level of messages forwarded to the browser console
pub const LOG_LEVEL: log::Level = log::Level::Debug;
