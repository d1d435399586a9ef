// src/config/consts.rs

// Net config
pub const MAIN_DOC_URL: &str = "https://docs.python.org/3/";
pub const PEP_URL: &str = "https://peps.python.org/";
pub const USER_AGENT: &str = concat!("pydocs_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Local cache
pub const STORE_DIR: &str = ".store";
pub const HTTP_CACHE_SUBDIR: &str = "http_cache";

// Logs
pub const LOG_DIR: &str = "logs";
pub const LOG_FILE: &str = "parser.log";

// Export
pub const DOWNLOADS_DIR: &str = "downloads";
pub const RESULTS_DIR: &str = "results";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";
pub const RESULTS_DELIM: char = ',';
