pub mod config;
pub mod fetcher;
pub mod lookup;
pub mod metrics;
pub mod render;
pub mod response;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, resolve_config_path, validate_config, Config,
    ConfigError, ServerConfig, UpstreamConfig, CONFIG_ENV_VAR,
};
pub use fetcher::{FetchError, Nc811Client, ResponseSource};
pub use lookup::{parse_ticket_list, ResultSet, TicketLookup};
pub use render::{html_escape, render_page};
pub use response::{classify, extract_rows, ResponseCategory, ResponseRow, TicketResult};
