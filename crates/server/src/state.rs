use locate_core::{Config, TicketLookup};

/// Shared application state
pub struct AppState {
    config: Config,
    lookup: TicketLookup,
}

impl AppState {
    pub fn new(config: Config, lookup: TicketLookup) -> Self {
        Self { config, lookup }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn lookup(&self) -> &TicketLookup {
        &self.lookup
    }
}
