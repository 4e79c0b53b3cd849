//! HTTP server configuration object.

use std::net::SocketAddr;

use bullburger::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) seed_menu: bool,
}

impl ServerConfig {
    /// Volatile in-memory stores on `bind_addr`; menu seeding enabled.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            seed_menu: true,
        }
    }

    /// Use the PostgreSQL repositories backed by `pool`.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Whether an empty durable catalogue receives the default menu. The
    /// in-memory catalogue is always seeded.
    #[must_use]
    pub fn with_seed_menu(mut self, seed_menu: bool) -> Self {
        self.seed_menu = seed_menu;
        self
    }

    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Exercised by unit tests; retained for fixture access")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn defaults_to_memory_store_with_seeding() {
        let addr: SocketAddr = "127.0.0.1:0".parse().expect("literal");
        let config = ServerConfig::new(addr).with_seed_menu(false);
        assert_eq!(config.bind_addr(), addr);
        assert!(config.db_pool.is_none());
        assert!(!config.seed_menu);
    }
}
