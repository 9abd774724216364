//! HTTP server configuration object.

use std::net::SocketAddr;

use directory::outbound::persistence::DbPool;

/// Everything [`super::create_server`] needs to wire the application.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self { bind_addr, db_pool }
    }
}
