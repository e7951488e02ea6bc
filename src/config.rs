use std::net::SocketAddr;

#[derive(Clone, Debug)]
pub struct CampConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: String,
    pub port: u16,
    pub run_migrations: bool,
}

impl CampConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // same as from_env, but reads values through `lookup` so tests don't touch the process env
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // DB_URI is the older name for the connection string, still honoured
        let database_url = lookup("DATABASE_URL")
            .or_else(|| lookup("DB_URI"))
            .unwrap_or_else(|| "sqlite://app.db".to_string());

        let max_connections = lookup("MAX_CONNECTIONS")
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(15);

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = lookup("PORT")
            .and_then(|val| val.parse::<u16>().ok())
            .unwrap_or(5555);

        let run_migrations = lookup("RUN_MIGRATIONS")
            .map(|val| val != "false")
            .unwrap_or(true);

        Self {
            database_url,
            max_connections,
            bind_addr,
            port,
            run_migrations,
        }
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.bind_addr, self.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("Invalid listen address {}: {}", addr, e))
    }
}
