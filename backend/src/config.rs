use clap::Parser;
use std::net::SocketAddr;

#[derive(Debug, Clone, Parser)]
#[command(name = "user-search", about = "SQL injection demo: concatenated vs. bound user search")]
pub struct Config {
    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite::memory:")]
    pub database_url: String,

    #[arg(long, env = "USER_SEARCH_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Ignored for in-memory databases, which always use one connection
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Skip inserting the demo users and secrets
    #[arg(long, env = "USER_SEARCH_NO_SEED")]
    pub no_seed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Config::command().debug_assert();
    }

    #[test]
    fn test_explicit_flags() {
        let config = Config::try_parse_from([
            "user-search",
            "--database-url",
            "sqlite://users.db",
            "--bind",
            "127.0.0.1:8080",
            "--max-connections",
            "2",
            "--no-seed",
        ])
        .unwrap();

        assert_eq!(config.database_url, "sqlite://users.db");
        assert_eq!(config.bind, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.max_connections, 2);
        assert!(config.no_seed);
    }

    #[test]
    fn test_rejects_bad_bind_address() {
        let result = Config::try_parse_from(["user-search", "--bind", "not-an-address"]);
        assert!(result.is_err());
    }
}
