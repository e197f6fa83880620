use std::path::PathBuf;

use clap::Parser;

/// GameBot: a board-game assistant served over WebSocket.
#[derive(Parser, Debug)]
#[command(name = "gamebot", version, about)]
pub struct Args {
    /// Port to listen on (overrides `server.port`).
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override, e.g. `gamebot=debug`.
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from([
            "gamebot",
            "--port",
            "9000",
            "--config",
            "/tmp/gamebot.toml",
            "--log-level",
            "gamebot=debug",
        ])
        .unwrap();
        assert_eq!(args.port, Some(9000));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/gamebot.toml")));
        assert_eq!(args.log_level.as_deref(), Some("gamebot=debug"));
    }

    #[test]
    fn everything_is_optional() {
        let args = Args::try_parse_from(["gamebot"]).unwrap();
        assert!(args.port.is_none());
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
    }
}
