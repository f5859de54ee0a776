use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use bot_logger::config::Config;
use bot_logger::logging::{self, BotLogLayer, BotLogger, Severity};

/// Split an optional `level:` prefix off a stdin line
fn parse_line(line: &str) -> (Severity, &str) {
    if let Some((prefix, rest)) = line.split_once(':') {
        if let Some(severity) = Severity::from_name(prefix.trim()) {
            return (severity, rest.trim_start());
        }
    }
    (Severity::Info, line)
}

#[tokio::main]
async fn main() -> Result<()> {
    let (config, rejected_overrides) = Config::load()?;

    let logger = Arc::new(BotLogger::new());
    logger.set_write_error_hook(|err| eprintln!("bot-logger: {}", err));

    // Initialize before any tracing calls so nothing is lost
    logger
        .init(&config.log_dir, config.severity())
        .context("Failed to initialize logging")?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(BotLogLayer::new(Arc::clone(&logger)))
        .init();

    for rejected in &rejected_overrides {
        tracing::warn!("{}", rejected);
    }

    match logging::cleanup_old_logs_with_retention(&config.log_dir, config.retention_days) {
        Ok(count) if count > 0 => tracing::info!("Cleaned up {} old log files", count),
        Ok(_) => {}
        Err(e) => tracing::warn!("Log cleanup failed: {:#}", e),
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line.context("Failed to read stdin")? {
                    Some(line) if line.trim().is_empty() => {}
                    Some(line) => {
                        let (severity, message) = parse_line(&line);
                        logger.log(severity, format_args!("{}", message));
                    }
                    None => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted, shutting down");
                break;
            }
        }
    }

    logger.close();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_with_prefix() {
        assert_eq!(parse_line("warn: disk almost full"), (Severity::Warn, "disk almost full"));
        assert_eq!(parse_line("error:boom"), (Severity::Error, "boom"));
        assert_eq!(parse_line("debug: a: b"), (Severity::Debug, "a: b"));
    }

    #[test]
    fn test_parse_line_without_prefix() {
        assert_eq!(parse_line("deploy finished"), (Severity::Info, "deploy finished"));
        assert_eq!(
            parse_line("yt-dlp: health check ok"),
            (Severity::Info, "yt-dlp: health check ok")
        );
    }
}
