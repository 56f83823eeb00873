//! Log setup. Logs go to stderr; stdout carries reports only.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. `RUST_LOG` overrides the flags.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose, quiet)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn default_directives(verbose: u8, quiet: bool) -> String {
    if quiet {
        return "off".to_string();
    }
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,sdkgen={}", level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives(0, false), "warn,sdkgen=warn");
        assert_eq!(default_directives(2, false), "warn,sdkgen=debug");
        assert_eq!(default_directives(7, false), "warn,sdkgen=trace");
        assert_eq!(default_directives(3, true), "off");
    }
}
