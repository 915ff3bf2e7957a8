//! Logging setup for the QRRoom binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Workspace crates whose spans and events are enabled by the default filter.
const WORKSPACE_CRATES: [&str; 3] = ["qrroom_server", "qrroom_client", "qrroom_shared"];

/// Initialize the tracing subscriber with the specified default log level.
///
/// The default filter enables every workspace crate and the binary itself at
/// `default_log_level`. `RUST_LOG` overrides it entirely when set.
///
/// # Examples
///
/// ```no_run
/// use qrroom_shared::logger::setup_logger;
///
/// setup_logger("qrroom-server", "debug");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn default_filter(binary_name: &str, default_log_level: &str) -> String {
    WORKSPACE_CRATES
        .iter()
        .copied()
        .chain(std::iter::once(binary_name))
        .map(|target| format!("{}={}", target.replace('-', "_"), default_log_level))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_covers_workspace_and_binary() {
        // テスト項目: デフォルトフィルタにワークスペースのクレートとバイナリが含まれる
        // given (前提条件):
        let binary_name = "qrroom-server";

        // when (操作):
        let filter = default_filter(binary_name, "debug");

        // then (期待する結果):
        assert_eq!(
            filter,
            "qrroom_server=debug,qrroom_client=debug,qrroom_shared=debug,qrroom_server=debug"
        );
    }
}
