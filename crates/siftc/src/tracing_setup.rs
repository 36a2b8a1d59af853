use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for diagnostic output.
///
/// Call this once at startup. Safe to call multiple times.
/// The filter comes from `SIFT_LOG`, then `RUST_LOG`, and defaults to
/// `warn` so skipped files are always reported. Set `SIFT_LOG_TREE=1` for
/// indented span output, e.g. `SIFT_LOG=sift_lexer=trace SIFT_LOG_TREE=1`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let directives = std::env::var("SIFT_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "warn".to_string());
        let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"));

        let registry = tracing_subscriber::registry().with(filter);
        if std::env::var_os("SIFT_LOG_TREE").is_some() {
            registry
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
