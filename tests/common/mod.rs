use std::sync::Once;

static INIT: Once = Once::new();

/// One-time environment setup shared by the ranking and CLI suites.
/// Quiets the board's per-resort debug logging with RUST_LOG=warn.
pub fn init_test_env() {
    INIT.call_once(|| {
        std::env::set_var("RUST_LOG", "warn");
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}
