use tracing::subscriber::SetGlobalDefaultError;
use tracing::Level;

/// Initialize logging with the given level.
///
/// The parser logs every dispatch to a denotation at the `DEBUG` level and
/// every rule lookup at the `TRACE` level. Binaries built on this crate can
/// call this function to see those logs; the crate itself never installs a
/// subscriber.
pub fn init_subscriber(level: Level) -> Result<(), SetGlobalDefaultError> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_test_writer()
        .without_time()
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
