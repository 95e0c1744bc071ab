use tracing::Subscriber;
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

pub fn get_subscriber(env_filter: String) -> impl Subscriber + Sync + Send {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(env_filter));
    let stderr = fmt::Layer::new().with_writer(std::io::stderr).pretty();
    Registry::default().with(env_filter).with(stderr)
}

/// Register a subscriber as global default.
///
/// It should only be called once!
pub fn init_subscriber(subscriber: impl Subscriber + Sync + Send) {
    LogTracer::init().expect("Failed to set logger");
    set_global_default(subscriber).expect("Failed to set subscriber");
}

/// Like [`init_subscriber`], but tolerates being called by every test.
pub fn try_init_subscriber(subscriber: impl Subscriber + Sync + Send) {
    let _ = LogTracer::init();
    let _ = set_global_default(subscriber);
}
