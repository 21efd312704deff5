use crate::error::LoginErrorEnum;
use std::fmt::Display;
use tracing::{subscriber, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Build the subscriber: env filter, JSON span storage, bunyan output to `sink`.
///
/// `RUST_LOG` wins over `env_filter` when it is set.
pub fn get_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name, sink);
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Install `subscriber` for the whole process and route `log` records
/// (reqwest, hyper) into it.
///
/// It should only be called once!
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> Result<(), LoginErrorEnum> {
    LogTracer::init().map_err(|e| {
        tracing::error!("Failed to set logger");
        LoginErrorEnum::SetLoggerError(e)
    })?;
    subscriber::set_global_default(subscriber).map_err(|e| {
        tracing::error!("Failed to set subscriber");
        LoginErrorEnum::SetSubscriberError(e)
    })?;
    Ok(())
}

/// Fill in a field declared as `tracing::field::Empty` on the current span.
pub fn record_field<T: Display + ?Sized>(name: &str, value: &T) {
    tracing::Span::current().record(name, &tracing::field::display(value));
}
