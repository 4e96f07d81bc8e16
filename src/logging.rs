use tracing::subscriber::SetGlobalDefaultError;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Compact `fmt` subscriber writing to `writer`: level, then the message.
///
/// No timestamp or target, so a progress event prints as
/// ` INFO Train loss: 0.2461` (prefixed by the names of any open spans).
pub fn progress_subscriber<W>(filter: EnvFilter, writer: W, ansi: bool) -> impl Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(ansi)
        .with_writer(writer)
        .finish()
}

/// Installs [`progress_subscriber`] on stdout as the global default.
///
/// The level comes from `RUST_LOG` and falls back to `info`, which is enough
/// to see the periodic `Train loss:` lines.
pub fn install_logger() -> Result<(), SetGlobalDefaultError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(progress_subscriber(filter, std::io::stdout, true))
}
