use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Install the stderr log layer.
///
/// `--quiet` and `--verbose` win over `RUST_LOG`; otherwise `RUST_LOG` is
/// honoured and warnings are shown by default.
pub(crate) fn init(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let layer = fmt::layer().without_time().with_target(false).with_writer(std::io::stderr);

    // A subscriber may already be installed when embedded in another program.
    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}
