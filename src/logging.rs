/// Logging setup for the binary
///
/// Library code only uses the `log` macros; this wires them to stderr.

use env_logger::{Builder, Env};

/// Install the logger. Warnings by default, debug with `verbose`.
/// `RUST_LOG` overrides both. Calling it twice is harmless.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    let _ = Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init(false);
        init(true);
        log::debug!("still alive");
    }
}
