//! Optional file-backed tracing. The TUI owns stdout, so logs either go to
//! a file named on the command line or nowhere at all.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber writing to `log_file`.
///
/// Level filtering comes from `RUST_LOG`, defaulting to `info`. Does
/// nothing when no file is given, and fails silently if the file can't be
/// created or a subscriber is already installed — logging is optional.
pub fn init(log_file: Option<&Path>) {
    let Some(path) = log_file else {
        return;
    };
    let file = match File::create(path) {
        Ok(f) => f,
        Err(_) => return,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_without_file_is_a_no_op() {
        init(None);
    }

    #[test]
    fn init_creates_the_log_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("herodex.log");
        init(Some(&path));
        assert!(path.exists());
    }
}
