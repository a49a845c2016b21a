use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Target of every domain message, e.g. `RUST_LOG=price_scanner=debug`.
pub const LOG_TARGET: &str = "price_scanner";

/// Forwards domain log messages to the installed `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: LOG_TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: LOG_TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: LOG_TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: LOG_TARGET, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn should_emit_messages_under_fixed_target() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            TracingLogger.warn("Shopping list not found: 42");
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"));
        assert!(output.contains(LOG_TARGET));
        assert!(output.contains("Shopping list not found: 42"));
    }
}
