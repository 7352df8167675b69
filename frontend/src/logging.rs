use std::io;

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config;

/// Sends each formatted tracing line to the browser console.
#[derive(Default)]
pub struct ConsoleWriter {
    line: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.line.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.line.is_empty() {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&self.line);
        let line = line.trim();
        if line.starts_with("ERROR") {
            gloo_console::error!(line);
        } else if line.starts_with("WARN") {
            gloo_console::warn!(line);
        } else {
            gloo_console::log!(line);
        }
        self.line.clear();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

pub struct Console;

impl<'a> MakeWriter<'a> for Console {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::default()
    }
}

pub fn init() {
    let filter = EnvFilter::try_new(config::log_filter())
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));
    // No system clock on wasm32, so no timestamps.
    let installed = fmt()
        .with_env_filter(filter)
        .with_writer(Console)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .try_init();
    if installed.is_err() {
        gloo_console::warn!("Tracing subscriber already installed");
    }
}
