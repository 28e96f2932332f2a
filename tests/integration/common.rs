// Common utilities for integration tests

use std::io;
use std::sync::{Arc, Mutex};
use tinypaste_client::prelude::*;
use tracing_subscriber::fmt::MakeWriter;

pub type Seen = Arc<Mutex<Vec<(Option<String>, Option<String>)>>>;

/// Creates a reqwest-backed client pointed at a mock server
pub fn create_test_client(server_url: &str, username: &str, password: &str) -> TinyPasteClient {
    setup_logger();
    let mut config = Config::with_base_url(format!("{server_url}/api"));
    config.credentials = Credentials::new(username, password);
    TinyPasteClient::new(config).expect("Failed to build client")
}

/// Direct callback recording every `(body, error)` pair
pub fn collect(seen: &Seen) -> CallbackTarget {
    let seen = Arc::clone(seen);
    CallbackTarget::direct(move |body, error| seen.lock().unwrap().push((body, error)))
}

/// In-memory log sink for a scoped tracing subscriber
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
