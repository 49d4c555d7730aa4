//! Output destinations.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::Mutex;

use super::ConfigError;

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Where rendered records are written.
///
/// Each record is written with a single `write_all` while holding the
/// destination's lock, so lines from concurrent callers never interleave.
#[derive(Clone, Default)]
pub enum Sink {
    #[default]
    Stdout,
    Stderr,
    Writer(SharedWriter),
    Buffer(BufferSink),
}

impl Sink {
    /// Wrap any writer, e.g. an opened file.
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Self {
        Sink::Writer(Arc::new(Mutex::new(Box::new(writer))))
    }

    pub fn write_record(&self, bytes: &[u8]) -> io::Result<()> {
        match self {
            Sink::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(bytes)?;
                out.flush()
            }
            Sink::Stderr => {
                let mut out = io::stderr().lock();
                out.write_all(bytes)?;
                out.flush()
            }
            Sink::Writer(writer) => {
                let mut out = writer.lock();
                out.write_all(bytes)?;
                out.flush()
            }
            Sink::Buffer(buffer) => {
                buffer.0.lock().extend_from_slice(bytes);
                Ok(())
            }
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stdout => f.write_str("Stdout"),
            Sink::Stderr => f.write_str("Stderr"),
            Sink::Writer(w) => write!(f, "Writer({:p})", Arc::as_ptr(w)),
            Sink::Buffer(b) => write!(f, "Buffer({:p})", Arc::as_ptr(&b.0)),
        }
    }
}

/// Standard streams compare by variant; writers and buffers by identity.
impl PartialEq for Sink {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Sink::Stdout, Sink::Stdout) | (Sink::Stderr, Sink::Stderr) => true,
            (Sink::Writer(a), Sink::Writer(b)) => Arc::ptr_eq(a, b),
            (Sink::Buffer(a), Sink::Buffer(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<BufferSink> for Sink {
    fn from(buffer: BufferSink) -> Self {
        Sink::Buffer(buffer)
    }
}

impl FromStr for Sink {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stdout" => Ok(Sink::Stdout),
            "stderr" => Ok(Sink::Stderr),
            _ => Err(ConfigError::UnknownSink(s.to_string())),
        }
    }
}

/// Shared in-memory destination. Clones write to the same buffer.
#[derive(Debug, Clone, Default)]
pub struct BufferSink(Arc<Mutex<Vec<u8>>>);

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }

    pub fn clear(&self) {
        self.0.lock().clear();
    }

    pub fn ptr_eq(&self, other: &BufferSink) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Write for BufferSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sink_shared_between_clones() {
        let buffer = BufferSink::new();
        let sink = Sink::from(buffer.clone());
        sink.write_record(b"line one\n").unwrap();
        sink.write_record(b"line two\n").unwrap();

        assert_eq!(buffer.lines(), vec!["line one", "line two"]);
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_writer_sink() {
        let inner = BufferSink::new();
        let sink = Sink::writer(inner.clone());
        sink.write_record(b"hello\n").unwrap();
        assert_eq!(inner.contents(), "hello\n");
    }

    #[test]
    fn test_sink_equality() {
        let a = BufferSink::new();
        let b = BufferSink::new();
        assert_eq!(Sink::Stdout, Sink::Stdout);
        assert_ne!(Sink::Stdout, Sink::Stderr);
        assert_eq!(Sink::from(a.clone()), Sink::from(a.clone()));
        assert_ne!(Sink::from(a), Sink::from(b));

        let w = Sink::writer(Vec::new());
        assert_eq!(w, w.clone());
        assert_ne!(w, Sink::writer(Vec::new()));
    }

    #[test]
    fn test_parse_sink() {
        assert_eq!("STDERR".parse::<Sink>().unwrap(), Sink::Stderr);
        assert_eq!(
            "/var/log/app.log".parse::<Sink>(),
            Err(ConfigError::UnknownSink("/var/log/app.log".to_string()))
        );
    }
}
