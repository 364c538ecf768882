//! Integration tests for bounded reads on real file descriptors

use std::io::{self, Write};
use std::net::TcpListener;
use std::os::unix::net::UnixStream;
use std::time::{Duration, Instant};

use promptgate_core::{FdStream, LineReader, PromptError};

/// Writer that counts how often it is written to and flushed
#[derive(Default)]
struct CountingWriter {
    data: Vec<u8>,
    writes: usize,
    flushes: usize,
}

impl Write for CountingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes += 1;
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

#[test]
fn test_timeout_on_stream_that_never_becomes_readable() {
    // A listening socket with no pending connections is never readable
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind listener");
    let mut reader = LineReader::new(FdStream::new(listener), Vec::new());

    let started = Instant::now();
    let result = reader.read_line(None, Some(Duration::from_millis(1)));

    assert!(matches!(result, Err(PromptError::Timeout { .. })));
    assert!(
        started.elapsed() < Duration::from_secs(1),
        "timed read took {:?}",
        started.elapsed()
    );
}

#[test]
fn test_reads_available_line() {
    let (mut writer, reader_end) = UnixStream::pair().expect("failed to create socket pair");
    writer.write_all(b"foo bar\n").unwrap();

    let mut reader = LineReader::new(FdStream::new(reader_end), Vec::new());
    let line = reader
        .read_line(None, Some(Duration::from_secs(5)))
        .expect("line should be read");
    assert_eq!(line, "foo bar");
}

#[test]
fn test_prompt_written_and_flushed_once() {
    let (mut writer, reader_end) = UnixStream::pair().expect("failed to create socket pair");
    writer.write_all(b"foo bar\n").unwrap();

    let mut reader = LineReader::new(FdStream::new(reader_end), CountingWriter::default());
    let line = reader
        .read_line(Some("test prompt: "), Some(Duration::from_secs(5)))
        .unwrap();

    assert_eq!(line, "foo bar");
    assert_eq!(reader.output().data, b"test prompt: ");
    assert_eq!(reader.output().writes, 1);
    assert_eq!(reader.output().flushes, 1);
}

#[test]
fn test_does_not_consume_past_newline() {
    let (mut writer, reader_end) = UnixStream::pair().expect("failed to create socket pair");
    writer.write_all(b"first\nsecond\n").unwrap();

    let mut reader = LineReader::new(FdStream::new(reader_end), Vec::new());
    assert_eq!(reader.read_line(None, Some(Duration::from_secs(5))).unwrap(), "first");
    assert_eq!(reader.read_line(None, None).unwrap(), "second");
}

#[test]
fn test_partial_line_times_out() {
    let (mut writer, reader_end) = UnixStream::pair().expect("failed to create socket pair");
    writer.write_all(b"no newline yet").unwrap();

    let mut reader = LineReader::new(FdStream::new(reader_end), Vec::new());
    let result = reader.read_line(None, Some(Duration::from_millis(50)));
    assert!(matches!(result, Err(PromptError::Timeout { .. })));
    drop(writer);
}

#[test]
fn test_closed_peer_is_end_of_input() {
    let (writer, reader_end) = UnixStream::pair().expect("failed to create socket pair");
    drop(writer);

    let mut reader = LineReader::new(FdStream::new(reader_end), Vec::new());
    let result = reader.read_line(None, Some(Duration::from_secs(5)));
    assert!(matches!(result, Err(PromptError::UnexpectedEndOfInput)));
}

#[test]
fn test_empty_file_is_end_of_input() {
    let file = tempfile::tempfile().expect("failed to create temp file");

    let mut reader = LineReader::new(FdStream::new(file), Vec::new());
    assert!(matches!(
        reader.read_line(None, None),
        Err(PromptError::UnexpectedEndOfInput)
    ));
}

#[test]
fn test_unterminated_last_line_before_close() {
    let (mut writer, reader_end) = UnixStream::pair().expect("failed to create socket pair");
    writer.write_all(b"yes").unwrap();
    drop(writer);

    let mut reader = LineReader::new(FdStream::new(reader_end), Vec::new());
    assert_eq!(reader.read_line(None, Some(Duration::from_secs(5))).unwrap(), "yes");
}
