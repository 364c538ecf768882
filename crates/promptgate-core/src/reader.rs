//! Bounded-time line reads
//!
//! Reading a line from stdin blocks forever when nobody is there to answer.
//! `LineReader` waits for the stream to become readable against a deadline
//! fixed once per call, then consumes input one byte at a time so that a read
//! following a successful readiness poll can never block.
//!
//! Bytes are read straight from the descriptor, bypassing the buffer behind
//! `std::io::stdin()`. Mixing the two on the same process stdin can hide
//! input from the poll.

use std::io::{self, Stdin, Stdout, Write};
use std::os::fd::AsFd;
use std::time::{Duration, Instant};

use rustix::event::{PollFd, PollFlags};
use rustix::io::Errno;
use tracing::{debug, trace};

use crate::error::{PromptError, PromptResult};

/// Source of the current time, injectable for deadline tests
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Monotonic system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// An input stream that can report readiness without blocking past a timeout
pub trait ReadableStream {
    /// Wait up to `timeout` for the stream to have data (or end of input).
    ///
    /// `Ok(false)` means nothing is ready yet. This may be returned early on
    /// spurious wake-ups; callers re-check their own deadline.
    fn wait_readable(&mut self, timeout: Duration) -> io::Result<bool>;

    /// Read a single byte, `None` at end of input.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

/// A readable stream over a raw file descriptor
#[derive(Debug)]
pub struct FdStream<F> {
    fd: F,
}

impl<F: AsFd> FdStream<F> {
    pub fn new(fd: F) -> Self {
        Self { fd }
    }
}

impl FdStream<Stdin> {
    /// The process standard input
    pub fn stdin() -> Self {
        Self::new(io::stdin())
    }
}

impl<F: AsFd> ReadableStream for FdStream<F> {
    fn wait_readable(&mut self, timeout: Duration) -> io::Result<bool> {
        let mut fds = [PollFd::new(&self.fd, PollFlags::IN)];
        match rustix::event::poll(&mut fds, poll_timeout_ms(timeout)) {
            Ok(0) => Ok(false),
            // HUP and ERR make the following read return immediately
            Ok(_) => Ok(fds[0]
                .revents()
                .intersects(PollFlags::IN | PollFlags::HUP | PollFlags::ERR)),
            Err(Errno::INTR) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match rustix::io::read(&self.fd, &mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(Errno::INTR) => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Truncate to whole milliseconds so a poll never outlasts `timeout`.
///
/// A sub-millisecond remainder polls with zero; the caller re-checks the
/// deadline and polls again until it has passed.
fn poll_timeout_ms(timeout: Duration) -> i32 {
    let millis = timeout.as_millis();
    i32::try_from(millis).unwrap_or(i32::MAX)
}

/// Reads single lines from a stream, optionally bounded by a timeout
pub struct LineReader<S, W, C = SystemClock> {
    stream: S,
    output: W,
    clock: C,
}

impl LineReader<FdStream<Stdin>, Stdout> {
    /// Read from the process stdin, prompting on stdout
    pub fn stdio() -> Self {
        Self::new(FdStream::stdin(), io::stdout())
    }
}

impl<S: ReadableStream, W: Write> LineReader<S, W> {
    pub fn new(stream: S, output: W) -> Self {
        Self {
            stream,
            output,
            clock: SystemClock,
        }
    }
}

impl<S: ReadableStream, W: Write, C: Clock> LineReader<S, W, C> {
    /// Replace the clock used for deadline arithmetic
    pub fn with_clock<C2: Clock>(self, clock: C2) -> LineReader<S, W, C2> {
        LineReader {
            stream: self.stream,
            output: self.output,
            clock,
        }
    }

    /// The prompt writer
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Write `prompt` (if any), then read one line without its terminator.
    ///
    /// With a `timeout`, the deadline is taken once on entry and every wait
    /// is bounded by what is left of it. Consumed bytes are discarded when
    /// the deadline passes mid-line.
    pub fn read_line(
        &mut self,
        prompt: Option<&str>,
        timeout: Option<Duration>,
    ) -> PromptResult<String> {
        if let Some(text) = prompt {
            self.output.write_all(text.as_bytes())?;
            self.output.flush()?;
        }

        // An unrepresentable deadline is as good as none
        let deadline = timeout.and_then(|t| self.clock.now().checked_add(t));

        let mut line = Vec::new();
        loop {
            if let Some(deadline) = deadline {
                self.wait_until(deadline, prompt.unwrap_or_default())?;
            }
            match self.stream.read_byte()? {
                None if line.is_empty() => return Err(PromptError::UnexpectedEndOfInput),
                None | Some(b'\n') => break,
                Some(byte) => line.push(byte),
            }
        }

        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Ok(String::from_utf8_lossy(&line).into_owned())
    }

    fn wait_until(&mut self, deadline: Instant, prompt: &str) -> PromptResult<()> {
        let mut remaining = deadline.saturating_duration_since(self.clock.now());
        loop {
            if self.stream.wait_readable(remaining)? {
                return Ok(());
            }
            remaining = deadline.saturating_duration_since(self.clock.now());
            if remaining.is_zero() {
                debug!(prompt, "timed out waiting for input");
                return Err(PromptError::Timeout {
                    prompt: prompt.to_string(),
                });
            }
            trace!(?remaining, "input not ready, waiting again");
        }
    }
}

/// Read one line from stdin, writing `prompt` to stdout first.
///
/// `None` for `timeout` blocks until a line or end of input arrives.
pub fn input_with_timeout(prompt: Option<&str>, timeout: Option<Duration>) -> PromptResult<String> {
    LineReader::stdio().read_line(prompt, timeout)
}
