use crate::config::{ShimConfig, program_name};
use anyhow::{Context, Result};
use std::io::IsTerminal;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Install the global tracing subscriber.
///
/// Logs go to the local syslog daemon unless `stderr` is set. `debug` lowers
/// the default level and adds source locations. `RUST_LOG` overrides the level.
pub fn init_logging(config: &ShimConfig) -> Result<()> {
    let subscriber = if config.stderr {
        let ansi = std::io::stderr().is_terminal();
        build_subscriber(config, std::io::stderr, ansi, true)
    } else {
        let writer =
            syslog::SyslogWriter::connect(&program_name()).context("Failed to connect to syslog")?;
        // syslogd stamps every message, --debug adds our own
        build_subscriber(config, writer, false, config.debug)
    };

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install the tracing subscriber")
}

pub fn build_subscriber<W>(
    config: &ShimConfig,
    writer: W,
    ansi: bool,
    with_time: bool,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let default_level = if config.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(config.debug)
        .with_line_number(config.debug)
        .with_ansi(ansi)
        .with_writer(writer);

    if with_time {
        Box::new(builder.finish())
    } else {
        Box::new(builder.without_time().finish())
    }
}

/// Render an error and its causes on one line.
///
/// Library errors often repeat their cause in their own message. A cause
/// already contained in the previous message is skipped.
pub fn render_error(err: &anyhow::Error) -> String {
    let mut rendered = err.to_string();
    let mut previous = rendered.clone();
    for cause in err.chain().skip(1) {
        let message = cause.to_string();
        if message.is_empty() || previous.contains(&message) {
            continue;
        }
        rendered.push_str(": ");
        rendered.push_str(&message);
        previous = message;
    }
    rendered
}


#[cfg(unix)]
pub mod syslog {
    use std::io::{self, Write};
    use std::os::unix::net::UnixDatagram;
    use std::path::Path;
    use std::sync::Arc;
    use tracing_subscriber::fmt::MakeWriter;

    const SOCKET_PATHS: [&str; 3] = ["/dev/log", "/var/run/syslog", "/var/run/log"];

    // facility daemon (3), severity notice (5)
    const PRIORITY: u8 = (3 << 3) | 5;

    /// Sends each formatted event as one datagram to the local syslog socket.
    #[derive(Debug, Clone)]
    pub struct SyslogWriter {
        socket: Arc<UnixDatagram>,
        tag: Arc<str>,
        pid: u32,
    }

    impl SyslogWriter {
        pub fn connect(tag: &str) -> io::Result<Self> {
            let mut last_error = io::Error::new(io::ErrorKind::NotFound, "no syslog socket found");
            for path in SOCKET_PATHS {
                match Self::connect_to(Path::new(path), tag) {
                    Ok(writer) => return Ok(writer),
                    Err(err) => last_error = err,
                }
            }
            Err(last_error)
        }

        pub fn connect_to(path: &Path, tag: &str) -> io::Result<Self> {
            let socket = UnixDatagram::unbound()?;
            socket.connect(path)?;
            Ok(Self::from_socket(socket, tag))
        }

        pub fn from_socket(socket: UnixDatagram, tag: &str) -> Self {
            Self {
                socket: Arc::new(socket),
                tag: Arc::from(tag),
                pid: std::process::id(),
            }
        }
    }

    impl<'a> MakeWriter<'a> for SyslogWriter {
        type Writer = SyslogMessage;

        fn make_writer(&'a self) -> Self::Writer {
            SyslogMessage {
                writer: self.clone(),
                buffer: Vec::new(),
            }
        }
    }

    /// Buffers one event, sent when dropped.
    pub struct SyslogMessage {
        writer: SyslogWriter,
        buffer: Vec<u8>,
    }

    impl SyslogMessage {
        fn datagram(&self) -> Vec<u8> {
            let message = self.buffer.strip_suffix(b"\n").unwrap_or(self.buffer.as_slice());
            let mut datagram =
                format!("<{}>{}[{}]: ", PRIORITY, self.writer.tag, self.writer.pid).into_bytes();
            datagram.extend_from_slice(message);
            datagram
        }
    }

    impl Write for SyslogMessage {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.buffer.is_empty() {
                return Ok(());
            }
            let datagram = self.datagram();
            self.buffer.clear();
            self.writer.socket.send(&datagram).map(|_| ())
        }
    }

    impl Drop for SyslogMessage {
        fn drop(&mut self) {
            // Nowhere left to report a failing logger
            let _ = self.flush();
        }
    }

}

#[cfg(not(unix))]
pub mod syslog {
    use std::io;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Debug, Clone)]
    pub enum SyslogWriter {}

    impl SyslogWriter {
        pub fn connect(_tag: &str) -> io::Result<Self> {
            Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "syslog is only available on unix, use --stderr",
            ))
        }
    }

    impl<'a> MakeWriter<'a> for SyslogWriter {
        type Writer = io::Sink;

        fn make_writer(&'a self) -> Self::Writer {
            match *self {}
        }
    }
}
