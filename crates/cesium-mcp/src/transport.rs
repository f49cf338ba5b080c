//! Newline-delimited JSON-RPC over async byte streams.
//!
//! Messages are handed to the dispatcher as raw text; the transport never
//! parses them.

use anyhow::{Context, Result};
use tokio::io::{
    stdin, stdout, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader,
};
use tokio::select;
use tokio::signal;

use crate::server::McpServer;

/// One message per line in each direction.
pub struct LineTransport<R, W> {
    reader: R,
    writer: W,
}

/// Transport bound to the process's stdin and stdout.
pub type StdioTransport = LineTransport<BufReader<tokio::io::Stdin>, tokio::io::Stdout>;

impl StdioTransport {
    pub fn stdio() -> Self {
        LineTransport::new(BufReader::new(stdin()), stdout())
    }
}

impl<R, W> LineTransport<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Read the next non-blank line. Returns Ok(None) on EOF.
    pub async fn read_message(&mut self) -> Result<Option<String>> {
        loop {
            let mut line = String::new();
            let bytes = self
                .reader
                .read_line(&mut line)
                .await
                .context("failed to read line")?;
            if bytes == 0 {
                return Ok(None);
            }

            let message = line.trim_end_matches(&['\r', '\n'][..]);
            if !message.trim().is_empty() {
                return Ok(Some(message.to_string()));
            }
        }
    }

    // Map IO errors into anyhow while keeping BrokenPipe detectable.
    fn check_io<T>(res: std::io::Result<T>) -> Result<T> {
        match res {
            Ok(v) => Ok(v),
            Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "Client disconnected",
            )
            .into()),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn write_message(&mut self, message: &str) -> Result<()> {
        Self::check_io(self.writer.write_all(message.as_bytes()).await)?;
        Self::check_io(self.writer.write_all(b"\n").await)?;
        Self::check_io(self.writer.flush().await)?;
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .map(|ioe| ioe.kind() == std::io::ErrorKind::BrokenPipe)
        .unwrap_or(false)
}

/// Run the server loop: read messages, dispatch, write responses.
///
/// Ends on EOF, Ctrl-C or a client that stops reading.
pub async fn run_server_loop<R, W>(
    transport: &mut LineTransport<R, W>,
    server: &McpServer,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    tracing::info!("MCP server initialized, waiting for requests...");

    loop {
        select! {
            _ = signal::ctrl_c() => {
                tracing::info!("Received shutdown signal, exiting gracefully");
                break;
            }

            msg = transport.read_message() => {
                match msg {
                    Ok(Some(message)) => {
                        let Some(response) = server.handle_message(&message) else {
                            continue;
                        };
                        if let Err(e) = transport.write_message(&response).await {
                            if is_broken_pipe(&e) {
                                tracing::info!("Client disconnected (broken pipe)");
                                break;
                            }
                            return Err(e);
                        }
                    }
                    Ok(None) => {
                        tracing::info!("Client disconnected (EOF)");
                        break;
                    }
                    Err(e) => {
                        tracing::error!("Transport error: {}", e);
                        return Err(e);
                    }
                }
            }
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn run(input: &str) -> Vec<Value> {
        let mut transport = LineTransport::new(input.as_bytes(), Vec::new());
        run_server_loop(&mut transport, &McpServer::default())
            .await
            .unwrap();
        let output = String::from_utf8(transport.into_writer()).unwrap();
        output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_read_message_skips_blank_lines() {
        let mut transport = LineTransport::new("\n  \r\n{\"a\":1}\r\n".as_bytes(), Vec::new());
        assert_eq!(
            transport.read_message().await.unwrap(),
            Some("{\"a\":1}".to_string())
        );
        assert_eq!(transport.read_message().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_write_message_appends_newline() {
        let mut transport = LineTransport::new(&b""[..], Vec::new());
        transport.write_message("{}").await.unwrap();
        assert_eq!(transport.into_writer(), b"{}\n");
    }

    #[tokio::test]
    async fn test_loop_answers_requests_in_order() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#,
            "\n",
        );
        let responses = run(input).await;
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[0]["result"]["protocolVersion"], "2024-11-05");
        assert_eq!(responses[1]["id"], 2);
    }

    #[tokio::test]
    async fn test_loop_stops_at_eof_without_input() {
        assert!(run("").await.is_empty());
    }
}
