// ABOUTME: Async request loop reading JSON lines from a reader and answering on a writer
// ABOUTME: Runs over process stdin/stdout in serve mode and over in-memory pipes in tests

use serde_json::Value as JsonValue;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use super::error::Result;
use super::protocol::{parse_request, Request, Response};
use crate::tools::ToolRegistry;

pub struct StdioServer {
    registry: Arc<ToolRegistry>,
}

impl StdioServer {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// Serve the process's stdin and stdout until EOF
    pub async fn run(&self) -> Result<usize> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// Answer every request line until the reader is exhausted.
    ///
    /// Returns the number of requests handled. Blank lines are skipped.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<usize>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(tools = self.registry.list().len(), "Serving requests on stdio");

        let mut buffer = Vec::new();
        let mut handled = 0;

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer).await? == 0 {
                break;
            }

            // Undecodable lines are answered like any other bad request.
            let response = match std::str::from_utf8(&buffer) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.handle_line(line.trim()).await,
                Err(e) => {
                    warn!("Rejected request: invalid UTF-8");
                    Response::error(JsonValue::Null, format!("Invalid UTF-8 in request: {}", e))
                }
            };

            let mut encoded = serde_json::to_string(&response)?;
            encoded.push('\n');
            writer.write_all(encoded.as_bytes()).await?;
            writer.flush().await?;
            handled += 1;
        }

        info!(handled, "Input closed, stopping server");
        Ok(handled)
    }

    async fn handle_line(&self, line: &str) -> Response {
        match parse_request(line) {
            Ok(request) => self.dispatch(request).await,
            Err((id, message)) => {
                warn!("Rejected request: {}", message);
                Response::error(id, message)
            }
        }
    }

    async fn dispatch(&self, request: Request) -> Response {
        if request.list_tools {
            return Response::tools(request.id, self.registry.list());
        }

        let Some(tool) = request.tool else {
            return Response::error(request.id, "Request must name a tool or set list_tools");
        };

        debug!(tool = %tool, "Invoking tool");

        let registry = Arc::clone(&self.registry);
        let name = tool.clone();
        let arguments: JsonValue = request.arguments;
        let invocation =
            tokio::task::spawn_blocking(move || registry.invoke(&name, arguments)).await;

        match invocation {
            Ok(Ok(text)) => Response::text(request.id, text),
            Ok(Err(e)) => {
                warn!("{}", e);
                Response::error(request.id, e.to_string())
            }
            Err(e) => Response::error(request.id, format!("Tool '{}' failed: {}", tool, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::ArtifactGenerator;
    use crate::tools::ToolContext;

    fn server() -> StdioServer {
        let context = ToolContext::new(ArtifactGenerator::new().unwrap());
        StdioServer::new(Arc::new(ToolRegistry::new(context)))
    }

    async fn exchange(input: &str) -> Vec<Response> {
        let mut output = Vec::new();
        server().serve(input.as_bytes(), &mut output).await.unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_one_response_per_request() {
        let responses = exchange(concat!(
            r#"{"id": 1, "tool": "generate-advanced-keyword-library"}"#,
            "\n\n",
            r#"{"id": 2, "list_tools": true}"#,
            "\n",
        ))
        .await;

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].id, serde_json::json!(1));
        assert!(responses[0]
            .text
            .as_deref()
            .unwrap()
            .starts_with("*** Settings ***"));
        assert_eq!(responses[1].tools.as_ref().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_errors_are_answered_in_band() {
        let responses = exchange(concat!(
            "garbage\n",
            r#"{"id": "x", "tool": "delete-everything"}"#,
            "\n",
            r#"{"id": "y"}"#,
            "\n",
        ))
        .await;

        assert_eq!(responses.len(), 3);
        assert!(responses[0].error.as_deref().unwrap().starts_with("Invalid JSON"));
        assert!(responses[1]
            .error
            .as_deref()
            .unwrap()
            .contains("delete-everything"));
        assert_eq!(responses[2].id, serde_json::json!("y"));
        assert!(responses[2].error.is_some());
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_does_not_stop_the_loop() {
        let input: &[u8] = b"\xff\xfe garbage\n{\"id\": 2, \"list_tools\": true}\n";
        let mut output = Vec::new();
        let handled = server().serve(input, &mut output).await.unwrap();
        assert_eq!(handled, 2);

        let responses: Vec<Response> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(responses[0].id, JsonValue::Null);
        assert!(responses[0].error.as_deref().unwrap().starts_with("Invalid UTF-8"));
        assert_eq!(responses[1].id, serde_json::json!(2));
        assert_eq!(responses[1].tools.as_ref().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_validation_failure_is_text_not_error() {
        let responses = exchange(concat!(
            r#"{"id": 3, "tool": "generate-login-test", "arguments": {"url": "ftp://x.com", "username": "a", "password": "b"}}"#,
            "\n",
        ))
        .await;

        assert!(responses[0].error.is_none());
        assert!(responses[0]
            .text
            .as_deref()
            .unwrap()
            .starts_with("# VALIDATION ERROR:"));
    }
}
