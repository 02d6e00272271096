//! Minimal HTTP/1.1 front end for a [`Scorer`].
//!
//! Connections are handled one at a time: read one request, write one
//! response, close. Routes:
//!
//! - `POST /predict` with `{"text": "..."}`; a missing `text` scores `""`
//! - `GET /health`
//! - `GET /`, a small HTML form that posts to `/predict`

use crate::error::Result;
use crate::scoring::Scorer;
use crate::types::config::ServerSettings;
use serde::Serialize;
use serde_json::{json, Value};
use std::io::{self, BufRead, Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::time::Duration;

const MAX_HEAD_BYTES: u64 = 16 * 1024;
const MAX_DRAIN_BYTES: u64 = 16 * 1024 * 1024;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>Sentiment Analysis</title></head>
<body>
<h1>Sentiment Analysis</h1>
<textarea id="text" rows="6" cols="80" placeholder="I love this amazing product!"></textarea><br>
<button onclick="analyze()">Analyze</button>
<pre id="result"></pre>
<script>
async function analyze() {
  const text = document.getElementById('text').value.trim();
  if (!text) return;
  const response = await fetch('/predict', {
    method: 'POST',
    headers: {'Content-Type': 'application/json'},
    body: JSON.stringify({text})
  });
  document.getElementById('result').textContent = JSON.stringify(await response.json(), null, 2);
}
</script>
</body>
</html>
"#;

pub struct Server<'a> {
    scorer: &'a dyn Scorer,
    settings: ServerSettings,
}

impl<'a> Server<'a> {
    pub fn new(scorer: &'a dyn Scorer, settings: ServerSettings) -> Self {
        Self { scorer, settings }
    }

    pub fn serve(&self) -> Result<()> {
        let listener = TcpListener::bind(&self.settings.addr)?;
        tracing::info!(
            addr = %listener.local_addr()?,
            engine = self.scorer.name(),
            "sentiment http listening"
        );
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    if let Err(err) = self.handle_connection(stream) {
                        tracing::warn!(error = %err, "http request error");
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "http accept error");
                }
            }
        }
        Ok(())
    }

    fn handle_connection(&self, mut stream: TcpStream) -> io::Result<()> {
        stream.set_read_timeout(Some(Duration::from_secs(self.settings.read_timeout_secs)))?;
        let Some(req) = read_http_request(&stream, self.settings.max_body_bytes)? else {
            return Ok(());
        };
        let response = self.dispatch(&req);
        tracing::debug!(
            method = %req.method,
            path = %req.path,
            status = response.status,
            "http request handled"
        );
        write_http_response(&mut stream, &response)?;

        // Closing with an unread body in the receive buffer resets the
        // connection before the client sees the 413.
        if req.content_length > self.settings.max_body_bytes {
            stream.shutdown(Shutdown::Write)?;
            let pending = (req.content_length as u64).min(MAX_DRAIN_BYTES);
            if let Err(err) = io::copy(&mut (&stream).take(pending), &mut io::sink()) {
                tracing::debug!(error = %err, "oversized body drain stopped");
            }
        }
        Ok(())
    }

    fn dispatch(&self, req: &HttpRequest) -> HttpResponse {
        if req.content_length > self.settings.max_body_bytes {
            return HttpResponse::error(
                413,
                format!(
                    "request body exceeds {} bytes",
                    self.settings.max_body_bytes
                ),
            );
        }

        match (req.method.as_str(), req.path.as_str()) {
            ("POST", "/predict") => self.handle_predict(&req.body),
            ("GET", "/health") => HttpResponse::json(
                200,
                &json!({ "status": "ok", "engine": self.scorer.name() }),
            ),
            ("GET", "/") => HttpResponse::text(200, "text/html; charset=utf-8", INDEX_HTML),
            (_, "/predict" | "/health" | "/") => {
                HttpResponse::error(405, format!("method {} not allowed", req.method))
            }
            _ => HttpResponse::error(404, format!("no route for {}", req.path)),
        }
    }

    fn handle_predict(&self, body: &[u8]) -> HttpResponse {
        let value: Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(err) => return HttpResponse::error(400, format!("invalid json body: {err}")),
        };
        let Some(object) = value.as_object() else {
            return HttpResponse::error(400, "request body must be a json object".to_string());
        };
        let text = match object.get("text") {
            None => "",
            Some(Value::String(text)) => text.as_str(),
            Some(_) => return HttpResponse::error(400, "field `text` must be a string".to_string()),
        };

        HttpResponse::json(200, &self.scorer.predict(text))
    }
}

struct HttpRequest {
    method: String,
    path: String,
    content_length: usize,
    body: Vec<u8>,
}

struct HttpResponse {
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
}

impl HttpResponse {
    fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self {
                status,
                content_type: "application/json",
                body,
            },
            Err(err) => Self::text(500, "text/plain; charset=utf-8", &err.to_string()),
        }
    }

    fn text(status: u16, content_type: &'static str, body: &str) -> Self {
        Self {
            status,
            content_type,
            body: body.as_bytes().to_vec(),
        }
    }

    fn error(status: u16, message: String) -> Self {
        Self::json(status, &json!({ "error": message }))
    }
}

/// Reads one line of the request head, charging it against `budget`.
fn read_head_line<R: BufRead>(reader: &mut R, budget: &mut u64, line: &mut String) -> io::Result<usize> {
    let read = (&mut *reader).take(*budget).read_line(line)?;
    *budget -= read as u64;
    if *budget == 0 && !line.ends_with('\n') {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("request head exceeds {MAX_HEAD_BYTES} bytes"),
        ));
    }
    Ok(read)
}

/// Parses the request line, headers and body. The head is capped at
/// `MAX_HEAD_BYTES`. The body is only read when it fits in
/// `max_body_bytes`; callers reject the request otherwise.
fn read_http_request(stream: &TcpStream, max_body_bytes: usize) -> io::Result<Option<HttpRequest>> {
    let mut reader = io::BufReader::new(stream.try_clone()?);
    let mut budget = MAX_HEAD_BYTES;
    let mut line = String::new();
    if read_head_line(&mut reader, &mut budget, &mut line)? == 0 {
        return Ok(None);
    }
    let first = line.trim_end_matches(['\r', '\n']);
    if first.is_empty() {
        return Ok(None);
    }

    let mut parts = first.split_whitespace();
    let Some(method) = parts.next() else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "invalid http request line (missing method)",
        ));
    };
    let Some(target) = parts.next() else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "invalid http request line (missing path)",
        ));
    };
    let path = target
        .split_once('?')
        .map_or(target, |(path, _)| path)
        .to_string();

    let mut content_length = 0usize;
    loop {
        let mut header = String::new();
        if read_head_line(&mut reader, &mut budget, &mut header)? == 0 {
            break;
        }
        let header = header.trim_end_matches(['\r', '\n']);
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse::<usize>().map_err(|_| {
                    io::Error::new(io::ErrorKind::InvalidData, "invalid content-length header")
                })?;
            }
        }
    }

    let mut body = Vec::new();
    if content_length > 0 && content_length <= max_body_bytes {
        body.resize(content_length, 0);
        reader.read_exact(&mut body)?;
    }
    Ok(Some(HttpRequest {
        method: method.to_string(),
        path,
        content_length,
        body,
    }))
}

fn write_http_response(stream: &mut TcpStream, response: &HttpResponse) -> io::Result<()> {
    let headers = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        http_reason_phrase(response.status),
        response.content_type,
        response.body.len()
    );
    stream.write_all(headers.as_bytes())?;
    stream.write_all(&response.body)?;
    stream.flush()
}

fn http_reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        413 => "Payload Too Large",
        500 => "Internal Server Error",
        _ => "OK",
    }
}
