//! Search id extraction from job-creation responses.
//!
//! Responsibilities:
//! - Decide whether a creation body is XML or JSON by looking at its first
//!   significant byte.
//! - Pull the sid out with a decoder specific to each encoding.
//!
//! Does NOT handle:
//! - HTTP status handling (a non-2xx answer never reaches these decoders).
//!
//! Invariants:
//! - The same sid yields the same result from both encodings.
//! - Every failure is a [`ClientError::Submission`].

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::models::SplunkMessages;

/// Encoding of a job-creation response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    Json,
    Xml,
}

impl WireFormat {
    /// Classify a body by its first non-whitespace, non-BOM character.
    pub fn sniff(body: &str) -> Self {
        let start = body.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
        if start.starts_with('<') {
            WireFormat::Xml
        } else {
            WireFormat::Json
        }
    }

    /// Run the decoder for this format.
    pub fn decode_sid(self, body: &str) -> Result<String> {
        match self {
            WireFormat::Json => decode_json_sid(body),
            WireFormat::Xml => decode_xml_sid(body),
        }
    }
}

/// Sniff the body and decode the sid with the matching decoder.
pub fn extract_sid(body: &str) -> Result<String> {
    WireFormat::sniff(body).decode_sid(body)
}

/// Read `sid` from a JSON body, falling back to `entry[0].content.sid`.
///
/// Numeric sids are accepted and returned in their decimal form.
pub fn decode_json_sid(body: &str) -> Result<String> {
    let resp: Value = serde_json::from_str(body).map_err(|e| {
        ClientError::Submission(format!("Unrecognized job creation response: {}", e))
    })?;

    resp.get("sid")
        .and_then(sid_text)
        .or_else(|| sid_text(resp.get("entry")?.get(0)?.get("content")?.get("sid")?))
        .ok_or_else(|| {
            let detail = SplunkMessages::deserialize(&resp)
                .ok()
                .filter(|m| !m.messages.is_empty())
                .map(|m| m.summary())
                .unwrap_or_else(|| "Missing sid in response".to_string());
            ClientError::Submission(detail)
        })
}

fn sid_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim()).filter(|s| !s.is_empty()).map(str::to_string),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// Read the text of the first `<sid>` element from an XML body.
///
/// When no sid is present, any `<msg>` text in the body becomes the error detail.
pub fn decode_xml_sid(body: &str) -> Result<String> {
    let mut reader = Reader::from_str(body);
    let mut current: Option<Capture> = None;
    let mut text = String::new();
    let mut messages: Vec<String> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                current = match e.local_name().as_ref() {
                    b"sid" => Some(Capture::Sid),
                    b"msg" => Some(Capture::Msg),
                    _ => current,
                };
                text.clear();
            }
            Ok(Event::Text(ref e)) if current.is_some() => {
                let chunk = e.unescape().map_err(|err| {
                    ClientError::Submission(format!("Malformed XML in job creation response: {}", err))
                })?;
                text.push_str(&chunk);
            }
            Ok(Event::CData(e)) if current.is_some() => {
                text.push_str(&String::from_utf8_lossy(&e.into_inner()));
            }
            Ok(Event::End(ref e)) => match (current, e.local_name().as_ref()) {
                (Some(Capture::Sid), b"sid") => {
                    let sid = text.trim();
                    if !sid.is_empty() {
                        return Ok(sid.to_string());
                    }
                    current = None;
                }
                (Some(Capture::Msg), b"msg") => {
                    let msg = text.trim();
                    if !msg.is_empty() {
                        messages.push(msg.to_string());
                    }
                    current = None;
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ClientError::Submission(format!(
                    "Malformed XML in job creation response: {}",
                    e
                )));
            }
            _ => {}
        }
    }

    if messages.is_empty() {
        Err(ClientError::Submission(
            "Missing <sid> element in response".to_string(),
        ))
    } else {
        Err(ClientError::Submission(messages.join("; ")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capture {
    Sid,
    Msg,
}
