//! Curl command generation
//!
//! Converts an [`http::Request`] into the equivalent curl invocation for
//! sharing and debugging.

use http::{Request, Uri};

use crate::command::Command;
use crate::errors::{RecurlError, Result};
use crate::escape::shell_escape;
use crate::headers::sorted_header_flags;

/// Generate an equivalent curl command from the request.
///
/// Token order is fixed: `curl`, `-k` for https targets, `-X` method,
/// `-d` body (omitted when the body is empty), one `-H` per distinct
/// header name in sorted canonical order, the full URI, `--compressed`.
/// The request is only read; the returned command owns all of its tokens.
///
/// The method is rendered verbatim and the body is rendered as text
/// (lossily for invalid UTF-8) — this is a debugging aid, not a validator,
/// and malformed-but-representable requests are accepted as-is.
///
/// Returns [`RecurlError::UriNotSet`] when the request URI has no scheme
/// or authority, since such a request names no target to reproduce.
pub fn curl_command<B: AsRef<[u8]>>(req: &Request<B>) -> Result<Command> {
    let uri = render_uri(req.uri())?;

    let mut command = Command::new();
    command.push("curl");

    if req.uri().scheme_str() == Some("https") {
        command.push("-k");
    }

    command.push("-X");
    command.push(shell_escape(req.method().as_str()));

    let body = req.body().as_ref();
    if !body.is_empty() {
        command.push("-d");
        command.push(shell_escape(&String::from_utf8_lossy(body)));
    }

    for (name, values) in sorted_header_flags(req.headers()) {
        command.push("-H");
        command.push(shell_escape(&format!("{}: {}", name, values)));
    }

    command.push(shell_escape(&uri));
    command.push("--compressed");

    tracing::trace!(tokens = command.tokens().len(), "built curl command");

    Ok(command)
}

/// Render the full URI string, normalizing a bare host to a trailing `/`.
fn render_uri(uri: &Uri) -> Result<String> {
    let (Some(scheme), Some(authority)) = (uri.scheme_str(), uri.authority()) else {
        return Err(RecurlError::UriNotSet);
    };

    let path = match uri.path() {
        "" => "/",
        p => p,
    };

    Ok(match uri.query() {
        Some(query) => format!("{}://{}{}?{}", scheme, authority, path, query),
        None => format!("{}://{}{}", scheme, authority, path),
    })
}
