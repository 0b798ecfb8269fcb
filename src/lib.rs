//! recurl library interface
//!
//! This crate renders an in-flight [`http::Request`] as an equivalent,
//! copy-pasteable `curl` command for debugging. Handy inside a server
//! handler or client middleware: log the command, paste it in a terminal,
//! replay the exact request.
//!
//! # Module Organization
//!
//! - [`errors`] - Error types (RecurlError, Result)
//! - [`escape`] - POSIX single-quote shell escaping
//! - [`headers`] - Header name canonicalization and ordering
//! - [`command`] - The Command token sequence
//! - [`curl`] - Request-to-command conversion
//!
//! # Example
//!
//! ```
//! use recurl::curl_command;
//!
//! let req = http::Request::builder()
//!     .method("POST")
//!     .uri("http://foo.com/cats")
//!     .header("API_KEY", "123")
//!     .body("age=10&name=Hudson")
//!     .unwrap();
//!
//! let cmd = curl_command(&req).unwrap();
//! assert_eq!(
//!     cmd.to_string(),
//!     "curl -X 'POST' -d 'age=10&name=Hudson' -H 'Api_key: 123' 'http://foo.com/cats' --compressed",
//! );
//! ```

pub mod command;
pub mod curl;
pub mod errors;
pub mod escape;
pub mod headers;

pub use command::Command;
pub use curl::curl_command;
pub use errors::{RecurlError, Result};
