//! # fontview-client
//!
//! Async client for the font preview server: directory browsing, font
//! scanning, display-name resolution, rendered previews and the list of
//! fonts installed on the server host.
//!
//! ## Endpoints
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | [`FontServer::current_font_dir`] | `fontdir` | text, possibly empty |
//! | [`FontServer::home_dir`] | `homedir` | text |
//! | [`FontServer::list_subdirectories`] | `subdirs/<path>` | JSON `[{name, path}]` |
//! | [`FontServer::scan_fonts`] | `fonts/<path>` | JSON `[{id, filename}]` |
//! | [`FontServer::font_name`] | `fontname/<id>` | text |
//! | [`FontServer::render_sample`] | `sample/<id>/<w>/<h>/<text>` | image bytes |
//! | [`FontServer::installed_fonts`] | `installed` | JSON `["Family", ...]` |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fontview_client::{ClientConfig, FontServer, HttpFontServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let server = HttpFontServer::new(&ClientConfig::default())?;
//!
//!     let home = server.home_dir().await?;
//!     for dir in server.list_subdirectories(&home).await? {
//!         println!("{} -> {}", dir.name, dir.path);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ClientError>`](ClientError). Nothing is
//! retried automatically.

mod error;
mod http_client;
mod server;
mod traits;
mod types;
mod utils;

pub use error::{ClientError, Result};

pub use http_client::HttpUtils;
pub use server::{HttpFontServer, create_http_client};

pub use traits::FontServer;

pub use types::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS,
    Endpoint, SampleRequest, ScannedFont, Subdirectory,
};

pub use utils::log_sanitizer;
