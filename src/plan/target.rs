use url::Url;

use crate::error::ResolveError;

const HTTP_DEFAULT_PORT: u16 = 80;
const HTTPS_DEFAULT_PORT: u16 = 443;

/// Network endpoint derived from the target URL's authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub port: u16,
}

/// Splits the URL's `host[:port]` authority at its last colon, falling back
/// to the scheme default (http 80, https 443, anything else 0) when no port
/// is present. Unknown schemes are not rejected here; a port of 0 is the
/// caller's cue.
///
/// A colon at position 0 does not count as a port separator: the host then
/// keeps the leading colon and the scheme default applies.
///
/// # Errors
/// [`ResolveError::InvalidPort`] when the text after the last colon is not a
/// valid port number. No benchmark target is resolvable then, so callers
/// treat this as fatal.
pub fn resolve_target(url: &Url) -> Result<Target, ResolveError> {
    let authority = authority_of(url);
    split_host_port(&authority, url.scheme())
}

fn authority_of(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    url.port()
        .map_or_else(|| host.to_owned(), |port| format!("{host}:{port}"))
}

pub(super) fn split_host_port(authority: &str, scheme: &str) -> Result<Target, ResolveError> {
    match authority.rfind(':') {
        Some(pos) if pos > 0 => {
            let (host, rest) = authority.split_at(pos);
            let port_text = rest.strip_prefix(':').unwrap_or(rest);
            let port: u16 = port_text
                .parse()
                .map_err(|err| ResolveError::InvalidPort {
                    authority: authority.to_owned(),
                    source: err,
                })?;
            Ok(Target {
                host: host.to_owned(),
                port,
            })
        }
        Some(_) | None => Ok(Target {
            host: authority.to_owned(),
            port: default_port(scheme),
        }),
    }
}

fn default_port(scheme: &str) -> u16 {
    if scheme == "http" {
        HTTP_DEFAULT_PORT
    } else if scheme == "https" {
        HTTPS_DEFAULT_PORT
    } else {
        0
    }
}
