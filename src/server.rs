//! Development file server.
//!
//! Serves a directory as static files over plain HTTP with no build step.
//! File lookup, content types, and 404s are handled by `warp::fs::dir`;
//! a request for a directory serves its `index.html`.

use crate::error::{GogError, Result};
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use warp::{Filter, Rejection, Reply};

/// Host used when an address names only a port (`:8000`).
const ANY_HOST: &str = "0.0.0.0";

/// Resolve a listen address.
///
/// Accepts `host:port`, `ip:port`, and the port-only form `:port`, which
/// listens on all IPv4 interfaces.
pub fn resolve_addr(addr: &str) -> Result<SocketAddr> {
    let bind_error = |reason: String| GogError::ServerBindFailed {
        addr: addr.to_string(),
        reason,
    };

    let normalized = if addr.starts_with(':') {
        format!("{}{}", ANY_HOST, addr)
    } else {
        addr.to_string()
    };

    normalized
        .to_socket_addrs()
        .map_err(|e| bind_error(format!("invalid address: {}", e)))?
        .next()
        .ok_or_else(|| bind_error("address resolved to nothing".to_string()))
}

/// Static file routes for `root`, with per-request debug logging.
pub fn routes(
    root: PathBuf,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone + Send + Sync + 'static {
    warp::fs::dir(root).with(warp::log::custom(|info| {
        debug!(
            method = %info.method(),
            path = info.path(),
            status = info.status().as_u16(),
            "request"
        );
    }))
}

/// Serve `root` on `addr` until the process is terminated.
///
/// # Returns
///
/// * `Err(GogError::ServerBindFailed)` - The address is invalid or cannot be bound
pub fn serve(addr: &str, root: &Path) -> Result<()> {
    let socket = resolve_addr(addr)?;
    let bind_error = |reason: String| GogError::ServerBindFailed {
        addr: addr.to_string(),
        reason,
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| bind_error(format!("failed to start runtime: {}", e)))?;

    runtime.block_on(async {
        let (bound, server) = warp::serve(routes(root.to_path_buf()))
            .try_bind_ephemeral(socket)
            .map_err(|e| bind_error(e.to_string()))?;

        info!(addr = %bound, root = %root.display(), "starting web server");
        server.await;
        Ok::<(), GogError>(())
    })
}
