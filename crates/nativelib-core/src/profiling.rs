//! Profiling utilities based on the `puffin` crate.

use std::sync::OnceLock;

pub use puffin::{profile_function, profile_scope};

/// Address the puffin server binds to by default.
pub const DEFAULT_PROFILER_ADDR: &str = "127.0.0.1:8585";

/// Environment variable that opts a binary into profiling.
pub const PROFILE_ENV_VAR: &str = "NATIVELIB_PROFILE";

static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

/// Enable puffin scopes and serve them on `addr` for `puffin_viewer`.
///
/// Failing to bind is logged and otherwise ignored; scopes stay enabled.
pub fn init_profiling(addr: &str) {
    puffin::set_scopes_on(true);

    if PROFILING_SERVER.get().is_some() {
        return;
    }

    match puffin_http::Server::new(addr) {
        Ok(server) => {
            tracing::info!("puffin server listening on {addr}");
            let _ = PROFILING_SERVER.set(server);
        }
        Err(e) => {
            tracing::error!("failed to start puffin server on {addr}: {e}");
        }
    }
}

/// Start profiling if [`PROFILE_ENV_VAR`] is set.
///
/// The variable's value is used as the bind address when non-empty.
pub fn init_from_env() {
    if let Some(value) = std::env::var_os(PROFILE_ENV_VAR) {
        let value = value.to_string_lossy();
        let addr = match value.as_ref() {
            "" | "1" => DEFAULT_PROFILER_ADDR,
            addr => addr,
        };
        init_profiling(addr);
    }
}

/// Mark a frame boundary for the profiler.
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}
