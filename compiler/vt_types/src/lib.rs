//! Value types for code generation.
//!
//! Three views of a value's type, from most to least abstract:
//!
//! - [`Evt`]: any value type. Either a catalogued [`Mvt`] or an extended
//!   type backed by the structural type graph in [`vt_ir`].
//! - [`Mvt`]: the closed catalogue of machine value types, including
//!   scalable vectors and matrices whose size depends on runtime factors.
//! - [`Llt`]: the register shape only (scalar, pointer, vector, matrix).
//!
//! Sizes and counts are [`vt_size`] quantities, so scalable types are
//! compared and aligned conservatively.

use std::sync::Once;

mod classify;
mod evt;
mod llt;
mod mvt;

pub use classify::ClassifyError;
pub use evt::Evt;
pub use llt::{Llt, LltKind};
pub use mvt::Mvt;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=vt_types=debug` or `RUST_LOG=vt_ir=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
