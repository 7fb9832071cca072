//! # Rusty Nav
//!
//! Framework-agnostic navigation core for UI shells:
//! - Route patterns with literal, `:param` and trailing `*` segments
//! - First-match-wins resolution in registration order
//! - Query string decoding into ordered parameter maps
//! - A push/pop/replace history stack of resolved entries
//! - Path-scoped listeners where the most specific prefix wins
//!
//! ## Matching Order
//!
//! Patterns are tried in the order they were registered and the first
//! acceptor wins. Registering `/user/:id` before `/user/settings` means
//! `/user/settings` resolves to `/user/:id` with `id = "settings"`.
//!
//! ## Example
//!
//! ```
//! use rusty_nav::{ChangeKind, Router};
//! use std::sync::{Arc, Mutex};
//!
//! let mut router = Router::new();
//! router.register_route("/home");
//! router.register_route("/home/profile");
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! router.add_listener(
//!     "/home",
//!     move |change| sink.lock().unwrap().push(change.kind),
//!     false,
//! );
//!
//! router.push("/home");
//! router.push("/home/profile");
//! router.pop();
//! assert_eq!(
//!     *seen.lock().unwrap(),
//!     vec![ChangeKind::Push, ChangeKind::Push, ChangeKind::Pop]
//! );
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
mod error;
pub mod history;
pub mod listener;
mod params;
pub mod path;
pub mod query;
pub mod route;
mod router;

// Re-export public types
pub use config::RouterConfig;
pub use error::{NavError, NavResult};
pub use history::{HistoryEntry, NavigationHistory, PushOutcome};
pub use listener::{ChangeKind, ListenerFn, ListenerRegistration, ListenerSet, RouteChange};
pub use params::ParamMap;
pub use route::{MatchResult, RoutePattern, RouteRegistry, Segment};
pub use router::Router;
