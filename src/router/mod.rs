//! Route table and navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route table is built once at startup from the view catalog and shared
//! read-only through `AppState`. Every page request is a navigation: the path
//! is normalized, matched exactly against the table, and the matched route's
//! view is resolved (immediately for home, through a cached lazy loader for
//! every tool).

pub mod lazy;
pub mod navigation;
pub mod route;
pub mod table;

pub use lazy::{LazyView, LoadError, ViewLoader};
pub use navigation::{History, Navigation, Navigator, resolve};
pub use route::{Route, ViewSource};
pub use table::{HOME_PATH, RouteTable, RouteTableError, normalize_path};
