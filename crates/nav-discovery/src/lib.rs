//! # nav-discovery
//!
//! Turns a route tree and an entity registry into navigation:
//!
//! ```text
//! routes ─▶ scan ─▶ hint ─▶ matcher ─▶ classify ─▶ assemble ─▶ Sidebar
//!                                         │
//! registry ─────────────▶ resolve ────────┴──────▶ sections ─▶ Vec<SectionBinding>
//! ```
//!
//! Everything is synchronous and pure over its inputs. The registry and the
//! schema lookup are consumed through the [`nav_registry`] traits; matching
//! behavior comes from [`nav_config::MatchConfig`].

pub mod assemble;
pub mod classify;
pub mod discovery;
pub mod error;
pub mod generate;
pub mod hint;
pub mod matcher;
pub mod resolve;
pub mod scan;
pub mod sections;

pub use assemble::SidebarAssembler;
pub use classify::ChildClassifier;
pub use discovery::Discovery;
pub use error::DiscoveryError;
pub use hint::{RouteHint, extract_hint};
pub use matcher::{EntityMatcher, RouteMatch};
pub use resolve::{
    BindingResolver, BindingStrategy, ConventionStrategy, GeneratedStrategy, HookStrategy,
};
pub use scan::flatten_routes;
pub use sections::SectionDiscovery;
