//! Concierge: the chat assistant behind a website's chat widget.
//!
//! [`ResponseResolver`](resolver::ResponseResolver) answers each visitor
//! message either through a remote chat-completions service or, when no
//! credential is configured or the call fails, with a keyword-matched canned
//! reply. It keeps a bounded conversation history for the remote path.
//!
//! # Quick Start
//!
//! ```no_run
//! use concierge::prelude::*;
//!
//! # async fn example() -> concierge::error::Result<()> {
//! let resolver = ResponseResolver::new(ResolverConfig::from_env())?;
//! let reply = resolver.resolve("What services do you offer?").await;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod conversation;
pub mod error;
pub mod fallback;
pub mod prelude;
pub mod provider;
pub mod resolver;
pub mod types;
pub mod util;
pub mod widget;

#[cfg(feature = "cli")]
pub mod cli;
