//! Compose Discord webhook messages, check them against Discord's limits,
//! turn them into wire JSON and send them.
//!
//! ```rust
//! use webhook_composer::{Embed, Message, build, parse, validate};
//!
//! let message = Message::new()
//!     .with_content("**Deploy** finished")
//!     .with_embed(Embed::new().with_title("v1.2.0").with_color("#57f287"));
//!
//! assert!(validate(&message).is_empty());
//! assert_eq!(parse(&message.content).len(), 2);
//! assert_eq!(build(&message).embeds.map(|e| e.len()), Some(1));
//! ```

pub mod composer;
pub mod config;
pub mod discord;
pub mod error;
pub mod limits;
pub mod markup;
pub mod models;
pub mod payload;
pub mod timestamp;
pub mod traits;
pub mod validator;

pub use composer::Composer;
pub use discord::{WebhookClient, send};
pub use error::{Result, WebhookError};
pub use limits::Limits;
pub use markup::{ParsedNode, parse};
pub use models::{Embed, Message, WirePayload};
pub use payload::build;
pub use validator::{Violation, validate};
