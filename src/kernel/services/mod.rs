//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the app (kernel-facing).
//! - `adapters`: OS/runtime specific implementations (IO/async).

pub mod adapters;
pub mod bus;
pub mod host;
pub mod ports;

pub use bus::{action_bus, ActionReceiver, ActionSender, Received};
pub use host::{ServiceContext, ServiceHost};
