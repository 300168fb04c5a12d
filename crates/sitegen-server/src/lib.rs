//! Local application server hosting the generator page.
//!
//! Serves the page shell and its assets, and runs one UI session per
//! WebSocket connection. Each session owns its page state and issues the
//! generation call on the user's behalf.

pub mod server;
pub mod session;
pub mod websocket;

pub use server::{AppServer, AppServerConfig, ServerError};
pub use session::{run_session, Reaction, Session};
pub use websocket::{ClientEvent, ServerMessage};
