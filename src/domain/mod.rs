//! Domain types for the CarloSphere client.
//!
//! Everything here is plain data and pure functions: wire types for the
//! backend, the session model, wallet snapshot/transaction types with
//! filtering, statement rendering, and the chat mockup data.

pub mod chat;
pub mod error;
pub mod session;
pub mod statement;
pub mod wallet;

// ============================================================================
// Re-exports
// ============================================================================

pub use chat::{ChatPreview, demo_chats, filter_chats};
pub use error::ApiError;
pub use session::{Session, UserProfile};
pub use statement::{render_statement, statement_dir, write_statement};
pub use wallet::{
    KindFilter, Transaction, TxnKind, TxnStatus, WalletSnapshot, balance_line,
    filter_transactions,
};
