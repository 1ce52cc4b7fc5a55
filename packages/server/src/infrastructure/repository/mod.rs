//! Repository 実装
//!
//! - `inmemory`: プロセス内メモリを使った実装（挿入順を保持）

pub mod inmemory;

pub use inmemory::{InMemoryMessageRepository, InMemoryUserRepository};
