//! ConnectionRegistry の実装
//!
//! - `inmemory`: 単一プロセス内の HashMap 実装
//!
//! 複数プロセスで presence を共有するには外部ストア（pub/sub 等）が必要です。

pub mod inmemory;

pub use inmemory::InMemoryConnectionRegistry;
