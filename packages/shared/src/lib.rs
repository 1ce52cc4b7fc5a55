//! Tayori 共通ライブラリ
//!
//! サーバーとテストから共有されるユーティリティ（ロガー、時刻）を提供します。

pub mod logger;
pub mod time;
