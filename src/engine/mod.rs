// エンジン層 - 並行転送とオーケストレーション
// キューとワーカーを組み合わせて高レベルな転送処理を提供

pub mod api;
pub mod consumer;
pub mod producer;
pub mod session;

// 公開API - 主要エントリポイント
pub use api::{transfer, transfer_with_capacity};
pub use session::TransferSession;
