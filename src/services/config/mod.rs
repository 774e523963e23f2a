// 転送設定機能

pub mod implementations;

// 公開API
pub use implementations::DefaultTransferConfig;
