// 転送観測機能
// 進捗の報告とキュー長の計測

pub mod implementations;

// 公開API
pub use implementations::{ConsoleTransferObserver, NoOpTransferObserver, QueueDepthProbe};
