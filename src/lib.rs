pub mod core;
pub mod engine;
pub mod queue;
pub mod services;

// 公開API - 主要な型とエントリポイントを明示的にエクスポート
pub use crate::core::{
    ClosedQueueError, QueueCapacity, TransferConfig, TransferError, TransferObserver,
    TransferResult, TransferSummary, WorkerState,
};
pub use engine::{transfer, transfer_with_capacity, TransferSession};
pub use queue::BoundedQueue;
pub use services::{
    ConsoleTransferObserver, DefaultTransferConfig, NoOpTransferObserver, QueueDepthProbe,
};
