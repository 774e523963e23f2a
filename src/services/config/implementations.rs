// 設定管理の具象実装

use crate::core::{QueueCapacity, TransferConfig};

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultTransferConfig {
    capacity: QueueCapacity,
    enable_progress: bool,
}

impl DefaultTransferConfig {
    pub fn new(capacity: QueueCapacity) -> Self {
        Self {
            capacity,
            enable_progress: true,
        }
    }

    pub fn with_capacity(mut self, capacity: QueueCapacity) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }
}

impl Default for DefaultTransferConfig {
    fn default() -> Self {
        Self {
            capacity: QueueCapacity::Unbounded,
            enable_progress: true,
        }
    }
}

impl TransferConfig for DefaultTransferConfig {
    fn queue_capacity(&self) -> QueueCapacity {
        self.capacity
    }

    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }
}
