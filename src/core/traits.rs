// 転送システムのトレイト定義
// 全ての抽象化インターフェースを定義

use super::types::QueueCapacity;
use async_trait::async_trait;
use mockall::automock;

/// 転送セッションの設定を抽象化するトレイト
#[automock]
pub trait TransferConfig: Send + Sync {
    /// 共有キューの容量を取得
    fn queue_capacity(&self) -> QueueCapacity;

    /// 進捗報告を有効にするかどうか
    fn enable_progress_reporting(&self) -> bool;
}

// TransferConfig for Box<dyn TransferConfig>
impl TransferConfig for Box<dyn TransferConfig> {
    fn queue_capacity(&self) -> QueueCapacity {
        self.as_ref().queue_capacity()
    }

    fn enable_progress_reporting(&self) -> bool {
        self.as_ref().enable_progress_reporting()
    }
}

/// 転送の観測フック抽象化トレイト
///
/// タイムスタンプやキュー長の記録といった計測は、処理に遅延を埋め込む
/// のではなくこのフック経由で外付けする。報告されるキュー長は診断専用で、
/// 制御フローの判断には使用しない
#[automock]
#[async_trait]
pub trait TransferObserver: Send + Sync {
    /// 転送開始時の報告
    async fn report_started(&self, total_items: usize);

    /// enqueue直後の報告（queue_lenは投入直後のキュー長）
    async fn report_enqueued(&self, queue_len: usize);

    /// dequeue直後の報告（queue_lenは取り出し直後のキュー長）
    async fn report_dequeued(&self, queue_len: usize);

    /// 転送完了時の報告
    async fn report_completed(&self, transferred_items: usize);
}

// TransferObserver for Box<dyn TransferObserver>
#[async_trait]
impl TransferObserver for Box<dyn TransferObserver> {
    async fn report_started(&self, total_items: usize) {
        self.as_ref().report_started(total_items).await
    }

    async fn report_enqueued(&self, queue_len: usize) {
        self.as_ref().report_enqueued(queue_len).await
    }

    async fn report_dequeued(&self, queue_len: usize) {
        self.as_ref().report_dequeued(queue_len).await
    }

    async fn report_completed(&self, transferred_items: usize) {
        self.as_ref().report_completed(transferred_items).await
    }
}
