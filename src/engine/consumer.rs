// Consumer - 出力シーケンス構築ワーカー

use crate::core::TransferObserver;
use crate::queue::BoundedQueue;
use std::sync::Arc;

/// Consumer: ストリーム終端を観測するまでdequeueし続け、受け取った順に
/// 出力シーケンスへ追加する
///
/// 出力順序を定義するのはこの追加処理だけであり、enqueue順と一致する。
/// タイムアウトや早期終了の条件は存在しない
pub fn spawn_consumer<T, R>(
    queue: Arc<BoundedQueue<T>>,
    observer: Arc<R>,
) -> tokio::task::JoinHandle<Vec<T>>
where
    T: Send + 'static,
    R: TransferObserver + 'static,
{
    tokio::spawn(async move {
        let mut destination = Vec::new();
        while let Some(item) = queue.dequeue().await {
            destination.push(item);
            observer.report_dequeued(queue.len()).await;
        }
        destination
    })
}
