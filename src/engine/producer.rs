// Producer - 入力シーケンス配信ワーカー

use crate::core::{TransferObserver, TransferResult};
use crate::queue::BoundedQueue;
use std::sync::Arc;

/// Producer: 入力シーケンスの全要素を順番どおりにキューへ投入し、
/// 最後の要素の後でclose()をちょうど一度だけ呼ぶ
///
/// enqueueの失敗は「このプロデューサ以外の誰かがキューをクローズした」
/// ことを意味し、FIFO不変条件が信用できなくなるため、致命的な契約違反
/// としてそのまま伝播する（リトライしない）
pub fn spawn_producer<T, R>(
    items: Vec<T>,
    queue: Arc<BoundedQueue<T>>,
    observer: Arc<R>,
) -> tokio::task::JoinHandle<TransferResult<usize>>
where
    T: Send + 'static,
    R: TransferObserver + 'static,
{
    tokio::spawn(async move {
        let mut produced = 0usize;
        for item in items {
            queue.enqueue(item).await?;
            produced += 1;
            observer.report_enqueued(queue.len()).await;
        }
        // 最後のenqueueの後にのみクローズする
        queue.close();
        Ok(produced)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{QueueCapacity, TransferError};
    use crate::services::NoOpTransferObserver;
    use tokio::time::{timeout, Duration};

    #[tokio::test]
    async fn test_producer_enqueues_all_items_in_order() {
        let queue = Arc::new(BoundedQueue::new(QueueCapacity::Unbounded));
        let items = vec![1, 2, 3, 4, 5];

        let handle = spawn_producer(
            items.clone(),
            Arc::clone(&queue),
            Arc::new(NoOpTransferObserver::new()),
        );

        let produced = handle.await.unwrap().unwrap();
        assert_eq!(produced, 5);
        assert!(queue.is_closed());

        for expected in items {
            assert_eq!(queue.dequeue().await, Some(expected));
        }
        assert_eq!(queue.dequeue().await, None);
    }

    #[tokio::test]
    async fn test_producer_empty_input_closes_immediately() {
        let queue = Arc::new(BoundedQueue::<i32>::new(QueueCapacity::Unbounded));

        let handle = spawn_producer(
            vec![],
            Arc::clone(&queue),
            Arc::new(NoOpTransferObserver::new()),
        );

        let produced = handle.await.unwrap().unwrap();
        assert_eq!(produced, 0);
        assert!(queue.is_closed());
        assert_eq!(queue.dequeue().await, None);
    }

    #[tokio::test]
    async fn test_producer_surfaces_contract_violation() {
        let queue = Arc::new(BoundedQueue::new(QueueCapacity::Unbounded));
        // プロデューサ以外によるクローズは契約違反のシナリオ
        queue.close();

        let handle = spawn_producer(
            vec![1, 2, 3],
            Arc::clone(&queue),
            Arc::new(NoOpTransferObserver::new()),
        );

        let result = handle.await.unwrap();
        assert!(matches!(
            result,
            Err(TransferError::ContractViolation { .. })
        ));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_producer_blocks_on_bounded_queue() {
        let queue = Arc::new(BoundedQueue::new(QueueCapacity::Bounded(2)));

        let handle = spawn_producer(
            vec![1, 2, 3, 4],
            Arc::clone(&queue),
            Arc::new(NoOpTransferObserver::new()),
        );

        // コンシューマがいないため、容量分を投入した時点で停止する
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!handle.is_finished());
        assert_eq!(queue.len(), 2);

        // 取り出しを進めればプロデューサは完走する
        assert_eq!(queue.dequeue().await, Some(1));
        assert_eq!(queue.dequeue().await, Some(2));
        assert_eq!(queue.dequeue().await, Some(3));
        assert_eq!(queue.dequeue().await, Some(4));

        let produced = timeout(Duration::from_secs(1), handle)
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        assert_eq!(produced, 4);
    }
}
