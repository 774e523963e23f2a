// TransferSession - Producer-Consumerオーケストレーション
// キュー・入力・出力を所有し、両ワーカーの完了を待ってから結果を公開する

use super::{consumer::spawn_consumer, producer::spawn_producer};
use crate::core::{
    QueueCapacity, TransferConfig, TransferError, TransferObserver, TransferResult,
    TransferSummary, WorkerState,
};
use crate::queue::BoundedQueue;
use crate::services::{ConsoleTransferObserver, NoOpTransferObserver};
use std::sync::Arc;
use std::time::Instant;

/// 1回分の転送セッション
///
/// 入力シーケンスはrun()でProducerに引き渡され、出力シーケンスは
/// Consumerだけが構築する。run()がOkを返した時点で、出力は入力と
/// 要素・順序ともに完全一致することが保証される
pub struct TransferSession<T, R = NoOpTransferObserver> {
    input: Option<Vec<T>>,
    capacity: QueueCapacity,
    observer: Arc<R>,
    output: Vec<T>,
    producer_state: WorkerState,
    consumer_state: WorkerState,
}

impl<T> TransferSession<T, NoOpTransferObserver>
where
    T: Send + 'static,
{
    /// 観測フックなしのセッションを作成
    pub fn new(input: Vec<T>, capacity: QueueCapacity) -> Self {
        Self::with_observer(input, capacity, Arc::new(NoOpTransferObserver::new()))
    }
}

impl<T> TransferSession<T, Box<dyn TransferObserver>>
where
    T: Send + 'static,
{
    /// 設定オブジェクトからセッションを作成
    ///
    /// 進捗報告が有効ならコンソール観測、無効なら静音観測を選択する
    pub fn from_config(input: Vec<T>, config: &dyn TransferConfig) -> Self {
        let observer: Box<dyn TransferObserver> = if config.enable_progress_reporting() {
            Box::new(ConsoleTransferObserver::new())
        } else {
            Box::new(NoOpTransferObserver::new())
        };
        Self::with_observer(input, config.queue_capacity(), Arc::new(observer))
    }
}

impl<T, R> TransferSession<T, R>
where
    T: Send + 'static,
    R: TransferObserver + 'static,
{
    /// 観測フック付きのセッションを作成
    pub fn with_observer(input: Vec<T>, capacity: QueueCapacity, observer: Arc<R>) -> Self {
        Self {
            input: Some(input),
            capacity,
            observer,
            output: Vec::new(),
            producer_state: WorkerState::NotStarted,
            consumer_state: WorkerState::NotStarted,
        }
    }

    /// 転送を実行し、両ワーカーの完了まで待機する
    ///
    /// ProducerとConsumerは独立した並行タスクとして起動され、セッション
    /// 自身はキューへの並行アクセスを行わない。契約違反やワーカーの異常
    /// 終了が起きた場合はErrを返し、部分的な出力を完了扱いで公開しない
    pub async fn run(&mut self) -> TransferResult<TransferSummary> {
        let items = self
            .input
            .take()
            .ok_or_else(TransferError::session_already_run)?;
        let total_items = items.len();
        let start_time = Instant::now();

        let queue = Arc::new(BoundedQueue::new(self.capacity));
        self.observer.report_started(total_items).await;

        self.producer_state = WorkerState::Running;
        self.consumer_state = WorkerState::Running;

        let producer_handle =
            spawn_producer(items, Arc::clone(&queue), Arc::clone(&self.observer));
        let consumer_handle = spawn_consumer(Arc::clone(&queue), Arc::clone(&self.observer));

        let produced = match producer_handle.await {
            Ok(Ok(count)) => {
                // close()が返った後にのみFinishedへ遷移する
                self.producer_state = WorkerState::Finished;
                count
            }
            Ok(Err(violation)) => {
                // キューは既にクローズ済みなのでコンシューマは自然終了するが、
                // セッション自体は中断となるため結果は破棄する
                consumer_handle.abort();
                return Err(violation);
            }
            Err(join_error) => {
                // プロデューサがパニックした場合はclose()が呼ばれておらず、
                // コンシューマが永遠に待ち続けるため明示的に中断する
                consumer_handle.abort();
                return Err(TransferError::worker_join(join_error));
            }
        };

        let destination = consumer_handle
            .await
            .map_err(TransferError::worker_join)?;
        self.consumer_state = WorkerState::Finished;

        debug_assert_eq!(produced, total_items);
        self.output = destination;

        let total_transfer_time_ms = start_time.elapsed().as_millis() as u64;
        let average_time_per_item_ms = if total_items > 0 {
            total_transfer_time_ms as f64 / total_items as f64
        } else {
            0.0
        };

        self.observer.report_completed(self.output.len()).await;

        Ok(TransferSummary {
            total_items,
            transferred_items: self.output.len(),
            total_transfer_time_ms,
            average_time_per_item_ms,
        })
    }

    /// 出力シーケンスへの参照（run()がOkを返した後にのみ意味を持つ）
    pub fn output(&self) -> &[T] {
        &self.output
    }

    /// 出力シーケンスの所有権を取得
    pub fn into_output(self) -> Vec<T> {
        self.output
    }

    /// Producerワーカーの状態
    pub fn producer_state(&self) -> WorkerState {
        self.producer_state
    }

    /// Consumerワーカーの状態
    pub fn consumer_state(&self) -> WorkerState {
        self.consumer_state
    }

    /// 両ワーカーがFinishedに到達したかどうか
    pub fn is_complete(&self) -> bool {
        self.producer_state == WorkerState::Finished
            && self.consumer_state == WorkerState::Finished
    }
}
