// 共有FIFOキュー - モニタ構成のブロッキング境界付きキュー
// 単一プロデューサ・単一コンシューマ専用

use crate::core::{ClosedQueueError, QueueCapacity};
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::Notify;

/// キューの内部状態
///
/// バッファとclosedフラグはワーカー間で共有される唯一の可変状態であり、
/// アクセスは必ずこのミューテックス越しに行う
#[derive(Debug)]
struct QueueState<T> {
    buffer: VecDeque<T>,
    closed: bool,
}

/// 境界付きブロッキングFIFOキュー
///
/// ミューテックス + 2つの待機条件（空き待ち・アイテム待ち）からなる
/// モニタ構成。終端は予約値（センチネル）ではなくclosedフラグで表現する
/// ため、要素型Tはどんな値でも運搬できる。
///
/// 待機者はプロデューサ・コンシューマ各最大1名という前提で、
/// `Notify::notify_one`のパーミット保存により起床漏れは発生しない
#[derive(Debug)]
pub struct BoundedQueue<T> {
    state: Mutex<QueueState<T>>,
    capacity: QueueCapacity,
    space_available: Notify,
    item_available: Notify,
}

impl<T> BoundedQueue<T> {
    /// 指定容量のキューを作成
    ///
    /// 退化値`Bounded(0)`はそのまま使うと「満杯かつ空」のまま両ワーカーが
    /// 永久に待ち続けるため、`Unbounded`へ正規化してから保持する
    pub fn new(capacity: QueueCapacity) -> Self {
        let capacity = capacity.normalized();
        let buffer = match capacity {
            QueueCapacity::Bounded(max) => VecDeque::with_capacity(max),
            QueueCapacity::Unbounded => VecDeque::new(),
        };
        Self {
            state: Mutex::new(QueueState {
                buffer,
                closed: false,
            }),
            capacity,
            space_available: Notify::new(),
            item_available: Notify::new(),
        }
    }

    /// 末尾にitemを追加する
    ///
    /// 容量いっぱいの間は空きが出るまで待機する（無制限なら待機しない）。
    /// クローズ後のenqueueは契約違反として`ClosedQueueError`で即時失敗する
    pub async fn enqueue(&self, item: T) -> Result<(), ClosedQueueError> {
        loop {
            {
                let mut state = self.state.lock().unwrap();
                if state.closed {
                    return Err(ClosedQueueError);
                }
                if !self.capacity.is_reached(state.buffer.len()) {
                    state.buffer.push_back(item);
                    self.item_available.notify_one();
                    return Ok(());
                }
            }
            // ロックを手放してから空き待ち。待機登録前にdequeueが起きても
            // notify_oneのパーミットが残るため起床は失われない
            self.space_available.notified().await;
        }
    }

    /// 先頭のアイテムを取り出す
    ///
    /// 空の間はアイテム到着かクローズまで待機する。空かつクローズ済みの
    /// 場合は`None`（ストリーム終端）を返し、以後は常に即座に`None`を返す
    pub async fn dequeue(&self) -> Option<T> {
        loop {
            {
                let mut state = self.state.lock().unwrap();
                if let Some(item) = state.buffer.pop_front() {
                    self.space_available.notify_one();
                    return Some(item);
                }
                if state.closed {
                    return None;
                }
            }
            self.item_available.notified().await;
        }
    }

    /// クローズフラグを立てる（一方向遷移・冪等）
    ///
    /// 空キューで待機中のコンシューマを起こして終端を観測させる。
    /// 満杯待ちのプロデューサも起こし、契約違反を即座に表面化させる
    pub fn close(&self) {
        {
            let mut state = self.state.lock().unwrap();
            state.closed = true;
        }
        self.item_available.notify_one();
        self.space_available.notify_one();
    }

    /// 現在のキュー長（診断専用・制御フローには使用しない）
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().buffer.len()
    }

    /// キューが空かどうか（診断専用）
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// キューが満杯かどうか（診断専用）
    pub fn is_full(&self) -> bool {
        self.capacity.is_reached(self.len())
    }

    /// クローズ済みかどうか（診断専用）
    pub fn is_closed(&self) -> bool {
        self.state.lock().unwrap().closed
    }

    /// 構築時に指定された容量
    pub fn capacity(&self) -> QueueCapacity {
        self.capacity
    }
}
