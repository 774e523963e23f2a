// 転送処理に関連するデータ型定義

use serde::{Deserialize, Serialize};

/// キュー容量の表現
///
/// 数値の「0 = 無制限」という多重定義を避けるため、無制限を明示的な
/// バリアントとして表現する。旧規約からの変換は`from_limit`が担う
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueCapacity {
    /// 容量制限なし - enqueueは空き待ちでブロックしない
    Unbounded,
    /// 最大n個まで保持可能（n >= 1）
    ///
    /// `Bounded(0)`は「常に満杯かつ常に空」という退化値になるため、
    /// キュー構築時に`normalized`で`Unbounded`へ正規化される
    Bounded(usize),
}

impl QueueCapacity {
    /// 「0 = 無制限」規約の数値から容量を作成
    pub fn from_limit(limit: usize) -> Self {
        if limit == 0 {
            Self::Unbounded
        } else {
            Self::Bounded(limit)
        }
    }

    /// 退化値`Bounded(0)`を`Unbounded`へ正規化する
    ///
    /// `Bounded(0)`は直接構築やデシリアライズで到達可能だが、そのまま
    /// 使うと空のままブロックし続けるキューが生まれる。from_limitと
    /// 同じ「0 = 無制限」の解釈に揃える
    pub fn normalized(self) -> Self {
        match self {
            Self::Bounded(0) => Self::Unbounded,
            other => other,
        }
    }

    /// 指定のバッファ長で満杯に達しているかどうかを判定
    pub fn is_reached(&self, len: usize) -> bool {
        match self {
            Self::Unbounded => false,
            Self::Bounded(max) => len >= *max,
        }
    }

    /// 制限値を取得（無制限の場合はNone）
    pub fn limit(&self) -> Option<usize> {
        match self {
            Self::Unbounded => None,
            Self::Bounded(max) => Some(*max),
        }
    }
}

/// ワーカーの状態遷移
///
/// ProducerはNotStarted → Running → Finishedと遷移し、Finishedへは
/// close()が返った後にのみ到達する。ConsumerのFinishedはストリーム終端の
/// 観測後にのみ到達する
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    NotStarted,
    Running,
    Finished,
}

/// 転送セッション全体のサマリー
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferSummary {
    pub total_items: usize,
    pub transferred_items: usize,
    pub total_transfer_time_ms: u64,
    pub average_time_per_item_ms: f64,
}
