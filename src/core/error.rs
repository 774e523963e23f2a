// 転送処理専用のカスタムエラー型定義

use thiserror::Error;

/// クローズ済みキューへのenqueueを表すエラー
///
/// このコアで発生しうる唯一のキューレベルエラー。契約上、close()は
/// プロデューサが最後のenqueueの後に一度だけ呼ぶものなので、
/// このエラーは常に致命的な契約違反でありリトライ対象ではない
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("クローズ済みキューへのenqueueは許可されていません")]
pub struct ClosedQueueError;

/// 転送セッション固有のエラー型
#[derive(Error, Debug)]
pub enum TransferError {
    #[error("契約違反: {source}")]
    ContractViolation {
        #[from]
        source: ClosedQueueError,
    },

    #[error("ワーカータスクエラー: {source}")]
    WorkerJoin {
        #[from]
        source: tokio::task::JoinError,
    },

    #[error("セッションは既に実行済みです")]
    SessionAlreadyRun,
}

impl TransferError {
    /// 契約違反エラーの作成
    pub fn contract_violation(source: ClosedQueueError) -> Self {
        Self::ContractViolation { source }
    }

    /// ワーカーjoinエラーの作成
    pub fn worker_join(source: tokio::task::JoinError) -> Self {
        Self::WorkerJoin { source }
    }

    /// 再実行エラーの作成
    pub fn session_already_run() -> Self {
        Self::SessionAlreadyRun
    }

    /// エラーが回復可能かどうかを判定
    ///
    /// FIFO不変条件が信用できなくなるため、契約違反とワーカー異常終了は
    /// いずれもセッション中断を要する
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::ContractViolation { .. } => false,
            Self::WorkerJoin { .. } => false,
            Self::SessionAlreadyRun => false,
        }
    }
}

/// 転送処理の結果型
pub type TransferResult<T> = std::result::Result<T, TransferError>;
