// 高レベル公開API
// TransferSessionを簡単に使用できるようにするための便利な関数

use super::session::TransferSession;
use crate::core::QueueCapacity;

/// 入力シーケンス全体を無制限キュー経由で転送する
///
/// セッションの構築・実行・出力取得をまとめた最短経路のAPI
pub async fn transfer<T>(items: Vec<T>) -> anyhow::Result<Vec<T>>
where
    T: Send + 'static,
{
    transfer_with_capacity(items, QueueCapacity::Unbounded).await
}

/// 容量を指定して入力シーケンス全体を転送する
///
/// 容量より入力が多い場合はバックプレッシャが発生するが、
/// 出力は容量によらず入力と完全一致する
pub async fn transfer_with_capacity<T>(
    items: Vec<T>,
    capacity: QueueCapacity,
) -> anyhow::Result<Vec<T>>
where
    T: Send + 'static,
{
    let mut session = TransferSession::new(items, capacity);
    session
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("転送エラー: {e}"))?;
    Ok(session.into_output())
}
