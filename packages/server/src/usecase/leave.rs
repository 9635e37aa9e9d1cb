//! UseCase: connection leave

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry};

/// Connection leave use case
pub struct LeaveUseCase {
    registry: Arc<dyn ConnectionRegistry>,
}

impl LeaveUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// Remove the connection from future deliveries.
    ///
    /// Safe to call for a connection that never finished joining; returns
    /// whether it was registered.
    pub async fn execute(&self, connection_id: &ConnectionId) -> bool {
        self.registry.unregister(connection_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Connection, MockConnectionRegistry};
    use crate::infrastructure::registry::ChannelConnectionRegistry;
    use mockall::predicate::eq;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_leave_unregisters_connection() {
        // テスト項目: 退出した接続はレジストリから削除される
        // given (前提条件):
        let registry = Arc::new(ChannelConnectionRegistry::new());
        let (tx, _rx) = mpsc::channel(1);
        let id = ConnectionId::generate();
        registry.register(Connection::new(id, tx)).await;
        let usecase = LeaveUseCase::new(registry.clone());

        // when (操作):
        let removed = usecase.execute(&id).await;

        // then (期待する結果):
        assert!(removed);
        assert_eq!(registry.count().await, 0);
    }

    #[tokio::test]
    async fn test_leave_before_join_completed() {
        // テスト項目: 参加完了前の切断でもエラーにならない
        // given (前提条件):
        let id = ConnectionId::generate();
        let mut registry = MockConnectionRegistry::new();
        registry
            .expect_unregister()
            .with(eq(id))
            .times(1)
            .returning(|_| false);
        let usecase = LeaveUseCase::new(Arc::new(registry));

        // when (操作):
        let removed = usecase.execute(&id).await;

        // then (期待する結果):
        assert!(!removed);
    }
}
