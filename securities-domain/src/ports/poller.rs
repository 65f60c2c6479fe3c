//! 区块链轮询端口
//!
//! `start/stop/restart` 生命周期契约：核心只触发生命周期切换，
//! 不感知轮询器内部状态与实现细节。
//!
use async_trait::async_trait;

use crate::error::DomainResult;

/// 区块链轮询器生命周期
#[async_trait]
pub trait BlockchainPoller: Send + Sync {
    /// 启动轮询；已在运行时返回 `SyncAlreadyRunning`
    async fn start(&self) -> DomainResult<()>;

    /// 停止轮询；未在运行时返回 `SyncNotRunning`
    async fn stop(&self) -> DomainResult<()>;

    /// 重启轮询（默认实现：先停再启）
    async fn restart(&self) -> DomainResult<()> {
        self.stop().await?;
        self.start().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingPoller {
        running: Mutex<bool>,
        calls: Mutex<Vec<&'static str>>,
    }

    #[async_trait]
    impl BlockchainPoller for RecordingPoller {
        async fn start(&self) -> DomainResult<()> {
            let mut running = self.running.lock().unwrap();
            if *running {
                return Err(DomainError::SyncAlreadyRunning);
            }
            *running = true;
            self.calls.lock().unwrap().push("start");
            Ok(())
        }

        async fn stop(&self) -> DomainResult<()> {
            let mut running = self.running.lock().unwrap();
            if !*running {
                return Err(DomainError::SyncNotRunning);
            }
            *running = false;
            self.calls.lock().unwrap().push("stop");
            Ok(())
        }
    }

    // 默认 restart = stop + start
    #[tokio::test]
    async fn restart_stops_then_starts() {
        let poller = RecordingPoller::default();
        poller.start().await.unwrap();
        poller.restart().await.unwrap();
        assert_eq!(*poller.calls.lock().unwrap(), vec!["start", "stop", "start"]);
    }

    #[tokio::test]
    async fn lifecycle_preconditions() {
        let poller = RecordingPoller::default();
        // 未启动时 stop -> SyncNotRunning
        let err = poller.stop().await.unwrap_err();
        assert_eq!(err.code(), "SYNC_NOT_RUNNING");

        poller.start().await.unwrap();
        let err = poller.start().await.unwrap_err();
        assert_eq!(err.code(), "SYNC_ALREADY_RUNNING");
    }
}
