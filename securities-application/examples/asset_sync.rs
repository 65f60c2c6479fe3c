use async_trait::async_trait;
use securities_application::command_bus::CommandBus;
use securities_application::context::AppContext;
use securities_application::inmemory_command_bus::{CommandHandlerMap, InMemoryCommandBus};
use securities_application::middleware::TracingMiddleware;
use securities_application::sync::{
    RestartAssetSyncCommand, RestartAssetSyncHandler, StartAssetSyncCommand,
    StartAssetSyncHandler, StopAssetSyncCommand, StopAssetSyncHandler,
};
use securities_domain::error::{DomainError, DomainResult};
use securities_domain::ports::BlockchainPoller;
use std::sync::{Arc, Mutex};

/// 内存桩轮询器：真实实现会轮询镜像节点
#[derive(Default)]
struct StubPoller {
    running: Mutex<bool>,
}

#[async_trait]
impl BlockchainPoller for StubPoller {
    async fn start(&self) -> DomainResult<()> {
        let mut running = self.running.lock().unwrap();
        if *running {
            return Err(DomainError::SyncAlreadyRunning);
        }
        *running = true;
        println!("poller started");
        Ok(())
    }

    async fn stop(&self) -> DomainResult<()> {
        let mut running = self.running.lock().unwrap();
        if !*running {
            return Err(DomainError::SyncNotRunning);
        }
        *running = false;
        println!("poller stopped");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let poller = Arc::new(StubPoller::default());

    let commands = CommandHandlerMap::new();
    commands.register::<StartAssetSyncCommand, _>(Arc::new(StartAssetSyncHandler::new(
        poller.clone(),
    )))?;
    commands
        .register::<StopAssetSyncCommand, _>(Arc::new(StopAssetSyncHandler::new(poller.clone())))?;
    commands
        .register::<RestartAssetSyncCommand, _>(Arc::new(RestartAssetSyncHandler::new(poller)))?;

    // 日志中间件记录每次分发与失败
    let bus = InMemoryCommandBus::with_middlewares(commands, vec![Arc::new(TracingMiddleware)]);
    let ctx = AppContext::default();

    bus.dispatch(&ctx, StartAssetSyncCommand).await?;
    bus.dispatch(&ctx, RestartAssetSyncCommand).await?;
    bus.dispatch(&ctx, StopAssetSyncCommand).await?;

    // 已停止再停止 -> 冲突错误由调用方处理（核心不重试）
    if let Err(err) = bus.dispatch(&ctx, StopAssetSyncCommand).await {
        eprintln!("conflict as expected: code={}", err.code());
    }
    Ok(())
}
