use async_trait::async_trait;
use chrono::Utc;
use securities_application::asset::{ImportAssetCommand, ImportAssetRequest, ListAssetsQuery};
use securities_application::bootstrap::{AppPorts, build_buses};
use securities_application::command::Command;
use securities_application::command_bus::CommandBus;
use securities_application::context::AppContext;
use securities_application::error::AppError;
use securities_application::middleware::TracingMiddleware;
use securities_application::query_bus::QueryBus;
use securities_application::security::{
    GetMaxSupplyQuery, GetMaxSupplyRequest, GetSecurityInfoQuery, GetSecurityInfoRequest,
    PauseCommand, PauseRequest, UnpauseCommand, UnpauseRequest,
};
use securities_application::sync::{StartAssetSyncCommand, StopAssetSyncCommand};
use securities_domain::context::BusinessContext;
use securities_domain::error::{DomainError, DomainResult};
use securities_domain::network::NetworkConfig;
use securities_domain::ports::{
    AssetInfoService, AssetRegistry, BlockchainPoller, SecurityService,
};
use securities_domain::value_object::{AccountId, Amount, EvmAddress, SecurityId};
use securities_domain::view::{AssetView, SecurityInfoView};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// 内存账本：四个端口的演示实现，真实部署中由账本 SDK 适配器替代
#[derive(Default)]
struct InMemoryLedger {
    paused: Mutex<HashSet<String>>,
    assets: Mutex<HashMap<String, AssetView>>,
}

#[async_trait]
impl SecurityService for InMemoryLedger {
    async fn pause(&self, security_id: &SecurityId) -> DomainResult<bool> {
        let mut paused = self.paused.lock().unwrap();
        if !paused.insert(security_id.as_str().to_string()) {
            return Err(DomainError::AlreadyPaused {
                security_id: security_id.to_string(),
            });
        }
        Ok(true)
    }

    async fn unpause(&self, security_id: &SecurityId) -> DomainResult<bool> {
        let mut paused = self.paused.lock().unwrap();
        if !paused.remove(security_id.as_str()) {
            return Err(DomainError::NotPaused {
                security_id: security_id.to_string(),
            });
        }
        Ok(true)
    }

    async fn add_to_control_list(
        &self,
        _security_id: &SecurityId,
        _target: &AccountId,
    ) -> DomainResult<bool> {
        Ok(true)
    }

    async fn remove_from_control_list(
        &self,
        _security_id: &SecurityId,
        _target: &AccountId,
    ) -> DomainResult<bool> {
        Ok(true)
    }
}

#[async_trait]
impl AssetInfoService for InMemoryLedger {
    async fn max_supply(&self, _security_id: &SecurityId) -> DomainResult<Amount> {
        Ok(Amount::from_value(1_000_000))
    }

    async fn balance_of(
        &self,
        _security_id: &SecurityId,
        _target: &AccountId,
    ) -> DomainResult<Amount> {
        Ok(Amount::from_value(250))
    }

    async fn security_info(&self, security_id: &SecurityId) -> DomainResult<SecurityInfoView> {
        let paused = self
            .paused
            .lock()
            .unwrap()
            .contains(security_id.as_str());
        Ok(SecurityInfoView::builder()
            .security_id(security_id.clone())
            .name("Demo Equity".into())
            .symbol("DEQ".into())
            .decimals(6)
            .paused(paused)
            .max_supply(Amount::from_value(1_000_000))
            .total_supply(Amount::from_value(250_000))
            .build())
    }
}

#[async_trait]
impl AssetRegistry for InMemoryLedger {
    async fn import_asset(&self, address: &EvmAddress) -> DomainResult<AssetView> {
        let view = AssetView::builder()
            .address(address.clone())
            .name("Imported Bond".into())
            .symbol("IBND".into())
            .imported_at(Utc::now())
            .build();
        self.assets
            .lock()
            .unwrap()
            .insert(address.as_str().to_string(), view.clone());
        Ok(view)
    }

    async fn remove_asset(&self, address: &EvmAddress) -> DomainResult<bool> {
        match self.assets.lock().unwrap().remove(address.as_str()) {
            Some(_) => Ok(true),
            None => Err(DomainError::AssetNotFound {
                address: address.to_string(),
            }),
        }
    }

    async fn list_assets(&self) -> DomainResult<Vec<AssetView>> {
        Ok(self.assets.lock().unwrap().values().cloned().collect())
    }
}

/// 演示轮询器：只记录生命周期切换
struct DemoPoller {
    config: NetworkConfig,
    running: Mutex<bool>,
}

impl DemoPoller {
    fn new(config: NetworkConfig) -> Self {
        Self {
            config,
            running: Mutex::new(false),
        }
    }
}

#[async_trait]
impl BlockchainPoller for DemoPoller {
    async fn start(&self) -> DomainResult<()> {
        let mut running = self.running.lock().unwrap();
        if *running {
            return Err(DomainError::SyncAlreadyRunning);
        }
        *running = true;
        tracing::info!(
            mirror_node = self.config.mirror_node_url(),
            interval_ms = self.config.poll_interval_ms(),
            "poller started"
        );
        Ok(())
    }

    async fn stop(&self) -> DomainResult<()> {
        let mut running = self.running.lock().unwrap();
        if !*running {
            return Err(DomainError::SyncNotRunning);
        }
        *running = false;
        tracing::info!("poller stopped");
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,securities_application=debug".into()),
        )
        .init();

    let config: NetworkConfig = serde_json::from_str(
        r#"{
            "environment": "testnet",
            "mirror_node_url": "https://testnet.mirrornode.example.com",
            "rpc_relay_url": "https://testnet.rpc.example.com",
            "poll_interval_ms": 3000
        }"#,
    )?;

    let ledger = Arc::new(InMemoryLedger::default());
    let ports = AppPorts::builder()
        .security(ledger.clone() as Arc<dyn SecurityService>)
        .asset_info(ledger.clone() as Arc<dyn AssetInfoService>)
        .asset_registry(ledger as Arc<dyn AssetRegistry>)
        .poller(Arc::new(DemoPoller::new(config)) as Arc<dyn BlockchainPoller>)
        .build();

    // 引导期一次性注册；两条总线共享同一条日志中间件链
    let (commands, queries) = build_buses(&ports, vec![Arc::new(TracingMiddleware)])?;

    let ctx = AppContext {
        biz: BusinessContext::builder()
            .maybe_correlation_id(Some("cor-demo".into()))
            .maybe_actor_type(Some("user".into()))
            .maybe_actor_id(Some("u-1".into()))
            .build(),
        idempotency_key: None,
    };

    // 暂停/恢复
    let resp = commands
        .dispatch(&ctx, PauseCommand::try_from(PauseRequest::new("0.0.999")?)?)
        .await?;
    println!("pause: payload={}", resp.payload);

    let info = queries
        .dispatch(
            &ctx,
            GetSecurityInfoQuery::try_from(GetSecurityInfoRequest::new("0.0.999")?)?,
        )
        .await?;
    println!("paused while paused: {}", info.0.paused());

    let resp = commands
        .dispatch(
            &ctx,
            UnpauseCommand::try_from(UnpauseRequest::new("0.0.999")?)?,
        )
        .await?;
    println!("unpause: payload={}", resp.payload);

    // 查询最大供应量
    let dto = queries
        .dispatch(
            &ctx,
            GetMaxSupplyQuery::try_from(GetMaxSupplyRequest::new("0.0.1234")?)?,
        )
        .await?;
    println!("max supply: {}", dto.max_supply);

    // 资产导入与列表
    let cmd = ImportAssetCommand::try_from(ImportAssetRequest::new(
        "0x1234567890abcdef1234567890abcdef12345678",
    )?)?;
    let resp = commands.dispatch(&ctx, cmd).await?;
    println!("imported: {}", resp.payload.address());

    let assets = queries.dispatch(&ctx, ListAssetsQuery).await?;
    println!("assets: count={}", assets.0.len());

    // 资产同步生命周期
    commands.dispatch(&ctx, StartAssetSyncCommand).await?;
    commands.dispatch(&ctx, StopAssetSyncCommand).await?;

    // 非法标识在请求构造时即被拒绝
    if let Err(AppError::InvalidRequest { field, value }) = GetMaxSupplyRequest::new("not-an-id") {
        eprintln!("rejected as expected: field={field}, value={value}");
    }

    // 未注册的命令 -> HandlerNotFound 错误
    #[derive(Debug)]
    struct BurnCommand;

    #[derive(Debug, serde::Serialize)]
    struct BurnCommandResponse;

    impl Command for BurnCommand {
        const NAME: &'static str = "security.burn";
        type Response = BurnCommandResponse;
    }

    if let Err(AppError::HandlerNotFound(name)) = commands.dispatch(&ctx, BurnCommand).await {
        eprintln!("not found as expected for command: {name}");
    }
    Ok(())
}
