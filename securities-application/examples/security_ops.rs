use async_trait::async_trait;
use securities_application::command_bus::CommandBus;
use securities_application::context::AppContext;
use securities_application::error::AppError;
use securities_application::inmemory_command_bus::{CommandHandlerMap, InMemoryCommandBus};
use securities_application::inmemory_query_bus::{InMemoryQueryBus, QueryHandlerMap};
use securities_application::query_bus::QueryBus;
use securities_application::security::{
    GetMaxSupplyHandler, GetMaxSupplyQuery, GetMaxSupplyRequest, PauseCommand, PauseHandler,
    PauseRequest, UnpauseCommand, UnpauseHandler, UnpauseRequest,
};
use securities_domain::context::BusinessContext;
use securities_domain::error::{DomainError, DomainResult};
use securities_domain::ports::{AssetInfoService, SecurityService};
use securities_domain::value_object::{AccountId, Amount, SecurityId};
use securities_domain::view::SecurityInfoView;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// 内存桩：真实实现会委托账本 SDK
#[derive(Default)]
struct InMemoryLedger {
    paused: Mutex<HashSet<String>>,
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

struct FixedAssetInfo;

#[async_trait]
impl AssetInfoService for FixedAssetInfo {
    async fn max_supply(&self, _security_id: &SecurityId) -> DomainResult<Amount> {
        Ok(Amount::from_value(1_000_000))
    }

    async fn balance_of(
        &self,
        _security_id: &SecurityId,
        _target: &AccountId,
    ) -> DomainResult<Amount> {
        Ok(Amount::from_value(0))
    }

    async fn security_info(&self, security_id: &SecurityId) -> DomainResult<SecurityInfoView> {
        Ok(SecurityInfoView::builder()
            .security_id(security_id.clone())
            .name("Demo Equity".into())
            .symbol("DEQ".into())
            .decimals(6)
            .paused(false)
            .max_supply(Amount::from_value(1_000_000))
            .total_supply(Amount::from_value(0))
            .build())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ledger = Arc::new(InMemoryLedger::default());

    let commands = CommandHandlerMap::new();
    commands.register::<PauseCommand, _>(Arc::new(PauseHandler::new(ledger.clone())))?;
    commands.register::<UnpauseCommand, _>(Arc::new(UnpauseHandler::new(ledger)))?;
    let command_bus = InMemoryCommandBus::new(commands);

    let queries = QueryHandlerMap::new();
    queries.register::<GetMaxSupplyQuery, _>(Arc::new(GetMaxSupplyHandler::new(Arc::new(
        FixedAssetInfo,
    ))))?;
    let query_bus = InMemoryQueryBus::new(queries);

    let ctx = AppContext {
        biz: BusinessContext::builder()
            .maybe_correlation_id(Some("cor-1".into()))
            .maybe_actor_type(Some("user".into()))
            .maybe_actor_id(Some("u-1".into()))
            .build(),
        idempotency_key: Some("idem-1".into()),
    };

    // 入口层拿到的是原始字符串：先过请求校验，再转成命令分发
    let req = PauseRequest::new("0.0.999")?;
    let resp = command_bus.dispatch(&ctx, PauseCommand::try_from(req)?).await?;
    println!("pause: payload={}", resp.payload);

    let req = UnpauseRequest::new("0.0.999")?;
    let resp = command_bus
        .dispatch(&ctx, UnpauseCommand::try_from(req)?)
        .await?;
    println!("unpause: payload={}", resp.payload);

    let req = GetMaxSupplyRequest::new("0.0.1234")?;
    let dto = query_bus
        .dispatch(&ctx, GetMaxSupplyQuery::try_from(req)?)
        .await?;
    println!("max supply: {}", dto.max_supply);

    // 非法标识在请求构造时即被拒绝
    if let Err(AppError::InvalidRequest { field, value }) = PauseRequest::new("not-an-id") {
        eprintln!("rejected as expected: field={field}, value={value}");
    }
    Ok(())
}
