//! 应用引导（Bootstrap）
//!
//! 处理器注册的唯一入口：在进程启动时调用一次 [`build_buses`]，
//! 将全部用例处理器显式注册进映射，再以映射构造只读的命令/查询总线。
//! 没有隐藏的全局可变状态，注册过程可单独测试。
//!
use std::sync::Arc;

use bon::Builder;

use securities_domain::ports::{
    AssetInfoService, AssetRegistry, BlockchainPoller, SecurityService,
};

use crate::asset::{
    ImportAssetCommand, ImportAssetHandler, ListAssetsHandler, ListAssetsQuery, RemoveAssetCommand,
    RemoveAssetHandler,
};
use crate::error::AppError;
use crate::inmemory_command_bus::{CommandHandlerMap, InMemoryCommandBus};
use crate::inmemory_query_bus::{InMemoryQueryBus, QueryHandlerMap};
use crate::middleware::Middleware;
use crate::security::{
    AddToControlListCommand, AddToControlListHandler, GetBalanceOfHandler, GetBalanceOfQuery,
    GetMaxSupplyHandler, GetMaxSupplyQuery, GetSecurityInfoHandler, GetSecurityInfoQuery,
    PauseCommand, PauseHandler, RemoveFromControlListCommand, RemoveFromControlListHandler,
    UnpauseCommand, UnpauseHandler,
};
use crate::sync::{
    RestartAssetSyncCommand, RestartAssetSyncHandler, StartAssetSyncCommand,
    StartAssetSyncHandler, StopAssetSyncCommand, StopAssetSyncHandler,
};

/// 应用端口集合（引导期一次性装配）
#[derive(Builder, Clone)]
pub struct AppPorts {
    security: Arc<dyn SecurityService>,
    asset_info: Arc<dyn AssetInfoService>,
    asset_registry: Arc<dyn AssetRegistry>,
    poller: Arc<dyn BlockchainPoller>,
}

impl AppPorts {
    pub fn security(&self) -> Arc<dyn SecurityService> {
        self.security.clone()
    }

    pub fn asset_info(&self) -> Arc<dyn AssetInfoService> {
        self.asset_info.clone()
    }

    pub fn asset_registry(&self) -> Arc<dyn AssetRegistry> {
        self.asset_registry.clone()
    }

    pub fn poller(&self) -> Arc<dyn BlockchainPoller> {
        self.poller.clone()
    }
}

/// 装配命令/查询总线
///
/// 注册全部用例处理器并套上给定的中间件链；同一中间件链同时作用于
/// 两条总线。重复注册（不应发生）以冲突错误返回而非 panic。
pub fn build_buses(
    ports: &AppPorts,
    middlewares: Vec<Arc<dyn Middleware>>,
) -> Result<(InMemoryCommandBus, InMemoryQueryBus), AppError> {
    let commands = CommandHandlerMap::new();
    commands.register::<PauseCommand, _>(Arc::new(PauseHandler::new(ports.security())))?;
    commands.register::<UnpauseCommand, _>(Arc::new(UnpauseHandler::new(ports.security())))?;
    commands.register::<AddToControlListCommand, _>(Arc::new(AddToControlListHandler::new(
        ports.security(),
    )))?;
    commands.register::<RemoveFromControlListCommand, _>(Arc::new(
        RemoveFromControlListHandler::new(ports.security()),
    ))?;
    commands
        .register::<ImportAssetCommand, _>(Arc::new(ImportAssetHandler::new(ports.asset_registry())))?;
    commands
        .register::<RemoveAssetCommand, _>(Arc::new(RemoveAssetHandler::new(ports.asset_registry())))?;
    commands
        .register::<StartAssetSyncCommand, _>(Arc::new(StartAssetSyncHandler::new(ports.poller())))?;
    commands
        .register::<StopAssetSyncCommand, _>(Arc::new(StopAssetSyncHandler::new(ports.poller())))?;
    commands.register::<RestartAssetSyncCommand, _>(Arc::new(RestartAssetSyncHandler::new(
        ports.poller(),
    )))?;

    let queries = QueryHandlerMap::new();
    queries.register::<GetMaxSupplyQuery, _>(Arc::new(GetMaxSupplyHandler::new(ports.asset_info())))?;
    queries
        .register::<GetBalanceOfQuery, _>(Arc::new(GetBalanceOfHandler::new(ports.asset_info())))?;
    queries.register::<GetSecurityInfoQuery, _>(Arc::new(GetSecurityInfoHandler::new(
        ports.asset_info(),
    )))?;
    queries.register::<ListAssetsQuery, _>(Arc::new(ListAssetsHandler::new(ports.asset_registry())))?;

    Ok((
        InMemoryCommandBus::with_middlewares(commands, middlewares.clone()),
        InMemoryQueryBus::with_middlewares(queries, middlewares),
    ))
}
