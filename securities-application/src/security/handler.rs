//! 证券用例处理器
//!
//! 每个处理器恰好做一次端口委托并回传结果；前置条件与账本语义
//! 由端口实现负责。
//!
use std::sync::Arc;

use async_trait::async_trait;

use securities_domain::ports::{AssetInfoService, SecurityService};

use crate::command_handler::CommandHandler;
use crate::context::AppContext;
use crate::error::AppError;
use crate::query_handler::QueryHandler;

use super::command::{
    AddToControlListCommand, AddToControlListCommandResponse, PauseCommand, PauseCommandResponse,
    RemoveFromControlListCommand, RemoveFromControlListCommandResponse, UnpauseCommand,
    UnpauseCommandResponse,
};
use super::query::{
    BalanceDto, GetBalanceOfQuery, GetMaxSupplyQuery, GetSecurityInfoQuery, MaxSupplyDto,
    SecurityInfoDto,
};

pub struct PauseHandler {
    service: Arc<dyn SecurityService>,
}

impl PauseHandler {
    pub fn new(service: Arc<dyn SecurityService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CommandHandler<PauseCommand> for PauseHandler {
    async fn handle(
        &self,
        _ctx: &AppContext,
        cmd: PauseCommand,
    ) -> Result<PauseCommandResponse, AppError> {
        let payload = self.service.pause(&cmd.security_id).await?;
        Ok(PauseCommandResponse { payload })
    }
}

pub struct UnpauseHandler {
    service: Arc<dyn SecurityService>,
}

impl UnpauseHandler {
    pub fn new(service: Arc<dyn SecurityService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CommandHandler<UnpauseCommand> for UnpauseHandler {
    async fn handle(
        &self,
        _ctx: &AppContext,
        cmd: UnpauseCommand,
    ) -> Result<UnpauseCommandResponse, AppError> {
        let payload = self.service.unpause(&cmd.security_id).await?;
        Ok(UnpauseCommandResponse { payload })
    }
}

pub struct AddToControlListHandler {
    service: Arc<dyn SecurityService>,
}

impl AddToControlListHandler {
    pub fn new(service: Arc<dyn SecurityService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CommandHandler<AddToControlListCommand> for AddToControlListHandler {
    async fn handle(
        &self,
        _ctx: &AppContext,
        cmd: AddToControlListCommand,
    ) -> Result<AddToControlListCommandResponse, AppError> {
        let payload = self
            .service
            .add_to_control_list(&cmd.security_id, &cmd.target)
            .await?;
        Ok(AddToControlListCommandResponse { payload })
    }
}

pub struct RemoveFromControlListHandler {
    service: Arc<dyn SecurityService>,
}

impl RemoveFromControlListHandler {
    pub fn new(service: Arc<dyn SecurityService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CommandHandler<RemoveFromControlListCommand> for RemoveFromControlListHandler {
    async fn handle(
        &self,
        _ctx: &AppContext,
        cmd: RemoveFromControlListCommand,
    ) -> Result<RemoveFromControlListCommandResponse, AppError> {
        let payload = self
            .service
            .remove_from_control_list(&cmd.security_id, &cmd.target)
            .await?;
        Ok(RemoveFromControlListCommandResponse { payload })
    }
}

pub struct GetMaxSupplyHandler {
    info: Arc<dyn AssetInfoService>,
}

impl GetMaxSupplyHandler {
    pub fn new(info: Arc<dyn AssetInfoService>) -> Self {
        Self { info }
    }
}

#[async_trait]
impl QueryHandler<GetMaxSupplyQuery> for GetMaxSupplyHandler {
    async fn handle(
        &self,
        _ctx: &AppContext,
        q: GetMaxSupplyQuery,
    ) -> Result<MaxSupplyDto, AppError> {
        let max_supply = self.info.max_supply(&q.security_id).await?;
        Ok(MaxSupplyDto { max_supply })
    }
}

pub struct GetBalanceOfHandler {
    info: Arc<dyn AssetInfoService>,
}

impl GetBalanceOfHandler {
    pub fn new(info: Arc<dyn AssetInfoService>) -> Self {
        Self { info }
    }
}

#[async_trait]
impl QueryHandler<GetBalanceOfQuery> for GetBalanceOfHandler {
    async fn handle(&self, _ctx: &AppContext, q: GetBalanceOfQuery) -> Result<BalanceDto, AppError> {
        let balance = self.info.balance_of(&q.security_id, &q.target).await?;
        Ok(BalanceDto { balance })
    }
}

pub struct GetSecurityInfoHandler {
    info: Arc<dyn AssetInfoService>,
}

impl GetSecurityInfoHandler {
    pub fn new(info: Arc<dyn AssetInfoService>) -> Self {
        Self { info }
    }
}

#[async_trait]
impl QueryHandler<GetSecurityInfoQuery> for GetSecurityInfoHandler {
    async fn handle(
        &self,
        _ctx: &AppContext,
        q: GetSecurityInfoQuery,
    ) -> Result<SecurityInfoDto, AppError> {
        let view = self.info.security_info(&q.security_id).await?;
        Ok(SecurityInfoDto(view))
    }
}
