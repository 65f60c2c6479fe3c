use std::sync::Arc;

use async_trait::async_trait;

use securities_domain::ports::BlockchainPoller;

use crate::command_handler::CommandHandler;
use crate::context::AppContext;
use crate::error::AppError;

use super::command::{
    RestartAssetSyncCommand, RestartAssetSyncCommandResponse, StartAssetSyncCommand,
    StartAssetSyncCommandResponse, StopAssetSyncCommand, StopAssetSyncCommandResponse,
};

pub struct StartAssetSyncHandler {
    poller: Arc<dyn BlockchainPoller>,
}

impl StartAssetSyncHandler {
    pub fn new(poller: Arc<dyn BlockchainPoller>) -> Self {
        Self { poller }
    }
}

#[async_trait]
impl CommandHandler<StartAssetSyncCommand> for StartAssetSyncHandler {
    async fn handle(
        &self,
        _ctx: &AppContext,
        _cmd: StartAssetSyncCommand,
    ) -> Result<StartAssetSyncCommandResponse, AppError> {
        self.poller.start().await?;
        Ok(StartAssetSyncCommandResponse { payload: true })
    }
}

pub struct StopAssetSyncHandler {
    poller: Arc<dyn BlockchainPoller>,
}

impl StopAssetSyncHandler {
    pub fn new(poller: Arc<dyn BlockchainPoller>) -> Self {
        Self { poller }
    }
}

#[async_trait]
impl CommandHandler<StopAssetSyncCommand> for StopAssetSyncHandler {
    async fn handle(
        &self,
        _ctx: &AppContext,
        _cmd: StopAssetSyncCommand,
    ) -> Result<StopAssetSyncCommandResponse, AppError> {
        self.poller.stop().await?;
        Ok(StopAssetSyncCommandResponse { payload: true })
    }
}

pub struct RestartAssetSyncHandler {
    poller: Arc<dyn BlockchainPoller>,
}

impl RestartAssetSyncHandler {
    pub fn new(poller: Arc<dyn BlockchainPoller>) -> Self {
        Self { poller }
    }
}

#[async_trait]
impl CommandHandler<RestartAssetSyncCommand> for RestartAssetSyncHandler {
    async fn handle(
        &self,
        _ctx: &AppContext,
        _cmd: RestartAssetSyncCommand,
    ) -> Result<RestartAssetSyncCommandResponse, AppError> {
        self.poller.restart().await?;
        Ok(RestartAssetSyncCommandResponse { payload: true })
    }
}
