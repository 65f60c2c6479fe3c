use std::sync::Arc;

use async_trait::async_trait;

use securities_domain::ports::AssetRegistry;

use crate::command_handler::CommandHandler;
use crate::context::AppContext;
use crate::error::AppError;
use crate::query_handler::QueryHandler;

use super::command::{
    ImportAssetCommand, ImportAssetCommandResponse, RemoveAssetCommand, RemoveAssetCommandResponse,
};
use super::query::{AssetsDto, ListAssetsQuery};

pub struct ImportAssetHandler {
    registry: Arc<dyn AssetRegistry>,
}

impl ImportAssetHandler {
    pub fn new(registry: Arc<dyn AssetRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl CommandHandler<ImportAssetCommand> for ImportAssetHandler {
    async fn handle(
        &self,
        _ctx: &AppContext,
        cmd: ImportAssetCommand,
    ) -> Result<ImportAssetCommandResponse, AppError> {
        let payload = self.registry.import_asset(&cmd.address).await?;
        Ok(ImportAssetCommandResponse { payload })
    }
}

pub struct RemoveAssetHandler {
    registry: Arc<dyn AssetRegistry>,
}

impl RemoveAssetHandler {
    pub fn new(registry: Arc<dyn AssetRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl CommandHandler<RemoveAssetCommand> for RemoveAssetHandler {
    async fn handle(
        &self,
        _ctx: &AppContext,
        cmd: RemoveAssetCommand,
    ) -> Result<RemoveAssetCommandResponse, AppError> {
        let payload = self.registry.remove_asset(&cmd.address).await?;
        Ok(RemoveAssetCommandResponse { payload })
    }
}

pub struct ListAssetsHandler {
    registry: Arc<dyn AssetRegistry>,
}

impl ListAssetsHandler {
    pub fn new(registry: Arc<dyn AssetRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl QueryHandler<ListAssetsQuery> for ListAssetsHandler {
    async fn handle(&self, _ctx: &AppContext, _q: ListAssetsQuery) -> Result<AssetsDto, AppError> {
        let assets = self.registry.list_assets().await?;
        Ok(AssetsDto(assets))
    }
}
