//! 资产信息查询端口
//!
use async_trait::async_trait;

use crate::error::DomainResult;
use crate::value_object::{AccountId, Amount, SecurityId};
use crate::view::SecurityInfoView;

/// 资产信息服务：面向读模型的异步查询
#[async_trait]
pub trait AssetInfoService: Send + Sync {
    /// 查询证券最大供应量
    async fn max_supply(&self, security_id: &SecurityId) -> DomainResult<Amount>;

    /// 查询目标账户持仓
    async fn balance_of(
        &self,
        security_id: &SecurityId,
        target: &AccountId,
    ) -> DomainResult<Amount>;

    /// 查询证券基础信息视图
    async fn security_info(&self, security_id: &SecurityId) -> DomainResult<SecurityInfoView>;
}
