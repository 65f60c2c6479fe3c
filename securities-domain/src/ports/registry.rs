//! 资产登记端口
//!
use async_trait::async_trait;

use crate::error::DomainResult;
use crate::value_object::EvmAddress;
use crate::view::AssetView;

/// 资产登记服务：按合约地址导入/移除外部资产
#[async_trait]
pub trait AssetRegistry: Send + Sync {
    /// 按 EVM 合约地址导入资产，返回登记后的视图
    ///
    /// 重复导入同一地址返回冲突类错误。
    async fn import_asset(&self, address: &EvmAddress) -> DomainResult<AssetView>;

    /// 移除已登记资产
    async fn remove_asset(&self, address: &EvmAddress) -> DomainResult<bool>;

    /// 列出全部已登记资产
    async fn list_assets(&self) -> DomainResult<Vec<AssetView>>;
}
