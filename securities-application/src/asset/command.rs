use serde::Serialize;

use securities_domain::value_object::EvmAddress;
use securities_domain::view::AssetView;

use crate::command::Command;

/// 按合约地址导入资产
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportAssetCommand {
    pub address: EvmAddress,
}

impl ImportAssetCommand {
    pub fn new(address: EvmAddress) -> Self {
        Self { address }
    }
}

/// 导入结果：登记完成后的资产视图
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportAssetCommandResponse {
    pub payload: AssetView,
}

impl Command for ImportAssetCommand {
    const NAME: &'static str = "asset.import";
    type Response = ImportAssetCommandResponse;
}

/// 移除已登记资产
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveAssetCommand {
    pub address: EvmAddress,
}

impl RemoveAssetCommand {
    pub fn new(address: EvmAddress) -> Self {
        Self { address }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoveAssetCommandResponse {
    pub payload: bool,
}

impl Command for RemoveAssetCommand {
    const NAME: &'static str = "asset.remove";
    type Response = RemoveAssetCommandResponse;
}
