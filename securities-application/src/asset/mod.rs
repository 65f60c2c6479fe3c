//! 资产登记用例（asset）
//!
//! 按 EVM 合约地址导入/移除外部资产，以及已登记资产的列表查询。
//!
pub mod command;
pub mod handler;
pub mod query;
pub mod request;

pub use command::{
    ImportAssetCommand, ImportAssetCommandResponse, RemoveAssetCommand, RemoveAssetCommandResponse,
};
pub use handler::{ImportAssetHandler, ListAssetsHandler, RemoveAssetHandler};
pub use query::{AssetsDto, ListAssetsQuery};
pub use request::{ImportAssetRequest, RemoveAssetRequest};
