//! 资产同步用例（sync）
//!
//! 区块链轮询器的生命周期控制：启动/停止/重启。命令无字段，
//! 不经过请求校验层，处理器直接委托轮询端口。
//!
pub mod command;
pub mod handler;

pub use command::{
    RestartAssetSyncCommand, RestartAssetSyncCommandResponse, StartAssetSyncCommand,
    StartAssetSyncCommandResponse, StopAssetSyncCommand, StopAssetSyncCommandResponse,
};
pub use handler::{RestartAssetSyncHandler, StartAssetSyncHandler, StopAssetSyncHandler};
