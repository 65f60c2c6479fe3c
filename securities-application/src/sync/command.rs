use serde::Serialize;

use crate::command::Command;

/// 启动资产同步
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StartAssetSyncCommand;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartAssetSyncCommandResponse {
    pub payload: bool,
}

impl Command for StartAssetSyncCommand {
    const NAME: &'static str = "sync.start";
    type Response = StartAssetSyncCommandResponse;
}

/// 停止资产同步
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StopAssetSyncCommand;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopAssetSyncCommandResponse {
    pub payload: bool,
}

impl Command for StopAssetSyncCommand {
    const NAME: &'static str = "sync.stop";
    type Response = StopAssetSyncCommandResponse;
}

/// 重启资产同步
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RestartAssetSyncCommand;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestartAssetSyncCommandResponse {
    pub payload: bool,
}

impl Command for RestartAssetSyncCommand {
    const NAME: &'static str = "sync.restart";
    type Response = RestartAssetSyncCommandResponse;
}
