use serde::Serialize;

use securities_domain::value_object::{AccountId, SecurityId};

use crate::command::Command;

/// 暂停证券
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PauseCommand {
    pub security_id: SecurityId,
}

impl PauseCommand {
    pub fn new(security_id: SecurityId) -> Self {
        Self { security_id }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PauseCommandResponse {
    pub payload: bool,
}

impl Command for PauseCommand {
    const NAME: &'static str = "security.pause";
    type Response = PauseCommandResponse;
}

/// 恢复已暂停的证券
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnpauseCommand {
    pub security_id: SecurityId,
}

impl UnpauseCommand {
    pub fn new(security_id: SecurityId) -> Self {
        Self { security_id }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnpauseCommandResponse {
    pub payload: bool,
}

impl Command for UnpauseCommand {
    const NAME: &'static str = "security.unpause";
    type Response = UnpauseCommandResponse;
}

/// 将账户加入控制名单
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddToControlListCommand {
    pub security_id: SecurityId,
    pub target: AccountId,
}

impl AddToControlListCommand {
    pub fn new(security_id: SecurityId, target: AccountId) -> Self {
        Self {
            security_id,
            target,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddToControlListCommandResponse {
    pub payload: bool,
}

impl Command for AddToControlListCommand {
    const NAME: &'static str = "security.add_to_control_list";
    type Response = AddToControlListCommandResponse;
}

/// 将账户移出控制名单
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveFromControlListCommand {
    pub security_id: SecurityId,
    pub target: AccountId,
}

impl RemoveFromControlListCommand {
    pub fn new(security_id: SecurityId, target: AccountId) -> Self {
        Self {
            security_id,
            target,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoveFromControlListCommandResponse {
    pub payload: bool,
}

impl Command for RemoveFromControlListCommand {
    const NAME: &'static str = "security.remove_from_control_list";
    type Response = RemoveFromControlListCommandResponse;
}
