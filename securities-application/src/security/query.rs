use serde::Serialize;

use securities_domain::value_object::{AccountId, Amount, SecurityId};
use securities_domain::view::SecurityInfoView;

use crate::dto::Dto;
use crate::query::Query;

/// 查询证券最大供应量
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetMaxSupplyQuery {
    pub security_id: SecurityId,
}

impl GetMaxSupplyQuery {
    pub fn new(security_id: SecurityId) -> Self {
        Self { security_id }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaxSupplyDto {
    pub max_supply: Amount,
}

impl Dto for MaxSupplyDto {}

impl Query for GetMaxSupplyQuery {
    const NAME: &'static str = "security.get_max_supply";
    type Dto = MaxSupplyDto;
}

/// 查询目标账户持仓
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetBalanceOfQuery {
    pub security_id: SecurityId,
    pub target: AccountId,
}

impl GetBalanceOfQuery {
    pub fn new(security_id: SecurityId, target: AccountId) -> Self {
        Self {
            security_id,
            target,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceDto {
    pub balance: Amount,
}

impl Dto for BalanceDto {}

impl Query for GetBalanceOfQuery {
    const NAME: &'static str = "security.get_balance_of";
    type Dto = BalanceDto;
}

/// 查询证券基础信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetSecurityInfoQuery {
    pub security_id: SecurityId,
}

impl GetSecurityInfoQuery {
    pub fn new(security_id: SecurityId) -> Self {
        Self { security_id }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityInfoDto(pub SecurityInfoView);

impl Dto for SecurityInfoDto {}

impl Query for GetSecurityInfoQuery {
    const NAME: &'static str = "security.get_security_info";
    type Dto = SecurityInfoDto;
}
