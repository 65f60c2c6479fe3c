//! 证券用例的入站请求
//!
//! 入口层（HTTP/GraphQL 等，不在本库范围内）以原始字符串构造这些请求；
//! 构造成功后通过 `TryFrom` 转换为携带值对象的命令/查询再行分发。
//!
use securities_domain::validation;
use securities_domain::value_object::{AccountId, SecurityId};

use crate::error::AppError;
use crate::request::{FieldRule, ValidatedRequest};

use super::command::{
    AddToControlListCommand, PauseCommand, RemoveFromControlListCommand, UnpauseCommand,
};
use super::query::{GetBalanceOfQuery, GetMaxSupplyQuery, GetSecurityInfoQuery};

/// 暂停证券请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PauseRequest {
    security_id: String,
}

impl PauseRequest {
    pub fn new(security_id: impl Into<String>) -> Result<Self, AppError> {
        let req = Self {
            security_id: security_id.into(),
        };
        req.validate()?;
        Ok(req)
    }

    pub fn security_id(&self) -> &str {
        &self.security_id
    }
}

impl ValidatedRequest for PauseRequest {
    fn rules(&self) -> Vec<FieldRule<'_>> {
        vec![FieldRule::new(
            "security_id",
            &self.security_id,
            validation::is_hedera_id_or_evm_address,
        )]
    }
}

impl TryFrom<PauseRequest> for PauseCommand {
    type Error = AppError;

    fn try_from(req: PauseRequest) -> Result<Self, Self::Error> {
        Ok(Self::new(SecurityId::new(req.security_id)?))
    }
}

/// 恢复证券请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnpauseRequest {
    security_id: String,
}

impl UnpauseRequest {
    pub fn new(security_id: impl Into<String>) -> Result<Self, AppError> {
        let req = Self {
            security_id: security_id.into(),
        };
        req.validate()?;
        Ok(req)
    }

    pub fn security_id(&self) -> &str {
        &self.security_id
    }
}

impl ValidatedRequest for UnpauseRequest {
    fn rules(&self) -> Vec<FieldRule<'_>> {
        vec![FieldRule::new(
            "security_id",
            &self.security_id,
            validation::is_hedera_id_or_evm_address,
        )]
    }
}

impl TryFrom<UnpauseRequest> for UnpauseCommand {
    type Error = AppError;

    fn try_from(req: UnpauseRequest) -> Result<Self, Self::Error> {
        Ok(Self::new(SecurityId::new(req.security_id)?))
    }
}

/// 加入控制名单请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddToControlListRequest {
    security_id: String,
    target_id: String,
}

impl AddToControlListRequest {
    pub fn new(
        security_id: impl Into<String>,
        target_id: impl Into<String>,
    ) -> Result<Self, AppError> {
        let req = Self {
            security_id: security_id.into(),
            target_id: target_id.into(),
        };
        req.validate()?;
        Ok(req)
    }

    pub fn security_id(&self) -> &str {
        &self.security_id
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }
}

impl ValidatedRequest for AddToControlListRequest {
    fn rules(&self) -> Vec<FieldRule<'_>> {
        vec![
            FieldRule::new(
                "security_id",
                &self.security_id,
                validation::is_hedera_id_or_evm_address,
            ),
            FieldRule::new(
                "target_id",
                &self.target_id,
                validation::is_hedera_id_or_evm_address,
            ),
        ]
    }
}

impl TryFrom<AddToControlListRequest> for AddToControlListCommand {
    type Error = AppError;

    fn try_from(req: AddToControlListRequest) -> Result<Self, Self::Error> {
        Ok(Self::new(
            SecurityId::new(req.security_id)?,
            AccountId::new(req.target_id)?,
        ))
    }
}

/// 移出控制名单请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveFromControlListRequest {
    security_id: String,
    target_id: String,
}

impl RemoveFromControlListRequest {
    pub fn new(
        security_id: impl Into<String>,
        target_id: impl Into<String>,
    ) -> Result<Self, AppError> {
        let req = Self {
            security_id: security_id.into(),
            target_id: target_id.into(),
        };
        req.validate()?;
        Ok(req)
    }

    pub fn security_id(&self) -> &str {
        &self.security_id
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }
}

impl ValidatedRequest for RemoveFromControlListRequest {
    fn rules(&self) -> Vec<FieldRule<'_>> {
        vec![
            FieldRule::new(
                "security_id",
                &self.security_id,
                validation::is_hedera_id_or_evm_address,
            ),
            FieldRule::new(
                "target_id",
                &self.target_id,
                validation::is_hedera_id_or_evm_address,
            ),
        ]
    }
}

impl TryFrom<RemoveFromControlListRequest> for RemoveFromControlListCommand {
    type Error = AppError;

    fn try_from(req: RemoveFromControlListRequest) -> Result<Self, Self::Error> {
        Ok(Self::new(
            SecurityId::new(req.security_id)?,
            AccountId::new(req.target_id)?,
        ))
    }
}

/// 查询最大供应量请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetMaxSupplyRequest {
    security_id: String,
}

impl GetMaxSupplyRequest {
    pub fn new(security_id: impl Into<String>) -> Result<Self, AppError> {
        let req = Self {
            security_id: security_id.into(),
        };
        req.validate()?;
        Ok(req)
    }

    pub fn security_id(&self) -> &str {
        &self.security_id
    }
}

impl ValidatedRequest for GetMaxSupplyRequest {
    fn rules(&self) -> Vec<FieldRule<'_>> {
        vec![FieldRule::new(
            "security_id",
            &self.security_id,
            validation::is_hedera_id_or_evm_address,
        )]
    }
}

impl TryFrom<GetMaxSupplyRequest> for GetMaxSupplyQuery {
    type Error = AppError;

    fn try_from(req: GetMaxSupplyRequest) -> Result<Self, Self::Error> {
        Ok(Self::new(SecurityId::new(req.security_id)?))
    }
}

/// 查询持仓请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetBalanceOfRequest {
    security_id: String,
    target_id: String,
}

impl GetBalanceOfRequest {
    pub fn new(
        security_id: impl Into<String>,
        target_id: impl Into<String>,
    ) -> Result<Self, AppError> {
        let req = Self {
            security_id: security_id.into(),
            target_id: target_id.into(),
        };
        req.validate()?;
        Ok(req)
    }

    pub fn security_id(&self) -> &str {
        &self.security_id
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }
}

impl ValidatedRequest for GetBalanceOfRequest {
    fn rules(&self) -> Vec<FieldRule<'_>> {
        vec![
            FieldRule::new(
                "security_id",
                &self.security_id,
                validation::is_hedera_id_or_evm_address,
            ),
            FieldRule::new(
                "target_id",
                &self.target_id,
                validation::is_hedera_id_or_evm_address,
            ),
        ]
    }
}

impl TryFrom<GetBalanceOfRequest> for GetBalanceOfQuery {
    type Error = AppError;

    fn try_from(req: GetBalanceOfRequest) -> Result<Self, Self::Error> {
        Ok(Self::new(
            SecurityId::new(req.security_id)?,
            AccountId::new(req.target_id)?,
        ))
    }
}

/// 查询证券信息请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetSecurityInfoRequest {
    security_id: String,
}

impl GetSecurityInfoRequest {
    pub fn new(security_id: impl Into<String>) -> Result<Self, AppError> {
        let req = Self {
            security_id: security_id.into(),
        };
        req.validate()?;
        Ok(req)
    }

    pub fn security_id(&self) -> &str {
        &self.security_id
    }
}

impl ValidatedRequest for GetSecurityInfoRequest {
    fn rules(&self) -> Vec<FieldRule<'_>> {
        vec![FieldRule::new(
            "security_id",
            &self.security_id,
            validation::is_hedera_id_or_evm_address,
        )]
    }
}

impl TryFrom<GetSecurityInfoRequest> for GetSecurityInfoQuery {
    type Error = AppError;

    fn try_from(req: GetSecurityInfoRequest) -> Result<Self, Self::Error> {
        Ok(Self::new(SecurityId::new(req.security_id)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 合法标识构造成功，字段值原样保留（round-trip）
    #[test]
    fn valid_request_round_trips() {
        let req = GetMaxSupplyRequest::new("0.0.1234").unwrap();
        assert_eq!(req.security_id(), "0.0.1234");

        let req =
            GetMaxSupplyRequest::new("0x1234567890abcdef1234567890abcdef12345678").unwrap();
        assert_eq!(
            req.security_id(),
            "0x1234567890abcdef1234567890abcdef12345678"
        );
    }

    // 非法标识 -> 错误携带字段名与违规值
    #[test]
    fn invalid_request_reports_offending_value() {
        let err = GetMaxSupplyRequest::new("not-an-id").unwrap_err();
        match err {
            AppError::InvalidRequest { field, value } => {
                assert_eq!(field, "security_id");
                assert_eq!(value, "not-an-id");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    // 双字段请求按声明顺序校验：security_id 在前
    #[test]
    fn security_id_is_validated_before_target() {
        let err = AddToControlListRequest::new("bad", "also-bad").unwrap_err();
        match err {
            AppError::InvalidRequest { field, value } => {
                assert_eq!(field, "security_id");
                assert_eq!(value, "bad");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = AddToControlListRequest::new("0.0.1", "also-bad").unwrap_err();
        match err {
            AppError::InvalidRequest { field, value } => {
                assert_eq!(field, "target_id");
                assert_eq!(value, "also-bad");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    // 请求 -> 命令的转换携带值对象
    #[test]
    fn request_converts_into_command() {
        let req = PauseRequest::new("0.0.999").unwrap();
        let cmd = PauseCommand::try_from(req).unwrap();
        assert_eq!(cmd.security_id.as_str(), "0.0.999");
    }
}
