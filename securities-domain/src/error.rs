//! 领域层统一错误定义
//!
//! 以单一闭合枚举承载全部领域失败，按类别（校验/未找到/冲突/运行时）分组；
//! 每个变体同时提供稳定错误码（`code`）与人类可读消息（`Display`），
//! 调用方按 `kind`/`code` 做程序化匹配，按消息做展示。
//!
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 错误类别（闭合集合）
///
/// 调用方在边界处按类别翻译为传输层响应（HTTP 状态、GraphQL error 等），
/// 本层只负责分类，不做任何翻译。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// 输入形状/范围不合法，在请求构造阶段抛出
    Validation,
    /// 实体或处理器不存在
    NotFound,
    /// 状态前置条件被破坏（如当前模式下不允许该操作）
    Conflict,
    /// 未预期的底层失败
    Runtime,
}

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 校验 ---
    #[error("invalid format: field={field}, value={value}")]
    InvalidFormat { field: String, value: String },
    #[error("invalid security id: {0}")]
    InvalidSecurityId(String),
    #[error("invalid account id: {0}")]
    InvalidAccountId(String),
    #[error("invalid evm address: {0}")]
    InvalidEvmAddress(String),
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    // --- 未找到 ---
    #[error("security not found: {security_id}")]
    SecurityNotFound { security_id: String },
    #[error("asset not found: {address}")]
    AssetNotFound { address: String },
    #[error("account not found: {account_id}")]
    AccountNotFound { account_id: String },

    // --- 状态冲突 ---
    #[error("security already paused: {security_id}")]
    AlreadyPaused { security_id: String },
    #[error("security not paused: {security_id}")]
    NotPaused { security_id: String },
    #[error("account already in control list: {account_id}")]
    AlreadyInControlList { account_id: String },
    #[error("account not in control list: {account_id}")]
    NotInControlList { account_id: String },
    #[error("asset sync already running")]
    SyncAlreadyRunning,
    #[error("asset sync not running")]
    SyncNotRunning,
    #[error("max supply exceeded: requested={requested}, max={max}")]
    MaxSupplyExceeded { requested: String, max: String },

    // --- 运行时 ---
    #[error("ledger error: {reason}")]
    Ledger { reason: String },
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
    #[error("unexpected: {reason}")]
    Unexpected { reason: String },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// 错误类别（对闭合集合 [`ErrorKind`] 的全映射）
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFormat { .. }
            | Self::InvalidSecurityId(_)
            | Self::InvalidAccountId(_)
            | Self::InvalidEvmAddress(_)
            | Self::InvalidAmount(_) => ErrorKind::Validation,

            Self::SecurityNotFound { .. }
            | Self::AssetNotFound { .. }
            | Self::AccountNotFound { .. } => ErrorKind::NotFound,

            Self::AlreadyPaused { .. }
            | Self::NotPaused { .. }
            | Self::AlreadyInControlList { .. }
            | Self::NotInControlList { .. }
            | Self::SyncAlreadyRunning
            | Self::SyncNotRunning
            | Self::MaxSupplyExceeded { .. } => ErrorKind::Conflict,

            Self::Ledger { .. } | Self::Serde { .. } | Self::Unexpected { .. } => {
                ErrorKind::Runtime
            }
        }
    }

    /// 稳定错误码（供调用方程序化匹配，与 `Display` 文案解耦）
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidFormat { .. } => "INVALID_FORMAT",
            Self::InvalidSecurityId(_) => "INVALID_SECURITY_ID",
            Self::InvalidAccountId(_) => "INVALID_ACCOUNT_ID",
            Self::InvalidEvmAddress(_) => "INVALID_EVM_ADDRESS",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::SecurityNotFound { .. } => "SECURITY_NOT_FOUND",
            Self::AssetNotFound { .. } => "ASSET_NOT_FOUND",
            Self::AccountNotFound { .. } => "ACCOUNT_NOT_FOUND",
            Self::AlreadyPaused { .. } => "SECURITY_ALREADY_PAUSED",
            Self::NotPaused { .. } => "SECURITY_NOT_PAUSED",
            Self::AlreadyInControlList { .. } => "ACCOUNT_ALREADY_IN_CONTROL_LIST",
            Self::NotInControlList { .. } => "ACCOUNT_NOT_IN_CONTROL_LIST",
            Self::SyncAlreadyRunning => "SYNC_ALREADY_RUNNING",
            Self::SyncNotRunning => "SYNC_NOT_RUNNING",
            Self::MaxSupplyExceeded { .. } => "MAX_SUPPLY_EXCEEDED",
            Self::Ledger { .. } => "LEDGER_ERROR",
            Self::Serde { .. } => "SERIALIZATION_ERROR",
            Self::Unexpected { .. } => "UNEXPECTED_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 每个变体都应落入四个类别之一，且错误码稳定
    #[test]
    fn kind_and_code_are_consistent() {
        let cases: Vec<(DomainError, ErrorKind, &str)> = vec![
            (
                DomainError::InvalidSecurityId("x".into()),
                ErrorKind::Validation,
                "INVALID_SECURITY_ID",
            ),
            (
                DomainError::SecurityNotFound {
                    security_id: "0.0.1".into(),
                },
                ErrorKind::NotFound,
                "SECURITY_NOT_FOUND",
            ),
            (
                DomainError::AlreadyPaused {
                    security_id: "0.0.1".into(),
                },
                ErrorKind::Conflict,
                "SECURITY_ALREADY_PAUSED",
            ),
            (
                DomainError::Ledger {
                    reason: "timeout".into(),
                },
                ErrorKind::Runtime,
                "LEDGER_ERROR",
            ),
        ];

        for (err, kind, code) in cases {
            assert_eq!(err.kind(), kind);
            assert_eq!(err.code(), code);
        }
    }

    // 消息中必须带上违规值，便于边界层回显
    #[test]
    fn display_carries_offending_value() {
        let err = DomainError::InvalidSecurityId("not-an-id".into());
        assert!(err.to_string().contains("not-an-id"));

        let err = DomainError::InvalidFormat {
            field: "security_id".into(),
            value: "abc".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("security_id"));
        assert!(msg.contains("abc"));
    }

    // serde_json 错误可通过 `?` 直接上抬为 DomainError
    #[test]
    fn serde_error_converts() {
        let bad: Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: DomainError = bad.unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Runtime);
        assert_eq!(err.code(), "SERIALIZATION_ERROR");
    }
}
