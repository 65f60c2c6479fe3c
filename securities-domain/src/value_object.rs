//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值与校验逻辑。
//! 所有值对象在构造时完成校验：调用方要么拿到完全合法的实例，要么拿到错误，
//! 不存在可观察的"部分合法"状态。
//!

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::validation;

/// 值对象抽象
pub trait ValueObject {
    /// 业务校验失败时的错误类型
    type Error;

    /// 创建值对象时进行验证
    fn validate(&self) -> Result<(), Self::Error>;
}

/// 证券标识
///
/// 接受 Hedera 标识（`0.0.1234`）或 EVM 地址（`0x…`）两种形状，
/// 构造即校验，保存原始字符串形式。
///
/// # 示例
///
/// ```
/// use securities_domain::value_object::SecurityId;
///
/// let id = SecurityId::new("0.0.1234").unwrap();
/// assert_eq!(id.as_str(), "0.0.1234");
/// assert!(SecurityId::new("not-an-id").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SecurityId(String);

impl SecurityId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let id = Self(value.into());
        id.validate()?;
        Ok(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 是否为 EVM 地址形状（否则为 Hedera 标识）
    pub fn is_evm(&self) -> bool {
        validation::is_evm_address(&self.0)
    }
}

impl ValueObject for SecurityId {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if validation::is_hedera_id_or_evm_address(&self.0) {
            Ok(())
        } else {
            Err(DomainError::InvalidSecurityId(self.0.clone()))
        }
    }
}

impl fmt::Display for SecurityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SecurityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SecurityId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SecurityId> for String {
    fn from(id: SecurityId) -> Self {
        id.0
    }
}

/// 账户标识（目标账户、控制名单成员等）
///
/// 与 [`SecurityId`] 同形状：Hedera 标识或 EVM 地址。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let id = Self(value.into());
        id.validate()?;
        Ok(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for AccountId {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if validation::is_hedera_id_or_evm_address(&self.0) {
            Ok(())
        } else {
            Err(DomainError::InvalidAccountId(self.0.clone()))
        }
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccountId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AccountId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

/// EVM 合约地址（资产导入等仅接受 EVM 形状的场合）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EvmAddress(String);

impl EvmAddress {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let addr = Self(value.into());
        addr.validate()?;
        Ok(addr)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for EvmAddress {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if validation::is_evm_address(&self.0) {
            Ok(())
        } else {
            Err(DomainError::InvalidEvmAddress(self.0.clone()))
        }
    }
}

impl fmt::Display for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EvmAddress {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for EvmAddress {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EvmAddress> for String {
    fn from(addr: EvmAddress) -> Self {
        addr.0
    }
}

/// 金额（非负整数，按最小单位计）
///
/// 账本侧金额以十进制数字串传输，可能超过 `u64` 表示范围，内部统一用 `u128`；
/// 序列化时仍输出数字串，避免 JSON 数字精度丢失。
///
/// # 示例
///
/// ```
/// use securities_domain::value_object::Amount;
///
/// let a = Amount::parse("1000").unwrap();
/// assert_eq!(a.value(), 1000);
/// assert_eq!(a.to_string(), "1000");
/// assert!(Amount::parse("-1").is_err());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Amount(u128);

impl Amount {
    pub const ZERO: Self = Self(0);

    /// 从十进制数字串解析
    pub fn parse(value: &str) -> DomainResult<Self> {
        if !validation::is_numeric(value) {
            return Err(DomainError::InvalidAmount(value.to_string()));
        }
        value
            .parse::<u128>()
            .map(Self)
            .map_err(|_| DomainError::InvalidAmount(value.to_string()))
    }

    pub const fn from_value(value: u128) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u128 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Amount {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.to_string()
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 两种形状都可构造，原始字符串不被改写
    #[test]
    fn security_id_accepts_both_shapes() {
        let hedera = SecurityId::new("0.0.1234").unwrap();
        assert_eq!(hedera.as_str(), "0.0.1234");
        assert!(!hedera.is_evm());

        let evm = SecurityId::new("0x1234567890abcdef1234567890abcdef12345678").unwrap();
        assert!(evm.is_evm());
    }

    // 非法输入 -> 校验类错误，消息携带违规值
    #[test]
    fn security_id_rejects_with_offending_value() {
        let err = SecurityId::new("not-an-id").unwrap_err();
        match &err {
            DomainError::InvalidSecurityId(value) => assert_eq!(value, "not-an-id"),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(err.code(), "INVALID_SECURITY_ID");
    }

    #[test]
    fn account_id_rejects_malformed() {
        assert!(AccountId::new("0.0.42").is_ok());
        let err = AccountId::new("0.0").unwrap_err();
        match err {
            DomainError::InvalidAccountId(value) => assert_eq!(value, "0.0"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn evm_address_requires_evm_shape() {
        assert!(EvmAddress::new("0xAbCdEf0123456789abcdef0123456789ABCDEF01").is_ok());
        // Hedera 标识对 EvmAddress 来说是非法的
        assert!(EvmAddress::new("0.0.1234").is_err());
    }

    #[test]
    fn amount_parses_beyond_u64() {
        let a = Amount::parse("340282366920938463463374607431768211455").unwrap();
        assert_eq!(a.value(), u128::MAX);
    }

    #[test]
    fn amount_rejects_non_numeric() {
        for bad in ["", "-1", "1.5", "1e3", "abc"] {
            let err = Amount::parse(bad).unwrap_err();
            assert_eq!(err.code(), "INVALID_AMOUNT", "input {bad:?}");
        }
    }

    // 序列化保持字符串形式（round-trip）
    #[test]
    fn serde_round_trip_as_string() {
        let id = SecurityId::new("0.0.999").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"0.0.999\"");
        let back: SecurityId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        let amount = Amount::from_value(1000);
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"1000\"");
        let back: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);
    }

    // 反序列化同样执行构造校验
    #[test]
    fn serde_rejects_malformed_input() {
        assert!(serde_json::from_str::<SecurityId>("\"nope\"").is_err());
        assert!(serde_json::from_str::<Amount>("\"-5\"").is_err());
    }
}
