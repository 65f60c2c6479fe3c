//! 只读视图（Read Model）
//!
//! 资产信息端口返回的类型化读模型，序列化友好、与账本内部表示解耦。
//!
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_object::{Amount, EvmAddress, SecurityId};

/// 证券信息视图
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityInfoView {
    security_id: SecurityId,
    name: String,
    symbol: String,
    decimals: u8,
    paused: bool,
    max_supply: Amount,
    total_supply: Amount,
}

impl SecurityInfoView {
    pub fn security_id(&self) -> &SecurityId {
        &self.security_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn max_supply(&self) -> Amount {
        self.max_supply
    }

    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }
}

/// 已导入资产视图
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetView {
    address: EvmAddress,
    name: String,
    symbol: String,
    imported_at: DateTime<Utc>,
}

impl AssetView {
    pub fn address(&self) -> &EvmAddress {
        &self.address
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn imported_at(&self) -> &DateTime<Utc> {
        &self.imported_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // builder 构造 + JSON round-trip
    #[test]
    fn security_info_round_trip() {
        let view = SecurityInfoView::builder()
            .security_id(SecurityId::new("0.0.1234").unwrap())
            .name("Demo Equity".into())
            .symbol("DEQ".into())
            .decimals(6)
            .paused(false)
            .max_supply(Amount::from_value(1_000_000))
            .total_supply(Amount::from_value(250_000))
            .build();

        let json = serde_json::to_string(&view).unwrap();
        let back: SecurityInfoView = serde_json::from_str(&json).unwrap();
        assert_eq!(back, view);
        assert_eq!(back.max_supply().value(), 1_000_000);
    }
}
