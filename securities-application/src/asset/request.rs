use securities_domain::validation;
use securities_domain::value_object::EvmAddress;

use crate::error::AppError;
use crate::request::{FieldRule, ValidatedRequest};

use super::command::{ImportAssetCommand, RemoveAssetCommand};

/// 导入资产请求（仅接受 EVM 地址）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportAssetRequest {
    address: String,
}

impl ImportAssetRequest {
    pub fn new(address: impl Into<String>) -> Result<Self, AppError> {
        let req = Self {
            address: address.into(),
        };
        req.validate()?;
        Ok(req)
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl ValidatedRequest for ImportAssetRequest {
    fn rules(&self) -> Vec<FieldRule<'_>> {
        vec![FieldRule::new(
            "address",
            &self.address,
            validation::is_evm_address,
        )]
    }
}

impl TryFrom<ImportAssetRequest> for ImportAssetCommand {
    type Error = AppError;

    fn try_from(req: ImportAssetRequest) -> Result<Self, Self::Error> {
        Ok(Self::new(EvmAddress::new(req.address)?))
    }
}

/// 移除资产请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveAssetRequest {
    address: String,
}

impl RemoveAssetRequest {
    pub fn new(address: impl Into<String>) -> Result<Self, AppError> {
        let req = Self {
            address: address.into(),
        };
        req.validate()?;
        Ok(req)
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl ValidatedRequest for RemoveAssetRequest {
    fn rules(&self) -> Vec<FieldRule<'_>> {
        vec![FieldRule::new(
            "address",
            &self.address,
            validation::is_evm_address,
        )]
    }
}

impl TryFrom<RemoveAssetRequest> for RemoveAssetCommand {
    type Error = AppError;

    fn try_from(req: RemoveAssetRequest) -> Result<Self, Self::Error> {
        Ok(Self::new(EvmAddress::new(req.address)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 资产导入只认 EVM 形状，Hedera 标识应被拒绝
    #[test]
    fn import_rejects_hedera_id() {
        let err = ImportAssetRequest::new("0.0.1234").unwrap_err();
        match err {
            AppError::InvalidRequest { field, value } => {
                assert_eq!(field, "address");
                assert_eq!(value, "0.0.1234");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn import_accepts_evm_address() {
        let req =
            ImportAssetRequest::new("0xAbCdEf0123456789abcdef0123456789ABCDEF01").unwrap();
        let cmd = ImportAssetCommand::try_from(req).unwrap();
        assert_eq!(
            cmd.address.as_str(),
            "0xAbCdEf0123456789abcdef0123456789ABCDEF01"
        );
    }
}
