//! 证券操作服务端口
//!
//! 每个业务操作一个方法；调用方（用例处理器）原样转发结果，不追加逻辑。
//!
use async_trait::async_trait;

use crate::error::DomainResult;
use crate::value_object::{AccountId, SecurityId};

/// 证券操作服务：暂停/恢复与控制名单维护
///
/// 返回值 `bool` 表示账本侧是否确认执行；前置条件不满足时返回
/// 冲突类错误（如对已暂停证券再次 `pause`）。
#[async_trait]
pub trait SecurityService: Send + Sync {
    /// 暂停证券（暂停期间禁止转让类操作）
    async fn pause(&self, security_id: &SecurityId) -> DomainResult<bool>;

    /// 恢复已暂停的证券
    async fn unpause(&self, security_id: &SecurityId) -> DomainResult<bool>;

    /// 将账户加入控制名单
    async fn add_to_control_list(
        &self,
        security_id: &SecurityId,
        target: &AccountId,
    ) -> DomainResult<bool>;

    /// 将账户移出控制名单
    async fn remove_from_control_list(
        &self,
        security_id: &SecurityId,
        target: &AccountId,
    ) -> DomainResult<bool>;
}
