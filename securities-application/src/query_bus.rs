use crate::{context::AppContext, error::AppError, query::Query};
use async_trait::async_trait;

/// 查询总线（Query Bus）
///
/// - 负责根据查询的具体类型路由到对应的处理器；
/// - 对外返回与查询关联的 DTO 类型；
/// - 与命令总线一样，单次尝试、无重试与排队语义。
#[async_trait]
pub trait QueryBus: Send + Sync {
    /// 分发查询到对应处理器，返回该查询的 DTO
    async fn dispatch<Q>(&self, ctx: &AppContext, q: Q) -> Result<Q::Dto, AppError>
    where
        Q: Query;
}
