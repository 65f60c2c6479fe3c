/// 应用层命令（Command）
///
/// 表达"意图"的写操作请求，通常会修改账本侧状态。
/// - 构造后不可变，分发时按具体类型路由；
/// - 与 [`Query`](crate::query::Query) 相对，`Command` 应避免读写混用；
/// - 建议保持语义化的"动宾结构"命名，如 `PauseCommand`、`ImportAssetCommand`。
///
/// 关联项：
/// - `NAME`：命令的稳定名称，用于日志、追踪与路由。避免依赖 `type_name::<T>()`。
/// - `Response`：该命令期望的响应形状，编译期随命令类型一起确定。
pub trait Command: Send + Sync + 'static {
    /// 命令的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;

    /// 命令执行后的响应类型
    type Response: Send + 'static;
}
