//! 分发中间件（Middleware）
//!
//! 以显式的有序链包裹每次处理器调用：中间件在总线构造时一次性给定，
//! 运行期只读。横切关注点（日志、计时等）在链上实现，而非散落在
//! 各处理器方法上。
//!
use std::any::Any;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;

use crate::context::AppContext;
use crate::error::AppError;

pub type BoxAnySend = Box<dyn Any + Send>;

pub type DispatchFuture<'a> =
    Pin<Box<dyn Future<Output = Result<BoxAnySend, AppError>> + Send + 'a>>;

/// 类型擦除后的处理器端点（调用链的终点）
pub type ErasedHandlerFn =
    Arc<dyn for<'a> Fn(BoxAnySend, &'a AppContext) -> DispatchFuture<'a> + Send + Sync>;

/// 本次分发的种类
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchKind {
    Command,
    Query,
}

impl DispatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Query => "query",
        }
    }
}

/// 在途请求的元信息（中间件可读，不可改写请求本体的类型）
#[derive(Clone, Copy, Debug)]
pub struct DispatchInfo {
    /// 命令/查询的稳定名称
    pub name: &'static str,
    pub kind: DispatchKind,
}

/// 分发中间件
///
/// 实现方通过 `next.run(..)` 继续余下的链并最终抵达处理器；
/// 错误必须原样向外传播，不得吞掉。
pub trait Middleware: Send + Sync {
    fn call<'a>(
        &'a self,
        ctx: &'a AppContext,
        info: DispatchInfo,
        payload: BoxAnySend,
        next: Next<'a>,
    ) -> DispatchFuture<'a>;
}

/// 剩余调用链：先穿过剩余中间件，最后抵达处理器端点
pub struct Next<'a> {
    endpoint: &'a ErasedHandlerFn,
    chain: &'a [Arc<dyn Middleware>],
}

impl<'a> Next<'a> {
    pub(crate) fn new(endpoint: &'a ErasedHandlerFn, chain: &'a [Arc<dyn Middleware>]) -> Self {
        Self { endpoint, chain }
    }

    pub fn run(self, ctx: &'a AppContext, info: DispatchInfo, payload: BoxAnySend) -> DispatchFuture<'a> {
        match self.chain.split_first() {
            Some((mw, rest)) => mw.call(
                ctx,
                info,
                payload,
                Next {
                    endpoint: self.endpoint,
                    chain: rest,
                },
            ),
            None => (self.endpoint)(payload, ctx),
        }
    }
}

/// 日志中间件
///
/// 每次分发输出一条 debug 记录（含耗时），处理器报错时输出 error 记录；
/// 错误本身不被拦截。
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingMiddleware;

impl Middleware for TracingMiddleware {
    fn call<'a>(
        &'a self,
        ctx: &'a AppContext,
        info: DispatchInfo,
        payload: BoxAnySend,
        next: Next<'a>,
    ) -> DispatchFuture<'a> {
        Box::pin(async move {
            let started = Instant::now();
            tracing::debug!(
                name = info.name,
                kind = info.kind.as_str(),
                correlation_id = ctx.biz.correlation_id(),
                "dispatching"
            );

            match next.run(ctx, info, payload).await {
                Ok(out) => {
                    tracing::debug!(
                        name = info.name,
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "dispatched"
                    );
                    Ok(out)
                }
                Err(err) => {
                    tracing::error!(
                        name = info.name,
                        code = err.code(),
                        error = %err,
                        "dispatch failed"
                    );
                    Err(err)
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // 按注册顺序进入链，端点在最后执行
    struct Recorder {
        tag: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl Middleware for Recorder {
        fn call<'a>(
            &'a self,
            ctx: &'a AppContext,
            info: DispatchInfo,
            payload: BoxAnySend,
            next: Next<'a>,
        ) -> DispatchFuture<'a> {
            Box::pin(async move {
                self.log.lock().unwrap().push(self.tag);
                next.run(ctx, info, payload).await
            })
        }
    }

    fn endpoint(log: Arc<Mutex<Vec<&'static str>>>) -> ErasedHandlerFn {
        Arc::new(move |payload, _ctx| {
            let log = log.clone();
            Box::pin(async move {
                log.lock().unwrap().push("endpoint");
                Ok(payload)
            })
        })
    }

    #[tokio::test]
    async fn chain_runs_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let chain: Vec<Arc<dyn Middleware>> = vec![
            Arc::new(Recorder {
                tag: "first",
                log: log.clone(),
            }),
            Arc::new(Recorder {
                tag: "second",
                log: log.clone(),
            }),
        ];
        let f = endpoint(log.clone());

        let ctx = AppContext::default();
        let info = DispatchInfo {
            name: "test.noop",
            kind: DispatchKind::Command,
        };
        Next::new(&f, &chain)
            .run(&ctx, info, Box::new(()))
            .await
            .unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["first", "second", "endpoint"]);
    }

    // 端点错误穿过整条链后原样可见
    #[tokio::test]
    async fn errors_pass_through_unchanged() {
        let failing: ErasedHandlerFn = Arc::new(|_payload, _ctx| {
            Box::pin(async { Err::<BoxAnySend, _>(AppError::HandlerNotFound("test.fails")) })
        });
        let chain: Vec<Arc<dyn Middleware>> = vec![Arc::new(TracingMiddleware)];

        let ctx = AppContext::default();
        let info = DispatchInfo {
            name: "test.fails",
            kind: DispatchKind::Query,
        };
        let err = Next::new(&failing, &chain)
            .run(&ctx, info, Box::new(()))
            .await
            .unwrap_err();

        match err {
            AppError::HandlerNotFound(name) => assert_eq!(name, "test.fails"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
