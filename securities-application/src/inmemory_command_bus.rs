use crate::{
    command::Command,
    command_bus::CommandBus,
    command_handler::CommandHandler,
    context::AppContext,
    error::AppError,
    middleware::{BoxAnySend, DispatchInfo, DispatchKind, ErasedHandlerFn, Middleware, Next},
};
use async_trait::async_trait;
use dashmap::DashMap;
use std::any::{TypeId, type_name};
use std::sync::Arc;

/// 命令处理器注册表
///
/// 在应用引导期一次性填充（显式注册调用，而非装饰器/元数据扫描），
/// 随后作为映射传入总线构造函数，全程只读。
/// - 以命令类型的 TypeId 为键，每个命令类型至多一个单例处理器；
/// - 重复注册返回冲突错误，保留先注册者。
pub struct CommandHandlerMap {
    handlers: DashMap<TypeId, (&'static str, ErasedHandlerFn)>,
}

impl Default for CommandHandlerMap {
    fn default() -> Self {
        Self {
            handlers: DashMap::new(),
        }
    }
}

impl CommandHandlerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册命令处理器
    pub fn register<C, H>(&self, handler: Arc<H>) -> Result<(), AppError>
    where
        C: Command,
        H: CommandHandler<C> + 'static,
    {
        let key = TypeId::of::<C>();

        if self.handlers.contains_key(&key) {
            return Err(AppError::AlreadyRegisteredCommand { command: C::NAME });
        }

        let f: ErasedHandlerFn = {
            let handler = handler.clone();

            Arc::new(move |boxed_cmd, ctx| {
                let handler = handler.clone();

                Box::pin(async move {
                    // 正常情况下这里的 downcast 永远不会失败（键与闭包同一泛型 C）
                    match boxed_cmd.downcast::<C>() {
                        Ok(cmd) => {
                            let resp = handler.handle(ctx, *cmd).await?;
                            Ok(Box::new(resp) as BoxAnySend)
                        }
                        Err(_) => Err(AppError::TypeMismatch {
                            expected: C::NAME,
                            found: "unknown",
                        }),
                    }
                })
            })
        };

        self.handlers.insert(key, (C::NAME, f));

        Ok(())
    }

    /// 已注册的命令名列表（只读视图）
    pub fn registered_commands(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|e| e.value().0).collect()
    }

    fn get(&self, key: &TypeId) -> Option<ErasedHandlerFn> {
        self.handlers.get(key).map(|e| e.value().1.clone())
    }
}

/// 基于内存的 CommandBus 实现
/// - 注册表与中间件链在构造时给定，运行期只读
/// - 运行时以类型擦除（Any）方式调度，响应在调用端还原
pub struct InMemoryCommandBus {
    handlers: CommandHandlerMap,
    middlewares: Vec<Arc<dyn Middleware>>,
}

impl InMemoryCommandBus {
    /// 以注册表构造（无中间件）
    pub fn new(handlers: CommandHandlerMap) -> Self {
        Self::with_middlewares(handlers, Vec::new())
    }

    /// 以注册表与有序中间件链构造
    pub fn with_middlewares(
        handlers: CommandHandlerMap,
        middlewares: Vec<Arc<dyn Middleware>>,
    ) -> Self {
        Self {
            handlers,
            middlewares,
        }
    }
}

#[async_trait]
impl CommandBus for InMemoryCommandBus {
    async fn dispatch<C>(&self, ctx: &AppContext, cmd: C) -> Result<C::Response, AppError>
    where
        C: Command,
    {
        let Some(f) = self.handlers.get(&TypeId::of::<C>()) else {
            return Err(AppError::HandlerNotFound(C::NAME));
        };

        let info = DispatchInfo {
            name: C::NAME,
            kind: DispatchKind::Command,
        };
        let out = Next::new(&f, &self.middlewares)
            .run(ctx, info, Box::new(cmd))
            .await?;

        match out.downcast::<C::Response>() {
            Ok(resp) => Ok(*resp),
            Err(_) => Err(AppError::TypeMismatch {
                expected: type_name::<C::Response>(),
                found: "unknown",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::TracingMiddleware;
    use serde::Serialize;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::task::JoinSet;

    #[derive(Debug)]
    struct Ping;

    #[derive(Debug, Serialize, PartialEq, Eq)]
    struct PingResponse {
        payload: bool,
    }

    impl Command for Ping {
        const NAME: &'static str = "test.ping";
        type Response = PingResponse;
    }

    struct PingHandler {
        counter: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CommandHandler<Ping> for PingHandler {
        async fn handle(&self, _ctx: &AppContext, _cmd: Ping) -> Result<PingResponse, AppError> {
            self.counter.fetch_add(1, Ordering::SeqCst);
            Ok(PingResponse { payload: true })
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn register_and_dispatch_works() {
        let handlers = CommandHandlerMap::new();
        let counter = Arc::new(AtomicUsize::new(0));
        handlers
            .register::<Ping, _>(Arc::new(PingHandler {
                counter: counter.clone(),
            }))
            .unwrap();
        let bus = InMemoryCommandBus::new(handlers);

        let ctx = AppContext::default();
        let resp = bus.dispatch(&ctx, Ping).await.unwrap();
        assert!(resp.payload);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[derive(Debug)]
    struct Unregistered;

    #[derive(Debug, Serialize)]
    struct UnregisteredResponse;

    impl Command for Unregistered {
        const NAME: &'static str = "test.unregistered";
        type Response = UnregisteredResponse;
    }

    // 未注册命令 -> HandlerNotFound，且不触发任何其他处理器
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn not_found_error_when_unregistered() {
        let handlers = CommandHandlerMap::new();
        let counter = Arc::new(AtomicUsize::new(0));
        handlers
            .register::<Ping, _>(Arc::new(PingHandler {
                counter: counter.clone(),
            }))
            .unwrap();
        let bus = InMemoryCommandBus::new(handlers);

        let ctx = AppContext::default();
        let err = bus.dispatch(&ctx, Unregistered).await.unwrap_err();
        match err {
            AppError::HandlerNotFound(name) => assert_eq!(name, "test.unregistered"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    // 同一命令类型重复注册 -> 冲突错误，先注册者保留
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn duplicate_registration_is_rejected() {
        let handlers = CommandHandlerMap::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        handlers
            .register::<Ping, _>(Arc::new(PingHandler {
                counter: first.clone(),
            }))
            .unwrap();
        let err = handlers
            .register::<Ping, _>(Arc::new(PingHandler {
                counter: second.clone(),
            }))
            .unwrap_err();
        match err {
            AppError::AlreadyRegisteredCommand { command } => assert_eq!(command, "test.ping"),
            other => panic!("unexpected error: {other:?}"),
        }

        let bus = InMemoryCommandBus::new(handlers);
        let ctx = AppContext::default();
        bus.dispatch(&ctx, Ping).await.unwrap();
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[derive(Debug, Serialize)]
    struct WrongResponse;

    // 手动插入一个错误的条目：键是 Ping，但闭包返回 WrongResponse
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn type_mismatch_error_when_response_downcast_fails() {
        let handlers = CommandHandlerMap::new();
        let f: ErasedHandlerFn = Arc::new(|_boxed_cmd, _ctx| {
            Box::pin(async move { Ok(Box::new(WrongResponse) as BoxAnySend) })
        });
        handlers
            .handlers
            .insert(TypeId::of::<Ping>(), (Ping::NAME, f));
        let bus = InMemoryCommandBus::new(handlers);

        let ctx = AppContext::default();
        let err = bus.dispatch(&ctx, Ping).await.unwrap_err();
        match err {
            AppError::TypeMismatch { expected, .. } => assert!(expected.contains("PingResponse")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_dispatch_is_safe() {
        let handlers = CommandHandlerMap::new();
        let counter = Arc::new(AtomicUsize::new(0));
        handlers
            .register::<Ping, _>(Arc::new(PingHandler {
                counter: counter.clone(),
            }))
            .unwrap();
        let bus = Arc::new(InMemoryCommandBus::with_middlewares(
            handlers,
            vec![Arc::new(TracingMiddleware)],
        ));

        let mut set = JoinSet::new();
        let ctx = AppContext::default();
        for _ in 0..100 {
            let bus = bus.clone();
            let ctx = ctx.clone();
            set.spawn(async move { bus.dispatch(&ctx, Ping).await.unwrap() });
        }
        while let Some(res) = set.join_next().await {
            assert!(res.unwrap().payload);
        }
        assert_eq!(counter.load(Ordering::SeqCst), 100);
    }
}
