// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt::{Debug, Display};

type Predicate = Box<dyn Fn(&anyhow::Error) -> bool + Send + Sync>;
type Handler = Box<dyn Fn(&anyhow::Error) + Send + Sync>;
type ResultHandler<T> = Box<dyn Fn(&anyhow::Error) -> T + Send + Sync>;

/// 错误匹配条件
pub struct ErrorMatch {
    name: &'static str,
    predicate: Predicate,
}

impl ErrorMatch {
    /// 仅当最外层错误恰为 `E` 时匹配
    pub fn exact<E>() -> Self
    where
        E: Display + Debug + Send + Sync + 'static,
    {
        Self {
            name: std::any::type_name::<E>(),
            predicate: Box::new(|error| error.is::<E>()),
        }
    }

    /// 当错误链中任一层为 `E` 时匹配
    pub fn chain<E>() -> Self
    where
        E: std::error::Error + 'static,
    {
        Self {
            name: std::any::type_name::<E>(),
            predicate: Box::new(|error| error.chain().any(|cause| cause.is::<E>())),
        }
    }

    fn matches(&self, error: &anyhow::Error) -> bool {
        (self.predicate)(error)
    }
}

/// 错误处理器注册表
///
/// 在构造时显式登记 `(匹配条件, 处理函数)`，按登记顺序匹配：
///
/// - [`ErrorHandlers::handle`] 执行所有匹配的处理函数，都不匹配时执行通用处理；
/// - [`ErrorHandlers::handle_result`] 返回第一个匹配的处理结果，否则返回通用结果。
pub struct ErrorHandlers<T> {
    handlers: Vec<(ErrorMatch, Handler)>,
    result_handlers: Vec<(ErrorMatch, ResultHandler<T>)>,
    general: Handler,
    general_result: ResultHandler<T>,
}

impl<T> ErrorHandlers<T> {
    /// 以通用处理函数创建注册表
    pub fn new<G, R>(general: G, general_result: R) -> Self
    where
        G: Fn(&anyhow::Error) + Send + Sync + 'static,
        R: Fn(&anyhow::Error) -> T + Send + Sync + 'static,
    {
        Self {
            handlers: Vec::new(),
            result_handlers: Vec::new(),
            general: Box::new(general),
            general_result: Box::new(general_result),
        }
    }

    /// 登记无返回值的处理函数
    pub fn on<F>(mut self, matcher: ErrorMatch, handler: F) -> Self
    where
        F: Fn(&anyhow::Error) + Send + Sync + 'static,
    {
        self.handlers.push((matcher, Box::new(handler)));
        self
    }

    /// 登记有返回值的处理函数
    pub fn on_result<F>(mut self, matcher: ErrorMatch, handler: F) -> Self
    where
        F: Fn(&anyhow::Error) -> T + Send + Sync + 'static,
    {
        self.result_handlers.push((matcher, Box::new(handler)));
        self
    }

    /// 执行所有匹配的处理函数
    pub fn handle(&self, error: &anyhow::Error) {
        let mut handled = false;
        for (matcher, handler) in &self.handlers {
            if matcher.matches(error) {
                tracing::debug!(matcher = matcher.name, "error handler matched");
                handler(error);
                handled = true;
            }
        }

        if !handled {
            (self.general)(error);
        }
    }

    /// 返回第一个匹配的处理结果
    pub fn handle_result(&self, error: &anyhow::Error) -> T {
        match self
            .result_handlers
            .iter()
            .find(|(matcher, _)| matcher.matches(error))
        {
            Some((matcher, handler)) => {
                tracing::debug!(matcher = matcher.name, "error result handler matched");
                handler(error)
            }
            None => (self.general_result)(error),
        }
    }
}
