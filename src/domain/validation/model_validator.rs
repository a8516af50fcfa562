// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing::warn;
use validator::Validate;

/// 验证规则的优先级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidatorPriority {
    /// 必要规则：全部执行，每个失败都会报告
    Necessary,
    /// 可跳过规则：在必要规则之后执行，遇到第一个失败即停止
    Skippable,
}

type RuleCheck<M> = Box<dyn Fn(&M) -> anyhow::Result<()> + Send + Sync>;

struct Rule<M> {
    priority: ValidatorPriority,
    seq: i32,
    name: &'static str,
    check: RuleCheck<M>,
}

/// 模型验证器
///
/// 规则在构造时显式注册，执行顺序由优先级与序号决定；
/// 序号相同的规则保持注册顺序
pub struct ModelValidator<M> {
    rules: Vec<Rule<M>>,
}

impl<M> Default for ModelValidator<M> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<M> ModelValidator<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册一条规则
    pub fn rule<F>(mut self, priority: ValidatorPriority, seq: i32, name: &'static str, check: F) -> Self
    where
        F: Fn(&M) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.rules.push(Rule {
            priority,
            seq,
            name,
            check: Box::new(check),
        });
        self
    }

    /// 已注册的规则数量
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 执行验证并返回失败信息
    ///
    /// 必要规则全部执行；可跳过规则遇到第一个失败即停止
    pub fn validate(&self, model: &M) -> Vec<String> {
        let mut messages = Vec::new();

        for rule in self.ordered(ValidatorPriority::Necessary) {
            if let Err(error) = (rule.check)(model) {
                warn!(rule = rule.name, "Necessary validation rule failed: {}", error);
                messages.push(format!("Necessary rule failed: {{{}}}", describe(&error)));
            }
        }

        for rule in self.ordered(ValidatorPriority::Skippable) {
            if let Err(error) = (rule.check)(model) {
                warn!(rule = rule.name, "Skippable validation rule failed: {}", error);
                messages.push(format!("Skippable rule failed: {{{}}}", describe(&error)));
                break;
            }
        }

        messages
    }

    pub fn is_valid(&self, model: &M) -> bool {
        self.validate(model).is_empty()
    }

    fn ordered(&self, priority: ValidatorPriority) -> Vec<&Rule<M>> {
        let mut rules: Vec<&Rule<M>> = self.rules.iter().filter(|r| r.priority == priority).collect();
        rules.sort_by_key(|r| r.seq);
        rules
    }
}

impl<M: Validate> ModelValidator<M> {
    /// 注册一条必要规则，委托给模型上派生的 `validator::Validate`
    pub fn with_derived_rules(self) -> Self {
        self.rule(ValidatorPriority::Necessary, i32::MIN, "derived", |model: &M| {
            model.validate().map_err(anyhow::Error::from)
        })
    }
}

fn describe(error: &anyhow::Error) -> String {
    error
        .chain()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" => InnerException : ")
}
