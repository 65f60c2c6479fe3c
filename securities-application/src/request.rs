//! 构造期校验的请求对象（Validated Request）
//!
//! 请求层是输入进入命令/查询之前的唯一校验点：
//! - 每个请求持有一份「字段名 → 校验规则」的映射，顺序即字段声明顺序；
//! - 规则是针对原始字符串的纯谓词（见 `securities_domain::validation`），
//!   每个字段只绑定一条规则；
//! - 具体请求的构造函数在返回实例前执行校验，因此调用方只可能拿到
//!   完全合法的实例或一个错误，不存在可观察的"部分合法"状态。
//!
use crate::error::AppError;

/// 校验规则：针对原始字符串的纯谓词
pub type Rule = fn(&str) -> bool;

/// 单个字段的校验条目
pub struct FieldRule<'a> {
    pub field: &'static str,
    pub value: &'a str,
    pub rule: Rule,
}

impl<'a> FieldRule<'a> {
    pub fn new(field: &'static str, value: &'a str, rule: Rule) -> Self {
        Self { field, value, rule }
    }
}

/// 构造期校验的请求抽象
pub trait ValidatedRequest: Sized + Send + Sync {
    /// 字段校验规则（按声明顺序）
    fn rules(&self) -> Vec<FieldRule<'_>>;

    /// 按序执行全部规则，遇到第一个失败立即返回携带字段名与违规值的错误
    fn validate(&self) -> Result<(), AppError> {
        for FieldRule { field, value, rule } in self.rules() {
            if !rule(value) {
                return Err(AppError::InvalidRequest {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use securities_domain::validation;

    struct TwoFields {
        first: String,
        second: String,
    }

    impl ValidatedRequest for TwoFields {
        fn rules(&self) -> Vec<FieldRule<'_>> {
            vec![
                FieldRule::new("first", &self.first, validation::is_hedera_id),
                FieldRule::new("second", &self.second, validation::is_numeric),
            ]
        }
    }

    // 先声明的字段先校验：first 违规时不会报出 second 的问题
    #[test]
    fn first_declared_field_fails_first() {
        let req = TwoFields {
            first: "bad".into(),
            second: "also-bad".into(),
        };
        let err = req.validate().unwrap_err();
        match err {
            AppError::InvalidRequest { field, value } => {
                assert_eq!(field, "first");
                assert_eq!(value, "bad");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn later_field_reported_when_earlier_passes() {
        let req = TwoFields {
            first: "0.0.1".into(),
            second: "x".into(),
        };
        let err = req.validate().unwrap_err();
        match err {
            AppError::InvalidRequest { field, value } => {
                assert_eq!(field, "second");
                assert_eq!(value, "x");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn all_rules_pass() {
        let req = TwoFields {
            first: "0.0.1".into(),
            second: "42".into(),
        };
        assert!(req.validate().is_ok());
    }
}
