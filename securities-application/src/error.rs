use securities_domain::error::{DomainError, ErrorKind};

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("invalid request: field={field}, value={value}")]
    InvalidRequest { field: &'static str, value: String },

    #[error("handler not found: {0}")]
    HandlerNotFound(&'static str),

    #[error("handler already registered: command={command}")]
    AlreadyRegisteredCommand { command: &'static str },

    #[error("handler already registered: query={query}")]
    AlreadyRegisteredQuery { query: &'static str },

    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl AppError {
    /// 错误类别（与领域层共用同一闭合集合）
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(e) => e.kind(),
            Self::InvalidRequest { .. } => ErrorKind::Validation,
            Self::HandlerNotFound(_) => ErrorKind::NotFound,
            Self::AlreadyRegisteredCommand { .. } | Self::AlreadyRegisteredQuery { .. } => {
                ErrorKind::Conflict
            }
            Self::TypeMismatch { .. } => ErrorKind::Runtime,
        }
    }

    /// 稳定错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::InvalidRequest { .. } => "INVALID_REQUEST",
            Self::HandlerNotFound(_) => "HANDLER_NOT_FOUND",
            Self::AlreadyRegisteredCommand { .. } => "COMMAND_ALREADY_REGISTERED",
            Self::AlreadyRegisteredQuery { .. } => "QUERY_ALREADY_REGISTERED",
            Self::TypeMismatch { .. } => "TYPE_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 领域错误上抬后保留原有类别与错误码
    #[test]
    fn domain_errors_keep_kind_and_code() {
        let err: AppError = DomainError::SecurityNotFound {
            security_id: "0.0.1".into(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.code(), "SECURITY_NOT_FOUND");
    }

    #[test]
    fn bus_errors_classify() {
        assert_eq!(
            AppError::HandlerNotFound("security.pause").kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            AppError::AlreadyRegisteredCommand {
                command: "security.pause"
            }
            .kind(),
            ErrorKind::Conflict
        );
        assert_eq!(
            AppError::TypeMismatch {
                expected: "A",
                found: "B"
            }
            .kind(),
            ErrorKind::Runtime
        );
        let err = AppError::InvalidRequest {
            field: "security_id",
            value: "not-an-id".into(),
        };
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("not-an-id"));
    }
}
