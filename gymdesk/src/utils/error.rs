//! 统一错误处理
//!
//! [`AppError`] wraps every failure the dashboard layer can surface:
//!
//! | 分类 | 来源 |
//! |------|------|
//! | 网络 / HTTP | [`ClientError`] |
//! | 工资生成 | [`PayrollError`] |
//! | 向导校验 | [`WizardError`] |

use gymdesk_client::ClientError;

use crate::payroll::PayrollError;
use crate::workflow::WizardError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Payroll(#[from] PayrollError),

    #[error(transparent)]
    Wizard(#[from] WizardError),
}

impl AppError {
    /// Sentence for the page banner
    ///
    /// Validation-type failures keep their own message; transport failures
    /// collapse to "Failed to load <what>".
    pub fn user_message(&self, what: &str) -> String {
        match self {
            Self::Client(e) => e.user_message(what),
            Self::Payroll(e) => e.to_string(),
            Self::Wizard(e) => e.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let err = AppError::from(PayrollError::NoStaff);
        assert_eq!(err.user_message("payroll"), "No staff records found to generate payroll");

        let err = AppError::from(ClientError::Api {
            status: 503,
            message: "socket closed".into(),
        });
        assert_eq!(err.user_message("payroll"), "Failed to load payroll");
    }
}
