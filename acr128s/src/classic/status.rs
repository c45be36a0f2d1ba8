// acr128s/src/classic/status.rs

use derive_more::Display;

use crate::constants::{
    CLASSIC_AUTH_FAILED, CLASSIC_GENERAL_FAILURE, CLASSIC_LOGIN_SUCCESS, CLASSIC_NO_TAG,
    CLASSIC_OPERATION_MODE_FAILURE, CLASSIC_OUT_OF_RANGE,
};
use crate::error::FramingError;

/// Status character leading a classic-chip reply.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ClassicStatus {
    #[display(fmt = "login success")]
    LoginSuccess,
    #[display(fmt = "authentication failed")]
    AuthenticationFailed,
    #[display(fmt = "general failure")]
    GeneralFailure,
    #[display(fmt = "no tag in field")]
    NoTagInField,
    #[display(fmt = "operation mode failure")]
    OperationModeFailure,
    #[display(fmt = "out of range")]
    OutOfRange,
}

impl ClassicStatus {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            CLASSIC_LOGIN_SUCCESS => Some(Self::LoginSuccess),
            CLASSIC_AUTH_FAILED => Some(Self::AuthenticationFailed),
            CLASSIC_GENERAL_FAILURE => Some(Self::GeneralFailure),
            CLASSIC_NO_TAG => Some(Self::NoTagInField),
            CLASSIC_OPERATION_MODE_FAILURE => Some(Self::OperationModeFailure),
            CLASSIC_OUT_OF_RANGE => Some(Self::OutOfRange),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::LoginSuccess => CLASSIC_LOGIN_SUCCESS,
            Self::AuthenticationFailed => CLASSIC_AUTH_FAILED,
            Self::GeneralFailure => CLASSIC_GENERAL_FAILURE,
            Self::NoTagInField => CLASSIC_NO_TAG,
            Self::OperationModeFailure => CLASSIC_OPERATION_MODE_FAILURE,
            Self::OutOfRange => CLASSIC_OUT_OF_RANGE,
        }
    }

    /// Classify a raw reply by its first byte.
    pub fn from_response(response: &[u8]) -> Result<Self, FramingError> {
        let code = *response.first().ok_or(FramingError::Empty)?;
        Self::from_code(code).ok_or(FramingError::UnknownStatus { code })
    }

    pub fn is_success(self) -> bool {
        self == Self::LoginSuccess
    }
}
