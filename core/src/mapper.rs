//! Interprets a transport outcome as a login result.
//!
//! Fail-closed: only a `200` whose body decodes as
//! `{"premium": bool, "token": string}` produces a [`UserInfo`].

use serde::Deserialize;

use crate::error::LoginError;
use crate::http::{HttpResponse, Outcome};
use crate::types::UserInfo;

pub const OK_200: u16 = 200;

/// Wire shape of a successful login response.
#[derive(Deserialize)]
struct RemoteUserInfo {
    premium: bool,
    token: String,
}

impl From<RemoteUserInfo> for UserInfo {
    fn from(remote: RemoteUserInfo) -> Self {
        UserInfo {
            is_premium: remote.premium,
            token: remote.token,
        }
    }
}

/// Map any outcome. Transport failures are reported as `Connectivity`
/// without looking at the cause.
pub fn map(outcome: Outcome) -> Result<UserInfo, LoginError> {
    match outcome {
        Ok(response) => map_response(&response),
        Err(_) => Err(LoginError::Connectivity),
    }
}

/// Map a response that completed at the protocol level.
pub fn map_response(response: &HttpResponse) -> Result<UserInfo, LoginError> {
    if response.status != OK_200 {
        return Err(LoginError::InvalidData);
    }
    serde_json::from_slice::<RemoteUserInfo>(&response.body)
        .map(UserInfo::from)
        .map_err(|_| LoginError::InvalidData)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;

    fn ok(status: u16, body: &str) -> Outcome {
        Ok(HttpResponse::new(status, body.as_bytes()))
    }

    #[test]
    fn transport_failure_is_connectivity() {
        assert_eq!(
            map(Err(TransportError::Network("a domain".to_string()))),
            Err(LoginError::Connectivity)
        );
        assert_eq!(
            map(Err(TransportError::UnexpectedRepresentation)),
            Err(LoginError::Connectivity)
        );
    }

    #[test]
    fn non_200_is_invalid_data_even_with_valid_body() {
        let body = r#"{"premium":true,"token":"t"}"#;
        for status in [201, 204, 301, 400, 401, 500] {
            assert_eq!(map(ok(status, body)), Err(LoginError::InvalidData), "{status}");
        }
    }

    #[test]
    fn invalid_json_is_invalid_data() {
        assert_eq!(map(ok(200, "invalid json")), Err(LoginError::InvalidData));
        assert_eq!(map(ok(200, "")), Err(LoginError::InvalidData));
    }

    #[test]
    fn missing_or_mistyped_fields_are_invalid_data() {
        assert_eq!(map(ok(200, r#"{"premium":true}"#)), Err(LoginError::InvalidData));
        assert_eq!(map(ok(200, r#"{"token":"t"}"#)), Err(LoginError::InvalidData));
        assert_eq!(
            map(ok(200, r#"{"premium":"yes","token":"t"}"#)),
            Err(LoginError::InvalidData)
        );
        assert_eq!(
            map(ok(200, r#"{"premium":false,"token":7}"#)),
            Err(LoginError::InvalidData)
        );
    }

    #[test]
    fn valid_body_maps_to_user_info() {
        assert_eq!(
            map(ok(200, r#"{"premium":false,"token":"a token"}"#)),
            Ok(UserInfo::new(false, "a token"))
        );
    }

    #[test]
    fn extra_fields_are_ignored() {
        assert_eq!(
            map(ok(200, r#"{"premium":true,"token":"t","plan":"gold"}"#)),
            Ok(UserInfo::new(true, "t"))
        );
    }
}
