use std::fmt;

use serde::Serialize;

/// Credentials for the IAM login exchange. Pass-through data: nothing is
/// validated locally, the cluster rejects bad credentials at login time.
///
/// Serializes directly to the login request body.
#[derive(Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum AuthCredentials {
    /// Interactive user account: `{"uid": ..., "password": ...}`
    UserAccount { uid: String, password: String },
    /// Service account with a pre-signed login token:
    /// `{"uid": ..., "token": ...}`
    ServiceAccount {
        uid: String,
        #[serde(rename = "token")]
        login_token: String,
    },
}

impl AuthCredentials {
    pub fn for_user_account(uid: impl Into<String>, password: impl Into<String>) -> Self {
        Self::UserAccount {
            uid: uid.into(),
            password: password.into(),
        }
    }

    pub fn for_service_account(uid: impl Into<String>, login_token: impl Into<String>) -> Self {
        Self::ServiceAccount {
            uid: uid.into(),
            login_token: login_token.into(),
        }
    }

    pub fn uid(&self) -> &str {
        match self {
            Self::UserAccount { uid, .. } => uid,
            Self::ServiceAccount { uid, .. } => uid,
        }
    }
}

// Secret material stays out of logs.
impl fmt::Debug for AuthCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserAccount { uid, .. } => {
                write!(f, "UserAccount {{ uid: {:?}, password: <redacted> }}", uid)
            }
            Self::ServiceAccount { uid, .. } => {
                write!(f, "ServiceAccount {{ uid: {:?}, token: <redacted> }}", uid)
            }
        }
    }
}
