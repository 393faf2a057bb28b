use crate::domain::common::entities::app_errors::CoreError;

/// Header clients send to keep their own recognition context.
pub const SESSION_HEADER: &str = "x-session-id";

pub const MAX_SESSION_ID_LEN: usize = 128;

/// Which recognition slot a request reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SessionScope {
    /// Process-wide slot shared by every client that sends no session id.
    Global,
    Client(String),
}

impl SessionScope {
    /// Only an absent header maps to the global slot. A header that is sent
    /// must hold 1 to [`MAX_SESSION_ID_LEN`] bytes of UTF-8 after trimming.
    pub fn from_header(value: Option<&[u8]>) -> Result<Self, CoreError> {
        let Some(raw) = value else {
            return Ok(Self::Global);
        };

        let id = std::str::from_utf8(raw)
            .map_err(|_| CoreError::InvalidSessionId {
                max: MAX_SESSION_ID_LEN,
            })?
            .trim();

        if id.is_empty() || id.len() > MAX_SESSION_ID_LEN {
            return Err(CoreError::InvalidSessionId {
                max: MAX_SESSION_ID_LEN,
            });
        }

        Ok(Self::Client(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_from_header() {
        assert_eq!(SessionScope::from_header(None), Ok(SessionScope::Global));
        assert_eq!(
            SessionScope::from_header(Some(b" abc ".as_slice())),
            Ok(SessionScope::Client("abc".to_string()))
        );
        assert_eq!(
            SessionScope::from_header(Some("x".repeat(MAX_SESSION_ID_LEN).as_bytes())),
            Ok(SessionScope::Client("x".repeat(MAX_SESSION_ID_LEN)))
        );
    }

    #[test]
    fn test_sent_but_invalid_header_never_maps_to_global() {
        let invalid = CoreError::InvalidSessionId {
            max: MAX_SESSION_ID_LEN,
        };
        let too_long = "x".repeat(MAX_SESSION_ID_LEN + 1);

        assert_eq!(SessionScope::from_header(Some(b"  ".as_slice())), Err(invalid.clone()));
        assert_eq!(SessionScope::from_header(Some(b"".as_slice())), Err(invalid.clone()));
        assert_eq!(
            SessionScope::from_header(Some(too_long.as_bytes())),
            Err(invalid.clone())
        );
        assert_eq!(
            SessionScope::from_header(Some([0xff, 0xfe, 0x41].as_slice())),
            Err(invalid)
        );
    }
}
