//! Value objects.
//!
//! Raw strings coming from HTTP or WebSocket requests are validated here,
//! once, at the edge. The rest of the crate only handles the typed values.

use std::fmt;

use uuid::Uuid;

use super::error::ValueObjectError;

/// Room name: unique key in the room pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomName(String);

impl RoomName {
    /// Maximum number of characters in a room name.
    pub const MAX_LENGTH: usize = 64;

    /// Create a room name. Surrounding whitespace is trimmed.
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::EmptyRoomName);
        }

        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(ValueObjectError::RoomNameTooLong {
                length,
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RoomName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shared per-room secret required to delete a room or update its value.
///
/// `Debug` never prints the secret itself.
#[derive(Clone, PartialEq, Eq)]
pub struct RoomSecret(String);

impl RoomSecret {
    /// Maximum number of characters in a caller-chosen secret.
    pub const MAX_LENGTH: usize = 128;

    pub fn new(secret: String) -> Result<Self, ValueObjectError> {
        if secret.is_empty() {
            return Err(ValueObjectError::EmptySecret);
        }

        let length = secret.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(ValueObjectError::SecretTooLong {
                length,
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(secret))
    }

    /// Generate a random secret (UUID v4, 32 hex digits).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RoomSecret {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Debug for RoomSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RoomSecret(<redacted>)")
    }
}

/// The value shared in a room (a QR-code payload).
///
/// Empty is valid: it is the initial value of every room.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomValue(String);

impl RoomValue {
    /// QR code version 40 holds at most 4296 alphanumeric characters.
    pub const MAX_BYTES: usize = 4296;

    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.len() > Self::MAX_BYTES {
            return Err(ValueObjectError::ValueTooLong {
                length: value.len(),
                max: Self::MAX_BYTES,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RoomValue {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Opaque identity of one subscriber registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(Uuid);

impl ClientId {
    /// Generate a fresh random (128-bit) client ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unix timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_name_trims_whitespace() {
        // テスト項目: ルーム名の前後の空白は取り除かれる
        // given (前提条件):
        let raw = "  alpha ".to_string();

        // when (操作):
        let name = RoomName::new(raw).unwrap();

        // then (期待する結果):
        assert_eq!(name.as_str(), "alpha");
    }

    #[test]
    fn test_room_name_rejects_blank() {
        // テスト項目: 空白のみのルーム名は拒否される
        // given (前提条件):
        let raw = "   ".to_string();

        // when (操作):
        let result = RoomName::new(raw);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::EmptyRoomName));
    }

    #[test]
    fn test_room_name_rejects_too_long() {
        // テスト項目: 上限を超える長さのルーム名は拒否される
        // given (前提条件):
        let raw = "a".repeat(RoomName::MAX_LENGTH + 1);

        // when (操作):
        let result = RoomName::new(raw);

        // then (期待する結果):
        assert_eq!(
            result,
            Err(ValueObjectError::RoomNameTooLong {
                length: RoomName::MAX_LENGTH + 1,
                max: RoomName::MAX_LENGTH,
            })
        );
    }

    #[test]
    fn test_room_secret_rejects_empty() {
        // テスト項目: 空のシークレットは拒否される
        // given (前提条件):
        let raw = String::new();

        // when (操作):
        let result = RoomSecret::new(raw);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::EmptySecret));
    }

    #[test]
    fn test_generated_secrets_are_distinct() {
        // テスト項目: 生成されたシークレットは毎回異なる
        // given (前提条件):

        // when (操作):
        let first = RoomSecret::generate();
        let second = RoomSecret::generate();

        // then (期待する結果):
        assert_ne!(first, second);
        assert_eq!(first.as_str().len(), 32);
    }

    #[test]
    fn test_room_secret_debug_is_redacted() {
        // テスト項目: Debug 出力にシークレットが含まれない
        // given (前提条件):
        let secret = RoomSecret::new("hunter2".to_string()).unwrap();

        // when (操作):
        let debug = format!("{:?}", secret);

        // then (期待する結果):
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_room_value_allows_empty_and_rejects_oversized() {
        // テスト項目: 空の値は許可され、上限を超える値は拒否される
        // given (前提条件):
        let oversized = "x".repeat(RoomValue::MAX_BYTES + 1);

        // when (操作):
        let empty = RoomValue::new(String::new());
        let too_long = RoomValue::new(oversized);

        // then (期待する結果):
        assert_eq!(empty, Ok(RoomValue::default()));
        assert!(matches!(
            too_long,
            Err(ValueObjectError::ValueTooLong { .. })
        ));
    }
}
