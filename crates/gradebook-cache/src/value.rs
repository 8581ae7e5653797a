//! Storable cache values

use redis::{RedisWrite, ToRedisArgs};
use std::fmt;

/// Value types the cache can store
///
/// Redis keeps every value as a byte string; integers and floats are written
/// in their ASCII decimal form, which is what [`crate::Cache::get_int`]
/// parses back.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheValue {
    /// UTF-8 string
    Str(String),
    /// Binary data
    Bytes(Vec<u8>),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point
    Float(f64),
}

impl ToRedisArgs for CacheValue {
    fn write_redis_args<W>(&self, out: &mut W)
    where
        W: ?Sized + RedisWrite,
    {
        match self {
            CacheValue::Str(s) => out.write_arg(s.as_bytes()),
            CacheValue::Bytes(b) => out.write_arg(b),
            CacheValue::Int(i) => out.write_arg(i.to_string().as_bytes()),
            CacheValue::Float(x) => out.write_arg(x.to_string().as_bytes()),
        }
    }
}

/// Textual rendering used for call-history entries; bytes are ASCII-escaped.
impl fmt::Display for CacheValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheValue::Str(s) => f.write_str(s),
            CacheValue::Bytes(b) => write!(f, "{}", b.escape_ascii()),
            CacheValue::Int(i) => write!(f, "{}", i),
            CacheValue::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<&str> for CacheValue {
    fn from(s: &str) -> Self {
        CacheValue::Str(s.to_string())
    }
}

impl From<String> for CacheValue {
    fn from(s: String) -> Self {
        CacheValue::Str(s)
    }
}

impl From<Vec<u8>> for CacheValue {
    fn from(b: Vec<u8>) -> Self {
        CacheValue::Bytes(b)
    }
}

impl From<&[u8]> for CacheValue {
    fn from(b: &[u8]) -> Self {
        CacheValue::Bytes(b.to_vec())
    }
}

impl From<i64> for CacheValue {
    fn from(i: i64) -> Self {
        CacheValue::Int(i)
    }
}

impl From<i32> for CacheValue {
    fn from(i: i32) -> Self {
        CacheValue::Int(i64::from(i))
    }
}

impl From<f64> for CacheValue {
    fn from(x: f64) -> Self {
        CacheValue::Float(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redis_args_are_byte_strings() {
        let args = CacheValue::Str("foo".to_string()).to_redis_args();
        assert_eq!(args, vec![b"foo".to_vec()]);

        let args = CacheValue::Bytes(vec![0x00, 0xff]).to_redis_args();
        assert_eq!(args, vec![vec![0x00, 0xff]]);

        let args = CacheValue::Int(-42).to_redis_args();
        assert_eq!(args, vec![b"-42".to_vec()]);

        let args = CacheValue::Float(3.14).to_redis_args();
        assert_eq!(args, vec![b"3.14".to_vec()]);
    }

    #[test]
    fn test_display_rendering() {
        assert_eq!(CacheValue::Str("foo".to_string()).to_string(), "foo");
        assert_eq!(CacheValue::Int(42).to_string(), "42");
        assert_eq!(CacheValue::Float(2.5).to_string(), "2.5");
        assert_eq!(
            CacheValue::Bytes(vec![b'h', b'i', 0x00]).to_string(),
            "hi\\x00"
        );
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(CacheValue::from("foo"), CacheValue::Str("foo".to_string()));
        assert_eq!(CacheValue::from(7), CacheValue::Int(7));
        assert_eq!(CacheValue::from(7_i64), CacheValue::Int(7));
        assert_eq!(CacheValue::from(1.5), CacheValue::Float(1.5));
        assert_eq!(
            CacheValue::from(vec![1_u8, 2]),
            CacheValue::Bytes(vec![1, 2])
        );
    }
}
