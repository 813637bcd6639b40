//! Operand values captured by a failed comparison.

use core::fmt;

#[cfg(feature = "long")]
use core::ffi::{c_long, c_ulong};
#[cfg(feature = "longlong")]
use core::ffi::{c_longlong, c_ulonglong};

/// Tagged operand of a comparison.
///
/// Exactly one variant is meaningful per failure, selected by the assertion
/// form that recorded it. The wider kinds are only compiled in when the
/// matching Cargo feature is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Value {
    /// No operand recorded.
    #[default]
    None,
    Int(i32),
    UInt(u32),
    /// Pointer address.
    Ptr(usize),
    #[cfg(feature = "long")]
    Long(c_long),
    #[cfg(feature = "long")]
    ULong(c_ulong),
    #[cfg(feature = "longlong")]
    LongLong(c_longlong),
    #[cfg(feature = "longlong")]
    ULongLong(c_ulonglong),
    #[cfg(feature = "float")]
    Float(f32),
    #[cfg(feature = "double")]
    Double(f64),
}

impl Value {
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Short name of the operand kind, used in failure logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Ptr(_) => "ptr",
            #[cfg(feature = "long")]
            Value::Long(_) => "long",
            #[cfg(feature = "long")]
            Value::ULong(_) => "ulong",
            #[cfg(feature = "longlong")]
            Value::LongLong(_) => "longlong",
            #[cfg(feature = "longlong")]
            Value::ULongLong(_) => "ulonglong",
            #[cfg(feature = "float")]
            Value::Float(_) => "float",
            #[cfg(feature = "double")]
            Value::Double(_) => "double",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("-"),
            Value::Int(v) => write!(f, "{v}"),
            Value::UInt(v) => write!(f, "{v}"),
            Value::Ptr(addr) => write!(f, "{addr:#x}"),
            #[cfg(feature = "long")]
            Value::Long(v) => write!(f, "{v}"),
            #[cfg(feature = "long")]
            Value::ULong(v) => write!(f, "{v}"),
            #[cfg(feature = "longlong")]
            Value::LongLong(v) => write!(f, "{v}"),
            #[cfg(feature = "longlong")]
            Value::ULongLong(v) => write!(f, "{v}"),
            #[cfg(feature = "float")]
            Value::Float(v) => write!(f, "{v}"),
            #[cfg(feature = "double")]
            Value::Double(v) => write!(f, "{v}"),
        }
    }
}
