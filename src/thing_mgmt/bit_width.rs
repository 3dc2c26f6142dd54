use serde::Serialize;

use super::error::ConfigError;
use super::schema::ValueType;

/// Width of a data item's value on the wire
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum BitSize {
    B1,
    B8,
    B16,
    B32,
    B64,
}

impl BitSize {
    pub const ALL: [BitSize; 5] = [
        BitSize::B1,
        BitSize::B8,
        BitSize::B16,
        BitSize::B32,
        BitSize::B64,
    ];

    pub fn bits(self) -> u8 {
        match self {
            BitSize::B1 => 1,
            BitSize::B8 => 8,
            BitSize::B16 => 16,
            BitSize::B32 => 32,
            BitSize::B64 => 64,
        }
    }

    /// Value types that can be decoded from a value of this width
    pub fn value_types(self) -> &'static [ValueType] {
        use ValueType::*;
        match self {
            BitSize::B1 => &[Bool],
            BitSize::B8 => &[Bool, Int, Uint],
            BitSize::B16 => &[Int, Uint],
            BitSize::B32 => &[Int, Uint, Float],
            BitSize::B64 => &[Int64, Uint64, Float],
        }
    }

    pub fn admits(self, value_type: ValueType) -> bool {
        self.value_types().contains(&value_type)
    }
}

impl TryFrom<i32> for BitSize {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, i32> {
        BitSize::ALL
            .into_iter()
            .find(|size| i32::from(size.bits()) == value)
            .ok_or(value)
    }
}

impl From<BitSize> for u8 {
    fn from(value: BitSize) -> Self {
        value.bits()
    }
}

/// Check a declared bit width against the value type it must carry
pub fn validate_bit_size(
    group: &str,
    bit_size: i32,
    value_type: ValueType,
) -> Result<BitSize, ConfigError> {
    let size = BitSize::try_from(bit_size)
        .map_err(|bits| ConfigError::invalid(group, format!("unsupported bit size {bits}")))?;
    if !size.admits(value_type) {
        return Err(ConfigError::invalid(
            group,
            format!("{bit_size}-bit values cannot hold {value_type:?}"),
        ));
    }
    Ok(size)
}
