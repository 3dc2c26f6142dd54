//! Semantic catalog of legal sensor types, units and event configurations
//!
//! Type ids and units are kept as the numeric codes used on the wire. The
//! meaning of a unit code depends on the type id it is paired with, so the
//! two are only ever validated together.

use serde::Serialize;

use super::event::EventConfig;
use super::schema::ValueType;
use crate::constants::limits;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TypeId(pub u16);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Unit(pub u16);

impl TypeId {
    pub const NONE: TypeId = TypeId(0x0000);
    pub const VOLTAGE: TypeId = TypeId(0x0001);
    pub const CURRENT: TypeId = TypeId(0x0002);
    pub const RESISTANCE: TypeId = TypeId(0x0003);
    pub const POWER: TypeId = TypeId(0x0004);
    pub const TEMPERATURE: TypeId = TypeId(0x0005);
    pub const RELATIVE_HUMIDITY: TypeId = TypeId(0x0006);
    pub const LUMINOSITY: TypeId = TypeId(0x0007);
    pub const TIME: TypeId = TypeId(0x0008);
    pub const MASS: TypeId = TypeId(0x0009);
    pub const PRESSURE: TypeId = TypeId(0x000A);
    pub const DISTANCE: TypeId = TypeId(0x000B);
    pub const ANGLE: TypeId = TypeId(0x000C);
    pub const VOLUME: TypeId = TypeId(0x000D);
    pub const AREA: TypeId = TypeId(0x000E);
    pub const RAIN: TypeId = TypeId(0x000F);
    pub const DENSITY: TypeId = TypeId(0x0010);
    pub const LATITUDE: TypeId = TypeId(0x0011);
    pub const LONGITUDE: TypeId = TypeId(0x0012);
    pub const SPEED: TypeId = TypeId(0x0013);
    pub const VOLUME_FLOW: TypeId = TypeId(0x0014);
    pub const ENERGY: TypeId = TypeId(0x0015);

    pub const GENERIC: TypeId = TypeId(0xFF10);

    pub const PRESENCE: TypeId = TypeId(0xFFF1);
    pub const SWITCH: TypeId = TypeId(0xFFF2);
    pub const COMMAND: TypeId = TypeId(0xFFF3);
}

pub mod units {
    use super::Unit;

    pub const NOT_APPLICABLE: Unit = Unit(0);

    pub const VOLTAGE_V: Unit = Unit(1);
    pub const VOLTAGE_MV: Unit = Unit(2);
    pub const VOLTAGE_KV: Unit = Unit(3);

    pub const TEMPERATURE_C: Unit = Unit(1);
    pub const TEMPERATURE_F: Unit = Unit(2);
    pub const TEMPERATURE_K: Unit = Unit(3);

    pub const RELATIVE_HUMIDITY: Unit = Unit(1);
}

/// Legal (type id, value type, unit) combinations and event rules
pub trait Catalog {
    fn schema_is_valid(&self, type_id: TypeId, value_type: ValueType, unit: Unit) -> bool;

    fn event_is_valid(&self, event: &EventConfig, value_type: ValueType) -> bool;
}

/// The catalog shipped with the agent
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardCatalog;

const NUMERIC: &[ValueType] = &[
    ValueType::Int,
    ValueType::Uint,
    ValueType::Float,
    ValueType::Int64,
    ValueType::Uint64,
];

// Measured quantities: highest unit code defined for each type id. Units
// start at 1.
const MEASURED: &[(TypeId, u16)] = &[
    (TypeId::VOLTAGE, 3),           // V, mV, kV
    (TypeId::CURRENT, 2),           // A, mA
    (TypeId::RESISTANCE, 1),        // Ohm
    (TypeId::POWER, 3),             // W, kW, mW
    (TypeId::TEMPERATURE, 3),       // C, F, K
    (TypeId::RELATIVE_HUMIDITY, 1), // %
    (TypeId::LUMINOSITY, 3),        // lm, cd, lx
    (TypeId::TIME, 3),              // s, ms, us
    (TypeId::MASS, 5),              // kg, g, lb, oz, t
    (TypeId::PRESSURE, 4),          // Pa, psi, bar, inHg
    (TypeId::DISTANCE, 5),          // m, cm, mm, km, mi
    (TypeId::ANGLE, 2),             // rad, deg
    (TypeId::VOLUME, 3),            // l, ml, fl oz
    (TypeId::AREA, 3),              // m2, ha, acre
    (TypeId::RAIN, 1),              // mm
    (TypeId::DENSITY, 1),           // kg/m3
    (TypeId::LATITUDE, 1),          // deg
    (TypeId::LONGITUDE, 1),         // deg
    (TypeId::SPEED, 3),             // m/s, cm/s, km/h
    (TypeId::VOLUME_FLOW, 3),       // m3/s, l/s, l/min
    (TypeId::ENERGY, 4),            // J, Nm, Wh, kWh
];

impl Catalog for StandardCatalog {
    fn schema_is_valid(&self, type_id: TypeId, value_type: ValueType, unit: Unit) -> bool {
        if let Some((_, max_unit)) = MEASURED.iter().find(|(id, _)| *id == type_id) {
            return NUMERIC.contains(&value_type) && (1..=*max_unit).contains(&unit.0);
        }
        if unit != units::NOT_APPLICABLE {
            return false;
        }
        match type_id {
            TypeId::GENERIC => value_type != ValueType::Raw,
            TypeId::PRESENCE | TypeId::SWITCH => value_type == ValueType::Bool,
            TypeId::COMMAND => value_type == ValueType::Raw,
            _ => false,
        }
    }

    fn event_is_valid(&self, event: &EventConfig, value_type: ValueType) -> bool {
        if let Some(time_sec) = event.time_sec() {
            if !(limits::EVENT_MIN_TIME_SEC..=limits::EVENT_MAX_TIME_SEC).contains(&time_sec) {
                return false;
            }
        }

        let limits_match = [event.lower_limit(), event.upper_limit()]
            .into_iter()
            .flatten()
            .all(|limit| limit.value_type() == value_type && !limit.is_nan());
        if !limits_match {
            return false;
        }

        match (event.lower_limit(), event.upper_limit()) {
            (Some(lower), Some(upper)) => lower <= upper,
            _ => true,
        }
    }
}
