//! Event trigger configuration of a data item
//!
//! A data item reports its value when one of its triggers fires: crossing the
//! lower or upper threshold, a fixed time interval, or any change of value.
//! Trigger payloads (limits, interval) only exist while the trigger is set, so
//! the flag set is always derived from the configuration instead of stored
//! next to it.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use super::catalog::Catalog;
use super::error::ConfigError;
use super::fields;
use super::schema::ValueType;
use crate::constants::keys;
use crate::interfaces::ConfigStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventFlag {
    Time,
    LowerThreshold,
    UpperThreshold,
    Change,
    /// The data item is not registered with the cloud; event updates for it
    /// are ignored
    Unregistered,
}

impl EventFlag {
    pub const ALL: [EventFlag; 5] = [
        EventFlag::Time,
        EventFlag::LowerThreshold,
        EventFlag::UpperThreshold,
        EventFlag::Change,
        EventFlag::Unregistered,
    ];

    /// Bit used for this flag in the protocol's event flag byte
    pub const fn bit(self) -> u8 {
        match self {
            EventFlag::Time => 0x01,
            EventFlag::LowerThreshold => 0x02,
            EventFlag::UpperThreshold => 0x04,
            EventFlag::Change => 0x08,
            EventFlag::Unregistered => 0x80,
        }
    }
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EventFlags(u8);

impl EventFlags {
    pub const fn empty() -> Self {
        EventFlags(0)
    }

    /// Parse the protocol byte; unknown bits are rejected
    pub fn from_bits(bits: u8) -> Option<Self> {
        let flags: EventFlags = EventFlag::ALL
            .into_iter()
            .filter(|flag| bits & flag.bit() != 0)
            .collect();
        (flags.0 == bits).then_some(flags)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, flag: EventFlag) -> bool {
        self.0 & flag.bit() != 0
    }

    pub fn insert(&mut self, flag: EventFlag) {
        self.0 |= flag.bit();
    }

    pub fn with(mut self, flag: EventFlag) -> Self {
        self.insert(flag);
        self
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = EventFlag> {
        EventFlag::ALL
            .into_iter()
            .filter(move |flag| self.contains(*flag))
    }
}

impl FromIterator<EventFlag> for EventFlags {
    fn from_iter<I: IntoIterator<Item = EventFlag>>(iter: I) -> Self {
        let mut flags = EventFlags::empty();
        for flag in iter {
            flags.insert(flag);
        }
        flags
    }
}

impl fmt::Debug for EventFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for EventFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

/// Threshold value, in the representation selected by the schema's value type
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LimitValue {
    Int(i32),
    Float(f64),
    Bool(bool),
    Int64(i64),
    Uint(u32),
    Uint64(u64),
}

impl LimitValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            LimitValue::Int(_) => ValueType::Int,
            LimitValue::Float(_) => ValueType::Float,
            LimitValue::Bool(_) => ValueType::Bool,
            LimitValue::Int64(_) => ValueType::Int64,
            LimitValue::Uint(_) => ValueType::Uint,
            LimitValue::Uint64(_) => ValueType::Uint64,
        }
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, LimitValue::Float(f) if f.is_nan())
    }
}

/// Limits of different representations are not comparable
impl PartialOrd for LimitValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (LimitValue::Int(a), LimitValue::Int(b)) => a.partial_cmp(b),
            (LimitValue::Float(a), LimitValue::Float(b)) => a.partial_cmp(b),
            (LimitValue::Bool(a), LimitValue::Bool(b)) => a.partial_cmp(b),
            (LimitValue::Int64(a), LimitValue::Int64(b)) => a.partial_cmp(b),
            (LimitValue::Uint(a), LimitValue::Uint(b)) => a.partial_cmp(b),
            (LimitValue::Uint64(a), LimitValue::Uint64(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EventConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    lower_limit: Option<LimitValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    upper_limit: Option<LimitValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_sec: Option<u32>,
    change: bool,
    #[serde(skip)]
    unregistered: bool,
}

impl EventConfig {
    /// No triggers configured
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that marks the data item as unregistered
    pub fn unregistered() -> Self {
        EventConfig {
            unregistered: true,
            ..Self::default()
        }
    }

    /// Assemble from a protocol flag byte and the payload fields that go with
    /// it. Payload for a trigger whose flag is unset is dropped; a set flag
    /// without payload yields `None`.
    pub fn from_flags(
        flags: EventFlags,
        lower_limit: Option<LimitValue>,
        upper_limit: Option<LimitValue>,
        time_sec: Option<u32>,
    ) -> Option<Self> {
        fn take<T>(set: bool, value: Option<T>) -> Option<Option<T>> {
            match (set, value) {
                (true, Some(v)) => Some(Some(v)),
                (true, None) => None,
                (false, _) => Some(None),
            }
        }

        Some(EventConfig {
            lower_limit: take(flags.contains(EventFlag::LowerThreshold), lower_limit)?,
            upper_limit: take(flags.contains(EventFlag::UpperThreshold), upper_limit)?,
            time_sec: take(flags.contains(EventFlag::Time), time_sec)?,
            change: flags.contains(EventFlag::Change),
            unregistered: flags.contains(EventFlag::Unregistered),
        })
    }

    pub fn with_lower_limit(mut self, limit: LimitValue) -> Self {
        self.lower_limit = Some(limit);
        self
    }

    pub fn with_upper_limit(mut self, limit: LimitValue) -> Self {
        self.upper_limit = Some(limit);
        self
    }

    pub fn with_time_sec(mut self, time_sec: u32) -> Self {
        self.time_sec = Some(time_sec);
        self
    }

    pub fn with_change(mut self) -> Self {
        self.change = true;
        self
    }

    pub fn flags(&self) -> EventFlags {
        let mut flags = EventFlags::empty();
        if self.time_sec.is_some() {
            flags.insert(EventFlag::Time);
        }
        if self.lower_limit.is_some() {
            flags.insert(EventFlag::LowerThreshold);
        }
        if self.upper_limit.is_some() {
            flags.insert(EventFlag::UpperThreshold);
        }
        if self.change {
            flags.insert(EventFlag::Change);
        }
        if self.unregistered {
            flags.insert(EventFlag::Unregistered);
        }
        flags
    }

    pub fn lower_limit(&self) -> Option<LimitValue> {
        self.lower_limit
    }

    pub fn upper_limit(&self) -> Option<LimitValue> {
        self.upper_limit
    }

    pub fn time_sec(&self) -> Option<u32> {
        self.time_sec
    }

    pub fn on_change(&self) -> bool {
        self.change
    }

    pub fn is_unregistered(&self) -> bool {
        self.unregistered
    }
}

fn read_limit<S: ConfigStore>(
    store: &S,
    group: &str,
    key: &str,
    value_type: ValueType,
) -> Result<Option<LimitValue>, ConfigError> {
    let limit = match value_type {
        ValueType::Int => fields::optional(store, group, key)?.map(LimitValue::Int),
        ValueType::Float => fields::optional(store, group, key)?.map(LimitValue::Float),
        ValueType::Bool => fields::optional(store, group, key)?.map(LimitValue::Bool),
        ValueType::Int64 => fields::optional(store, group, key)?.map(LimitValue::Int64),
        ValueType::Uint => fields::optional(store, group, key)?.map(LimitValue::Uint),
        ValueType::Uint64 => fields::optional(store, group, key)?.map(LimitValue::Uint64),
        ValueType::Raw => {
            if store.has_key(group, key)? {
                return Err(ConfigError::invalid(
                    group,
                    format!("{key} is not supported for raw values"),
                ));
            }
            None
        }
    };
    Ok(limit)
}

/// Read and validate the event configuration of one data item group
pub fn read_event<S, C>(
    store: &S,
    group: &str,
    value_type: ValueType,
    catalog: &C,
) -> Result<EventConfig, ConfigError>
where
    S: ConfigStore,
    C: Catalog + ?Sized,
{
    let event = EventConfig {
        lower_limit: read_limit(store, group, keys::EVENT_LOWER_THRESHOLD, value_type)?,
        upper_limit: read_limit(store, group, keys::EVENT_UPPER_THRESHOLD, value_type)?,
        time_sec: fields::optional(store, group, keys::EVENT_TIME_SEC)?,
        // the key's presence enables the trigger, whatever it holds
        change: store.has_key(group, keys::EVENT_CHANGE)?,
        unregistered: false,
    };

    if !catalog.event_is_valid(&event, value_type) {
        return Err(ConfigError::invalid(
            group,
            format!("event configuration {event:?} is not valid for {value_type:?} values"),
        ));
    }
    Ok(event)
}
