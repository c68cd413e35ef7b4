use std::fmt;

use crate::format::format_raw;

/// 24-bit color in `0xRRGGBB` form, the same layout GPUI's `rgb()` takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const fn hex(self) -> u32 {
        self.0
    }

    /// `0xRRGGBBAA`, for GPUI's `rgba()`.
    pub const fn with_alpha(self, alpha: u8) -> u32 {
        (self.0 << 8) | alpha as u32
    }

    /// Parses `#rrggbb` or `rrggbb`.
    pub fn from_hex(raw: &str) -> Option<Self> {
        let digits = raw.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Rgb)
    }

    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let channel = |shift: u32| {
            let a = ((self.0 >> shift) & 0xff) as f64;
            let b = ((other.0 >> shift) & 0xff) as f64;
            ((a + (b - a) * t).round() as u32) << shift
        };
        Rgb(channel(16) | channel(8) | channel(0))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// One cell of a dataset record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Number(f64),
    Text(&'static str),
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            Value::Number(v) => Some(v),
            Value::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&'static str> {
        match *self {
            Value::Text(s) => Some(s),
            Value::Number(_) => None,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value.into())
    }
}

impl From<&'static str> for Value {
    fn from(value: &'static str) -> Self {
        Value::Text(value)
    }
}

/// Plain rendering without grouping; `2018` stays `2018`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Value::Number(v) => f.write_str(&format_raw(v)),
            Value::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<(&'static str, Value)>,
}

impl Record {
    pub fn new(fields: impl IntoIterator<Item = (&'static str, Value)>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    pub fn get(&self, field: &str) -> Option<Value> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| *value)
    }

    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(|v| v.as_number())
    }

    pub fn has(&self, field: &str) -> bool {
        self.fields.iter().any(|(name, _)| *name == field)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }
}

/// Builds a [`Record`] from `field: value` pairs.
#[macro_export]
macro_rules! record {
    ($($field:ident : $value:expr),* $(,)?) => {
        $crate::Record::new([$((stringify!($field), $crate::Value::from($value))),*])
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetId {
    TechAdoption,
    GlobalCarbon,
    StartupMetrics,
    IndustryDistribution,
}

impl DatasetId {
    pub fn as_str(self) -> &'static str {
        match self {
            DatasetId::TechAdoption => "tech-adoption",
            DatasetId::GlobalCarbon => "global-carbon",
            DatasetId::StartupMetrics => "startup-metrics",
            DatasetId::IndustryDistribution => "industry-distribution",
        }
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable ordered records. Built once, then only ever borrowed.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    id: DatasetId,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(id: DatasetId, records: Vec<Record>) -> Self {
        Self { id, records }
    }

    pub fn id(&self) -> DatasetId {
        self.id
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
