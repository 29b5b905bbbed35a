use std::str::FromStr;

use crate::models::error::ConvertError;

/// 長度單位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Inch,
    Millimeter,
}

impl LengthUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Inch => "in",
            LengthUnit::Millimeter => "mm",
        }
    }

    /// 互動模式顯示用的標籤
    pub fn label(&self) -> &'static str {
        match self {
            LengthUnit::Inch => "英寸 (in)",
            LengthUnit::Millimeter => "毫米 (mm)",
        }
    }
}

impl FromStr for LengthUnit {
    type Err = ConvertError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.to_lowercase().as_str() {
            "in" | "inch" | "\"" => Ok(LengthUnit::Inch),
            "mm" | "millimeter" => Ok(LengthUnit::Millimeter),
            _ => Err(ConvertError::UnknownUnit(token.to_string())),
        }
    }
}

/// 轉換方向，預設為英寸轉毫米
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    InchToMillimeter,
    MillimeterToInch,
}

impl Direction {
    pub const CONVERSION_FACTOR: f64 = 25.4;

    pub fn from_source(unit: LengthUnit) -> Self {
        match unit {
            LengthUnit::Inch => Direction::InchToMillimeter,
            LengthUnit::Millimeter => Direction::MillimeterToInch,
        }
    }

    pub fn source(&self) -> LengthUnit {
        match self {
            Direction::InchToMillimeter => LengthUnit::Inch,
            Direction::MillimeterToInch => LengthUnit::Millimeter,
        }
    }

    pub fn target(&self) -> LengthUnit {
        self.toggled().source()
    }

    pub fn toggled(&self) -> Self {
        match self {
            Direction::InchToMillimeter => Direction::MillimeterToInch,
            Direction::MillimeterToInch => Direction::InchToMillimeter,
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Direction::InchToMillimeter => value * Self::CONVERSION_FACTOR,
            Direction::MillimeterToInch => value / Self::CONVERSION_FACTOR,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub raw_input: String,
    pub direction: Direction,
}

impl ConversionRequest {
    pub fn new(raw_input: impl Into<String>, direction: Direction) -> Self {
        ConversionRequest { raw_input: raw_input.into(), direction }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutput {
    pub value: f64,
    pub formatted: String,
}

pub type ConversionResult = Result<ConversionOutput, ConvertError>;
