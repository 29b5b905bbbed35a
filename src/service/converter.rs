use log::debug;

use crate::models::conversion::{ConversionOutput, ConversionRequest, ConversionResult, Direction};
use crate::models::error::ConvertError;
use crate::service::traits::i_service::ConverterServiceTrait;

/// 轉換服務，實現 ConverterServiceTrait
#[derive(Debug, Default, Clone, Copy)]
pub struct ConversionService;

impl ConversionService {
    pub fn new() -> Self {
        ConversionService
    }
}

impl ConverterServiceTrait for ConversionService {
    fn convert(&self, request: &ConversionRequest) -> ConversionResult {
        let result = convert(&request.raw_input, request.direction);
        debug!(
            "轉換 {:?}（{:?}）→ {:?}",
            request.raw_input, request.direction, result
        );
        result
    }
}

/// 將輸入文字依方向轉換，空白輸入回傳 "0.00"
pub fn convert(raw_input: &str, direction: Direction) -> ConversionResult {
    if raw_input.trim().is_empty() {
        return Ok(ConversionOutput { value: 0.0, formatted: format_fixed(0.0) });
    }
    let value = parse_number(raw_input)?;
    finish(direction.apply(value), raw_input)
}

/// 解析數值，空白或非有限值皆視為無效
pub fn parse_number(raw_input: &str) -> Result<f64, ConvertError> {
    let trimmed = raw_input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ConvertError::InvalidNumber(trimmed.to_string())),
    }
}

pub fn format_fixed(value: f64) -> String {
    format!("{:.2}", value)
}

fn finish(result: f64, raw_input: &str) -> ConversionResult {
    // inf 與 nan 無法以兩位小數的定點格式表示，一律視為無效數字
    if !result.is_finite() {
        return Err(ConvertError::InvalidNumber(raw_input.trim().to_string()));
    }
    Ok(ConversionOutput { value: result, formatted: format_fixed(result) })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatted(raw: &str, direction: Direction) -> String {
        convert(raw, direction).expect("valid number").formatted
    }

    #[test]
    fn empty_input_is_zero_for_both_directions() {
        for direction in [Direction::InchToMillimeter, Direction::MillimeterToInch] {
            let output = convert("", direction).expect("empty input is not an error");
            assert_eq!(output.formatted, "0.00");
            assert_eq!(output.value, 0.0);
            assert_eq!(formatted("   \t", direction), "0.00");
        }
    }

    #[test]
    fn garbage_is_invalid_for_both_directions() {
        for direction in [Direction::InchToMillimeter, Direction::MillimeterToInch] {
            assert_eq!(
                convert("abc", direction),
                Err(ConvertError::InvalidNumber("abc".to_string()))
            );
            assert!(convert("1.2.3", direction).is_err());
            assert!(convert("12abc", direction).is_err());
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(formatted("1", Direction::InchToMillimeter), "25.40");
        assert_eq!(formatted("25.4", Direction::MillimeterToInch), "1.00");
        assert_eq!(formatted("-2", Direction::InchToMillimeter), "-50.80");
        assert_eq!(formatted("10", Direction::MillimeterToInch), "0.39");
        assert_eq!(formatted("0", Direction::InchToMillimeter), "0.00");
    }

    #[test]
    fn ties_round_like_fixed_point_formatting() {
        assert_eq!(formatted("3.175", Direction::MillimeterToInch), "0.12");
        assert_eq!(formatted("15.875", Direction::MillimeterToInch), "0.62");
        assert_eq!(formatted("22.225", Direction::MillimeterToInch), "0.88");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(formatted("  1  ", Direction::InchToMillimeter), "25.40");
        assert_eq!(formatted("\n.5", Direction::InchToMillimeter), "12.70");
    }

    #[test]
    fn large_values_stay_fixed_point() {
        let output = formatted("1000000", Direction::InchToMillimeter);
        assert_eq!(output, "25400000.00");
        assert!(!output.contains('e'));
    }

    #[test]
    fn non_finite_values_are_invalid() {
        assert!(convert("inf", Direction::InchToMillimeter).is_err());
        assert!(convert("NaN", Direction::MillimeterToInch).is_err());
        assert!(convert("1e308", Direction::InchToMillimeter).is_err());
    }

    #[test]
    fn parse_number_rejects_empty() {
        assert_eq!(parse_number(" 3.5 "), Ok(3.5));
        assert_eq!(parse_number(""), Err(ConvertError::InvalidNumber(String::new())));
    }

    #[test]
    fn round_trip_within_two_decimals() {
        for raw in ["0", "1", "3.14159", "-7.25", "12.5", "0.01", "254"] {
            let original: f64 = raw.parse().expect("test input parses");
            let mm = formatted(raw, Direction::InchToMillimeter);
            let back: f64 = formatted(&mm, Direction::MillimeterToInch)
                .parse()
                .expect("formatted output parses");
            assert!(
                (back - original).abs() <= 0.01,
                "{} -> {} mm -> {} in",
                raw,
                mm,
                back
            );
        }
    }

    #[test]
    fn service_delegates_to_convert() {
        let service = ConversionService::new();
        let request = ConversionRequest::new("25.4", Direction::MillimeterToInch);
        assert_eq!(service.convert(&request), convert("25.4", Direction::MillimeterToInch));
    }
}
