use std::io;
use std::process::ExitCode;

use clap::Parser;

use crate::action::interactive::process_interactive_mode;
use crate::config::config::{usage_line, Cli};
use crate::models::conversion::{ConversionRequest, Direction, LengthUnit};
use crate::service::converter::{parse_number, ConversionService};
use crate::service::traits::i_service::ConverterServiceTrait;
use crate::utils::utils::setup_logging;

pub fn process_args(args: Vec<String>) -> io::Result<ExitCode> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode(args)
    }
}

pub fn process_cli_mode(args: Vec<String>) -> io::Result<ExitCode> {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(_) => {
            // 參數無法解析時一律視為用法錯誤
            println!("{}", usage_line());
            return Ok(ExitCode::FAILURE);
        }
    };
    setup_logging(&cli.log_level)?;
    if !cli.rest.is_empty() {
        log::info!("忽略多餘的參數：{:?}", cli.rest);
    }

    let service = ConversionService::new();
    let outcome = run_batch(&service, cli.number.as_deref(), cli.unit.as_deref());
    println!("{}", outcome.message);
    Ok(outcome.exit_code())
}

/// 單次批次轉換的結果：要輸出的一行文字與是否成功
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    pub message: String,
    pub success: bool,
}

impl BatchOutcome {
    fn success(message: String) -> Self {
        BatchOutcome { message, success: true }
    }

    fn failure(message: String) -> Self {
        BatchOutcome { message, success: false }
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

pub fn run_batch(
    service: &dyn ConverterServiceTrait,
    number: Option<&str>,
    unit: Option<&str>,
) -> BatchOutcome {
    let (number, unit) = match (number, unit) {
        (Some(number), Some(unit)) => (number, unit),
        _ => {
            log::info!("參數不足，需要數值與單位");
            return BatchOutcome::failure(usage_line());
        }
    };

    // 先檢查數值，再檢查單位
    if let Err(e) = parse_number(number) {
        log::info!("無法解析數值：{:?}", number);
        return BatchOutcome::failure(format!("Error: {}", e));
    }
    let direction = match unit.parse::<LengthUnit>() {
        Ok(unit) => Direction::from_source(unit),
        Err(e) => {
            log::info!("未知的單位：{:?}", unit);
            return BatchOutcome::failure(format!("Error: {}", e));
        }
    };

    match service.convert(&ConversionRequest::new(number, direction)) {
        Ok(output) => {
            log::info!(
                "{} {} → {} {}",
                number.trim(),
                direction.source().symbol(),
                output.formatted,
                direction.target().symbol()
            );
            BatchOutcome::success(output.formatted)
        }
        Err(e) => {
            log::info!("轉換失敗：{}", e);
            BatchOutcome::failure(format!("Error: {}", e))
        }
    }
}
