use clap::Parser;

use crate::utils::utils::LOG_LEVELS;

pub const PROGRAM_NAME: &str = "in_mm_convert";

#[derive(Parser, Clone, Debug)]
#[command(
    name = PROGRAM_NAME,
    about = "英寸與毫米互相轉換",
    long_about = "將數值在英寸與毫米之間轉換，結果固定保留兩位小數。\n不帶任何參數啟動時進入互動模式。",
    disable_help_flag = true
)]
pub struct Cli {
    /// 要轉換的數值，允許負號開頭
    #[arg(allow_hyphen_values = true)]
    pub number: Option<String>,
    /// 來源單位：in、inch、" 或 mm、millimeter
    #[arg(allow_hyphen_values = true)]
    pub unit: Option<String>,
    #[arg(hide = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
    #[arg(long, default_value = "warn", value_parser = LOG_LEVELS)]
    pub log_level: String,
}

pub fn usage_line() -> String {
    format!("Usage: {} <number> <in|mm>", PROGRAM_NAME)
}
