use dialoguer::Input;
use std::io;
use std::process::ExitCode;

use crate::models::conversion::{ConversionRequest, ConversionResult, Direction};
use crate::service::clipboard::SystemClipboard;
use crate::service::converter::ConversionService;
use crate::service::traits::i_service::{ClipboardServiceTrait, ConverterServiceTrait};
use crate::utils::utils::setup_logging;

pub const INVALID_NUMBER_MESSAGE: &str = "請輸入有效數字";
pub const ERROR_DISPLAY: &str = "Error";

/// 使用者輸入一行後要執行的動作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Toggle,
    Copy,
    Quit,
    Input,
}

impl Command {
    pub fn from_line(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "t" | "toggle" => Command::Toggle,
            "c" | "copy" => Command::Copy,
            "q" | "quit" | "exit" => Command::Quit,
            _ => Command::Input,
        }
    }
}

// 互動模式的狀態，由會話迴圈持有
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractiveState {
    pub direction: Direction,
    pub raw_input: String,
}

impl InteractiveState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 處理一行輸入並回傳對應的指令
    pub fn submit(&mut self, line: &str) -> Command {
        let command = Command::from_line(line);
        match command {
            Command::Toggle => {
                self.direction = self.direction.toggled();
                log::debug!("切換方向：{:?}", self.direction);
            }
            Command::Input => self.raw_input = line.to_string(),
            Command::Copy | Command::Quit => {}
        }
        command
    }

    pub fn request(&self) -> ConversionRequest {
        ConversionRequest::new(self.raw_input.clone(), self.direction)
    }

    pub fn header(&self) -> String {
        format!(
            "{}  ➜  {}",
            self.direction.source().label(),
            self.direction.target().label()
        )
    }

    pub fn render(&self, result: &ConversionResult) -> String {
        match result {
            Ok(output) => format!("{} {}", output.formatted, self.direction.target().label()),
            Err(_) => format!("{}  {}", ERROR_DISPLAY, INVALID_NUMBER_MESSAGE),
        }
    }
}

/// 錯誤結果不複製，回傳 None
pub fn copy_result(
    clipboard: &dyn ClipboardServiceTrait,
    result: &ConversionResult,
) -> io::Result<Option<String>> {
    match result {
        Ok(output) => {
            clipboard.copy_text(&output.formatted)?;
            Ok(Some(output.formatted.clone()))
        }
        Err(_) => Ok(None),
    }
}

pub fn process_interactive_mode() -> io::Result<ExitCode> {
    setup_logging(&get_log_level_option()?)?;
    println!("=== 英寸 / 毫米 轉換 ===");
    println!("輸入數值後按 Enter 轉換；輸入 t 切換方向，c 複製結果，q 離開");

    let service = ConversionService::new();
    let clipboard = SystemClipboard::new();
    let mut state = InteractiveState::new();
    loop {
        let line = get_input_line(&state)?;
        let command = state.submit(&line);
        let result = service.convert(&state.request());
        match command {
            Command::Quit => break,
            Command::Copy => match copy_result(&clipboard, &result) {
                Ok(Some(text)) => println!("✓ 已複製 {}", text),
                Ok(None) => println!("{}", state.render(&result)),
                Err(e) => {
                    log::warn!("{}", e);
                    println!("複製失敗：{}", e);
                }
            },
            Command::Toggle | Command::Input => println!("{}", state.render(&result)),
        }
    }
    Ok(ExitCode::SUCCESS)
}

pub fn get_input_line(state: &InteractiveState) -> io::Result<String> {
    Input::<String>::new()
        .with_prompt(state.header())
        .allow_empty(true)
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("輸入讀取失敗: {}", e)))
}

pub fn get_log_level_option() -> io::Result<String> {
    Ok("warn".to_string())
}
