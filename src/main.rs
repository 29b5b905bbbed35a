use std::process::ExitCode;

use in_mm_convert::action::cli::process_args;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    match process_args(args) {
        Ok(code) => code,
        Err(e) => {
            log::error!("程式執行失敗：{}", e);
            eprintln!("執行失敗：{}", e);
            ExitCode::FAILURE
        }
    }
}
