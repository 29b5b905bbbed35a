use std::io;

use arboard::Clipboard;

use crate::service::traits::i_service::ClipboardServiceTrait;

/// 系統剪貼簿，每次複製時才開啟，沒有圖形環境時只影響複製指令
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        SystemClipboard
    }
}

impl ClipboardServiceTrait for SystemClipboard {
    fn copy_text(&self, text: &str) -> io::Result<()> {
        let mut clipboard = Clipboard::new()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("無法開啟剪貼簿: {}", e)))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("寫入剪貼簿失敗: {}", e)))?;
        log::info!("已複製到剪貼簿：{}", text);
        Ok(())
    }
}
