use std::io;

use crate::models::conversion::{ConversionRequest, ConversionResult};

// 轉換服務接口，供 CLI 與互動模式共用
pub trait ConverterServiceTrait: Send + Sync {
    /// 依請求中的方向轉換輸入文字
    /// # 參數
    /// - request: 原始輸入與轉換方向
    /// # 回傳
    /// - 成功時返回數值與兩位小數的字串，失敗時返回 InvalidNumber
    fn convert(&self, request: &ConversionRequest) -> ConversionResult;
}

// 剪貼簿接口，互動模式複製結果用
pub trait ClipboardServiceTrait {
    /// 將文字放上系統剪貼簿
    fn copy_text(&self, text: &str) -> io::Result<()>;
}
