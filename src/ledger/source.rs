use std::path::PathBuf;

/// 账本数据源: 聚合开始前一次性读入整个 CSV 文件
/// 不做流式/分页读取; 读取失败由调用方处理
pub struct FileLedgerSource {
    path: PathBuf,
}

impl FileLedgerSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 读取整本账文本
    pub async fn read_all(&self) -> std::io::Result<String> {
        tokio::fs::read_to_string(&self.path).await
    }
}
