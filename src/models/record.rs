use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 销售流水记录 (账本中的一行明细)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub sku: String,          // 商品编码/SKU
    pub unit_price: BigDecimal,
    pub quantity: i64,        // 非负
    pub total_price: BigDecimal,
}

impl SalesRecord {
    /// 周期键: "月份 年份" 英文标签, 例如 "January 2024"
    /// 纯函数, 同一日期恒得同一周期键
    pub fn period_key(&self) -> String {
        self.date.format("%B %Y").to_string()
    }
}
