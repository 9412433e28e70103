use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use crate::models::SalesRecord;

/// 账本解析: 首行为表头(无条件忽略), 其余行按逗号切分为
/// `date,sku,unitPrice,quantity,totalPrice`
/// 字段不足 5 个或数值解析失败的行整行跳过, 不中断整次解析
/// 输出保持输入顺序
pub fn parse_ledger(raw: &str) -> Vec<SalesRecord> {
    raw.trim()
        .lines()
        .skip(1)
        .filter_map(|line| {
            if line.trim().is_empty() {
                return None;
            }
            match parse_row(line) {
                Some(record) => Some(record),
                None => {
                    tracing::warn!("Skipping malformed row: {}", line);
                    None
                }
            }
        })
        .collect()
}

/// 单行解析; 日期须为 YYYY-MM-DD, 数量须为非负整数
fn parse_row(line: &str) -> Option<SalesRecord> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 5 {
        return None;
    }

    let date = NaiveDate::parse_from_str(fields[0].trim(), "%Y-%m-%d").ok()?;
    let unit_price: BigDecimal = fields[2].trim().parse().ok()?;
    let quantity: i64 = fields[3].trim().parse().ok().filter(|qty| *qty >= 0)?;
    let total_price: BigDecimal = fields[4].trim().parse().ok()?;

    Some(SalesRecord {
        date,
        sku: fields[1].trim().to_string(),
        unit_price,
        quantity,
        total_price,
    })
}
