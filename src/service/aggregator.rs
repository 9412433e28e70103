use thiserror::Error;
use tracing::info;

use crate::ledger::FileLedgerSource;
use crate::models::{LedgerAccumulator, SalesRecord, SalesReport};
use crate::service::parser;

/// 报表生成错误
/// 只有账本数据源整体不可用才向调用方冒泡; 行级脏数据在解析阶段就地跳过
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("ledger source unavailable: {0}")]
    SourceUnavailable(#[from] std::io::Error),
}

/// 销售聚合服务
/// 每次请求从头折叠整本账快照, 请求之间不共享任何可变状态
pub struct SalesAggregator {
    source: FileLedgerSource,
}

impl SalesAggregator {
    pub fn new(source: FileLedgerSource) -> Self {
        Self { source }
    }

    /// 读账本 -> 解析 -> 折叠 -> 组装报表
    pub async fn generate_report(&self) -> Result<SalesReport, ReportError> {
        let raw = self.source.read_all().await?;
        let records = parser::parse_ledger(&raw);
        info!("账本解析完成: {} 条有效记录", records.len());
        Ok(build_report(&records))
    }
}

/// 纯归约: 记录集的任意排列得到相同的报表
pub fn build_report(records: &[SalesRecord]) -> SalesReport {
    records
        .iter()
        .fold(LedgerAccumulator::new(), |accumulator, record| {
            accumulator.absorb(record)
        })
        .into_report()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;

    fn record(date: &str, sku: &str, unit: i64, quantity: i64, total: i64) -> SalesRecord {
        SalesRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            sku: sku.to_string(),
            unit_price: BigDecimal::from(unit),
            quantity,
            total_price: BigDecimal::from(total),
        }
    }

    #[test]
    fn winner_and_revenue_breakdown_for_single_month() {
        let records = vec![
            record("2024-01-05", "A", 10, 2, 20),
            record("2024-01-20", "B", 5, 10, 50),
        ];
        let report = build_report(&records);

        assert_eq!(report.total_sales, BigDecimal::from(70));
        assert_eq!(
            report.month_wise_sales["January 2024"],
            BigDecimal::from(70)
        );

        let stats = &report.popular_item_stats["January 2024"];
        assert_eq!(stats.most_popular_item, "B");
        assert_eq!(stats.min_orders, 10);
        assert_eq!(stats.max_orders, 10);
        assert_eq!(stats.avg_orders, 10.0);

        let january = &report.revenue_items["January 2024"];
        assert_eq!(january["A"], BigDecimal::from(20));
        assert_eq!(january["B"], BigDecimal::from(50));

        let leader = &report.top_revenue_items["January 2024"];
        assert_eq!(leader.item, "B");
        assert_eq!(leader.revenue, BigDecimal::from(50));
    }

    #[test]
    fn total_sales_equals_sum_of_all_rows() {
        let records = vec![
            record("2024-01-05", "A", 10, 2, 20),
            record("2024-02-10", "B", 5, 4, 20),
            record("2024-03-15", "C", 3, 1, 3),
        ];
        let report = build_report(&records);
        assert_eq!(report.total_sales, BigDecimal::from(43));
    }

    #[test]
    fn month_wise_revenue_matches_per_period_sum() {
        let records = vec![
            record("2024-01-05", "A", 10, 2, 20),
            record("2024-01-20", "B", 5, 10, 50),
            record("2024-02-02", "A", 10, 1, 10),
        ];
        let report = build_report(&records);
        assert_eq!(report.month_wise_sales.len(), 2);
        assert_eq!(
            report.month_wise_sales["January 2024"],
            BigDecimal::from(70)
        );
        assert_eq!(
            report.month_wise_sales["February 2024"],
            BigDecimal::from(10)
        );
    }

    #[test]
    fn report_is_identical_for_any_record_permutation() {
        let records = vec![
            record("2024-01-05", "A", 10, 2, 20),
            record("2024-01-20", "B", 5, 10, 50),
            record("2024-02-02", "A", 10, 1, 10),
            record("2024-02-14", "C", 4, 6, 24),
            record("2024-01-28", "B", 5, 3, 15),
        ];
        let baseline = build_report(&records);

        let mut reversed = records.clone();
        reversed.reverse();
        assert_eq!(baseline, build_report(&reversed));

        let rotated: Vec<_> = records[2..]
            .iter()
            .chain(records[..2].iter())
            .cloned()
            .collect();
        assert_eq!(baseline, build_report(&rotated));
    }

    #[test]
    fn tied_quantities_resolve_to_lexicographically_smallest_sku() {
        let records = vec![
            record("2024-01-05", "ZZZ", 10, 5, 50),
            record("2024-01-20", "AAA", 10, 5, 50),
        ];
        let report = build_report(&records);
        assert_eq!(
            report.popular_item_stats["January 2024"].most_popular_item,
            "AAA"
        );

        let mut reordered = records;
        reordered.reverse();
        let report = build_report(&reordered);
        assert_eq!(
            report.popular_item_stats["January 2024"].most_popular_item,
            "AAA"
        );
    }

    #[test]
    fn stats_cover_winning_sku_rows_within_period() {
        // B 胜出(累计 10 > 1), 统计只看 B 在本周期的逐笔数量 3/7
        let records = vec![
            record("2024-01-05", "A", 10, 1, 10),
            record("2024-01-10", "B", 5, 3, 15),
            record("2024-01-20", "B", 5, 7, 35),
        ];
        let report = build_report(&records);
        let stats = &report.popular_item_stats["January 2024"];
        assert_eq!(stats.most_popular_item, "B");
        assert_eq!(stats.min_orders, 3);
        assert_eq!(stats.max_orders, 7);
        assert_eq!(stats.avg_orders, 5.0);
    }

    #[test]
    fn min_avg_max_ordering_holds_for_every_period() {
        let records = vec![
            record("2024-01-05", "A", 10, 2, 20),
            record("2024-01-10", "A", 10, 9, 90),
            record("2024-02-02", "B", 5, 4, 20),
            record("2024-02-20", "B", 5, 4, 20),
            record("2024-03-15", "C", 3, 1, 3),
        ];
        let report = build_report(&records);
        assert_eq!(report.popular_item_stats.len(), 3);
        for stats in report.popular_item_stats.values() {
            assert!(stats.min_orders as f64 <= stats.avg_orders);
            assert!(stats.avg_orders <= stats.max_orders as f64);
        }
    }

    #[test]
    fn empty_record_set_yields_zero_report() {
        let report = build_report(&[]);
        assert_eq!(report.total_sales, BigDecimal::from(0));
        assert!(report.month_wise_sales.is_empty());
        assert!(report.popular_items.is_empty());
        assert!(report.popular_item_stats.is_empty());
        assert!(report.revenue_items.is_empty());
        assert!(report.top_revenue_items.is_empty());
    }

    #[test]
    fn popular_items_keeps_per_sku_quantities() {
        let records = vec![
            record("2024-01-05", "A", 10, 2, 20),
            record("2024-01-20", "A", 10, 3, 30),
            record("2024-01-20", "B", 5, 10, 50),
        ];
        let report = build_report(&records);
        let january = &report.popular_items["January 2024"];
        assert_eq!(january["A"], 5);
        assert_eq!(january["B"], 10);
    }
}
