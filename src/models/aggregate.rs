use bigdecimal::BigDecimal;
use indexmap::IndexMap;

use crate::models::record::SalesRecord;
use crate::models::report::{PopularItemStats, RevenueLeader, SalesReport};

/// 单个周期(月份)的累计聚合
#[derive(Debug, Clone, Default)]
pub struct PeriodAggregate {
    pub period: String,
    pub total_revenue: BigDecimal,
    pub item_quantities: IndexMap<String, i64>,       // SKU -> 累计数量
    pub item_revenues: IndexMap<String, BigDecimal>,  // SKU -> 累计收入
    order_quantities: IndexMap<String, Vec<i64>>,     // SKU -> 每笔订单数量, 用于订单量统计
}

impl PeriodAggregate {
    pub fn new(period: String) -> Self {
        Self {
            period,
            ..Default::default()
        }
    }

    /// 将一条记录并入本周期
    pub fn absorb(&mut self, record: &SalesRecord) {
        self.total_revenue += record.total_price.clone();
        *self.item_quantities.entry(record.sku.clone()).or_default() += record.quantity;
        *self.item_revenues.entry(record.sku.clone()).or_default() += record.total_price.clone();
        self.order_quantities
            .entry(record.sku.clone())
            .or_default()
            .push(record.quantity);
    }

    /// 最受欢迎商品: 累计数量最大者; 数量相同时取字典序较小的 SKU
    /// (与记录顺序无关的确定性选择)
    pub fn most_popular_item(&self) -> Option<(&str, i64)> {
        self.item_quantities
            .iter()
            .max_by(|(sku_a, qty_a), (sku_b, qty_b)| {
                qty_a.cmp(qty_b).then_with(|| sku_b.cmp(sku_a))
            })
            .map(|(sku, qty)| (sku.as_str(), *qty))
    }

    /// 创收最高商品, 平手规则与 most_popular_item 一致
    pub fn top_revenue_item(&self) -> Option<(&str, &BigDecimal)> {
        self.item_revenues
            .iter()
            .max_by(|(sku_a, rev_a), (sku_b, rev_b)| {
                rev_a.cmp(rev_b).then_with(|| sku_b.cmp(sku_a))
            })
            .map(|(sku, rev)| (sku.as_str(), rev))
    }

    /// 某 SKU 在本周期内逐笔订单数量的 (min, max, avg)
    /// avg 为全精度算术平均, 两位小数只在序列化输出时再舍入
    pub fn order_stats(&self, sku: &str) -> Option<(i64, i64, f64)> {
        let orders = self.order_quantities.get(sku)?;
        let first = *orders.first()?;
        let mut min = first;
        let mut max = first;
        let mut sum = 0i64;
        for &qty in orders {
            min = min.min(qty);
            max = max.max(qty);
            sum += qty;
        }
        Some((min, max, sum as f64 / orders.len() as f64))
    }
}

/// 整本账的折叠累加器
/// 纯归约: absorb 按值接收并返回新的累加器, 聚合满足交换律和结合律,
/// 因此记录处理顺序不影响最终报表
#[derive(Debug, Clone, Default)]
pub struct LedgerAccumulator {
    pub total_sales: BigDecimal,
    pub periods: IndexMap<String, PeriodAggregate>,
}

impl LedgerAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 折叠一步: 全局总额与对应周期各自累加
    pub fn absorb(mut self, record: &SalesRecord) -> Self {
        self.total_sales += record.total_price.clone();
        let period = record.period_key();
        self.periods
            .entry(period.clone())
            .or_insert_with(|| PeriodAggregate::new(period))
            .absorb(record);
        self
    }

    /// 组装最终报表, 纯数据变换, 无 I/O 无错误路径
    pub fn into_report(self) -> SalesReport {
        let mut month_wise_sales = IndexMap::new();
        let mut popular_items = IndexMap::new();
        let mut popular_item_stats = IndexMap::new();
        let mut revenue_items = IndexMap::new();
        let mut top_revenue_items = IndexMap::new();

        for (period, aggregate) in self.periods {
            month_wise_sales.insert(period.clone(), aggregate.total_revenue.clone());

            // 周期内至少有一条记录, 数量表非空, 选取不会落空
            if let Some((winner, _)) = aggregate.most_popular_item() {
                if let Some((min_orders, max_orders, avg_orders)) = aggregate.order_stats(winner)
                {
                    popular_item_stats.insert(
                        period.clone(),
                        PopularItemStats {
                            most_popular_item: winner.to_string(),
                            min_orders,
                            max_orders,
                            avg_orders,
                        },
                    );
                }
            }

            if let Some((sku, revenue)) = aggregate.top_revenue_item() {
                top_revenue_items.insert(
                    period.clone(),
                    RevenueLeader {
                        item: sku.to_string(),
                        revenue: revenue.clone(),
                    },
                );
            }

            popular_items.insert(period.clone(), aggregate.item_quantities);
            revenue_items.insert(period, aggregate.item_revenues);
        }

        SalesReport {
            total_sales: self.total_sales,
            month_wise_sales,
            popular_items,
            popular_item_stats,
            revenue_items,
            top_revenue_items,
        }
    }
}
