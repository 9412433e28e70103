use bigdecimal::BigDecimal;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// 汇总报表 (聚合器与消费方之间的契约结构, JSON 键为 camelCase)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    pub total_sales: BigDecimal,
    /// 周期 -> 当期收入合计
    pub month_wise_sales: IndexMap<String, BigDecimal>,
    /// 周期 -> (SKU -> 累计数量)
    pub popular_items: IndexMap<String, IndexMap<String, i64>>,
    /// 周期 -> 最受欢迎商品及其订单量统计
    pub popular_item_stats: IndexMap<String, PopularItemStats>,
    /// 周期 -> (SKU -> 累计收入)
    pub revenue_items: IndexMap<String, IndexMap<String, BigDecimal>>,
    /// 周期 -> 创收最高商品
    pub top_revenue_items: IndexMap<String, RevenueLeader>,
}

/// 每周期最受欢迎商品的订单量统计
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularItemStats {
    pub most_popular_item: String,
    pub min_orders: i64,
    pub max_orders: i64,
    /// 内部保持全精度, 仅在序列化输出时舍入到两位小数
    #[serde(serialize_with = "round_two_places")]
    pub avg_orders: f64,
}

/// 每周期创收最高的商品及其收入
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueLeader {
    pub item: String,
    pub revenue: BigDecimal,
}

fn round_two_places<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64((value * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avg_orders_is_rounded_only_in_serialized_output() {
        let stats = PopularItemStats {
            most_popular_item: "A".to_string(),
            min_orders: 3,
            max_orders: 4,
            avg_orders: 10.0 / 3.0,
        };
        // 内存中的值保持全精度
        assert!(stats.avg_orders > 3.33);

        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["avgOrders"], serde_json::json!(3.33));
        assert_eq!(value["mostPopularItem"], "A");
        assert_eq!(value["minOrders"], 3);
        assert_eq!(value["maxOrders"], 4);
    }
}
