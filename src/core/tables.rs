/// Yearly child-rearing cost from age 0 through 22, in units of 10,000.
pub const CHILD_GROWING_COST: [f64; 23] = [
    93.0, 88.0, 94.0, 104.0, 120.0, 116.0, 121.0, 111.0, 106.0, 113.0, 115.0, 124.0, 127.0, 153.0,
    153.0, 161.0, 140.0, 140.0, 140.0, 100.0, 100.0, 100.0, 100.0,
];

/// Extra yearly cost of private schooling from age 0 through 22, in units of
/// 10,000.
pub const ADDON_PRIVATE_SCHOOL_COST: [f64; 23] = [
    0.0, 30.0, 30.0, 30.0, 30.0, 30.0, 30.0, 120.0, 120.0, 120.0, 120.0, 120.0, 120.0, 100.0,
    100.0, 100.0, 160.0, 160.0, 160.0, 100.0, 100.0, 100.0, 100.0,
];

/// Sum of a yearly table converted to base currency.
pub fn lifetime_total(table: &[f64]) -> f64 {
    table.iter().map(|item| item * 10_000.0).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_cover_ages_zero_through_twenty_two() {
        assert_eq!(CHILD_GROWING_COST.len(), 23);
        assert_eq!(ADDON_PRIVATE_SCHOOL_COST.len(), 23);
    }

    #[test]
    fn lifetime_totals_match_table_sums() {
        assert_eq!(lifetime_total(&CHILD_GROWING_COST), 27_190_000.0);
        assert_eq!(lifetime_total(&ADDON_PRIVATE_SCHOOL_COST), 20_800_000.0);
    }

    #[test]
    fn private_school_addon_is_free_before_kindergarten() {
        assert_eq!(ADDON_PRIVATE_SCHOOL_COST[0], 0.0);
        assert!(ADDON_PRIVATE_SCHOOL_COST[1..].iter().all(|cost| *cost > 0.0));
    }
}
