use crate::domain::model::TableRow;

/// 產生 `1..=limit` 的乘法表；`limit < 1` 時不產生任何列。
///
/// 乘積採用 `i32` 的 wrapping 乘法，不做溢位檢查。
pub fn multiplication_table(number: i32, limit: i32) -> impl Iterator<Item = TableRow> {
    (1..=limit).map(move |multiplier| TableRow {
        multiplier,
        number,
        product: multiplier.wrapping_mul(number),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_in_increasing_order() {
        let rows: Vec<TableRow> = multiplication_table(5, 3).collect();
        let lines: Vec<String> = rows.iter().map(|r| r.to_string()).collect();
        assert_eq!(lines, vec!["1 x 5 = 5", "2 x 5 = 10", "3 x 5 = 15"]);
    }

    #[test]
    fn test_row_count_matches_limit() {
        for limit in 0..=25 {
            let rows: Vec<TableRow> = multiplication_table(7, limit).collect();
            assert_eq!(rows.len(), limit as usize);
            for (idx, row) in rows.iter().enumerate() {
                let i = idx as i32 + 1;
                assert_eq!(row.multiplier, i);
                assert_eq!(row.product, i * 7);
            }
        }
    }

    #[test]
    fn test_zero_and_negative_limit_produce_nothing() {
        assert_eq!(multiplication_table(5, 0).count(), 0);
        assert_eq!(multiplication_table(5, -1).count(), 0);
        assert_eq!(multiplication_table(5, i32::MIN).count(), 0);
    }

    #[test]
    fn test_negative_and_zero_number() {
        let rows: Vec<i32> = multiplication_table(-4, 3).map(|r| r.product).collect();
        assert_eq!(rows, vec![-4, -8, -12]);

        assert!(multiplication_table(0, 4).all(|r| r.product == 0));
    }

    #[test]
    fn test_product_wraps_on_overflow() {
        let last = multiplication_table(i32::MAX, 2).last().unwrap();
        assert_eq!(last.product, i32::MAX.wrapping_mul(2));
        assert_eq!(last.product, -2);
    }

    #[test]
    fn test_large_limit_is_lazy() {
        let first: Vec<TableRow> = multiplication_table(3, i32::MAX).take(2).collect();
        assert_eq!(first.len(), 2);
        assert_eq!(first[1].product, 6);
    }
}
