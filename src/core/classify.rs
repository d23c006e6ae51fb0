use crate::domain::model::Classification;

/// 以試除法判斷質數：從 2 試到 `sqrt(n)`（含）。
pub fn classify_number(n: i32) -> Classification {
    if n <= 1 {
        return Classification::Neither;
    }

    // i32 的完全平方數在 f64 下開根號是精確的，截斷即為 floor
    let bound = f64::from(n).sqrt() as i32;
    if (2..=bound).any(|i| n % i == 0) {
        Classification::Composite
    } else {
        Classification::Prime
    }
}
