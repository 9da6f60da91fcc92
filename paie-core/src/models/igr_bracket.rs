use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slice of the progressive IGR schedule.
///
/// `upper_limit` is the annual taxable income ceiling of the bracket in MAD;
/// `None` marks the final, unbounded bracket. `rate` is the marginal rate as
/// a fraction (`0.34` means 34 %). A schedule is an ordered sequence of
/// brackets with strictly increasing limits ending in the unbounded one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgrBracket {
    pub upper_limit: Option<Decimal>,
    pub rate: Decimal,
}
