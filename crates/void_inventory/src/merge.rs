//! Clamped quantity arithmetic shared by every stack operation

use crate::StackSize;

/// Result of [`merge_count`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeCount {
    /// Whether `resulting_amount` differs from the input `current`
    pub changed: bool,
    /// `current + amount_to_add` clamped to `0..=maximum_capacity`
    pub resulting_amount: StackSize,
    /// What did not fit: positive on overflow, negative on a removal
    /// larger than `current`
    pub remainder: i64,
}

impl MergeCount {
    /// Units left over after an addition, as a stack quantity.
    ///
    /// Zero when the remainder is negative. In an addition the remainder
    /// never exceeds the amount added, so it always fits when that amount
    /// was itself a stack quantity.
    pub fn overflow(&self) -> StackSize {
        StackSize::try_from(self.remainder.max(0)).unwrap_or(StackSize::MAX)
    }

    /// Units a removal could not take, as a positive count
    pub fn shortfall(&self) -> i64 {
        (-self.remainder).max(0)
    }
}

/// Add a signed `amount_to_add` to `current`, clamping to
/// `0..=maximum_capacity` and reporting the remainder.
///
/// Requires `current <= maximum_capacity`. Total over that precondition:
/// the sum is computed in `i64`, so no `i32` delta can overflow it.
pub fn merge_count(
    current: StackSize,
    amount_to_add: i32,
    maximum_capacity: StackSize,
) -> MergeCount {
    debug_assert!(
        current <= maximum_capacity,
        "current amount {} exceeds capacity {}",
        current,
        maximum_capacity
    );

    let sum = i64::from(current) + i64::from(amount_to_add);
    let clamped = sum.clamp(0, i64::from(maximum_capacity));
    // `clamped` lies in 0..=maximum_capacity, which is a StackSize range
    let resulting_amount = clamped as StackSize;

    MergeCount {
        changed: resulting_amount != current,
        resulting_amount,
        remainder: sum - clamped,
    }
}
