use crate::purchase_order_item::domain::{Event, PurchaseOrderItem};

/// CompletionValuePolicy - Derives item values from deletion history
///
/// A purchase order item whose most recent deletion-related event is a
/// deletion has nothing left to deliver: its net value and completion value
/// are reported as zero. An undeletion after the deletion restores them.
pub struct CompletionValuePolicy;

impl CompletionValuePolicy {
    /// True when the event with the greatest business timestamp is a deletion.
    ///
    /// Events sharing the greatest timestamp resolve to the last one in
    /// `events` (`Iterator::max_by_key` semantics).
    pub fn is_deletion_latest(events: &[Event]) -> bool {
        events
            .iter()
            .max_by_key(|event| event.actual_business_timestamp)
            .is_some_and(Event::is_deletion)
    }

    /// Zeroes the item's values when deletion is the latest event.
    ///
    /// Returns whether the item was zeroed.
    pub fn apply(item: &mut PurchaseOrderItem, events: &[Event]) -> bool {
        if Self::is_deletion_latest(events) {
            item.zero_values();
            true
        } else {
            false
        }
    }
}
