use crate::purchase_order_item::domain::{InboundDeliveryItem, PurchaseOrderItem};

/// IdentifierNormalizer - Strips ERP zero padding from document numbers
///
/// The backend stores numbers as fixed-width strings (`0004500000123`);
/// the UI shows them without padding.
pub struct IdentifierNormalizer;

impl IdentifierNormalizer {
    /// Normalizes the item and all of its nested inbound delivery items.
    pub fn normalize_purchase_order_item(item: &mut PurchaseOrderItem) {
        strip_leading_zeros(&mut item.purchase_order_no);
        strip_leading_zeros(&mut item.material_id);
        strip_leading_zeros(&mut item.item_no);
        strip_leading_zeros(&mut item.supplier_id);

        for delivery_item in item.inbound_delivery_items_mut() {
            Self::normalize_inbound_delivery_item(delivery_item);
        }
    }

    pub fn normalize_purchase_order_items(items: &mut [PurchaseOrderItem]) {
        items
            .iter_mut()
            .for_each(Self::normalize_purchase_order_item);
    }

    pub fn normalize_inbound_delivery_item(item: &mut InboundDeliveryItem) {
        strip_leading_zeros(&mut item.inbound_delivery_no);
        strip_leading_zeros(&mut item.item_no);
        strip_leading_zeros(&mut item.material_id);
    }
}

/// Blank values are left alone; all-zero values end up empty.
fn strip_leading_zeros(field: &mut Option<String>) {
    let Some(value) = field.as_mut() else {
        return;
    };
    if value.trim().is_empty() {
        return;
    }
    let stripped = value.trim_start_matches('0');
    if stripped.len() != value.len() {
        *value = stripped.to_string();
    }
}
