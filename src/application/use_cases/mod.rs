/// Use cases module containing application business logic orchestration
mod read_purchase_order_items;

pub use read_purchase_order_items::ReadPurchaseOrderItemsUseCase;
