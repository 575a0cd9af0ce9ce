// Adapters layer: concrete implementations for external systems (workbook, outbox).

pub mod outbox;
pub mod xlsx;
