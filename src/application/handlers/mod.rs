//! Application handlers.
//!
//! One command per file, in the rendering layer's vocabulary: add
//! orders, complete an order, set staffing, clear the queue, request a
//! summary, and the view query. Mutation handlers finish with the
//! session's explicit recompute step.

pub mod add_orders;
pub mod clear_orders;
pub mod complete_order;
pub mod get_kitchen_view;
pub mod request_summary;
pub mod set_staffing;

pub use add_orders::{AddOrdersCommand, AddOrdersHandler, AddOrdersResult};
pub use clear_orders::{ClearOrdersHandler, ClearOrdersResult};
pub use complete_order::{CompleteOrderCommand, CompleteOrderHandler, CompleteOrderResult};
pub use get_kitchen_view::GetKitchenViewHandler;
pub use request_summary::{RequestSummaryHandler, RequestSummaryResult};
pub use set_staffing::{SetStaffingCommand, SetStaffingHandler, SetStaffingResult};
