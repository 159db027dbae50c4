//! Application layer - session state, commands, and handlers.
//!
//! Command handlers mutate the kitchen session and re-run the prep-time
//! estimate; the view query exposes read models to the rendering layer.

pub mod handlers;
pub mod session;
pub mod view;

pub use handlers::{
    AddOrdersCommand, AddOrdersHandler, AddOrdersResult, ClearOrdersHandler, ClearOrdersResult,
    CompleteOrderCommand, CompleteOrderHandler, CompleteOrderResult, GetKitchenViewHandler,
    RequestSummaryHandler, RequestSummaryResult, SetStaffingCommand, SetStaffingHandler,
    SetStaffingResult,
};
pub use session::{KitchenSession, SharedSession};
pub use view::{KitchenView, OrderCard};
