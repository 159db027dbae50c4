//! Integration tests for the kitchen session command flow.
//!
//! These tests verify the end-to-end loop the rendering layer drives:
//! 1. Commands mutate the session (orders, staffing, clear)
//! 2. Each mutation re-runs the rule-table estimate
//! 3. Changes surface once as notifications and dedup into the log
//! 4. The summarizer receives the recent log window and failures
//!    degrade to the previous summary
//!
//! Uses the mock summarizer so no external API is involved.

use std::sync::{Arc, Mutex};

use prep_pilot::adapters::MockSummarizer;
use prep_pilot::application::{
    AddOrdersCommand, AddOrdersHandler, ClearOrdersHandler, CompleteOrderCommand,
    CompleteOrderHandler, GetKitchenViewHandler, KitchenSession, RequestSummaryHandler,
    SetStaffingCommand, SetStaffingHandler, SharedSession,
};
use prep_pilot::config::KitchenConfig;
use prep_pilot::domain::order::OrderSource;
use prep_pilot::domain::prep::ChangeDirection;
use prep_pilot::ports::SummaryError;

fn shared_session() -> SharedSession {
    prep_pilot::telemetry::init_test();
    Arc::new(Mutex::new(
        KitchenSession::new(&KitchenConfig::default()).unwrap(),
    ))
}

#[test]
fn dinner_rush_drives_the_estimate_up_and_back_down() {
    let session = shared_session();
    let config = KitchenConfig::default();
    let add = AddOrdersHandler::new(session.clone());
    let staffing = SetStaffingHandler::new(session.clone());
    let view = GetKitchenViewHandler::new(session.clone(), &config);

    // Quiet kitchen.
    let frame = view.handle();
    assert_eq!(frame.prep_minutes, 35);
    assert!(frame.pending_change.is_none());

    // Rush begins: 20 orders across two channels.
    add.handle(AddOrdersCommand {
        source: OrderSource::DineIn,
        count: 10,
        item_count: None,
    })
    .unwrap();
    add.handle(AddOrdersCommand {
        source: OrderSource::UberEats,
        count: 10,
        item_count: None,
    })
    .unwrap();

    let frame = view.handle();
    assert_eq!(frame.active_count, 20);
    assert_eq!(frame.prep_minutes, 45);
    let change = frame.pending_change.unwrap();
    assert_eq!(change.direction, ChangeDirection::Increase);
    assert_eq!(change.delta_minutes, 10);

    // Half the crew leaves.
    staffing.handle(SetStaffingCommand { percent: 50 }).unwrap();
    let frame = view.handle();
    assert_eq!(frame.prep_minutes, 50);

    // Reinforcements arrive.
    staffing.handle(SetStaffingCommand { percent: 125 }).unwrap();
    let frame = view.handle();
    assert_eq!(frame.prep_minutes, 43);
    let change = frame.pending_change.unwrap();
    assert_eq!(change.direction, ChangeDirection::Decrease);
    assert_eq!(change.delta_minutes, -7);

    // Rush ends.
    ClearOrdersHandler::new(session).handle();
    let frame = view.handle();
    assert_eq!(frame.active_count, 0);
    assert_eq!(frame.prep_minutes, 35);
}

#[test]
fn completing_orders_moves_them_into_the_bounded_history() {
    let session = shared_session();
    let config = KitchenConfig::default();
    let created = AddOrdersHandler::new(session.clone())
        .handle(AddOrdersCommand {
            source: OrderSource::Online,
            count: 8,
            item_count: None,
        })
        .unwrap()
        .created;
    let complete = CompleteOrderHandler::new(session.clone());

    for order in &created {
        let result = complete.handle(CompleteOrderCommand {
            order_id: order.id(),
        });
        assert!(result.completed.is_some());
    }
    // A second pass over the same ids is a pure no-op.
    for order in &created {
        let result = complete.handle(CompleteOrderCommand {
            order_id: order.id(),
        });
        assert!(result.completed.is_none());
    }

    let frame = GetKitchenViewHandler::new(session, &config).handle();
    assert_eq!(frame.active_count, 0);
    assert_eq!(frame.completed_orders.len(), config.completed_window);
    assert_eq!(
        frame.completed_orders[0].ticket,
        created[7].id().ticket()
    );
}

#[test]
fn log_records_each_distinct_estimate_once() {
    let session = shared_session();
    let add = AddOrdersHandler::new(session.clone());

    // Three batches below the first tier, then one across it.
    for _ in 0..3 {
        add.handle(AddOrdersCommand {
            source: OrderSource::DineIn,
            count: 4,
            item_count: None,
        })
        .unwrap();
    }
    add.handle(AddOrdersCommand {
        source: OrderSource::DineIn,
        count: 4,
        item_count: None,
    })
    .unwrap();

    let guard = session.lock().unwrap();
    // Opening 35 plus the single move to 45 at 16 active orders.
    assert_eq!(guard.log().len(), 2);
    assert_eq!(guard.log().last().unwrap().final_minutes, 45);
}

#[tokio::test]
async fn summary_flow_survives_provider_outages() {
    let session = shared_session();
    let config = KitchenConfig::default();
    AddOrdersHandler::new(session.clone())
        .handle(AddOrdersCommand {
            source: OrderSource::DoorDash,
            count: 20,
            item_count: None,
        })
        .unwrap();

    let mock = Arc::new(
        MockSummarizer::new()
            .with_summary("Prep time rose to 45 minutes with the delivery rush.")
            .with_error(SummaryError::unavailable("connection refused")),
    );
    let summarize =
        RequestSummaryHandler::new(session.clone(), mock.clone(), config.summary_window);

    let first = summarize.handle().await.unwrap();
    assert_eq!(first.decisions_summarized, 2);

    // The outage surfaces as an error but the view keeps the old text.
    let second = summarize.handle().await;
    assert!(second.is_err());

    let frame = GetKitchenViewHandler::new(session, &config).handle();
    assert_eq!(
        frame.summary.as_deref(),
        Some("Prep time rose to 45 minutes with the delivery rush.")
    );
    assert_eq!(mock.call_count(), 2);
}
