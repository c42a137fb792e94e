//! End-to-end planner sessions through the public API

use std::sync::Arc;

use rust_decimal_macros::dec;
use tempfile::TempDir;
use trip_planner::pricing::{Destination, HotelType, TripField};
use trip_planner::{
    FileStore, KeyValueStore, MemoryStore, PlannerConfig, TripDraft, TripPlanner, WorkflowState,
};

#[test]
fn booking_session_from_empty_form_to_preview() {
    let mut planner = TripPlanner::new(MemoryStore::new());
    assert!(!planner.view().can_generate);

    planner.set_destination(Destination::Jaipur);
    planner.set_days(10);
    planner.set_travelers(5);
    planner.set_hotel_type(HotelType::Luxury);

    let view = planner.view();
    assert!(view.is_valid);
    assert!(view.can_generate);
    let breakdown = view.breakdown.expect("priced draft");
    assert_eq!(breakdown.base_price, dec!(20000));
    assert_eq!(breakdown.group_discount, dec!(4000));
    assert_eq!(breakdown.extended_stay_discount, dec!(2000));
    assert_eq!(breakdown.final_price, dec!(34000));

    let summary = planner.price_summary().expect("summary");
    assert_eq!(summary.savings.as_deref(), Some("You save ₹6,000"));

    planner.generate();
    assert_eq!(planner.workflow_state(), WorkflowState::SummaryVisible);
    let preview = planner.booking_preview().expect("preview");
    assert_eq!(preview.total_cost.formatted, "₹34,000");
    assert!(preview.message.contains("luxury stay"));
    assert!(preview.message.contains("unhurried pace"));
    assert!(preview.message.contains("larger group"));

    planner.close_summary();
    assert!(planner.booking_preview().is_none());
}

#[test]
fn draft_survives_a_new_session() {
    let store = Arc::new(MemoryStore::new());

    {
        let mut planner = TripPlanner::new(Arc::clone(&store));
        planner.set_destination(Destination::Manali);
        planner.set_travelers(4);
    }

    let planner = TripPlanner::new(Arc::clone(&store));
    assert_eq!(planner.destination(), Some(Destination::Manali));
    assert_eq!(planner.travelers(), 4);
    assert_eq!(planner.days(), 3);
    assert_eq!(planner.hotel_type(), None);
    assert_eq!(
        planner.errors().get(&TripField::Hotel).map(String::as_str),
        Some("Please select a hotel type")
    );
    assert_eq!(planner.workflow_state(), WorkflowState::Editing);
}

#[test]
fn partially_corrupt_snapshot_keeps_good_fields() {
    let store = MemoryStore::new();
    store
        .set(
            "plumtrips_config",
            r#"{"selectedDestination":42,"numberOfDays":8,"numberOfTravelers":"lots","hotelType":"Luxury"}"#,
        )
        .unwrap();

    let planner = TripPlanner::new(&store);
    assert_eq!(
        *planner.draft(),
        TripDraft {
            destination: None,
            days: 8,
            travelers: 2,
            hotel_type: Some(HotelType::Luxury),
        }
    );
    assert!(planner.breakdown().is_none());
}

#[test]
fn reset_clears_file_backed_draft() {
    let temp_dir = TempDir::new().unwrap();
    let config = PlannerConfig {
        storage_dir: Some(temp_dir.path().to_path_buf()),
        ..PlannerConfig::default()
    };
    let store = FileStore::open(temp_dir.path()).unwrap();

    let mut planner = TripPlanner::with_config(store.clone(), &config);
    planner.set_destination(Destination::Goa);
    planner.set_hotel_type(HotelType::Budget);
    assert!(store.get(&config.storage_key).unwrap().is_some());

    let reopened = TripPlanner::with_config(store.clone(), &config);
    assert_eq!(reopened.breakdown().map(|b| b.final_price), Some(dec!(9000)));

    planner.reset();
    assert!(store.get(&config.storage_key).unwrap().is_none());

    let fresh = TripPlanner::with_config(store, &config);
    assert_eq!(*fresh.draft(), TripDraft::default());
}
