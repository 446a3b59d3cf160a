//! Fixture payloads captured from the different backend endpoints.
//! Each endpoint spells the same fields differently; all of them must land
//! in the same canonical shape.

use serde_json::{Value, json};
use shared::models::{
    Asset, AssetTransaction, Booking, ExperienceSession, FollowUp, FollowUpColumn, Lead, LeadStatus,
    Member, Staff, TransactionType, Voucher, VoucherStatus,
};
use shared::{ListEnvelope, Normalize};

fn list(raw: Value) -> Vec<Value> {
    serde_json::from_value::<ListEnvelope<Value>>(raw)
        .expect("envelope is total")
        .into_vec()
}

#[test]
fn members_from_three_endpoint_styles() {
    let raw = list(json!({"data": [
        {"_id": "m1", "fullName": "Noor Saleh", "status": "Active", "membershipPlan": "Gold"},
        {"id": 2, "firstName": "Ali", "lastName": "Omar", "membershipStatus": "expired"},
        {"member_id": "m3", "memberName": "Rana", "is_active": 1}
    ]}));
    let members = Member::normalize_all(&raw);

    assert_eq!(members.len(), 3);
    assert_eq!(members[0].name, "Noor Saleh");
    assert!(members[0].is_active);
    assert_eq!(members[1].id, "2");
    assert_eq!(members[1].name, "Ali Omar");
    assert!(!members[1].is_active);
    assert_eq!(members[2].id, "m3");
    assert!(members[2].is_active);
}

#[test]
fn staff_from_trainers_endpoint() {
    let raw = list(json!([
        {"_id": "t1", "name": "Coach Rami", "designation": "Trainer", "salary": "AED 6,500",
         "allowance": 500, "otHours": 4, "overtimeRate": 40, "daysPresent": 26},
        {"id": "t2", "full_name": "Maya", "basic_salary": 4000}
    ]));
    let staff = Staff::normalize_all(&raw);

    assert_eq!(staff[0].role, "Trainer");
    assert_eq!(staff[0].base_salary, 6500.0);
    assert_eq!(staff[0].allowances, 500.0);
    assert_eq!(staff[0].overtime_hours, 4.0);
    assert_eq!(staff[0].ot_rate, 40.0);
    assert_eq!(staff[0].present_days, Some(26.0));
    assert_eq!(staff[1].name, "Maya");
    assert_eq!(staff[1].base_salary, 4000.0);
}

#[test]
fn assets_and_transactions_snake_and_camel() {
    let assets = Asset::normalize_all(&list(json!({"items": [
        {"id": 1, "name": "Rower", "cost": "AED 12,000", "currentValue": 9000,
         "condition": "Good", "warrantyExpiry": "2026-11-01"}
    ]})));
    assert_eq!(assets[0].cost, 12000.0);
    assert_eq!(assets[0].current_value, 9000.0);
    assert_eq!(assets[0].condition_desc, "Good");
    assert_eq!(assets[0].warranty_expiry.as_deref(), Some("2026-11-01"));

    let txs = AssetTransaction::normalize_all(&list(json!([
        {"_id": "x1", "asset_id": 1, "transaction_type": "Repair", "amount": "350", "status": "In-Review"}
    ])));
    assert_eq!(txs[0].asset_id.as_deref(), Some("1"));
    assert_eq!(txs[0].kind, TransactionType::Other("Repair".into()));
    assert_eq!(txs[0].value, 350.0);
    assert_eq!(txs[0].status, "In-Review");
}

#[test]
fn followups_leads_vouchers_feedback() {
    let f = FollowUp::normalize(&json!({"id": 1, "leadName": "Sami", "status": "Overdue - call back"}));
    assert_eq!(f.member_name, "Sami");
    assert_eq!(f.column, FollowUpColumn::Overdue);

    let l = Lead::normalize(&json!({"name": "Dana", "status": "Follow-up", "leadScore": 85}));
    assert_eq!(l.status, LeadStatus::FollowUp);
    assert_eq!(l.score, 85);

    let v = Voucher::normalize(&json!({"receiptNumber": "RV-1", "receivedFrom": "Walk-in", "total": "AED 300", "status": "PAID"}));
    assert_eq!(v.number.as_deref(), Some("RV-1"));
    assert_eq!(v.party, "Walk-in");
    assert_eq!(v.amount, 300.0);
    assert_eq!(v.status, VoucherStatus::Paid);

    let s = ExperienceSession::normalize(&json!({"trainerId": 7, "overall_rating": 4.5, "returnScore": "9"}));
    assert_eq!(s.staff_id.as_deref(), Some("7"));
    assert_eq!(s.rating, Some(4.5));
    assert_eq!(s.return_score, Some(9.0));

    let b = Booking::normalize(&json!({"trainer": {"id": 7, "name": "Rami"}}));
    assert_eq!(b.trainer_id.as_deref(), Some("7"));
    assert_eq!(b.trainer_name.as_deref(), Some("Rami"));
}

#[test]
fn garbage_never_panics() {
    for raw in [json!(null), json!(42), json!("x"), json!([1, 2]), json!({"id": {"nested": true}})] {
        let _ = Member::normalize(&raw);
        let _ = Staff::normalize(&raw);
        let _ = Asset::normalize(&raw);
        let _ = AssetTransaction::normalize(&raw);
        let _ = FollowUp::normalize(&raw);
        let _ = Lead::normalize(&raw);
        let _ = Voucher::normalize(&raw);
    }
}
