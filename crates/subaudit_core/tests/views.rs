use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;
use subaudit_core::{
    BillingCycle, Category, CategorySummary, Subscription, SubscriptionStatus, SubscriptionView,
};
use uuid::Uuid;

fn netflix(category: &Category) -> Subscription {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut sub = Subscription::with_id(id, "Netflix", dec!(15.99), BillingCycle::Monthly);
    sub.next_billing_date = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
    sub.start_date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    sub.category_id = Some(category.id);
    sub.notes = Some("Premium plan".to_string());
    sub
}

#[test]
fn subscription_view_maps_every_field() {
    let category = Category::new("Entertainment");
    let sub = netflix(&category);

    let view = SubscriptionView::from_subscription(&sub, Some(&category));

    assert_eq!(view.id, sub.id);
    assert_eq!(view.service_name, "Netflix");
    assert_eq!(view.cost, dec!(15.99));
    assert_eq!(view.billing_cycle, BillingCycle::Monthly);
    assert_eq!(view.next_billing_date, sub.next_billing_date);
    assert_eq!(view.status, SubscriptionStatus::Active);
    assert_eq!(view.start_date, sub.start_date);
    assert_eq!(view.cancellation_date, None);
    assert_eq!(view.category_id, Some(category.id));
    assert_eq!(view.category_name.as_deref(), Some("Entertainment"));
    assert_eq!(view.notes.as_deref(), Some("Premium plan"));
    assert_eq!(view.monthly_cost, dec!(15.99));
    assert_eq!(view.annual_cost, sub.annual_cost());
}

#[test]
fn subscription_view_without_category_has_no_name() {
    let category = Category::new("Entertainment");
    let sub = netflix(&category);

    let view = SubscriptionView::from_subscription(&sub, None);

    assert_eq!(view.category_id, Some(category.id));
    assert_eq!(view.category_name, None);
}

#[test]
fn subscription_serialization_uses_expected_wire_fields() {
    let category = Category::new("Entertainment");
    let mut sub = netflix(&category);
    sub.status = SubscriptionStatus::Paused;
    sub.billing_cycle = BillingCycle::Quarterly;

    let json = serde_json::to_value(&sub).unwrap();
    assert_eq!(json["id"], "11111111-2222-4333-8444-555555555555");
    assert_eq!(json["service_name"], "Netflix");
    assert_eq!(json["cost"], "15.99");
    assert_eq!(json["billing_cycle"], "quarterly");
    assert_eq!(json["status"], "paused");
    assert_eq!(json["cancellation_date"], serde_json::Value::Null);
    assert_eq!(json["category_id"], category.id.to_string());

    let decoded: Subscription = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, sub);
}

#[test]
fn category_summary_serializes_totals_as_strings() {
    let mut category = Category::new("Entertainment");
    let member = netflix(&category);
    category.subscriptions.push(member);

    let json = serde_json::to_value(CategorySummary::from_category(&category)).unwrap();

    assert_eq!(json["name"], "Entertainment");
    assert_eq!(json["total_monthly_cost"], "15.99");
    assert_eq!(json["total_annual_cost"], "191.88");
    assert_eq!(json["subscription_count"], 1);
    assert_eq!(json["active_subscription_count"], 1);
}
