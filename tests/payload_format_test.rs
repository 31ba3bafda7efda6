//! Integration tests for payload assembly and the wire vocabulary

use chrono::{TimeZone, Utc};
use meridian::core::payload::assemble;
use meridian::domain::milestone::{FeeAmounts, LineItemRecord, MilestoneGraph, MilestoneRecord};
use meridian::domain::order::OrderRecord;
use meridian::domain::{LineItemId, MilestoneId, OrderId};

fn order_with_all_optionals_absent() -> OrderRecord {
    OrderRecord {
        id: OrderId::new("O1").unwrap(),
        record_type: None,
        status: None,
        order_number: None,
        customer_external_id: None,
        corporate_external_id: None,
        company_email: None,
        subsidiary: None,
        effective_date: None,
        start_date: None,
        end_date: None,
        joining_date: None,
        academic_year: None,
        location: None,
        centre_code: None,
        primary_parent: None,
        primary_mobile: None,
        primary_email: None,
        employee_id: None,
        program: None,
        sub_program: None,
        class_id: None,
        netsuite_order_id: None,
    }
}

fn bare_milestone() -> MilestoneGraph {
    MilestoneGraph {
        milestone: MilestoneRecord {
            id: MilestoneId::new("M1").unwrap(),
            order_id: OrderId::new("O1").unwrap(),
            name: None,
            record_type: Some("Standard".to_string()),
            status: None,
            paid: None,
            adjustment: None,
            adjustment_remarks: None,
            backend_entity: None,
            term_start: None,
            term_end: None,
            fees: FeeAmounts::default(),
        },
        line_items: vec![LineItemRecord {
            id: LineItemId::new("L1").unwrap(),
            milestone_id: MilestoneId::new("M1").unwrap(),
            name: None,
            period_start: None,
            period_end: None,
            active: None,
            fees: FeeAmounts::default(),
            current_month_adjustment: None,
            standard_monthly_amount: None,
        }],
    }
}

fn walk(value: &serde_json::Value, path: &str, nulls: &mut Vec<String>) {
    match value {
        serde_json::Value::Null => nulls.push(path.to_string()),
        serde_json::Value::Object(map) => {
            for (key, child) in map {
                walk(child, &format!("{path}.{key}"), nulls);
            }
        }
        serde_json::Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                walk(child, &format!("{path}[{index}]"), nulls);
            }
        }
        _ => {}
    }
}

#[test]
fn all_optional_fields_absent_yields_defaults_never_null() {
    let payload = assemble(&order_with_all_optionals_absent(), &[bare_milestone()]);
    let json = serde_json::to_value(&payload).unwrap();

    let mut nulls = Vec::new();
    walk(&json, "$", &mut nulls);
    assert!(nulls.is_empty(), "null values at: {nulls:?}");

    // Text fallbacks
    assert_eq!(json["orderrecordtype"], "None");
    assert_eq!(json["studentprogram"], "None");
    assert_eq!(json["subprogram"], "None");
    assert_eq!(json["classid"], "None");
    assert_eq!(json["subsidiary"], "FYLS");
    assert_eq!(json["customerID"], "");
    assert_eq!(json["primaryparent"], "");

    // Date fallbacks
    assert_eq!(json["date"], "");
    assert_eq!(json["orderstartdate"], "");
    assert_eq!(json["dateofjoining"], "");

    // Milestone defaults
    let milestone = &json["milestone"][0];
    assert_eq!(milestone["Amount_Paid__c"], "No");
    assert_eq!(milestone["Adjustment__c"], 0.0);
    assert_eq!(milestone["Tuition_Fee__c"], 0.0);
    assert_eq!(milestone["Entity_Backend__c"], "FYLS");
    assert_eq!(milestone["Term_Start_Date__c"], "");

    // Line-item defaults
    let line = &milestone["milestoneline"][0];
    assert_eq!(line["ActiveX__c"], "No");
    assert_eq!(line["Adjustment_for_current_month"], 0.0);
    assert_eq!(line["Total_standard_amount"], 0.0);
    assert_eq!(line["Corporate_Daycare_Fee__c"], 0.0);
}

#[test]
fn date_rendering_is_stable_across_time_of_day() {
    let mut graph_morning = bare_milestone();
    graph_morning.milestone.term_start =
        Some(Utc.with_ymd_and_hms(2025, 7, 15, 6, 0, 1).unwrap());

    let mut graph_night = bare_milestone();
    graph_night.milestone.term_start =
        Some(Utc.with_ymd_and_hms(2025, 7, 15, 23, 45, 59).unwrap());

    let order = order_with_all_optionals_absent();
    let morning = serde_json::to_value(assemble(&order, &[graph_morning])).unwrap();
    let night = serde_json::to_value(assemble(&order, &[graph_night])).unwrap();

    assert_eq!(
        morning["milestone"][0]["Term_Start_Date__c"],
        night["milestone"][0]["Term_Start_Date__c"]
    );
    assert_eq!(morning["milestone"][0]["Term_Start_Date__c"], "15/07/2025");
}

#[test]
fn milestone_carries_twenty_fee_fields_plus_fixed_keys() {
    let payload = assemble(&order_with_all_optionals_absent(), &[bare_milestone()]);
    let json = serde_json::to_value(&payload).unwrap();
    let milestone = json["milestone"][0].as_object().unwrap();

    let fee_keys = milestone
        .keys()
        .filter(|k| k.ends_with("_Fee__c") || k.as_str() == "Security_Deposit__c"
            || k.as_str() == "Corporate_Security_Deposit__c")
        .count();
    assert_eq!(fee_keys, 20);

    // 9 fixed keys + 20 fees + the nested line-item list
    assert_eq!(milestone.len(), 30);
    assert!(milestone.contains_key("milestoneline"));
}

#[test]
fn line_item_vocabulary_is_complete() {
    let payload = assemble(&order_with_all_optionals_absent(), &[bare_milestone()]);
    let json = serde_json::to_value(&payload).unwrap();
    let line = json["milestone"][0]["milestoneline"][0].as_object().unwrap();

    for key in [
        "Id",
        "Term_Line_Item_Name",
        "Term_Line_Item_Start_Date__c",
        "Term_Line_Item_End_Date__c",
        "ActiveX__c",
        "Adjustment_for_current_month",
        "Total_standard_amount",
        "Tuition_Fee__c",
        "Corporate_Other_Fee__c",
    ] {
        assert!(line.contains_key(key), "missing line-item key {key}");
    }

    // 5 fixed keys + 20 fees + the two amount keys
    assert_eq!(line.len(), 27);
}

#[test]
fn populated_fields_pass_through_unchanged() {
    let mut order = order_with_all_optionals_absent();
    order.record_type = Some("Enrollment".to_string());
    order.subsidiary = Some("FYGS".to_string());
    order.customer_external_id = Some("CUST-77".to_string());
    order.effective_date = Some(Utc.with_ymd_and_hms(2025, 1, 9, 10, 0, 0).unwrap());

    let json = serde_json::to_value(assemble(&order, &[])).unwrap();
    assert_eq!(json["orderrecordtype"], "Enrollment");
    assert_eq!(json["subsidiary"], "FYGS");
    assert_eq!(json["customerID"], "CUST-77");
    assert_eq!(json["date"], "09/01/2025");
}
