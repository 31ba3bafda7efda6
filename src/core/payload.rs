//! Synchronization payload types and assembly
//!
//! Strongly typed payload structs carrying the NetSuite field vocabulary.
//! Serde is the single serialization boundary: the rename attributes are the
//! only place wire keys appear, so the vocabulary is statically checkable.
//!
//! A payload is transient and purely derived - it is assembled fresh for one
//! order in one run and discarded after the callout.

use crate::core::normalize::{
    amount_or_zero, date_label, text_or, yes_no, FALLBACK_ENTITY, FALLBACK_NONE,
};
use crate::domain::milestone::{FeeAmounts, LineItemRecord, MilestoneGraph};
use crate::domain::order::OrderRecord;
use serde::{Deserialize, Serialize};

/// Order-level payload, the root of the request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPayload {
    #[serde(rename = "orderid")]
    pub order_id: String,
    #[serde(rename = "orderrecordtype")]
    pub order_record_type: String,
    #[serde(rename = "customerID")]
    pub customer_id: String,
    #[serde(rename = "Corporate__c")]
    pub corporate: String,
    #[serde(rename = "subsidiary")]
    pub subsidiary: String,
    #[serde(rename = "date")]
    pub date: String,
    #[serde(rename = "orderstartdate")]
    pub order_start_date: String,
    #[serde(rename = "orderenddate")]
    pub order_end_date: String,
    #[serde(rename = "status")]
    pub status: String,
    #[serde(rename = "ordernumber")]
    pub order_number: String,
    #[serde(rename = "academicyear")]
    pub academic_year: String,
    #[serde(rename = "dateofjoining")]
    pub date_of_joining: String,
    #[serde(rename = "location")]
    pub location: String,
    #[serde(rename = "center")]
    pub center: String,
    #[serde(rename = "primaryparent")]
    pub primary_parent: String,
    #[serde(rename = "primarymobno")]
    pub primary_mobile: String,
    #[serde(rename = "primaryemailid")]
    pub primary_email: String,
    #[serde(rename = "employeeid")]
    pub employee_id: String,
    #[serde(rename = "studentprogram")]
    pub student_program: String,
    #[serde(rename = "subprogram")]
    pub sub_program: String,
    #[serde(rename = "classid")]
    pub class_id: String,
    #[serde(rename = "companyemaildcorporate")]
    pub company_email: String,
    #[serde(rename = "milestone")]
    pub milestones: Vec<MilestonePayload>,
}

/// Milestone-level payload, nested under the order's `milestone` key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestonePayload {
    #[serde(rename = "id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Milestone_Status__c")]
    pub status: String,
    #[serde(rename = "Amount_Paid__c")]
    pub amount_paid: String,
    #[serde(rename = "Adjustment__c")]
    pub adjustment: f64,
    #[serde(rename = "Adjustment_Fee_Remarks__c")]
    pub adjustment_remarks: String,
    #[serde(rename = "Entity_Backend__c")]
    pub entity_backend: String,
    #[serde(rename = "Term_Start_Date__c")]
    pub term_start_date: String,
    #[serde(rename = "Term_End_Date__c")]
    pub term_end_date: String,
    #[serde(flatten)]
    pub fees: FeePayload,
    #[serde(rename = "milestoneline")]
    pub lines: Vec<LineItemPayload>,
}

/// Line-item payload, nested under the milestone's `milestoneline` key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemPayload {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Term_Line_Item_Name")]
    pub name: String,
    #[serde(rename = "Term_Line_Item_Start_Date__c")]
    pub start_date: String,
    #[serde(rename = "Term_Line_Item_End_Date__c")]
    pub end_date: String,
    #[serde(rename = "ActiveX__c")]
    pub active: String,
    #[serde(flatten)]
    pub fees: FeePayload,
    #[serde(rename = "Adjustment_for_current_month")]
    pub current_month_adjustment: f64,
    #[serde(rename = "Total_standard_amount")]
    pub total_standard_amount: f64,
}

/// The fee-category amount family shared by milestones and line items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeePayload {
    #[serde(rename = "Tuition_Fee__c")]
    pub tuition: f64,
    #[serde(rename = "Food_Fee__c")]
    pub food: f64,
    #[serde(rename = "Transport_Fee__c")]
    pub transport: f64,
    #[serde(rename = "Security_Deposit__c")]
    pub security_deposit: f64,
    #[serde(rename = "Kit_Fee__c")]
    pub kit: f64,
    #[serde(rename = "Admission_Fee__c")]
    pub admission: f64,
    #[serde(rename = "Registration_Fee__c")]
    pub registration: f64,
    #[serde(rename = "Annual_Fee__c")]
    pub annual: f64,
    #[serde(rename = "Daycare_Fee__c")]
    pub daycare: f64,
    #[serde(rename = "Other_Fee__c")]
    pub other: f64,
    #[serde(rename = "Corporate_Tuition_Fee__c")]
    pub corporate_tuition: f64,
    #[serde(rename = "Corporate_Food_Fee__c")]
    pub corporate_food: f64,
    #[serde(rename = "Corporate_Transport_Fee__c")]
    pub corporate_transport: f64,
    #[serde(rename = "Corporate_Security_Deposit__c")]
    pub corporate_security_deposit: f64,
    #[serde(rename = "Corporate_Kit_Fee__c")]
    pub corporate_kit: f64,
    #[serde(rename = "Corporate_Admission_Fee__c")]
    pub corporate_admission: f64,
    #[serde(rename = "Corporate_Registration_Fee__c")]
    pub corporate_registration: f64,
    #[serde(rename = "Corporate_Annual_Fee__c")]
    pub corporate_annual: f64,
    #[serde(rename = "Corporate_Daycare_Fee__c")]
    pub corporate_daycare: f64,
    #[serde(rename = "Corporate_Other_Fee__c")]
    pub corporate_other: f64,
}

/// Assemble the synchronization payload for one order
///
/// Builds the order-level fields first, then one milestone payload per
/// fetched milestone with its line items nested inside. Ordering follows
/// the fetcher's deterministic order.
pub fn assemble(order: &OrderRecord, milestones: &[MilestoneGraph]) -> OrderPayload {
    OrderPayload {
        order_id: order.id.to_string(),
        order_record_type: text_or(order.record_type.as_deref(), FALLBACK_NONE),
        customer_id: text_or(order.customer_external_id.as_deref(), ""),
        corporate: text_or(order.corporate_external_id.as_deref(), ""),
        subsidiary: text_or(order.subsidiary.as_deref(), FALLBACK_ENTITY),
        date: date_label(order.effective_date),
        order_start_date: date_label(order.start_date),
        order_end_date: date_label(order.end_date),
        status: text_or(order.status.as_deref(), ""),
        order_number: text_or(order.order_number.as_deref(), ""),
        academic_year: text_or(order.academic_year.as_deref(), ""),
        date_of_joining: date_label(order.joining_date),
        location: text_or(order.location.as_deref(), ""),
        center: text_or(order.centre_code.as_deref(), ""),
        primary_parent: text_or(order.primary_parent.as_deref(), ""),
        primary_mobile: text_or(order.primary_mobile.as_deref(), ""),
        primary_email: text_or(order.primary_email.as_deref(), ""),
        employee_id: text_or(order.employee_id.as_deref(), ""),
        student_program: text_or(order.program.as_deref(), FALLBACK_NONE),
        sub_program: text_or(order.sub_program.as_deref(), FALLBACK_NONE),
        class_id: text_or(order.class_id.as_deref(), FALLBACK_NONE),
        company_email: text_or(order.company_email.as_deref(), ""),
        milestones: milestones.iter().map(milestone_payload).collect(),
    }
}

fn milestone_payload(graph: &MilestoneGraph) -> MilestonePayload {
    let milestone = &graph.milestone;
    MilestonePayload {
        id: milestone.id.to_string(),
        name: text_or(milestone.name.as_deref(), ""),
        status: text_or(milestone.status.as_deref(), ""),
        amount_paid: yes_no(milestone.paid),
        adjustment: amount_or_zero(milestone.adjustment),
        adjustment_remarks: text_or(milestone.adjustment_remarks.as_deref(), ""),
        entity_backend: text_or(milestone.backend_entity.as_deref(), FALLBACK_ENTITY),
        term_start_date: date_label(milestone.term_start),
        term_end_date: date_label(milestone.term_end),
        fees: fee_payload(&milestone.fees),
        lines: graph.line_items.iter().map(line_item_payload).collect(),
    }
}

fn line_item_payload(line: &LineItemRecord) -> LineItemPayload {
    LineItemPayload {
        id: line.id.to_string(),
        name: text_or(line.name.as_deref(), ""),
        start_date: date_label(line.period_start),
        end_date: date_label(line.period_end),
        active: yes_no(line.active),
        fees: fee_payload(&line.fees),
        current_month_adjustment: amount_or_zero(line.current_month_adjustment),
        total_standard_amount: amount_or_zero(line.standard_monthly_amount),
    }
}

fn fee_payload(fees: &FeeAmounts) -> FeePayload {
    FeePayload {
        tuition: amount_or_zero(fees.tuition),
        food: amount_or_zero(fees.food),
        transport: amount_or_zero(fees.transport),
        security_deposit: amount_or_zero(fees.security_deposit),
        kit: amount_or_zero(fees.kit),
        admission: amount_or_zero(fees.admission),
        registration: amount_or_zero(fees.registration),
        annual: amount_or_zero(fees.annual),
        daycare: amount_or_zero(fees.daycare),
        other: amount_or_zero(fees.other),
        corporate_tuition: amount_or_zero(fees.corporate_tuition),
        corporate_food: amount_or_zero(fees.corporate_food),
        corporate_transport: amount_or_zero(fees.corporate_transport),
        corporate_security_deposit: amount_or_zero(fees.corporate_security_deposit),
        corporate_kit: amount_or_zero(fees.corporate_kit),
        corporate_admission: amount_or_zero(fees.corporate_admission),
        corporate_registration: amount_or_zero(fees.corporate_registration),
        corporate_annual: amount_or_zero(fees.corporate_annual),
        corporate_daycare: amount_or_zero(fees.corporate_daycare),
        corporate_other: amount_or_zero(fees.corporate_other),
    }
}
