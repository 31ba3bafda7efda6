//! Row-to-domain mapping for the PostgreSQL source store
//!
//! The column lists are the explicit field contract per entity: queries
//! select exactly these columns, and the mappers read exactly these columns.
//! A schema drift shows up here as a mapping error, not as silent nulls.

use crate::domain::ids::{LineItemId, MilestoneId, OrderId};
use crate::domain::milestone::{FeeAmounts, LineItemRecord, MilestoneRecord};
use crate::domain::order::OrderRecord;
use crate::domain::outcome::OutcomeRecord;
use crate::domain::{Result, StoreError};
use tokio_postgres::Row;

/// Columns selected for an order record
pub const ORDER_COLUMNS: &str = "id, record_type, status, order_number, \
     customer_external_id, corporate_external_id, company_email, subsidiary, \
     effective_date, start_date, end_date, joining_date, academic_year, \
     location, centre_code, primary_parent, primary_mobile, primary_email, \
     employee_id, program, sub_program, class_id, netsuite_order_id";

/// Columns selected for a milestone record
pub const MILESTONE_COLUMNS: &str = "id, order_id, name, record_type, status, \
     paid, adjustment, adjustment_remarks, backend_entity, term_start, term_end, \
     tuition_fee, food_fee, transport_fee, security_deposit, kit_fee, \
     admission_fee, registration_fee, annual_fee, daycare_fee, other_fee, \
     corporate_tuition_fee, corporate_food_fee, corporate_transport_fee, \
     corporate_security_deposit, corporate_kit_fee, corporate_admission_fee, \
     corporate_registration_fee, corporate_annual_fee, corporate_daycare_fee, \
     corporate_other_fee";

/// Columns selected for a line-item record
pub const LINE_ITEM_COLUMNS: &str = "id, milestone_id, name, period_start, \
     period_end, active, current_month_adjustment, standard_monthly_amount, \
     tuition_fee, food_fee, transport_fee, security_deposit, kit_fee, \
     admission_fee, registration_fee, annual_fee, daycare_fee, other_fee, \
     corporate_tuition_fee, corporate_food_fee, corporate_transport_fee, \
     corporate_security_deposit, corporate_kit_fee, corporate_admission_fee, \
     corporate_registration_fee, corporate_annual_fee, corporate_daycare_fee, \
     corporate_other_fee";

/// Columns selected for an outcome record
pub const OUTCOME_COLUMNS: &str =
    "id, order_id, channel, operation, request_body, response_body, success, recorded_at";

fn invalid_row(entity: &str, err: tokio_postgres::Error) -> StoreError {
    StoreError::InvalidRow(format!("{entity}: {err}"))
}

/// Map a row selected with [`ORDER_COLUMNS`] to an [`OrderRecord`]
pub fn order_from_row(row: &Row) -> Result<OrderRecord> {
    let id: String = row.try_get("id").map_err(|e| invalid_row("order", e))?;
    let id = OrderId::new(id).map_err(StoreError::InvalidRow)?;

    Ok(OrderRecord {
        id,
        record_type: row.try_get("record_type").map_err(|e| invalid_row("order", e))?,
        status: row.try_get("status").map_err(|e| invalid_row("order", e))?,
        order_number: row
            .try_get("order_number")
            .map_err(|e| invalid_row("order", e))?,
        customer_external_id: row
            .try_get("customer_external_id")
            .map_err(|e| invalid_row("order", e))?,
        corporate_external_id: row
            .try_get("corporate_external_id")
            .map_err(|e| invalid_row("order", e))?,
        company_email: row
            .try_get("company_email")
            .map_err(|e| invalid_row("order", e))?,
        subsidiary: row.try_get("subsidiary").map_err(|e| invalid_row("order", e))?,
        effective_date: row
            .try_get("effective_date")
            .map_err(|e| invalid_row("order", e))?,
        start_date: row.try_get("start_date").map_err(|e| invalid_row("order", e))?,
        end_date: row.try_get("end_date").map_err(|e| invalid_row("order", e))?,
        joining_date: row
            .try_get("joining_date")
            .map_err(|e| invalid_row("order", e))?,
        academic_year: row
            .try_get("academic_year")
            .map_err(|e| invalid_row("order", e))?,
        location: row.try_get("location").map_err(|e| invalid_row("order", e))?,
        centre_code: row
            .try_get("centre_code")
            .map_err(|e| invalid_row("order", e))?,
        primary_parent: row
            .try_get("primary_parent")
            .map_err(|e| invalid_row("order", e))?,
        primary_mobile: row
            .try_get("primary_mobile")
            .map_err(|e| invalid_row("order", e))?,
        primary_email: row
            .try_get("primary_email")
            .map_err(|e| invalid_row("order", e))?,
        employee_id: row
            .try_get("employee_id")
            .map_err(|e| invalid_row("order", e))?,
        program: row.try_get("program").map_err(|e| invalid_row("order", e))?,
        sub_program: row
            .try_get("sub_program")
            .map_err(|e| invalid_row("order", e))?,
        class_id: row.try_get("class_id").map_err(|e| invalid_row("order", e))?,
        netsuite_order_id: row
            .try_get("netsuite_order_id")
            .map_err(|e| invalid_row("order", e))?,
    })
}

/// Map a row selected with [`MILESTONE_COLUMNS`] to a [`MilestoneRecord`]
pub fn milestone_from_row(row: &Row) -> Result<MilestoneRecord> {
    let id: String = row.try_get("id").map_err(|e| invalid_row("milestone", e))?;
    let id = MilestoneId::new(id).map_err(StoreError::InvalidRow)?;

    let order_id: String = row
        .try_get("order_id")
        .map_err(|e| invalid_row("milestone", e))?;
    let order_id = OrderId::new(order_id).map_err(StoreError::InvalidRow)?;

    Ok(MilestoneRecord {
        id,
        order_id,
        name: row.try_get("name").map_err(|e| invalid_row("milestone", e))?,
        record_type: row
            .try_get("record_type")
            .map_err(|e| invalid_row("milestone", e))?,
        status: row.try_get("status").map_err(|e| invalid_row("milestone", e))?,
        paid: row.try_get("paid").map_err(|e| invalid_row("milestone", e))?,
        adjustment: row
            .try_get("adjustment")
            .map_err(|e| invalid_row("milestone", e))?,
        adjustment_remarks: row
            .try_get("adjustment_remarks")
            .map_err(|e| invalid_row("milestone", e))?,
        backend_entity: row
            .try_get("backend_entity")
            .map_err(|e| invalid_row("milestone", e))?,
        term_start: row
            .try_get("term_start")
            .map_err(|e| invalid_row("milestone", e))?,
        term_end: row
            .try_get("term_end")
            .map_err(|e| invalid_row("milestone", e))?,
        fees: fees_from_row(row, "milestone")?,
    })
}

/// Map a row selected with [`LINE_ITEM_COLUMNS`] to a [`LineItemRecord`]
pub fn line_item_from_row(row: &Row) -> Result<LineItemRecord> {
    let id: String = row.try_get("id").map_err(|e| invalid_row("line item", e))?;
    let id = LineItemId::new(id).map_err(StoreError::InvalidRow)?;

    let milestone_id: String = row
        .try_get("milestone_id")
        .map_err(|e| invalid_row("line item", e))?;
    let milestone_id = MilestoneId::new(milestone_id).map_err(StoreError::InvalidRow)?;

    Ok(LineItemRecord {
        id,
        milestone_id,
        name: row.try_get("name").map_err(|e| invalid_row("line item", e))?,
        period_start: row
            .try_get("period_start")
            .map_err(|e| invalid_row("line item", e))?,
        period_end: row
            .try_get("period_end")
            .map_err(|e| invalid_row("line item", e))?,
        active: row.try_get("active").map_err(|e| invalid_row("line item", e))?,
        fees: fees_from_row(row, "line item")?,
        current_month_adjustment: row
            .try_get("current_month_adjustment")
            .map_err(|e| invalid_row("line item", e))?,
        standard_monthly_amount: row
            .try_get("standard_monthly_amount")
            .map_err(|e| invalid_row("line item", e))?,
    })
}

/// Map the shared fee-category columns of a milestone or line-item row
fn fees_from_row(row: &Row, entity: &str) -> Result<FeeAmounts> {
    Ok(FeeAmounts {
        tuition: row.try_get("tuition_fee").map_err(|e| invalid_row(entity, e))?,
        food: row.try_get("food_fee").map_err(|e| invalid_row(entity, e))?,
        transport: row
            .try_get("transport_fee")
            .map_err(|e| invalid_row(entity, e))?,
        security_deposit: row
            .try_get("security_deposit")
            .map_err(|e| invalid_row(entity, e))?,
        kit: row.try_get("kit_fee").map_err(|e| invalid_row(entity, e))?,
        admission: row
            .try_get("admission_fee")
            .map_err(|e| invalid_row(entity, e))?,
        registration: row
            .try_get("registration_fee")
            .map_err(|e| invalid_row(entity, e))?,
        annual: row.try_get("annual_fee").map_err(|e| invalid_row(entity, e))?,
        daycare: row.try_get("daycare_fee").map_err(|e| invalid_row(entity, e))?,
        other: row.try_get("other_fee").map_err(|e| invalid_row(entity, e))?,
        corporate_tuition: row
            .try_get("corporate_tuition_fee")
            .map_err(|e| invalid_row(entity, e))?,
        corporate_food: row
            .try_get("corporate_food_fee")
            .map_err(|e| invalid_row(entity, e))?,
        corporate_transport: row
            .try_get("corporate_transport_fee")
            .map_err(|e| invalid_row(entity, e))?,
        corporate_security_deposit: row
            .try_get("corporate_security_deposit")
            .map_err(|e| invalid_row(entity, e))?,
        corporate_kit: row
            .try_get("corporate_kit_fee")
            .map_err(|e| invalid_row(entity, e))?,
        corporate_admission: row
            .try_get("corporate_admission_fee")
            .map_err(|e| invalid_row(entity, e))?,
        corporate_registration: row
            .try_get("corporate_registration_fee")
            .map_err(|e| invalid_row(entity, e))?,
        corporate_annual: row
            .try_get("corporate_annual_fee")
            .map_err(|e| invalid_row(entity, e))?,
        corporate_daycare: row
            .try_get("corporate_daycare_fee")
            .map_err(|e| invalid_row(entity, e))?,
        corporate_other: row
            .try_get("corporate_other_fee")
            .map_err(|e| invalid_row(entity, e))?,
    })
}

/// Map a row selected with [`OUTCOME_COLUMNS`] to an [`OutcomeRecord`]
pub fn outcome_from_row(row: &Row) -> Result<OutcomeRecord> {
    let order_id: String = row
        .try_get("order_id")
        .map_err(|e| invalid_row("outcome", e))?;
    let order_id = OrderId::new(order_id).map_err(StoreError::InvalidRow)?;

    Ok(OutcomeRecord {
        id: row.try_get("id").map_err(|e| invalid_row("outcome", e))?,
        order_id,
        channel: row.try_get("channel").map_err(|e| invalid_row("outcome", e))?,
        operation: row
            .try_get("operation")
            .map_err(|e| invalid_row("outcome", e))?,
        request_body: row
            .try_get("request_body")
            .map_err(|e| invalid_row("outcome", e))?,
        response_body: row
            .try_get("response_body")
            .map_err(|e| invalid_row("outcome", e))?,
        success: row.try_get("success").map_err(|e| invalid_row("outcome", e))?,
        recorded_at: row
            .try_get("recorded_at")
            .map_err(|e| invalid_row("outcome", e))?,
    })
}
