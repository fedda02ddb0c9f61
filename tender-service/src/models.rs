// Shared data types and form-field mapping
use serde::Serialize;
use tender_repository::TenderRecord;

/// JSON body returned by `POST /submit`.
///
/// `id` is present only on successful insertion; duplicate rejections and
/// storage failures carry the message alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl SubmitResponse {
    /// Response for a successfully inserted submission.
    pub fn inserted(id: i64) -> Self {
        Self {
            success: true,
            message: "Data inserted successfully!".to_string(),
            id: Some(id),
        }
    }

    /// Response for a submission rejected by the duplicate check.
    pub fn duplicate() -> Self {
        Self {
            success: false,
            message: "Duplicates data found!!".to_string(),
            id: None,
        }
    }

    /// Generic response for a storage failure during check or insert.
    pub fn insert_failed() -> Self {
        Self {
            success: false,
            message: "Error occurred while inserting data.".to_string(),
            id: None,
        }
    }
}

/// Builds the upload filename for a stored document: the original file name
/// is discarded and replaced with `<timestamp>-<fieldname>`.
pub fn upload_filename(field_name: &str, timestamp_millis: i64) -> String {
    format!("{timestamp_millis}-{field_name}")
}

/// Assigns one named form field to the matching record field.
///
/// Returns `false` when the name does not correspond to any known field, in
/// which case the record is left untouched. Values are stored as-is; an empty
/// string is a present value, distinct from an absent field.
pub fn apply_text_field(record: &mut TenderRecord, name: &str, value: String) -> bool {
    let slot = match name {
        "noticeType" => &mut record.notice_type,
        "noticeContractType" => &mut record.notice_contract_type,
        "tenderNumber" => &mut record.tender_number,
        "noticeLanguage" => &mut record.notice_language,
        "subjectLocal" => &mut record.subject_local,
        "subjectEnglish" => &mut record.subject_english,
        "quantity" => &mut record.quantity,
        "tenderDescription" => &mut record.tender_description,
        "noticeText" => &mut record.notice_text,
        "noticeUrl" => &mut record.notice_url,
        "eligibilityOfBidders" => &mut record.eligibility_of_bidders,
        "procurementMethod" => &mut record.procurement_method,
        "issueDate" => &mut record.issue_date,
        "openingDate" => &mut record.opening_date,
        "closingDate" => &mut record.closing_date,
        "currency" => &mut record.currency,
        "estimatedAmount" => &mut record.estimated_amount,
        "contractDuration" => &mut record.contract_duration,
        "buyerID" => &mut record.buyer_id,
        "buyerName" => &mut record.buyer_name,
        "contactName" => &mut record.contact_name,
        "address" => &mut record.address,
        "city" => &mut record.city,
        "country" => &mut record.country,
        "state" => &mut record.state,
        "phone" => &mut record.phone,
        "fax" => &mut record.fax,
        "email" => &mut record.email,
        "url" => &mut record.url,
        "performanceCountry" => &mut record.performance_country,
        "performanceState" => &mut record.performance_state,
        "awardDate" => &mut record.award_date,
        "awardCompanyName" => &mut record.award_company_name,
        "awardCompanyAddress" => &mut record.award_company_address,
        "awardCountry" => &mut record.award_country,
        "awardState" => &mut record.award_state,
        "contractDurationAward" => &mut record.contract_duration_award,
        "initialEstimatedValue" => &mut record.initial_estimated_value,
        "currencyAward" => &mut record.currency_award,
        "finalValue" => &mut record.final_value,
        "sourceOfFunds" => &mut record.source_of_funds,
        "fundingAgency" => &mut record.funding_agency,
        "projectName" => &mut record.project_name,
        "cpvCodes" => &mut record.cpv_codes,
        "originalLinkOrDataId" => &mut record.original_link_or_data_id,
        _ => return false,
    };
    *slot = Some(value);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_fields_map_to_record_fields() {
        let mut record = TenderRecord::default();

        assert!(apply_text_field(&mut record, "noticeType", "ITT".to_string()));
        assert!(apply_text_field(&mut record, "buyerID", "B-42".to_string()));
        assert!(apply_text_field(&mut record, "cpvCodes", "45233120".to_string()));
        assert!(!apply_text_field(&mut record, "docsUploadNote", "x".to_string()));

        assert_eq!(record.notice_type, Some("ITT".to_string()));
        assert_eq!(record.buyer_id, Some("B-42".to_string()));
        assert_eq!(record.cpv_codes, Some("45233120".to_string()));
    }

    #[test]
    fn empty_value_is_stored_as_present() {
        let mut record = TenderRecord::default();
        apply_text_field(&mut record, "quantity", String::new());
        assert_eq!(record.quantity, Some(String::new()));
    }

    #[test]
    fn upload_filename_embeds_timestamp_and_field_name() {
        assert_eq!(
            upload_filename("docsUpload", 1718000000000),
            "1718000000000-docsUpload"
        );
    }

    #[test]
    fn submit_response_serializes_without_null_id() {
        let body = serde_json::to_value(SubmitResponse::duplicate()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": false, "message": "Duplicates data found!!"})
        );

        let body = serde_json::to_value(SubmitResponse::inserted(7)).unwrap();
        assert_eq!(body["id"], serde_json::json!(7));
        assert_eq!(body["success"], serde_json::json!(true));
    }
}
