//! Core types for tender notice storage.
//!
//! `TenderRecord` mirrors the `tenders` table: one auto-assigned id plus 45
//! optional text columns. Column names in the table (and JSON keys on export)
//! are the camelCase names of the original intake form, so the struct carries
//! `rename_all = "camelCase"` for both serde and sqlx, with an explicit
//! override for the one column (`buyerID`) that does not follow the pattern.
use serde::Serialize;

/// One tender notice row: system-assigned identifier plus the full field set
/// collected by the submission form. All text fields are optional; absent
/// form fields are stored as NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct TenderRecord {
    /// Auto-increment primary key; `None` until the row is inserted.
    pub id: Option<i64>,

    // Notice metadata. The first eight fields form the identity subset used
    // for duplicate detection (see `TenderIdentity`).
    pub notice_type: Option<String>,
    pub notice_contract_type: Option<String>,
    pub tender_number: Option<String>,
    pub notice_language: Option<String>,
    pub subject_local: Option<String>,
    pub subject_english: Option<String>,
    pub quantity: Option<String>,
    pub tender_description: Option<String>,
    pub notice_text: Option<String>,
    pub notice_url: Option<String>,
    pub eligibility_of_bidders: Option<String>,
    pub procurement_method: Option<String>,
    pub issue_date: Option<String>,
    pub opening_date: Option<String>,
    pub closing_date: Option<String>,
    pub currency: Option<String>,
    pub estimated_amount: Option<String>,
    pub contract_duration: Option<String>,

    // Buyer and contact information.
    #[serde(rename = "buyerID")]
    #[sqlx(rename = "buyerID")]
    pub buyer_id: Option<String>,
    pub buyer_name: Option<String>,
    pub contact_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
    pub performance_country: Option<String>,
    pub performance_state: Option<String>,

    // Award information.
    pub award_date: Option<String>,
    pub award_company_name: Option<String>,
    pub award_company_address: Option<String>,
    pub award_country: Option<String>,
    pub award_state: Option<String>,
    pub contract_duration_award: Option<String>,
    pub initial_estimated_value: Option<String>,
    pub currency_award: Option<String>,
    pub final_value: Option<String>,

    // Funding information.
    pub source_of_funds: Option<String>,
    pub funding_agency: Option<String>,
    pub project_name: Option<String>,
    pub cpv_codes: Option<String>,
    pub original_link_or_data_id: Option<String>,

    /// Stored filename of the uploaded document, or `None` when the
    /// submission carried no file.
    pub docs_upload: Option<String>,
}

impl TenderRecord {
    /// Extracts the identity subset used for duplicate detection.
    pub fn identity(&self) -> TenderIdentity<'_> {
        TenderIdentity {
            notice_type: self.notice_type.as_deref(),
            notice_contract_type: self.notice_contract_type.as_deref(),
            tender_number: self.tender_number.as_deref(),
            notice_language: self.notice_language.as_deref(),
            subject_local: self.subject_local.as_deref(),
            subject_english: self.subject_english.as_deref(),
            quantity: self.quantity.as_deref(),
            tender_description: self.tender_description.as_deref(),
        }
    }
}

/// The eight-field subset that defines duplicate equivalence between tender
/// records. Two submissions with identical values across all eight fields
/// (NULL compares equal to NULL) describe the same notice, regardless of any
/// differences in the remaining fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenderIdentity<'a> {
    pub notice_type: Option<&'a str>,
    pub notice_contract_type: Option<&'a str>,
    pub tender_number: Option<&'a str>,
    pub notice_language: Option<&'a str>,
    pub subject_local: Option<&'a str>,
    pub subject_english: Option<&'a str>,
    pub quantity: Option<&'a str>,
    pub tender_description: Option<&'a str>,
}

/// Result of a submission: either a new row was inserted and assigned an id,
/// or an existing row with the same identity fields already exists and the
/// submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Inserted { id: i64 },
    Duplicate,
}
