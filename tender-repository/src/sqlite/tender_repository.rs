//! SQLite implementation of the tender repository.
//!
//! Provides the storage backend for the `TenderRepository` trait with
//! connection pooling and type-safe parameterized queries.
//!
//! ## Key Features
//!
//! - Connection pooling with `sqlx::SqlitePool`
//! - Duplicate check and insert under a single transaction
//! - Parameterized queries with `QueryBuilder` (no value interpolation)
//! - NULL-equal identity matching via the SQLite `IS` operator
//!
//! ## Database Tables
//!
//! - `tenders`: one row per accepted tender notice submission
use crate::{SubmitOutcome, TenderIdentity, TenderRecord, TenderRepository, TenderRepositoryError};
use async_trait::async_trait;

/// Fixed 46-column layout: auto-increment id plus the 45 text fields of the
/// submission form. `IF NOT EXISTS` keeps startup idempotent; there is no
/// migration support.
const CREATE_TENDERS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS tenders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    noticeType TEXT,
    noticeContractType TEXT,
    tenderNumber TEXT,
    noticeLanguage TEXT,
    subjectLocal TEXT,
    subjectEnglish TEXT,
    quantity TEXT,
    tenderDescription TEXT,
    noticeText TEXT,
    noticeUrl TEXT,
    eligibilityOfBidders TEXT,
    procurementMethod TEXT,
    issueDate TEXT,
    openingDate TEXT,
    closingDate TEXT,
    currency TEXT,
    estimatedAmount TEXT,
    contractDuration TEXT,
    buyerID TEXT,
    buyerName TEXT,
    contactName TEXT,
    address TEXT,
    city TEXT,
    country TEXT,
    state TEXT,
    phone TEXT,
    fax TEXT,
    email TEXT,
    url TEXT,
    performanceCountry TEXT,
    performanceState TEXT,
    awardDate TEXT,
    awardCompanyName TEXT,
    awardCompanyAddress TEXT,
    awardCountry TEXT,
    awardState TEXT,
    contractDurationAward TEXT,
    initialEstimatedValue TEXT,
    currencyAward TEXT,
    finalValue TEXT,
    sourceOfFunds TEXT,
    fundingAgency TEXT,
    projectName TEXT,
    cpvCodes TEXT,
    originalLinkOrDataId TEXT,
    docsUpload TEXT
)";

/// SQLite implementation of the tender repository.
///
/// Provides schema setup, duplicate detection, conditional insertion, and
/// bulk export over a pooled SQLite connection.
pub struct SqliteTenderRepository {
    pool: sqlx::SqlitePool,
}

impl SqliteTenderRepository {
    /// Creates a new SQLite repository instance.
    ///
    /// # Arguments
    ///
    /// * `pool` - Configured SQLite connection pool
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteTenderRepository)` - Ready-to-use repository instance
    /// * `Err(TenderRepositoryError)` - Future validation errors (currently always succeeds)
    pub async fn new(pool: sqlx::SqlitePool) -> Result<Self, TenderRepositoryError> {
        Ok(Self { pool })
    }

    /// Counts rows matching all eight identity fields on the given executor.
    ///
    /// Built with `QueryBuilder` so every value is a bound parameter. Uses
    /// the `IS` operator instead of `=` so an absent field matches rows where
    /// the column is NULL, per the duplicate-equivalence rule.
    async fn count_identity_matches<'e, E>(
        &self,
        executor: E,
        identity: &TenderIdentity<'_>,
    ) -> Result<i64, TenderRepositoryError>
    where
        E: sqlx::SqliteExecutor<'e>,
    {
        let criteria = [
            ("noticeType", identity.notice_type),
            ("noticeContractType", identity.notice_contract_type),
            ("tenderNumber", identity.tender_number),
            ("noticeLanguage", identity.notice_language),
            ("subjectLocal", identity.subject_local),
            ("subjectEnglish", identity.subject_english),
            ("quantity", identity.quantity),
            ("tenderDescription", identity.tender_description),
        ];

        let mut query_builder =
            sqlx::QueryBuilder::new("SELECT COUNT(*) FROM tenders WHERE ");
        for (i, (column, value)) in criteria.into_iter().enumerate() {
            if i > 0 {
                query_builder.push(" AND ");
            }
            query_builder.push(column).push(" IS ").push_bind(value);
        }

        let count: i64 = query_builder
            .build_query_scalar()
            .fetch_one(executor)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl TenderRepository for SqliteTenderRepository {
    /// Creates the `tenders` table if it does not already exist.
    async fn ensure_schema(&self) -> Result<(), TenderRepositoryError> {
        sqlx::query(CREATE_TENDERS_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Checks for an existing record with the given identity fields.
    async fn has_duplicate(
        &self,
        identity: &TenderIdentity<'_>,
    ) -> Result<bool, TenderRepositoryError> {
        let count = self.count_identity_matches(&self.pool, identity).await?;
        Ok(count > 0)
    }

    /// Runs the duplicate check and conditional insert in one transaction.
    ///
    /// The transaction is opened with `BEGIN IMMEDIATE` so it takes the write
    /// lock before the duplicate count runs. Concurrent identical submissions
    /// therefore serialize under the busy timeout: the loser's count sees the
    /// winner's committed row and returns `Duplicate` instead of failing the
    /// lock upgrade mid-transaction.
    async fn submit(&self, record: &TenderRecord) -> Result<SubmitOutcome, TenderRepositoryError> {
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let identity = record.identity();
        let count = self.count_identity_matches(&mut *tx, &identity).await?;
        if count > 0 {
            tx.rollback().await?;
            return Ok(SubmitOutcome::Duplicate);
        }

        let mut query_builder = sqlx::QueryBuilder::new(
            "INSERT INTO tenders (\
             noticeType, noticeContractType, tenderNumber, noticeLanguage, subjectLocal, \
             subjectEnglish, quantity, tenderDescription, noticeText, noticeUrl, \
             eligibilityOfBidders, procurementMethod, issueDate, openingDate, closingDate, \
             currency, estimatedAmount, contractDuration, buyerID, buyerName, contactName, \
             address, city, country, state, phone, fax, email, url, performanceCountry, \
             performanceState, awardDate, awardCompanyName, awardCompanyAddress, awardCountry, \
             awardState, contractDurationAward, initialEstimatedValue, currencyAward, finalValue, \
             sourceOfFunds, fundingAgency, projectName, cpvCodes, originalLinkOrDataId, docsUpload)",
        );

        query_builder.push_values(std::iter::once(record), |mut b, record| {
            b.push_bind(record.notice_type.as_deref())
                .push_bind(record.notice_contract_type.as_deref())
                .push_bind(record.tender_number.as_deref())
                .push_bind(record.notice_language.as_deref())
                .push_bind(record.subject_local.as_deref())
                .push_bind(record.subject_english.as_deref())
                .push_bind(record.quantity.as_deref())
                .push_bind(record.tender_description.as_deref())
                .push_bind(record.notice_text.as_deref())
                .push_bind(record.notice_url.as_deref())
                .push_bind(record.eligibility_of_bidders.as_deref())
                .push_bind(record.procurement_method.as_deref())
                .push_bind(record.issue_date.as_deref())
                .push_bind(record.opening_date.as_deref())
                .push_bind(record.closing_date.as_deref())
                .push_bind(record.currency.as_deref())
                .push_bind(record.estimated_amount.as_deref())
                .push_bind(record.contract_duration.as_deref())
                .push_bind(record.buyer_id.as_deref())
                .push_bind(record.buyer_name.as_deref())
                .push_bind(record.contact_name.as_deref())
                .push_bind(record.address.as_deref())
                .push_bind(record.city.as_deref())
                .push_bind(record.country.as_deref())
                .push_bind(record.state.as_deref())
                .push_bind(record.phone.as_deref())
                .push_bind(record.fax.as_deref())
                .push_bind(record.email.as_deref())
                .push_bind(record.url.as_deref())
                .push_bind(record.performance_country.as_deref())
                .push_bind(record.performance_state.as_deref())
                .push_bind(record.award_date.as_deref())
                .push_bind(record.award_company_name.as_deref())
                .push_bind(record.award_company_address.as_deref())
                .push_bind(record.award_country.as_deref())
                .push_bind(record.award_state.as_deref())
                .push_bind(record.contract_duration_award.as_deref())
                .push_bind(record.initial_estimated_value.as_deref())
                .push_bind(record.currency_award.as_deref())
                .push_bind(record.final_value.as_deref())
                .push_bind(record.source_of_funds.as_deref())
                .push_bind(record.funding_agency.as_deref())
                .push_bind(record.project_name.as_deref())
                .push_bind(record.cpv_codes.as_deref())
                .push_bind(record.original_link_or_data_id.as_deref())
                .push_bind(record.docs_upload.as_deref());
        });

        let result = query_builder.build().execute(&mut *tx).await?;
        let id = result.last_insert_rowid();
        tx.commit().await?;

        Ok(SubmitOutcome::Inserted { id })
    }

    /// Returns all stored tender records in storage order.
    async fn list_all(&self) -> Result<Vec<TenderRecord>, TenderRepositoryError> {
        let records = sqlx::query_as::<_, TenderRecord>("SELECT * FROM tenders")
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }
}
