use crate::presentation::serialization::{
    float_as_string, float_as_string_opt, null_as_empty_vec, string_as_float, string_as_float_opt,
};
use chrono::{DateTime, NaiveDate, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a brokerage account
#[derive(Debug, Copy, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    /// Application is being filled in
    Onboarding,
    /// Submission to the clearing firm failed
    SubmissionFailed,
    /// Application submitted
    Submitted,
    /// Account details were updated
    AccountUpdated,
    /// Waiting for approval
    ApprovalPending,
    /// Account is open for trading
    Active,
    /// Application was rejected
    Rejected,
    /// Account is not active
    Inactive,
    /// Further information is needed
    ActionRequired,
    /// Approved, not yet active
    Approved,
    /// Account is disabled
    Disabled,
    /// Account was closed
    AccountClosed,
    /// Status not known to this client version
    #[serde(other)]
    Unknown,
}

/// Kind of account
#[derive(Debug, Copy, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Individual trading account
    Trading,
    /// Custodial account
    Custodial,
    /// Donor advised fund
    DonorAdvised,
    /// Type not known to this client version
    #[serde(other)]
    Unknown,
}

/// Account holder contact details
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct Contact {
    /// Email address
    pub email_address: String,
    /// Phone number
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Street address lines
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub street_address: Vec<String>,
    /// Apartment or unit
    #[serde(default)]
    pub unit: Option<String>,
    /// City
    pub city: String,
    /// State or province
    #[serde(default)]
    pub state: Option<String>,
    /// Postal code
    #[serde(default)]
    pub postal_code: Option<String>,
    /// Country (ISO 3166 alpha-3)
    #[serde(default)]
    pub country: Option<String>,
}

/// Tax identifier type
#[derive(Debug, Copy, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxIdType {
    /// US social security number
    UsaSsn,
    /// Not specified
    NotSpecified,
    /// Type not known to this client version
    #[serde(other)]
    Unknown,
}

/// Origin of the funds deposited into the account
#[derive(Debug, Copy, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundingSource {
    /// Employment income
    EmploymentIncome,
    /// Investments
    Investments,
    /// Inheritance
    Inheritance,
    /// Business income
    BusinessIncome,
    /// Savings
    Savings,
    /// Family
    Family,
    /// Source not known to this client version
    #[serde(other)]
    Unknown,
}

/// Identity information of the account holder
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct Identity {
    /// First name
    pub given_name: String,
    /// Middle name
    #[serde(default)]
    pub middle_name: Option<String>,
    /// Last name
    pub family_name: String,
    /// Date of birth
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Tax identifier, only present on some endpoints
    #[serde(default)]
    pub tax_id: Option<String>,
    /// Tax identifier type
    #[serde(default)]
    pub tax_id_type: Option<TaxIdType>,
    /// Country of citizenship
    #[serde(default)]
    pub country_of_citizenship: Option<String>,
    /// Country of birth
    #[serde(default)]
    pub country_of_birth: Option<String>,
    /// Country of tax residence
    pub country_of_tax_residence: String,
    /// Funding sources declared by the holder
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub funding_source: Vec<FundingSource>,
    /// Visa type for non-citizens
    #[serde(default)]
    pub visa_type: Option<String>,
    /// Visa expiration date
    #[serde(default)]
    pub visa_expiration_date: Option<NaiveDate>,
    /// Departure date from the USA
    #[serde(default)]
    pub date_of_departure_from_usa: Option<NaiveDate>,
    /// Whether the holder is a permanent resident
    #[serde(default)]
    pub permanent_resident: Option<bool>,
    /// Lower bound of annual income
    #[serde(
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub annual_income_min: Option<f64>,
    /// Upper bound of annual income
    #[serde(
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub annual_income_max: Option<f64>,
}

/// Regulatory disclosures of the account holder
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct Disclosures {
    /// Control person of a public company
    #[serde(default)]
    pub is_control_person: bool,
    /// Affiliated with an exchange or FINRA
    #[serde(default)]
    pub is_affiliated_exchange_or_finra: bool,
    /// Politically exposed person
    #[serde(default)]
    pub is_politically_exposed: bool,
    /// Immediate family member is exposed
    #[serde(default)]
    pub immediate_family_exposed: bool,
    /// Account is managed on a discretionary basis
    #[serde(default)]
    pub is_discretionary: Option<bool>,
    /// Employment status
    #[serde(default)]
    pub employment_status: Option<String>,
    /// Employer name
    #[serde(default)]
    pub employer_name: Option<String>,
}

/// Kind of signed agreement
#[derive(Debug, Copy, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgreementType {
    /// Margin agreement
    MarginAgreement,
    /// Account agreement
    AccountAgreement,
    /// Customer agreement
    CustomerAgreement,
    /// Crypto agreement
    CryptoAgreement,
    /// Agreement not known to this client version
    #[serde(other)]
    Unknown,
}

/// An agreement signed by the account holder
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct Agreement {
    /// Which agreement was signed
    pub agreement: AgreementType,
    /// Signature timestamp
    pub signed_at: DateTime<Utc>,
    /// IP address the agreement was signed from
    pub ip_address: String,
    /// Agreement revision
    #[serde(default)]
    pub revision: Option<String>,
}

/// Kind of uploaded document
#[derive(Debug, Copy, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Identity verification
    IdentityVerification,
    /// Address verification
    AddressVerification,
    /// Date of birth verification
    DateOfBirthVerification,
    /// Tax id verification
    TaxIdVerification,
    /// Account approval letter
    AccountApprovalLetter,
    /// Limited trading authorization
    LimitedTradingAuthorization,
    /// W-8BEN form
    W8ben,
    /// Document not known to this client version
    #[serde(other)]
    Unknown,
}

/// A document attached to the account
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct AccountDocument {
    /// Document identifier
    pub id: Uuid,
    /// Document type
    pub document_type: DocumentType,
    /// Document sub type, e.g. `passport`
    #[serde(default)]
    pub document_sub_type: Option<String>,
    /// Location of the document content
    pub content: String,
    /// Upload timestamp
    pub created_at: DateTime<Utc>,
}

/// Person to contact on behalf of the account holder
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct TrustedContact {
    /// First name
    pub given_name: String,
    /// Last name
    pub family_name: String,
    /// Email address
    #[serde(default)]
    pub email_address: Option<String>,
    /// Phone number
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Street address lines
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub street_address: Vec<String>,
    /// City
    #[serde(default)]
    pub city: Option<String>,
    /// State
    #[serde(default)]
    pub state: Option<String>,
    /// Postal code
    #[serde(default)]
    pub postal_code: Option<String>,
    /// Country
    #[serde(default)]
    pub country: Option<String>,
}

/// Trading preferences configured on the account
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct TradingConfigurations {
    /// Day trading buying power check (`entry`, `exit`, `both`)
    #[serde(default)]
    pub dtbp_check: Option<String>,
    /// Trade confirmation emails (`all`, `none`)
    #[serde(default)]
    pub trade_confirm_email: Option<String>,
    /// Suspend trading
    #[serde(default)]
    pub suspend_trade: Option<bool>,
    /// Disallow short selling
    #[serde(default)]
    pub no_shorting: Option<bool>,
    /// Allow fractional trading
    #[serde(default)]
    pub fractional_trading: Option<bool>,
    /// Maximum margin multiplier
    #[serde(
        default,
        deserialize_with = "string_as_float_opt",
        serialize_with = "float_as_string_opt"
    )]
    pub max_margin_multiplier: Option<f64>,
    /// Pattern day trader check
    #[serde(default)]
    pub pdt_check: Option<String>,
}

/// A brokerage account as returned by `GET /v1/accounts/{account_id}`
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct Account {
    /// Account identifier
    pub id: Uuid,
    /// Human readable account number
    pub account_number: String,
    /// Equities status
    pub status: AccountStatus,
    /// Crypto trading status
    #[serde(default)]
    pub crypto_status: Option<AccountStatus>,
    /// Account currency
    pub currency: String,
    /// Equity as of the previous trading day
    #[serde(deserialize_with = "string_as_float", serialize_with = "float_as_string")]
    pub last_equity: f64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Contact details
    #[serde(default)]
    pub contact: Option<Contact>,
    /// Identity details
    #[serde(default)]
    pub identity: Option<Identity>,
    /// Regulatory disclosures
    #[serde(default)]
    pub disclosures: Option<Disclosures>,
    /// Signed agreements
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub agreements: Vec<Agreement>,
    /// Attached documents
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub documents: Vec<AccountDocument>,
    /// Trusted contact
    #[serde(default)]
    pub trusted_contact: Option<TrustedContact>,
    /// Account type
    #[serde(default)]
    pub account_type: Option<AccountType>,
    /// Trading configuration
    #[serde(default)]
    pub trading_configurations: Option<TradingConfigurations>,
}

impl Account {
    /// True when the account can trade equities
    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }
}
