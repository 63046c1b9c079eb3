//! Values the remote API documents for its enumerated fields.
//!
//! The sets are closed on the server side but not exhaustively modeled
//! here; the attribute fields stay plain strings and accept anything the
//! server does.

/// Resource type tag carried by every account.
pub const ACCOUNT_TYPE: &str = "accounts";

/// `account_classification` values.
pub mod classification {
    pub const PERSONAL: &str = "Personal";
    pub const BUSINESS: &str = "Business";
}

/// `status` values.
pub mod status {
    pub const PENDING: &str = "pending";
    pub const CONFIRMED: &str = "confirmed";
    pub const FAILED: &str = "failed";
}

/// `base_currency` values (ISO 4217, subset).
pub mod currency {
    pub const EUR: &str = "EUR";
    pub const GBP: &str = "GBP";
    pub const USD: &str = "USD";
}

/// `country` values (ISO 3166-1 alpha-2, subset).
pub mod country {
    pub const BELGIUM: &str = "BE";
    pub const FRANCE: &str = "FR";
    pub const GERMANY: &str = "DE";
    pub const ITALY: &str = "IT";
    pub const UNITED_KINGDOM: &str = "GB";
}

/// `bank_id_code` values (national clearing schemes, subset).
pub mod bank_id_code {
    pub const BELGIUM: &str = "BE";
    pub const FRANCE: &str = "FR";
    pub const GERMANY: &str = "DEBLZ";
    pub const ITALY: &str = "ITNCC";
    pub const UNITED_KINGDOM: &str = "GBDSC";
}
