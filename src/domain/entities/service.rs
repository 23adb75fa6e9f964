//! Per-service form configuration.

use std::fmt;

use super::form::FieldSpec;
use super::view::ServiceKind;

/// External system a real deployment would call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collaborator {
    /// Card and bill payment gateway.
    PaymentGateway,
    /// Interbank transfer network.
    TransferNetwork,
    /// Government services portal.
    GovernmentPortal,
}

impl Collaborator {
    /// Returns display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PaymentGateway => "MyGateway",
            Self::TransferNetwork => "Bahamas Payments Network",
            Self::GovernmentPortal => "MyGateway Government Portal",
        }
    }

    /// Returns footer copy.
    #[must_use]
    pub const fn tagline(self) -> &'static str {
        match self {
            Self::PaymentGateway => "Powered by MyGateway Integration",
            Self::TransferNetwork => "Settled through the Bahamas Payments Network",
            Self::GovernmentPortal => "Submitted through the MyGateway Government Portal",
        }
    }
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a form-flow screen needs to know about its service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Service tag.
    pub kind: ServiceKind,
    /// Screen title.
    pub title: &'static str,
    /// Short description under the title.
    pub subtitle: &'static str,
    /// Submit control label.
    pub submit_label: &'static str,
    /// Declared fields in display order.
    pub fields: &'static [FieldSpec],
    /// Confirmation copy with `{field}`, `{id}` and `{date}` placeholders.
    pub confirmation: &'static str,
    /// Prefix of synthetic transaction ids.
    pub id_prefix: &'static str,
    /// Collaborator handling the submission.
    pub collaborator: Collaborator,
}

const ISLANDS_AND_OFFICES: &[&str] = &[
    "Nassau - Thompson Blvd",
    "Nassau - Carmichael Rd",
    "Freeport, Grand Bahama",
    "Marsh Harbour, Abaco",
];

static BPL_PAYMENT: ServiceConfig = ServiceConfig {
    kind: ServiceKind::BplPayment,
    title: "BPL Electricity",
    subtitle: "Pay your Bahamas Power & Light bill",
    submit_label: "Pay Bill",
    fields: &[
        FieldSpec::select(
            "bill_type",
            "Bill Type",
            &["Electricity", "Reconnection Fee", "Security Deposit"],
        ),
        FieldSpec::text("account_number", "Account Number", "e.g. 1002003004"),
        FieldSpec::amount("amount", "Amount"),
    ],
    confirmation: "Payment of ${amount} for {bill_type} on BPL account {account_number} was successful.",
    id_prefix: "BPL",
    collaborator: Collaborator::PaymentGateway,
};

static WATER_SEWERAGE: ServiceConfig = ServiceConfig {
    kind: ServiceKind::WaterSewerage,
    title: "Water & Sewerage",
    subtitle: "Pay your Water & Sewerage Corporation bill",
    submit_label: "Pay Bill",
    fields: &[
        FieldSpec::text("account_number", "Account Number", "e.g. WSC-778812"),
        FieldSpec::text("service_address", "Service Address", "Street, settlement"),
        FieldSpec::amount("amount", "Amount"),
    ],
    confirmation: "Payment of ${amount} to Water & Sewerage for account {account_number} was successful.",
    id_prefix: "WSC",
    collaborator: Collaborator::PaymentGateway,
};

static CABLE_PAYMENT: ServiceConfig = ServiceConfig {
    kind: ServiceKind::CablePayment,
    title: "Cable Bahamas",
    subtitle: "Pay for REV TV, internet and ALIV plans",
    submit_label: "Pay Bill",
    fields: &[
        FieldSpec::text("account_number", "Account Number", "e.g. 55012-01"),
        FieldSpec::select(
            "package",
            "Package",
            &["REV TV Basic", "REV TV Premium", "REV Internet", "ALIV Mobile"],
        ),
        FieldSpec::amount("amount", "Amount"),
    ],
    confirmation: "Payment of ${amount} for {package} on account {account_number} was successful.",
    id_prefix: "CBL",
    collaborator: Collaborator::PaymentGateway,
};

static LOCAL_TRANSFER: ServiceConfig = ServiceConfig {
    kind: ServiceKind::LocalTransfer,
    title: "Send Money",
    subtitle: "Instant transfer to any local account",
    submit_label: "Send",
    fields: &[
        FieldSpec::text("recipient_name", "Recipient Name", "Full name"),
        FieldSpec::text(
            "recipient_account",
            "Recipient Account",
            "Phone, email or account number",
        ),
        FieldSpec::amount("amount", "Amount"),
        FieldSpec::text("note", "Note", "What's it for?").optional(),
    ],
    confirmation: "You sent ${amount} to {recipient_name} ({recipient_account}).",
    id_prefix: "TRF",
    collaborator: Collaborator::TransferNetwork,
};

static INTERNATIONAL_TRANSFER: ServiceConfig = ServiceConfig {
    kind: ServiceKind::InternationalTransfer,
    title: "International Transfer",
    subtitle: "Wire funds to a bank overseas",
    submit_label: "Send Wire",
    fields: &[
        FieldSpec::text("recipient_name", "Recipient Name", "As shown on the account"),
        FieldSpec::select(
            "country",
            "Destination Country",
            &["United States", "Canada", "United Kingdom", "Jamaica", "Haiti"],
        ),
        FieldSpec::text("swift_code", "SWIFT / BIC", "e.g. CHASUS33"),
        FieldSpec::text("recipient_account", "Account / IBAN", "Recipient account number"),
        FieldSpec::amount("amount", "Amount (BSD)"),
    ],
    confirmation: "Wire of ${amount} to {recipient_name} in {country} has been initiated.",
    id_prefix: "INT",
    collaborator: Collaborator::TransferNetwork,
};

static BALANCE_HISTORY: ServiceConfig = ServiceConfig {
    kind: ServiceKind::BalanceHistory,
    title: "Balance & History",
    subtitle: "View your balance and request a statement",
    submit_label: "Get Statement",
    fields: &[
        FieldSpec::select("account", "Account", &["Checking", "Savings", "Wallet"]),
        FieldSpec::select(
            "period",
            "Period",
            &["Last 7 days", "Last 30 days", "Last 90 days"],
        ),
    ],
    confirmation: "Your {account} statement for the {period} is ready. Available balance: $2,450.75.",
    id_prefix: "STM",
    collaborator: Collaborator::TransferNetwork,
};

static RECEIVE_MONEY: ServiceConfig = ServiceConfig {
    kind: ServiceKind::ReceiveMoney,
    title: "Request Money",
    subtitle: "Ask someone to pay you",
    submit_label: "Send Request",
    fields: &[
        FieldSpec::text("payer", "Request From", "Phone, email or account number"),
        FieldSpec::amount("amount", "Amount"),
        FieldSpec::text("note", "Note", "What's it for?").optional(),
    ],
    confirmation: "A request for ${amount} was sent to {payer}.",
    id_prefix: "REQ",
    collaborator: Collaborator::TransferNetwork,
};

static DRIVER_LICENSE: ServiceConfig = ServiceConfig {
    kind: ServiceKind::DriverLicenseRenewal,
    title: "Driver's License Renewal",
    subtitle: "Road Traffic Department",
    submit_label: "Submit Renewal",
    fields: &[
        FieldSpec::text("license_number", "License Number", "e.g. D1234567"),
        FieldSpec::date("date_of_birth", "Date of Birth"),
        FieldSpec::select("renewal_period", "Renewal Period", &["1 Year", "3 Years", "5 Years"]),
        FieldSpec::select("pickup_location", "Pickup Location", ISLANDS_AND_OFFICES),
    ],
    confirmation: "Your {renewal_period} renewal for license {license_number} is booked for pickup at {pickup_location}.",
    id_prefix: "DLR",
    collaborator: Collaborator::GovernmentPortal,
};

static POLICE_CERTIFICATE: ServiceConfig = ServiceConfig {
    kind: ServiceKind::PoliceCertificate,
    title: "Police Character Certificate",
    subtitle: "Royal Bahamas Police Force",
    submit_label: "Submit Request",
    fields: &[
        FieldSpec::text("full_name", "Full Name", "As shown on your passport"),
        FieldSpec::text("nib_number", "NIB Number", "National Insurance number"),
        FieldSpec::select(
            "purpose",
            "Purpose",
            &["Employment", "Travel", "Immigration", "Education"],
        ),
        FieldSpec::select("delivery", "Delivery", &["Pickup", "Digital Copy"]),
    ],
    confirmation: "Certificate request for {full_name} ({purpose}) received. Delivery: {delivery}.",
    id_prefix: "PCC",
    collaborator: Collaborator::GovernmentPortal,
};

impl ServiceKind {
    /// Returns the static configuration for this service.
    #[must_use]
    pub fn config(self) -> &'static ServiceConfig {
        match self {
            Self::BplPayment => &BPL_PAYMENT,
            Self::WaterSewerage => &WATER_SEWERAGE,
            Self::CablePayment => &CABLE_PAYMENT,
            Self::LocalTransfer => &LOCAL_TRANSFER,
            Self::InternationalTransfer => &INTERNATIONAL_TRANSFER,
            Self::BalanceHistory => &BALANCE_HISTORY,
            Self::ReceiveMoney => &RECEIVE_MONEY,
            Self::DriverLicenseRenewal => &DRIVER_LICENSE,
            Self::PoliceCertificate => &POLICE_CERTIFICATE,
        }
    }

    /// Returns the dashboard title.
    #[must_use]
    pub fn title(self) -> &'static str {
        self.config().title
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::entities::form::{FieldKind, FormDraft};

    #[test]
    fn test_configs_match_their_kind() {
        for kind in ServiceKind::ALL {
            assert_eq!(kind.config().kind, kind);
        }
    }

    #[test]
    fn test_prefixes_are_unique() {
        let prefixes: HashSet<_> = ServiceKind::ALL
            .iter()
            .map(|k| k.config().id_prefix)
            .collect();
        assert_eq!(prefixes.len(), ServiceKind::ALL.len());
    }

    #[test]
    fn test_field_keys_unique_per_service() {
        for kind in ServiceKind::ALL {
            let fields = kind.config().fields;
            let keys: HashSet<_> = fields.iter().map(|f| f.key).collect();
            assert_eq!(keys.len(), fields.len(), "{kind:?}");
        }
    }

    #[test]
    fn test_every_service_requires_something() {
        for kind in ServiceKind::ALL {
            let fields = kind.config().fields;
            assert!(
                FormDraft::for_fields(fields).first_missing(fields).is_some(),
                "{kind:?}"
            );
        }
    }

    #[test]
    fn test_select_fields_have_options() {
        for kind in ServiceKind::ALL {
            for field in kind.config().fields {
                if let FieldKind::Select(options) = field.kind {
                    assert!(!options.is_empty(), "{kind:?}.{}", field.key);
                }
            }
        }
    }

    #[test]
    fn test_bill_payments_use_gateway() {
        assert_eq!(
            ServiceKind::BplPayment.config().collaborator.tagline(),
            "Powered by MyGateway Integration"
        );
    }
}
