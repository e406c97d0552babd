//! Referral and redemption form records
//!
//! Each form owns one record. Inputs write through the field enums, which
//! keeps every update a plain function of (record, field, value).

use crate::{CoreResult, SubmitError};
use serde::{Deserialize, Serialize};
use std::fmt;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// A form record that can be submitted and then cleared
pub trait FormRequest: Clone {
    /// The record a form shows after a successful submission
    fn cleared(&self) -> Self;
}

/// Details of a prospective customer, submitted by an existing participant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralRequest {
    pub referrer_name: String,
    pub referrer_phone: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub address: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferralField {
    ReferrerName,
    ReferrerPhone,
    CustomerName,
    CustomerPhone,
    Address,
    Notes,
}

impl ReferralField {
    pub const REQUIRED: [ReferralField; 5] = [
        ReferralField::ReferrerName,
        ReferralField::ReferrerPhone,
        ReferralField::CustomerName,
        ReferralField::CustomerPhone,
        ReferralField::Address,
    ];

    /// Form element id, also the JSON field name
    pub fn id(self) -> &'static str {
        match self {
            ReferralField::ReferrerName => "referrerName",
            ReferralField::ReferrerPhone => "referrerPhone",
            ReferralField::CustomerName => "customerName",
            ReferralField::CustomerPhone => "customerPhone",
            ReferralField::Address => "address",
            ReferralField::Notes => "notes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReferralField::ReferrerName => "Your Name",
            ReferralField::ReferrerPhone => "Your Mobile Number",
            ReferralField::CustomerName => "Customer Name",
            ReferralField::CustomerPhone => "Customer Mobile",
            ReferralField::Address => "Address / Area",
            ReferralField::Notes => "Notes",
        }
    }

    pub fn get(self, request: &ReferralRequest) -> &str {
        match self {
            ReferralField::ReferrerName => &request.referrer_name,
            ReferralField::ReferrerPhone => &request.referrer_phone,
            ReferralField::CustomerName => &request.customer_name,
            ReferralField::CustomerPhone => &request.customer_phone,
            ReferralField::Address => &request.address,
            ReferralField::Notes => &request.notes,
        }
    }

    pub fn apply(self, request: &mut ReferralRequest, value: String) {
        let slot = match self {
            ReferralField::ReferrerName => &mut request.referrer_name,
            ReferralField::ReferrerPhone => &mut request.referrer_phone,
            ReferralField::CustomerName => &mut request.customer_name,
            ReferralField::CustomerPhone => &mut request.customer_phone,
            ReferralField::Address => &mut request.address,
            ReferralField::Notes => &mut request.notes,
        };
        *slot = value;
    }
}

impl ReferralRequest {
    /// Labels of required fields that are still blank, in form order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        ReferralField::REQUIRED
            .into_iter()
            .filter(|field| is_blank(field.get(self)))
            .map(ReferralField::label)
            .collect()
    }

    pub fn validate(&self) -> CoreResult<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(SubmitError::MissingFields(missing))
        }
    }
}

impl FormRequest for ReferralRequest {
    fn cleared(&self) -> Self {
        Self::default()
    }
}

/// Channel a redeemed reward is paid out through
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutMethod {
    #[default]
    Upi,
    Bank,
}

impl PayoutMethod {
    pub const ALL: [PayoutMethod; 2] = [PayoutMethod::Upi, PayoutMethod::Bank];

    /// Radio input value
    pub fn value(self) -> &'static str {
        match self {
            PayoutMethod::Upi => "upi",
            PayoutMethod::Bank => "bank",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.value() == value)
    }

    pub fn title(self) -> &'static str {
        match self {
            PayoutMethod::Upi => "UPI Transfer",
            PayoutMethod::Bank => "Bank Transfer",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            PayoutMethod::Upi => "Instant transfer to your UPI ID",
            PayoutMethod::Bank => "Transfer to your bank account (1-2 business days)",
        }
    }

    /// Short name used on the claim button
    pub fn short_name(self) -> &'static str {
        match self {
            PayoutMethod::Upi => "UPI",
            PayoutMethod::Bank => "Bank Transfer",
        }
    }

    /// Where the money lands, as worded in the confirmation
    pub fn destination(self) -> &'static str {
        match self {
            PayoutMethod::Upi => "UPI ID",
            PayoutMethod::Bank => "bank account",
        }
    }

    /// Fields this method needs on top of the coupon code
    pub fn payout_fields(self) -> &'static [RedemptionField] {
        match self {
            PayoutMethod::Upi => &[RedemptionField::UpiId],
            PayoutMethod::Bank => &[
                RedemptionField::AccountHolderName,
                RedemptionField::AccountNumber,
                RedemptionField::IfscCode,
            ],
        }
    }
}

impl fmt::Display for PayoutMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Coupon redemption with payout details. Values typed for the inactive
/// payout method are kept but ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionRequest {
    pub coupon_code: String,
    pub payout_method: PayoutMethod,
    #[serde(default)]
    pub upi_id: String,
    #[serde(default)]
    pub account_holder_name: String,
    #[serde(default)]
    pub account_number: String,
    #[serde(default)]
    pub ifsc_code: String,
}

/// Typed values are cleared, the chosen payout method stays selected
impl FormRequest for RedemptionRequest {
    fn cleared(&self) -> Self {
        Self {
            payout_method: self.payout_method,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedemptionField {
    CouponCode,
    UpiId,
    AccountHolderName,
    AccountNumber,
    IfscCode,
}

impl RedemptionField {
    pub fn id(self) -> &'static str {
        match self {
            RedemptionField::CouponCode => "couponCode",
            RedemptionField::UpiId => "upiId",
            RedemptionField::AccountHolderName => "accountHolderName",
            RedemptionField::AccountNumber => "accountNumber",
            RedemptionField::IfscCode => "ifscCode",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RedemptionField::CouponCode => "Coupon Code",
            RedemptionField::UpiId => "UPI ID",
            RedemptionField::AccountHolderName => "Account Holder Name",
            RedemptionField::AccountNumber => "Account Number",
            RedemptionField::IfscCode => "IFSC Code",
        }
    }

    pub fn get(self, request: &RedemptionRequest) -> &str {
        match self {
            RedemptionField::CouponCode => &request.coupon_code,
            RedemptionField::UpiId => &request.upi_id,
            RedemptionField::AccountHolderName => &request.account_holder_name,
            RedemptionField::AccountNumber => &request.account_number,
            RedemptionField::IfscCode => &request.ifsc_code,
        }
    }

    pub fn apply(self, request: &mut RedemptionRequest, value: String) {
        let slot = match self {
            RedemptionField::CouponCode => &mut request.coupon_code,
            RedemptionField::UpiId => &mut request.upi_id,
            RedemptionField::AccountHolderName => &mut request.account_holder_name,
            RedemptionField::AccountNumber => &mut request.account_number,
            RedemptionField::IfscCode => &mut request.ifsc_code,
        };
        *slot = value;
    }
}

impl RedemptionRequest {
    /// Switch payout method; the other method's values stay in place
    pub fn set_payout_method(&mut self, method: PayoutMethod) {
        self.payout_method = method;
    }

    /// Fields required under the current payout method, in form order
    pub fn required_fields(&self) -> Vec<RedemptionField> {
        std::iter::once(RedemptionField::CouponCode)
            .chain(self.payout_method.payout_fields().iter().copied())
            .collect()
    }

    pub fn is_required(&self, field: RedemptionField) -> bool {
        self.required_fields().contains(&field)
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.required_fields()
            .into_iter()
            .filter(|field| is_blank(field.get(self)))
            .map(RedemptionField::label)
            .collect()
    }

    pub fn validate(&self) -> CoreResult<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(SubmitError::MissingFields(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_referral() -> ReferralRequest {
        ReferralRequest {
            referrer_name: "Asha".into(),
            referrer_phone: "9999999999".into(),
            customer_name: "Ravi".into(),
            customer_phone: "8888888888".into(),
            address: "MG Road".into(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_referral_field_updates() {
        let mut request = ReferralRequest::default();
        ReferralField::CustomerName.apply(&mut request, "Ravi".into());
        ReferralField::Notes.apply(&mut request, "Roof faces south".into());

        assert_eq!(request.customer_name, "Ravi");
        assert_eq!(request.notes, "Roof faces south");
        assert_eq!(ReferralField::CustomerName.get(&request), "Ravi");
        assert!(request.referrer_name.is_empty());
    }

    #[test]
    fn test_referral_notes_are_optional() {
        assert_eq!(filled_referral().validate(), Ok(()));
    }

    #[test]
    fn test_referral_reports_blank_fields() {
        let mut request = filled_referral();
        request.referrer_phone = "   ".into();
        request.address.clear();

        assert_eq!(
            request.validate(),
            Err(SubmitError::MissingFields(vec!["Your Mobile Number", "Address / Area"]))
        );
        assert_eq!(ReferralRequest::default().missing_fields().len(), 5);
    }

    #[test]
    fn test_upi_requires_coupon_and_upi_id() {
        let request = RedemptionRequest::default();
        assert_eq!(request.payout_method, PayoutMethod::Upi);
        assert_eq!(
            request.required_fields(),
            vec![RedemptionField::CouponCode, RedemptionField::UpiId]
        );

        let request = RedemptionRequest {
            coupon_code: "SOLAR123XYZ".into(),
            upi_id: "asha@upi".into(),
            ..Default::default()
        };
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn test_bank_requires_account_details() {
        let mut request = RedemptionRequest {
            coupon_code: "SOLAR123XYZ".into(),
            upi_id: "asha@upi".into(),
            ..Default::default()
        };
        request.set_payout_method(PayoutMethod::Bank);

        assert!(!request.is_required(RedemptionField::UpiId));
        assert_eq!(
            request.validate(),
            Err(SubmitError::MissingFields(vec![
                "Account Holder Name",
                "Account Number",
                "IFSC Code"
            ]))
        );
    }

    #[test]
    fn test_switching_method_keeps_other_values() {
        let mut request = RedemptionRequest::default();
        RedemptionField::UpiId.apply(&mut request, "ravi@okbank".into());
        request.set_payout_method(PayoutMethod::Bank);
        RedemptionField::IfscCode.apply(&mut request, "SBIN0001234".into());
        request.set_payout_method(PayoutMethod::Upi);

        assert_eq!(request.upi_id, "ravi@okbank");
        assert_eq!(request.ifsc_code, "SBIN0001234");
        assert!(!request.is_required(RedemptionField::IfscCode));
        assert_eq!(request.missing_fields(), vec!["Coupon Code"]);
    }

    #[test]
    fn test_cleared_redemption_keeps_payout_method() {
        let request = RedemptionRequest {
            coupon_code: "SOLAR123XYZ".into(),
            payout_method: PayoutMethod::Bank,
            upi_id: "ravi@okbank".into(),
            account_holder_name: "Ravi Kumar".into(),
            account_number: "1234567890".into(),
            ifsc_code: "SBIN0001234".into(),
        };

        let cleared = request.cleared();
        assert_eq!(cleared.payout_method, PayoutMethod::Bank);
        assert_eq!(
            cleared,
            RedemptionRequest {
                payout_method: PayoutMethod::Bank,
                ..Default::default()
            }
        );
        assert_eq!(RedemptionRequest::default().cleared(), RedemptionRequest::default());
    }

    #[test]
    fn test_cleared_referral_is_empty() {
        let mut request = filled_referral();
        request.notes = "Roof faces south".into();
        assert_eq!(request.cleared(), ReferralRequest::default());
    }

    #[test]
    fn test_payout_method_values() {
        assert_eq!(PayoutMethod::from_value("bank"), Some(PayoutMethod::Bank));
        assert_eq!(PayoutMethod::from_value("upi"), Some(PayoutMethod::Upi));
        assert_eq!(PayoutMethod::from_value("cash"), None);
        assert_eq!(PayoutMethod::Bank.to_string(), "bank");
    }

    #[test]
    fn test_requests_use_form_field_names_on_the_wire() {
        let json = serde_json::to_value(&filled_referral()).unwrap();
        assert_eq!(json["referrerName"], "Asha");
        assert_eq!(json["customerPhone"], "8888888888");

        let redemption: RedemptionRequest = serde_json::from_str(
            r#"{"couponCode":"SOLAR123XYZ","payoutMethod":"bank","accountHolderName":"Ravi Kumar","accountNumber":"1234567890","ifscCode":"SBIN0001234"}"#,
        )
        .unwrap();
        assert_eq!(redemption.payout_method, PayoutMethod::Bank);
        assert_eq!(redemption.upi_id, "");
        assert_eq!(redemption.validate(), Ok(()));
    }
}
