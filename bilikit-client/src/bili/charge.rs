//! Charge (paid support) endpoints
//!
//! Amounts are in B coins and must lie in `2..=9999`. Out-of-range amounts
//! are rejected before any request is sent.

use std::ops::RangeInclusive;

use tracing::info;

use super::client::BiliClient;
use crate::error::ClientError;
use crate::transport::{params, Method, Params, Requester};
use crate::types::{ChargeBpResult, ChargeCreateQrCode, ChargeQrCodeStatus, ChargeSource};

pub const CHARGE_BP_RANGE: RangeInclusive<u32> = 2..=9999;

fn charge_form(
    bp_num: u32,
    prior: bool,
    up_mid: i64,
    source: ChargeSource,
    oid: i64,
) -> Result<Params, ClientError> {
    if !CHARGE_BP_RANGE.contains(&bp_num) {
        return Err(ClientError::InvalidArgument(format!(
            "charge amount {bp_num} outside {}..={}",
            CHARGE_BP_RANGE.start(),
            CHARGE_BP_RANGE.end()
        )));
    }
    Ok(params([
        ("bp_num", bp_num.to_string()),
        ("is_bp_remains_prior", prior.to_string()),
        ("up_mid", up_mid.to_string()),
        ("otype", source.as_str().to_string()),
        ("oid", oid.to_string()),
    ]))
}

impl BiliClient {
    /// Charge `up_mid` from the B coin balance. `oid` is the user's mid for
    /// [`ChargeSource::Up`] and the aid for [`ChargeSource::Archive`].
    pub async fn charge_trade_create_bp(
        &self,
        bp_num: u32,
        up_mid: i64,
        source: ChargeSource,
        oid: i64,
    ) -> Result<ChargeBpResult, ClientError> {
        let form = charge_form(bp_num, true, up_mid, source, oid)?;
        let result: ChargeBpResult = self
            .raw_parse(
                &self.endpoints().api,
                "x/ugcpay/web/v2/trade/elec/pay/quick",
                Method::Post,
                &form,
            )
            .await?
            .decode()?;
        info!(up_mid, bp_num, status = result.status, "charge submitted");
        Ok(result)
    }

    /// Leave a message on a finished charge order.
    pub async fn charge_set_message(&self, order_no: &str, message: &str) -> Result<(), ClientError> {
        let form = params([
            ("order_id", order_no.to_string()),
            ("message", message.to_string()),
        ]);
        self.raw_parse(
            &self.endpoints().api,
            "x/ugcpay/trade/elec/message",
            Method::Post,
            &form,
        )
        .await?;
        Ok(())
    }

    /// Start a charge paid through a third-party QR code. `prior` spends the
    /// B coin balance first.
    pub async fn charge_trade_create_qr_code(
        &self,
        bp_num: u32,
        prior: bool,
        up_mid: i64,
        source: ChargeSource,
        oid: i64,
    ) -> Result<ChargeCreateQrCode, ClientError> {
        let form = charge_form(bp_num, prior, up_mid, source, oid)?;
        self.raw_parse(
            &self.endpoints().api,
            "x/ugcpay/web/v2/trade/elec/pay/qr_code/create",
            Method::Post,
            &form,
        )
        .await?
        .decode()
    }

    /// Payment state of a QR charge.
    pub async fn charge_trade_check_qr_code(
        &self,
        qr_token: &str,
    ) -> Result<ChargeQrCodeStatus, ClientError> {
        self.raw_parse(
            &self.endpoints().api,
            "x/ugcpay/trade/elec/pay/order/status",
            Method::Get,
            &params([("qr_token", qr_token)]),
        )
        .await?
        .decode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_form() {
        let form = charge_form(5, false, 122_541, ChargeSource::Archive, 170_001).unwrap();
        assert_eq!(form["bp_num"], "5");
        assert_eq!(form["is_bp_remains_prior"], "false");
        assert_eq!(form["otype"], "archive");
        assert_eq!(form["oid"], "170001");
    }

    #[test]
    fn test_charge_form_range() {
        assert!(charge_form(2, true, 1, ChargeSource::Up, 1).is_ok());
        assert!(charge_form(9999, true, 1, ChargeSource::Up, 1).is_ok());
        for bad in [0, 1, 10_000] {
            let err = charge_form(bad, true, 1, ChargeSource::Up, 1).unwrap_err();
            assert!(matches!(err, ClientError::InvalidArgument(_)));
        }
    }
}
