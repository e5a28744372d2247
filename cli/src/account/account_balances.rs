use {
    crate::{
        client::report_api_error,
        command_title,
        display::{format_amount, json_output},
        item,
        loading,
        prelude::*,
    },
    fasapay_sdk::CurrencyCode,
};

/// Fetch the merchant balance for each of `currencies`.
pub(crate) async fn get_balances(
    client: &FasapayClient,
    currencies: Vec<CurrencyCode>,
) -> AnyResult<(), FasapayCliError> {
    let names = currencies
        .iter()
        .map(CurrencyCode::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    command_title!("Fetching balances for {names}");

    let handle = loading!("Querying FasaPay...");

    let reply = match client.accounts().get_balances(&currencies, None).await {
        Ok(reply) => {
            handle.success();

            reply
        }
        Err(e) => {
            handle.error();

            return Err(report_api_error(e));
        }
    };

    if let Some(balances) = &reply.result().balances {
        for currency in &currencies {
            let amount = match currency {
                CurrencyCode::Idr => Some(balances.idr),
                CurrencyCode::Usd => Some(balances.usd),
                CurrencyCode::Jpy => balances.jpy,
            };

            if let Some(amount) = amount {
                item!(
                    "{currency}: {amount}",
                    currency = currency.to_string().bold(),
                    amount = format_amount(amount, currency.as_ref())
                );
            }
        }
    }

    json_output(&reply.response)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use {super::*, assert_matches::assert_matches, fasapay_sdk::FormEncoding, mockito::Server};

    #[tokio::test]
    async fn test_get_balances() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .with_body(
                r#"<fasa_response id="1" date_time="2013-01-01T10:58:43+07:00"><balance><IDR>19092587.45</IDR><USD>3987.31</USD></balance></fasa_response>"#,
            )
            .create_async()
            .await;

        let client = FasapayClient::builder(Config::sandbox("key", "secret"))
            .with_endpoint(server.url().parse().unwrap())
            .with_form_encoding(FormEncoding::PercentEncoded)
            .build()
            .unwrap();

        let result = get_balances(&client, vec![CurrencyCode::Idr, CurrencyCode::Usd]).await;

        mock.assert_async().await;
        assert_matches!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_get_balances_domain_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .with_body(
                r#"<fasa_response id="1" date_time="now"><errors mode="balance" code="40900"><data><message>BALANCE ERROR</message></data></errors></fasa_response>"#,
            )
            .create_async()
            .await;

        let client = FasapayClient::builder(Config::sandbox("key", "secret"))
            .with_endpoint(server.url().parse().unwrap())
            .build()
            .unwrap();

        let result = get_balances(&client, vec![CurrencyCode::Idr]).await;

        mock.assert_async().await;
        assert_matches!(
            result,
            Err(FasapayCliError::Fasapay(e)) if e.to_string() == "BALANCE REQUEST ERROR"
        );
    }
}
