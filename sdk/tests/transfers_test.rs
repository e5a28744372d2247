mod common;

use {
    common::*,
    fasapay_sdk::{
        CurrencyCode,
        DetailQuery,
        FasapayError,
        FormEncoding,
        HistoryFilter,
        SortOrder,
        TransactionType,
        TransferLineItem,
        ValidationError,
    },
    mockito::Matcher,
};

const TRANSFER_SUCCESS: &str = include_str!("fixtures/transfer/success.xml");
const TRANSFER_ERROR: &str = include_str!("fixtures/transfer/error.xml");
const HISTORY_SUCCESS: &str = include_str!("fixtures/history/success.xml");
const HISTORY_ERROR: &str = include_str!("fixtures/history/error.xml");
const DETAILS_SUCCESS: &str = include_str!("fixtures/details/success.xml");
const DETAILS_ERROR: &str = include_str!("fixtures/details/error.xml");
const SERVER_ERROR: &str = include_str!("fixtures/errors/500.html");

const TRANSFER_PAYLOAD: &str = r#"<transfer id="123"><to>FP89680</to><amount>1000</amount><currency>IDR</currency><note>standart operation</note></transfer>"#;
const HISTORY_PAYLOAD: &str = "<history><start_date>2011-07-01</start_date><end_date>2011-07-09</end_date><type>transfer</type><order_by>date</order_by><order>DESC</order><page>3</page><page_size>5</page_size></history>";
const DETAILS_PAYLOAD: &str = "<detail>foo</detail><detail><ref>foo</ref></detail>";

fn transfers() -> Vec<TransferLineItem> {
    vec![TransferLineItem::new("FP89680", 1000.0, CurrencyCode::Idr)
        .with_id("123")
        .with_note("standart operation")]
}

fn history_filter() -> HistoryFilter {
    HistoryFilter {
        start_date: Some("2011-07-01".to_string()),
        end_date: Some("2011-07-09".to_string()),
        transaction_type: Some(TransactionType::Transfer),
        order_by: Some("date".to_string()),
        order: Some(SortOrder::Desc),
        page: Some(3),
        page_size: Some(5),
    }
}

fn details() -> Vec<DetailQuery> {
    vec![
        DetailQuery::batch_number("foo"),
        DetailQuery::filter(Some("foo".to_string()), None),
    ]
}

#[tokio::test]
async fn test_create_transfer_success() {
    let (mut server, client) = setup_mock_server(FormEncoding::PercentEncoded).await;
    let mock = mock_call(&mut server, TRANSFER_PAYLOAD, 200, TRANSFER_SUCCESS).await;

    let reply = client
        .transfers()
        .create_transfer(transfers(), stub_attributes())
        .await
        .unwrap();

    mock.assert_async().await;

    assert!(reply.response.is_success());
    assert_eq!(reply.response.id(), "1311059195");
    assert_eq!(reply.response.date_time(), "2011-07-19T14:06:35+07:00");

    let transfer = &reply.result().transfers[0];
    assert_eq!(transfer.mode, "transfer");
    assert_eq!(transfer.code, 203);
    assert_eq!(transfer.batchnumber, "TR2011071917277");
    assert_eq!(transfer.date, "2011-07-19");
    assert_eq!(transfer.time, "14:06:35");
    assert_eq!(transfer.from, "FP12049");
    assert_eq!(transfer.to, "FP89680");
    assert_eq!(transfer.fee, 100.0);
    assert_eq!(transfer.amount, 1000.0);
    assert_eq!(transfer.total, 1100.0);
    assert_eq!(transfer.fee_mode, "FiS");
    assert_eq!(transfer.currency, "IDR");
    assert_eq!(transfer.note, "standart operation");
    assert_eq!(transfer.status, "FINISH");
    assert_eq!(transfer.transaction_type, "Keluar");
    assert_eq!(transfer.balance, 2815832.0);
    assert_eq!(transfer.method, "xml_api");
    assert_eq!(reply.raw.body(), TRANSFER_SUCCESS.as_bytes());
}

#[tokio::test]
async fn test_create_transfer_raw_form_body() {
    let (mut server, client) = setup_mock_server(FormEncoding::Raw).await;
    let mock = server
        .mock("POST", API_PATH)
        .match_body(Matcher::Exact(format!("req={}", stub_request(TRANSFER_PAYLOAD))))
        .with_body(TRANSFER_SUCCESS)
        .create_async()
        .await;

    let reply = client
        .transfers()
        .create_transfer(transfers(), stub_attributes())
        .await
        .unwrap();

    mock.assert_async().await;

    assert_eq!(reply.result().transfers.len(), 1);
}

#[tokio::test]
async fn test_create_transfer_domain_error() {
    let (mut server, client) = setup_mock_server(FormEncoding::PercentEncoded).await;
    let mock = mock_call(&mut server, TRANSFER_PAYLOAD, 200, TRANSFER_ERROR).await;

    let err = client
        .transfers()
        .create_transfer(transfers(), stub_attributes())
        .await
        .unwrap_err();

    mock.assert_async().await;

    assert_eq!(err.to_string(), "NOT ACCEPTABLE TRANSFER");

    let errors = err.errors().unwrap();
    assert_eq!(errors.id.as_deref(), Some("tid3"));
    assert_eq!(errors.mode, "transfer");
    assert_eq!(errors.code, 40600);
    assert_eq!(errors.data.len(), 3);

    let codes: Vec<_> = errors.data.iter().filter_map(|data| data.code).collect();
    assert_eq!(codes, vec![40605, 40601, 40602]);
    assert_eq!(errors.data[1].attribute.as_deref(), Some("to"));
    assert_eq!(
        errors.data[2].message,
        "Jumlah melebihi batas yg diijinkan."
    );
}

#[tokio::test]
async fn test_create_transfer_non_xml_error() {
    let (mut server, client) = setup_mock_server(FormEncoding::PercentEncoded).await;
    let mock = mock_call(&mut server, TRANSFER_PAYLOAD, 500, SERVER_ERROR).await;

    let err = client
        .transfers()
        .create_transfer(transfers(), stub_attributes())
        .await
        .unwrap_err();

    mock.assert_async().await;

    assert!(matches!(
        err,
        FasapayError::Decode {
            operation: "CreateTransfer",
            ..
        }
    ));
    assert_eq!(err.raw_response().unwrap().text(), SERVER_ERROR);
}

#[tokio::test]
async fn test_create_transfer_invalid_item_never_sent() {
    let (mut server, client) = setup_mock_server(FormEncoding::PercentEncoded).await;
    let mock = server
        .mock("POST", API_PATH)
        .expect(0)
        .create_async()
        .await;

    let mut items = transfers();
    items.push(TransferLineItem {
        to: "FP00002".to_string(),
        amount: 10.0,
        ..Default::default()
    });
    items.push(TransferLineItem {
        currency: Some(CurrencyCode::Usd),
        amount: 10.0,
        ..Default::default()
    });

    let err = client
        .transfers()
        .create_transfer(items, stub_attributes())
        .await
        .unwrap_err();

    mock.assert_async().await;

    assert!(matches!(
        err,
        FasapayError::Validation(ValidationError::EmptyParameter("currency"))
    ));
    assert_eq!(err.to_string(), r#"parameter "currency" is empty"#);
    assert!(err.raw_response().is_none());
}

#[tokio::test]
async fn test_get_history_success() {
    let (mut server, client) = setup_mock_server(FormEncoding::PercentEncoded).await;
    let mock = mock_call(&mut server, HISTORY_PAYLOAD, 200, HISTORY_SUCCESS).await;

    let reply = client
        .transfers()
        .get_history(history_filter(), stub_attributes())
        .await
        .unwrap();

    mock.assert_async().await;

    assert!(reply.response.is_success());
    assert_eq!(reply.response.id(), "1312342474");
    assert_eq!(reply.response.date_time(), "2011-08-03T10:34:34+07:00");

    let history = reply.result().history.as_ref().unwrap();
    let page = history.page.unwrap();
    assert_eq!(page.total_item, 579);
    assert_eq!(page.page_count, 58);
    assert_eq!(page.current_page, 0);

    assert_eq!(history.details.len(), 2);
    assert_eq!(history.details[0].batchnumber, "TR2011072685119");
    assert_eq!(history.details[0].datetime, "2011-07-26 15:44:35");
    assert_eq!(history.details[0].transaction_type, "Keluar");
    assert_eq!(history.details[0].to, "FP10500");
    assert_eq!(history.details[0].from, "FP12049");
    assert_eq!(history.details[0].amount, 11160.0);
    assert_eq!(
        history.details[0].note,
        "Pembayaran untuk pembelian Liberty Reserve"
    );
    assert_eq!(history.details[1].batchnumber, "TR2011072521135");
    assert_eq!(history.details[1].amount, 1000.0);
    assert_eq!(history.details[1].status, "FINISH");
}

#[tokio::test]
async fn test_get_history_domain_error() {
    let (mut server, client) = setup_mock_server(FormEncoding::PercentEncoded).await;
    let mock = mock_call(&mut server, HISTORY_PAYLOAD, 200, HISTORY_ERROR).await;

    let err = client
        .transfers()
        .get_history(history_filter(), stub_attributes())
        .await
        .unwrap_err();

    mock.assert_async().await;

    let errors = err.errors().unwrap();
    assert_eq!(err.to_string(), "UNEXPECTED ERROR");
    assert_eq!(errors.mode, "history");
    assert_eq!(errors.code, 40701);
    assert_eq!(errors.data[0].message, "INVALID DATE FORMAT (yyyy-mm-dd)");
    assert_eq!(
        errors.data[0].detail.as_deref(),
        Some("INVALID DATE FORMAT (yyyy-mm-dd) foo")
    );
}

#[tokio::test]
async fn test_get_details_success() {
    let (mut server, client) = setup_mock_server(FormEncoding::PercentEncoded).await;
    let mock = mock_call(&mut server, DETAILS_PAYLOAD, 200, DETAILS_SUCCESS).await;

    let reply = client
        .transfers()
        .get_details(details(), stub_attributes())
        .await
        .unwrap();

    mock.assert_async().await;

    let detail = &reply.result().details[0];
    assert_eq!(detail.mode, "detail");
    assert_eq!(detail.code, 210);
    assert_eq!(detail.batchnumber, "TR2012092791234");
    assert_eq!(detail.date, "2012-10-20");
    assert_eq!(detail.time, "10:09:36");
    assert_eq!(detail.from, "FP00001");
    assert_eq!(detail.to, "FP00002");
    assert_eq!(detail.amount, 1000.0);
    assert_eq!(detail.total, 1100.0);
    assert_eq!(detail.currency, "IDR");
    assert_eq!(detail.note, "Payment for something");
    assert_eq!(detail.status, "FINISH");
    assert_eq!(detail.fee, 100.0);
    assert_eq!(detail.transaction_type, "Transfer Out");
    assert_eq!(detail.method, "api_xml");
    assert_eq!(detail.fee_mode, "FiS");
    assert!(detail.is_finished());
}

#[tokio::test]
async fn test_get_details_domain_error() {
    let (mut server, client) = setup_mock_server(FormEncoding::PercentEncoded).await;
    let mock = mock_call(&mut server, DETAILS_PAYLOAD, 200, DETAILS_ERROR).await;

    let err = client
        .transfers()
        .get_details(details(), stub_attributes())
        .await
        .unwrap_err();

    mock.assert_async().await;

    let errors = err.errors().unwrap();
    assert_eq!(errors.mode, "detail");
    assert_eq!(errors.code, 40701);
    assert_eq!(errors.data[0].message, "TRANSACTION NOT FOUND");
    assert_eq!(
        errors.data[0].detail.as_deref(),
        Some("BATCHNUMBER TR2012100291308 NOT FOUND")
    );
}
