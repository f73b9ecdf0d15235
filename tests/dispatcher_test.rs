use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;
use sheets_dispatch::{
    Client, DispatchError, DispatcherConfig, Fields, InvoiceRow, RequestDispatcher, SheetsApi,
};
use std::io::Write;
use tempfile::NamedTempFile;

const FORM: &str = "application/x-www-form-urlencoded;charset=UTF-8";

fn dispatcher_for(server: &MockServer) -> RequestDispatcher {
    RequestDispatcher::new(DispatcherConfig::new(server.url("/exec"))).unwrap()
}

#[tokio::test]
async fn get_clients_returns_body_unchanged() -> Result<()> {
    let server = MockServer::start_async().await;
    let body = json!({"status": "success", "data": [{"id": "1"}]});

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/exec")
                .header("content-type", FORM)
                .body("action=getClients");
            then.status(200).json_body(body.clone());
        })
        .await;

    let response = dispatcher_for(&server).get_clients().await?;

    mock.assert_async().await;
    assert_eq!(response.as_value(), &body);
    assert!(response.is_success());
    assert_eq!(response.message(), None);
    let clients: Vec<Client> = response.records()?;
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].id, Some("1".into()));
    Ok(())
}

#[tokio::test]
async fn delete_client_sends_client_id() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/exec")
                .body("action=deleteClient&clientId=C1");
            then.status(200)
                .json_body(json!({"status": "success", "message": "Client deleted"}));
        })
        .await;

    let response = dispatcher_for(&server).delete_client("C1").await?;

    mock.assert_async().await;
    assert_eq!(response.message(), Some("Client deleted"));
    Ok(())
}

#[tokio::test]
async fn null_fields_are_omitted_from_the_body() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/exec")
                .body("action=saveClient&id=C7&name=Acme+Ltd");
            then.status(200).json_body(json!({"status": "success", "message": "saved"}));
        })
        .await;

    let raw = json!({"id": "C7", "name": "Acme Ltd", "phone": null, "email": null});
    let fields = Fields::from_json_object(raw.as_object().unwrap());
    dispatcher_for(&server).save_client(fields).await?;

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn server_error_is_transport_error_without_retry() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/exec");
            then.status(500).body("Internal Server Error");
        })
        .await;

    let err = dispatcher_for(&server).get_projects().await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.status(), Some(500));
    mock.assert_hits_async(1).await;
    Ok(())
}

#[tokio::test]
async fn invalid_json_is_decode_error() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/exec");
            then.status(200).body("not-json");
        })
        .await;

    let err = dispatcher_for(&server).get_invoices().await.unwrap_err();

    assert!(matches!(err, DispatchError::Decode(_)));
    mock.assert_hits_async(1).await;
    Ok(())
}

#[tokio::test]
async fn backend_error_status_is_returned_not_raised() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/exec");
            then.status(200)
                .json_body(json!({"status": "error", "message": "Sheet locked"}));
        })
        .await;

    let response = dispatcher_for(&server).save_invoice(Fields::new()).await?;

    assert!(!response.is_success());
    assert_eq!(response.message(), Some("Sheet locked"));
    Ok(())
}

#[tokio::test]
async fn repeated_saves_reach_the_backend_each_time() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/exec")
                .body("action=saveProject&id=P1&name=Extension");
            then.status(200).json_body(json!({"status": "success", "message": "saved"}));
        })
        .await;

    let dispatcher = dispatcher_for(&server);
    let project = Fields::new().with("id", "P1").with("name", "Extension");
    dispatcher.save_project(project.clone()).await?;
    dispatcher.save_project(project).await?;

    mock.assert_hits_async(2).await;
    Ok(())
}

#[tokio::test]
async fn concurrent_dispatches_are_independent() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/exec")
                .body("action=saveClient&name=Acme");
            then.status(200).json_body(json!({"status": "success", "message": "saved"}));
        })
        .await;

    let dispatcher = dispatcher_for(&server);
    let fields = Fields::new().with("name", "Acme");
    let (first, second) = tokio::join!(
        dispatcher.save_client(fields.clone()),
        dispatcher.save_client(fields)
    );
    first?;
    second?;

    mock.assert_hits_async(2).await;
    Ok(())
}

#[tokio::test]
async fn invoice_row_is_form_encoded() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/exec")
                .header("content-type", FORM)
                .body("action=saveInvoiceRow&invoiceNumber=ASH-20240101-1200&hrs=8&total=%C2%A3480.00");
            then.status(200).json_body(json!({"status": "success", "message": "row saved"}));
        })
        .await;

    let row = InvoiceRow {
        invoice_number: Some("ASH-20240101-1200".into()),
        hrs: Some(8.into()),
        total: Some("£480.00".into()),
        ..Default::default()
    };
    dispatcher_for(&server)
        .save_invoice_row(Fields::from(&row))
        .await?;

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn dispatcher_loads_endpoint_from_config_file() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/macros/exec")
                .body("action=deleteProject&projectId=P9");
            then.status(200).json_body(json!({"status": "success", "message": "deleted"}));
        })
        .await;

    let mut file = NamedTempFile::new()?;
    writeln!(file, "[endpoint]")?;
    writeln!(file, "base_url = \"{}\"", server.url("/macros/exec"))?;

    let config = DispatcherConfig::from_file(file.path())?;
    let dispatcher = RequestDispatcher::new(config)?;
    let response = dispatcher.delete_project("P9").await?;

    mock.assert_async().await;
    assert_eq!(response.message(), Some("deleted"));
    Ok(())
}
