use httpmock::prelude::*;
use postmark_client::{Client, Error};
use serde_json::json;

const SERVER_TOKEN: &str = "server-test-token";
const ACCOUNT_TOKEN: &str = "account-test-token";

fn client(server: &MockServer) -> Client {
    Client::builder()
        .server_token(SERVER_TOKEN)
        .account_token(ACCOUNT_TOKEN)
        .base_url(server.base_url())
        .build()
        .unwrap()
}

#[tokio::test]
async fn bounces_maps_options_to_query() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/bounces")
                .header("x-postmark-server-token", SERVER_TOKEN)
                .query_param("count", "25")
                .query_param("offset", "0")
                .query_param("type", "HardBounce");
            then.status(200)
                .json_body(json!({"TotalCount": 1, "Bounces": [{"ID": 692560173}]}));
        })
        .await;

    let bounces = client(&server)
        .bounces(&[("count", "25"), ("offset", "0"), ("type", "HardBounce")])
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(bounces["Bounces"][0]["ID"], 692560173);
}

#[tokio::test]
async fn bounce_lookups_use_sibling_paths() {
    let server = MockServer::start_async().await;
    let stats = server
        .mock_async(|when, then| {
            when.method(GET).path("/deliverystats");
            then.status(200).json_body(json!({"InactiveMails": 3}));
        })
        .await;
    let dump = server
        .mock_async(|when, then| {
            when.method(GET).path("/bounces/42/dump");
            then.status(200).json_body(json!({"Body": "raw source"}));
        })
        .await;
    let activate = server
        .mock_async(|when, then| {
            when.method(PUT).path("/bounces/42/activate");
            then.status(200)
                .json_body(json!({"Message": "OK", "Bounce": {"ID": 42, "Inactive": false}}));
        })
        .await;

    let client = client(&server);
    assert_eq!(client.delivery_stats().await.unwrap()["InactiveMails"], 3);
    assert_eq!(client.bounce_dump(42).await.unwrap()["Body"], "raw source");
    assert_eq!(
        client.activate_bounce(42).await.unwrap()["Bounce"]["Inactive"],
        false
    );

    stats.assert_async().await;
    dump.assert_async().await;
    activate.assert_async().await;
}

#[tokio::test]
async fn outbound_message_details() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/messages/outbound/07311c54-0687-4ab9-b034-b54b5bad88ba/details");
            then.status(200).json_body(json!({"Status": "Sent"}));
        })
        .await;

    let details = client(&server)
        .outbound_message_details("07311c54-0687-4ab9-b034-b54b5bad88ba")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(details["Status"], "Sent");
}

#[tokio::test]
async fn create_sender_posts_body_with_account_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/senders")
                .header("x-postmark-account-token", ACCOUNT_TOKEN)
                .json_body(json!({"FromEmail": "john@example.com", "Name": "John Smith"}));
            then.status(200)
                .json_body(json!({"ID": 1, "Confirmed": false}));
        })
        .await;

    let sender = client(&server)
        .create_sender(&json!({"FromEmail": "john@example.com", "Name": "John Smith"}))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(sender["ID"], 1);
}

#[tokio::test]
async fn delete_server_reports_provider_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/servers/7");
            then.status(422).json_body(json!({
                "ErrorCode": 602,
                "Message": "Server not found."
            }));
        })
        .await;

    match client(&server).delete_server(7).await {
        Err(Error::Api { code, message, .. }) => {
            assert_eq!(code, 602);
            assert_eq!(message, "Server not found.");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn edit_current_server_uses_server_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/server")
                .header("x-postmark-server-token", SERVER_TOKEN)
                .json_body(json!({"Color": "red"}));
            then.status(200).json_body(json!({"Name": "Staging", "Color": "red"}));
        })
        .await;

    let updated = client(&server)
        .edit_current_server(&json!({"Color": "red"}))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(updated["Color"], "red");
}

#[tokio::test]
async fn account_endpoints_need_account_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/senders");
            then.status(200).json_body(json!({"SenderSignatures": []}));
        })
        .await;

    let client = Client::builder()
        .server_token(SERVER_TOKEN)
        .base_url(server.base_url())
        .build()
        .unwrap();

    assert!(matches!(
        client.senders(&[("count", "10")]).await,
        Err(Error::MissingAccountToken)
    ));
    assert!(matches!(
        client.servers(&[("count", "10")]).await,
        Err(Error::MissingAccountToken)
    ));
    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn remaining_server_token_endpoints_hit_their_paths() {
    let server = MockServer::start_async().await;
    let inbound = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/messages/inbound")
                .header("x-postmark-server-token", SERVER_TOKEN)
                .query_param("count", "10");
            then.status(200).json_body(json!({"TotalCount": 0, "InboundMessages": []}));
        })
        .await;
    let inbound_details = server
        .mock_async(|when, then| {
            when.method(GET).path("/messages/inbound/abc-123/details");
            then.status(200).json_body(json!({"Status": "Processed"}));
        })
        .await;
    let tags = server
        .mock_async(|when, then| {
            when.method(GET).path("/bounces/tags");
            then.status(200).json_body(json!(["welcome", "receipt"]));
        })
        .await;

    let client = client(&server);
    assert_eq!(
        client.inbound_messages(&[("count", "10")]).await.unwrap()["TotalCount"],
        0
    );
    assert_eq!(
        client.inbound_message_details("abc-123").await.unwrap()["Status"],
        "Processed"
    );
    assert_eq!(client.bounce_tags().await.unwrap()[1], "receipt");

    inbound.assert_async().await;
    inbound_details.assert_async().await;
    tags.assert_async().await;
}

#[tokio::test]
async fn sender_management_endpoints_hit_their_paths() {
    let server = MockServer::start_async().await;
    let edit = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/senders/5")
                .header("x-postmark-account-token", ACCOUNT_TOKEN)
                .json_body(json!({"Name": "Jane Smith"}));
            then.status(200).json_body(json!({"ID": 5, "Name": "Jane Smith"}));
        })
        .await;
    let resend = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/senders/5/resend")
                .header("x-postmark-account-token", ACCOUNT_TOKEN);
            then.status(200)
                .json_body(json!({"ErrorCode": 0, "Message": "Confirmation email sent."}));
        })
        .await;
    let spf = server
        .mock_async(|when, then| {
            when.method(POST).path("/senders/5/verifyspf");
            then.status(200).json_body(json!({"ID": 5, "SPFVerified": true}));
        })
        .await;
    let dkim = server
        .mock_async(|when, then| {
            when.method(POST).path("/senders/5/requestnewdkim");
            then.status(200).json_body(json!({"ErrorCode": 0, "Message": "OK"}));
        })
        .await;

    let client = client(&server);
    assert_eq!(
        client
            .edit_sender(5, &json!({"Name": "Jane Smith"}))
            .await
            .unwrap()["Name"],
        "Jane Smith"
    );
    assert_eq!(
        client.resend_sender_confirmation(5).await.unwrap()["Message"],
        "Confirmation email sent."
    );
    assert_eq!(client.verify_sender_spf(5).await.unwrap()["SPFVerified"], true);
    assert_eq!(client.request_new_sender_dkim(5).await.unwrap()["ErrorCode"], 0);

    edit.assert_async().await;
    resend.assert_async().await;
    spf.assert_async().await;
    dkim.assert_async().await;
}

#[tokio::test]
async fn server_management_endpoints_hit_their_paths() {
    let server = MockServer::start_async().await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/servers")
                .header("x-postmark-account-token", ACCOUNT_TOKEN)
                .json_body(json!({"Name": "Production", "Color": "blue"}));
            then.status(200).json_body(json!({"ID": 9, "Name": "Production"}));
        })
        .await;
    let edit = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/servers/9")
                .header("x-postmark-account-token", ACCOUNT_TOKEN)
                .json_body(json!({"Color": "green"}));
            then.status(200).json_body(json!({"ID": 9, "Color": "green"}));
        })
        .await;

    let client = client(&server);
    let created = client
        .create_server(&json!({"Name": "Production", "Color": "blue"}))
        .await
        .unwrap();
    assert_eq!(created["ID"], 9);
    let edited = client
        .edit_server(9, &json!({"Color": "green"}))
        .await
        .unwrap();
    assert_eq!(edited["Color"], "green");

    create.assert_async().await;
    edit.assert_async().await;
}
