use person_gateway::{
    clients::PersonServiceClient,
    create_api_routes,
    models::{CreatePersonRequest, Person},
    services::FixedPersonId,
};
use std::sync::Arc;

async fn serve() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_api_routes(Arc::new(FixedPersonId::default()));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn client_creates_jane_doe() {
    let base_url = serve().await;
    let client = PersonServiceClient::new(base_url).unwrap();

    let response = client
        .create_person(&CreatePersonRequest {
            person: Person {
                name: "Jane Doe".to_string(),
                age: 40,
            },
        })
        .await
        .unwrap();

    assert_eq!(response.person_id, 1234);
}

#[tokio::test]
async fn api_key_header_is_ignored_by_the_service() {
    let base_url = serve().await;
    let client = PersonServiceClient::new(format!("{}/", base_url))
        .unwrap()
        .with_api_key("test-key");

    let response = client
        .create_person(&CreatePersonRequest {
            person: Person {
                name: "John Roe".to_string(),
                age: 7,
            },
        })
        .await
        .unwrap();

    assert_eq!(response.person_id, 1234);
}
