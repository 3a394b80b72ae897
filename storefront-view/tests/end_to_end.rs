use storefront_api::{app, AppState};
use storefront_client::HttpStorefront;
use storefront_shared::OrderLine;
use storefront_view::{ActionError, Affordance, OrderDraft, Storefront};

async fn serve_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(AppState::in_memory(), &[])).await.unwrap();
    });
    format!("http://{}", addr)
}

fn storefront(base_url: &str) -> Storefront<HttpStorefront> {
    let api = HttpStorefront::new(base_url, None).unwrap();
    Storefront::new(api, OrderDraft::new("123", vec![OrderLine::new("1", 1)]))
}

#[tokio::test]
async fn test_storefront_against_live_backend() {
    let storefront = storefront(&serve_backend().await);

    storefront.mount().await.unwrap();
    let screen = storefront.screen().await;
    assert!(screen.contains("Product A - $29.99"));
    assert!(screen.contains("Product E - $15.99"));
    assert!(!screen.offers(Affordance::CheckOrderStatus));

    storefront.create_order().await.unwrap();
    let screen = storefront.screen().await;
    assert!(screen.contains("Order ID: order_1"));
    assert!(screen.offers(Affordance::CheckOrderStatus));

    storefront.check_order_status().await.unwrap();
    let screen = storefront.screen().await;
    assert!(screen.contains("Order Status: pending"));
    assert!(screen.contains("Total Amount: $29.99"));

    storefront.create_order().await.unwrap();
    let state = storefront.snapshot().await;
    assert_eq!(state.order_id.as_deref(), Some("order_2"));
    assert!(state.current_status().is_none());
}

#[tokio::test]
async fn test_unreachable_backend_shows_banner() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let storefront = storefront(&base_url);
    let err = storefront.mount().await.unwrap_err();

    assert!(matches!(err, ActionError::Fetch(ref e) if e.kind() == "network"));
    assert!(storefront.screen().await.contains("! catalog: Network error"));
}
