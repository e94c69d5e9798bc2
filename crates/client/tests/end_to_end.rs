use apigateway::{handler::AppRouter, state::AppState};
use chrono::Duration;
use client::{
    ClientError, HttpApiClient, Language, MemorySessionStore, PricelistApi, Session,
    error::NETWORK_ERROR_MESSAGE,
    views::{
        EditOutcome, LoginState, LoginView, MountOutcome, Navigation, PriceListView, TermsView,
    },
};
use shared::{
    abstract_trait::{DynHashing, DynJwtService, UserCommandServiceTrait},
    config::{Hashing, JwtConfig},
    di::Repositories,
    domain::{product_field::ProductField, requests::CreateUserRequest},
    service::UserService,
    test_support::{
        InMemoryProductRepository, InMemoryUserRepository, sample_products, sample_texts,
    },
};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Serves the real router over in-memory storage on an ephemeral port.
async fn spawn_server(token_ttl: Duration) -> String {
    let users = Arc::new(InMemoryUserRepository::default());
    let hash = Arc::new(Hashing::new(4)) as DynHashing;

    UserService::new(hash.clone(), users.clone(), users.clone())
        .create_user(&CreateUserRequest {
            username: "alice".into(),
            password: "secret".into(),
            full_name: "Alice Andersson".into(),
            location: "Stockholm".into(),
        })
        .await
        .unwrap();

    let products = Arc::new(InMemoryProductRepository::with_products(sample_products()));
    let repositories = Repositories {
        user_query: users,
        product_query: products.clone(),
        product_command: products,
        text_query: Arc::new(sample_texts()),
    };
    let jwt = Arc::new(JwtConfig::new("e2e-secret", token_ttl)) as DynJwtService;

    let state = AppState::from_repositories(repositories, hash, jwt)
        .await
        .unwrap();
    let app = AppRouter::build(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await });

    format!("http://{addr}")
}

async fn empty_session() -> Session {
    Session::load(Arc::new(MemorySessionStore::default()))
        .await
        .unwrap()
}

#[tokio::test]
async fn login_list_and_edit_against_the_real_router() {
    let api = HttpApiClient::new(&spawn_server(Duration::minutes(5)).await).unwrap();
    let mut session = empty_session().await;

    let mut login = LoginView::new(Language::En);
    let next = login.submit(&api, &mut session, "alice", "secret").await;

    assert_eq!(next, Some(Navigation::PriceList));
    assert!(matches!(login.state(), LoginState::Authenticated(user) if user.username == "alice"));
    assert_eq!(session.user().map(|u| u.full_name.as_str()), Some("Alice Andersson"));

    let mut view = PriceListView::new();
    assert_eq!(
        view.mount(&api, &mut session).await.unwrap(),
        MountOutcome::Loaded
    );
    let ids: Vec<i32> = view.rows().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    let outcome = view
        .edit(&api, &mut session, 3, ProductField::InStock, "42")
        .await
        .unwrap();
    assert!(matches!(&outcome, EditOutcome::Saved(p) if p.in_stock == 42));
    assert_eq!(view.rows()[2].in_stock, 42);

    let outcome = view
        .edit(&api, &mut session, 1, ProductField::Price, "150")
        .await
        .unwrap();
    assert!(matches!(outcome, EditOutcome::Saved(_)));

    let mut reloaded = PriceListView::new();
    reloaded.mount(&api, &mut session).await.unwrap();
    assert_eq!(reloaded.rows()[0].price, "150");
    assert_eq!(reloaded.rows()[2].in_stock, 42);
}

#[tokio::test]
async fn wrong_password_surfaces_the_server_message() {
    let api = HttpApiClient::new(&spawn_server(Duration::minutes(5)).await).unwrap();
    let mut session = empty_session().await;

    let mut login = LoginView::new(Language::En);
    let next = login.submit(&api, &mut session, "alice", "nope").await;

    assert_eq!(next, None);
    assert_eq!(
        login.state(),
        &LoginState::Error("Invalid credentials".to_string())
    );
    assert!(!session.is_signed_in());
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpApiClient::new(&format!("http://{addr}")).unwrap();
    let mut session = empty_session().await;

    let mut login = LoginView::new(Language::En);
    login.submit(&api, &mut session, "alice", "secret").await;

    assert_eq!(
        login.state(),
        &LoginState::Error(NETWORK_ERROR_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn price_list_from_a_vanished_server_is_a_network_error() {
    let api = HttpApiClient::new(&spawn_server(Duration::minutes(5)).await).unwrap();
    let mut session = empty_session().await;
    LoginView::new(Language::En)
        .submit(&api, &mut session, "alice", "secret")
        .await;
    assert!(session.is_signed_in());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let offline = HttpApiClient::new(&format!("http://{addr}")).unwrap();

    let outcome = PriceListView::new()
        .mount(&offline, &mut session)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        MountOutcome::Failed(NETWORK_ERROR_MESSAGE.to_string())
    );
    assert!(session.is_signed_in());
}

#[tokio::test]
async fn expired_session_sends_the_user_back_to_login() {
    let api = HttpApiClient::new(&spawn_server(Duration::minutes(-10)).await).unwrap();
    let mut session = empty_session().await;

    let mut login = LoginView::new(Language::En);
    assert_eq!(
        login.submit(&api, &mut session, "alice", "secret").await,
        Some(Navigation::PriceList)
    );

    let next = PriceListView::new().mount(&api, &mut session).await.unwrap();

    assert_eq!(next, MountOutcome::Redirect(Navigation::Login));
    assert!(!session.is_signed_in());
}

#[tokio::test]
async fn invalid_edit_is_reported_and_not_applied() {
    let api = HttpApiClient::new(&spawn_server(Duration::minutes(5)).await).unwrap();
    let mut session = empty_session().await;
    LoginView::new(Language::En)
        .submit(&api, &mut session, "alice", "secret")
        .await;

    let mut view = PriceListView::new();
    view.mount(&api, &mut session).await.unwrap();

    let outcome = view
        .edit(&api, &mut session, 9999, ProductField::Price, "1")
        .await
        .unwrap();
    assert_eq!(outcome, EditOutcome::Rejected("Product not found".to_string()));

    let outcome = view
        .edit(&api, &mut session, 2, ProductField::InStock, "plenty")
        .await
        .unwrap();
    assert!(matches!(outcome, EditOutcome::Rejected(_)));
    assert_eq!(view.rows()[1].in_stock, 40);
}

#[tokio::test]
async fn terms_are_localized_with_english_fallbacks() {
    let base = spawn_server(Duration::minutes(5)).await;
    let api = HttpApiClient::new(&base).unwrap();

    let terms = TermsView::load(&api, Language::Sv).await;
    assert_eq!(terms.text("title"), "Villkor");
    assert_eq!(terms.text("section4Title"), "Limitation of Liability");

    let mut terms = terms;
    terms.toggle_language(&api).await;
    assert_eq!(terms.language(), Language::En);
    assert_eq!(terms.text("title"), "Terms and Conditions");
}

#[tokio::test]
async fn terms_fall_back_entirely_when_the_server_is_down() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpApiClient::new(&format!("http://{addr}")).unwrap();
    let terms = TermsView::load(&api, Language::Sv).await;

    assert_eq!(terms.text("title"), "Terms and Conditions");
    assert_eq!(terms.text("backButton"), "Go Back");
}

#[tokio::test]
async fn products_without_a_token_are_unauthorized() {
    let api = HttpApiClient::new(&spawn_server(Duration::minutes(5)).await).unwrap();

    let err = api.products("garbage").await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized(_)));
}
