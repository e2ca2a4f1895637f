use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::OnceLock;

use auth::PasswordHasher;
use auth::Role;
use auth::TokenService;
use chrono::Duration;
use uuid::Uuid;
use vaccination_service::domain::countries::ports::CountryStore;
use vaccination_service::domain::principal::models::AccountStatus;
use vaccination_service::domain::principal::models::StoredCredential;
use vaccination_service::domain::principal::service::AccessService;
use vaccination_service::inbound::http::router::create_router;
use vaccination_service::inbound::http::router::AppState;

pub mod stores;

use self::stores::InMemoryAppointmentStore;
use self::stores::InMemoryCalendarStore;
use self::stores::InMemoryChildStore;
use self::stores::InMemoryCountryStore;
use self::stores::InMemoryCredentialStore;
use self::stores::InMemoryHealthCenterStore;
use self::stores::InMemoryTutorStore;
use self::stores::InMemoryVaccinationStore;
use self::stores::InMemoryVaccineLotStore;
use self::stores::InMemoryVaccineStore;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TEST_PASSWORD: &str = "password123";

// Argon2 hashing is slow; hash the shared test password once per test
// binary instead of once per seeded user.
static PASSWORD_HASH: OnceLock<String> = OnceLock::new();

fn test_password_hash() -> String {
    PASSWORD_HASH
        .get_or_init(|| {
            PasswordHasher::new()
                .hash(TEST_PASSWORD)
                .expect("Failed to hash test password")
        })
        .clone()
}

/// Test application that spawns the real axum app on a random port, wired
/// to in-memory stores.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub tokens: Arc<TokenService>,
    pub countries: Arc<InMemoryCountryStore>,
    /// Seeded usernames mapped to their user ids.
    pub users: HashMap<&'static str, Uuid>,
}

impl TestApp {
    /// Spawn the application with the standard seeded accounts, all using
    /// [`TEST_PASSWORD`]: `admin` (administrador), `director1` (director),
    /// `juanperez` (doctor), `carla` (user), and `pedro` (doctor,
    /// Inactivo).
    pub async fn spawn() -> Self {
        let tokens = Arc::new(
            TokenService::new(TEST_SECRET, Duration::hours(1))
                .expect("Failed to build token service"),
        );

        let credentials = InMemoryCredentialStore::default();
        let mut users = HashMap::new();
        let accounts = [
            ("admin", Role::Administrador, AccountStatus::Activo),
            ("director1", Role::Director, AccountStatus::Activo),
            ("juanperez", Role::Doctor, AccountStatus::Activo),
            ("carla", Role::User, AccountStatus::Activo),
            ("pedro", Role::Doctor, AccountStatus::Inactivo),
        ];
        for (username, role, status) in accounts {
            let user_id = Uuid::new_v4();
            users.insert(username, user_id);
            credentials.insert(StoredCredential {
                user_id,
                username: username.to_string(),
                password_hash: test_password_hash(),
                role,
                status,
            });
        }

        let access = Arc::new(
            AccessService::new(Arc::new(credentials), Arc::clone(&tokens))
                .expect("Failed to build access service"),
        );

        let countries = Arc::new(InMemoryCountryStore::default());

        let state = AppState {
            access,
            tokens: Arc::clone(&tokens),
            countries: Arc::clone(&countries) as Arc<dyn CountryStore>,
            health_centers: Arc::new(InMemoryHealthCenterStore::default()),
            vaccines: Arc::new(InMemoryVaccineStore::default()),
            vaccine_lots: Arc::new(InMemoryVaccineLotStore::default()),
            tutors: Arc::new(InMemoryTutorStore::default()),
            children: Arc::new(InMemoryChildStore::default()),
            vaccinations: Arc::new(InMemoryVaccinationStore::default()),
            appointments: Arc::new(InMemoryAppointmentStore::default()),
            calendars: Arc::new(InMemoryCalendarStore::default()),
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().expect("No local address").port();
        let address = format!("http://127.0.0.1:{}", port);

        let application = create_router(state);
        tokio::spawn(async move {
            axum::serve(
                listener,
                application.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("Server crashed");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            tokens,
            countries,
            users,
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/api/auth/login")
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute login request")
    }

    /// Log in through the API and return the issued token.
    pub async fn login_token(&self, username: &str) -> String {
        let response = self.login(username, TEST_PASSWORD).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: serde_json::Value = response.json().await.expect("Failed to parse login body");
        body["token"]
            .as_str()
            .expect("Login response without token")
            .to_string()
    }

    /// Token minted with an already-elapsed validity window.
    pub fn expired_token(&self, role: Role) -> String {
        TokenService::new(TEST_SECRET, Duration::hours(-2))
            .expect("Failed to build token service")
            .issue(Uuid::new_v4(), "expired", role)
            .expect("Failed to issue token")
            .token
    }

    /// Token signed with a different secret than the server's.
    pub fn foreign_token(&self, role: Role) -> String {
        TokenService::new(b"a-completely-different-signing-secret!!", Duration::hours(1))
            .expect("Failed to build token service")
            .issue(Uuid::new_v4(), "intruder", role)
            .expect("Failed to issue token")
            .token
    }
}
