use login_client::configuration;
use login_client::controller::LoginController;
use login_client::form::CredentialForm;
use login_client::navigation::{Notice, Notifier, Route, Router};
use login_client::session_store::SessionStore;
use login_client::telemetry;
use once_cell::sync::Lazy;
use secrecy::{ExposeSecret, Secret};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // Set `TEST_LOG=1` to see the logs of a test run
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        telemetry::init_subscriber(subscriber).expect("Failed to init tracing");
    } else {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        telemetry::init_subscriber(subscriber).expect("Failed to init tracing");
    }
});

/// Router double: remembers every navigation request.
#[derive(Default)]
pub struct RecordingRouter {
    routes: Mutex<Vec<Route>>,
}

impl RecordingRouter {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Router for RecordingRouter {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

/// Notifier double: remembers every notice shown to the user.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}

pub type TestController = LoginController<Arc<RecordingRouter>, Arc<RecordingNotifier>>;

pub struct TestApp {
    pub mock_server: MockServer,
    pub controller: TestController,
    pub router: Arc<RecordingRouter>,
    pub notifier: Arc<RecordingNotifier>,
    pub session_file: PathBuf,
    // Keeps the session directory alive for the duration of the test
    _session_dir: TempDir,
}

impl TestApp {
    /// Wire a controller against a fresh mock endpoint and an empty,
    /// file-backed session.
    pub async fn spawn_app() -> TestApp {
        Lazy::force(&TRACING);

        let mock_server = MockServer::start().await;
        let session_dir = tempfile::tempdir().expect("Failed to create session dir");

        let mut config = configuration::get_configuration().expect("Failed to read configuration");
        config.auth_client.base_url = mock_server.uri();
        config.session.file_path = session_dir.path().join("session.json");

        let router = Arc::new(RecordingRouter::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let controller = LoginController::new(
            config
                .auth_client
                .client()
                .expect("Failed to build auth client"),
            config.session.store().expect("Failed to open session store"),
            Arc::clone(&router),
            Arc::clone(&notifier),
        );

        TestApp {
            mock_server,
            controller,
            router,
            notifier,
            session_file: config.session.file_path,
            _session_dir: session_dir,
        }
    }

    /// Answer every login request with `status` and `body`.
    pub async fn mock_login(&self, status: u16, body: serde_json::Value) {
        Mock::given(path("/auth/login"))
            .and(method("POST"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.mock_server)
            .await;
    }

    pub fn stored_token(&self) -> Option<String> {
        self.controller
            .session()
            .read()
            .map(|token| token.expose_secret().clone())
    }

    /// What a later process would find on disk.
    pub fn reloaded_token(&self) -> Option<String> {
        SessionStore::init(&self.session_file, self.controller.session().key())
            .expect("Failed to reload session store")
            .read()
            .map(|token| token.expose_secret().clone())
    }

    /// JSON bodies of every request the endpoint received, in order.
    pub async fn login_bodies(&self) -> Vec<serde_json::Value> {
        self.mock_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|request| serde_json::from_slice(&request.body).unwrap())
            .collect()
    }
}

pub fn filled_form(identifier: &str, password: &str) -> CredentialForm {
    let mut form = CredentialForm::new();
    form.set_identifier(identifier);
    form.set_password(Secret::new(password.to_string()));
    form
}
