use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use jobtrackpath_core::error::GENERIC_FAILURE_MESSAGE;
use jobtrackpath_core::waitlist::SUCCESS_MESSAGE;
use jobtrackpath_core::{
    interpret_response, start_submission, JoinRequest, Settled, SubmissionStatus, Waitlist,
    WaitlistApi, WaitlistError,
};

/// Stand-in for the waitlist endpoint: answers every request with a fixed
/// status and body, or fails before any response exists.
enum Endpoint {
    Responds { status: u16, body: &'static str },
    Unreachable,
}

struct SimulatedEndpoint {
    endpoint: Endpoint,
    received: RefCell<Vec<JoinRequest>>,
    calls: Cell<usize>,
}

impl SimulatedEndpoint {
    fn new(endpoint: Endpoint) -> Rc<Self> {
        Rc::new(Self {
            endpoint,
            received: RefCell::new(Vec::new()),
            calls: Cell::new(0),
        })
    }
}

#[async_trait(?Send)]
impl WaitlistApi for SimulatedEndpoint {
    async fn join(&self, request: &JoinRequest) -> Result<(), WaitlistError> {
        self.calls.set(self.calls.get() + 1);
        self.received.borrow_mut().push(request.clone());
        match self.endpoint {
            Endpoint::Responds { status, body } => interpret_response(status, body),
            Endpoint::Unreachable => Err(WaitlistError::Transport(
                "error sending request: tcp connect error: Connection refused (os error 111)"
                    .to_string(),
            )),
        }
    }
}

fn form(email: &str) -> Rc<RefCell<Waitlist>> {
    let form = Rc::new(RefCell::new(Waitlist::new()));
    form.borrow_mut().update_email(email);
    form
}

#[tokio::test]
async fn accepted_signup_reaches_succeeded() {
    let endpoint = SimulatedEndpoint::new(Endpoint::Responds {
        status: 200,
        body: r#"{"message":"ok"}"#,
    });
    let form = form("grace@example.com");

    let settled = start_submission(&form, endpoint.clone()).unwrap().await;

    assert_eq!(settled, Settled::Applied(SubmissionStatus::Succeeded));
    assert_eq!(form.borrow().email(), "");
    assert_eq!(form.borrow().message(), SUCCESS_MESSAGE);
    assert_eq!(
        endpoint.received.borrow().as_slice(),
        &[JoinRequest {
            email: "grace@example.com".to_string()
        }]
    );
}

#[tokio::test]
async fn duplicate_email_shows_server_message() {
    let endpoint = SimulatedEndpoint::new(Endpoint::Responds {
        status: 400,
        body: r#"{"error": "Email already registered"}"#,
    });
    let form = form("grace@example.com");

    start_submission(&form, endpoint.clone()).unwrap().await;

    let form = form.borrow();
    assert_eq!(form.status(), SubmissionStatus::Failed);
    assert_eq!(form.message(), "Email already registered");
    assert_eq!(form.email(), "grace@example.com");
}

#[tokio::test]
async fn unreachable_endpoint_shows_generic_message() {
    let endpoint = SimulatedEndpoint::new(Endpoint::Unreachable);
    let form = form("grace@example.com");

    start_submission(&form, endpoint.clone()).unwrap().await;

    let form = form.borrow();
    assert_eq!(form.status(), SubmissionStatus::Failed);
    assert_eq!(form.message(), GENERIC_FAILURE_MESSAGE);
    assert!(!form.message().is_empty());
    assert!(!form.message().contains("Connection refused"));
    assert_eq!(form.email(), "grace@example.com");
}

#[tokio::test]
async fn html_error_page_counts_as_generic_failure() {
    let endpoint = SimulatedEndpoint::new(Endpoint::Responds {
        status: 502,
        body: "<html><body>Bad Gateway</body></html>",
    });
    let form = form("grace@example.com");

    start_submission(&form, endpoint.clone()).unwrap().await;

    assert_eq!(form.borrow().message(), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn joined_form_ignores_further_submits() {
    let endpoint = SimulatedEndpoint::new(Endpoint::Responds {
        status: 201,
        body: "{}",
    });
    let form = form("grace@example.com");

    start_submission(&form, endpoint.clone()).unwrap().await;
    form.borrow_mut().update_email("grace@example.org");

    assert!(start_submission(&form, endpoint.clone()).is_none());
    assert_eq!(endpoint.calls.get(), 1);
    assert_eq!(form.borrow().status(), SubmissionStatus::Succeeded);
}
