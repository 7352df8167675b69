use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};

use crate::api::WaitlistApi;
use crate::waitlist::{SubmissionStatus, Waitlist};

/// What happened to a submission once its request finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// The outcome was written back; carries the resulting status.
    Applied(SubmissionStatus),
    /// The form was torn down while the request was in flight.
    Discarded,
}

impl Settled {
    pub fn is_applied(&self) -> bool {
        matches!(self, Settled::Applied(_))
    }
}

/// Starts one waitlist submission for `state`.
///
/// The move to `Submitting` happens before this returns, so a second call
/// made while the first request is still pending gets `None` and sends
/// nothing. The returned future performs the single request and must be
/// spawned on the local executor. It keeps only a weak handle to the form.
pub fn start_submission<A>(
    state: &Rc<RefCell<Waitlist>>,
    api: Rc<A>,
) -> Option<LocalBoxFuture<'static, Settled>>
where
    A: WaitlistApi + ?Sized + 'static,
{
    let request = state.borrow_mut().begin_submit()?;
    let form = Rc::downgrade(state);
    tracing::debug!("Submitting waitlist signup");

    Some(
        async move {
            let outcome = api.join(&request).await;
            let Some(form) = form.upgrade() else {
                tracing::debug!("Waitlist form gone before the response arrived");
                return Settled::Discarded;
            };
            let mut form = form.borrow_mut();
            form.finish_submit(outcome);
            Settled::Applied(form.status())
        }
        .boxed_local(),
    )
}
