//! Interaction state for the JobTrackPath landing page.
//!
//! Two independent controllers live here: the screenshot [`carousel`] and the
//! waitlist [`waitlist`] form. Both are plain single-threaded state shared
//! through `Rc<RefCell<_>>` with the browser event loop.

pub mod api;
pub mod carousel;
pub mod error;
pub mod submit;
pub mod waitlist;

pub use api::{interpret_response, ErrorBody, JoinRequest, WaitlistApi};
pub use carousel::{AutoAdvance, Carousel, Slide, AUTO_ADVANCE_INTERVAL};
pub use error::{CarouselError, WaitlistError};
pub use submit::{start_submission, Settled};
pub use waitlist::{Submission, SubmissionStatus, Waitlist};
