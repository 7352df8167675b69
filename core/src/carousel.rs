use std::cell::RefCell;
use std::future::Future;
use std::rc::Weak;
use std::time::Duration;

use futures::future::{abortable, AbortHandle, FutureExt, LocalBoxFuture};
use futures::{Stream, StreamExt};

use crate::error::CarouselError;

/// How often the showcase moves on by itself.
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub image: String,
    pub alt: String,
}

impl Slide {
    pub fn new(image: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            alt: alt.into(),
        }
    }
}

/// A fixed, non-empty run of slides and the index currently on screen.
///
/// `current_index` is always inside `[0, len)`; every mutation wraps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    slides: Vec<Slide>,
    current: usize,
}

impl Carousel {
    pub fn new(first: Slide, rest: impl IntoIterator<Item = Slide>) -> Self {
        let mut slides = vec![first];
        slides.extend(rest);
        Self { slides, current: 0 }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Never true: a carousel always holds a slide.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current]
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    /// Timer step. Identical to [`Carousel::next`].
    pub fn tick(&mut self) {
        self.next();
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.slides.len();
    }

    pub fn previous(&mut self) {
        let len = self.slides.len();
        self.current = (self.current + len - 1) % len;
    }

    /// Jumps straight to `index`. Returns `false` and leaves the carousel
    /// untouched when the index is out of range.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.slides.len() {
            tracing::warn!(
                "Ignoring jump to slide {} of a {}-slide carousel",
                index,
                self.slides.len()
            );
            return false;
        }
        self.current = index;
        true
    }
}

impl TryFrom<Vec<Slide>> for Carousel {
    type Error = CarouselError;

    fn try_from(slides: Vec<Slide>) -> Result<Self, Self::Error> {
        let mut slides = slides.into_iter();
        let first = slides.next().ok_or(CarouselError::NoSlides)?;
        Ok(Self::new(first, slides))
    }
}

/// Guard for a running auto-advance task. Dropping it cancels the task.
#[derive(Debug)]
pub struct AutoAdvance {
    handle: AbortHandle,
}

impl AutoAdvance {
    /// Builds the auto-advance task over `ticks`.
    ///
    /// The returned future must be spawned on the local executor. It only
    /// holds a weak reference to the carousel, so it stops on its own once
    /// the carousel is gone, and it stops immediately once the guard drops.
    /// `on_advance` receives the new index after every tick.
    pub fn start<S, F>(
        ticks: S,
        carousel: Weak<RefCell<Carousel>>,
        on_advance: F,
    ) -> (Self, LocalBoxFuture<'static, ()>)
    where
        S: Stream + 'static,
        F: Fn(usize) + 'static,
    {
        let (task, handle) = abortable(advance_on(ticks, carousel, on_advance));
        let task = task
            .map(|result| {
                if result.is_err() {
                    tracing::debug!("Carousel auto-advance cancelled");
                }
            })
            .boxed_local();
        (Self { handle }, task)
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn advance_on<S, F>(
    ticks: S,
    carousel: Weak<RefCell<Carousel>>,
    on_advance: F,
) -> impl Future<Output = ()>
where
    S: Stream,
    F: Fn(usize),
{
    async move {
        futures::pin_mut!(ticks);
        while ticks.next().await.is_some() {
            let Some(carousel) = carousel.upgrade() else {
                break;
            };
            let index = {
                let mut carousel = carousel.borrow_mut();
                carousel.tick();
                carousel.current_index()
            };
            on_advance(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc;
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn carousel_of(n: usize) -> Carousel {
        let slides = (0..n)
            .map(|i| Slide::new(format!("/images/{i}.png"), format!("Slide {i}")))
            .collect::<Vec<_>>();
        Carousel::try_from(slides).unwrap()
    }

    #[test]
    fn starts_at_first_slide() {
        let carousel = carousel_of(3);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.current_slide().alt, "Slide 0");
        assert!(carousel.is_active(0));
        assert!(!carousel.is_active(1));
    }

    #[test]
    fn empty_slide_list_is_rejected() {
        assert_eq!(Carousel::try_from(Vec::new()), Err(CarouselError::NoSlides));
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut carousel = carousel_of(4);
        carousel.previous();
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn single_slide_never_moves() {
        let mut carousel = carousel_of(1);
        carousel.tick();
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let mut carousel = carousel_of(2);
        assert!(carousel.go_to(1));
        assert!(!carousel.go_to(2));
        assert_eq!(carousel.current_index(), 1);
    }

    proptest! {
        #[test]
        fn ticks_visit_every_index_once_per_cycle(n in 1usize..32, start in 0usize..32) {
            let mut carousel = carousel_of(n);
            carousel.go_to(start % n);
            let origin = carousel.current_index();
            let mut seen = vec![0u32; n];
            for _ in 0..n {
                carousel.tick();
                prop_assert!(carousel.current_index() < n);
                seen[carousel.current_index()] += 1;
            }
            prop_assert!(seen.iter().all(|&count| count == 1));
            prop_assert_eq!(carousel.current_index(), origin);
        }

        #[test]
        fn next_matches_tick(n in 1usize..32, start in 0usize..32, steps in 0usize..64) {
            let mut ticked = carousel_of(n);
            ticked.go_to(start % n);
            let mut stepped = ticked.clone();
            for _ in 0..steps {
                ticked.tick();
                stepped.next();
                prop_assert_eq!(ticked.current_index(), stepped.current_index());
            }
        }

        #[test]
        fn previous_undoes_next(n in 1usize..32, start in 0usize..32) {
            let mut carousel = carousel_of(n);
            carousel.go_to(start % n);
            let before = carousel.current_index();
            carousel.next();
            carousel.previous();
            prop_assert_eq!(carousel.current_index(), before);
        }
    }

    #[tokio::test]
    async fn auto_advance_ticks_until_guard_drops() {
        let carousel = Rc::new(RefCell::new(carousel_of(3)));
        let notified = Rc::new(Cell::new(0usize));
        let (tx, rx) = mpsc::unbounded::<()>();

        let (guard, mut task) = AutoAdvance::start(rx, Rc::downgrade(&carousel), {
            let notified = notified.clone();
            move |_| notified.set(notified.get() + 1)
        });

        tx.unbounded_send(()).unwrap();
        tx.unbounded_send(()).unwrap();
        assert!(futures::poll!(&mut task).is_pending());
        assert_eq!(carousel.borrow().current_index(), 2);
        assert_eq!(notified.get(), 2);

        drop(guard);
        tx.unbounded_send(()).unwrap();
        assert!(futures::poll!(&mut task).is_ready());
        assert_eq!(carousel.borrow().current_index(), 2);
        assert_eq!(notified.get(), 2);
    }

    #[tokio::test]
    async fn auto_advance_stops_once_carousel_is_gone() {
        let carousel = Rc::new(RefCell::new(carousel_of(2)));
        let (tx, rx) = mpsc::unbounded::<()>();
        let (guard, mut task) = AutoAdvance::start(rx, Rc::downgrade(&carousel), |_| {});

        drop(carousel);
        tx.unbounded_send(()).unwrap();
        assert!(futures::poll!(&mut task).is_ready());
        assert!(!guard.is_cancelled());
    }

    #[tokio::test]
    async fn manual_navigation_interleaves_with_ticks() {
        let carousel = Rc::new(RefCell::new(carousel_of(3)));
        let (tx, rx) = mpsc::unbounded::<()>();
        let (_guard, mut task) = AutoAdvance::start(rx, Rc::downgrade(&carousel), |_| {});

        carousel.borrow_mut().previous();
        tx.unbounded_send(()).unwrap();
        assert!(futures::poll!(&mut task).is_pending());
        assert_eq!(carousel.borrow().current_index(), 0);

        carousel.borrow_mut().go_to(1);
        tx.unbounded_send(()).unwrap();
        assert!(futures::poll!(&mut task).is_pending());
        assert_eq!(carousel.borrow().current_index(), 2);
    }
}
