use std::rc::Rc;

use gloo_timers::future::IntervalStream;
use jobtrackpath_core::{AutoAdvance, Carousel};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;

const CAROUSEL_CSS: &str = r#"
    .carousel {
        position: relative;
        max-width: 64rem;
        margin: 4rem auto 2rem;
    }
    .carousel-stage {
        position: relative;
        height: 500px;
    }
    .carousel-slide {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        opacity: 0;
        transition: opacity 1s;
    }
    .carousel-slide.active {
        opacity: 1;
    }
    .carousel-slide img {
        max-height: 100%;
        width: auto;
        object-fit: contain;
        animation: float 6s ease-in-out infinite;
    }
    .carousel-dots {
        display: flex;
        justify-content: center;
        gap: 0.5rem;
        margin-top: 1.5rem;
    }
    .carousel-dot {
        height: 0.5rem;
        width: 0.5rem;
        border: none;
        border-radius: 9999px;
        background: #4b5563;
        transition: all 0.3s;
        cursor: pointer;
    }
    .carousel-dot.active {
        width: 2rem;
        background: #31B19E;
    }
    .carousel-arrow {
        position: absolute;
        top: 50%;
        width: 3rem;
        height: 3rem;
        border-radius: 9999px;
        border: 1px solid #374151;
        background: rgba(31, 41, 55, 0.8);
        color: #fff;
        cursor: pointer;
        transform: translateY(-50%);
    }
    .carousel-arrow.prev { left: -1rem; }
    .carousel-arrow.next { right: -1rem; }
    @keyframes float {
        0%, 100% { transform: translateY(0px); }
        50% { transform: translateY(-20px); }
    }
    @media (max-width: 768px) {
        .carousel-stage {
            height: 400px;
        }
    }
"#;

fn slide_class(active: bool) -> Classes {
    classes!("carousel-slide", active.then_some("active"))
}

fn dot_class(active: bool) -> Classes {
    classes!("carousel-dot", active.then_some("active"))
}

fn dot_label(index: usize) -> String {
    format!("Go to slide {}", index + 1)
}

/// Product screenshots, advancing on a timer and on the arrow/dot controls.
#[function_component]
pub fn ProductCarousel() -> Html {
    let carousel = use_mut_ref(config::showcase_carousel);
    let rerender = use_force_update();

    // Auto-advance for as long as the component is mounted
    {
        let carousel = carousel.clone();
        let rerender = rerender.clone();
        use_effect_with_deps(
            move |_| {
                let ticks = IntervalStream::new(config::carousel_interval_ms());
                let (auto_advance, task) =
                    AutoAdvance::start(ticks, Rc::downgrade(&carousel), move |_| {
                        rerender.force_update()
                    });
                spawn_local(task);
                move || drop(auto_advance)
            },
            (),
        );
    }

    let navigate = |step: fn(&mut Carousel)| {
        let carousel = carousel.clone();
        let rerender = rerender.clone();
        Callback::from(move |_: MouseEvent| {
            step(&mut carousel.borrow_mut());
            rerender.force_update();
        })
    };
    let on_previous = navigate(Carousel::previous);
    let on_next = navigate(Carousel::next);

    let view = carousel.borrow().clone();
    html! {
        <div class="carousel">
            <style>{CAROUSEL_CSS}</style>
            <div class="carousel-stage">
                { for view.slides().iter().enumerate().map(|(index, slide)| html! {
                    <div key={index} class={slide_class(view.is_active(index))}>
                        <img
                            src={slide.image.clone()}
                            alt={slide.alt.clone()}
                            width="1200"
                            height="800"
                            loading={if index == 0 { "eager" } else { "lazy" }}
                        />
                    </div>
                }) }
            </div>
            <div class="carousel-dots">
                { for (0..view.len()).map(|index| {
                    let on_pick = {
                        let carousel = carousel.clone();
                        let rerender = rerender.clone();
                        Callback::from(move |_: MouseEvent| {
                            carousel.borrow_mut().go_to(index);
                            rerender.force_update();
                        })
                    };
                    html! {
                        <button
                            key={index}
                            class={dot_class(view.is_active(index))}
                            aria-label={dot_label(index)}
                            onclick={on_pick}
                        />
                    }
                }) }
            </div>
            <button class="carousel-arrow prev" aria-label="Previous slide" onclick={on_previous}>
                <i class="fas fa-chevron-left"></i>
            </button>
            <button class="carousel-arrow next" aria-label="Next slide" onclick={on_next}>
                <i class="fas fa-chevron-right"></i>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_active_slide_is_emphasized() {
        let carousel = config::showcase_carousel();
        let active: Vec<bool> = (0..carousel.len())
            .map(|index| slide_class(carousel.is_active(index)).contains("active"))
            .collect();
        assert_eq!(active, vec![true, false]);
    }

    #[test]
    fn dots_are_one_based_and_marked() {
        assert_eq!(dot_label(0), "Go to slide 1");
        assert!(dot_class(true).contains("active"));
        assert!(!dot_class(false).contains("active"));
    }
}
