//! Banner carousel component.

use std::num::NonZeroUsize;

use ui_state::Carousel;
use yew::prelude::*;

/// The fixed slide set, served from the asset directory.
const BANNERS: [&str; 3] = [
    "/assets/banner1.png",
    "/assets/banner2.png",
    "/assets/banner3.png",
];

const SLIDE_COUNT: NonZeroUsize = match NonZeroUsize::new(BANNERS.len()) {
    Some(n) => n,
    None => panic!("banner slide list is empty"),
};

/// Banner carousel component: one visible slide, prev/next buttons, and an
/// indicator dot per slide (the active one widened). Dots jump straight to
/// their slide.
#[function_component(Banner)]
pub fn banner() -> Html {
    let carousel = use_state(|| Carousel::new(SLIDE_COUNT));

    let prev = {
        let carousel = carousel.clone();
        Callback::from(move |_| {
            let mut next = *carousel;
            next.retreat();
            carousel.set(next);
        })
    };

    let next = {
        let carousel = carousel.clone();
        Callback::from(move |_| {
            let mut updated = *carousel;
            updated.advance();
            carousel.set(updated);
        })
    };

    let current = carousel.cursor();

    html! {
        <div class="relative mb-12 w-full">
            // Orange frame behind the slide.
            <div class="relative w-[95%] h-72 bg-orange-400 rounded-3xl mx-auto z-0" />

            <div class="absolute top-[-6px] left-1/2 -translate-x-1/2 w-[97%] h-72 bg-white rounded-3xl overflow-hidden shadow z-10">
                <img
                    src={BANNERS[current]}
                    alt={format!("banner-{current}")}
                    class="w-full h-full object-cover"
                />

                // Text overlay, vertically centered and left-shifted.
                <div class="absolute inset-0 flex items-center pl-20">
                    <div class="bg-black/50 text-white p-4 rounded-3xl max-w-sm">
                        <h1 class="text-2xl font-bold mb-1">{ "G-Easy" }</h1>
                        <p class="text-sm text-white/80 leading-relaxed">
                            { "Learn English vocabulary with clear meanings, vivid examples, and accurate pronunciation. \
                               Your saved words are always ready to support your learning anytime." }
                        </p>
                    </div>
                </div>

                <button
                    onclick={prev}
                    class="absolute left-2 top-1/2 -translate-y-1/2 bg-black/10 hover:bg-black/20 text-white rounded-full w-6 h-6 flex items-center justify-center transition"
                >
                    { "‹" }
                </button>
                <button
                    onclick={next}
                    class="absolute right-2 top-1/2 -translate-y-1/2 bg-black/10 hover:bg-black/20 text-white rounded-full w-6 h-6 flex items-center justify-center transition"
                >
                    { "›" }
                </button>

                <div class="absolute bottom-3 left-1/2 -translate-x-1/2 flex gap-2">
                    { for (0..carousel.len()).map(|idx| {
                        let jump = {
                            let carousel = carousel.clone();
                            Callback::from(move |_| {
                                let mut updated = *carousel;
                                updated.jump(idx);
                                carousel.set(updated);
                            })
                        };
                        html! {
                            <button
                                key={idx}
                                onclick={jump}
                                class={dot_class(current == idx)}
                            />
                        }
                    })}
                </div>
            </div>
        </div>
    }
}

fn dot_class(active: bool) -> &'static str {
    if active {
        "h-2 rounded-full transition-all duration-300 w-6 bg-white"
    } else {
        "h-2 rounded-full transition-all duration-300 w-2 bg-white/50"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_dot_is_widened() {
        assert!(dot_class(true).contains("w-6"));
        assert!(dot_class(false).contains("w-2 "));
    }
}
