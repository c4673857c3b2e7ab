use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::adaptive::context::use_adaptive;
use crate::adaptive::reveal::{use_reveal, RevealOptions};

const COLORS: [&str; 6] = ["#5865F2", "#FFB86B", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Square,
    Triangle,
}

impl Shape {
    fn class(self) -> &'static str {
        match self {
            Shape::Circle => "bit-circle",
            Shape::Square => "bit-square",
            Shape::Triangle => "bit-triangle",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatingBit {
    /// Position in percent of the hero box.
    pub x: f64,
    pub y: f64,
    /// px
    pub size: f64,
    pub color: &'static str,
    pub shape: Shape,
    /// Seconds.
    pub delay: f64,
    pub duration: f64,
}

impl FloatingBit {
    /// Drift runs only with `ambient` motion, and is paused while off screen.
    fn style(&self, ambient: bool, in_view: bool) -> String {
        let mut style = format!(
            "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; background-color: {};",
            self.x, self.y, self.size, self.size, self.color
        );
        if ambient {
            style.push_str(&format!(
                " animation: bitDrift {:.2}s ease-in-out {:.2}s infinite;",
                self.duration, self.delay
            ));
            if !in_view {
                style.push_str(" animation-play-state: paused;");
            }
        }
        style
    }
}

pub fn generate_bits(count: usize, seed: u64) -> Vec<FloatingBit> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let shape = match rng.gen_range(0..3) {
                0 => Shape::Circle,
                1 => Shape::Square,
                _ => Shape::Triangle,
            };
            FloatingBit {
                x: rng.gen_range(0.0..100.0),
                y: rng.gen_range(0.0..100.0),
                size: rng.gen_range(4.0..12.0),
                color: COLORS[rng.gen_range(0..COLORS.len())],
                shape,
                delay: rng.gen_range(0.0..2.0),
                duration: rng.gen_range(2.0..5.0),
            }
        })
        .collect()
}

/// Decorative shapes behind the hero. Count and motion follow the policy.
#[function_component(FloatingBits)]
pub fn floating_bits() -> Html {
    let adaptive = use_adaptive();
    let ambient = adaptive.policy.ambient;
    let presence = use_reveal(RevealOptions::continuous());
    let in_view = presence.state.is_intersecting;
    let bits = use_memo(|count| generate_bits(*count, Date::now() as u64), adaptive.policy.element_count);

    html! {
        <div class="floating-bits" aria-hidden="true" ref={presence.node.clone()}>
            <style>
                {r#"
                    .floating-bits {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .floating-bits .bit {
                        position: absolute;
                        opacity: 0.2;
                    }
                    .bit-circle { border-radius: 9999px; }
                    .bit-square { border-radius: 0.125rem; }
                    .bit-triangle { clip-path: polygon(50% 0%, 0% 100%, 100% 100%); }
                    @keyframes bitDrift {
                        0%, 100% { transform: translate(-5px, -10px) rotate(0deg) scale(0.8); }
                        50% { transform: translate(5px, 10px) rotate(180deg) scale(1.2); }
                    }
                "#}
            </style>
            { for bits.iter().map(|bit| html! {
                <div class={classes!("bit", bit.shape.class())} style={bit.style(ambient, in_view)}></div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adaptive::motion::AnimationPolicy;

    #[test]
    fn count_follows_policy() {
        for policy in [AnimationPolicy::MOBILE, AnimationPolicy::TABLET, AnimationPolicy::DESKTOP, AnimationPolicy::STATIC] {
            assert_eq!(generate_bits(policy.element_count, 7).len(), policy.element_count);
        }
    }

    #[test]
    fn bits_stay_inside_their_ranges() {
        for bit in generate_bits(200, 42) {
            assert!((0.0..100.0).contains(&bit.x) && (0.0..100.0).contains(&bit.y));
            assert!((4.0..12.0).contains(&bit.size));
            assert!((2.0..5.0).contains(&bit.duration));
            assert!(COLORS.contains(&bit.color));
        }
    }

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(generate_bits(10, 3), generate_bits(10, 3));
    }

    #[test]
    fn static_bits_have_no_animation() {
        let bit = &generate_bits(1, 1)[0];
        assert!(!bit.style(false, true).contains("animation"));
        assert!(bit.style(true, true).contains("bitDrift"));
    }

    #[test]
    fn drift_pauses_off_screen() {
        let bit = &generate_bits(1, 5)[0];
        assert!(!bit.style(true, true).contains("paused"));
        assert!(bit.style(true, false).contains("animation-play-state: paused"));
        assert!(!bit.style(false, false).contains("animation"));
    }
}
