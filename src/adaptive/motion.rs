//! Motion parameters per device profile.
//!
//! The policy only decides *what* to animate and how much; interpolation
//! itself is left to CSS transitions and keyframes in the components.

use super::device::{DeviceClass, DeviceProfile};

/// Pointer-follow effect for the hero mascot and badges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    /// Maximum offset in px at the viewport edge.
    pub intensity: f64,
    /// Share of the offset applied to the mascot.
    pub mascot_factor: f64,
    pub stiffness: f64,
    pub damping: f64,
}

impl Parallax {
    /// Damping ratio of a unit-mass spring; below 1 it overshoots.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * self.stiffness.sqrt())
    }

    /// Rough settle time of a unit-mass spring, in seconds.
    pub fn settle_secs(&self) -> f64 {
        8.0 / self.damping
    }

    /// CSS approximation of the spring for `transform`.
    pub fn css_transition(&self) -> String {
        let curve = if self.damping_ratio() < 1.0 {
            "cubic-bezier(0.34, 1.56, 0.64, 1)"
        } else {
            "ease-out"
        };
        format!("transform {:.2}s {}", self.settle_secs(), curve)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationPolicy {
    /// Seconds.
    pub duration: f64,
    pub base_delay: f64,
    pub stagger_step: f64,
    /// Entrance offset in px.
    pub displacement: f64,
    /// Decorative elements to render (floating bits).
    pub element_count: usize,
    pub hover_scale: f64,
    /// Looping decorative motion.
    pub ambient: bool,
    pub parallax: Option<Parallax>,
}

/// Number of static decorations kept when motion is reduced.
pub const STATIC_ELEMENT_COUNT: usize = 3;

impl AnimationPolicy {
    pub const MOBILE: AnimationPolicy = AnimationPolicy {
        duration: 0.3,
        base_delay: 0.1,
        stagger_step: 0.1,
        displacement: 10.0,
        element_count: 6,
        hover_scale: 1.0,
        ambient: true,
        parallax: None,
    };

    pub const TABLET: AnimationPolicy = AnimationPolicy {
        duration: 0.4,
        base_delay: 0.15,
        stagger_step: 0.2,
        displacement: 15.0,
        element_count: 10,
        hover_scale: 1.05,
        ambient: true,
        parallax: Some(Parallax {
            intensity: 10.0,
            mascot_factor: 0.3,
            stiffness: 100.0,
            damping: 20.0,
        }),
    };

    pub const DESKTOP: AnimationPolicy = AnimationPolicy {
        duration: 0.5,
        base_delay: 0.1,
        stagger_step: 0.2,
        displacement: 20.0,
        element_count: 15,
        hover_scale: 1.05,
        ambient: true,
        parallax: Some(Parallax {
            intensity: 20.0,
            mascot_factor: 0.5,
            stiffness: 150.0,
            damping: 15.0,
        }),
    };

    /// Everything lands in its final state immediately.
    pub const STATIC: AnimationPolicy = AnimationPolicy {
        duration: 0.0,
        base_delay: 0.0,
        stagger_step: 0.0,
        displacement: 0.0,
        element_count: STATIC_ELEMENT_COUNT,
        hover_scale: 1.0,
        ambient: false,
        parallax: None,
    };

    pub fn is_static(&self) -> bool {
        self.duration == 0.0 && self.displacement == 0.0
    }

    /// Timing for the `index`-th element of a staggered group.
    pub fn stagger(&self, index: usize) -> Transition {
        Transition {
            duration: self.duration,
            delay: self.base_delay + self.stagger_step * index as f64,
        }
    }

    /// Inline style for an element entering from `from`.
    ///
    /// Before `visible` the element sits displaced and transparent; after, it
    /// transitions to rest. A static policy always yields the rest state. The
    /// rest state leaves `transform` unset so stylesheet rules still apply.
    pub fn entrance_style(&self, visible: bool, index: usize, from: Direction) -> String {
        if self.is_static() {
            return "opacity: 1; transition: none;".to_string();
        }
        let t = self.stagger(index);
        if visible {
            format!(
                "opacity: 1; transition: opacity {d:.2}s ease-out {delay:.2}s, transform {d:.2}s ease-out {delay:.2}s;",
                d = t.duration,
                delay = t.delay,
            )
        } else {
            let (x, y) = from.offset(self.displacement);
            format!("opacity: 0; transform: translate3d({:.1}px, {:.1}px, 0);", x, y)
        }
    }

    /// Inline style for an element that animates in as soon as it mounts,
    /// through the theme's `enterFrom` keyframes. Once the animation ends the
    /// element's own styles apply again.
    pub fn mount_entrance_style(&self, index: usize, from: Direction) -> String {
        if self.is_static() {
            return "animation: none;".to_string();
        }
        let t = self.stagger(index);
        let (x, y) = from.offset(self.displacement);
        format!(
            "--enter-x: {:.1}px; --enter-y: {:.1}px; animation: enterFrom {:.2}s ease-out {:.2}s backwards;",
            x, y, t.duration, t.delay
        )
    }

    /// Hover scale as a CSS custom property, consumed by `.lift` in the theme.
    pub fn hover_style(&self) -> String {
        format!("--hover-scale: {:.2};", self.hover_scale)
    }

    /// Maps a pointer position to a parallax offset, `None` when the effect is off.
    pub fn pointer_offset(&self, x: f64, y: f64, width: f64, height: f64) -> Option<(f64, f64)> {
        let parallax = self.parallax?;
        if width <= 0.0 || height <= 0.0 {
            return Some((0.0, 0.0));
        }
        Some((
            (x / width - 0.5) * parallax.intensity,
            (y / height - 0.5) * parallax.intensity,
        ))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration: f64,
    pub delay: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Below,
    None,
}

impl Direction {
    fn offset(self, displacement: f64) -> (f64, f64) {
        match self {
            Direction::Left => (-displacement, 0.0),
            Direction::Right => (displacement, 0.0),
            Direction::Below => (0.0, displacement),
            Direction::None => (0.0, 0.0),
        }
    }
}

/// Total mapping from profile to policy. Reduced motion overrides the class.
pub fn resolve(profile: DeviceProfile) -> AnimationPolicy {
    if profile.reduced_motion {
        return AnimationPolicy::STATIC;
    }
    match profile.class {
        DeviceClass::Mobile => AnimationPolicy::MOBILE,
        DeviceClass::Tablet => AnimationPolicy::TABLET,
        DeviceClass::Desktop => AnimationPolicy::DESKTOP,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adaptive::device::classify;
    use crate::adaptive::environment::EnvironmentSnapshot;

    const ALL_CLASSES: [DeviceClass; 3] = [DeviceClass::Mobile, DeviceClass::Tablet, DeviceClass::Desktop];

    fn profile(class: DeviceClass, reduced_motion: bool) -> DeviceProfile {
        DeviceProfile { class, reduced_motion }
    }

    #[test]
    fn reduced_motion_collapses_every_class() {
        for class in ALL_CLASSES {
            let policy = resolve(profile(class, true));
            assert_eq!(policy.duration, 0.0);
            assert_eq!(policy.displacement, 0.0);
            assert_eq!(policy.stagger(5).delay, 0.0);
            assert!(!policy.ambient);
            assert!(policy.parallax.is_none());
            assert_eq!(policy.hover_scale, 1.0);
            assert!(policy.is_static());
        }
    }

    #[test]
    fn motion_grows_with_screen_size() {
        let m = resolve(profile(DeviceClass::Mobile, false));
        let t = resolve(profile(DeviceClass::Tablet, false));
        let d = resolve(profile(DeviceClass::Desktop, false));

        assert!(m.duration < t.duration && t.duration <= d.duration);
        assert!(m.displacement < t.displacement && t.displacement < d.displacement);
        assert!(m.element_count < t.element_count && t.element_count < d.element_count);
        assert!(m.parallax.is_none());
        assert!(t.parallax.is_some() && d.parallax.is_some());
    }

    #[test]
    fn desktop_scenario_gets_full_policy() {
        let env = EnvironmentSnapshot::new(1920.0, "Mozilla/5.0 (X11; Linux x86_64)", false);
        let device = classify(&env);
        assert_eq!(device.class, DeviceClass::Desktop);

        let policy = resolve(device);
        assert_eq!(policy, AnimationPolicy::DESKTOP);
        let max = ALL_CLASSES
            .iter()
            .map(|c| resolve(profile(*c, false)).element_count)
            .max()
            .unwrap();
        assert_eq!(policy.element_count, max);
    }

    #[test]
    fn stagger_adds_step_per_index() {
        let t = AnimationPolicy::TABLET.stagger(3);
        assert_eq!(t.duration, 0.4);
        assert!((t.delay - (0.15 + 0.6)).abs() < 1e-9);
    }

    #[test]
    fn static_entrance_is_final_state_whether_visible_or_not() {
        let policy = AnimationPolicy::STATIC;
        let hidden = policy.entrance_style(false, 2, Direction::Left);
        assert_eq!(hidden, policy.entrance_style(true, 2, Direction::Left));
        assert!(hidden.contains("opacity: 1"));
        assert!(hidden.contains("transition: none"));
    }

    #[test]
    fn animated_entrance_starts_displaced() {
        let hidden = AnimationPolicy::DESKTOP.entrance_style(false, 0, Direction::Left);
        assert!(hidden.contains("opacity: 0"));
        assert!(hidden.contains("translate3d(-20.0px, 0.0px, 0)"));

        let shown = AnimationPolicy::DESKTOP.entrance_style(true, 1, Direction::Left);
        assert!(shown.contains("opacity: 1"));
        assert!(shown.contains("0.30s"), "{}", shown);
    }

    #[test]
    fn resting_entrance_does_not_pin_transform() {
        for policy in [AnimationPolicy::DESKTOP, AnimationPolicy::TABLET, AnimationPolicy::STATIC] {
            let card = format!(
                "{} {}",
                policy.entrance_style(true, 0, Direction::Below),
                policy.hover_style()
            );
            assert!(!card.contains("transform:"), "{}", card);
        }
        assert!(AnimationPolicy::DESKTOP.hover_style().contains("1.05"));
    }

    #[test]
    fn mount_entrance_runs_keyframes_unless_static() {
        let style = AnimationPolicy::DESKTOP.mount_entrance_style(2, Direction::Left);
        assert!(style.contains("--enter-x: -20.0px; --enter-y: 0.0px;"), "{}", style);
        assert!(style.ends_with("animation: enterFrom 0.50s ease-out 0.50s backwards;"), "{}", style);

        assert_eq!(AnimationPolicy::STATIC.mount_entrance_style(2, Direction::Left), "animation: none;");
    }

    #[test]
    fn parallax_springs_map_to_css() {
        let desktop = AnimationPolicy::DESKTOP.parallax.unwrap();
        assert!(desktop.damping_ratio() < 1.0);
        assert_eq!(desktop.css_transition(), "transform 0.53s cubic-bezier(0.34, 1.56, 0.64, 1)");

        let tablet = AnimationPolicy::TABLET.parallax.unwrap();
        assert!((tablet.damping_ratio() - 1.0).abs() < 1e-9);
        assert_eq!(tablet.css_transition(), "transform 0.40s ease-out");
    }

    #[test]
    fn pointer_offset_is_centered_and_scaled() {
        let p = AnimationPolicy::DESKTOP;
        assert_eq!(p.pointer_offset(500.0, 400.0, 1000.0, 800.0), Some((0.0, 0.0)));
        assert_eq!(p.pointer_offset(1000.0, 0.0, 1000.0, 800.0), Some((10.0, -10.0)));
        assert_eq!(AnimationPolicy::MOBILE.pointer_offset(10.0, 10.0, 100.0, 100.0), None);
        assert_eq!(p.pointer_offset(10.0, 10.0, 0.0, 0.0), Some((0.0, 0.0)));
    }
}
