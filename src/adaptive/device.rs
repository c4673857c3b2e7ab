//! Device-class bucketing from viewport width and user agent.

use once_cell::sync::Lazy;
use regex::Regex;

use super::environment::EnvironmentSnapshot;

pub const MOBILE_MAX_WIDTH: f64 = 768.0;
pub const TABLET_MAX_WIDTH: f64 = 1024.0;

static MOBILE_UA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Android.*Mobile|iPhone|BlackBerry|IEMobile|Opera Mini").unwrap()
});
static IPAD_UA: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)iPad").unwrap());
static ANDROID_UA: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Android").unwrap());
static ANDROID_PHONE_UA: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Android.*Mobile").unwrap());

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceClass::Mobile => "mobile",
            DeviceClass::Tablet => "tablet",
            DeviceClass::Desktop => "desktop",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceProfile {
    pub class: DeviceClass,
    pub reduced_motion: bool,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self {
            class: DeviceClass::Desktop,
            reduced_motion: false,
        }
    }
}

pub fn is_mobile_agent(user_agent: &str) -> bool {
    MOBILE_UA.is_match(user_agent)
}

/// iPads, and Android devices that don't advertise themselves as phones.
pub fn is_tablet_agent(user_agent: &str) -> bool {
    IPAD_UA.is_match(user_agent)
        || (ANDROID_UA.is_match(user_agent) && !ANDROID_PHONE_UA.is_match(user_agent))
}

/// Buckets the environment into a device profile.
///
/// Runs once per page load; the result is not refreshed on resize or
/// rotation. An unknown width only classifies through the user agent.
pub fn classify(env: &EnvironmentSnapshot) -> DeviceProfile {
    let below = |limit: f64| env.viewport_width.map_or(false, |w| w < limit);

    let class = if below(MOBILE_MAX_WIDTH) || is_mobile_agent(&env.user_agent) {
        DeviceClass::Mobile
    } else if below(TABLET_MAX_WIDTH) || is_tablet_agent(&env.user_agent) {
        DeviceClass::Tablet
    } else {
        DeviceClass::Desktop
    };

    DeviceProfile {
        class,
        reduced_motion: env.prefers_reduced_motion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP_UA: &str =
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";
    const IPHONE_UA: &str =
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";
    const ANDROID_PHONE_UA: &str =
        "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Chrome/120.0 Mobile Safari/537.36";
    const ANDROID_TABLET_UA: &str =
        "Mozilla/5.0 (Linux; Android 13; SM-X700) AppleWebKit/537.36 Chrome/120.0 Safari/537.36";
    const IPAD_UA_STR: &str =
        "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15 Version/16.6 Safari/604.1";

    fn class_at(width: f64, ua: &str) -> DeviceClass {
        classify(&EnvironmentSnapshot::new(width, ua, false)).class
    }

    #[test]
    fn width_thresholds() {
        assert_eq!(class_at(320.0, DESKTOP_UA), DeviceClass::Mobile);
        assert_eq!(class_at(767.0, DESKTOP_UA), DeviceClass::Mobile);
        assert_eq!(class_at(768.0, DESKTOP_UA), DeviceClass::Tablet);
        assert_eq!(class_at(1023.0, DESKTOP_UA), DeviceClass::Tablet);
        assert_eq!(class_at(1024.0, DESKTOP_UA), DeviceClass::Desktop);
        assert_eq!(class_at(1920.0, DESKTOP_UA), DeviceClass::Desktop);
    }

    #[test]
    fn classification_is_monotonic_in_width() {
        let rank = |c: DeviceClass| match c {
            DeviceClass::Mobile => 0,
            DeviceClass::Tablet => 1,
            DeviceClass::Desktop => 2,
        };
        let mut last = 0;
        for w in (0..4000).step_by(7) {
            let r = rank(class_at(w as f64, DESKTOP_UA));
            assert!(r >= last, "width {} went back to a smaller class", w);
            last = r;
        }
    }

    #[test]
    fn phone_agents_are_mobile_at_any_width() {
        assert_eq!(class_at(1920.0, IPHONE_UA), DeviceClass::Mobile);
        assert_eq!(class_at(1920.0, ANDROID_PHONE_UA), DeviceClass::Mobile);
        assert_eq!(class_at(1200.0, "Opera Mini/9.80"), DeviceClass::Mobile);
        assert_eq!(class_at(1200.0, "blackberry9700"), DeviceClass::Mobile);
    }

    #[test]
    fn tablet_agents_are_tablet_on_wide_viewports() {
        assert_eq!(class_at(1366.0, IPAD_UA_STR), DeviceClass::Tablet);
        assert_eq!(class_at(1280.0, ANDROID_TABLET_UA), DeviceClass::Tablet);
    }

    #[test]
    fn narrow_width_wins_over_tablet_agent() {
        assert_eq!(class_at(600.0, IPAD_UA_STR), DeviceClass::Mobile);
    }

    #[test]
    fn android_phone_is_not_a_tablet_agent() {
        assert!(!is_tablet_agent(ANDROID_PHONE_UA));
        assert!(is_tablet_agent(ANDROID_TABLET_UA));
    }

    #[test]
    fn unreadable_environment_is_desktop_with_motion() {
        let profile = classify(&EnvironmentSnapshot::default());
        assert_eq!(profile, DeviceProfile::default());
    }

    #[test]
    fn reduced_motion_is_carried_through() {
        let profile = classify(&EnvironmentSnapshot::new(400.0, IPHONE_UA, true));
        assert_eq!(profile.class, DeviceClass::Mobile);
        assert!(profile.reduced_motion);
    }

    // Classification happens once at mount. A later environment (resize,
    // rotation) produces a new value but never touches the profile already
    // handed to the page.
    #[test]
    fn classification_is_single_shot() {
        let mut env = EnvironmentSnapshot::new(1920.0, DESKTOP_UA, false);
        let mounted = classify(&env);
        env.viewport_width = Some(500.0);
        assert_eq!(mounted.class, DeviceClass::Desktop);
        assert_eq!(classify(&env).class, DeviceClass::Mobile);
    }
}
