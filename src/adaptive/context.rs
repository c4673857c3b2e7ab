use yew::prelude::*;

use super::device::{classify, DeviceProfile};
use super::environment::EnvironmentSnapshot;
use super::loader::LoadPlan;
use super::motion::{resolve, AnimationPolicy};

/// Classified once at mount and shared with every section, so nothing below
/// the app root re-derives the device class on its own.
#[derive(Clone, Debug, PartialEq)]
pub struct Adaptive {
    pub profile: DeviceProfile,
    pub policy: AnimationPolicy,
    pub plan: LoadPlan,
}

impl Adaptive {
    pub fn from_environment(env: &EnvironmentSnapshot) -> Self {
        let profile = classify(env);
        Self {
            profile,
            policy: resolve(profile),
            plan: LoadPlan::for_device(profile.class),
        }
    }
}

impl Default for Adaptive {
    fn default() -> Self {
        Self::from_environment(&EnvironmentSnapshot::default())
    }
}

/// Falls back to the desktop defaults outside a provider.
#[hook]
pub fn use_adaptive() -> Adaptive {
    use_context::<Adaptive>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adaptive::device::DeviceClass;
    use crate::adaptive::loader::LoadMode;
    use crate::adaptive::loader::SectionId;

    #[test]
    fn mobile_reduced_motion_environment() {
        let env = EnvironmentSnapshot::new(390.0, "iPhone", true);
        let adaptive = Adaptive::from_environment(&env);
        assert_eq!(adaptive.profile.class, DeviceClass::Mobile);
        assert_eq!(adaptive.policy, AnimationPolicy::STATIC);
        assert_eq!(adaptive.plan.mode_of(SectionId::Courses), LoadMode::Immediate);
    }

    #[test]
    fn default_is_desktop() {
        let adaptive = Adaptive::default();
        assert_eq!(adaptive.profile.class, DeviceClass::Desktop);
        assert_eq!(adaptive.policy, AnimationPolicy::DESKTOP);
        assert_eq!(adaptive.plan.mode_of(SectionId::Courses), LoadMode::Deferred);
    }
}
