//! Animation selection for the presentation layer
//!
//! A pure mapping from physics state to an animation key. The host owns the
//! sprite sets and timing; the core only says which one applies.

/// Horizontal speed below this reads as standing still
pub const RUN_THRESHOLD: f32 = 0.02;

/// Which animation the presentation layer should play
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationTag {
    Idle,
    Running,
    Jumping,
    Dying,
}

/// An animation tag plus the element whose sprite set it draws from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationKey {
    pub element: u8,
    pub tag: AnimationTag,
}

/// Select the animation for the current physics state
pub fn select_animation(
    grounded: bool,
    horizontal_speed: f32,
    alive: bool,
    element: u8,
) -> AnimationKey {
    let tag = if !alive {
        AnimationTag::Dying
    } else if !grounded {
        AnimationTag::Jumping
    } else if horizontal_speed.abs() > RUN_THRESHOLD {
        AnimationTag::Running
    } else {
        AnimationTag::Idle
    };
    AnimationKey { element, tag }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_selection() {
        assert_eq!(select_animation(true, 0.0, true, 0).tag, AnimationTag::Idle);
        assert_eq!(
            select_animation(true, 12.0, true, 0).tag,
            AnimationTag::Running
        );
        assert_eq!(
            select_animation(true, -12.0, true, 0).tag,
            AnimationTag::Running
        );
        assert_eq!(
            select_animation(false, 0.0, true, 0).tag,
            AnimationTag::Jumping
        );
        // Death wins over everything
        assert_eq!(
            select_animation(true, 12.0, false, 0).tag,
            AnimationTag::Dying
        );
    }

    #[test]
    fn test_animation_carries_element() {
        let key = select_animation(true, 0.0, true, 3);
        assert_eq!(key.element, 3);
    }

    #[test]
    fn test_tiny_drift_reads_as_idle() {
        assert_eq!(
            select_animation(true, 0.01, true, 0).tag,
            AnimationTag::Idle
        );
    }
}
