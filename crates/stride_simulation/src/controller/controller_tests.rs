//! Tests for MovementController.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use super::super::contract::MovementControl;
    use super::super::movement_controller::MovementController;
    use super::super::state::{MovementCapability, MovementState};
    use crate::components::{MovementInput, MovementProfile, MAX_SPEED};

    const DELTA: f32 = 1.0 / 60.0;

    fn forward() -> MovementInput {
        MovementInput::new(Vec3::X)
    }

    #[test]
    fn test_initial_state_allowed() {
        let controller = MovementController::default();

        assert_eq!(controller.state(), MovementState::Allowed);
        assert_eq!(controller.state_string(), "Allowed");
        assert_eq!(controller.velocity(), Vec3::ZERO);
        assert_eq!(controller.ticks(), 0);
    }

    #[test]
    fn test_set_stopped() {
        let mut controller = MovementController::default();

        assert!(controller.set_stopped());
        assert_eq!(controller.state_string(), "Stopped");
    }

    #[test]
    fn test_stop_then_allow() {
        let mut controller = MovementController::default();

        controller.set_stopped();
        assert!(controller.set_movement_allowed());
        assert_eq!(controller.state_string(), "Allowed");
    }

    #[test]
    fn test_transitions_idempotent() {
        let mut controller = MovementController::default();

        // Уже Allowed → no-op
        assert!(!controller.set_movement_allowed());

        assert!(controller.set_stopped());
        assert!(!controller.set_stopped());
        assert_eq!(controller.state(), MovementState::Stopped);
    }

    #[test]
    fn test_destroy_rejects_transitions() {
        let mut controller = MovementController::default();

        assert!(controller.on_destroy());
        assert!(!controller.set_movement_allowed());
        assert_eq!(controller.state_string(), "Destroyed");

        assert!(!controller.set_stopped());
        assert_eq!(controller.state_string(), "Destroyed");
    }

    #[test]
    fn test_destroy_idempotent() {
        let mut once = MovementController::default();
        once.on_destroy();

        let mut many = MovementController::default();
        assert!(many.on_destroy());
        for _ in 0..5 {
            assert!(!many.on_destroy());
        }

        assert_eq!(once, many);
    }

    #[test]
    fn test_destroy_from_stopped() {
        let mut controller = MovementController::default();
        controller.set_stopped();

        assert!(controller.on_destroy());
        assert!(controller.is_destroyed());
    }

    #[test]
    fn test_update_after_destroy_is_noop() {
        let mut controller = MovementController::default();
        controller.update(&forward(), DELTA);
        controller.on_destroy();

        let before = controller.clone();
        for _ in 0..10 {
            let displacement = controller.update(&forward(), DELTA);
            assert_eq!(displacement, Vec3::ZERO);
        }

        assert_eq!(controller, before);
        assert_eq!(controller.state_string(), "Destroyed");
    }

    #[test]
    fn test_thousand_updates_stable() {
        let mut controller = MovementController::default();
        let input = forward();

        for _ in 0..1000 {
            controller.update(&input, DELTA);
        }

        assert_eq!(controller.state_string(), "Allowed");
        assert_eq!(controller.ticks(), 1000);
        assert_eq!(controller.velocity(), Vec3::X * 2.0);
    }

    #[test]
    fn test_last_write_wins_random_sequences() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..200 {
            let mut controller = MovementController::default();
            let len = rng.gen_range(1..32);
            let mut expected = MovementState::Allowed;

            for _ in 0..len {
                if rng.gen_bool(0.5) {
                    controller.set_movement_allowed();
                    expected = MovementState::Allowed;
                } else {
                    controller.set_stopped();
                    expected = MovementState::Stopped;
                }

                // update между переходами не должен влиять на state
                if rng.gen_bool(0.3) {
                    controller.update(&forward(), DELTA);
                }
            }

            assert_eq!(controller.state(), expected);
        }
    }

    #[test]
    fn test_allowed_moves_at_profile_speed() {
        let mut controller = MovementController::new(MovementProfile::ground(4.0));

        let displacement = controller.update(&forward(), 0.5);

        assert_eq!(displacement, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(controller.velocity(), Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn test_diagonal_input_normalized() {
        let mut controller = MovementController::new(MovementProfile::ground(2.0));

        controller.update(&MovementInput::new(Vec3::new(3.0, 0.0, 4.0)), DELTA);

        assert!((controller.velocity().length() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_stopped_ignores_input() {
        let mut controller = MovementController::default();
        controller.update(&forward(), DELTA);
        assert_ne!(controller.velocity(), Vec3::ZERO);

        controller.set_stopped();
        assert_eq!(controller.velocity(), Vec3::ZERO);

        let displacement = controller.update(&forward(), DELTA);
        assert_eq!(displacement, Vec3::ZERO);
        assert_eq!(controller.velocity(), Vec3::ZERO);
    }

    #[test]
    fn test_stopped_still_runs_bookkeeping() {
        let mut controller = MovementController::default();
        controller.set_stopped();

        controller.update(&forward(), 0.25);
        controller.update(&forward(), 0.25);

        assert_eq!(controller.ticks(), 2);
        assert_eq!(controller.state_elapsed(), 0.5);
    }

    #[test]
    fn test_transition_resets_state_elapsed() {
        let mut controller = MovementController::default();
        controller.update(&forward(), 0.5);
        assert_eq!(controller.state_elapsed(), 0.5);

        controller.set_stopped();
        assert_eq!(controller.state_elapsed(), 0.0);
    }

    #[test]
    fn test_ground_profile_ignores_vertical_input() {
        let mut controller = MovementController::new(MovementProfile::ground(2.0));

        let displacement = controller.update(&MovementInput::new(Vec3::Y), 1.0);

        assert_eq!(displacement, Vec3::ZERO);
    }

    #[test]
    fn test_flying_profile_uses_vertical_input() {
        let mut controller = MovementController::new(MovementProfile::flying(3.0));

        let displacement = controller.update(&MovementInput::new(Vec3::Y), 1.0);

        assert_eq!(displacement, Vec3::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn test_dead_zone_input() {
        let mut controller = MovementController::default();

        let displacement = controller.update(&MovementInput::new(Vec3::new(0.05, 0.0, 0.05)), 1.0);

        assert_eq!(displacement, Vec3::ZERO);
    }

    #[test]
    fn test_invalid_delta_treated_as_empty_frame() {
        let mut controller = MovementController::default();

        assert_eq!(controller.update(&forward(), f32::NAN), Vec3::ZERO);
        assert_eq!(controller.update(&forward(), -1.0), Vec3::ZERO);
        assert_eq!(controller.state_elapsed(), 0.0);
        assert_eq!(controller.state_string(), "Allowed");
    }

    #[test]
    fn test_nan_input_does_not_poison_velocity() {
        let mut controller = MovementController::default();

        controller.update(&MovementInput::new(Vec3::new(f32::NAN, 0.0, 1.0)), DELTA);

        assert_eq!(controller.velocity(), Vec3::ZERO);
    }

    #[test]
    fn test_huge_input_moves_at_full_speed() {
        let mut controller = MovementController::new(MovementProfile::ground(2.0));

        let displacement = controller.update(&MovementInput::new(Vec3::new(1e30, 0.0, 0.0)), 1.0);

        assert_eq!(displacement, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_extreme_speed_clamped() {
        let mut controller = MovementController::new(MovementProfile::ground(f32::MAX));

        let displacement = controller.update(&forward(), 2.0);

        assert!(displacement.is_finite());
        assert_eq!(controller.velocity(), Vec3::new(MAX_SPEED, 0.0, 0.0));
        assert_eq!(displacement, Vec3::new(MAX_SPEED * 2.0, 0.0, 0.0));
    }

    #[test]
    fn test_invalid_speed_becomes_zero() {
        let mut nan_speed = MovementController::new(MovementProfile::flying(f32::NAN));
        let mut negative_speed = MovementController::new(MovementProfile::flying(-5.0));

        assert_eq!(nan_speed.update(&forward(), 1.0), Vec3::ZERO);
        assert_eq!(negative_speed.update(&forward(), 1.0), Vec3::ZERO);
    }

    #[test]
    fn test_huge_delta_does_not_overflow_transform() {
        let mut controller = MovementController::new(MovementProfile::ground(MAX_SPEED));

        let displacement = controller.update(&forward(), f32::MAX);

        assert!(displacement.is_finite());
        assert_eq!(controller.state_string(), "Allowed");
    }

    #[test]
    fn test_apply_capability_matches_direct_calls() {
        let mut controller = MovementController::default();

        assert!(controller.apply_capability(MovementCapability::Stopped));
        assert!(!controller.apply_capability(MovementCapability::Stopped));
        assert_eq!(controller.state(), MovementState::Stopped);

        assert!(controller.apply_capability(MovementCapability::Allowed));
        assert_eq!(controller.state(), MovementState::Allowed);

        controller.on_destroy();
        assert!(!controller.apply_capability(MovementCapability::Allowed));
        assert_eq!(controller.state_string(), "Destroyed");
    }
}
