use glam::{Vec3, Vec4Swizzles};
use walking_cube::camera::{OrbitCamera, MAX_DISTANCE, MIN_DISTANCE};
use walking_cube::core::input_adapter::PointerInput;
use walking_cube::traits::CameraController;

#[cfg(test)]
mod orbit_camera_tests {
    use super::*;

    #[test]
    fn test_default_camera_matches_scene_setup() {
        let camera = OrbitCamera::default();
        assert!((camera.eye() - Vec3::new(1.0, 1.0, 10.0)).length() < 1e-4);
        assert_eq!(camera.target, Vec3::ZERO);
        assert!((camera.fovy - 75.0_f32.to_radians()).abs() < 1e-6);
        assert_eq!(camera.znear, 0.01);
        assert_eq!(camera.zfar, 1000.0);
    }

    #[test]
    fn test_orbit_preserves_distance() {
        let mut camera = OrbitCamera::default();
        let before = (camera.eye() - camera.target).length();

        camera.handle_input(&PointerInput {
            orbit: (120.0, -45.0),
            ..Default::default()
        });

        let after = (camera.eye() - camera.target).length();
        assert!((before - after).abs() < 1e-4);
        assert!((camera.eye() - Vec3::new(1.0, 1.0, 10.0)).length() > 0.1);
    }

    #[test]
    fn test_pitch_stays_short_of_poles() {
        let mut camera = OrbitCamera::default();
        camera.rotate(0.0, 1.0e6);
        let forward = camera.forward();
        assert!(forward.y > -1.0);
        // still a valid view basis
        assert!(camera.right().is_finite());
        assert!(camera.view().is_finite());
    }

    #[test]
    fn test_pan_moves_target_and_eye_together() {
        let mut camera = OrbitCamera::default();
        let offset = camera.eye() - camera.target;

        camera.handle_input(&PointerInput {
            pan: (200.0, 50.0),
            ..Default::default()
        });

        assert_ne!(camera.target, Vec3::ZERO);
        assert!(((camera.eye() - camera.target) - offset).length() < 1e-4);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = OrbitCamera::default();
        camera.zoom(10_000.0);
        assert_eq!(camera.distance, MIN_DISTANCE);
        camera.zoom(-10_000.0);
        assert_eq!(camera.distance, MAX_DISTANCE);
    }

    #[test]
    fn test_scroll_toward_scene_moves_closer() {
        let mut camera = OrbitCamera::default();
        let before = camera.distance;
        camera.handle_input(&PointerInput {
            scroll: 2.0,
            ..Default::default()
        });
        assert!(camera.distance < before);
    }

    #[test]
    fn test_target_projects_to_screen_centre() {
        let camera = OrbitCamera::default();
        let clip = camera.view_proj(16.0 / 9.0) * camera.target.extend(1.0);
        let ndc = clip.xyz() / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!((0.0..=1.0).contains(&ndc.z));
    }
}
