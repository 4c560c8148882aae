use std::time::Instant;

use glam::Vec3;

use crate::config::InstanceConfig;
use crate::geometry::GeometryLibrary;
use crate::mesh::{MeshInstance, Oscillation, UpdateRule};

/// Ordered instance list; insertion order is draw order
#[derive(Debug, Clone, Default)]
pub struct Scene {
    instances: Vec<MeshInstance>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantiate every configured object, all starting their clocks at `now`
    pub fn from_config(
        instances: &[InstanceConfig],
        library: &GeometryLibrary,
        now: Instant,
    ) -> Self {
        let mut scene = Self::new();
        for config in instances {
            let rule = match config.oscillate {
                Some(o) => UpdateRule::SpinAndOscillate(Oscillation::new(o.bound, o.speed)),
                None => UpdateRule::Spin,
            };
            scene.push(MeshInstance::new(
                library.get(config.shape),
                Vec3::from(config.translation),
                Vec3::from(config.axis),
                rule,
                now,
            ));
        }
        scene
    }

    pub fn push(&mut self, instance: MeshInstance) {
        self.instances.push(instance);
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MeshInstance> {
        self.instances.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, MeshInstance> {
        self.instances.iter_mut()
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a MeshInstance;
    type IntoIter = std::slice::Iter<'a, MeshInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewerConfig;
    use crate::geometry::ShapeKind;

    #[test]
    fn test_from_config_keeps_order_and_rules() {
        let library = GeometryLibrary::build().unwrap();
        let config = ViewerConfig::default();
        let scene = Scene::from_config(&config.instances, &library, Instant::now());

        assert_eq!(scene.len(), 3);
        let kinds: Vec<_> = scene.iter().map(|m| m.geometry().kind).collect();
        assert_eq!(kinds, ShapeKind::ALL.to_vec());

        let rising: Vec<_> = scene.iter().map(|m| m.is_rising()).collect();
        assert_eq!(rising, vec![None, Some(true), None]);
    }

    #[test]
    fn test_instances_share_geometry() {
        let library = GeometryLibrary::build().unwrap();
        let pyramid = InstanceConfig {
            shape: ShapeKind::Pyramid,
            translation: [0.0, 0.0, -8.0],
            axis: [0.0, 1.0, 0.0],
            oscillate: None,
        };
        let scene = Scene::from_config(&[pyramid.clone(), pyramid], &library, Instant::now());

        let meshes: Vec<_> = scene.iter().collect();
        assert!(std::sync::Arc::ptr_eq(meshes[0].geometry(), meshes[1].geometry()));
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert_eq!((&scene).into_iter().count(), 0);
    }
}
