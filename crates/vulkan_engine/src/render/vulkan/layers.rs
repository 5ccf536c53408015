//! Validation layer negotiation

use crate::render::vulkan::{LayerProperties, VulkanError, VulkanResult};

/// Checks that every desired validation layer is installed
///
/// Matching is by exact, case-sensitive name. Versions are ignored: any
/// installed layer with the right name satisfies the request.
pub struct ValidationLayerNegotiator<'a> {
    desired: &'a [String],
}

impl<'a> ValidationLayerNegotiator<'a> {
    /// Create a negotiator for the desired layer list
    pub const fn new(desired: &'a [String]) -> Self {
        Self { desired }
    }

    /// Check the desired layers against what the driver reported
    ///
    /// Stops at the first missing layer and reports it.
    pub fn negotiate(&self, available: &[LayerProperties]) -> VulkanResult<()> {
        for layer_name in self.desired {
            let layer_found = available.iter().any(|layer| layer.name == *layer_name);

            if layer_found {
                log::info!("Available Validation Layer: {layer_name}");
            } else {
                log::error!("Available Validation Layer Not Found: {layer_name}");
                return Err(VulkanError::CapabilityMissing { layer: layer_name.clone() });
            }
        }

        Ok(())
    }

    /// Whether every desired layer is available
    pub fn is_supported(&self, available: &[LayerProperties]) -> bool {
        self.negotiate(available).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn installed(list: &[&str]) -> Vec<LayerProperties> {
        list.iter().map(|name| LayerProperties::named(*name)).collect()
    }

    #[test]
    fn test_present_layer_is_accepted() {
        let desired = names(&["VK_LAYER_KHRONOS_validation"]);
        let available = installed(&["VK_LAYER_MESA_device_select", "VK_LAYER_KHRONOS_validation"]);

        assert!(ValidationLayerNegotiator::new(&desired).negotiate(&available).is_ok());
    }

    #[test]
    fn test_first_missing_layer_is_reported() {
        let desired = names(&["VK_LAYER_KHRONOS_validation", "VK_LAYER_LUNARG_api_dump", "VK_LAYER_X"]);
        let available = installed(&["VK_LAYER_KHRONOS_validation"]);

        let result = ValidationLayerNegotiator::new(&desired).negotiate(&available);
        match result {
            Err(VulkanError::CapabilityMissing { layer }) => assert_eq!(layer, "VK_LAYER_LUNARG_api_dump"),
            other => panic!("expected missing layer, got {other:?}"),
        }
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let desired = names(&["VK_LAYER_KHRONOS_validation"]);
        let available = installed(&["vk_layer_khronos_validation"]);

        assert!(!ValidationLayerNegotiator::new(&desired).is_supported(&available));
    }

    #[test]
    fn test_version_is_ignored() {
        let desired = names(&["VK_LAYER_KHRONOS_validation"]);
        let mut layer = LayerProperties::named("VK_LAYER_KHRONOS_validation");
        layer.spec_version = 1;
        layer.implementation_version = 999;

        assert!(ValidationLayerNegotiator::new(&desired).is_supported(&[layer]));
    }

    #[test]
    fn test_empty_desired_list_always_succeeds() {
        assert!(ValidationLayerNegotiator::new(&[]).is_supported(&[]));
    }

    #[test]
    fn test_success_iff_subset_in_any_order() {
        let pool = ["A", "B", "C", "D"];
        let available = installed(&["B", "D", "A"]);

        // Every ordered pair drawn from the pool, both orders
        for first in pool {
            for second in pool {
                let forward = names(&[first, second]);
                let backward = names(&[second, first]);
                let expected = available.iter().any(|l| l.name == first)
                    && available.iter().any(|l| l.name == second);

                assert_eq!(ValidationLayerNegotiator::new(&forward).is_supported(&available), expected);
                assert_eq!(ValidationLayerNegotiator::new(&backward).is_supported(&available), expected);
            }
        }
    }
}
