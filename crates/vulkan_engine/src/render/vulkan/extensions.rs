//! Instance extension assembly

use ash::extensions::ext::DebugUtils;

/// Debug instrumentation extension requested alongside validation layers
pub fn debug_utils_extension_name() -> String {
    DebugUtils::name().to_string_lossy().into_owned()
}

/// Assemble the instance extensions to request
///
/// The window-mandated names come first, in their original order, followed by
/// the debug utils extension when validation is enabled. The list is not
/// checked against what the driver supports; an unsupported name surfaces as
/// an instance construction failure.
pub fn collect_required_extensions(mandated: &[String], enable_validation: bool) -> Vec<String> {
    log::info!("Window required extensions: {mandated:?}");

    let mut extensions = mandated.to_vec();
    if enable_validation {
        extensions.push(debug_utils_extension_name());
    }

    extensions
}
