//! Validation layer message callback
//!
//! Not registered with any instance or messenger: instance creation does not
//! chain a messenger create info, so validation output goes to the loader's
//! default sink.

use ash::vk;
use std::borrow::Cow;
use std::ffi::{c_void, CStr};

/// Debug callback for validation layers
///
/// # Safety
/// `callback_data` must be null or point to a valid callback data struct whose
/// `p_message` is null or a NUL-terminated string.
pub unsafe extern "system" fn debug_callback(
    message_severity: vk::DebugUtilsMessageSeverityFlagsEXT,
    message_type: vk::DebugUtilsMessageTypeFlagsEXT,
    callback_data: *const vk::DebugUtilsMessengerCallbackDataEXT,
    _user_data: *mut c_void,
) -> vk::Bool32 {
    let message = if callback_data.is_null() || (*callback_data).p_message.is_null() {
        Cow::Borrowed("<no message>")
    } else {
        CStr::from_ptr((*callback_data).p_message).to_string_lossy()
    };

    log::error!("[ValidationLayer] {message_severity:?} {message_type:?} - {message}");

    vk::FALSE
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn test_callback_never_aborts_the_call() {
        let message = CString::new("vkCreateBuffer: size is zero").unwrap();
        let data = vk::DebugUtilsMessengerCallbackDataEXT {
            p_message: message.as_ptr(),
            ..Default::default()
        };

        let result = unsafe {
            debug_callback(
                vk::DebugUtilsMessageSeverityFlagsEXT::ERROR,
                vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION,
                &data,
                std::ptr::null_mut(),
            )
        };
        assert_eq!(result, vk::FALSE);
    }

    #[test]
    fn test_callback_tolerates_null_data() {
        let result = unsafe {
            debug_callback(
                vk::DebugUtilsMessageSeverityFlagsEXT::WARNING,
                vk::DebugUtilsMessageTypeFlagsEXT::GENERAL,
                std::ptr::null(),
                std::ptr::null_mut(),
            )
        };
        assert_eq!(result, vk::FALSE);
    }
}
