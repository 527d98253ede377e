// Generated by vk_convert_gen. Do not edit.

pub mod vk_convert {
    use super::*;

    /// Marker for pairs of types that are safe to reinterpret between.
    ///
    /// `Self` and `C` have identical size and alignment: every impl emitted
    /// below sits behind a `const` layout assertion, and the identity impl is
    /// trivially exact. The conversions are zero-cost pointer reinterprets.
    pub unsafe trait VkCConvert<C>: Sized {
        #[inline]
        fn convert(&self) -> &C {
            unsafe { &*(self as *const Self as *const C) }
        }

        #[inline]
        fn convert_mut(&mut self) -> &mut C {
            unsafe { &mut *(self as *mut Self as *mut C) }
        }

        #[inline]
        fn convert_ptr(ptr: *const Self) -> *const C {
            ptr as *const C
        }
    }

    unsafe impl<U> VkCConvert<U> for U {}

    macro_rules! vk_c_convert {
        ($vk:ty, $c:ty) => {
            const _: () = {
                assert!(
                    ::std::mem::size_of::<$vk>() == ::std::mem::size_of::<$c>(),
                    concat!("size mismatch between ", stringify!($vk), " and ", stringify!($c))
                );
                assert!(
                    ::std::mem::align_of::<$vk>() == ::std::mem::align_of::<$c>(),
                    concat!("alignment mismatch between ", stringify!($vk), " and ", stringify!($c))
                );
            };
            unsafe impl VkCConvert<$c> for $vk {}
            unsafe impl VkCConvert<$vk> for $c {}
        };
    }

