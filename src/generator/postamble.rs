}

pub use self::vk_convert::VkCConvert as Vkc;
