use std::io::{self, Write};

use boolinator::Boolinator;
use tracing::debug;

use crate::registry::{VkCategory, VkRegistry, VkTypeEntry};

/// Opens the generated module and defines the conversion trait, the identity
/// impl and the `vk_c_convert!` macro.
const PREAMBLE: &str = include_str!("preamble.rs");
/// Closes the generated module, scoping the macro with it, and re-exports the
/// trait under its short alias.
const POSTAMBLE: &str = include_str!("postamble.rs");

/// Handle types declared through `VK_DEFINE_HANDLE` blocks. Their names live
/// in a child element rather than a `name` attribute, so the registry sweep
/// never sees them; the pairs are small, stable and maintained by hand.
pub const HANDLE_CONVERSIONS: &[(&str, &str)] = &[
    ("BufferView", "VkBufferView"),
    ("CommandPool", "VkCommandPool"),
    ("Buffer", "VkBuffer"),
    ("DescriptorPool", "VkDescriptorPool"),
    ("DescriptorSet", "VkDescriptorSet"),
    ("DescriptorSetLayout", "VkDescriptorSetLayout"),
    ("Device", "VkDevice"),
    ("DeviceMemory", "VkDeviceMemory"),
    ("Event", "VkEvent"),
    ("Fence", "VkFence"),
    ("Semaphore", "VkSemaphore"),
    ("Image", "VkImage"),
    ("ImageView", "VkImageView"),
    ("Pipeline", "VkPipeline"),
    ("PipelineCache", "VkPipelineCache"),
    ("PipelineLayout", "VkPipelineLayout"),
    ("QueryPool", "VkQueryPool"),
    ("RenderPass", "VkRenderPass"),
    ("Sampler", "VkSampler"),
    ("ShaderModule", "VkShaderModule"),
    ("SwapchainKHR", "VkSwapchainKHR"),
    ("Queue", "VkQueue"),
    ("CommandBuffer", "VkCommandBuffer"),
];

/// Types excluded by hand: deprecated aliases, safety-critical-profile types
/// and other entries whose wrapper counterpart is missing or not layout-
/// compatible. Maintained as the registry evolves, never inferred.
const EXCLUDED_TYPES: &[&str] = &[
    "VkBaseInStructure",
    "VkBaseOutStructure",
    "VkPipelineCacheStageValidationIndexEntry",
    "VkPipelineCacheSafetyCriticalIndexEntry",
    "VkPipelineCacheHeaderVersionSafetyCriticalOne",
    "VkPhysicalDeviceVariablePointerFeatures",
    "VkPhysicalDeviceShaderDrawParameterFeatures",
    "VkFaultData",
    "VkFaultCallbackInfo",
    "VkPipelineOfflineCreateInfo",
    "VkPhysicalDeviceVulkanSC10Properties",
    "VkPipelinePoolSize",
    "VkDeviceObjectReservationCreateInfo",
    "VkCommandPoolMemoryReservationCreateInfo",
    "VkCommandPoolMemoryConsumption",
    "VkPhysicalDeviceVulkanSC10Features",
    "VkPhysicalDeviceDescriptorHeapTensorPropertiesARM",
];

/// Vendor and extension tags. Suffixed types are provisional or vendor
/// specific and have no stable wrapper counterpart; excluding by suffix trades
/// the occasional false exclusion for not hand-listing hundreds of names.
const EXCLUDED_SUFFIXES: &[&str] = &[
    "KHR", "EXT", "NV", "AMD", "INTEL", "GOOGLE", "FUCHSIA", "GGP", "NN", "SEC", "QNX", "QCOM",
    "MVK", "ANDROID", "APPLE", "VALVE", "AMDX", "OHOS",
];

/// Inclusion policy for the conversion generator.
///
/// The defaults describe the canonical registry: raw types are recognized by
/// the `Vk` prefix, wrappers are addressed through the `vk` namespace, and
/// the exclusion lists carry the hand-maintained policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenConfig<'a> {
    /// Prefix identifying raw names that belong to the API's namespace.
    pub type_prefix: &'a str,
    /// Module the wrapper types are addressed through in emitted code.
    pub wrapper_namespace: &'a str,
    /// Names excluded by hand even though they carry the prefix.
    pub excluded_types: &'a [&'a str],
    /// Name suffixes excluded as vendor or extension variants.
    pub excluded_suffixes: &'a [&'a str],
}

impl<'a> Default for GenConfig<'a> {
    fn default() -> GenConfig<'a> {
        GenConfig {
            type_prefix: "Vk",
            wrapper_namespace: "vk",
            excluded_types: EXCLUDED_TYPES,
            excluded_suffixes: EXCLUDED_SUFFIXES,
        }
    }
}

/// Why an entry never reached classification. Skipped entries leave no trace
/// in the output, not even an audit line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    /// The entry carries no `name` attribute. Expected for handle blocks,
    /// not a data error.
    Unnamed,
    /// The category is neither `struct` nor `handle`.
    ForeignCategory,
}

/// Why a classified entry is audited but left without a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// The name does not carry the configured type prefix.
    ForeignNamespace,
    /// The name is on the hand-maintained exclusion list.
    Listed,
    /// The name ends with a vendor or extension suffix.
    VendorSuffix,
}

/// A wrapper/raw name pair a conversion is emitted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionPair<'e> {
    /// Wrapper-local name, without its namespace qualifier.
    pub wrapper: &'e str,
    /// The raw C name as the registry spells it.
    pub c_name: &'e str,
}

/// Outcome of running the inclusion policy over one registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision<'e> {
    Skipped(Skip),
    Excluded { name: &'e str, reason: Exclusion },
    Included(ConversionPair<'e>),
}

impl<'a> GenConfig<'a> {
    /// Runs the inclusion policy over one entry. The rules apply in order and
    /// the first match wins; names are never inspected beyond prefix, suffix
    /// and list membership.
    pub fn decide<'e>(&self, entry: &'e VkTypeEntry) -> Decision<'e> {
        let name = match &entry.name {
            Some(name) => name.as_str(),
            None => return Decision::Skipped(Skip::Unnamed),
        };
        match entry.category {
            VkCategory::Struct | VkCategory::Handle => (),
            VkCategory::Other => return Decision::Skipped(Skip::ForeignCategory),
        }

        let Some(wrapper) = self.wrapper_name(name) else {
            return Decision::Excluded { name, reason: Exclusion::ForeignNamespace };
        };
        if self.excluded_types.contains(&name) {
            return Decision::Excluded { name, reason: Exclusion::Listed };
        }
        if self.excluded_suffixes.iter().any(|suffix| name.ends_with(suffix)) {
            return Decision::Excluded { name, reason: Exclusion::VendorSuffix };
        }

        Decision::Included(ConversionPair { wrapper, c_name: name })
    }

    /// Strips the type prefix to obtain the wrapper-local name. A name that
    /// is nothing but the prefix has no wrapper either.
    fn wrapper_name<'e>(&self, name: &'e str) -> Option<&'e str> {
        name.strip_prefix(self.type_prefix)
            .and_then(|wrapper| (!wrapper.is_empty()).as_some(wrapper))
    }
}

impl VkRegistry {
    /// Writes the complete generated conversion module to `sink`.
    ///
    /// Every classified entry leaves one audit comment, in registry order, so
    /// an operator can diff two registry snapshots and see exactly which
    /// types were considered. Included entries are followed by their
    /// `vk_c_convert!` invocation; the hand-listed handle pairs and the
    /// module close come last. The macro never escapes the emitted module.
    pub fn gen_convert<W: Write>(&self, sink: &mut W, config: GenConfig) -> io::Result<()> {
        let (mut classified, mut included) = (0u32, 0u32);

        sink.write_all(PREAMBLE.as_bytes())?;

        for entry in self.types() {
            match config.decide(entry) {
                Decision::Skipped(_) => (),
                Decision::Excluded { name, .. } => {
                    classified += 1;
                    writeln!(sink, "    // {} {}", entry.category, name)?;
                }
                Decision::Included(pair) => {
                    classified += 1;
                    included += 1;
                    writeln!(sink, "    // {} {}", entry.category, pair.c_name)?;
                    writeln!(
                        sink,
                        "    vk_c_convert!({}::{}, {});",
                        config.wrapper_namespace, pair.wrapper, pair.c_name
                    )?;
                }
            }
        }

        writeln!(sink)?;
        for (wrapper, c_name) in HANDLE_CONVERSIONS {
            writeln!(
                sink,
                "    vk_c_convert!({}::{}, {});",
                config.wrapper_namespace, wrapper, c_name
            )?;
        }
        sink.write_all(POSTAMBLE.as_bytes())?;

        debug!(classified, included, "generated conversion module");
        Ok(())
    }
}
