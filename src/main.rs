use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;

use vk_convert_gen::registry::{RegistrySource, VkRegistry, VK_XML_URL};
use vk_convert_gen::GenConfig;

/// Emits the Vulkan wrapper/C conversion module on standard output.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path or http(s) URL of the Vulkan XML registry.
    #[arg(long, default_value = VK_XML_URL)]
    registry: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let source = RegistrySource::locate(&args.registry);
    let registry = VkRegistry::load(&source)
        .with_context(|| format!("failed to load registry from `{}`", args.registry))?;

    // The registry is fetched and parsed in full before the first byte goes
    // out, so a bad source never leaves a truncated module behind.
    let stdout = io::stdout();
    let mut sink = io::BufWriter::new(stdout.lock());
    registry.gen_convert(&mut sink, GenConfig::default())?;
    sink.flush()?;

    Ok(())
}
