//! # Terraform provider specification to Go code generator
//!
//! '''bash
//! cargo run --bin tfgogen -- --help
//! '''

use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::PathBuf;
use structopt::StructOpt;
use tfschema_gogen::config::{CodeGeneratorConfig, GeneratorType};
use tfschema_gogen::emit::CodeGenerator;
use tfschema_gogen::schema::GeneratorSchemas;
use tfschema_gogen::spec::{read_spec_from_file, Specification};
use tfschema_gogen::templates::Templates;
use tracing::{info, Level};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "Terraform provider specification to Go transformer",
    about = "Generate Terraform Plugin Framework schema, model and custom type code from a provider specification"
)]
struct Options {
    /// Path to the JSON-encoded provider specification.
    #[structopt(long, parse(from_os_str))]
    input: PathBuf,

    /// Output directory. Files are written to stdout when absent.
    #[structopt(long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Schemas to generate: all, resources, data-sources or provider.
    #[structopt(long, default_value = "all")]
    kind: String,

    /// Go package name used for every file instead of one package per schema.
    #[structopt(long)]
    package: Option<String>,

    /// Text of the comment written at the top of every file.
    #[structopt(long)]
    header: Option<String>,

    /// Enable debug logging.
    #[structopt(short, long)]
    verbose: bool,
}

fn generator_types(kind: &str) -> Result<Vec<GeneratorType>> {
    if kind == "all" {
        return Ok(vec![
            GeneratorType::Resource,
            GeneratorType::DataSource,
            GeneratorType::Provider,
        ]);
    }
    match kind.parse() {
        Ok(generator_type) => Ok(vec![generator_type]),
        Err(e) => bail!(e),
    }
}

fn schemas(spec: &Specification, generator_type: GeneratorType) -> Result<GeneratorSchemas> {
    let schemas = match generator_type {
        GeneratorType::Resource => GeneratorSchemas::resources(spec),
        GeneratorType::DataSource => GeneratorSchemas::data_sources(spec),
        GeneratorType::Provider => GeneratorSchemas::provider(spec),
    };
    schemas.with_context(|| format!("Error building {} schemas", generator_type))
}

fn main() -> Result<()> {
    let options = Options::from_args();

    tracing_subscriber::fmt()
        .with_max_level(if options.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let spec = read_spec_from_file(&options.input).with_context(|| {
        format!(
            "Error reading provider specification {}",
            options.input.display()
        )
    })?;
    let templates = Templates::new().context("Error compiling templates")?;

    for generator_type in generator_types(&options.kind)? {
        let mut config = CodeGeneratorConfig::new().with_generator_type(generator_type);
        if let Some(package) = &options.package {
            config = config.with_package_name(package.clone());
        }
        if let Some(header) = &options.header {
            config = config.with_header(header.clone());
        }

        let schemas = schemas(&spec, generator_type)?;
        let files = CodeGenerator::new(&config, &templates)
            .output_all(&schemas)
            .with_context(|| format!("Error generating {} code", generator_type))?;

        for (path, source) in files {
            match &options.output {
                Some(dir) => {
                    let target = dir.join(&path);
                    if let Some(parent) = target.parent() {
                        std::fs::create_dir_all(parent)
                            .with_context(|| format!("Error creating {}", parent.display()))?;
                    }
                    std::fs::write(&target, source)
                        .with_context(|| format!("Error writing {}", target.display()))?;
                    info!("wrote {}", target.display());
                }
                None => {
                    let stdout = std::io::stdout();
                    let mut out = stdout.lock();
                    out.write_all(source.as_bytes())
                        .context("Error writing generated code")?;
                }
            }
        }
    }
    Ok(())
}
