use crate::config::Config;
use crate::descriptor::Descriptor;
use crate::error::{FlakeError, Result};
use crate::generator::FlakeGenerator;
use crate::packages::split_packages;
use crate::platform;
use clap::error::ErrorKind;
use clap::Parser;
use log::debug;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "flakegen")]
#[command(version, about = "Generate a Nix dev-shell flake", long_about = None)]
pub struct Args {
    /// Project name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Project language (go, python, rust get default packages)
    #[arg(value_name = "LANGUAGE")]
    pub language: String,

    /// Comma-separated list of extra packages
    #[arg(short, long, value_name = "PACKAGES", allow_hyphen_values = true)]
    pub packages: Option<String>,

    /// Flake description (default: "Dev Shell Flake")
    #[arg(short, long, allow_hyphen_values = true)]
    pub description: Option<String>,

    /// Nix system to target instead of the host's
    #[arg(short, long)]
    pub system: Option<String>,

    /// nixpkgs input URL (default: nixpkgs/nixos-unstable)
    #[arg(long, value_name = "URL")]
    pub nixpkgs: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Anything after the first extra positional; ignored
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true)]
    pub rest: Vec<String>,
}

/// Parse a full argument list, program name first.
///
/// Missing positionals become [`FlakeError::Usage`], `--help` and
/// `--version` come back as [`FlakeError::Clap`] for the caller to print, and
/// every other clap failure becomes [`FlakeError::FlagParse`].
pub fn parse_from<I, T>(args: I) -> Result<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = args
        .first()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "flakegen".to_string());

    Args::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::MissingRequiredArgument => FlakeError::Usage { program },
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => FlakeError::Clap(err),
        _ => FlakeError::FlagParse(err.render().to_string()),
    })
}

impl Args {
    fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                Config::load(path).map_err(FlakeError::Config)
            }
            None => Ok(Config::default()),
        }
    }

    /// Assemble the descriptor: flags first, then the
    /// config file, then built-in defaults.
    pub fn descriptor(&self) -> Result<Descriptor> {
        let config = self.load_config()?;
        if !self.rest.is_empty() {
            debug!("Ignoring trailing arguments: {:?}", self.rest);
        }

        let user_packages = self
            .packages
            .as_deref()
            .map(split_packages)
            .unwrap_or_default();
        let description = self
            .description
            .clone()
            .filter(|d| !d.is_empty())
            .or(config.description);
        let system = self
            .system
            .clone()
            .or(config.system)
            .unwrap_or_else(platform::host_system);

        let mut descriptor = Descriptor::new(
            self.name.clone(),
            self.language.clone(),
            user_packages,
            description,
            system,
        );
        if let Some(nixpkgs) = self.nixpkgs.clone().or(config.nixpkgs) {
            descriptor = descriptor.with_nixpkgs(nixpkgs);
        }

        debug!("Packages: {:?}", descriptor.packages);
        debug!("System: {}", descriptor.system);
        Ok(descriptor)
    }
}

/// Render the flake for `args` and write it to `out` in one piece.
pub fn run(args: &Args, out: &mut dyn Write) -> Result<()> {
    let descriptor = args.descriptor()?;
    let generator = FlakeGenerator::for_descriptor(&descriptor)?;
    let flake = generator.render(&descriptor)?;

    out.write_all(flake.as_bytes())?;
    out.flush()?;
    Ok(())
}
